// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use serde::{Deserialize, Deserializer};

/// Deserialize a JSON `null` as the type's default value.
///
/// The API sends `null` for empty collections in several responses.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn is_zero(value: &u32) -> bool {
    *value == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Holder {
        #[serde(deserialize_with = "null_as_default")]
        items: Vec<String>,
    }

    #[test]
    fn test_null_and_missing_read_as_empty() {
        let from_null: Holder = serde_json::from_str(r#"{"items": null}"#).unwrap();
        let from_missing: Holder = serde_json::from_str("{}").unwrap();
        assert!(from_null.items.is_empty());
        assert!(from_missing.items.is_empty());
    }

    #[test]
    fn test_present_value_is_kept() {
        let holder: Holder = serde_json::from_str(r#"{"items": ["a", "b"]}"#).unwrap();
        assert_eq!(holder.items, vec!["a", "b"]);
    }
}
