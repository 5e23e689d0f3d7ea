// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Okta signing keys served by `api/v2/okta-public-keys`

use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// A JSON Web Key as published by Okta
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OktaPublicKey {
    pub kty: String,
    pub e: String,
    pub kid: String,
    pub n: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListOktaPublicKeysResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub keys: Vec<OktaPublicKey>,
}

impl ListOktaPublicKeysResponse {
    pub fn find(&self, kid: &str) -> Option<&OktaPublicKey> {
        self.keys.iter().find(|k| k.kid == kid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_find_key_by_id() {
        let resp: ListOktaPublicKeysResponse = serde_json::from_value(json!({
            "keys": [
                {"kty": "RSA", "e": "AQAB", "kid": "k1", "n": "abc"},
                {"kty": "RSA", "e": "AQAB", "kid": "k2", "n": "def"}
            ]
        }))
        .unwrap();
        assert_eq!(resp.find("k2").map(|k| k.n.as_str()), Some("def"));
        assert!(resp.find("k3").is_none());
    }
}
