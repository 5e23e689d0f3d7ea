// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Autodiscovery script shapes for `api/v2/autodiscovery-scripts`

use serde::{Deserialize, Serialize};

use crate::macros::api_enum;

api_enum! {
    /// How a newly registered target picks its name
    pub enum TargetNameOption {
        Timestamp => "Timestamp",
        DigitalOceanMetadata => "DigitalOceanMetadata",
        AwsEc2Metadata => "AwsEc2Metadata",
        BashHostName => "BashHostName",
    }
}

/// Both fields are always sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BzeroBashAutodiscoveryOptions {
    pub target_name_option: TargetNameOption,
    pub environment_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BzeroBashAutodiscoveryScript {
    #[serde(rename = "autodiscoveryScript")]
    pub script: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_options_encode_both_fields() {
        let opts = BzeroBashAutodiscoveryOptions {
            target_name_option: TargetNameOption::BashHostName,
            environment_id: "e-1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&opts).unwrap(),
            json!({"targetNameOption": "BashHostName", "environmentId": "e-1"})
        );
    }

    #[test]
    fn test_script_key() {
        let script: BzeroBashAutodiscoveryScript =
            serde_json::from_value(json!({"autodiscoveryScript": "#!/bin/bash\necho hi"})).unwrap();
        assert!(script.script.starts_with("#!/bin/bash"));
    }
}
