// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Session recording metadata for `api/v2/session-recordings`

use serde::{Deserialize, Serialize};

use crate::common::TargetType;
use crate::connections::ConnectionState;
use crate::timestamp::Timestamp;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionRecording {
    pub connection_id: String,
    pub time_created: Timestamp,
    pub connection_state: ConnectionState,
    pub target_id: String,
    pub target_type: TargetType,
    pub target_name: String,
    pub target_user: String,
    pub input_recorded: bool,
    pub subject_id: String,
    /// Recording size in bytes
    pub size: u64,
}
