// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use bz_api_contract::session_recordings::SessionRecording;
use tokio::io::AsyncWrite;

use crate::error::RestClientResult;

const SESSION_RECORDINGS_BASE_PATH: &str = "api/v2/session-recordings";

service_handle! {
    /// Recorded shell sessions under `api/v2/session-recordings`
    SessionRecordingsService
}

impl SessionRecordingsService<'_> {
    /// Recording of one connection as a single asciicast document
    pub async fn get_session_recording_file(&self, connection_id: &str) -> RestClientResult<String> {
        self.client
            .request_text(&format!("{SESSION_RECORDINGS_BASE_PATH}/{connection_id}"))
            .await
    }

    /// Stream the recording of one connection into `sink` without buffering it.
    /// Returns the number of bytes written.
    pub async fn download_session_recording_file<W>(
        &self,
        connection_id: &str,
        sink: &mut W,
    ) -> RestClientResult<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        self.client
            .request_raw(&format!("{SESSION_RECORDINGS_BASE_PATH}/{connection_id}"), sink)
            .await
    }

    pub async fn delete_session_recording_file(&self, connection_id: &str) -> RestClientResult<()> {
        self.client
            .delete(&format!("{SESSION_RECORDINGS_BASE_PATH}/{connection_id}"))
            .await
    }

    pub async fn list_session_recordings(&self) -> RestClientResult<Vec<SessionRecording>> {
        self.client.get(SESSION_RECORDINGS_BASE_PATH).await
    }
}
