/*!
 * Alignment request payloads.
 *
 * The transport boundary accepts a JSON document carrying base64-encoded
 * audio and raw transcript text, and answers either the timed SRT output
 * or a structured error. Payload problems map to distinguishable error
 * kinds: unreadable JSON is a bad request, an undecodable audio field is
 * invalid audio.
 */

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use log::warn;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

use crate::errors::RequestError;
use crate::file_utils::FileManager;

/// One alignment request: audio plus its transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentRequest {
    /// Base64-encoded audio data
    pub audio: String,

    /// Raw transcript text
    pub text: String,

    /// Transcript language code; falls back to the configured language
    #[serde(default)]
    pub language: Option<String>,
}

/// Successful alignment response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentResponse {
    /// The aligned subtitles as one SRT document
    pub srt: String,
}

/// Structured error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Client-facing error message
    pub error: String,
}

impl AlignmentRequest {
    /// Parse a request from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        serde_json::from_str(json)
            .map_err(|e| RequestError::BadRequest(format!("Invalid request payload: {}", e)))
    }

    /// Decode the base64 audio field into raw bytes
    pub fn decode_audio(&self) -> Result<Vec<u8>, RequestError> {
        let data = BASE64_STANDARD
            .decode(self.audio.trim())
            .map_err(|e| RequestError::InvalidAudio(format!("Base64 decode failed: {}", e)))?;

        if data.is_empty() {
            return Err(RequestError::InvalidAudio("Audio data is empty".to_string()));
        }

        Ok(data)
    }

    /// Decode the audio and write it to a temp file the aligner can read
    pub fn write_audio_to_temp(&self, dir: &Path) -> Result<tempfile::NamedTempFile, RequestError> {
        let data = self.decode_audio()?;

        if !FileManager::is_audio_header(&data) {
            // Not fatal, the sniff list is short and the engine decodes
            // through ffmpeg anyway
            warn!("Audio data has no recognized container signature");
        }

        let mut file = tempfile::Builder::new()
            .prefix("subalign_")
            .suffix(".wav")
            .tempfile_in(dir)
            .map_err(|e| RequestError::InvalidAudio(format!("Failed to create temp audio file: {}", e)))?;

        file.write_all(&data)
            .map_err(|e| RequestError::InvalidAudio(format!("Failed to write temp audio file: {}", e)))?;
        file.flush()
            .map_err(|e| RequestError::InvalidAudio(format!("Failed to flush temp audio file: {}", e)))?;

        Ok(file)
    }
}

impl AlignmentResponse {
    /// Serialize the response to JSON
    pub fn to_json(&self) -> String {
        // Serializing a struct of plain strings cannot fail
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl ErrorResponse {
    /// Build an error response from any displayable error
    pub fn from_error<E: std::fmt::Display>(error: &E) -> Self {
        ErrorResponse {
            error: error.to_string(),
        }
    }

    /// Serialize the response to JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
