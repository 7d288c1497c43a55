/*!
 * Error types for the subalign application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 * The variants are deliberately distinguishable so callers can react
 * differently to an aligner failure (retryable) versus a malformed request
 * (fail fast).
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur while invoking the external alignment engine
#[derive(Error, Debug)]
pub enum AlignerError {
    /// The engine executable could not be found or started
    #[error("Alignment engine is not available: {0}")]
    NotAvailable(String),

    /// The engine ran but exited with a failure status
    #[error("Alignment failed: {0}")]
    ExecutionFailed(String),

    /// The engine did not finish within the configured timeout
    #[error("Alignment timed out after {0} seconds")]
    Timeout(u64),

    /// The engine reported success but produced no output file
    #[error("Alignment produced no output: {0}")]
    MissingOutput(String),

    /// The engine's output could not be parsed as SRT
    #[error("Failed to parse alignment output: {0}")]
    MalformedOutput(String),
}

/// Errors that can occur while decoding an alignment request payload
#[derive(Error, Debug)]
pub enum RequestError {
    /// The request payload itself is malformed (unreadable or invalid JSON)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The audio field could not be decoded into usable audio data
    #[error("Invalid audio: {0}")]
    InvalidAudio(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the alignment engine
    #[error("Aligner error: {0}")]
    Aligner(#[from] AlignerError),

    /// Error from request decoding
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
