/*!
 * Alignment engine implementations.
 *
 * This module contains the boundary to the external forced-alignment
 * oracle:
 * - aeneas: the real engine, invoked as an external Python process
 * - mock: a deterministic in-process engine for testing
 */

use async_trait::async_trait;
use std::fmt::Debug;
use std::path::Path;

use crate::errors::AlignerError;
use crate::subtitle_processor::SubtitleEntry;

/// Common trait for alignment engines
///
/// An aligner consumes an audio file plus an ordered list of text fragments
/// (one per subtitle line) and returns the same fragments with start and end
/// timestamps in the audio.
#[async_trait]
pub trait Aligner: Send + Sync + Debug {
    /// Align the fragments against the audio recording
    ///
    /// # Arguments
    /// * `audio_path` - Path to the audio file
    /// * `fragments` - Ordered fragments, one per subtitle line
    ///
    /// # Returns
    /// * Timed entries in fragment order, or an [`AlignerError`]
    async fn align(
        &self,
        audio_path: &Path,
        fragments: &[String],
    ) -> Result<Vec<SubtitleEntry>, AlignerError>;

    /// Check that the engine can actually run on this machine
    async fn check_available(&self) -> Result<(), AlignerError>;
}

pub mod aeneas;
pub mod mock;

pub use aeneas::AeneasAligner;
pub use mock::MockAligner;
