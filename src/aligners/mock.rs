/*!
 * Mock aligner implementation for testing.
 *
 * This module provides a deterministic aligner that simulates different
 * behaviors:
 * - `MockAligner::working(duration_ms)` - Distributes the duration evenly
 *   over the fragments
 * - `MockAligner::failing()` - Always fails with an execution error
 */

use async_trait::async_trait;
use std::path::Path;

use crate::aligners::Aligner;
use crate::errors::AlignerError;
use crate::subtitle_processor::SubtitleEntry;

/// Behavior mode for the mock aligner
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds, spreading the recording duration evenly
    Working,
    /// Always fails with an execution error
    Failing,
}

/// Mock aligner for testing orchestration without aeneas installed
#[derive(Debug)]
pub struct MockAligner {
    /// Simulated recording duration in milliseconds
    duration_ms: u64,
    behavior: MockBehavior,
}

impl MockAligner {
    /// Create a mock that aligns fragments evenly over `duration_ms`
    pub fn working(duration_ms: u64) -> Self {
        MockAligner {
            duration_ms,
            behavior: MockBehavior::Working,
        }
    }

    /// Create a mock that always fails
    pub fn failing() -> Self {
        MockAligner {
            duration_ms: 0,
            behavior: MockBehavior::Failing,
        }
    }
}

#[async_trait]
impl Aligner for MockAligner {
    async fn align(
        &self,
        _audio_path: &Path,
        fragments: &[String],
    ) -> Result<Vec<SubtitleEntry>, AlignerError> {
        if self.behavior == MockBehavior::Failing {
            return Err(AlignerError::ExecutionFailed(
                "mock aligner configured to fail".to_string(),
            ));
        }

        if fragments.is_empty() {
            return Ok(Vec::new());
        }

        // Each fragment gets an equal slice, at least 1ms so entries validate
        let slice_ms = (self.duration_ms / fragments.len() as u64).max(1);

        let entries = fragments
            .iter()
            .enumerate()
            .map(|(i, fragment)| {
                let start = i as u64 * slice_ms;
                SubtitleEntry::new(i + 1, start, start + slice_ms, fragment.clone())
            })
            .collect();

        Ok(entries)
    }

    async fn check_available(&self) -> Result<(), AlignerError> {
        Ok(())
    }
}
