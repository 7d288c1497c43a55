use async_trait::async_trait;
use anyhow::Result;
use log::{debug, error, info};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::aligners::Aligner;
use crate::app_config::AlignerConfig;
use crate::errors::AlignerError;
use crate::language_utils;
use crate::subtitle_processor::{SubtitleCollection, SubtitleEntry};

// @module: aeneas forced-alignment engine invocation

/// Aligner backed by the aeneas `execute_task` tool
///
/// aeneas is invoked as `python3 -m aeneas.tools.execute_task` with a plain
/// text file holding one fragment per line and an SRT output file. The task
/// configuration string is fixed apart from the language: subtitle-granular,
/// word-level alignment with SRT output.
#[derive(Debug)]
pub struct AeneasAligner {
    config: AlignerConfig,
    task_language: String,
}

impl AeneasAligner {
    /// Create an aligner for the given transcript language
    pub fn new(config: AlignerConfig, language: &str) -> Result<Self> {
        let task_language = language_utils::normalize_to_task_language(language)?;

        Ok(AeneasAligner {
            config,
            task_language,
        })
    }

    /// Task configuration string passed to execute_task
    fn task_config(&self) -> String {
        format!(
            "task_language={}|os_task_file_format=srt|is_text_type=plain|alignment_type=word|task_file_format=subtitle",
            self.task_language
        )
    }

    /// Directory for intermediate files
    fn temp_dir(&self) -> PathBuf {
        self.config
            .temp_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }

    /// Write the newline-joined fragments to a temp text file
    fn write_fragments_file(&self, fragments: &[String]) -> Result<tempfile::NamedTempFile, AlignerError> {
        let dir = self.temp_dir();
        std::fs::create_dir_all(&dir)
            .map_err(|e| AlignerError::ExecutionFailed(format!("Failed to create temp dir: {}", e)))?;

        let mut file = tempfile::Builder::new()
            .prefix("subalign_")
            .suffix(".txt")
            .tempfile_in(&dir)
            .map_err(|e| AlignerError::ExecutionFailed(format!("Failed to create temp text file: {}", e)))?;

        file.write_all(fragments.join("\n").as_bytes())
            .map_err(|e| AlignerError::ExecutionFailed(format!("Failed to write temp text file: {}", e)))?;
        file.flush()
            .map_err(|e| AlignerError::ExecutionFailed(format!("Failed to flush temp text file: {}", e)))?;

        Ok(file)
    }

    /// Reserve a temp path for the SRT output
    fn output_file_path(&self) -> Result<tempfile::TempPath, AlignerError> {
        let file = tempfile::Builder::new()
            .prefix("subalign_")
            .suffix(".srt")
            .tempfile_in(self.temp_dir())
            .map_err(|e| AlignerError::ExecutionFailed(format!("Failed to create temp output file: {}", e)))?;

        Ok(file.into_temp_path())
    }

    /// Keep only the lines of aeneas stderr worth surfacing to the user,
    /// stripping the progress banner and Python traceback frames
    fn filter_stderr(stderr: &str) -> String {
        let meaningful: Vec<&str> = stderr
            .lines()
            .map(str::trim)
            .filter(|line| {
                if line.is_empty() {
                    return false;
                }
                !line.starts_with("[INFO]")
                    && !line.starts_with("File \"")
                    && !line.starts_with("Traceback")
            })
            .collect();

        if meaningful.is_empty() {
            "unknown aeneas error (stderr was empty after filtering)".to_string()
        } else {
            meaningful.join("\n")
        }
    }
}

#[async_trait]
impl Aligner for AeneasAligner {
    async fn align(
        &self,
        audio_path: &Path,
        fragments: &[String],
    ) -> Result<Vec<SubtitleEntry>, AlignerError> {
        if !audio_path.exists() {
            return Err(AlignerError::ExecutionFailed(format!(
                "Audio file does not exist: {:?}",
                audio_path
            )));
        }

        let text_file = self.write_fragments_file(fragments)?;
        let output_path = self.output_file_path()?;

        debug!(
            "Running aeneas: {} fragment(s), language {}",
            fragments.len(),
            self.task_language
        );

        let aeneas_future = Command::new(&self.config.python)
            .args([
                "-m",
                "aeneas.tools.execute_task",
                audio_path.to_str().unwrap_or_default(),
                text_file.path().to_str().unwrap_or_default(),
                &self.task_config(),
                output_path.to_str().unwrap_or_default(),
            ])
            // On timeout the future is dropped; without this the aeneas
            // process would keep running orphaned
            .kill_on_drop(true)
            .output();

        let timeout_duration = std::time::Duration::from_secs(self.config.timeout_secs);
        let result = tokio::select! {
            result = aeneas_future => {
                result.map_err(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        AlignerError::NotAvailable(format!(
                            "Python interpreter not found: {}", self.config.python
                        ))
                    } else {
                        AlignerError::ExecutionFailed(format!("Failed to execute aeneas: {}", e))
                    }
                })?
            },
            _ = tokio::time::sleep(timeout_duration) => {
                return Err(AlignerError::Timeout(self.config.timeout_secs));
            }
        };

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let filtered = Self::filter_stderr(&stderr);
            error!("aeneas alignment failed: {}", filtered);
            return Err(AlignerError::ExecutionFailed(filtered));
        }

        let srt_content = std::fs::read_to_string(&output_path)
            .map_err(|e| AlignerError::MissingOutput(format!("{:?}: {}", output_path.to_path_buf(), e)))?;

        if srt_content.trim().is_empty() {
            return Err(AlignerError::MissingOutput(
                "aeneas produced an empty SRT file".to_string(),
            ));
        }

        let entries = SubtitleCollection::parse_srt_string(&srt_content)
            .map_err(|e| AlignerError::MalformedOutput(e.to_string()))?;

        // Persist intermediates on request instead of letting them drop
        if self.config.keep_temp_files {
            let (_, text_path) = text_file
                .keep()
                .map_err(|e| AlignerError::ExecutionFailed(format!("Failed to keep temp file: {}", e)))?;
            let srt_path = output_path.keep()
                .map_err(|e| AlignerError::ExecutionFailed(format!("Failed to keep temp file: {}", e)))?;
            info!("Keeping intermediate files: {:?}, {:?}", text_path, srt_path);
        }

        Ok(entries)
    }

    async fn check_available(&self) -> Result<(), AlignerError> {
        let output = Command::new(&self.config.python)
            .args(["-c", "import aeneas"])
            .output()
            .await
            .map_err(|e| {
                AlignerError::NotAvailable(format!(
                    "Python interpreter not found ({}): {}",
                    self.config.python, e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AlignerError::NotAvailable(format!(
                "aeneas is not importable: {}",
                Self::filter_stderr(&stderr)
            )));
        }

        Ok(())
    }
}
