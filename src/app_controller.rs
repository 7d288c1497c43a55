use anyhow::Result;
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle, MultiProgress};

use crate::aligners::{Aligner, AeneasAligner};
use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::{FileManager, FileType};
use crate::request::{AlignmentRequest, AlignmentResponse};
use crate::segmenter;
use crate::subtitle_processor::SubtitleCollection;

// @module: Application controller for audio/transcript alignment

/// Main application controller for forced alignment
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.language.is_empty()
    }

    /// Run the main workflow for one audio file
    ///
    /// The transcript defaults to a sibling `.txt` file; the output defaults
    /// to `<stem>.srt` next to the audio file.
    pub async fn run(
        &self,
        audio_file: PathBuf,
        transcript_file: Option<PathBuf>,
        output_file: Option<PathBuf>,
        force_overwrite: bool,
    ) -> Result<()> {
        let aligner = AeneasAligner::new(self.config.aligner.clone(), &self.config.language)?;
        let multi_progress = MultiProgress::new();
        self.run_with_aligner(
            &aligner,
            audio_file,
            transcript_file,
            output_file,
            &multi_progress,
            force_overwrite,
        )
        .await
    }

    /// Run one alignment with an explicit engine, reporting progress
    pub async fn run_with_aligner(
        &self,
        aligner: &dyn Aligner,
        audio_file: PathBuf,
        transcript_file: Option<PathBuf>,
        output_file: Option<PathBuf>,
        multi_progress: &MultiProgress,
        force_overwrite: bool,
    ) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        if !audio_file.exists() {
            return Err(anyhow::anyhow!("Audio file does not exist: {:?}", audio_file));
        }

        let file_type = FileManager::detect_file_type(&audio_file)?;
        if file_type != FileType::Audio {
            warn!("Input does not look like an audio file: {:?}", audio_file);
        }

        // Resolve the transcript next to the audio when not given explicitly
        let transcript_file = transcript_file
            .unwrap_or_else(|| FileManager::sibling_transcript_path(&audio_file));
        if !transcript_file.exists() {
            return Err(anyhow::anyhow!(
                "Transcript file does not exist: {:?}",
                transcript_file
            ));
        }

        let output_path = output_file.unwrap_or_else(|| {
            let output_dir = audio_file
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            FileManager::generate_output_path(&audio_file, output_dir)
        });

        if output_path.exists() && !force_overwrite {
            warn!("Skipping file, subtitles already exist (use -f to force overwrite)");
            return Ok(());
        }

        // Segment the transcript into subtitle-sized fragments
        let text = FileManager::read_to_string(&transcript_file)?;
        let fragments = segmenter::segment(&text);
        if fragments.is_empty() {
            return Err(anyhow::anyhow!(
                "Transcript produced no fragments: {:?}",
                transcript_file
            ));
        }
        debug!("Segmented transcript into {} fragment(s)", fragments.len());

        let collection = self
            .align_with_progress(aligner, &audio_file, &fragments, multi_progress)
            .await?;

        collection.write_to_srt(&output_path)?;
        info!("Success: {}", output_path.display());

        let elapsed = start_time.elapsed();
        info!("Alignment completed in {}.", Self::format_duration(elapsed));

        Ok(())
    }

    /// Invoke the aligner behind a spinner from the provided MultiProgress
    async fn align_with_progress(
        &self,
        aligner: &dyn Aligner,
        audio_file: &Path,
        fragments: &[String],
        multi_progress: &MultiProgress,
    ) -> Result<SubtitleCollection> {
        let spinner = multi_progress.add(ProgressBar::new_spinner());
        let template_result = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(template_result);
        spinner.set_message(format!("Aligning {} fragments", fragments.len()));
        spinner.enable_steady_tick(std::time::Duration::from_millis(120));

        info!("Aligning, please wait…");

        let result = aligner.align(audio_file, fragments).await;

        // Clear instead of finishing so only the folder bar stays visible
        // when processing multiple files
        spinner.finish_and_clear();

        let entries = result.map_err(AppError::Aligner)?;

        if entries.len() != fragments.len() {
            warn!(
                "Aligner returned {} entries for {} fragments",
                entries.len(),
                fragments.len()
            );
        }

        let mut collection = SubtitleCollection::new(
            audio_file.to_path_buf(),
            self.config.language.clone(),
        );
        collection.entries = entries;

        Ok(collection)
    }

    /// Run the workflow in folder mode, aligning every audio file that has
    /// a sibling transcript. Files with existing subtitles are skipped.
    pub async fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool) -> Result<()> {
        let aligner = AeneasAligner::new(self.config.aligner.clone(), &self.config.language)?;
        self.run_folder_with_aligner(&aligner, input_dir, force_overwrite).await
    }

    /// Folder mode with an explicit engine
    pub async fn run_folder_with_aligner(
        &self,
        aligner: &dyn Aligner,
        input_dir: PathBuf,
        force_overwrite: bool,
    ) -> Result<()> {
        // Start timing the process
        let start_time = std::time::Instant::now();

        if !input_dir.exists() {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let audio_files = FileManager::find_audio_files(&input_dir)?;
        if audio_files.is_empty() {
            return Err(anyhow::anyhow!("No audio files found in directory: {:?}", input_dir));
        }

        // Create multi-progress instance for multiple file processing
        let multi_progress = MultiProgress::new();

        let folder_pb = multi_progress.add(ProgressBar::new(audio_files.len() as u64));
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("█▓▒░"));
        folder_pb.set_message("Processing files");

        // Track success and failure counts
        let mut success_count = 0;
        let mut error_count = 0;
        let mut skip_count = 0;

        for audio_file in audio_files.iter() {
            let file_name = audio_file
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());

            folder_pb.set_message(format!("Processing: {}", file_name));

            // Audio files without a transcript are silently part of the skip
            // count; they may just be unrelated recordings
            let transcript = FileManager::sibling_transcript_path(audio_file);
            if !transcript.exists() {
                debug!("No transcript for {:?}, skipping", audio_file);
                skip_count += 1;
                folder_pb.inc(1);
                continue;
            }

            let output_dir = match audio_file.parent() {
                Some(parent) => parent.to_path_buf(),
                None => input_dir.clone(),
            };
            let output_path = FileManager::generate_output_path(audio_file, &output_dir);
            if output_path.exists() && !force_overwrite {
                warn!("Skipping file, subtitles already exist (use -f to force overwrite)");
                skip_count += 1;
                folder_pb.inc(1);
                continue;
            }

            match self
                .run_with_aligner(
                    aligner,
                    audio_file.clone(),
                    Some(transcript),
                    Some(output_path),
                    &multi_progress,
                    force_overwrite,
                )
                .await
            {
                Ok(_) => {
                    success_count += 1;
                },
                Err(e) => {
                    error!("Error processing file {}: {}", file_name, e);
                    error_count += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder processing complete");

        let duration = start_time.elapsed();
        info!(
            "Folder processing completed: {} aligned, {} skipped, {} errors - Duration: {}",
            success_count,
            skip_count,
            error_count,
            Self::format_duration(duration)
        );

        Ok(())
    }

    /// Handle one JSON alignment request and return the response JSON
    pub async fn run_request(&self, payload_path: &Path) -> Result<String, AppError> {
        let payload = FileManager::read_to_string(payload_path)
            .map_err(|e| AppError::File(e.to_string()))?;
        let request = AlignmentRequest::from_json(&payload)?;

        let aligner = AeneasAligner::new(
            self.config.aligner.clone(),
            request.language.as_deref().unwrap_or(&self.config.language),
        )?;

        self.run_request_with_aligner(&aligner, &request).await
    }

    /// Handle a decoded request with an explicit engine
    pub async fn run_request_with_aligner(
        &self,
        aligner: &dyn Aligner,
        request: &AlignmentRequest,
    ) -> Result<String, AppError> {
        let temp_dir = self
            .config
            .aligner
            .temp_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir);
        FileManager::ensure_dir(&temp_dir).map_err(|e| AppError::File(e.to_string()))?;

        // The temp audio file lives as long as this handle
        let audio_file = request.write_audio_to_temp(&temp_dir)?;

        let fragments = segmenter::segment(&request.text);
        if fragments.is_empty() {
            return Err(AppError::Request(crate::errors::RequestError::BadRequest(
                "Transcript text produced no fragments".to_string(),
            )));
        }

        let entries = aligner
            .align(audio_file.path(), &fragments)
            .await
            .map_err(AppError::Aligner)?;

        let mut collection = SubtitleCollection::new(
            audio_file.path().to_path_buf(),
            request
                .language
                .clone()
                .unwrap_or_else(|| self.config.language.clone()),
        );
        collection.entries = entries;

        let response = AlignmentResponse {
            srt: collection.to_srt_string(),
        };

        Ok(response.to_json())
    }

    // Format duration in a human-readable format
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
