use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

/// Audio extensions accepted without content sniffing
/// This list is not exhaustive but covers the formats ffmpeg-backed
/// alignment handles in practice
const AUDIO_EXTENSIONS: [&str; 8] = [
    "wav", "mp3", "m4a", "aac", "flac", "ogg", "opus", "wma",
];

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    // @generates: Output path for an aligned subtitle file
    // @params: audio_file, output_dir
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        audio_file: P1,
        output_dir: P2,
    ) -> PathBuf {
        let audio_file = audio_file.as_ref();
        let output_dir = output_dir.as_ref();

        let stem = audio_file.file_stem().unwrap_or_default();

        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push_str(".srt");

        output_dir.join(output_filename)
    }

    /// Expected transcript path for an audio file (same stem, .txt extension)
    pub fn sibling_transcript_path<P: AsRef<Path>>(audio_file: P) -> PathBuf {
        audio_file.as_ref().with_extension("txt")
    }

    /// Find all audio files in a directory (recursive), sorted by path
    pub fn find_audio_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        for ext in AUDIO_EXTENSIONS {
            result.append(&mut Self::find_files(dir.as_ref(), ext)?);
        }
        result.sort();
        Ok(result)
    }

    /// Find files with a specific extension in a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let normalized_ext = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(normalized_ext) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Detect whether a file is an audio file or a plain-text transcript
    pub fn detect_file_type<P: AsRef<Path>>(path: P) -> Result<FileType> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(anyhow::anyhow!("File does not exist: {:?}", path));
        }

        // Check file extension first
        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy().to_lowercase();

            if ext_str == "txt" {
                return Ok(FileType::Transcript);
            }

            if AUDIO_EXTENSIONS.contains(&ext_str.as_str()) {
                return Ok(FileType::Audio);
            }
        }

        // Fall back to sniffing the magic bytes
        if let Ok(header) = Self::read_header(path, 12) {
            if Self::is_audio_header(&header) {
                return Ok(FileType::Audio);
            }

            // Printable ASCII/UTF-8 beginnings are treated as transcript text
            if !header.is_empty() && std::str::from_utf8(&header).is_ok() {
                return Ok(FileType::Transcript);
            }
        }

        Ok(FileType::Unknown)
    }

    fn read_header(path: &Path, len: usize) -> Result<Vec<u8>> {
        use std::io::Read;

        let mut file = fs::File::open(path)?;
        let mut buf = vec![0u8; len];
        let read = file.read(&mut buf)?;
        buf.truncate(read);
        Ok(buf)
    }

    /// Check a file header against known audio container signatures
    pub fn is_audio_header(header: &[u8]) -> bool {
        // RIFF....WAVE
        if header.len() >= 12 && &header[0..4] == b"RIFF" && &header[8..12] == b"WAVE" {
            return true;
        }

        // ID3-tagged or bare MPEG audio
        if header.starts_with(b"ID3") {
            return true;
        }
        if header.len() >= 2 && header[0] == 0xFF && (header[1] & 0xE0) == 0xE0 {
            return true;
        }

        header.starts_with(b"fLaC") || header.starts_with(b"OggS")
    }
}

/// Enum representing different file types
#[derive(Debug, PartialEq, Eq)]
pub enum FileType {
    /// Audio file accepted by the alignment engine
    Audio,
    /// Plain-text transcript
    Transcript,
    /// Unknown file type
    Unknown,
}
