/*!
 * Tests for file and folder utilities
 */

use std::path::PathBuf;
use anyhow::Result;
use subalign::file_utils::{FileManager, FileType};
use crate::common;

/// Test audio detection by extension
#[test]
fn test_detect_file_type_withAudioExtension_shouldReturnAudio() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let wav = common::create_test_wav(temp_dir.path(), "speech.wav")?;
    // Extension wins even without sniffable content
    let mp3 = common::create_test_file(temp_dir.path(), "speech.mp3", "not really audio")?;

    assert_eq!(FileManager::detect_file_type(&wav)?, FileType::Audio);
    assert_eq!(FileManager::detect_file_type(&mp3)?, FileType::Audio);

    Ok(())
}

/// Test transcript detection by extension
#[test]
fn test_detect_file_type_withTxtExtension_shouldReturnTranscript() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let txt = common::create_test_file(temp_dir.path(), "speech.txt", "hello there")?;

    assert_eq!(FileManager::detect_file_type(&txt)?, FileType::Transcript);

    Ok(())
}

/// Test content sniffing when the extension is missing
#[test]
fn test_detect_file_type_withNoExtension_shouldSniffContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let audio = temp_dir.path().join("recording");
    std::fs::write(&audio, common::test_wav_bytes())?;
    assert_eq!(FileManager::detect_file_type(&audio)?, FileType::Audio);

    let text = common::create_test_file(temp_dir.path(), "notes", "plain text content")?;
    assert_eq!(FileManager::detect_file_type(&text)?, FileType::Transcript);

    Ok(())
}

/// Test detection of a missing file
#[test]
fn test_detect_file_type_withMissingFile_shouldFail() {
    assert!(FileManager::detect_file_type(PathBuf::from("/no/such/file.wav")).is_err());
}

/// Test audio header signatures
#[test]
fn test_is_audio_header_withKnownSignatures_shouldMatch() {
    assert!(FileManager::is_audio_header(&common::test_wav_bytes()));
    assert!(FileManager::is_audio_header(b"ID3\x04\x00\x00\x00\x00\x00\x00"));
    assert!(FileManager::is_audio_header(&[0xFF, 0xFB, 0x90, 0x00]));
    assert!(FileManager::is_audio_header(b"fLaC\x00\x00\x00\x22"));
    assert!(FileManager::is_audio_header(b"OggS\x00\x02"));

    assert!(!FileManager::is_audio_header(b"plain text"));
    assert!(!FileManager::is_audio_header(b""));
    // RIFF without WAVE (e.g. an AVI container) is not audio
    assert!(!FileManager::is_audio_header(b"RIFF\x00\x00\x00\x00AVI "));
}

/// Test output path generation
#[test]
fn test_generate_output_path_withAudioFile_shouldUseStem() {
    let path = FileManager::generate_output_path("recordings/speech.wav", "out");
    assert_eq!(path, PathBuf::from("out/speech.srt"));
}

/// Test sibling transcript path derivation
#[test]
fn test_sibling_transcript_path_withAudioFile_shouldSwapExtension() {
    let path = FileManager::sibling_transcript_path("recordings/speech.wav");
    assert_eq!(path, PathBuf::from("recordings/speech.txt"));
}

/// Test recursive audio discovery
#[test]
fn test_find_audio_files_withMixedTree_shouldFindOnlyAudio() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    common::create_test_wav(temp_dir.path(), "a.wav")?;
    common::create_test_file(temp_dir.path(), "a.txt", "transcript")?;
    common::create_test_file(temp_dir.path(), "notes.md", "readme")?;

    let nested = temp_dir.path().join("nested");
    FileManager::ensure_dir(&nested)?;
    common::create_test_file(&nested, "b.mp3", "mp3 bytes")?;

    let found = FileManager::find_audio_files(temp_dir.path())?;

    assert_eq!(found.len(), 2);
    assert!(found.iter().any(|p| p.ends_with("a.wav")));
    assert!(found.iter().any(|p| p.ends_with("b.mp3")));

    Ok(())
}

/// Test read and write helpers
#[test]
fn test_write_and_read_withNestedPath_shouldCreateParents() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("deep/nested/file.txt");

    FileManager::write_to_file(&path, "content")?;

    assert!(FileManager::file_exists(&path));
    assert_eq!(FileManager::read_to_string(&path)?, "content");

    Ok(())
}
