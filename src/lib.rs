/*!
 * # subalign - Subtitle generation through forced alignment
 *
 * A Rust library for turning an audio recording plus its transcript into
 * timed SRT subtitles.
 *
 * ## Features
 *
 * - Segment free-form transcript text into short, subtitle-sized fragments
 * - Align fragments to timestamp ranges using the aeneas forced aligner
 * - Parse and write SRT subtitle files
 * - Batch processing of whole directories
 * - JSON request mode mirroring a transport payload (base64 audio + text)
 * - ISO 639-1 and ISO 639-2 language code support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `segmenter`: The text segmentation algorithm (the core of the system)
 * - `subtitle_processor`: SRT handling for timed fragments
 * - `aligners`: Alignment engine boundary:
 *   - `aligners::aeneas`: External aeneas process invocation
 *   - `aligners::mock`: Deterministic engine for tests
 * - `request`: JSON request/response payloads
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod segmenter;
pub mod subtitle_processor;
pub mod aligners;
pub mod request;
pub mod app_config;
pub mod file_utils;
pub mod app_controller;
pub mod language_utils;
pub mod errors;

// Re-export main types for easier usage
pub use segmenter::segment;
pub use app_config::Config;
pub use subtitle_processor::{SubtitleCollection, SubtitleEntry};
pub use aligners::Aligner;
pub use language_utils::{language_codes_match, normalize_to_task_language, get_language_name};
pub use errors::{AppError, AlignerError, RequestError};
