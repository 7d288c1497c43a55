// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use crate::request::ErrorResponse;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod aligners;
mod errors;
mod file_utils;
mod language_utils;
mod request;
mod segmenter;
mod subtitle_processor;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Align an audio file (or directory) with its transcript (default command)
    #[command(alias = "align")]
    Align(AlignArgs),

    /// Handle a JSON alignment request (base64 audio + raw text)
    Request {
        /// Path to the JSON payload file
        #[arg(value_name = "PAYLOAD")]
        payload: PathBuf,

        /// Configuration file path
        #[arg(short, long, default_value = "conf.json")]
        config_path: String,
    },

    /// Generate shell completions for subalign
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct AlignArgs {
    /// Input audio file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Transcript text file (defaults to the audio file with a .txt extension)
    #[arg(short, long)]
    transcript: Option<PathBuf>,

    /// Output SRT path (defaults to the audio file with an .srt extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Transcript language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    language: Option<String>,

    /// Python interpreter used to run aeneas
    #[arg(long)]
    python: Option<String>,

    /// Timeout for one alignment run, in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Keep intermediate text/SRT files for debugging
    #[arg(long)]
    keep_temp_files: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subalign - forced-alignment subtitle generator
///
/// Cuts a transcript into subtitle-sized fragments and maps each fragment to
/// a timestamp range in the audio using the aeneas forced aligner.
#[derive(Parser, Debug)]
#[command(name = "subalign")]
#[command(version = "0.1.0")]
#[command(about = "Forced-alignment subtitle generator")]
#[command(long_about = "subalign segments transcript text and aligns it against an audio recording,
producing timed SRT subtitles via the aeneas forced aligner.

EXAMPLES:
    subalign speech.wav                          # Align using sibling speech.txt
    subalign -t story.txt -o out.srt speech.wav  # Explicit transcript and output
    subalign -l fr speech.wav                    # French transcript
    subalign -f speech.wav                       # Force overwrite existing output
    subalign /recordings/                        # Align every audio+transcript pair
    subalign request payload.json                # Handle a JSON request payload
    subalign completions bash > subalign.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.

REQUIREMENTS:
    aeneas must be importable by the configured Python interpreter
    (pip install aeneas), which in turn needs ffmpeg and espeak.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input audio file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Transcript text file (defaults to the audio file with a .txt extension)
    #[arg(short, long)]
    transcript: Option<PathBuf>,

    /// Output SRT path (defaults to the audio file with an .srt extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Transcript language code (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    language: Option<String>,

    /// Python interpreter used to run aeneas
    #[arg(long)]
    python: Option<String>,

    /// Timeout for one alignment run, in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Keep intermediate text/SRT files for debugging
    #[arg(long)]
    keep_temp_files: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subalign", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Request { payload, config_path }) => {
            run_request(&payload, &config_path).await
        }
        Some(Commands::Align(args)) => run_align(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            let align_args = AlignArgs {
                input_path,
                transcript: cli.transcript,
                output: cli.output,
                force_overwrite: cli.force_overwrite,
                language: cli.language,
                python: cli.python,
                timeout_secs: cli.timeout_secs,
                keep_temp_files: cli.keep_temp_files,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_align(align_args).await
        }
    }
}

/// Load config from disk (creating a default one if missing) and apply CLI
/// overrides on top
fn load_config(
    config_path: &str,
    log_level: Option<&CliLogLevel>,
    apply_overrides: impl FnOnce(&mut Config),
) -> Result<Config> {
    let config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        if let Some(log_level) = log_level {
            config.log_level = log_level.clone().into();
        }

        apply_overrides(&mut config);
        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let mut config = Config::default();

        if let Some(log_level) = log_level {
            config.log_level = log_level.clone().into();
        }

        apply_overrides(&mut config);

        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    config.validate().context("Configuration validation failed")?;
    log::set_max_level(level_filter(&config.log_level));

    Ok(config)
}

async fn run_align(options: AlignArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    let config = load_config(&options.config_path, options.log_level.as_ref(), |config| {
        if let Some(language) = &options.language {
            config.language = language.clone();
        }
        if let Some(python) = &options.python {
            config.aligner.python = python.clone();
        }
        if let Some(timeout_secs) = options.timeout_secs {
            config.aligner.timeout_secs = timeout_secs;
        }
        if options.keep_temp_files {
            config.aligner.keep_temp_files = true;
        }
    })?;

    let controller = Controller::with_config(config)?;

    if options.input_path.is_file() {
        controller
            .run(
                options.input_path.clone(),
                options.transcript.clone(),
                options.output.clone(),
                options.force_overwrite,
            )
            .await?;
    } else if options.input_path.is_dir() {
        controller
            .run_folder(options.input_path.clone(), options.force_overwrite)
            .await?;
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }

    Ok(())
}

async fn run_request(payload: &Path, config_path: &str) -> Result<()> {
    let config = load_config(config_path, None, |_| {})?;
    let controller = Controller::with_config(config)?;

    match controller.run_request(payload).await {
        Ok(response_json) => {
            println!("{}", response_json);
            Ok(())
        }
        Err(e) => {
            // Mirror the transport contract: structured error JSON on
            // stdout, failure through the exit code
            println!("{}", ErrorResponse::from_error(&e).to_json());
            std::process::exit(1);
        }
    }
}
