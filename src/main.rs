// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use phrasesync::app_config::{Config, LogLevel};
use phrasesync::app_controller::Controller;
use phrasesync::renderer::HighlightStrategy;

/// CLI Wrapper for HighlightStrategy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliHighlightStrategy {
    Phrase,
    Word,
}

impl From<CliHighlightStrategy> for HighlightStrategy {
    fn from(cli_strategy: CliHighlightStrategy) -> Self {
        match cli_strategy {
            CliHighlightStrategy::Phrase => HighlightStrategy::Phrase,
            CliHighlightStrategy::Word => HighlightStrategy::Word,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate subtitles from recognition results (default command)
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Regenerate subtitles from an edited transcript document
    Resync {
        /// Edited transcript document
        #[arg(value_name = "TRANSCRIPT_PATH")]
        transcript_path: PathBuf,

        /// Force overwrite of existing output files
        #[arg(short, long)]
        force_overwrite: bool,

        /// Configuration file path
        #[arg(short, long, default_value = "conf.json")]
        config_path: String,

        /// Set logging level
        #[arg(short, long, value_enum)]
        log_level: Option<CliLogLevel>,
    },

    /// Convert a plain SRT file to a styled script using a preset
    Convert {
        /// Input SRT file
        #[arg(value_name = "SRT_PATH")]
        srt_path: PathBuf,

        /// Style preset name (modern, elegant, bold, minimal)
        #[arg(short, long)]
        style: Option<String>,

        /// Force overwrite of existing output files
        #[arg(short, long)]
        force_overwrite: bool,

        /// Configuration file path
        #[arg(short, long, default_value = "conf.json")]
        config_path: String,

        /// Set logging level
        #[arg(short, long, value_enum)]
        log_level: Option<CliLogLevel>,
    },

    /// Generate shell completions for phrasesync
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input recognition JSON file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Maximum words per phrase chunk
    #[arg(short, long)]
    max_words: Option<usize>,

    /// Style preset name (modern, elegant, bold, minimal)
    #[arg(short, long)]
    style: Option<String>,

    /// Highlight strategy
    #[arg(short = 'H', long, value_enum)]
    highlight: Option<CliHighlightStrategy>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// phrasesync - word-timed transcripts to styled, phrased subtitles
///
/// Takes recognition results with word-level timestamps and produces styled
/// subtitle scripts with per-word highlighting, plain SRT files, and a
/// human-editable transcript that can be resynchronized after editing.
#[derive(Parser, Debug)]
#[command(name = "phrasesync")]
#[command(version = "1.0.0")]
#[command(about = "Word-synchronized subtitle generation")]
#[command(long_about = "phrasesync turns word-level timestamped recognition results into phrased,
styled subtitles with per-word highlighting.

EXAMPLES:
    phrasesync narration.json                     # Generate using default config
    phrasesync -f narration.json                  # Force overwrite existing files
    phrasesync -m 6 -s elegant narration.json     # Six-word phrases, elegant preset
    phrasesync -H word narration.json             # Legacy one-word-per-event mode
    phrasesync resync narration.transcript.txt    # Rebuild after hand-editing
    phrasesync convert episode.srt -s bold        # Style an existing SRT file
    phrasesync completions bash > phrasesync.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config. If the config file doesn't exist,
    a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input recognition JSON file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Maximum words per phrase chunk
    #[arg(short, long)]
    max_words: Option<usize>,

    /// Style preset name (modern, elegant, bold, minimal)
    #[arg(short, long)]
    style: Option<String>,

    /// Highlight strategy
    #[arg(short = 'H', long, value_enum)]
    highlight: Option<CliHighlightStrategy>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
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

    // @returns: ANSI colour code for log level
    fn get_color_for_level(level: Level) -> &'static str {
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
            let color = Self::get_color_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

/// Load the configuration file, creating a default one when missing, and
/// apply CLI overrides on top.
fn load_config(config_path: &str, cmd_log_level: Option<&CliLogLevel>) -> Result<Config> {
    let config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;
        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        if let Some(log_level) = cmd_log_level {
            config.log_level = log_level.clone().into();
        }
        config
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let mut config = Config::default();
        if let Some(log_level) = cmd_log_level {
            config.log_level = log_level.clone().into();
        }

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

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default; the level is
    // updated after the config is loaded.
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "phrasesync", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Generate(args)) => run_generate(args).await,
        Some(Commands::Resync {
            transcript_path,
            force_overwrite,
            config_path,
            log_level,
        }) => {
            let config = load_config(&config_path, log_level.as_ref())?;
            let controller = Controller::with_config(config)?;
            let output_dir = transcript_path
                .parent()
                .unwrap_or(Path::new("."))
                .to_path_buf();
            controller
                .resync(transcript_path, output_dir, force_overwrite)
                .await
        }
        Some(Commands::Convert {
            srt_path,
            style,
            force_overwrite,
            config_path,
            log_level,
        }) => {
            let mut config = load_config(&config_path, log_level.as_ref())?;
            if let Some(style) = style {
                config.style = style;
            }
            let controller = Controller::with_config(config)?;
            let output_dir = srt_path.parent().unwrap_or(Path::new(".")).to_path_buf();
            controller.convert(srt_path, output_dir, force_overwrite).await
        }
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let generate_args = GenerateArgs {
                input_path,
                force_overwrite: cli.force_overwrite,
                max_words: cli.max_words,
                style: cli.style,
                highlight: cli.highlight,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_generate(generate_args).await
        }
    }
}

async fn run_generate(options: GenerateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    let mut config = load_config(&options.config_path, options.log_level.as_ref())?;

    // Override config with CLI options if provided
    if let Some(max_words) = options.max_words {
        config.max_words_per_chunk = max_words;
    }
    if let Some(style) = &options.style {
        config.style = style.clone();
    }
    if let Some(strategy) = &options.highlight {
        config.highlight.strategy = strategy.clone().into();
    }

    let controller = Controller::with_config(config)?;

    if options.input_path.is_file() {
        let output_dir = options
            .input_path
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf();
        controller
            .run(options.input_path.clone(), output_dir, options.force_overwrite)
            .await
    } else if options.input_path.is_dir() {
        controller
            .run_folder(options.input_path.clone(), options.force_overwrite)
            .await
    } else {
        Err(anyhow!("Input path does not exist: {:?}", options.input_path))
    }
}
