// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::{Config, FailureMode, UploadPolicy};
use crate::app_controller::Controller;
use crate::hosting::youtube::YouTubeClient;
use crate::translator::azure::AzureTranslator;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod hosting;
mod language_utils;
mod subtitle_processor;
mod translator;

/// CLI Wrapper for UploadPolicy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliUploadPolicy {
    Skip,
    Replace,
    Duplicate,
}

impl From<CliUploadPolicy> for UploadPolicy {
    fn from(cli_policy: CliUploadPolicy) -> Self {
        match cli_policy {
            CliUploadPolicy::Skip => UploadPolicy::Skip,
            CliUploadPolicy::Replace => UploadPolicy::Replace,
            CliUploadPolicy::Duplicate => UploadPolicy::Duplicate,
        }
    }
}

/// CLI Wrapper for FailureMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliFailureMode {
    Abort,
    Continue,
}

impl From<CliFailureMode> for FailureMode {
    fn from(cli_mode: CliFailureMode) -> Self {
        match cli_mode {
            CliFailureMode::Abort => FailureMode::Abort,
            CliFailureMode::Continue => FailureMode::Continue,
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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the weekly subtitle relay (default command)
    Run(RunArgs),

    /// Generate shell completions for subrelay
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Channel whose recent videos are processed
    #[arg(short = 'c', long)]
    channel_id: Option<String>,

    /// Hosting service API key
    #[arg(long, env = "SUBRELAY_HOSTING_API_KEY", hide_env_values = true)]
    hosting_api_key: Option<String>,

    /// Translation service subscription key
    #[arg(long, env = "SUBRELAY_TRANSLATOR_API_KEY", hide_env_values = true)]
    translator_api_key: Option<String>,

    /// Source language code of the channel's subtitle tracks (e.g. 'nl')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language codes to translate into (e.g. 'en,de,fr')
    #[arg(short, long, value_delimiter = ',')]
    target_languages: Option<Vec<String>>,

    /// Directory where subtitle files are written
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Policy for videos that already carry a same-language caption track
    #[arg(short = 'u', long, value_enum)]
    upload_policy: Option<CliUploadPolicy>,

    /// Whether a failing video aborts the batch or is recorded and skipped
    #[arg(short = 'f', long, value_enum)]
    failure_mode: Option<CliFailureMode>,

    /// Configuration file path
    #[arg(long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subrelay - weekly channel subtitle relay
///
/// Lists a channel's videos published in the last week, downloads their
/// source-language subtitles, translates them, and uploads the translations
/// back as new caption tracks.
#[derive(Parser, Debug)]
#[command(name = "subrelay")]
#[command(version = "0.1.0")]
#[command(about = "Weekly subtitle translation relay for a video channel")]
#[command(long_about = "subrelay automates a weekly subtitle workflow: find a channel's videos
published in the trailing window, fetch their source-language subtitle track,
machine-translate it into the configured target languages, and push the
translations back as new caption tracks.

EXAMPLES:
    subrelay                                   # Run using conf.json
    subrelay -c UCxxxx -s nl -t en,de,fr       # Override channel and languages
    subrelay -u replace                        # Replace existing same-language tracks
    subrelay -f continue                       # Keep going past failing videos
    subrelay --log-level debug                 # Verbose logging
    subrelay completions bash > subrelay.bash  # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically. API keys can also be
    passed via SUBRELAY_HOSTING_API_KEY and SUBRELAY_TRANSLATOR_API_KEY.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run_args: RunArgs,
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
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
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
            generate(shell, &mut cmd, "subrelay", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Run(args)) => run_pipeline(args).await,
        None => run_pipeline(cli.run_args).await,
    }
}

async fn run_pipeline(options: RunArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(channel_id) = &options.channel_id {
        config.hosting.channel_id = channel_id.clone();
    }
    if let Some(api_key) = &options.hosting_api_key {
        config.hosting.api_key = api_key.clone();
    }
    if let Some(api_key) = &options.translator_api_key {
        config.translator.api_key = api_key.clone();
    }
    if let Some(source_lang) = &options.source_language {
        config.source_language = source_lang.clone();
    }
    if let Some(target_langs) = &options.target_languages {
        config.target_languages = target_langs.clone();
    }
    if let Some(output_dir) = &options.output_dir {
        config.output_dir = output_dir.clone();
    }
    if let Some(policy) = &options.upload_policy {
        config.upload_policy = policy.clone().into();
    }
    if let Some(mode) = &options.failure_mode {
        config.failure_mode = mode.clone().into();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Construct the service clients once and hand them to the controller
    let hosting = Arc::new(YouTubeClient::new(&config.hosting));
    let translator = Arc::new(AzureTranslator::new(&config.translator));
    let controller = Controller::with_clients(config, hosting, translator);

    let report = controller.run().await?;
    if report.failed() > 0 {
        anyhow::bail!("{} video(s) failed, see log for details", report.failed());
    }

    Ok(())
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
