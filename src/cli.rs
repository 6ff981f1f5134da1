//! Command-line interface for keycapture.
//!
//! The binary hosts a capture control without a window: `replay` feeds
//! textual key events into it and prints what the control shows after each
//! one, `format` renders a single combination.

use crate::binding::KeyCapture;
use crate::capture::{CapturePolicy, KeyOutcome};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use keycapture_config::CaptureConfig;
use keycapture_keys::{InputEvent, ParseError, parse_key_event, stringify_combination};
use std::path::PathBuf;

/// keycapture - capture and normalise key combinations
#[derive(Debug, Parser)]
#[command(name = "keycapture")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level; overrides RUST_LOG
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Feed key events into a capture control and print each rendering
    Replay {
        /// Config file (defaults to the platform config directory)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Record only the primary key, never held modifiers
        #[arg(long)]
        no_modifiers: bool,

        /// Maximum number of tokens in a combination
        #[arg(long, value_name = "N")]
        max_length: Option<usize>,

        /// Events such as "Ctrl+Shift+A", "Return" or "mouse:back"
        #[arg(required = true, value_name = "EVENT")]
        events: Vec<String>,
    },
    /// Print the canonical string for modifiers plus a key
    Format {
        /// Modifier tokens followed by the key token, e.g. `Ctrl Equal`
        #[arg(required = true, value_name = "TOKEN")]
        tokens: Vec<String>,
    },
}

/// Run a parsed command line, writing results to stdout.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Replay {
            config,
            no_modifiers,
            max_length,
            events,
        } => {
            let config = resolve_config(config, no_modifiers, max_length)?;
            let policy = CapturePolicy::try_from(&config).context("invalid capture policy")?;
            for line in replay(policy, &events)? {
                println!("{line}");
            }
        }
        Commands::Format { tokens } => {
            if let Some((key, modifiers)) = tokens.split_last() {
                println!("{}", stringify_combination(modifiers, key));
            }
        }
    }
    Ok(())
}

/// Merge the config file with command-line overrides.
pub fn resolve_config(
    path: Option<PathBuf>,
    no_modifiers: bool,
    max_length: Option<usize>,
) -> Result<CaptureConfig> {
    let mut config = match path {
        Some(path) => CaptureConfig::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CaptureConfig::load_or_default().context("failed to load default config")?,
    };
    if no_modifiers {
        config.modifiers_allowed = false;
    }
    if let Some(max_length) = max_length {
        config.max_combination_length = max_length;
    }
    config.validate()?;
    Ok(config)
}

/// Replay events through a natively constructed capture control.
///
/// Returns the rendered text after each event. A commit key press shows up
/// as `(focus released)` since it does not change the combination.
pub fn replay(policy: CapturePolicy, events: &[String]) -> Result<Vec<String>, ParseError> {
    let mut capture = KeyCapture::new(policy);
    let mut lines = Vec::with_capacity(events.len());

    for event in events {
        let outcome = match parse_key_event(event)? {
            InputEvent::Key { modifiers, token } => capture.on_key_press(modifiers, &token),
            InputEvent::Button(button) => capture.on_button_press(button),
        };
        log::debug!("{event} -> {outcome:?}");

        lines.push(match outcome {
            KeyOutcome::ReleaseFocus => "(focus released)".to_string(),
            _ => capture.display_text().to_string(),
        });
    }
    Ok(lines)
}
