//! Command-line interface for the launchpulse utility
//!
//! Drives a single in-memory viewer session: browse idea and investor
//! cards, inspect analytics, and run scripted sessions of toggle/add
//! operations.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use crate::cards::{self, CardStyle};
use launchpulse::core::logging::init_logging;
use launchpulse::prelude::*;

/// LaunchPulse - Browse and validate startup ideas from the terminal
#[derive(Parser)]
#[command(name = "launchpulse")]
#[command(about = "A terminal front-end for the LaunchPulse idea registry")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the idea cards, newest first
    Ideas {
        /// Show in JSON format
        #[arg(long)]
        json: bool,

        /// Border character set
        #[arg(long, value_enum, default_value_t = StyleChoice::Unicode)]
        style: StyleChoice,

        /// When to use colors in output
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
    },

    /// Show the featured investor cards
    Investors {
        /// Show in JSON format
        #[arg(long)]
        json: bool,

        /// Border character set
        #[arg(long, value_enum, default_value_t = StyleChoice::Unicode)]
        style: StyleChoice,

        /// When to use colors in output
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
    },

    /// Show the analytics summary
    Analytics {
        /// Show in JSON format
        #[arg(long)]
        json: bool,

        /// Border character set
        #[arg(long, value_enum, default_value_t = StyleChoice::Unicode)]
        style: StyleChoice,
    },

    /// Run a scripted session of toggle/add commands
    Session {
        /// Script file, one command per line (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Border character set
        #[arg(long, value_enum, default_value_t = StyleChoice::Unicode)]
        style: StyleChoice,
    },
}

/// Supported border character sets
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum StyleChoice {
    Ascii,
    Unicode,
}

impl From<StyleChoice> for CardStyle {
    fn from(value: StyleChoice) -> Self {
        match value {
            StyleChoice::Ascii => CardStyle::Ascii,
            StyleChoice::Unicode => CardStyle::Unicode,
        }
    }
}

/// When to colorize output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if output is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Main CLI application
///
/// Owns the viewer session: one seeded registry plus the read-only
/// investor dataset.
pub struct LaunchPulseApp {
    registry: IdeaRegistry,
    investors: Vec<Investor>,
}

impl Default for LaunchPulseApp {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchPulseApp {
    /// Create a new application instance with the seeded dataset
    pub fn new() -> Self {
        Self {
            registry: launchpulse::session(),
            investors: launchpulse::seed_investors(),
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Initialize logging with CLI flags (environment variables take precedence)
        let log_level_str = std::env::var("LAUNCHPULSE_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("LAUNCHPULSE_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("LaunchPulse v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Ideas { json, style, color } => self.ideas_command(json, style, color),
            Commands::Investors { json, style, color } => {
                self.investors_command(json, style, color)
            }
            Commands::Analytics { json, style } => self.analytics_command(json, style),
            Commands::Session { input, style } => self.session_command(input, style, cli.verbose),
        }
    }

    /// Handle the ideas command
    fn ideas_command(&self, json: bool, style: StyleChoice, color: ColorChoice) -> Result<()> {
        let snapshot = self.registry.snapshot();
        if json {
            println!("{}", serde_json::to_string_pretty(snapshot.ideas())?);
            return Ok(());
        }

        let output = cards::idea_cards(&snapshot, style.into());
        self.print_cards(&output, color)
    }

    /// Handle the investors command
    fn investors_command(&self, json: bool, style: StyleChoice, color: ColorChoice) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(&self.investors)?);
            return Ok(());
        }

        let output = self
            .investors
            .iter()
            .map(|investor| cards::investor_card(investor, style.into()))
            .collect::<Vec<_>>()
            .join("\n");
        self.print_cards(&output, color)
    }

    /// Handle the analytics command
    fn analytics_command(&self, json: bool, style: StyleChoice) -> Result<()> {
        let analytics = Analytics::derive(&self.registry.snapshot());
        if json {
            println!("{}", serde_json::to_string_pretty(&analytics)?);
            return Ok(());
        }

        print!("{}", cards::analytics_card(&analytics, style.into()));
        Ok(())
    }

    /// Handle the session command
    ///
    /// Script grammar, one command per line:
    /// - `toggle <id>` - flip the interest mark on an idea
    /// - `add <name> | <description> | <category>` - submit a new idea
    /// - `ideas` - print the current idea cards
    /// - `analytics` - print the current analytics summary
    ///
    /// Blank lines and lines starting with `#` are skipped. Failed
    /// commands are reported and the session continues.
    fn session_command(
        &mut self,
        input: Option<PathBuf>,
        style: StyleChoice,
        verbose: bool,
    ) -> Result<()> {
        let script = self.read_input(input)?;
        let style: CardStyle = style.into();
        let stdout = io::stdout();
        let mut out = stdout.lock();

        for (line_no, line) in script.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if verbose {
                eprintln!("line {}: {}", line_no + 1, line);
            }

            match self.apply_script_line(line) {
                Ok(SessionOutput::Quiet) => {}
                Ok(SessionOutput::Ideas) => {
                    write!(out, "{}", cards::idea_cards(&self.registry.snapshot(), style))?;
                }
                Ok(SessionOutput::Analytics) => {
                    let analytics = Analytics::derive(&self.registry.snapshot());
                    write!(out, "{}", cards::analytics_card(&analytics, style))?;
                }
                Err(e) => {
                    eprintln!("Error on line {}: {}", line_no + 1, e);
                }
            }
        }

        Ok(())
    }

    /// Apply a single session script line to the registry
    fn apply_script_line(&mut self, line: &str) -> Result<SessionOutput> {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "toggle" => {
                let id: u64 = rest
                    .parse()
                    .map_err(|_| anyhow!("toggle expects a numeric id, got {:?}", rest))?;
                self.registry.toggle_interest(IdeaId(id))?;
                Ok(SessionOutput::Quiet)
            }
            "add" => {
                let fields: Vec<&str> = rest.split('|').map(str::trim).collect();
                let [name, description, category] = fields.as_slice() else {
                    return Err(anyhow!(
                        "add expects `name | description | category`, got {:?}",
                        rest
                    ));
                };
                self.registry
                    .add_idea(IdeaDraft::new(*name, *description, *category))?;
                Ok(SessionOutput::Quiet)
            }
            "ideas" => Ok(SessionOutput::Ideas),
            "analytics" => Ok(SessionOutput::Analytics),
            _ => Err(anyhow!("unknown command {:?}", command)),
        }
    }

    /// Read script input from a file or stdin
    fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            None => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read from stdin")?;
                Ok(buffer)
            }
            Some(path) if path.to_str() == Some("-") => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read from stdin")?;
                Ok(buffer)
            }
            Some(path) => fs::read_to_string(&path)
                .with_context(|| format!("Failed to read script file: {}", path.display())),
        }
    }

    /// Print card output, applying the color policy
    fn print_cards(&self, output: &str, color: ColorChoice) -> Result<()> {
        let final_output = if self.should_colorize(color) {
            cards::colorize(output)
        } else {
            output.to_string()
        };
        print!("{}", final_output);
        Ok(())
    }

    /// Determine if output should be colorized
    fn should_colorize(&self, color: ColorChoice) -> bool {
        match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                crossterm::tty::IsTty::is_tty(&io::stdout())
            }
        }
    }
}

/// What a session script line asks to print
#[derive(Debug)]
enum SessionOutput {
    Quiet,
    Ideas,
    Analytics,
}
