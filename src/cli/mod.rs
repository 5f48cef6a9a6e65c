//! Command-line interface for glyphline.
//!
//! This module handles CLI argument parsing. Subcommand implementations live in
//! the [`commands`] submodule.

pub mod commands;

use clap::{Args, Parser, Subcommand};
use glyphline_fonts::TextStyle;
use std::path::PathBuf;

/// glyphline - measure and render text with per-style font fallback
#[derive(Parser)]
#[command(name = "glyphline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Theme config file (default: ~/.config/glyphline/theme.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set log level (overrides RUST_LOG)
    #[arg(long, global = true, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
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

/// Text style and size flags shared by the text subcommands
#[derive(Debug, Clone, Args)]
pub struct StyleArgs {
    /// Font size in density-independent pixels
    #[arg(long, default_value_t = 16.0)]
    pub size: f32,

    /// Device scale factor
    #[arg(long, default_value_t = 1.0)]
    pub scale: f32,

    #[arg(long)]
    pub bold: bool,

    #[arg(long)]
    pub italic: bool,

    #[arg(long)]
    pub monospace: bool,

    #[arg(long)]
    pub symbol: bool,

    /// Tab width in spaces (0 uses the configured default)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub tab_width: i32,
}

impl StyleArgs {
    pub fn style(&self) -> TextStyle {
        TextStyle::regular()
            .with_bold(self.bold)
            .with_italic(self.italic)
            .with_monospace(self.monospace)
            .with_symbol(self.symbol)
            .with_tab_width(self.tab_width)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the size and baseline of a string
    Measure {
        /// Text to measure (tabs and carriage returns are honored)
        text: String,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Render a string to a PNG file
    Render {
        /// Text to render
        text: String,

        /// Output PNG path
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,

        /// Text color as RRGGBB or RRGGBBAA hex
        #[arg(long, default_value = "000000")]
        color: String,

        /// Background color as RRGGBB or RRGGBBAA hex (default: transparent)
        #[arg(long)]
        background: Option<String>,

        /// Padding around the text in pixels
        #[arg(long, default_value_t = 4)]
        padding: u32,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Print the faces each style resolves to
    Faces,

    /// Validate the theme config and print it with defaults filled in
    CheckConfig,

    /// Write the built-in default theme config
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Run the parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = || commands::load_config(cli.config.as_deref());
    match cli.command {
        Commands::Measure { text, style } => commands::measure(&config()?, &text, &style),
        Commands::Render {
            text,
            output,
            color,
            background,
            padding,
            style,
        } => {
            let options = commands::RenderOptions {
                output,
                color: commands::parse_color(&color)?,
                background: background.as_deref().map(commands::parse_color).transpose()?,
                padding,
            };
            commands::render(&config()?, &text, &style, &options)
        }
        Commands::Faces => commands::faces(&config()?),
        Commands::CheckConfig => commands::check_config(&config()?),
        Commands::InitConfig { force } => commands::init_config(cli.config.as_deref(), force),
    }
}
