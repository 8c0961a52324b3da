//! Configuration and CLI argument handling for the demo binary

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "page-kit")]
#[command(about = "Runs the page helpers against an in-memory page")]
#[command(version = "1.0.0")]
pub struct Config {
    /// How long the timer runs before the demo stops it, in seconds
    #[arg(short, long, default_value = "5")]
    pub seconds: u64,

    /// Spinner message shown while the timer runs
    #[arg(short, long)]
    pub message: Option<String>,

    /// Viewport width in CSS pixels
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Viewport height in CSS pixels
    #[arg(long, default_value = "400")]
    pub height: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
