//! Command-line interface for Fluent Studio
//!
//! Provides CLI argument parsing for configuring the application at startup.
//!
//! # Usage
//!
//! ```bash
//! # Show help
//! fluent-studio --help
//!
//! # Start with dark mode
//! fluent-studio --dark-mode
//!
//! # Set log level
//! fluent-studio --log-level debug
//! ```

use clap::Parser;

/// Fluent Studio - desktop English practice studio
///
/// A desktop UI for daily English practice: a simulated chat tutor,
/// vocabulary cards, and pronunciation exercises, built with Rust and
/// Makepad.
#[derive(Parser, Debug, Clone)]
#[command(name = "fluent-studio")]
#[command(author = "Fluent Studio Team")]
#[command(version)]
#[command(about = "Desktop English practice studio", long_about = None)]
pub struct Args {
    /// Start in dark mode
    ///
    /// When set, the application starts with dark mode enabled regardless
    /// of the saved preference. Dark mode can also be toggled from the
    /// header inside the application.
    #[arg(long)]
    pub dark_mode: bool,

    /// Log level for output
    ///
    /// Controls the verbosity of log output. Available levels:
    /// error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,

    /// Window width in pixels
    #[arg(long, default_value = "1400", value_name = "PIXELS")]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value = "900", value_name = "PIXELS")]
    pub height: u32,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            dark_mode: false,
            log_level: "info".to_string(),
            width: 1400,
            height: 900,
        }
    }
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get log level as env_logger filter string
    pub fn log_filter(&self) -> &str {
        match self.log_level.to_lowercase().as_str() {
            "error" => "error",
            "warn" | "warning" => "warn",
            "info" => "info",
            "debug" => "debug",
            "trace" => "trace",
            _ => "info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::default();
        assert!(!args.dark_mode);
        assert_eq!(args.log_level, "info");
        assert_eq!(args.width, 1400);
        assert_eq!(args.height, 900);
    }

    #[test]
    fn test_log_filter() {
        let mut args = Args::default();

        args.log_level = "debug".to_string();
        assert_eq!(args.log_filter(), "debug");

        args.log_level = "WARNING".to_string();
        assert_eq!(args.log_filter(), "warn");

        args.log_level = "invalid".to_string();
        assert_eq!(args.log_filter(), "info");
    }
}
