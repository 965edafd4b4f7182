//! Command definitions for the Pomodoro session CLI.
//!
//! Uses clap derive macro for argument parsing.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::types::SessionConfig;

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomodoro session timer for the terminal
#[derive(Parser, Debug)]
#[command(
    name = "pomodoro-session",
    version,
    about = "Terminal Pomodoro timer",
    long_about = "Runs four focus intervals separated by short breaks, with a long break \
                  after the fourth.\nWhile running: p/space pauses or resumes, s skips the \
                  current phase, q quits.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start a new pomodoro session
    Start(StartArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Start Command Arguments
// ============================================================================

/// How session progress is written to stdout
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON event per line
    Json,
}

/// Arguments for the start command
#[derive(Args, Debug, Clone)]
pub struct StartArgs {
    /// Focus interval duration in minutes
    #[arg(
        long = "intervalTime",
        visible_alias = "interval-time",
        default_value = "25",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub interval_time: u32,

    /// Short break duration in minutes
    #[arg(
        long = "shortBreak",
        visible_alias = "short-break",
        default_value = "5",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub short_break: u32,

    /// Long break duration in minutes
    #[arg(
        long = "longBreak",
        visible_alias = "long-break",
        default_value = "15",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub long_break: u32,

    /// Label shown during focus intervals
    #[arg(short, long, default_value = "focus", value_parser = validate_name)]
    pub name: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Do not read keyboard controls (also implied when stdin is not a terminal)
    #[arg(long)]
    pub no_keys: bool,
}

impl Default for StartArgs {
    fn default() -> Self {
        Self {
            interval_time: 25,
            short_break: 5,
            long_break: 15,
            name: "focus".to_string(),
            output: OutputFormat::Text,
            no_keys: false,
        }
    }
}

impl StartArgs {
    /// Maps the flags onto a session configuration.
    pub fn to_config(&self) -> SessionConfig {
        SessionConfig::new(
            self.name.clone(),
            self.interval_time,
            self.short_break,
            self.long_break,
        )
    }
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validates the focus interval name.
///
/// - Must not be blank
/// - Must not exceed 100 characters
fn validate_name(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    if s.chars().count() > 100 {
        return Err("name must be at most 100 characters".to_string());
    }
    Ok(s.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod cli_tests {
        use super::*;

        #[test]
        fn test_parse_no_args() {
            let cli = Cli::parse_from(["pomodoro-session"]);
            assert!(cli.command.is_none());
            assert!(!cli.verbose);
        }

        #[test]
        fn test_parse_verbose_flag() {
            let cli = Cli::parse_from(["pomodoro-session", "-v", "start"]);
            assert!(cli.verbose);
        }

        #[test]
        fn test_parse_completions_zsh() {
            let cli = Cli::parse_from(["pomodoro-session", "completions", "zsh"]);
            match cli.command {
                Some(Commands::Completions { shell }) => {
                    assert_eq!(shell, clap_complete::Shell::Zsh);
                }
                _ => panic!("Expected Completions command"),
            }
        }

        #[test]
        fn test_command_definition_is_valid() {
            use clap::CommandFactory;
            Cli::command().debug_assert();
        }
    }

    mod start_args_tests {
        use super::*;

        fn parse_start(args: &[&str]) -> StartArgs {
            let mut argv = vec!["pomodoro-session", "start"];
            argv.extend_from_slice(args);
            match Cli::parse_from(argv).command {
                Some(Commands::Start(args)) => args,
                _ => panic!("Expected Start command"),
            }
        }

        #[test]
        fn test_defaults() {
            let args = parse_start(&[]);
            assert_eq!(args.interval_time, 25);
            assert_eq!(args.short_break, 5);
            assert_eq!(args.long_break, 15);
            assert_eq!(args.name, "focus");
            assert_eq!(args.output, OutputFormat::Text);
            assert!(!args.no_keys);
        }

        #[test]
        fn test_camel_case_flags() {
            let args = parse_start(&[
                "--intervalTime",
                "50",
                "--shortBreak",
                "10",
                "--longBreak",
                "30",
                "--name",
                "writing",
            ]);
            assert_eq!(args.to_config(), SessionConfig::new("writing", 50, 10, 30));
        }

        #[test]
        fn test_kebab_case_aliases() {
            let args = parse_start(&["--interval-time", "40", "--short-break", "8", "--long-break", "20"]);
            assert_eq!(args.interval_time, 40);
            assert_eq!(args.short_break, 8);
            assert_eq!(args.long_break, 20);
        }

        #[test]
        fn test_json_output_and_no_keys() {
            let args = parse_start(&["--output", "json", "--no-keys"]);
            assert_eq!(args.output, OutputFormat::Json);
            assert!(args.no_keys);
        }

        #[test]
        fn test_zero_minutes_rejected() {
            let result = Cli::try_parse_from(["pomodoro-session", "start", "--intervalTime", "0"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_negative_minutes_rejected() {
            let result = Cli::try_parse_from(["pomodoro-session", "start", "--shortBreak", "-5"]);
            assert!(result.is_err());
        }

        #[test]
        fn test_default_matches_parsed_defaults() {
            let parsed = parse_start(&[]);
            assert_eq!(parsed.to_config(), StartArgs::default().to_config());
            assert_eq!(StartArgs::default().to_config(), SessionConfig::default());
        }
    }

    mod validation_tests {
        use super::*;

        #[test]
        fn test_validate_name() {
            assert_eq!(validate_name("deep work"), Ok("deep work".to_string()));
            assert!(validate_name("").is_err());
            assert!(validate_name("   ").is_err());
            assert!(validate_name(&"a".repeat(101)).is_err());
            assert!(validate_name(&"a".repeat(100)).is_ok());
        }
    }
}
