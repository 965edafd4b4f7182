//! Pomodoro Session CLI - a terminal productivity timer
//!
//! This tool helps you stay focused using the Pomodoro Technique:
//! - 25 minutes of focused work
//! - 5 minutes of short break
//! - 15 minutes of long break after 4 pomodoros

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use pomodoro_session::cli::{
    forward_ctrl_c, Cli, Commands, Display, KeyboardInput, OutputFormat, RawModeGuard, StartArgs,
    TerminalDisplay,
};
use pomodoro_session::{Session, SessionHandle, SystemClock};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr so they never interleave with JSON output on stdout.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Start(args)) => run_session(&args).await?,
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Runs one session in the foreground until it completes or the user quits.
async fn run_session(args: &StartArgs) -> Result<()> {
    let mut session = Session::new(args.to_config())?;
    let (handle, commands) = SessionHandle::channel();

    let interactive = !args.no_keys && std::io::stdin().is_terminal();
    let raw_mode = if interactive {
        Some(RawModeGuard::enable()?)
    } else {
        None
    };
    let keyboard = if interactive {
        Some(KeyboardInput::spawn(handle.clone()).context("failed to start keyboard input")?)
    } else {
        None
    };
    let ctrl_c = forward_ctrl_c(handle);

    let mut display = TerminalDisplay::stdout(args.output, interactive);
    if interactive && args.output == OutputFormat::Text {
        display.show_controls();
    }

    let mut clock = SystemClock::new();
    let result = session.start(&mut clock, commands, &mut display).await;

    ctrl_c.abort();
    drop(keyboard);
    drop(raw_mode);

    let outcome = result?;
    tracing::info!("session {}", outcome.as_str());
    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
