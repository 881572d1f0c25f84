//! # ansr
//!
//! Entry point for the ansr scientific calculator, which provides an
//! interactive TUI, a single-expression CLI mode, and a chain of remote
//! fallback services for input the local engine cannot evaluate.

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use crate::cli::{Args, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    if let Some(Commands::Completions { shell }) = args.command {
        let mut cmd = Args::command();
        cli::generate(shell, &mut cmd, core::app::NAME, &mut std::io::stdout());
        return Ok(());
    }

    // Load configuration (print user-friendly message; exit uses Display not Debug)
    let mut config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    // --angle-mode overrides the environment for this invocation
    if let Some(mode) = args.angle_mode.as_deref() {
        match core::session::AngleMode::parse(mode) {
            Some(parsed) => config.angle_mode = parsed,
            None => {
                eprintln!("Error: --angle-mode must be \"deg\" or \"rad\", got {mode:?}");
                std::process::exit(1);
            }
        }
    }

    if let Some(Commands::Config) = args.command {
        core::cli::run_config(&config);
        return Ok(());
    }

    if args.expression.is_some() {
        return run::run_expression(&args, &config).await;
    }

    run::launch_tui(config).await
}
