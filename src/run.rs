//! Application run modes: logger init, single expression, TUI launch.

use std::io;
use std::sync::Arc;

use crate::cli::Args;
use crate::core;
use crate::core::config::Config;
use crate::core::solver::{SolveOutcome, SolveRequest, Verdict};

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.expression.is_none() {
        let log_path = core::paths::cache_dir().map(|d| d.join(format!("{}.log", core::app::NAME)));
        if let Some(path) = log_path {
            if let Some(dir) = path.parent() {
                let _ = std::fs::create_dir_all(dir);
            }
            if let Ok(file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
            {
                logger.target(env_logger::Target::Pipe(Box::new(file)));
            }
        }
    }
    let _ = logger.try_init();
}

/// Run single expression mode: solve and print the answer to stdout.
///
/// Blank input exits quietly; an exhausted fallback chain prints the failure
/// message to stderr and exits nonzero.
pub async fn run_expression(
    args: &Args,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let expression_arg = args.expression.as_ref().expect("expression is some");
    let expression = if expression_arg == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        expression_arg.clone()
    };

    let outcome = core::solver::solve(SolveRequest {
        config,
        expression: &expression,
        angle_mode: config.angle_mode,
        previous_answer: None,
        on_status: Some(Box::new(|status| {
            log::info!("{}", status);
        })),
    })
    .await;

    match outcome {
        Some(SolveOutcome {
            verdict: Verdict::Answered { answer, .. },
            ..
        }) => println!("{}", answer),
        Some(SolveOutcome {
            verdict: Verdict::Exhausted,
            ..
        }) => {
            eprintln!("{}", core::session::FAILURE_MESSAGE);
            std::process::exit(1);
        }
        None => {}
    }
    Ok(())
}

/// Launch the TUI in a blocking thread. Returns on panic or IO error.
pub async fn launch_tui(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(config);
    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(config)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(
                Box::new(io::Error::other("TUI thread panicked")) as Box<dyn std::error::Error>
            );
        }
    }
    Ok(())
}
