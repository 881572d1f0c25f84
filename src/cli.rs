//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  ansr                            Launch the interactive calculator
  ansr -e \"2+2\"                   Evaluate one expression, print the answer
  ansr -e \"sin(30)+1\"             Trig uses degrees by default
  ansr --angle-mode rad -e \"sin(pi/2)\"   Evaluate in radians
  ansr -e -                       Read the expression from stdin
  ansr config                     Show cache path and API key status
  ansr completions bash           Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "A scientific calculator with local evaluation and remote fallbacks",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Evaluate a single expression then exit (without opening the TUI)
    #[arg(
        short = 'e',
        long,
        help = "Evaluate an expression and print the answer (use '-' to read from stdin)"
    )]
    pub expression: Option<String>,

    /// Angle mode for sin/cos/tan input
    #[arg(long, help = "Angle mode: deg (default) or rad")]
    pub angle_mode: Option<String>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show cache path, angle mode, and API key status
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
