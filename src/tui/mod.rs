//! TUI (Text User Interface): the interactive calculator screen.

mod app;
mod constants;
mod draw;
mod handlers;
mod solve_spawn;

pub use app::App;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::core::config::Config;
use crate::core::session::Session;
use crate::core::solver::{SolveOutcome, Verdict};

use draw::draw;
use handlers::{HandleResult, PendingSolve};

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = execute!(
            std::io::stdout(),
            crossterm::event::PopKeyboardEnhancementFlags
        );
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for async solve calls.
pub fn run(config: Arc<Config>) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    let mut app = App::new(Session::new(config.angle_mode));
    let mut pending_solve: Option<PendingSolve> = None;

    // Kitty keyboard protocol: Alt+key as single event with modifier (Ghostty, WezTerm, kitty, etc.)
    let _ = execute!(
        io::stdout(),
        crossterm::event::PushKeyboardEnhancementFlags(
            crossterm::event::KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | crossterm::event::KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
        )
    );

    loop {
        if let Some(ref solve) = pending_solve {
            while let Ok(status) = solve.status_rx.try_recv() {
                app.computing = Some(status);
            }
            if let Ok(outcome) = solve.result_rx.try_recv() {
                app.computing = None;
                match outcome {
                    Some(SolveOutcome {
                        question,
                        verdict: Verdict::Answered { answer, source },
                    }) => app.session.commit(question, answer, source),
                    Some(SolveOutcome {
                        verdict: Verdict::Exhausted,
                        ..
                    }) => app.session.fail(),
                    None => {}
                }
                pending_solve = None;
            }
        }

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(std::time::Duration::from_millis(
            constants::EVENT_POLL_TIMEOUT_MS,
        ))? {
            if let Event::Key(key) = event::read()? {
                let result = handlers::handle_key(
                    key,
                    handlers::HandleKeyContext {
                        app: &mut app,
                        config: &config,
                        pending_solve: &mut pending_solve,
                        rt: &rt,
                    },
                );
                if result == HandleResult::Break {
                    break;
                }
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
