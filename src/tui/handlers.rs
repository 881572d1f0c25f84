//! Event handlers for the TUI: keyboard.

use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use tokio::runtime::Runtime;

use crate::core::config::Config;
use crate::core::session::{EvalSource, EvalStatus};
use crate::core::solver::SolveOutcome;

use super::app::App;
use super::solve_spawn;

/// Holds receivers for a solve in progress (stage statuses, final outcome).
pub(crate) struct PendingSolve {
    pub status_rx: mpsc::Receiver<EvalStatus>,
    pub result_rx: mpsc::Receiver<Option<SolveOutcome>>,
}

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum HandleResult {
    Continue,
    Break,
}

/// Context for key event handling. Bundles mutable state to reduce parameter count.
pub(crate) struct HandleKeyContext<'a> {
    pub app: &'a mut App,
    pub config: &'a Arc<Config>,
    pub pending_solve: &'a mut Option<PendingSolve>,
    pub rt: &'a Arc<Runtime>,
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub(crate) fn handle_key(
    key: crossterm::event::KeyEvent,
    ctx: HandleKeyContext<'_>,
) -> HandleResult {
    let HandleKeyContext {
        app,
        config,
        pending_solve,
        rt,
    } = ctx;

    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => HandleResult::Break,
        (KeyCode::Enter, _) => {
            let expression = app.input.trim().to_string();
            if !expression.is_empty() && pending_solve.is_none() {
                // Shown until the solve thread's first status arrives
                app.computing = Some(EvalStatus::Computing(EvalSource::Local));
                *pending_solve = Some(solve_spawn::spawn_solve(
                    rt,
                    Arc::clone(config),
                    expression,
                    app.session.angle_mode,
                    app.session.previous_answer.clone(),
                ));
            }
            HandleResult::Continue
        }
        (KeyCode::Backspace, _) => {
            app.input.pop();
            HandleResult::Continue
        }
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
            app.input.clear();
            app.session.clear();
            HandleResult::Continue
        }
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => {
            if !app.session.result.is_empty()
                && arboard::Clipboard::new()
                    .and_then(|mut c| c.set_text(app.session.result.clone()))
                    .is_ok()
            {
                app.copy_toast_until = Some(Instant::now() + Duration::from_secs(2));
            }
            HandleResult::Continue
        }
        (KeyCode::F(2), _) => {
            app.session.angle_mode = app.session.angle_mode.toggle();
            HandleResult::Continue
        }
        (KeyCode::Char('a') | KeyCode::Char('A'), mods) if mods.contains(KeyModifiers::ALT) => {
            app.input.push_str("Ans");
            HandleResult::Continue
        }
        (KeyCode::Char(c), mods) => {
            // Ignore other Alt+key: user likely intended a shortcut
            if mods.contains(KeyModifiers::ALT) {
                return HandleResult::Continue;
            }
            app.input.push(c);
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}
