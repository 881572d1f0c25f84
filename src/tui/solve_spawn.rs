//! Spawns solve requests in a background thread with status/result channels.

use std::sync::Arc;
use std::sync::mpsc;
use tokio::runtime::Runtime;

use crate::core::config::Config;
use crate::core::session::AngleMode;
use crate::core::solver::{self, SolveRequest};

use super::handlers::PendingSolve;

/// Spawn a new solve. Returns PendingSolve with channels for stage statuses
/// and the final outcome.
pub(crate) fn spawn_solve(
    rt: &Arc<Runtime>,
    config: Arc<Config>,
    expression: String,
    angle_mode: AngleMode,
    previous_answer: Option<String>,
) -> PendingSolve {
    let (status_tx, status_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let rt_clone = Arc::clone(rt);

    std::thread::spawn(move || {
        let on_status: solver::OnStatus = Box::new(move |status| {
            let _ = status_tx.send(*status);
        });
        let outcome = rt_clone.block_on(solver::solve(SolveRequest {
            config: config.as_ref(),
            expression: &expression,
            angle_mode,
            previous_answer: previous_answer.as_deref(),
            on_status: Some(on_status),
        }));
        let _ = result_tx.send(outcome);
    });

    PendingSolve {
        status_rx,
        result_rx,
    }
}
