//! TUI application state: the expression being typed, the session, and
//! transient display state.

use std::time::Instant;

use crate::core::session::{EvalStatus, Session};

pub struct App {
    /// Expression being typed. Kept after solving so it can be edited further.
    pub(crate) input: String,
    /// Calculator state: angle mode, result, status, Ans slot, history.
    pub(crate) session: Session,
    /// Status of the solve in flight; overrides the session status while set.
    pub(crate) computing: Option<EvalStatus>,
    /// Show the "Copied" toast until this instant.
    pub(crate) copy_toast_until: Option<Instant>,
}

impl App {
    pub fn new(session: Session) -> Self {
        App {
            input: String::new(),
            session,
            computing: None,
            copy_toast_until: None,
        }
    }

    /// Status line text source: the in-flight stage if one is running,
    /// otherwise whatever the session last recorded.
    pub(crate) fn status(&self) -> EvalStatus {
        self.computing.unwrap_or(self.session.status)
    }
}
