//! The evaluation pipeline: preprocess, local engine, then the remote
//! fallback chain in order. Stage failures are swallowed (debug-logged) and
//! the next stage tried; the pipeline itself never errors.

use crate::core::config::Config;
use crate::core::engine;
use crate::core::preprocess::preprocess;
use crate::core::remote;
use crate::core::session::{AngleMode, EvalSource, EvalStatus};

/// Callback for status transitions while a solve runs.
pub type OnStatus = Box<dyn Fn(&EvalStatus) + Send>;

/// One evaluation request.
pub struct SolveRequest<'a> {
    pub config: &'a Config,
    pub expression: &'a str,
    pub angle_mode: AngleMode,
    /// Substituted for `Ans` during preprocessing.
    pub previous_answer: Option<&'a str>,
    /// Called on each "Calculating ..." transition.
    pub on_status: Option<OnStatus>,
}

/// How a solve ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Answered { answer: String, source: EvalSource },
    /// The local engine and every configured remote stage failed.
    Exhausted,
}

/// Outcome of a non-blank solve: the trimmed question plus the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    pub question: String,
    pub verdict: Verdict,
}

/// Evaluate `request.expression`. Blank input is a no-op returning `None`.
/// The local engine sees the preprocessed expression; remote stages get the
/// raw question, awaited strictly one at a time.
pub async fn solve(request: SolveRequest<'_>) -> Option<SolveOutcome> {
    let question = request.expression.trim();
    if question.is_empty() {
        return None;
    }

    let emit = |status: EvalStatus| {
        if let Some(on_status) = &request.on_status {
            on_status(&status);
        }
    };

    let answered = |answer: String, source: EvalSource| {
        Some(SolveOutcome {
            question: question.to_string(),
            verdict: Verdict::Answered { answer, source },
        })
    };

    emit(EvalStatus::Computing(EvalSource::Local));
    let prepared = preprocess(question, request.angle_mode, request.previous_answer);
    match engine::evaluate(&prepared) {
        Ok(answer) => return answered(answer, EvalSource::Local),
        Err(err) => log::debug!("local evaluation of {prepared:?} failed: {err}"),
    }

    let client = reqwest::Client::new();
    for provider in remote::fallback_chain(request.config) {
        let source = provider.source();
        emit(EvalStatus::Computing(source));
        match provider.try_answer(&client, question).await {
            Ok(answer) => return answered(answer, source),
            Err(err) => log::debug!("{source:?} stage failed: {err}"),
        }
    }

    Some(SolveOutcome {
        question: question.to_string(),
        verdict: Verdict::Exhausted,
    })
}
