//! Calculator session state: angle mode, result display, status, previous
//! answer, and the single-entry history.

use std::fmt;

/// Displayed when every evaluation stage has failed.
pub const FAILURE_MESSAGE: &str = "Error: unable to compute.";

/// Angle interpretation for direct trig input (sin/cos/tan).
/// Inverse trig always returns radians regardless of mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    /// Parse "deg"/"degrees" or "rad"/"radians" (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "deg" | "degrees" => Some(AngleMode::Degrees),
            "rad" | "radians" => Some(AngleMode::Radians),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            AngleMode::Degrees => AngleMode::Radians,
            AngleMode::Radians => AngleMode::Degrees,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleMode::Degrees => write!(f, "DEG"),
            AngleMode::Radians => write!(f, "RAD"),
        }
    }
}

/// Which stage of the evaluation pipeline produced (or is producing) a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalSource {
    Local,
    WolframInstant,
    Gemini,
    WolframLlm,
}

/// Lifecycle of one evaluation, shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvalStatus {
    #[default]
    Ready,
    Computing(EvalSource),
    Done(EvalSource),
    Failed,
}

impl fmt::Display for EvalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            EvalStatus::Ready => "Ready",
            EvalStatus::Computing(EvalSource::Local) => "Calculating (local) …",
            EvalStatus::Computing(EvalSource::WolframInstant) => {
                "Calculating with Wolfram|Alpha Instant …"
            }
            EvalStatus::Computing(EvalSource::Gemini) => "Calculating with Gemini …",
            EvalStatus::Computing(EvalSource::WolframLlm) => {
                "Calculating with Wolfram|Alpha LLM …"
            }
            EvalStatus::Done(EvalSource::Local) => "Done",
            EvalStatus::Done(EvalSource::WolframInstant) => "Done (W|A Instant)",
            EvalStatus::Done(EvalSource::Gemini) => "Done (Gemini)",
            EvalStatus::Done(EvalSource::WolframLlm) => "Done (W|A LLM)",
            EvalStatus::Failed => "Failed",
        };
        write!(f, "{}", text)
    }
}

/// One committed calculation. The history keeps exactly the latest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub question: String,
    pub answer: String,
}

/// State shared by the TUI and the evaluation pipeline.
#[derive(Debug, Default)]
pub struct Session {
    pub angle_mode: AngleMode,
    /// Last result (or the failure message). Empty until the first evaluation.
    pub result: String,
    pub status: EvalStatus,
    /// Answer of the last successful evaluation; substituted for `Ans`.
    pub previous_answer: Option<String>,
    pub history: Option<HistoryEntry>,
}

impl Session {
    pub fn new(angle_mode: AngleMode) -> Self {
        Session {
            angle_mode,
            ..Default::default()
        }
    }

    /// Record a successful evaluation: result display, `Ans` slot, history
    /// (replacing whatever entry was there), and status, all in one step.
    pub fn commit(&mut self, question: String, answer: String, source: EvalSource) {
        self.result = answer.clone();
        self.previous_answer = Some(answer.clone());
        self.history = Some(HistoryEntry { question, answer });
        self.status = EvalStatus::Done(source);
    }

    /// Record an exhausted pipeline. Previous answer and history keep their
    /// last committed values.
    pub fn fail(&mut self) {
        self.result = FAILURE_MESSAGE.to_string();
        self.status = EvalStatus::Failed;
    }

    /// AC: clear the result display and reset status. History and the `Ans`
    /// slot survive so chained calculations still work.
    pub fn clear(&mut self) {
        self.result.clear();
        self.status = EvalStatus::Ready;
    }
}
