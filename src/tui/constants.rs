//! TUI constants: colors, timing, and key hint labels.

use ratatui::style::Color;

/// Accent green color (#98FB98).
pub(super) const ACCENT: Color = Color::Rgb(152, 251, 152);

/// Secondary accent — soft cyan (#7EC8E3) that pairs well with the green.
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Key bindings shown in the footer.
pub(super) const KEY_HINTS: &str =
    "Enter solve · F2 deg/rad · Ctrl+L clear · Ctrl+Y copy · Alt+A Ans · Esc quit";

/// Function vocabulary shown in the footer.
pub(super) const FUNCTION_HINTS: &str =
    "sin cos tan asin acos atan ln log10 sqrt abs exp  ·  ! % ^  ·  pi e i Ans";

/// Minimalist logo (single character).
pub(super) const LOGO: &str = "◆";
