//! Expression preprocessing ahead of the local engine: visual glyphs,
//! DEG-mode trig wrapping, `Ans` substitution, parenthesis balancing.
//!
//! The pipeline is idempotent: feeding its output back in changes nothing.

use std::sync::OnceLock;

use regex::{NoExpand, Regex};

use crate::core::session::AngleMode;

/// Functions whose argument follows the angle mode. Inverse trig returns
/// radians and is never rewritten.
const DEG_WRAPPED: [&str; 3] = ["sin", "cos", "tan"];

static ANS_RE: OnceLock<Regex> = OnceLock::new();

/// Normalize `raw` into a form the engine accepts. Callers pass the input
/// already trimmed.
pub fn preprocess(raw: &str, angle_mode: AngleMode, previous_answer: Option<&str>) -> String {
    let mut text = raw.replace('×', "*").replace('÷', "/").replace('−', "-");

    if angle_mode == AngleMode::Degrees {
        text = wrap_deg_trig(&text);
    }

    text = substitute_ans(&text, previous_answer);

    close_parens(&text)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn matches_at(chars: &[char], at: usize, name: &str) -> bool {
    name.chars()
        .enumerate()
        .all(|(k, c)| chars.get(at + k) == Some(&c))
}

/// Wrap direct trig arguments in `deg(...)`. The inserted wrapper closes
/// where the trig call's own parenthesis closes, so whatever follows the
/// call keeps its meaning. An argument that already starts with `deg(` is
/// left alone. A call still open at end of input stays open here;
/// [`close_parens`] settles it.
fn wrap_deg_trig(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 16);
    let mut depth: i32 = 0;
    // Call depths that still owe a ')' for an inserted wrapper.
    let mut pending: Vec<i32> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '(' => {
                depth += 1;
                out.push('(');
                i += 1;
            }
            ')' => {
                if pending.last() == Some(&depth) {
                    out.push(')');
                    pending.pop();
                }
                depth -= 1;
                out.push(')');
                i += 1;
            }
            c => {
                let boundary = i == 0 || !is_word_char(chars[i - 1]);
                let mut call: Option<&str> = None;
                if boundary {
                    for name in DEG_WRAPPED {
                        if matches_at(&chars, i, name) && chars.get(i + name.len()) == Some(&'(') {
                            call = Some(name);
                            break;
                        }
                    }
                }
                match call {
                    Some(name) => {
                        let arg_start = i + name.len() + 1;
                        let already_wrapped = matches_at(&chars, arg_start, "deg")
                            && chars.get(arg_start + 3) == Some(&'(');
                        out.push_str(name);
                        out.push('(');
                        depth += 1;
                        if !already_wrapped {
                            out.push_str("deg(");
                            pending.push(depth);
                        }
                        i = arg_start;
                    }
                    None => {
                        out.push(c);
                        i += 1;
                    }
                }
            }
        }
    }
    out
}

/// Replace the word `Ans` with the previous answer, or "0" when there is
/// none yet. Literal replacement; `$` in an answer is not a capture group.
fn substitute_ans(text: &str, previous_answer: Option<&str>) -> String {
    let re = ANS_RE.get_or_init(|| Regex::new(r"\bAns\b").expect("Ans pattern must be valid"));
    let replacement = match previous_answer {
        Some(answer) if !answer.is_empty() => answer,
        _ => "0",
    };
    re.replace_all(text, NoExpand(replacement)).into_owned()
}

/// Append the `)` still owed at end of input. Surplus `)` are kept as-is;
/// the balance never goes negative.
fn close_parens(text: &str) -> String {
    let mut balance: usize = 0;
    for ch in text.chars() {
        match ch {
            '(' => balance += 1,
            ')' => balance = balance.saturating_sub(1),
            _ => {}
        }
    }
    let mut out = String::with_capacity(text.len() + balance);
    out.push_str(text);
    for _ in 0..balance {
        out.push(')');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deg(raw: &str) -> String {
        preprocess(raw, AngleMode::Degrees, None)
    }

    #[test]
    fn replaces_visual_glyphs() {
        assert_eq!(deg("6×7÷2−1"), "6*7/2-1");
    }

    #[test]
    fn wraps_trig_argument_in_deg_mode() {
        assert_eq!(deg("sin(30)"), "sin(deg(30))");
        assert_eq!(deg("cos(45)*2"), "cos(deg(45))*2");
    }

    #[test]
    fn wrap_closes_with_the_call_not_the_expression() {
        assert_eq!(deg("sin(30)+1"), "sin(deg(30))+1");
        assert_eq!(deg("tan(60)/tan(30)"), "tan(deg(60))/tan(deg(30))");
    }

    #[test]
    fn wraps_nested_calls() {
        assert_eq!(deg("sin(cos(30))"), "sin(deg(cos(deg(30))))");
        assert_eq!(deg("sin((1+2)*10)"), "sin(deg((1+2)*10))");
    }

    #[test]
    fn inverse_trig_is_untouched() {
        assert_eq!(deg("asin(0.5)"), "asin(0.5)");
        assert_eq!(deg("atan(1)+acos(0)"), "atan(1)+acos(0)");
    }

    #[test]
    fn rad_mode_skips_wrapping() {
        assert_eq!(preprocess("sin(30)", AngleMode::Radians, None), "sin(30)");
    }

    #[test]
    fn digit_prefix_keeps_trig_unwrapped() {
        assert_eq!(deg("2sin(5)"), "2sin(5)");
    }

    #[test]
    fn unclosed_trig_call_is_balanced_at_the_end() {
        assert_eq!(deg("sin(30"), "sin(deg(30))");
    }

    #[test]
    fn substitutes_ans_word() {
        assert_eq!(preprocess("Ans+1", AngleMode::Degrees, Some("42")), "42+1");
        assert_eq!(preprocess("Ans+1", AngleMode::Degrees, None), "0+1");
        assert_eq!(preprocess("Ans+1", AngleMode::Degrees, Some("")), "0+1");
    }

    #[test]
    fn ans_inside_identifier_is_kept() {
        assert_eq!(
            preprocess("Answer", AngleMode::Degrees, Some("42")),
            "Answer"
        );
    }

    #[test]
    fn balances_open_parens() {
        assert_eq!(deg("(((1+2"), "(((1+2)))");
        assert_eq!(deg("sqrt(2"), "sqrt(2)");
    }

    #[test]
    fn surplus_close_paren_is_kept() {
        assert_eq!(deg("2+3)"), "2+3)");
    }

    #[test]
    fn pipeline_is_idempotent() {
        for raw in ["sin(30)+cos(5)", "sin(30", "Ans+sqrt(2", "6×7"] {
            let once = preprocess(raw, AngleMode::Degrees, Some("7"));
            let twice = preprocess(&once, AngleMode::Degrees, Some("7"));
            assert_eq!(twice, once, "not idempotent for {raw:?}");
        }
    }
}
