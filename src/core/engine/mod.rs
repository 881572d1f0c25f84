//! Local expression engine: lexer, parser, and evaluator over complex
//! numbers, with 14-significant-digit display formatting.

mod format;
mod parser;

pub use format::format_complex;

use num_complex::Complex64;

/// Errors from tokenizing, parsing, or evaluating an expression. The
/// evaluation pipeline swallows these and falls back to the remote chain;
/// they surface only in debug logs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),
    #[error("unexpected token at position {0}")]
    UnexpectedToken(usize),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("factorial expects a non-negative integer up to 170")]
    FactorialDomain,
    #[error("mod expects real operands")]
    ModExpectsReal,
    #[error("result is not finite")]
    NotFinite,
}

/// Evaluate a preprocessed expression to its display string.
pub fn evaluate(expr: &str) -> Result<String, EvalError> {
    Ok(format_complex(evaluate_value(expr)?))
}

/// Evaluate to the raw complex value. Non-finite results (division by zero,
/// overflow) are reported as errors so the caller can fall back.
pub fn evaluate_value(expr: &str) -> Result<Complex64, EvalError> {
    let value = parser::parse(expr)?;
    if !value.is_finite() {
        return Err(EvalError::NotFinite);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_and_precedence() {
        assert_eq!(evaluate("2+2").unwrap(), "4");
        assert_eq!(evaluate("6*7/2-1").unwrap(), "20");
        assert_eq!(evaluate("-2^2").unwrap(), "-4");
        assert_eq!(evaluate("2^-3").unwrap(), "0.125");
        assert_eq!(evaluate("2^3^2").unwrap(), "512");
        assert_eq!(evaluate("2^3!").unwrap(), "64");
        assert_eq!(evaluate("7%3").unwrap(), "1");
        assert_eq!(evaluate("-7%3").unwrap(), "2");
    }

    #[test]
    fn functions_and_constants() {
        assert_eq!(evaluate("sqrt(16)").unwrap(), "4");
        assert_eq!(evaluate("ln(e)").unwrap(), "1");
        assert_eq!(evaluate("log(e)").unwrap(), "1");
        assert_eq!(evaluate("log10(1000)").unwrap(), "3");
        assert_eq!(evaluate("exp(0)").unwrap(), "1");
        assert_eq!(evaluate("abs(3-4i)").unwrap(), "5");
        assert_eq!(evaluate("5!").unwrap(), "120");
        assert_eq!(evaluate("2pi").unwrap(), "6.2831853071796");
    }

    #[test]
    fn degree_helper_matches_wrapped_input() {
        assert_eq!(evaluate("sin(deg(30))").unwrap(), "0.5");
        assert_eq!(evaluate("cos(deg(60))").unwrap(), "0.5");
        assert_eq!(evaluate("tan(deg(45))").unwrap(), "1");
    }

    #[test]
    fn complex_results() {
        assert_eq!(evaluate("sqrt(-1)").unwrap(), "i");
        assert_eq!(evaluate("(1/4-3/4*i)^4").unwrap(), "0.109375 + 0.375i");
        assert_eq!(evaluate("2i*3").unwrap(), "6i");
        assert_eq!(evaluate("i^2").unwrap(), "-1");
    }

    #[test]
    fn scientific_literals_and_notation() {
        assert_eq!(evaluate("1e3+1").unwrap(), "1001");
        assert_eq!(evaluate("2.5e-3").unwrap(), "0.0025");
        assert_eq!(evaluate("2e").unwrap(), "5.4365636569181");
        assert_eq!(evaluate("2^20").unwrap(), "1.048576e+6");
        assert_eq!(evaluate("10^5").unwrap(), "1e+5");
    }

    #[test]
    fn error_cases_fall_through() {
        assert!(evaluate("").is_err());
        assert!(evaluate("2+").is_err());
        assert!(evaluate("foo(3)").is_err());
        assert!(evaluate("x+1").is_err());
        assert!(evaluate("1..2").is_err());
        assert_eq!(evaluate("1/0").unwrap_err(), EvalError::NotFinite);
        assert_eq!(evaluate("0/0").unwrap_err(), EvalError::NotFinite);
        assert_eq!(evaluate("2.5!").unwrap_err(), EvalError::FactorialDomain);
        assert_eq!(evaluate("(2+3i)%2").unwrap_err(), EvalError::ModExpectsReal);
    }
}
