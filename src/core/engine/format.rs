//! Display formatting: 14 significant digits, plain decimal inside the
//! auto-notation bounds, scientific outside, complex as `a + bi`.

use num_complex::Complex64;

/// Significant digits in displayed results.
const PRECISION: usize = 14;

// Plain decimal for exponents in `LOWER_EXP..UPPER_EXP` after rounding;
// scientific notation outside. 0.001 stays plain, 0.0001 becomes 1e-4,
// 99999 stays plain, 100000 becomes 1e+5.
const LOWER_EXP: i32 = -3;
const UPPER_EXP: i32 = 5;

/// Format a complex value the way the result line shows it: the real part
/// alone when the imaginary part is zero, `bi` when the real part is zero,
/// `a + bi` / `a - bi` otherwise. A unit imaginary part renders as bare `i`.
pub fn format_complex(value: Complex64) -> String {
    if value.im == 0.0 {
        return format_real(value.re);
    }
    let magnitude = format_real(value.im.abs());
    let imaginary = if magnitude == "1" {
        "i".to_string()
    } else {
        format!("{magnitude}i")
    };
    if value.re == 0.0 {
        return if value.im < 0.0 {
            format!("-{imaginary}")
        } else {
            imaginary
        };
    }
    let sign = if value.im < 0.0 { '-' } else { '+' };
    format!("{} {} {}", format_real(value.re), sign, imaginary)
}

/// Format a finite real with [`PRECISION`] significant digits and trailing
/// zeros trimmed. Non-finite values never reach the display path, but are
/// still rendered readably.
pub(super) fn format_real(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    if !x.is_finite() {
        return if x.is_nan() {
            "NaN".to_string()
        } else if x > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    let negative = x < 0.0;
    // Round via exponential formatting; the exponent already reflects any
    // rounding carry (99999.99999999999 comes back as 1.0000000000000e5).
    let rounded = format!("{:.*e}", PRECISION - 1, x.abs());
    let (mantissa, exp_text) = rounded.split_once('e').unwrap_or((rounded.as_str(), "0"));
    let exp: i32 = exp_text.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let digits = digits.trim_end_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let body = if !(LOWER_EXP..UPPER_EXP).contains(&exp) {
        let mantissa = if digits.len() > 1 {
            format!("{}.{}", &digits[..1], &digits[1..])
        } else {
            digits.to_string()
        };
        format!("{}e{}{}", mantissa, if exp < 0 { "" } else { "+" }, exp)
    } else if exp < 0 {
        format!("0.{}{}", "0".repeat((-exp - 1) as usize), digits)
    } else {
        let point = (exp + 1) as usize;
        if digits.len() <= point {
            format!("{}{}", digits, "0".repeat(point - digits.len()))
        } else {
            format!("{}.{}", &digits[..point], &digits[point..])
        }
    };

    if negative {
        format!("-{}", body)
    } else {
        body
    }
}
