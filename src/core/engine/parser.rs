//! Lexer and Pratt parser. Evaluation happens while parsing; every value is
//! a `Complex64`, so `sqrt(-1)` and friends come out as proper complex
//! results instead of NaN.

use std::f64::consts::{E, PI};

use num_complex::Complex64;

use super::EvalError;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Bang,
    LParen,
    RParen,
}

// Binding powers. `^` is right-associative and binds tighter than unary
// minus (`-2^2` is -4); postfix `!` binds tighter than `^` (`2^3!` is 64).
const ADD_BP: (u8, u8) = (10, 11);
const MUL_BP: (u8, u8) = (20, 21);
const PREFIX_BP: u8 = 25;
const POW_BP: (u8, u8) = (31, 30);
const POSTFIX_BP: u8 = 40;

/// What the last parsed factor was. A bare number may implicitly multiply a
/// preceding group, call, constant, or factorial (`(1+2)3`, `sqrt(4)3`,
/// `pi 3`, `5!2`) but not another number literal or a unary result
/// (`2 3` and `-2 3` stay errors).
#[derive(Clone, Copy, PartialEq, Eq)]
enum Factor {
    Literal,
    Other,
}

pub(super) fn parse(input: &str) -> Result<Complex64, EvalError> {
    let tokens = lex(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let (value, _) = parser.expr(0)?;
    if parser.pos < parser.tokens.len() {
        return Err(EvalError::UnexpectedToken(parser.pos));
    }
    Ok(value)
}

fn lex(input: &str) -> Result<Vec<Token>, EvalError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            c if c.is_whitespace() => i += 1,
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                tokens.push(Token::Star);
                i += 1;
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '%' => {
                tokens.push(Token::Percent);
                i += 1;
            }
            '^' => {
                tokens.push(Token::Caret);
                i += 1;
            }
            '!' => {
                tokens.push(Token::Bang);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                // Exponent suffix only when e/E is followed by an optional
                // sign and a digit; a bare trailing e stays the constant.
                if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                    let mut j = i + 1;
                    if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                        j += 1;
                    }
                    if j < chars.len() && chars[j].is_ascii_digit() {
                        i = j + 1;
                        while i < chars.len() && chars[i].is_ascii_digit() {
                            i += 1;
                        }
                    }
                }
                let text: String = chars[start..i].iter().collect();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| EvalError::InvalidNumber(text))?;
                tokens.push(Token::Number(value));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                tokens.push(Token::Ident(chars[start..i].iter().collect()));
            }
            other => return Err(EvalError::UnexpectedChar(other)),
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect_rparen(&mut self) -> Result<(), EvalError> {
        match self.bump() {
            Some(Token::RParen) => Ok(()),
            Some(_) => Err(EvalError::UnexpectedToken(self.pos - 1)),
            None => Err(EvalError::UnexpectedEnd),
        }
    }

    fn expr(&mut self, min_bp: u8) -> Result<(Complex64, Factor), EvalError> {
        let (mut lhs, mut last) = self.prefix()?;

        loop {
            match self.peek() {
                Some(Token::Bang) => {
                    if POSTFIX_BP < min_bp {
                        break;
                    }
                    self.pos += 1;
                    lhs = factorial(lhs)?;
                    last = Factor::Other;
                }
                Some(Token::Plus) => {
                    if ADD_BP.0 < min_bp {
                        break;
                    }
                    self.pos += 1;
                    let (rhs, kind) = self.expr(ADD_BP.1)?;
                    lhs += rhs;
                    last = kind;
                }
                Some(Token::Minus) => {
                    if ADD_BP.0 < min_bp {
                        break;
                    }
                    self.pos += 1;
                    let (rhs, kind) = self.expr(ADD_BP.1)?;
                    lhs -= rhs;
                    last = kind;
                }
                Some(Token::Star) => {
                    if MUL_BP.0 < min_bp {
                        break;
                    }
                    self.pos += 1;
                    let (rhs, kind) = self.expr(MUL_BP.1)?;
                    lhs *= rhs;
                    last = kind;
                }
                Some(Token::Slash) => {
                    if MUL_BP.0 < min_bp {
                        break;
                    }
                    self.pos += 1;
                    let (rhs, kind) = self.expr(MUL_BP.1)?;
                    lhs /= rhs;
                    last = kind;
                }
                Some(Token::Percent) => {
                    if MUL_BP.0 < min_bp {
                        break;
                    }
                    self.pos += 1;
                    let (rhs, kind) = self.expr(MUL_BP.1)?;
                    lhs = modulo(lhs, rhs)?;
                    last = kind;
                }
                Some(Token::Caret) => {
                    if POW_BP.0 < min_bp {
                        break;
                    }
                    self.pos += 1;
                    let (rhs, kind) = self.expr(POW_BP.1)?;
                    lhs = pow(lhs, rhs);
                    last = kind;
                }
                // Implicit multiplication: 2pi, 3i, 3(1+2), (1+2)(3+4).
                Some(Token::Ident(_)) | Some(Token::LParen) => {
                    if MUL_BP.0 < min_bp {
                        break;
                    }
                    let (rhs, kind) = self.expr(MUL_BP.1)?;
                    lhs *= rhs;
                    last = kind;
                }
                // A bare number continues the product only after a non-literal
                // factor: (1+2)3, sqrt(4)3. After a literal it is a syntax
                // error caught by the trailing-token check.
                Some(Token::Number(_)) => {
                    if MUL_BP.0 < min_bp || last == Factor::Literal {
                        break;
                    }
                    let (rhs, kind) = self.expr(MUL_BP.1)?;
                    lhs *= rhs;
                    last = kind;
                }
                _ => break,
            }
        }
        Ok((lhs, last))
    }

    fn prefix(&mut self) -> Result<(Complex64, Factor), EvalError> {
        match self.bump() {
            Some(Token::Number(n)) => Ok((Complex64::new(n, 0.0), Factor::Literal)),
            Some(Token::Minus) => {
                let (value, _) = self.expr(PREFIX_BP)?;
                Ok((-value, Factor::Literal))
            }
            Some(Token::Plus) => {
                let (value, _) = self.expr(PREFIX_BP)?;
                Ok((value, Factor::Literal))
            }
            Some(Token::LParen) => {
                let (value, _) = self.expr(0)?;
                self.expect_rparen()?;
                Ok((value, Factor::Other))
            }
            Some(Token::Ident(name)) => Ok((self.ident(name)?, Factor::Other)),
            Some(_) => Err(EvalError::UnexpectedToken(self.pos - 1)),
            None => Err(EvalError::UnexpectedEnd),
        }
    }

    /// An identifier followed by `(` is a call; anything else must be a
    /// constant. `pi(3)` is an error, not `pi*3`, matching the usual
    /// expression-parser reading.
    fn ident(&mut self, name: String) -> Result<Complex64, EvalError> {
        if self.peek() == Some(&Token::LParen) {
            self.pos += 1;
            let (arg, _) = self.expr(0)?;
            self.expect_rparen()?;
            return apply_function(&name, arg).ok_or(EvalError::UnknownIdentifier(name));
        }
        constant(&name).ok_or(EvalError::UnknownIdentifier(name))
    }
}

fn constant(name: &str) -> Option<Complex64> {
    match name {
        "pi" => Some(Complex64::new(PI, 0.0)),
        "e" => Some(Complex64::new(E, 0.0)),
        "i" => Some(Complex64::new(0.0, 1.0)),
        _ => None,
    }
}

/// Real values must carry a `+0.0` imaginary part into functions with a
/// branch cut on the negative real axis: unary minus and products of
/// negative reals leave `-0.0` there, and `sqrt`/`ln`/`powf` read the sign
/// of that zero as the side of the cut (`sqrt(-1)` would come out `-i`).
fn canonical(z: Complex64) -> Complex64 {
    if z.im == 0.0 {
        Complex64::new(z.re, 0.0)
    } else {
        z
    }
}

/// `ln` and `log` are both the natural logarithm; base 10 is `log10`.
/// `deg` converts degrees to radians, which is what the preprocessor wraps
/// trig arguments in.
fn apply_function(name: &str, z: Complex64) -> Option<Complex64> {
    let z = canonical(z);
    let value = match name {
        "sin" => z.sin(),
        "cos" => z.cos(),
        "tan" => z.tan(),
        "asin" => z.asin(),
        "acos" => z.acos(),
        "atan" => z.atan(),
        "sqrt" => z.sqrt(),
        "ln" | "log" => z.ln(),
        "log10" => z.log(10.0),
        "exp" => z.exp(),
        "abs" => Complex64::new(z.norm(), 0.0),
        "deg" => z.scale(PI / 180.0),
        _ => return None,
    };
    Some(value)
}

fn factorial(z: Complex64) -> Result<Complex64, EvalError> {
    if z.im != 0.0 || z.re < 0.0 || z.re.fract() != 0.0 || z.re > 170.0 {
        return Err(EvalError::FactorialDomain);
    }
    let n = z.re as u32;
    let mut acc = 1.0_f64;
    for k in 2..=n {
        acc *= k as f64;
    }
    Ok(Complex64::new(acc, 0.0))
}

/// Mod with the sign of the divisor; `x % 0` is `x`.
fn modulo(x: Complex64, y: Complex64) -> Result<Complex64, EvalError> {
    if x.im != 0.0 || y.im != 0.0 {
        return Err(EvalError::ModExpectsReal);
    }
    if y.re == 0.0 {
        return Ok(Complex64::new(x.re, 0.0));
    }
    Ok(Complex64::new(x.re - y.re * (x.re / y.re).floor(), 0.0))
}

/// Integer exponents go through `powi` so binary-exact bases stay exact;
/// real exponents through `powf`; complex exponents through `powc`.
fn pow(base: Complex64, exp: Complex64) -> Complex64 {
    let base = canonical(base);
    if exp.im == 0.0 && exp.re.fract() == 0.0 && exp.re.abs() <= i32::MAX as f64 {
        base.powi(exp.re as i32)
    } else if exp.im == 0.0 {
        base.powf(exp.re)
    } else {
        base.powc(exp)
    }
}
