//! Restricted arithmetic expression evaluator.
//!
//! Parses user-typed arithmetic (`"12*(3+4)-5"`) into a closed expression
//! tree and evaluates it to an `f64`. The grammar admits numeric literals,
//! `+ - * / // % **` (`^` is accepted for `**`), unary sign and
//! parentheses, nothing else. Identifiers are recognized as a token class
//! purely so that name-lookup or call-like input can be rejected with its
//! own error kind instead of a generic parse failure.
//!
//! Precedence, loosest to tightest: `+ -`, then `* / // %`, then unary
//! sign, then `**`. `**` is right-associative and binds tighter than a
//! unary sign on its left, so `-2**2 == -4` while `2**-3` still parses.

use thiserror::Error;

/// Inputs longer than this are rejected before tokenization. Parenthesis
/// nesting is the only way parse cost grows with input size, and no
/// keypad-sized expression comes anywhere near this bound.
pub const MAX_INPUT_LEN: usize = 1000;

/// Failure kinds for [`evaluate`]. Callers match on the variant, never on
/// the message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Input does not conform to the arithmetic grammar.
    #[error("syntax error: {0}")]
    Syntax(String),
    /// Input parsed to a recognized construct outside the
    /// literal/operator whitelist (identifiers, calls).
    #[error("disallowed construct: {0}")]
    Disallowed(String),
    /// A division, floor division or remainder with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// An operation produced a non-finite value (overflow or NaN).
    #[error("result is not a finite number")]
    NonFinite,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `+x`
    Plus,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// `//`, floored division.
    FloorDiv,
    /// `%`, floored remainder (sign follows the divisor).
    Rem,
    /// `**` or `^`, right-associative.
    Pow,
}

/// A parsed arithmetic expression. The enum is closed: no identifier,
/// call, or any other construct is representable, which is what makes
/// evaluation safe without a separate whitelist walk.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(f64),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    DoubleSlash,
    Percent,
    DoubleStar,
    LParen,
    RParen,
}

fn tokenize(text: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut end = start;
                let mut saw_digit = false;
                while let Some(&(i, d)) = chars.peek() {
                    match d {
                        '0'..='9' => saw_digit = true,
                        '.' => {}
                        _ => break,
                    }
                    end = i + d.len_utf8();
                    chars.next();
                }
                // Optional exponent part: e or E, optional sign, digits.
                // Only consumed when a digit actually follows, so "1e" and
                // "2*e" leave the 'e' behind as an identifier token.
                if saw_digit {
                    if let Some(&(i, e)) = chars.peek() {
                        if e == 'e' || e == 'E' {
                            let mut lookahead = chars.clone();
                            lookahead.next();
                            if let Some(&(_, s)) = lookahead.peek() {
                                if s == '+' || s == '-' {
                                    lookahead.next();
                                }
                            }
                            if matches!(lookahead.peek(), Some(&(_, d)) if d.is_ascii_digit()) {
                                chars.next();
                                end = i + e.len_utf8();
                                if let Some(&(j, s)) = chars.peek() {
                                    if s == '+' || s == '-' {
                                        end = j + s.len_utf8();
                                        chars.next();
                                    }
                                }
                                while let Some(&(j, d)) = chars.peek() {
                                    if d.is_ascii_digit() {
                                        end = j + d.len_utf8();
                                        chars.next();
                                    } else {
                                        break;
                                    }
                                }
                            }
                        }
                    }
                }
                let slice = &text[start..end];
                let value: f64 = slice
                    .parse()
                    .map_err(|_| EvalError::Syntax(format!("invalid number '{slice}'")))?;
                tokens.push(Token::Number(value));
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut end = start;
                while let Some(&(i, d)) = chars.peek() {
                    if d.is_alphanumeric() || d == '_' {
                        end = i + d.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Ident(text[start..end].to_string()));
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                if matches!(chars.peek(), Some(&(_, '*'))) {
                    chars.next();
                    tokens.push(Token::DoubleStar);
                } else {
                    tokens.push(Token::Star);
                }
            }
            '/' => {
                chars.next();
                if matches!(chars.peek(), Some(&(_, '/'))) {
                    chars.next();
                    tokens.push(Token::DoubleSlash);
                } else {
                    tokens.push(Token::Slash);
                }
            }
            '^' => {
                chars.next();
                tokens.push(Token::DoubleStar);
            }
            '%' => {
                chars.next();
                tokens.push(Token::Percent);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            other => {
                return Err(EvalError::Syntax(format!("invalid character '{other}'")));
            }
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// `expression := additive`, then the token stream must be exhausted.
    fn parse(&mut self) -> Result<Expr, EvalError> {
        let expr = self.additive()?;
        match self.peek() {
            None => Ok(expr),
            Some(Token::RParen) => Err(EvalError::Syntax("unbalanced ')'".into())),
            Some(other) => Err(EvalError::Syntax(format!(
                "unexpected trailing {}",
                describe(other)
            ))),
        }
    }

    /// `additive := multiplicative (("+" | "-") multiplicative)*`
    fn additive(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.multiplicative()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => BinaryOp::Add,
                Some(Token::Minus) => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.multiplicative()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    /// `multiplicative := unary (("*" | "/" | "//" | "%") unary)*`
    fn multiplicative(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => BinaryOp::Mul,
                Some(Token::Slash) => BinaryOp::Div,
                Some(Token::DoubleSlash) => BinaryOp::FloorDiv,
                Some(Token::Percent) => BinaryOp::Rem,
                _ => break,
            };
            self.advance();
            let rhs = self.unary()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
        Ok(lhs)
    }

    /// `unary := ("+" | "-") unary | power`
    ///
    /// The sign wraps the *power* below it, not the whole power chain to
    /// its left, so `-2**2` groups as `-(2**2)`.
    fn unary(&mut self) -> Result<Expr, EvalError> {
        let op = match self.peek() {
            Some(Token::Plus) => Some(UnaryOp::Plus),
            Some(Token::Minus) => Some(UnaryOp::Neg),
            _ => None,
        };
        if let Some(op) = op {
            self.advance();
            let operand = self.unary()?;
            return Ok(Expr::Unary {
                op,
                operand: Box::new(operand),
            });
        }
        self.power()
    }

    /// `power := atom ("**" unary)?` — right-associative via the `unary`
    /// on the right-hand side, which also admits a signed exponent.
    fn power(&mut self) -> Result<Expr, EvalError> {
        let base = self.atom()?;
        if matches!(self.peek(), Some(Token::DoubleStar)) {
            self.advance();
            let exponent = self.unary()?;
            return Ok(Expr::Binary {
                op: BinaryOp::Pow,
                lhs: Box::new(base),
                rhs: Box::new(exponent),
            });
        }
        Ok(base)
    }

    /// `atom := number | "(" expression ")"`. Identifiers are rejected
    /// here with the dedicated kind: they are recognized, not malformed.
    fn atom(&mut self) -> Result<Expr, EvalError> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(Expr::Literal(value)),
            Some(Token::Ident(name)) => Err(EvalError::Disallowed(format!("identifier '{name}'"))),
            Some(Token::LParen) => {
                if matches!(self.peek(), Some(Token::RParen)) {
                    return Err(EvalError::Syntax("empty parentheses".into()));
                }
                let inner = self.additive()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(EvalError::Syntax("expected ')'".into())),
                }
            }
            Some(other) => Err(EvalError::Syntax(format!(
                "unexpected {}",
                describe(&other)
            ))),
            None => Err(EvalError::Syntax("unexpected end of input".into())),
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Number(n) => format!("number '{n}'"),
        Token::Ident(name) => format!("identifier '{name}'"),
        Token::Plus => "'+'".into(),
        Token::Minus => "'-'".into(),
        Token::Star => "'*'".into(),
        Token::Slash => "'/'".into(),
        Token::DoubleSlash => "'//'".into(),
        Token::Percent => "'%'".into(),
        Token::DoubleStar => "'**'".into(),
        Token::LParen => "'('".into(),
        Token::RParen => "')'".into(),
    }
}

impl Expr {
    /// Evaluate the tree bottom-up. Every node value must be finite;
    /// anything else aborts the whole call.
    pub fn eval(&self) -> Result<f64, EvalError> {
        let value = match self {
            Expr::Literal(value) => *value,
            Expr::Unary { op, operand } => {
                let v = operand.eval()?;
                match op {
                    UnaryOp::Neg => -v,
                    UnaryOp::Plus => v,
                }
            }
            Expr::Binary { op, lhs, rhs } => {
                let a = lhs.eval()?;
                let b = rhs.eval()?;
                match op {
                    BinaryOp::Add => a + b,
                    BinaryOp::Sub => a - b,
                    BinaryOp::Mul => a * b,
                    BinaryOp::Div => {
                        if b == 0.0 {
                            return Err(EvalError::DivisionByZero);
                        }
                        a / b
                    }
                    BinaryOp::FloorDiv => {
                        if b == 0.0 {
                            return Err(EvalError::DivisionByZero);
                        }
                        (a / b).floor()
                    }
                    BinaryOp::Rem => {
                        if b == 0.0 {
                            return Err(EvalError::DivisionByZero);
                        }
                        a - b * (a / b).floor()
                    }
                    BinaryOp::Pow => a.powf(b),
                }
            }
        };
        if !value.is_finite() {
            return Err(EvalError::NonFinite);
        }
        Ok(value)
    }
}

/// Parse `text` into an expression tree without evaluating it.
pub fn parse(text: &str) -> Result<Expr, EvalError> {
    if text.len() > MAX_INPUT_LEN {
        return Err(EvalError::Syntax("input too long".into()));
    }
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(EvalError::Syntax("empty expression".into()));
    }
    Parser::new(tokens).parse()
}

/// Evaluate an arithmetic string to a single finite number.
///
/// Deterministic and stateless: the same input always yields the same
/// value or the same error kind.
pub fn evaluate(text: &str) -> Result<f64, EvalError> {
    parse(text)?.eval()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
        assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
        assert_eq!(evaluate("12*(3+4)-5").unwrap(), 79.0);
        assert_eq!(evaluate("10-4/2").unwrap(), 8.0);
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(evaluate("3-2-1").unwrap(), 0.0);
        assert_eq!(evaluate("5-2-1").unwrap(), 2.0);
        assert_eq!(evaluate("100/10/5").unwrap(), 2.0);
    }

    #[test]
    fn test_power_right_associative() {
        assert_eq!(evaluate("2**3**2").unwrap(), 512.0);
        assert_eq!(evaluate("2^3").unwrap(), 8.0);
        assert_eq!(evaluate("(2**3)**2").unwrap(), 64.0);
    }

    #[test]
    fn test_unary_sign() {
        assert_eq!(evaluate("-5+2").unwrap(), -3.0);
        assert_eq!(evaluate("+5").unwrap(), 5.0);
        assert_eq!(evaluate("--5").unwrap(), 5.0);
        assert_eq!(evaluate("3*-2").unwrap(), -6.0);
    }

    #[test]
    fn test_unary_binds_looser_than_power() {
        // Python-style convention: -2**2 groups as -(2**2).
        assert_eq!(evaluate("-2**2").unwrap(), -4.0);
        assert_eq!(evaluate("(-2)**2").unwrap(), 4.0);
        assert_eq!(evaluate("2**-3").unwrap(), 0.125);
    }

    #[test]
    fn test_floor_div_and_rem() {
        assert_eq!(evaluate("10%3").unwrap(), 1.0);
        assert_eq!(evaluate("7//2").unwrap(), 3.0);
        assert_eq!(evaluate("-7//2").unwrap(), -4.0);
        // Floored remainder: sign follows the divisor.
        assert_eq!(evaluate("-7%3").unwrap(), 2.0);
        assert_eq!(evaluate("7%-3").unwrap(), -2.0);
    }

    #[test]
    fn test_decimals_and_exponents() {
        assert_eq!(evaluate("1.5*2").unwrap(), 3.0);
        assert_eq!(evaluate(".5+.5").unwrap(), 1.0);
        assert_eq!(evaluate("2e3").unwrap(), 2000.0);
        assert_eq!(evaluate("1.5e-1*10").unwrap(), 1.5);
        assert_eq!(evaluate("2e3+4").unwrap(), 2004.0);
    }

    #[test]
    fn test_whitespace_insignificant() {
        assert_eq!(evaluate(" 12 * ( 3 + 4 ) - 5 ").unwrap(), 79.0);
        assert_eq!(evaluate("1\t+\t1").unwrap(), 2.0);
    }

    #[test]
    fn test_syntax_errors() {
        assert!(matches!(evaluate(""), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("   "), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("("), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate(")("), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("1+"), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("-"), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("+"), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("()"), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("1 2"), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("(1+2"), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("1.2.3"), Err(EvalError::Syntax(_))));
        assert!(matches!(evaluate("1$2"), Err(EvalError::Syntax(_))));
    }

    #[test]
    fn test_disallowed_constructs() {
        assert!(matches!(evaluate("abs(1)"), Err(EvalError::Disallowed(_))));
        assert!(matches!(evaluate("x+1"), Err(EvalError::Disallowed(_))));
        assert!(matches!(evaluate("2*pi"), Err(EvalError::Disallowed(_))));
        assert!(matches!(
            evaluate("__import__"),
            Err(EvalError::Disallowed(_))
        ));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("1/0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("1/0.0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("1/(2-2)"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("5//0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("5%0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_non_finite_results() {
        assert_eq!(evaluate("10**400"), Err(EvalError::NonFinite));
        assert_eq!(evaluate("(-8)**0.5"), Err(EvalError::NonFinite));
        assert_eq!(evaluate("1e999"), Err(EvalError::NonFinite));
        assert_eq!(evaluate("0**-1"), Err(EvalError::NonFinite));
    }

    #[test]
    fn test_input_length_cap() {
        let long = "1+".repeat(600) + "1";
        assert!(matches!(evaluate(&long), Err(EvalError::Syntax(_))));
        // A deep but in-bounds nest still parses fine.
        let nested = format!("{}1{}", "(".repeat(100), ")".repeat(100));
        assert_eq!(evaluate(&nested).unwrap(), 1.0);
    }

    #[test]
    fn test_idempotent() {
        let first = evaluate("12*(3+4)-5");
        let second = evaluate("12*(3+4)-5");
        assert_eq!(first, second);
        assert_eq!(evaluate("1/0"), evaluate("1/0"));
    }

    #[test]
    fn test_parse_tree_shape() {
        // 1+2*3 groups the product under the sum.
        let tree = parse("1+2*3").unwrap();
        match tree {
            Expr::Binary {
                op: BinaryOp::Add,
                lhs,
                rhs,
            } => {
                assert_eq!(*lhs, Expr::Literal(1.0));
                assert!(matches!(
                    *rhs,
                    Expr::Binary {
                        op: BinaryOp::Mul,
                        ..
                    }
                ));
            }
            other => panic!("unexpected tree: {other:?}"),
        }
    }
}
