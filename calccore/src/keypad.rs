//! Keypad input state machine.
//!
//! Collects discrete keypad presses into an accumulating expression
//! string and commits it to the evaluator only on `=`. The machine owns
//! no display surface: GUI apps feed it [`KeyInput`] values and render
//! [`Keypad::display`], which keeps every transition testable headless.

use crate::expr::{evaluate, EvalError};
use crate::format::format_number;

/// Cap on the accumulated expression buffer. Presses that would grow the
/// buffer past this are ignored.
pub const MAX_EXPR_LEN: usize = 256;

/// Where the machine is in the entry cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadState {
    /// Building an operand; the buffer ends in a value character.
    Entering,
    /// The buffer ends where an operand must follow (operator or `(`).
    OperatorPending,
    /// The display shows a committed result; a digit starts fresh, an
    /// operator continues from the result.
    Result,
}

/// Binary operator keys on the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinKey {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    FloorDiv,
    Pow,
}

impl BinKey {
    fn text(self) -> &'static str {
        match self {
            BinKey::Add => "+",
            BinKey::Sub => "-",
            BinKey::Mul => "*",
            BinKey::Div => "/",
            BinKey::Rem => "%",
            BinKey::FloorDiv => "//",
            BinKey::Pow => "**",
        }
    }
}

/// A single keypad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Digit(char),
    Dot,
    Op(BinKey),
    OpenParen,
    CloseParen,
    Equals,
    Clear,
    Backspace,
    ToggleSign,
}

/// Short display message for an evaluation failure. Kinds map to distinct
/// messages without inspecting message text.
pub fn error_message(err: &EvalError) -> &'static str {
    match err {
        EvalError::DivisionByZero => "Division by zero",
        EvalError::NonFinite => "Overflow",
        EvalError::Syntax(_) | EvalError::Disallowed(_) => "Error",
    }
}

/// The keypad entry state machine.
#[derive(Debug, Clone)]
pub struct Keypad {
    expr: String,
    display: String,
    state: KeypadState,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    pub fn new() -> Self {
        Self {
            expr: String::new(),
            display: "0".to_string(),
            state: KeypadState::Entering,
        }
    }

    /// What the calculator display should show right now.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The pending expression buffer (empty after clear or an error).
    pub fn expression(&self) -> &str {
        &self.expr
    }

    pub fn state(&self) -> KeypadState {
        self.state
    }

    /// Feed one keypad press into the machine.
    pub fn press(&mut self, input: KeyInput) {
        match input {
            KeyInput::Digit(d) => self.press_digit(d),
            KeyInput::Dot => self.press_dot(),
            KeyInput::Op(key) => self.press_op(key),
            KeyInput::OpenParen => self.press_open_paren(),
            KeyInput::CloseParen => self.press_close_paren(),
            KeyInput::Equals => self.press_equals(),
            KeyInput::Clear => *self = Self::new(),
            KeyInput::Backspace => self.press_backspace(),
            KeyInput::ToggleSign => self.press_toggle_sign(),
        }
    }

    fn press_digit(&mut self, d: char) {
        if !d.is_ascii_digit() {
            return;
        }
        if self.state == KeypadState::Result {
            self.expr.clear();
        }
        self.try_append(&d.to_string());
        self.state = KeypadState::Entering;
        self.sync_display();
    }

    fn press_dot(&mut self) {
        if self.state == KeypadState::Result {
            self.expr.clear();
        }
        // "0." at an operand start, plain "." after a digit.
        if self.expr.ends_with(|c: char| c.is_ascii_digit()) {
            self.try_append(".");
        } else {
            self.try_append("0.");
        }
        self.state = KeypadState::Entering;
        self.sync_display();
    }

    fn press_op(&mut self, key: BinKey) {
        // A second operator press replaces the pending one.
        let base_len = if self.state == KeypadState::OperatorPending {
            self.stripped_len()
        } else {
            self.expr.len()
        };
        let prefix = &self.expr[..base_len];
        let at_operand_start = prefix.is_empty() || prefix.ends_with('(');
        if at_operand_start && !matches!(key, BinKey::Add | BinKey::Sub) {
            return;
        }
        self.expr.truncate(base_len);
        self.try_append(key.text());
        self.state = KeypadState::OperatorPending;
        self.sync_display();
    }

    fn press_open_paren(&mut self) {
        if self.state == KeypadState::Result {
            self.expr.clear();
        }
        // No implicit multiplication: only at an operand position.
        if self.expr.is_empty()
            || self.expr.ends_with('(')
            || self.expr.ends_with(is_operator_char)
        {
            self.try_append("(");
            self.state = KeypadState::OperatorPending;
            self.sync_display();
        }
    }

    fn press_close_paren(&mut self) {
        let opens = self.expr.matches('(').count();
        let closes = self.expr.matches(')').count();
        let after_value = self
            .expr
            .ends_with(|c: char| c.is_ascii_digit() || c == '.' || c == ')');
        if opens > closes && after_value {
            self.try_append(")");
            self.state = KeypadState::Entering;
            self.sync_display();
        }
    }

    fn press_equals(&mut self) {
        if self.expr.is_empty() {
            return;
        }
        // Drop a dangling operator or open paren, then auto-close.
        let mut working = self.expr.clone();
        while working.ends_with(is_operator_char) || working.ends_with('(') {
            working.pop();
        }
        if working.is_empty() {
            *self = Self::new();
            return;
        }
        let opens = working.matches('(').count();
        let closes = working.matches(')').count();
        for _ in closes..opens {
            working.push(')');
        }

        match evaluate(&working) {
            Ok(value) => {
                self.display = format_number(value);
                self.expr = self.display.clone();
                self.state = KeypadState::Result;
            }
            Err(err) => {
                self.display = error_message(&err).to_string();
                self.expr.clear();
                self.state = KeypadState::Entering;
            }
        }
    }

    fn press_backspace(&mut self) {
        if self.state == KeypadState::Result {
            *self = Self::new();
            return;
        }
        self.expr.pop();
        self.state = if self.expr.is_empty() {
            KeypadState::Entering
        } else if self.expr.ends_with(is_operator_char) || self.expr.ends_with('(') {
            KeypadState::OperatorPending
        } else {
            KeypadState::Entering
        };
        self.sync_display();
    }

    fn press_toggle_sign(&mut self) {
        // Only meaningful while the buffer is a plain number.
        if let Ok(value) = self.expr.parse::<f64>() {
            if value != 0.0 {
                self.expr = format_number(-value);
                self.sync_display();
            }
        }
    }

    fn stripped_len(&self) -> usize {
        self.expr.trim_end_matches(is_operator_char).len()
    }

    fn try_append(&mut self, s: &str) {
        if self.expr.len() + s.len() <= MAX_EXPR_LEN {
            self.expr.push_str(s);
        }
    }

    fn sync_display(&mut self) {
        self.display = if self.expr.is_empty() {
            "0".to_string()
        } else {
            self.expr.clone()
        };
    }
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '%')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(pad: &mut Keypad, inputs: &[KeyInput]) {
        for &input in inputs {
            pad.press(input);
        }
    }

    #[test]
    fn test_initial_state() {
        let pad = Keypad::new();
        assert_eq!(pad.display(), "0");
        assert_eq!(pad.state(), KeypadState::Entering);
        assert_eq!(pad.expression(), "");
    }

    #[test]
    fn test_enter_and_evaluate() {
        let mut pad = Keypad::new();
        press_all(
            &mut pad,
            &[
                KeyInput::Digit('1'),
                KeyInput::Digit('2'),
                KeyInput::Op(BinKey::Add),
                KeyInput::Digit('3'),
            ],
        );
        assert_eq!(pad.display(), "12+3");
        assert_eq!(pad.state(), KeypadState::Entering);
        pad.press(KeyInput::Equals);
        assert_eq!(pad.display(), "15");
        assert_eq!(pad.state(), KeypadState::Result);
    }

    #[test]
    fn test_state_transitions() {
        let mut pad = Keypad::new();
        pad.press(KeyInput::Digit('7'));
        assert_eq!(pad.state(), KeypadState::Entering);
        pad.press(KeyInput::Op(BinKey::Mul));
        assert_eq!(pad.state(), KeypadState::OperatorPending);
        pad.press(KeyInput::Digit('3'));
        assert_eq!(pad.state(), KeypadState::Entering);
        pad.press(KeyInput::Equals);
        assert_eq!(pad.state(), KeypadState::Result);
        assert_eq!(pad.display(), "21");
    }

    #[test]
    fn test_equals_with_dangling_operator() {
        let mut pad = Keypad::new();
        press_all(
            &mut pad,
            &[
                KeyInput::Digit('7'),
                KeyInput::Op(BinKey::Mul),
                KeyInput::Equals,
            ],
        );
        assert_eq!(pad.display(), "7");
    }

    #[test]
    fn test_operator_replacement() {
        let mut pad = Keypad::new();
        press_all(
            &mut pad,
            &[
                KeyInput::Digit('5'),
                KeyInput::Op(BinKey::Add),
                KeyInput::Op(BinKey::Mul),
                KeyInput::Digit('2'),
                KeyInput::Equals,
            ],
        );
        assert_eq!(pad.display(), "10");
    }

    #[test]
    fn test_two_char_operator_replacement() {
        let mut pad = Keypad::new();
        press_all(
            &mut pad,
            &[
                KeyInput::Digit('5'),
                KeyInput::Op(BinKey::Pow),
                KeyInput::Op(BinKey::Add),
                KeyInput::Digit('2'),
            ],
        );
        assert_eq!(pad.expression(), "5+2");
    }

    #[test]
    fn test_division_by_zero_resets() {
        let mut pad = Keypad::new();
        press_all(
            &mut pad,
            &[
                KeyInput::Digit('1'),
                KeyInput::Op(BinKey::Div),
                KeyInput::Digit('0'),
                KeyInput::Equals,
            ],
        );
        assert_eq!(pad.display(), "Division by zero");
        assert_eq!(pad.expression(), "");
        assert_eq!(pad.state(), KeypadState::Entering);
    }

    #[test]
    fn test_paren_auto_close() {
        let mut pad = Keypad::new();
        press_all(
            &mut pad,
            &[
                KeyInput::OpenParen,
                KeyInput::Digit('1'),
                KeyInput::Op(BinKey::Add),
                KeyInput::Digit('2'),
                KeyInput::Equals,
            ],
        );
        assert_eq!(pad.display(), "3");
    }

    #[test]
    fn test_close_paren_guards() {
        let mut pad = Keypad::new();
        // No open paren to close.
        pad.press(KeyInput::Digit('1'));
        pad.press(KeyInput::CloseParen);
        assert_eq!(pad.expression(), "1");
        // Balanced use works.
        let mut pad = Keypad::new();
        press_all(
            &mut pad,
            &[
                KeyInput::OpenParen,
                KeyInput::Digit('2'),
                KeyInput::CloseParen,
                KeyInput::Op(BinKey::Mul),
                KeyInput::Digit('4'),
                KeyInput::Equals,
            ],
        );
        assert_eq!(pad.display(), "8");
    }

    #[test]
    fn test_result_continues_with_operator() {
        let mut pad = Keypad::new();
        press_all(
            &mut pad,
            &[
                KeyInput::Digit('9'),
                KeyInput::Op(BinKey::Add),
                KeyInput::Digit('6'),
                KeyInput::Equals,
                KeyInput::Op(BinKey::Sub),
                KeyInput::Digit('5'),
                KeyInput::Equals,
            ],
        );
        assert_eq!(pad.display(), "10");
    }

    #[test]
    fn test_result_digit_starts_fresh() {
        let mut pad = Keypad::new();
        press_all(
            &mut pad,
            &[
                KeyInput::Digit('9'),
                KeyInput::Equals,
                KeyInput::Digit('4'),
            ],
        );
        assert_eq!(pad.display(), "4");
        assert_eq!(pad.state(), KeypadState::Entering);
    }

    #[test]
    fn test_backspace() {
        let mut pad = Keypad::new();
        press_all(
            &mut pad,
            &[
                KeyInput::Digit('1'),
                KeyInput::Digit('2'),
                KeyInput::Op(BinKey::Add),
            ],
        );
        pad.press(KeyInput::Backspace);
        assert_eq!(pad.display(), "12");
        assert_eq!(pad.state(), KeypadState::Entering);
        pad.press(KeyInput::Backspace);
        assert_eq!(pad.display(), "1");
        pad.press(KeyInput::Backspace);
        assert_eq!(pad.display(), "0");
    }

    #[test]
    fn test_clear() {
        let mut pad = Keypad::new();
        press_all(&mut pad, &[KeyInput::Digit('8'), KeyInput::Clear]);
        assert_eq!(pad.display(), "0");
        assert_eq!(pad.expression(), "");
        assert_eq!(pad.state(), KeypadState::Entering);
    }

    #[test]
    fn test_toggle_sign() {
        let mut pad = Keypad::new();
        press_all(
            &mut pad,
            &[
                KeyInput::Digit('1'),
                KeyInput::Digit('5'),
                KeyInput::ToggleSign,
            ],
        );
        assert_eq!(pad.display(), "-15");
        pad.press(KeyInput::ToggleSign);
        assert_eq!(pad.display(), "15");
    }

    #[test]
    fn test_dot_entry() {
        let mut pad = Keypad::new();
        press_all(&mut pad, &[KeyInput::Dot, KeyInput::Digit('5')]);
        assert_eq!(pad.display(), "0.5");
        press_all(
            &mut pad,
            &[
                KeyInput::Op(BinKey::Mul),
                KeyInput::Digit('2'),
                KeyInput::Equals,
            ],
        );
        assert_eq!(pad.display(), "1");
    }

    #[test]
    fn test_length_cap() {
        let mut pad = Keypad::new();
        for _ in 0..(MAX_EXPR_LEN + 50) {
            pad.press(KeyInput::Digit('9'));
        }
        assert_eq!(pad.expression().len(), MAX_EXPR_LEN);
    }

    #[test]
    fn test_leading_sign_allowed() {
        let mut pad = Keypad::new();
        press_all(
            &mut pad,
            &[
                KeyInput::Op(BinKey::Sub),
                KeyInput::Digit('5'),
                KeyInput::Op(BinKey::Add),
                KeyInput::Digit('2'),
                KeyInput::Equals,
            ],
        );
        assert_eq!(pad.display(), "-3");
    }

    #[test]
    fn test_mul_ignored_at_operand_start() {
        let mut pad = Keypad::new();
        pad.press(KeyInput::Op(BinKey::Mul));
        assert_eq!(pad.expression(), "");
        press_all(&mut pad, &[KeyInput::OpenParen, KeyInput::Op(BinKey::Div)]);
        assert_eq!(pad.expression(), "(");
    }
}
