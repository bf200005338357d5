//! Fixed binary operations for the command-line surface.
//!
//! `calcbasic add 1 2` takes an operation name and two operands directly;
//! it never goes through the expression parser.

use std::str::FromStr;

use thiserror::Error;

use crate::expr::EvalError;

/// An operation name outside `add|sub|mul|div`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported operation: {0}")]
pub struct UnknownOperation(pub String);

/// The four named operations of the command-line surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
        }
    }

    /// Apply the operation to two operands.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, EvalError> {
        let value = match self {
            Operation::Add => a + b,
            Operation::Sub => a - b,
            Operation::Mul => a * b,
            Operation::Div => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                a / b
            }
        };
        if !value.is_finite() {
            return Err(EvalError::NonFinite);
        }
        Ok(value)
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "sub" => Ok(Operation::Sub),
            "mul" => Ok(Operation::Mul),
            "div" => Ok(Operation::Div),
            other => Err(UnknownOperation(other.to_string())),
        }
    }
}
