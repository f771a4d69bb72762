//! Four-function calculator
//!
//! A small stateless library of binary arithmetic operations, exposed
//! through the `calc` subcommand. Division by zero is rejected rather than
//! producing an infinity.

use std::fmt;

use crate::error::{TellerError, TellerResult};

/// One of the four supported arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Parse an operation from a name or symbol
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "add" | "+" | "plus" => Some(Self::Add),
            "sub" | "subtract" | "-" | "minus" => Some(Self::Subtract),
            "mul" | "multiply" | "*" | "x" => Some(Self::Multiply),
            "div" | "divide" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// The operator symbol, for display
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operation to two operands
    pub fn apply(&self, a: f64, b: f64) -> TellerResult<f64> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    Err(TellerError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "Addition"),
            Self::Subtract => write!(f, "Subtraction"),
            Self::Multiply => write!(f, "Multiplication"),
            Self::Divide => write!(f, "Division"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert_eq!(Operation::Add.apply(2.0, 3.0).unwrap(), 5.0);
        assert_eq!(Operation::Subtract.apply(2.0, 3.0).unwrap(), -1.0);
        assert_eq!(Operation::Multiply.apply(2.0, 3.0).unwrap(), 6.0);
        assert_eq!(Operation::Divide.apply(6.0, 3.0).unwrap(), 2.0);
    }

    #[test]
    fn test_divide_by_zero() {
        let result = Operation::Divide.apply(1.0, 0.0);
        assert!(matches!(result, Err(TellerError::DivisionByZero)));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Operation::parse("add"), Some(Operation::Add));
        assert_eq!(Operation::parse("+"), Some(Operation::Add));
        assert_eq!(Operation::parse("MINUS"), Some(Operation::Subtract));
        assert_eq!(Operation::parse("x"), Some(Operation::Multiply));
        assert_eq!(Operation::parse("/"), Some(Operation::Divide));
        assert_eq!(Operation::parse("pow"), None);
    }

    #[test]
    fn test_display_and_symbol() {
        assert_eq!(Operation::Divide.to_string(), "Division");
        assert_eq!(Operation::Multiply.symbol(), '*');
    }
}
