//! Three-address instruction definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Arithmetic operator in a three-address instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Sub,
    /// Multiplication (*)
    Mul,
    /// Division (/)
    Div,
}

impl BinOp {
    /// Maps an operator lexeme to its opcode
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            "/" => Some(BinOp::Div),
            _ => None,
        }
    }

    /// Binding strength for the postfix conversion (`*`, `/` over `+`, `-`)
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Mul | BinOp::Div => 2,
            BinOp::Add | BinOp::Sub => 1,
        }
    }

    /// The operator's source character
    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single three-address instruction
///
/// Destinations are either synthesized temporaries (`t<N>`) or the
/// statement's left-hand-side identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IrInstruction {
    /// Binary operation: `dest = left op right`
    Binary {
        /// Destination name
        dest: String,
        /// Left operand
        left: String,
        /// Operator
        op: BinOp,
        /// Right operand
        right: String,
    },
    /// Bare copy: `dest = src`
    Copy {
        /// Destination name
        dest: String,
        /// Source name
        src: String,
    },
}

impl fmt::Display for IrInstruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IrInstruction::Binary {
                dest,
                left,
                op,
                right,
            } => write!(f, "{} = {} {} {}", dest, left, op, right),
            IrInstruction::Copy { dest, src } => write!(f, "{} = {}", dest, src),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence() {
        assert!(BinOp::Mul.precedence() > BinOp::Add.precedence());
        assert_eq!(BinOp::Mul.precedence(), BinOp::Div.precedence());
        assert_eq!(BinOp::Add.precedence(), BinOp::Sub.precedence());
    }

    #[test]
    fn test_from_lexeme() {
        assert_eq!(BinOp::from_lexeme("+"), Some(BinOp::Add));
        assert_eq!(BinOp::from_lexeme("/"), Some(BinOp::Div));
        assert_eq!(BinOp::from_lexeme("="), None);
    }

    #[test]
    fn test_display() {
        let binary = IrInstruction::Binary {
            dest: "t1".to_string(),
            left: "a".to_string(),
            op: BinOp::Add,
            right: "c".to_string(),
        };
        assert_eq!(binary.to_string(), "t1 = a + c");

        let copy = IrInstruction::Copy {
            dest: "G".to_string(),
            src: "t1".to_string(),
        };
        assert_eq!(copy.to_string(), "G = t1");
    }
}
