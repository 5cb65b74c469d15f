//! Assembly generation from three-address code
//!
//! Each TAC instruction is lowered from its textual `dest = ...` form:
//! a three-token right-hand side becomes the `LDA`/`OPER`/`LDA`/`STR`
//! quartet, a single-token right-hand side becomes one `MOV`. The lowering
//! stays textual so the defensive fallback for right-hand sides of any
//! other shape remains reachable.

use super::ir::IrInstruction;
use super::Session;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Assembly mnemonics of the pseudo target machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mnemonic {
    /// Load an operand into the accumulator
    Lda,
    /// Apply an operator to the accumulator
    Oper,
    /// Store the accumulator into a destination
    Str,
    /// Copy a value directly to a destination
    Mov,
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Mnemonic::Lda => "LDA",
            Mnemonic::Oper => "OPER",
            Mnemonic::Str => "STR",
            Mnemonic::Mov => "MOV",
        };
        write!(f, "{}", name)
    }
}

/// An assembly-like instruction: a mnemonic plus free-form operand text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsmInstruction {
    /// The mnemonic
    pub mnemonic: Mnemonic,
    /// Operand text (may hold several words, e.g. `t1 TO G`)
    pub operand: String,
}

impl AsmInstruction {
    /// Creates a new assembly instruction
    pub fn new(mnemonic: Mnemonic, operand: impl Into<String>) -> Self {
        AsmInstruction {
            mnemonic,
            operand: operand.into(),
        }
    }
}

impl fmt::Display for AsmInstruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.mnemonic, self.operand)
    }
}

/// Lowers a TAC listing into the session's assembly buffer, in order.
pub fn generate(session: &mut Session, tac: &[IrInstruction]) {
    for instr in tac {
        emit_tac_line(session, &instr.to_string());
    }
}

/// Lowers one textual three-address line.
///
/// Lines without a ` = ` separator emit nothing. A right-hand side that is
/// multi-word but not exactly three tokens takes the generic
/// `STR <dest> from <expr>` fallback; the generator never produces that
/// shape.
pub(crate) fn emit_tac_line(session: &mut Session, line: &str) {
    let Some((dest, expr)) = line.split_once(" = ") else {
        return;
    };
    let dest = dest.trim();
    let expr = expr.trim();

    let words: Vec<&str> = expr.split(' ').collect();
    match words.as_slice() {
        [src] => {
            session.emit(AsmInstruction::new(
                Mnemonic::Mov,
                format!("{} TO {}", src, dest),
            ));
        }
        [op1, operator, op2] => {
            session.emit(AsmInstruction::new(Mnemonic::Lda, *op1));
            session.emit(AsmInstruction::new(Mnemonic::Oper, *operator));
            session.emit(AsmInstruction::new(Mnemonic::Lda, *op2));
            session.emit(AsmInstruction::new(Mnemonic::Str, dest));
        }
        _ => {
            session.emit(AsmInstruction::new(
                Mnemonic::Str,
                format!("{} from {}", dest, expr),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::ir::BinOp;

    fn listing(session: &Session) -> Vec<String> {
        session.assembly().iter().map(|i| i.to_string()).collect()
    }

    #[test]
    fn test_binary_instruction_emits_quartet() {
        let mut session = Session::new();
        let tac = vec![IrInstruction::Binary {
            dest: "t1".to_string(),
            left: "a".to_string(),
            op: BinOp::Add,
            right: "c".to_string(),
        }];

        generate(&mut session, &tac);
        assert_eq!(listing(&session), vec!["LDA a", "OPER +", "LDA c", "STR t1"]);
    }

    #[test]
    fn test_copy_instruction_emits_mov() {
        let mut session = Session::new();
        let tac = vec![IrInstruction::Copy {
            dest: "G".to_string(),
            src: "t1".to_string(),
        }];

        generate(&mut session, &tac);
        assert_eq!(listing(&session), vec!["MOV t1 TO G"]);
    }

    #[test]
    fn test_fallback_for_unexpected_shape() {
        let mut session = Session::new();
        emit_tac_line(&mut session, "x = a + b + c");

        assert_eq!(listing(&session), vec!["STR x from a + b + c"]);
    }

    #[test]
    fn test_line_without_assignment_ignored() {
        let mut session = Session::new();
        emit_tac_line(&mut session, "no separator here");

        assert!(session.assembly().is_empty());
    }

    #[test]
    fn test_generation_appends_in_order() {
        let mut session = Session::new();
        let tac = vec![
            IrInstruction::Binary {
                dest: "t1".to_string(),
                left: "A".to_string(),
                op: BinOp::Div,
                right: "B".to_string(),
            },
            IrInstruction::Copy {
                dest: "M".to_string(),
                src: "t1".to_string(),
            },
        ];

        generate(&mut session, &tac);
        assert_eq!(
            listing(&session),
            vec!["LDA A", "OPER /", "LDA B", "STR t1", "MOV t1 TO M"]
        );
    }
}
