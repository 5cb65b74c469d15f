//! Three-address code generation
//!
//! Flattens an assignment's right-hand side through an infix-to-postfix
//! conversion (Shunting-Yard) and evaluates the postfix form against an
//! operand stack, emitting one instruction per operator plus a final copy
//! into the left-hand-side identifier.

use super::instruction::{BinOp, IrInstruction};
use crate::compiler::Session;
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// Lowers a grammatically valid assignment token sequence to
/// three-address code.
///
/// Temporary names come from the session counter and stay unique across
/// every line the session compiles; the counter is never reset per line.
pub fn lower(session: &mut Session, tokens: &[Token]) -> Result<Vec<IrInstruction>> {
    let mut index = 0;
    if tokens.get(index).is_some_and(|t| t.is_keyword("LET")) {
        index += 1;
    }

    let lhs = tokens
        .get(index)
        .ok_or_else(|| Error::grammar("expected identifier in assignment"))?
        .lexeme
        .clone();
    // Consume the LHS identifier and the '=' symbol
    index += 2;

    let postfix = infix_to_postfix(&tokens[index.min(tokens.len())..]);

    let mut tac = Vec::new();
    let mut operands: Vec<String> = Vec::new();
    for token in postfix {
        match token.kind {
            TokenKind::Identifier => operands.push(token.lexeme.clone()),
            TokenKind::Operator => {
                // The right operand is on top of the stack
                let right = operands
                    .pop()
                    .ok_or_else(|| Error::grammar("operator without operands in expression"))?;
                let left = operands
                    .pop()
                    .ok_or_else(|| Error::grammar("operator without operands in expression"))?;
                let op = BinOp::from_lexeme(&token.lexeme)
                    .ok_or_else(|| Error::grammar("unrecognized operator in expression"))?;

                let dest = session.next_temp();
                tac.push(IrInstruction::Binary {
                    dest: dest.clone(),
                    left,
                    op,
                    right,
                });
                operands.push(dest);
            }
            _ => {}
        }
    }

    // Whatever remains on top of the stack is the expression's result
    if let Some(result) = operands.pop() {
        tac.push(IrInstruction::Copy {
            dest: lhs,
            src: result,
        });
    }

    Ok(tac)
}

/// Shunting-Yard conversion of an expression token run to postfix order.
///
/// Identifiers pass straight through; an incoming operator first drains
/// every stacked operator of greater or equal precedence, then pushes.
/// The remaining stack is flushed in LIFO order at end of input.
fn infix_to_postfix(tokens: &[Token]) -> Vec<&Token> {
    let mut output: Vec<&Token> = Vec::new();
    let mut ops: Vec<&Token> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Identifier => output.push(token),
            TokenKind::Operator => {
                while let Some(&top) = ops.last() {
                    if precedence(top) < precedence(token) {
                        break;
                    }
                    ops.pop();
                    output.push(top);
                }
                ops.push(token);
            }
            _ => {}
        }
    }

    while let Some(op) = ops.pop() {
        output.push(op);
    }
    output
}

fn precedence(token: &Token) -> u8 {
    BinOp::from_lexeme(&token.lexeme)
        .map(BinOp::precedence)
        .unwrap_or(0)
}
