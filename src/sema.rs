//! Semantic analysis over a syntactically valid token sequence
//!
//! Pure validation, no transformation: every token is inspected once in
//! order and the first violation aborts the line.

use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// Checks identifier well-formedness and the absence of unknown tokens.
///
/// An identifier containing a non-letter character cannot be produced by
/// the scanner's letter-run rule, but the check is explicit regardless.
pub fn check(tokens: &[Token]) -> Result<()> {
    for token in tokens {
        match token.kind {
            TokenKind::Identifier if !token.lexeme.chars().all(char::is_alphabetic) => {
                return Err(Error::InvalidIdentifier {
                    name: token.lexeme.clone(),
                });
            }
            TokenKind::Unknown => {
                return Err(Error::UnknownToken {
                    lexeme: token.lexeme.clone(),
                });
            }
            _ => {}
        }
    }
    Ok(())
}
