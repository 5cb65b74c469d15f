//! Lexical analysis for V source lines
//!
//! The scanner performs a single left-to-right pass over one line and
//! produces a flat token sequence. It never fails; rejection of
//! unclassifiable input is deferred to the semantic checker.

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenKind};
