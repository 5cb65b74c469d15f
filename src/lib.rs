//! # vcc - a staged compiler for the V assignment language
//!
//! A compiler pipeline for single-statement lines of "V", a tiny
//! arithmetic assignment language. Each line passes through the classic
//! stages: line-level validation, lexical analysis, syntax analysis,
//! semantic analysis, three-address intermediate code generation,
//! assembly-like code generation, a peephole optimization pass, and a
//! pseudo-binary target encoding.
//!
//! ## Quick Start
//!
//! ```rust
//! use vcc::{Session, TokenKind};
//!
//! # fn main() -> vcc::Result<()> {
//! let mut session = Session::new();
//! let artifacts = session.compile_line("M = A/B+C")?;
//!
//! // Token listing
//! assert_eq!(artifacts.tokens[0].kind, TokenKind::Identifier);
//!
//! // Three-address code, precedence respected
//! let tac: Vec<String> = artifacts.tac.iter().map(|i| i.to_string()).collect();
//! assert_eq!(tac, vec!["t1 = A / B", "t2 = t1 + C", "M = t2"]);
//!
//! // Optimized assembly and its pseudo-binary projection
//! assert_eq!(artifacts.optimized[0].to_string(), "LDA A");
//! assert_eq!(artifacts.binary.len(), artifacts.optimized.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source line → Gate → Scanner → Parser → Sema → TAC → Assembly → Peephole → Binary
//! ```
//!
//! ### Main Components
//!
//! - [`gate`] - Line-level pre-filter with a fixed rejection priority
//! - [`Scanner`] - Tokenizes one line; never fails
//! - [`Parser`] - Validates the assignment grammar; builds no tree
//! - [`sema`] - Identifier well-formedness and unknown-token checks
//! - [`Session`] - Owns the temporary counter and assembly buffer, and
//!   orchestrates the whole pipeline per line
//!
//! ## Error Handling
//!
//! Every rejection is a deterministic, line-fatal [`Error`] carrying its
//! classification; a failed line never poisons the session. See
//! [`Error::phase`] for the lexical/syntax/semantic taxonomy.

pub mod compiler;
pub mod error;
pub mod gate;
pub mod lexer;
pub mod parser;
pub mod sema;

// Re-export main types
pub use compiler::{AsmInstruction, BinOp, IrInstruction, LineArtifacts, Mnemonic, Session};
pub use error::{Error, Phase, Result};
pub use lexer::{Scanner, Token, TokenKind};
pub use parser::Parser;

/// Version of the V compiler
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
