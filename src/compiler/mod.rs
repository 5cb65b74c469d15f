//! # V Compiler Pipeline
//!
//! Compiles one source line at a time through the classic stages:
//!
//! ```text
//! Line Gate → Lexer → Parser → Semantic Check → TAC → Assembly → Peephole → Pseudo-binary
//! ```
//!
//! Data flows strictly forward with no feedback loop. The only mutable
//! state lives in the [`Session`]: the temporary-name counter (monotonic
//! for the session's lifetime, never reset per line) and the assembly
//! buffer (cleared once per successful run, right before code generation).
//!
//! ## Usage
//!
//! ```rust
//! use vcc::Session;
//!
//! # fn main() -> vcc::Result<()> {
//! let mut session = Session::new();
//! let artifacts = session.compile_line("LET G = a + c")?;
//!
//! assert_eq!(artifacts.tac[0].to_string(), "t1 = a + c");
//! assert_eq!(artifacts.optimized[4].to_string(), "MOV t1 TO G");
//! # Ok(())
//! # }
//! ```

pub mod codegen;
pub mod ir;
pub mod optimizer;
pub mod target;

pub use codegen::{AsmInstruction, Mnemonic};
pub use ir::{BinOp, IrInstruction};

use crate::error::Result;
use crate::gate;
use crate::lexer::{Scanner, Token};
use crate::parser::Parser;
use crate::sema;

/// Everything the pipeline produces for one successfully compiled line
#[derive(Debug, Clone)]
pub struct LineArtifacts {
    /// Token listing from lexical analysis
    pub tokens: Vec<Token>,
    /// Three-address intermediate code
    pub tac: Vec<IrInstruction>,
    /// Assembly listing before optimization
    pub assembly: Vec<AsmInstruction>,
    /// Assembly listing after adjacent-duplicate elimination
    pub optimized: Vec<AsmInstruction>,
    /// Pseudo-binary encoding, one line per optimized instruction
    pub binary: Vec<String>,
}

/// Compilation session owning the cross-line mutable state
///
/// The temporary counter guarantees `t<N>` names are unique across all
/// lines compiled in one session. The assembly buffer holds the most
/// recent successful run's listing; a failed line leaves it untouched.
pub struct Session {
    /// Next temporary number (starts at 1, never reset)
    temp_counter: u32,
    /// Assembly buffer shared by codegen, optimizer and target encoder
    assembly: Vec<AsmInstruction>,
}

impl Session {
    /// Creates a new session with a fresh counter and empty buffer
    pub fn new() -> Self {
        Session {
            temp_counter: 1,
            assembly: Vec::new(),
        }
    }

    /// Runs the full pipeline over one source line.
    ///
    /// A gate, parser or semantic failure aborts this line only; the
    /// session stays usable for the next line, and the assembly buffer
    /// keeps the previous successful run's contents.
    pub fn compile_line(&mut self, line: &str) -> Result<LineArtifacts> {
        gate::screen(line)?;

        let mut scanner = Scanner::new(line);
        let tokens = scanner.scan_tokens();
        tracing::debug!(count = tokens.len(), "lexical analysis complete");

        Parser::new(&tokens).parse()?;
        sema::check(&tokens)?;

        let tac = ir::generator::lower(self, &tokens)?;
        tracing::debug!(instructions = tac.len(), "three-address code generated");

        // Fresh buffer for this line; failures above never reach this point
        self.assembly.clear();
        codegen::generate(self, &tac);
        let assembly = self.assembly.clone();

        optimizer::run(self);
        let optimized = self.assembly.clone();

        let binary = target::encode(&self.assembly);

        Ok(LineArtifacts {
            tokens,
            tac,
            assembly,
            optimized,
            binary,
        })
    }

    /// Allocates the next temporary name (`t1`, `t2`, ...)
    pub(crate) fn next_temp(&mut self) -> String {
        let name = format!("t{}", self.temp_counter);
        self.temp_counter += 1;
        name
    }

    /// Current assembly buffer contents
    pub fn assembly(&self) -> &[AsmInstruction] {
        &self.assembly
    }

    pub(crate) fn emit(&mut self, instr: AsmInstruction) {
        self.assembly.push(instr);
    }

    pub(crate) fn replace_assembly(&mut self, instructions: Vec<AsmInstruction>) {
        self.assembly = instructions;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_names_are_monotonic() {
        let mut session = Session::new();
        assert_eq!(session.next_temp(), "t1");
        assert_eq!(session.next_temp(), "t2");
        assert_eq!(session.next_temp(), "t3");
    }

    #[test]
    fn test_compile_line_produces_all_artifacts() {
        let mut session = Session::new();
        let artifacts = session.compile_line("LET G = a + c").unwrap();

        assert_eq!(artifacts.tokens.len(), 6);
        assert_eq!(artifacts.tac.len(), 2);
        assert_eq!(artifacts.assembly.len(), 5);
        assert_eq!(artifacts.optimized.len(), 5);
        assert_eq!(artifacts.binary.len(), 5);
    }

    #[test]
    fn test_failed_line_leaves_buffer_intact() {
        let mut session = Session::new();
        session.compile_line("LET G = a + c").unwrap();
        let before = session.assembly().to_vec();

        assert!(session.compile_line("WRITE M").is_err());
        assert_eq!(session.assembly(), before.as_slice());
    }

    #[test]
    fn test_buffer_cleared_between_successful_lines() {
        let mut session = Session::new();
        session.compile_line("LET G = a + c").unwrap();
        let artifacts = session.compile_line("x = y").unwrap();

        // Only the second line's single MOV remains
        assert_eq!(artifacts.optimized.len(), 1);
        assert_eq!(session.assembly().len(), 1);
    }
}
