//! Peephole pass: collapses adjacent duplicate assembly instructions
//!
//! Adjacent-duplicate elimination only, not global deduplication:
//! non-adjacent repeats are preserved. The pass is idempotent.

use super::codegen::AsmInstruction;
use super::Session;

/// Rewrites the session's assembly buffer with adjacent duplicates
/// collapsed.
pub fn run(session: &mut Session) {
    let optimized = collapse_adjacent(session.assembly());
    session.replace_assembly(optimized);
}

/// Keeps an instruction only when it differs textually from its
/// predecessor.
pub fn collapse_adjacent(instructions: &[AsmInstruction]) -> Vec<AsmInstruction> {
    let mut kept: Vec<AsmInstruction> = Vec::new();
    for instr in instructions {
        if kept.last() != Some(instr) {
            kept.push(instr.clone());
        }
    }
    kept
}
