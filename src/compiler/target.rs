//! Pseudo-binary target encoding
//!
//! A display projection, not a persisted artifact: each assembly
//! instruction becomes one output line of space-joined 8-bit groups, one
//! group per whitespace-delimited word, taken from the word's first
//! character's code point.

use super::codegen::AsmInstruction;

/// Encodes an optimized assembly listing, one output line per instruction.
pub fn encode(instructions: &[AsmInstruction]) -> Vec<String> {
    instructions.iter().map(encode_instruction).collect()
}

/// Encodes one instruction as zero-padded 8-bit binary groups.
pub fn encode_instruction(instr: &AsmInstruction) -> String {
    instr
        .to_string()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .map(|c| format!("{:08b}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}
