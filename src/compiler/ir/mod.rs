//! Three-address intermediate representation
//!
//! ```text
//! ir/
//! ├── mod.rs          # Module definition and re-exports
//! ├── instruction.rs  # BinOp, IrInstruction
//! └── generator.rs    # Token sequence → TAC (with postfix conversion)
//! ```

pub mod generator;
pub mod instruction;

pub use instruction::{BinOp, IrInstruction};
