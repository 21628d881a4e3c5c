/*!
## Rust Machine Module

This Rust module is an assembler and virtual machine for Stack CPU.

*/

pub type Address = usize;

/// Entries allowed on each of the data and return stacks.
pub const MAX_STACK: usize = 0xFF;
/// Memory cells compiled into when no size was chosen.
pub const DEFAULT_MEM_SIZE: usize = 32;
/// Instructions the terminal runs between checks for Ctrl-C.
pub const CYCLES_PER_CHUNK: usize = 5000;

mod assemble;
mod link;
mod listing;
mod opcode;
mod runtime;
mod stack;

pub use assemble::assemble;
pub use assemble::encode;
pub use assemble::extract_labels;
pub use link::Link;
pub use listing::Listing;
pub use opcode::Opcode;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
