/*!
# Rust Language Module

This Rust module provides lexical analysis of Stack CPU assembly source
and the error type shared by the assembler and the machine.

*/

#[macro_use]
mod error;
mod lex;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::lex_line;

/// A machine word. Memory cells, stack entries and the program counter.
pub type Word = i32;
