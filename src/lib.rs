//! # Stack CPU
//!
//! A two-pass assembler and a small stack machine to run what it builds.
//!
//! Programs are written as whitespace separated mnemonics, literals and
//! labels. They are assembled into a fixed size memory image, then executed
//! one instruction at a time against a data stack and a return stack.
//!
//! ```
//! use stackcpu::mach::Runtime;
//!
//! let mut cpu = Runtime::default();
//! cpu.set_lines(&["LIT 2 LIT 3 + HALT"]);
//! cpu.compile().unwrap();
//! cpu.run().unwrap();
//! assert_eq!(cpu.data_stack(), vec![5]);
//! ```
//!
//! Run the `stackcpu` binary for an interactive single-step debugger.

#[path = "doc/instruction_set.rs"]
#[allow(non_snake_case)]
pub mod _Instruction_Set;

pub mod lang;
pub mod mach;
pub mod term;
