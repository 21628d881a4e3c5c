//! # Stack CPU
//!
//! Interactive debugger. `stackcpu [file]`
//!

fn main() {
    stackcpu::term::main();
}
