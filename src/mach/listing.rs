use super::{Address, Opcode, Runtime};
use crate::lang::{Error, Word};

/// ## Display of machine state
///
/// Words show their low byte in hex and as a signed decimal, `x05 (5)`.
/// Addresses are zero padded to the width of the highest memory address.

pub struct Listing<'a> {
    runtime: &'a Runtime,
}

impl<'a> Listing<'a> {
    pub fn new(runtime: &'a Runtime) -> Listing<'a> {
        Listing { runtime }
    }

    pub fn word(val: Word) -> String {
        let byte = val as u8;
        format!("x{:02X} ({})", byte, byte as i8)
    }

    pub fn addr_width(&self) -> usize {
        let top = self.runtime.memory_len().saturating_sub(1);
        format!("{:X}", top).len()
    }

    fn addr(&self, addr: Word) -> String {
        let width = self.addr_width();
        if addr < 0 {
            format!("-{:0w$X}", addr.unsigned_abs(), w = width)
        } else {
            format!("{:0w$X}", addr, w = width)
        }
    }

    pub fn cell(&self, addr: Address) -> Option<String> {
        let val = self.runtime.memory(addr)?;
        let content = match Opcode::from_code(val) {
            Some(op) => op.to_string(),
            None => Listing::word(val),
        };
        Some(format!("x{}: {}", self.addr(addr as Word), content))
    }

    pub fn cells(&self) -> Vec<String> {
        (0..self.runtime.memory_len())
            .filter_map(|addr| self.cell(addr))
            .collect()
    }

    pub fn pc(&self) -> String {
        let pc = self.runtime.pc();
        format!("x{} ({})", self.addr(pc), pc)
    }

    /// Bottom of the stack first.
    pub fn stack(values: &[Word]) -> String {
        values
            .iter()
            .map(|v| Listing::word(*v))
            .collect::<Vec<String>>()
            .join(", ")
    }

    /// PC, halt flag, data stack and return stack, one line each.
    pub fn state(&self) -> Vec<String> {
        let halt = if self.runtime.halt() { "YES" } else { "NO" };
        vec![
            format!("PC {}", self.pc()),
            format!("HALT {}", halt),
            format!("DS [{}]", Listing::stack(&self.runtime.data_stack())),
            format!("RS [{}]", Listing::stack(&self.runtime.return_stack())),
        ]
    }

    pub fn error(&self, error: &Error) -> String {
        let kind = if error.is_compile_error() {
            "Compile"
        } else {
            "Runtime"
        };
        format!(
            "{} error at address x{}: {}",
            kind,
            self.addr(error.addr()),
            error
        )
    }
}
