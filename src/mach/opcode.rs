use crate::lang::Word;
use std::collections::HashMap;

thread_local!(
    static MNEMONIC_TO_OPCODE: HashMap<&'static str, Opcode> =
        Opcode::ALL.iter().map(|op| (op.mnemonic(), *op)).collect();
    static CODE_TO_OPCODE: HashMap<Word, Opcode> =
        Opcode::ALL.iter().map(|op| (op.code(), *op)).collect();
);

/// ## Machine instruction set
///
/// Every instruction is one tagged word in memory, `0xFF00` through `0xFF11`.
/// `LIT`, `IF` and `CALL` carry one inline operand cell after the code.
///
/// For example: `LIT 2 LIT 3 + HALT` assembles to
/// `[0xFF00, 2, 0xFF00, 3, 0xFF07, 0xFF0F]`

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // *** Stack manipulation
    /// Push the next cell.
    Lit,
    /// `@` ( addr -- value )
    Fetch,
    /// `!` ( value addr -- )
    Store,
    Drop,
    Dup,
    Over,
    Swap,

    // *** Arithmetic and logic, rhs on top
    Add,
    Sub,
    And,
    Or,
    Xor,

    // *** Branch control
    /// Pop the data stack and branch to the next cell if zero.
    If,
    /// Push the return address and branch to the next cell.
    Call,
    /// Pop the return stack into PC.
    Exit,
    Halt,

    // *** Return stack transfer
    ToR,
    FromR,
}

impl Opcode {
    pub const ALL: [Opcode; 18] = [
        Opcode::Lit,
        Opcode::Fetch,
        Opcode::Store,
        Opcode::Drop,
        Opcode::Dup,
        Opcode::Over,
        Opcode::Swap,
        Opcode::Add,
        Opcode::Sub,
        Opcode::And,
        Opcode::Or,
        Opcode::Xor,
        Opcode::If,
        Opcode::Call,
        Opcode::Exit,
        Opcode::Halt,
        Opcode::ToR,
        Opcode::FromR,
    ];

    pub fn from_mnemonic(s: &str) -> Option<Opcode> {
        MNEMONIC_TO_OPCODE.with(|map| map.get(s).copied())
    }

    pub fn from_code(code: Word) -> Option<Opcode> {
        CODE_TO_OPCODE.with(|map| map.get(&code).copied())
    }

    /// Instruction width of a memory word, 0 when it is not an instruction.
    pub fn width_of(code: Word) -> usize {
        Opcode::from_code(code).map_or(0, |op| op.width())
    }

    pub fn code(self) -> Word {
        0xFF00 | self as Word
    }

    /// Cells the PC advances past after the instruction executes. `EXIT`
    /// and `HALT` are 0 because they never fall through.
    pub fn width(self) -> usize {
        use Opcode::*;
        match self {
            Lit | If | Call => 2,
            Exit | Halt => 0,
            _ => 1,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        use Opcode::*;
        match self {
            Lit => "LIT",
            Fetch => "@",
            Store => "!",
            Drop => "DROP",
            Dup => "DUP",
            Over => "OVER",
            Swap => "SWAP",
            Add => "+",
            Sub => "-",
            And => "AND",
            Or => "OR",
            Xor => "XOR",
            If => "IF",
            Call => "CALL",
            Exit => "EXIT",
            Halt => "HALT",
            ToR => ">R",
            FromR => "R>",
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_sequential() {
        for (index, op) in Opcode::ALL.iter().enumerate() {
            assert_eq!(op.code(), 0xFF00 + index as Word);
        }
        assert_eq!(Opcode::FromR.code(), 0xFF11);
    }

    #[test]
    fn test_lookup_both_ways() {
        for op in Opcode::ALL.iter() {
            assert_eq!(Opcode::from_mnemonic(op.mnemonic()), Some(*op));
            assert_eq!(Opcode::from_code(op.code()), Some(*op));
        }
        assert_eq!(Opcode::from_mnemonic("NOP"), None);
        assert_eq!(Opcode::from_mnemonic("lit"), None);
        assert_eq!(Opcode::from_code(0xFF12), None);
    }

    #[test]
    fn test_width_of() {
        assert_eq!(Opcode::width_of(0xFF00), 2);
        assert_eq!(Opcode::width_of(0xFF03), 1);
        assert_eq!(Opcode::width_of(0xFF0E), 0);
        assert_eq!(Opcode::width_of(5), 0);
    }
}
