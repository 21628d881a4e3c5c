use super::{assemble, Address, Opcode, Stack, DEFAULT_MEM_SIZE, MAX_STACK};
use crate::error;
use crate::lang::{Error, Word};

type Result<T> = std::result::Result<T, Error>;

/// ## Stack machine
///
/// Holds the source, the golden image from the last successful compile,
/// the working memory a program runs against, and both stacks.

pub struct Runtime {
    lines: Vec<String>,
    mem_size: usize,
    golden: Vec<Word>,
    mem: Vec<Word>,
    ds: Stack<Word>,
    rs: Stack<Word>,
    pc: Word,
    halt: bool,
    last_error: Option<Error>,
}

/// Outcome of a bounded `execute`.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Running,
    Halted,
    Fault(Error),
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime {
            lines: vec![],
            mem_size: DEFAULT_MEM_SIZE,
            golden: vec![0; DEFAULT_MEM_SIZE],
            mem: vec![0; DEFAULT_MEM_SIZE],
            ds: Stack::new(MAX_STACK),
            rs: Stack::new(MAX_STACK),
            pc: -1,
            halt: true,
            last_error: None,
        }
    }
}

impl Runtime {
    pub fn set_lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        self.lines = lines.iter().map(|s| s.as_ref().to_string()).collect();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Capacity for the next compile. The current image keeps its size.
    pub fn set_mem_size(&mut self, mem_size: usize) {
        self.mem_size = mem_size;
    }

    pub fn mem_size(&self) -> usize {
        self.mem_size
    }

    pub fn compile(&mut self) -> Result<()> {
        let result = assemble(&self.lines, self.mem_size);
        match self.record(result) {
            Ok(image) => {
                self.golden = image;
                self.clear_stack();
                Ok(())
            }
            Err(error) => Err(error),
        }
    }

    pub fn clear_stack(&mut self) {
        self.ds.clear();
        self.rs.clear();
        self.mem = self.golden.clone();
        self.pc = 0;
        self.halt = false;
    }

    pub fn run(&mut self) -> Result<()> {
        while !self.halt {
            self.step_into()?;
        }
        Ok(())
    }

    /// Run at most `cycles` instructions.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if self.halt {
                return Event::Halted;
            }
            if let Err(error) = self.step_into() {
                return Event::Fault(error);
            }
        }
        if self.halt {
            Event::Halted
        } else {
            Event::Running
        }
    }

    pub fn step_into(&mut self) -> Result<()> {
        let result = self.step();
        self.record(result)
    }

    /// Like `step_into`, except a `CALL` runs until its matching `EXIT`.
    pub fn step_over(&mut self) -> Result<()> {
        let mut depth = match self.current_opcode() {
            Some(Opcode::Call) => 1,
            _ => 0,
        };
        self.step_into()?;
        while !self.halt && depth > 0 {
            match self.current_opcode() {
                Some(Opcode::Call) => depth += 1,
                Some(Opcode::Exit) => depth -= 1,
                _ => {}
            }
            self.step_into()?;
        }
        Ok(())
    }

    pub fn error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    pub fn error_addr(&self) -> Option<Word> {
        self.last_error.as_ref().map(|e| e.addr())
    }

    pub fn pc(&self) -> Word {
        self.pc
    }

    pub fn halt(&self) -> bool {
        self.halt
    }

    pub fn data_stack(&self) -> Vec<Word> {
        self.ds.as_slice().to_vec()
    }

    pub fn return_stack(&self) -> Vec<Word> {
        self.rs.as_slice().to_vec()
    }

    pub fn memory(&self, addr: Address) -> Option<Word> {
        self.mem.get(addr).copied()
    }

    pub fn memory_len(&self) -> usize {
        self.mem.len()
    }

    pub fn current_opcode(&self) -> Option<Opcode> {
        self.index(self.pc)
            .and_then(|addr| self.memory(addr))
            .and_then(Opcode::from_code)
    }

    fn record<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(error) = &result {
            self.last_error = Some(error.clone());
        }
        result
    }

    fn index(&self, addr: Word) -> Option<Address> {
        if addr >= 0 && (addr as Address) < self.mem.len() {
            Some(addr as Address)
        } else {
            None
        }
    }

    fn load(&self, addr: Word) -> Word {
        match self.index(addr) {
            Some(addr) => self.mem[addr],
            None => 0,
        }
    }

    fn store(&mut self, addr: Word, val: Word) {
        if let Some(addr) = self.index(addr) {
            self.mem[addr] = val;
        }
    }

    fn step(&mut self) -> Result<()> {
        let pc = self.pc;
        let code = match self.index(pc) {
            Some(addr) => self.mem[addr],
            None => return Err(error!(PcOutOfBounds, pc)),
        };
        let op = match Opcode::from_code(code) {
            Some(op) => op,
            None => return Err(error!(UnknownOpcode, pc; format!("{:02X}", code & 0xFF))),
        };
        let next = self.dispatch(op, pc).map_err(|e| e.in_address(pc))?;
        self.pc = next;
        if self.index(next).is_none() {
            return Err(error!(PcOutOfBounds, next));
        }
        Ok(())
    }

    /// Execute one instruction and return the new PC.
    fn dispatch(&mut self, op: Opcode, pc: Word) -> Result<Word> {
        use Opcode::*;
        let fall_through = pc.wrapping_add(op.width() as Word);
        match op {
            Lit => {
                let val = self.load(pc + 1);
                self.ds.push(val)?;
            }
            Fetch => {
                let addr = self.ds.pop()?;
                let val = self.load(addr);
                self.ds.push(val)?;
            }
            Store => {
                let (val, addr) = self.ds.pop_2()?;
                self.store(addr, val);
            }
            Drop => {
                self.ds.pop()?;
            }
            Dup => {
                let top = self.ds.peek(0)?;
                self.ds.push(top)?;
            }
            Over => {
                let second = self.ds.peek(1)?;
                self.ds.push(second)?;
            }
            Swap => {
                let (lhs, rhs) = self.ds.pop_2()?;
                self.ds.push(rhs)?;
                self.ds.push(lhs)?;
            }
            Add => self.binary(|l, r| l.wrapping_add(r))?,
            Sub => self.binary(|l, r| l.wrapping_sub(r))?,
            And => self.binary(|l, r| l & r)?,
            Or => self.binary(|l, r| l | r)?,
            Xor => self.binary(|l, r| l ^ r)?,
            If => {
                if self.ds.pop()? == 0 {
                    return Ok(self.load(pc + 1));
                }
            }
            Call => {
                self.rs.push(pc.wrapping_add(2))?;
                return Ok(self.load(pc + 1));
            }
            Exit => return self.rs.pop(),
            Halt => self.halt = true,
            ToR => {
                if self.rs.is_full() {
                    return Err(error!(StackFault));
                }
                let val = self.ds.pop()?;
                self.rs.push(val)?;
            }
            FromR => {
                if self.ds.is_full() {
                    return Err(error!(StackFault));
                }
                let val = self.rs.pop()?;
                self.ds.push(val)?;
            }
        }
        Ok(fall_through)
    }

    fn binary<F: Fn(Word, Word) -> Word>(&mut self, f: F) -> Result<()> {
        let (lhs, rhs) = self.ds.pop_2()?;
        self.ds.push(f(lhs, rhs))
    }
}
