extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Event, Listing, Runtime, CYCLES_PER_CHUNK};
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Terminal};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod command;

pub use command::Command;

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let interface = Interface::new("STACKCPU")?;
    interface.set_prompt("> ")?;
    let mut shell = Shell::new(&interface, interrupted);

    if let Some(filename) = std::env::args().nth(1) {
        if shell.load(&filename)? {
            shell.compile()?;
        }
    }

    loop {
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        match Command::parse(&string) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => {
                interface.add_history_unique(string);
                shell.command(command)?;
            }
            Err(msg) => shell.error(&format!("?{}", msg))?,
        }
    }
    Ok(())
}

struct Shell<'a, Term: Terminal> {
    interface: &'a Interface<Term>,
    interrupted: Arc<AtomicBool>,
    runtime: Runtime,
    trace: bool,
}

impl<'a, Term: Terminal> Shell<'a, Term> {
    fn new(interface: &'a Interface<Term>, interrupted: Arc<AtomicBool>) -> Shell<'a, Term> {
        Shell {
            interface,
            interrupted,
            runtime: Runtime::default(),
            trace: false,
        }
    }

    fn command(&mut self, cmd: Command) -> std::io::Result<()> {
        match cmd {
            Command::Load(filename) => {
                self.load(&filename)?;
            }
            Command::Mem(size) => {
                self.runtime.set_mem_size(size);
                self.print(&format!("{} CELLS AT NEXT COMPILE", size))?;
            }
            Command::Compile => self.compile()?,
            Command::Reset => {
                self.runtime.clear_stack();
                self.state()?;
            }
            Command::Run => self.run()?,
            Command::Into => self.step(false)?,
            Command::Over => self.step(true)?,
            Command::State => self.state()?,
            Command::List => self.list()?,
            Command::Trace(on) => self.trace = on,
            Command::Help => self.print(command::HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn print(&self, s: &str) -> std::io::Result<()> {
        self.interface.write_fmt(format_args!("{}\n", s))
    }

    fn error(&self, s: &str) -> std::io::Result<()> {
        self.interface
            .write_fmt(format_args!("{}\n", Style::new().bold().paint(s)))
    }

    fn load(&mut self, filename: &str) -> std::io::Result<bool> {
        match read_source(filename) {
            Ok(lines) => {
                self.runtime.set_lines(lines.as_slice());
                self.print(&format!("{} LINES", self.runtime.lines().len()))?;
                Ok(true)
            }
            Err(error) => {
                self.error(&format!("{}: {}", filename, error))?;
                Ok(false)
            }
        }
    }

    fn compile(&mut self) -> std::io::Result<()> {
        match self.runtime.compile() {
            Ok(()) => {
                self.print("READY.")?;
                self.list()
            }
            Err(error) => self.error(&Listing::new(&self.runtime).error(&error)),
        }
    }

    fn run(&mut self) -> std::io::Result<()> {
        self.interrupted.store(false, Ordering::SeqCst);
        loop {
            if self.interrupted.swap(false, Ordering::SeqCst) {
                let pc = Listing::new(&self.runtime).pc();
                self.error(&format!("BREAK AT {}", pc))?;
                return self.state();
            }
            let event = if self.trace {
                self.trace_line()?;
                self.runtime.execute(1)
            } else {
                self.runtime.execute(CYCLES_PER_CHUNK)
            };
            match event {
                Event::Running => {}
                Event::Halted => {
                    self.state()?;
                    return self.print("HALT");
                }
                Event::Fault(error) => {
                    self.error(&Listing::new(&self.runtime).error(&error))?;
                    return self.state();
                }
            }
        }
    }

    fn step(&mut self, over: bool) -> std::io::Result<()> {
        if self.runtime.halt() {
            return self.print("HALT");
        }
        let result = if over {
            self.runtime.step_over()
        } else {
            self.runtime.step_into()
        };
        if let Err(error) = result {
            self.error(&Listing::new(&self.runtime).error(&error))?;
        }
        self.state()?;
        if self.runtime.halt() {
            self.print("HALT")?;
        }
        Ok(())
    }

    fn trace_line(&self) -> std::io::Result<()> {
        let listing = Listing::new(&self.runtime);
        let pc = self.runtime.pc();
        let cell = if pc >= 0 {
            listing.cell(pc as usize)
        } else {
            None
        };
        match cell {
            Some(cell) => self.print(&format!(
                "[{}] {}",
                cell,
                Listing::stack(&self.runtime.data_stack())
            )),
            None => Ok(()),
        }
    }

    fn state(&self) -> std::io::Result<()> {
        for line in Listing::new(&self.runtime).state() {
            self.print(&line)?;
        }
        Ok(())
    }

    fn list(&self) -> std::io::Result<()> {
        let underline = Style::new().underline();
        let pc = self.runtime.pc();
        for (addr, cell) in Listing::new(&self.runtime).cells().iter().enumerate() {
            if pc >= 0 && addr == pc as usize {
                self.interface
                    .write_fmt(format_args!("{}\n", underline.paint(cell.as_str())))?;
            } else {
                self.print(cell)?;
            }
        }
        Ok(())
    }
}

fn read_source(filename: &str) -> std::io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(filename)?);
    reader.lines().collect()
}
