/// ## Shell commands
///
/// One command per line, case insensitive. Program text is never typed
/// at the prompt; it comes from `LOAD`.

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Load(String),
    Mem(usize),
    Compile,
    Reset,
    Run,
    Into,
    Over,
    State,
    List,
    Trace(bool),
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Option<Command>, &'static str> {
        let line = line.trim();
        let (word, rest) = match line.find(|c: char| c == ' ' || c == '\t') {
            Some(index) => (&line[..index], line[index..].trim()),
            None => (line, ""),
        };
        let command = match word.to_ascii_uppercase().as_str() {
            "" => return Ok(None),
            "LOAD" => {
                if rest.is_empty() {
                    return Err("MISSING FILE NAME");
                }
                Command::Load(rest.to_string())
            }
            "MEM" => Command::Mem(Command::mem_size(rest)?),
            "COMPILE" => Command::Compile,
            "RESET" => Command::Reset,
            "RUN" => Command::Run,
            "INTO" | "STEP" => Command::Into,
            "OVER" => Command::Over,
            "STATE" => Command::State,
            "LIST" => Command::List,
            "TRON" => Command::Trace(true),
            "TROFF" => Command::Trace(false),
            "HELP" | "?" => Command::Help,
            "QUIT" | "EXIT" | "BYE" => Command::Quit,
            _ => return Err("UNKNOWN COMMAND"),
        };
        Ok(Some(command))
    }

    /// Leading number of the argument, so `MEM 64 WORDS` works.
    fn mem_size(arg: &str) -> Result<usize, &'static str> {
        let number = arg.split_whitespace().next().unwrap_or("");
        match number.parse::<usize>() {
            Ok(size) if size > 0 => Ok(size),
            _ => Err("INVALID MEMORY SIZE"),
        }
    }
}

pub const HELP: &str = "\
LOAD <file>   read program source
MEM <n>       memory cells for the next COMPILE
COMPILE       assemble the program and reset
RESET         clear stacks and reload memory
RUN           run until HALT (Ctrl-C interrupts)
INTO          execute one instruction
OVER          execute one instruction, CALL runs to its EXIT
STATE         show PC, halt flag and stacks
LIST          show memory
TRON / TROFF  trace instructions during RUN
QUIT          leave";
