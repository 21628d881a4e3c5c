use super::Word;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    addr: Word,
    detail: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $addr:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_address($addr as $crate::lang::Word)
    };
    ($err:ident; $detail:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).detail($detail)
    };
    ($err:ident, $addr:expr; $detail:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_address($addr as $crate::lang::Word)
            .detail($detail)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            addr: 0,
            detail: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Token index for compile errors, PC for runtime errors.
    pub fn addr(&self) -> Word {
        self.addr
    }

    pub fn in_address(self, addr: Word) -> Error {
        Error {
            addr,
            ..self
        }
    }

    pub fn detail<S: Into<String>>(self, detail: S) -> Error {
        Error {
            detail: detail.into(),
            ..self
        }
    }

    pub fn is_compile_error(&self) -> bool {
        use ErrorCode::*;
        match self.code {
            DuplicateLabel | InvalidLiteral | SubrangeViolation | UndeclaredLabel
            | OutOfMemory => true,
            StackFault | UnknownOpcode | PcOutOfBounds => false,
        }
    }

    pub fn message(&self) -> String {
        use ErrorCode::*;
        match self.code {
            DuplicateLabel => format!("Label redeclared: {}", self.detail),
            InvalidLiteral => format!("\"{}\" is not a valid integer value", self.detail),
            SubrangeViolation => {
                format!("Constant value violates subrange bounds: {}", self.detail)
            }
            UndeclaredLabel => format!("Undeclared label: {}", self.detail),
            OutOfMemory => "Out of memory".to_string(),
            StackFault => "Stack overflow/underflow".to_string(),
            PcOutOfBounds => "PC out of bounds".to_string(),
            UnknownOpcode => format!("\"x{}\" is not an opcode", self.detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    DuplicateLabel,
    InvalidLiteral,
    SubrangeViolation,
    UndeclaredLabel,
    OutOfMemory,
    StackFault,
    UnknownOpcode,
    PcOutOfBounds,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {:?} @ {}: {} }}", self.code, self.addr, self.message())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_label_message() {
        let e = error!(DuplicateLabel, 2; ":X");
        assert_eq!(e.code(), ErrorCode::DuplicateLabel);
        assert_eq!(e.addr(), 2);
        assert_eq!(e.to_string(), "Label redeclared: :X");
        assert!(e.is_compile_error());
    }

    #[test]
    fn test_unknown_opcode_message() {
        let e = error!(UnknownOpcode, 7; "1F");
        assert_eq!(e.to_string(), "\"x1F\" is not an opcode");
        assert!(!e.is_compile_error());
    }

    #[test]
    fn test_address_defaults_to_zero() {
        let e = error!(StackFault);
        assert_eq!(e.addr(), 0);
        assert_eq!(e.in_address(9).addr(), 9);
    }
}
