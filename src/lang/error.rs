use super::{LineNumber, Position};

pub struct Error {
    code: u16,
    line_number: Option<LineNumber>,
    position: Option<Position>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$pos:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_position($pos)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$pos:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_position($pos)
            .message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            position: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is_syntax(&self) -> bool {
        self.code == ErrorCode::SyntaxError as u16
    }

    pub fn is_internal(&self) -> bool {
        self.code == ErrorCode::InternalError as u16
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Tags the error with the program line it came from. An error that
    /// already carries a line number keeps it, so nested RUNs report the
    /// innermost line.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn at_position(self, position: &Position) -> Error {
        debug_assert!(self.position.is_none());
        Error {
            position: Some(*position),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

pub enum ErrorCode {
    NextWithoutFor = 1,
    SyntaxError = 2,
    ReturnWithoutGosub = 3,
    IllegalFunctionCall = 5,
    Overflow = 6,
    OutOfMemory = 7,
    UndefinedLine = 8,
    SubscriptOutOfRange = 9,
    DivisionByZero = 11,
    TypeMismatch = 13,
    CantContinue = 17,
    ForWithoutNext = 26,
    InternalError = 51,
    FileNotFound = 53,
    UndefinedVariable = 70,
    UnassignedVariable = 71,
    Break = 72,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "NEXT WITHOUT FOR",
            2 => "SYNTAX ERROR",
            3 => "RETURN WITHOUT GOSUB",
            5 => "ILLEGAL FUNCTION CALL",
            6 => "OVERFLOW",
            7 => "OUT OF MEMORY",
            8 => "UNDEFINED LINE",
            9 => "SUBSCRIPT OUT OF RANGE",
            11 => "DIVISION BY ZERO",
            13 => "TYPE MISMATCH",
            17 => "CAN'T CONTINUE",
            26 => "FOR WITHOUT NEXT",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            70 => "UNDEFINED VARIABLE",
            71 => "UNASSIGNED VARIABLE",
            72 => "BREAK",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" IN {}", line_number));
        }
        if let Some(position) = self.position {
            suffix.push_str(&format!(" AT {}", position));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(error!(UndefinedLine).to_string(), "UNDEFINED LINE");
        assert_eq!(error!(UndefinedLine, 20).to_string(), "UNDEFINED LINE IN 20");
        assert_eq!(
            error!(TypeMismatch, 20; "A$").to_string(),
            "TYPE MISMATCH IN 20; A$"
        );
        let position = Position {
            line: 1,
            column: 7,
            offset: 6,
        };
        assert_eq!(
            error!(SyntaxError, ..&position; "NUMBER EXPECTED").to_string(),
            "SYNTAX ERROR AT 1:7; NUMBER EXPECTED"
        );
    }

    #[test]
    fn test_first_line_number_sticks() {
        let e = error!(Overflow, 10).in_line_number(20);
        assert_eq!(e.line_number(), Some(10));
        assert!(!e.is_direct());
    }
}
