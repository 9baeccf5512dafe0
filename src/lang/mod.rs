/*!
# Rust Language Module

This Rust module provides the character cursor, the line scanner and the
token vocabulary of Tiny BASIC.

*/

#[macro_use]
mod error;
mod cursor;
mod lex;
mod line;
pub mod token;

pub use cursor::Cursor;
pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::Scanner;
pub use line::Line;

pub type LineNumber = i64;

/// Location of a character in the scanned text. `line` and `column` count
/// from one, `offset` is the byte offset into the scanned string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
