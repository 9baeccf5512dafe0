/*!
## Rust Machine Module

This Rust module interprets Tiny BASIC. Lines are scanned, parsed and
executed in a single pass with no intermediate representation.

*/

use crate::lang::{Error, LineNumber};

pub type Address = usize;

mod context;
mod function;
mod interpreter;
mod io;
mod listing;
mod operation;
mod runtime;
mod stack;
mod val;
mod var;

#[cfg(test)]
mod tests;

pub use context::Context;
pub use context::Frame;
pub use context::Loop;
pub use function::Arg;
pub use function::Argument;
pub use function::Function;
pub use interpreter::Interpreter;
pub use io::io_error;
pub use io::Io;
pub use io::Transcript;
pub use listing::Listing;
pub use operation::Operation;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;
pub use val::ValKind;
pub use var::Handle;
pub use var::Kind;
pub use var::Var;
pub use var::Variable;

/// Why execution stopped short. `End` unwinds to the nearest run loop,
/// `Quit` unwinds to the session.
#[derive(Debug)]
pub enum Halt {
    End,
    Quit,
    Error(Error),
}

impl Halt {
    pub fn in_line_number(self, line_number: LineNumber) -> Halt {
        match self {
            Halt::Error(e) => Halt::Error(e.in_line_number(line_number)),
            halt => halt,
        }
    }
}

impl From<Error> for Halt {
    fn from(e: Error) -> Halt {
        Halt::Error(e)
    }
}

type Result<T> = std::result::Result<T, Halt>;
