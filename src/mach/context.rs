use super::{Address, Stack, Val};
use crate::error;
use crate::lang::{Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// An active counted loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Loop {
    pub variable: String,
    pub index: i64,
    pub start: Address,
    pub limit: i64,
    pub step: i64,
}

impl Loop {
    /// True while `value` has not passed the limit in the direction of the step.
    pub fn within_limit(&self, value: &Val) -> bool {
        match value {
            Val::Integer(n) if self.step < 0 => *n >= self.limit,
            Val::Integer(n) => *n <= self.limit,
            Val::Float(n) if self.step < 0 => *n >= self.limit as f64,
            Val::Float(n) => *n <= self.limit as f64,
            Val::String(_) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Return(Address),
    Loop(Loop),
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Frame::Return(ip) => write!(f, "RETURN {}", ip),
            Frame::Loop(l) => write!(
                f,
                "FOR {}({}) START {} LIMIT {} STEP {}",
                l.variable, l.index, l.start, l.limit, l.step
            ),
        }
    }
}

/// ## Execution context
///
/// `ip` indexes the sorted line table. Before a line executes, `ip_next` is
/// set to the following line; control statements overwrite it. After the
/// line completes, `ip_next` becomes `ip`.

#[derive(Debug)]
pub struct Context {
    pub ip: Address,
    pub ip_next: Address,
    pub stack: Stack<Frame>,
    pub trace: bool,
    line_tab: Vec<LineNumber>,
}

impl Default for Context {
    fn default() -> Context {
        Context {
            ip: 0,
            ip_next: 1,
            stack: Stack::new("STACK OVERFLOW"),
            trace: false,
            line_tab: vec![],
        }
    }
}

impl Context {
    pub fn new() -> Context {
        Context::default()
    }

    pub fn reset(&mut self, line_tab: Vec<LineNumber>) {
        self.line_tab = line_tab;
        self.stack.clear();
        self.ip = 0;
    }

    pub fn clear(&mut self) {
        let trace = self.trace;
        *self = Context::default();
        self.trace = trace;
    }

    pub fn max_ip(&self) -> Address {
        self.line_tab.len()
    }

    pub fn in_range(&self) -> bool {
        self.ip < self.line_tab.len()
    }

    pub fn line_number_at(&self, ip: Address) -> Option<LineNumber> {
        self.line_tab.get(ip).copied()
    }

    /// Line number at `ip`, with `ip_next` pre-set to its successor.
    pub fn fetch(&mut self) -> Option<LineNumber> {
        let line_number = self.line_number_at(self.ip)?;
        self.ip_next = self.ip + 1;
        Some(line_number)
    }

    pub fn advance(&mut self) {
        self.ip = self.ip_next;
    }

    pub fn resolve(&self, line_number: LineNumber) -> Result<Address> {
        match self.line_tab.binary_search(&line_number) {
            Ok(ip) => Ok(ip),
            Err(_) => Err(error!(UndefinedLine; format!("LINE {} NOT FOUND", line_number))),
        }
    }

    pub fn jump_to(&mut self, line_number: LineNumber) -> Result<()> {
        self.ip_next = self.resolve(line_number)?;
        Ok(())
    }
}
