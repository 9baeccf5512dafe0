use super::{Address, Context, Halt, Interpreter, Io, Listing, Result, Val, Var};
use crate::error;
use crate::lang::token::Token;
use crate::lang::{Line, Scanner};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

const MAX_RUN_DEPTH: usize = 32;

/// ## Virtual machine
///
/// Program text, variables and the execution context, plus the console it
/// talks to. Direct statements are interpreted as they are entered; numbered
/// lines edit the program.

pub struct Runtime<T: Io> {
    pub(crate) listing: Listing,
    pub(crate) vars: Var,
    pub(crate) context: Context,
    pub(crate) io: T,
    interrupt: Arc<AtomicBool>,
    depth: usize,
}

impl<T: Io> Runtime<T> {
    pub fn new(io: T) -> Runtime<T> {
        Runtime {
            listing: Listing::default(),
            vars: Var::new(),
            context: Context::new(),
            io,
            interrupt: Arc::new(AtomicBool::new(false)),
            depth: 0,
        }
    }

    pub fn io(&self) -> &T {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut T {
        &mut self.io
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Setting the flag stops a running program before its next line.
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupt)
    }

    /// Handles one line of console input.
    pub fn enter(&mut self, line: &str) -> Result<()> {
        if line.trim().is_empty() {
            return Ok(());
        }
        if let Token::LineNumber(_) = Scanner::new(line).next_lexeme()?.token {
            let line = Line::new(line)?;
            debug!(line_number = line.number(), "edit");
            self.listing.edit_text(&line)?;
            return Ok(());
        }
        match self.execute(line) {
            Err(Halt::End) => Ok(()),
            result => result,
        }
    }

    /// Interprets one line as a direct statement.
    pub fn execute(&mut self, text: &str) -> Result<()> {
        Interpreter::new(self, text)?.interpret()
    }

    /// Executes the line at `ip`. `Ok(false)` when `ip` is past the end.
    pub fn step(&mut self) -> Result<bool> {
        let line_number = match self.context.fetch() {
            Some(n) => n,
            None => return Ok(false),
        };
        let text = match self.listing.get(line_number) {
            Some(text) => text.to_string(),
            None => return Err(error!(InternalError, line_number; "LINE VANISHED").into()),
        };
        trace!(ip = self.context.ip, line_number, "step");
        let result = Interpreter::at_line(self, &text, line_number).and_then(|mut i| i.interpret());
        match result {
            Ok(()) => {
                self.context.advance();
                Ok(true)
            }
            Err(Halt::End) => {
                self.context.advance();
                Err(Halt::End)
            }
            Err(halt) => Err(halt.in_line_number(line_number)),
        }
    }

    /// Runs from the current `ip` until the program ends or stops. With
    /// trace on, only a single line is executed. A program may RUN or CONT
    /// itself, up to a fixed nesting depth.
    pub fn run(&mut self) -> Result<()> {
        if self.depth >= MAX_RUN_DEPTH {
            return Err(error!(OutOfMemory; "RUN NESTED TOO DEEP").into());
        }
        self.depth += 1;
        let result = self.run_lines();
        self.depth -= 1;
        result
    }

    fn run_lines(&mut self) -> Result<()> {
        while self.context.in_range() {
            if self.interrupt.swap(false, Ordering::SeqCst) {
                let line_number = self.context.line_number_at(self.context.ip);
                debug!(ip = self.context.ip, "break");
                return Err(match line_number {
                    Some(n) => error!(Break, n),
                    None => error!(Break),
                }
                .into());
            }
            match self.step() {
                Ok(_) => {}
                Err(Halt::End) => break,
                Err(halt) => return Err(halt),
            }
            if self.context.trace {
                break;
            }
        }
        self.io.print_msg("DONE.", true)
    }

    /// Clears variables, binds labels and rewinds to the first line.
    pub fn reset(&mut self) -> Result<()> {
        self.vars.clear();
        for (label, line_number) in self.listing.labels() {
            self.vars.write_num(&label, 0, Val::Integer(line_number))?;
        }
        self.context.reset(self.listing.line_table());
        debug!(lines = self.context.max_ip(), "reset");
        Ok(())
    }

    pub fn new_program(&mut self) {
        self.listing.clear();
        self.vars.clear();
        self.context.clear();
        debug!("new program");
    }

    pub fn debug(&mut self) -> Result<()> {
        self.dump_line_info(self.context.ip, "")?;
        self.dump_line_info(self.context.ip_next, "NEXT ")?;
        let frames: Vec<String> = self.context.stack.iter().map(|f| f.to_string()).collect();
        self.io
            .print_msg(&format!("STACK ({} entries): ", frames.len()), true)?;
        for frame in frames {
            self.io.print_msg(&format!("   {}", frame), true)?;
        }
        Ok(())
    }

    pub fn dump_line_info(&mut self, ip: Address, prefix: &str) -> Result<()> {
        if let Some(line_number) = self.context.line_number_at(ip) {
            self.io
                .print_msg(&format!("{}IP={}@{}", prefix, ip, line_number), true)?;
            if let Some(text) = self.listing.get(line_number) {
                let text = text.to_string();
                self.io.print_msg(&format!("{}LINE: {}", prefix, text), true)?;
            }
        }
        Ok(())
    }
}

impl<T: Io + Default> Default for Runtime<T> {
    fn default() -> Runtime<T> {
        Runtime::new(T::default())
    }
}
