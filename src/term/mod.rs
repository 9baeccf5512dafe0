/*!
## Rust Terminal Module

The console: line editing for the prompt and INPUT, the interactive
session and the one-file batch mode.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
extern crate mortal;
use crate::error;
use crate::mach::{Halt, Io, Runtime};
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::sync::atomic::Ordering;
use tracing::{debug, warn};

type Result<T> = std::result::Result<T, Halt>;

const BANNER: &str = "TINY BASIC INTERPRETER V1.00";

pub fn main() {
    let console = match Console::new() {
        Ok(console) => console,
        Err(error) => {
            eprintln!("{}", error);
            return;
        }
    };
    let mut runtime = Runtime::new(console);
    let interrupted = runtime.interrupt_flag();
    if let Err(error) = ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "no Ctrl-C handler");
    }
    match std::env::args().nth(1) {
        Some(filename) => batch(&mut runtime, &filename),
        None => interactive(&mut runtime),
    }
}

/// Banner, then read and execute lines until QUIT or end of input.
pub fn interactive<T: Io>(runtime: &mut Runtime<T>) {
    let io = runtime.io_mut();
    if io.print_msg(BANNER, true).is_err() || io.print_msg("READY", true).is_err() {
        return;
    }
    loop {
        if runtime.io_mut().print_msg("", true).is_err() {
            return;
        }
        let line = match runtime.io_mut().input_str("> ") {
            Ok(line) => line,
            Err(halt) => {
                if report(runtime, halt) {
                    return;
                }
                continue;
            }
        };
        debug!(line = line.as_str(), "entered");
        if let Err(halt) = runtime.enter(&line) {
            if report(runtime, halt) {
                return;
            }
        }
    }
}

/// `LOAD "filename"` then `RUN`.
pub fn batch<T: Io>(runtime: &mut Runtime<T>, filename: &str) {
    let load = format!("LOAD \"{}\"", filename);
    for line in [load.as_str(), "RUN"].iter() {
        if let Err(halt) = runtime.enter(line) {
            report(runtime, halt);
            return;
        }
    }
}

/// Prints why a line stopped. True when the session is over.
pub fn report<T: Io>(runtime: &mut Runtime<T>, halt: Halt) -> bool {
    let error = match halt {
        Halt::End => return false,
        Halt::Quit => {
            let _ = runtime.io_mut().print_msg("GOOD BYE!", true);
            return true;
        }
        Halt::Error(error) => error,
    };
    if runtime
        .io_mut()
        .print_error(&format!("?{}", error))
        .is_err()
    {
        return true;
    }
    if !error.is_syntax() && !error.is_direct() {
        let ip = runtime.context().ip;
        if runtime.dump_line_info(ip, "").is_err() {
            return true;
        }
    }
    false
}

/// ## Terminal console
///
/// Line editing and history come from linefeed. Ctrl-C at a prompt is a
/// BREAK; end of input quits.

pub struct Console {
    interface: Interface<DefaultTerminal>,
}

impl Console {
    pub fn new() -> std::io::Result<Console> {
        let interface = Interface::new("BASIC")?;
        interface.set_report_signal(Signal::Interrupt, true);
        Ok(Console { interface })
    }
}

fn term_error(e: std::io::Error) -> Halt {
    error!(InternalError; e.to_string()).into()
}

impl Io for Console {
    fn input_str(&mut self, prompt: &str) -> Result<String> {
        self.interface.set_prompt(prompt).map_err(term_error)?;
        match self.interface.read_line().map_err(term_error)? {
            ReadResult::Input(line) => {
                if !line.trim().is_empty() {
                    self.interface.add_history_unique(line.clone());
                }
                Ok(line)
            }
            ReadResult::Eof => Err(Halt::Quit),
            ReadResult::Signal(_) => Err(error!(Break).into()),
        }
    }

    fn print_msg(&mut self, msg: &str, newline: bool) -> Result<()> {
        let end = if newline { "\n" } else { "" };
        self.interface
            .write_fmt(format_args!("{}{}", msg, end))
            .map_err(term_error)
    }

    fn print_error(&mut self, msg: &str) -> Result<()> {
        self.interface
            .write_fmt(format_args!("{}\n", Style::new().bold().paint(msg)))
            .map_err(term_error)
    }

    fn clear_screen(&mut self) -> Result<()> {
        let terminal = mortal::Terminal::new().map_err(term_error)?;
        terminal.clear_screen().map_err(term_error)
    }
}
