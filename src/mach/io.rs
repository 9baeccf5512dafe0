use super::{Halt, Result};
use crate::error;
use crate::lang::Error;
use std::collections::{HashMap, VecDeque};

/// ## Console and file collaborator
///
/// Everything the machine reads or writes goes through this trait. Files
/// default to the local filesystem.

pub trait Io {
    fn input_str(&mut self, prompt: &str) -> Result<String>;

    fn input_int(&mut self, prompt: &str) -> Result<i64> {
        let s = self.input_str(prompt)?;
        match s.trim().parse::<i64>() {
            Ok(n) => Ok(n),
            Err(_) => Err(error!(TypeMismatch; format!("\"{}\" IS NOT AN INTEGER", s.trim())).into()),
        }
    }

    fn print_msg(&mut self, msg: &str, newline: bool) -> Result<()>;

    fn print_error(&mut self, msg: &str) -> Result<()> {
        self.print_msg(msg, true)
    }

    fn clear_screen(&mut self) -> Result<()>;

    fn read_lines(&mut self, file: &str) -> Result<Vec<String>> {
        match std::fs::read_to_string(file) {
            Ok(s) => Ok(s.lines().map(str::to_string).collect()),
            Err(e) => Err(io_error(file, e).into()),
        }
    }

    fn write_text(&mut self, file: &str, text: &str) -> Result<()> {
        match std::fs::write(file, text) {
            Ok(()) => Ok(()),
            Err(e) => Err(io_error(file, e).into()),
        }
    }
}

pub fn io_error(file: &str, e: std::io::Error) -> Error {
    match e.kind() {
        std::io::ErrorKind::NotFound => error!(FileNotFound; file.to_string()),
        _ => error!(InternalError; format!("{}: {}", file, e)),
    }
}

/// ## In-memory console
///
/// Queued input lines, captured output and a map standing in for the
/// filesystem. Running out of input ends the session.

#[derive(Debug, Default)]
pub struct Transcript {
    input: VecDeque<String>,
    output: String,
    files: HashMap<String, String>,
    clears: usize,
}

impl Transcript {
    pub fn new() -> Transcript {
        Transcript::default()
    }

    pub fn push_input<S: Into<String>>(&mut self, line: S) {
        self.input.push_back(line.into());
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    pub fn file(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }

    pub fn insert_file<S: Into<String>>(&mut self, name: &str, text: S) {
        self.files.insert(name.to_string(), text.into());
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Io for Transcript {
    fn input_str(&mut self, prompt: &str) -> Result<String> {
        self.output.push_str(prompt);
        match self.input.pop_front() {
            Some(line) => {
                self.output.push_str(&line);
                self.output.push('\n');
                Ok(line)
            }
            None => Err(Halt::Quit),
        }
    }

    fn print_msg(&mut self, msg: &str, newline: bool) -> Result<()> {
        self.output.push_str(msg);
        if newline {
            self.output.push('\n');
        }
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn read_lines(&mut self, file: &str) -> Result<Vec<String>> {
        match self.files.get(file) {
            Some(text) => Ok(text.lines().map(str::to_string).collect()),
            None => Err(error!(FileNotFound; file.to_string()).into()),
        }
    }

    fn write_text(&mut self, file: &str, text: &str) -> Result<()> {
        self.files.insert(file.to_string(), text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_int() {
        let mut t = Transcript::new();
        t.push_input(" 42 ");
        t.push_input("forty");
        assert_eq!(t.input_int("? ").unwrap(), 42);
        match t.input_int("? ") {
            Err(Halt::Error(e)) => assert_eq!(e.code(), 13),
            _ => panic!(),
        }
        assert!(matches!(t.input_int("? "), Err(Halt::Quit)));
        assert_eq!(t.output(), "?  42 \n? forty\n? ");
    }

    #[test]
    fn test_files() {
        let mut t = Transcript::new();
        t.write_text("A.BAS", "10 END\n").unwrap();
        assert_eq!(t.read_lines("A.BAS").unwrap(), vec!["10 END"]);
        assert!(t.read_lines("B.BAS").is_err());
    }
}
