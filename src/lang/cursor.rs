use super::{Error, Position};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

pub fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

pub fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// ## Character stream with one character of lookahead
///
/// Whitespace is skipped after every token the cursor reads, never inside one.

pub struct Cursor<'a> {
    source: &'a str,
    chars: std::str::Chars<'a>,
    look: Option<char>,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Cursor<'a> {
        Cursor::at(source, 0)
    }

    /// Starts reading `source` at byte `offset`. Positions stay relative to
    /// the whole string so slices of it can be re-scanned.
    pub fn at(source: &'a str, offset: usize) -> Cursor<'a> {
        let offset = offset.min(source.len());
        let before = &source[..offset];
        let line = 1 + before.matches('\n').count();
        let column = 1 + match before.rfind('\n') {
            Some(nl) => before[nl + 1..].chars().count(),
            None => before.chars().count(),
        };
        let mut chars = source[offset..].chars();
        let look = chars.next();
        Cursor {
            source,
            chars,
            look,
            line,
            column,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn look(&self) -> Option<char> {
        self.look
    }

    pub fn eof(&self) -> bool {
        self.look.is_none()
    }

    pub fn offset(&self) -> usize {
        self.source.len() - self.chars.as_str().len() - self.look.map_or(0, char::len_utf8)
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
            offset: self.offset(),
        }
    }

    /// Text from the lookahead character to the end of the source.
    pub fn rest(&self) -> &'a str {
        &self.source[self.offset()..]
    }

    pub fn next_char(&mut self) -> Option<char> {
        let result = self.look;
        if let Some(ch) = result {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.look = self.chars.next();
        result
    }

    pub fn is_alphabetic(&self) -> bool {
        self.look.map_or(false, is_basic_alphabetic)
    }

    pub fn is_digit(&self) -> bool {
        self.look.map_or(false, is_basic_digit)
    }

    pub fn is_whitespace(&self) -> bool {
        self.look.map_or(false, is_basic_whitespace)
    }

    pub fn skip_whitespace(&mut self) {
        while self.is_whitespace() {
            self.next_char();
        }
    }

    pub fn read_while<F: Fn(char) -> bool>(&mut self, pred: F) -> String {
        let mut s = String::new();
        while let Some(ch) = self.look {
            if !pred(ch) {
                break;
            }
            s.push(ch);
            self.next_char();
        }
        self.skip_whitespace();
        s
    }

    /// Reads a signed integer: an optional `-`, then one or more digits.
    pub fn read_number(&mut self) -> Result<i64> {
        let mut s = String::new();
        if self.look == Some('-') {
            s.push('-');
            self.next_char();
            self.skip_whitespace();
        }
        if !self.is_digit() {
            return Err(self.error_expected("NUMBER"));
        }
        let position = self.position();
        s.push_str(&self.read_while(is_basic_digit));
        match s.parse::<i64>() {
            Ok(n) => Ok(n),
            Err(_) => Err(error!(SyntaxError, ..&position; "NUMBER TOO LARGE")),
        }
    }

    pub fn read_identifier(&mut self) -> Result<String> {
        if !self.is_alphabetic() {
            return Err(self.error_expected("IDENTIFIER"));
        }
        Ok(self.read_while(|ch| is_basic_alphabetic(ch) || is_basic_digit(ch)))
    }

    pub fn match_char(&mut self, ch: char, skip_whitespace: bool) -> bool {
        if self.look == Some(ch) {
            self.next_char();
            if skip_whitespace {
                self.skip_whitespace();
            }
            return true;
        }
        false
    }

    pub fn expect_char(&mut self, ch: char) -> Result<()> {
        if self.match_char(ch, true) {
            Ok(())
        } else {
            Err(self.error_expected(&format!("'{}'", ch)))
        }
    }

    pub fn error_expected(&self, name: &str) -> Error {
        let found = match self.look {
            Some(ch) => format!("'{}'", ch),
            None => "END OF LINE".to_string(),
        };
        error!(SyntaxError, ..&self.position(); format!("{} EXPECTED, BUT {} FOUND", name, found))
    }
}
