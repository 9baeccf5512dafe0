use super::error::*;
use super::lex::*;
use super::token::*;
use super::LineNumber;

type Result<T> = std::result::Result<T, Error>;

/// ## A scanned line
///
/// The optional line number plus every token after it.

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: Option<LineNumber>,
    lexemes: Vec<Lexeme>,
}

impl Line {
    pub fn new(s: &str) -> Result<Line> {
        let mut lexemes = lex(s)?;
        let mut number = None;
        if let Some(Lexeme {
            token: Token::LineNumber(n),
            ..
        }) = lexemes.first()
        {
            number = Some(*n);
            lexemes.remove(0);
        }
        Ok(Line { number, lexemes })
    }

    pub fn number(&self) -> Option<LineNumber> {
        self.number
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.lexemes.iter().map(|l| &l.token)
    }

    /// Canonical text of the statements: each token in its canonical form,
    /// separated by single spaces. The line number is not included.
    pub fn text(&self) -> String {
        self.tokens()
            .map(|t| t.to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// The `NAME` of a line starting with `NAME:`.
    pub fn label(&self) -> Option<&str> {
        let mut tokens = self.tokens();
        match (tokens.next(), tokens.next()) {
            (Some(Token::Ident(name)), Some(Token::Colon)) => Some(name),
            _ => None,
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} {}", number, self.text()),
            None => write!(f, "{}", self.text()),
        }
    }
}
