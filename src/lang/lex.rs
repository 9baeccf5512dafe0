use super::cursor::Cursor;
use super::token::*;
use super::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Scans a whole line. The trailing `Token::End` is not included.
pub fn lex(s: &str) -> Result<Vec<Lexeme>> {
    let mut scanner = Scanner::new(s);
    let mut lexemes = vec![];
    loop {
        let lexeme = scanner.next_lexeme()?;
        if lexeme.token.is_end() {
            return Ok(lexemes);
        }
        lexemes.push(lexeme);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Start,
    Statement,
    Comment,
    End,
}

/// ## Line scanner
///
/// A small state machine: an optional leading line number, then statement
/// tokens. A `REM` switches to comment mode, which takes the remainder of
/// the line as a single token. After that only the end of the line may follow.

pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    state: State,
}

impl<'a> Scanner<'a> {
    pub fn new(s: &'a str) -> Scanner<'a> {
        let mut cursor = Cursor::new(s);
        cursor.skip_whitespace();
        Scanner {
            cursor,
            state: State::Start,
        }
    }

    /// Scans statement tokens starting at byte `offset` of `s`. Used to
    /// re-enter a line part way through, where a number is never a line number.
    pub fn at(s: &'a str, offset: usize) -> Scanner<'a> {
        let mut cursor = Cursor::at(s, offset);
        cursor.skip_whitespace();
        Scanner {
            cursor,
            state: State::Statement,
        }
    }

    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    pub fn next_lexeme(&mut self) -> Result<Lexeme> {
        loop {
            let position = self.cursor.position();
            if self.cursor.eof() && self.state != State::Comment {
                return Ok(Lexeme {
                    token: Token::End,
                    position,
                });
            }
            let (state, token) = match self.state {
                State::Start => self.start()?,
                State::Statement => self.statement()?,
                State::Comment => self.comment(),
                State::End => self.end()?,
            };
            self.state = state;
            if let Some(token) = token {
                return Ok(Lexeme { token, position });
            }
        }
    }

    fn start(&mut self) -> Result<(State, Option<Token>)> {
        if self.cursor.is_digit() {
            let position = self.cursor.position();
            let line_number = self.cursor.read_number()?;
            if line_number == 0 {
                return Err(error!(SyntaxError, ..&position; "LINE NUMBER MUST BE POSITIVE"));
            }
            return Ok((State::Statement, Some(Token::LineNumber(line_number))));
        }
        Ok((State::Statement, None))
    }

    fn end(&mut self) -> Result<(State, Option<Token>)> {
        if !self.cursor.eof() {
            return Err(self.cursor.error_expected("END OF LINE"));
        }
        Ok((State::End, Some(Token::End)))
    }

    fn comment(&mut self) -> (State, Option<Token>) {
        let comment = self.cursor.read_while(|_| true);
        (State::End, Some(Token::Comment(comment.trim_end().to_string())))
    }

    fn statement(&mut self) -> Result<(State, Option<Token>)> {
        match self.statement_token()? {
            None => Err(self.cursor.error_expected("STATEMENT")),
            Some(Token::Statement(Statement::Rem)) => {
                Ok((State::Comment, Some(Token::Statement(Statement::Rem))))
            }
            Some(token) => Ok((State::Statement, Some(token))),
        }
    }

    fn statement_token(&mut self) -> Result<Option<Token>> {
        let c = &mut self.cursor;
        let single = [
            (':', Token::Colon),
            (',', Token::Comma),
            (';', Token::Semicolon),
            ('+', Token::AddOp(AddOp::Plus)),
            ('-', Token::AddOp(AddOp::Minus)),
            ('*', Token::MulOp(MulOp::Multiply)),
            ('/', Token::MulOp(MulOp::Divide)),
            ('=', Token::Equal),
            ('(', Token::LParen),
            (')', Token::RParen),
            ('[', Token::LBracket),
            (']', Token::RBracket),
        ];
        for (ch, token) in single.iter() {
            if c.match_char(*ch, true) {
                return Ok(Some(token.clone()));
            }
        }
        if c.match_char('<', true) {
            if c.match_char('=', true) {
                return Ok(Some(Token::Comparison(Comparison::LessEqual)));
            }
            if c.match_char('>', true) {
                return Ok(Some(Token::Comparison(Comparison::NotEqual)));
            }
            return Ok(Some(Token::Comparison(Comparison::Less)));
        }
        if c.match_char('>', true) {
            if c.match_char('=', true) {
                return Ok(Some(Token::Comparison(Comparison::GreaterEqual)));
            }
            return Ok(Some(Token::Comparison(Comparison::Greater)));
        }
        if c.is_digit() {
            return Ok(Some(Token::Literal(c.read_number()?)));
        }
        if c.match_char('"', false) {
            let mut s = String::new();
            while let Some(ch) = c.look() {
                if ch == '"' {
                    break;
                }
                s.push(ch);
                c.next_char();
            }
            c.expect_char('"')?;
            return Ok(Some(Token::StringLiteral(s)));
        }
        if c.is_alphabetic() {
            return Ok(Some(self.identifier()?));
        }
        Ok(None)
    }

    fn identifier(&mut self) -> Result<Token> {
        let mut name = self.cursor.read_identifier()?;
        if self.cursor.match_char('$', true) {
            name.push('$');
        }
        let name = name.to_ascii_uppercase();
        match Token::from_string(&name) {
            Some(token) => Ok(token),
            None => Ok(Token::Ident(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<Token> {
        lex(s).unwrap().into_iter().map(|l| l.token).collect()
    }

    #[test]
    fn test_line_number() {
        assert_eq!(
            tokens("  10 LET A=5"),
            vec![
                Token::LineNumber(10),
                Token::Statement(Statement::Let),
                Token::Ident("A".into()),
                Token::Equal,
                Token::Literal(5),
            ]
        );
    }

    #[test]
    fn test_line_number_zero() {
        let e = lex(" 0 PRINT").unwrap_err();
        assert!(e.is_syntax());
        assert_eq!(e.position().map(|p| p.column), Some(2));
        assert_eq!(tokens("PRINT 0"), vec![Token::Statement(Statement::Print), Token::Literal(0)]);
    }

    #[test]
    fn test_rem_takes_rest_of_line() {
        assert_eq!(
            tokens("rem it's: all \"one\" token  "),
            vec![
                Token::Statement(Statement::Rem),
                Token::Comment("it's: all \"one\" token".into()),
            ]
        );
        assert_eq!(
            tokens("REM"),
            vec![Token::Statement(Statement::Rem), Token::Comment("".into())]
        );
    }

    #[test]
    fn test_minus_is_an_operator_in_statements() {
        assert_eq!(
            tokens("A-5"),
            vec![
                Token::Ident("A".into()),
                Token::AddOp(AddOp::Minus),
                Token::Literal(5),
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let e = lex("PRINT \"HELLO").unwrap_err();
        assert!(e.is_syntax());
        assert_eq!(e.position().map(|p| p.column), Some(13));
    }

    #[test]
    fn test_unknown_character() {
        let e = lex("PRINT 1 @ 2").unwrap_err();
        assert!(e.is_syntax());
        assert_eq!(e.position().map(|p| p.column), Some(9));
    }

    #[test]
    fn test_scanner_at_offset() {
        let mut s = Scanner::at("FOR I=1 TO 3: 10", 14);
        assert_eq!(s.next_lexeme().unwrap().token, Token::Literal(10));
        assert_eq!(s.next_lexeme().unwrap().token, Token::End);
    }
}
