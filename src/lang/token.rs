use super::Position;
use std::collections::HashMap;

thread_local!(
    // Later entries win, so the chain runs from the lowest lookup priority
    // (DIV and MOD) up to statement names.
    static STRING_TO_TOKEN: HashMap<String, Token> = [Token::MulOp(MulOp::Div), Token::MulOp(MulOp::Mod)]
        .iter()
        .cloned()
        .chain(Function::ALL.iter().map(|x| Token::Function(*x)))
        .chain(Keyword::ALL.iter().map(|x| Token::Keyword(*x)))
        .chain(BoolOperator::ALL.iter().map(|x| Token::BoolOp(*x)))
        .chain(Statement::ALL.iter().map(|x| Token::Statement(*x)))
        .map(|t| (t.to_string(), t))
        .collect();
);

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    LineNumber(i64),
    Statement(Statement),
    Keyword(Keyword),
    Function(Function),
    Comment(String),
    Ident(String),
    Literal(i64),
    StringLiteral(String),
    Equal,
    MulOp(MulOp),
    AddOp(AddOp),
    BoolOp(BoolOperator),
    Comparison(Comparison),
    Comma,
    Colon,
    Semicolon,
    LParen,
    RParen,
    LBracket,
    RBracket,
    End,
}

impl Token {
    /// Classifies an uppercase word: statement, boolean operator, keyword,
    /// function, `DIV`/`MOD`, in that order. `None` means a plain identifier.
    pub fn from_string(s: &str) -> Option<Token> {
        STRING_TO_TOKEN.with(|stt| stt.get(s).cloned())
    }

    pub fn is_end(&self) -> bool {
        *self == Token::End
    }

    /// Name of the token class, for error messages.
    pub fn describe(&self) -> &'static str {
        use Token::*;
        match self {
            LineNumber(_) => "LINE NUMBER",
            Statement(_) => "STATEMENT",
            Keyword(_) => "KEYWORD",
            Function(_) => "FUNCTION",
            Comment(_) => "COMMENT",
            Ident(_) => "IDENTIFIER",
            Literal(_) => "NUMBER",
            StringLiteral(_) => "STRING",
            Equal => "'='",
            MulOp(_) | AddOp(_) => "OPERATOR",
            BoolOp(_) => "BOOLEAN OPERATOR",
            Comparison(_) => "COMPARISON",
            Comma => "','",
            Colon => "':'",
            Semicolon => "';'",
            LParen => "'('",
            RParen => "')'",
            LBracket => "'['",
            RBracket => "']'",
            End => "END OF LINE",
        }
    }
}

/// Canonical source form of the token.
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            LineNumber(n) => write!(f, "{}", n),
            Statement(s) => write!(f, "{}", s),
            Keyword(s) => write!(f, "{}", s),
            Function(s) => write!(f, "{}", s),
            Comment(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Literal(n) => write!(f, "{}", n),
            StringLiteral(s) => write!(f, "\"{}\"", s),
            Equal => write!(f, "="),
            MulOp(s) => write!(f, "{}", s),
            AddOp(s) => write!(f, "{}", s),
            BoolOp(s) => write!(f, "{}", s),
            Comparison(s) => write!(f, "{}", s),
            Comma => write!(f, ","),
            Colon => write!(f, ":"),
            Semicolon => write!(f, ";"),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            LBracket => write!(f, "["),
            RBracket => write!(f, "]"),
            End => Ok(()),
        }
    }
}

/// A token and where it started.
#[derive(Debug, PartialEq, Clone)]
pub struct Lexeme {
    pub token: Token,
    pub position: Position,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Statement {
    Debug,
    Trace,
    Rem,
    Let,
    Dim,
    Goto,
    Gosub,
    Return,
    Cls,
    Print,
    Input,
    New,
    List,
    Read,
    Write,
    Load,
    Save,
    End,
    Quit,
    Run,
    Reset,
    Cont,
    If,
    On,
    For,
    Next,
}

impl Statement {
    pub const ALL: [Statement; 26] = [
        Statement::Debug,
        Statement::Trace,
        Statement::Rem,
        Statement::Let,
        Statement::Dim,
        Statement::Goto,
        Statement::Gosub,
        Statement::Return,
        Statement::Cls,
        Statement::Print,
        Statement::Input,
        Statement::New,
        Statement::List,
        Statement::Read,
        Statement::Write,
        Statement::Load,
        Statement::Save,
        Statement::End,
        Statement::Quit,
        Statement::Run,
        Statement::Reset,
        Statement::Cont,
        Statement::If,
        Statement::On,
        Statement::For,
        Statement::Next,
    ];
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Debug => write!(f, "DEBUG"),
            Trace => write!(f, "TRACE"),
            Rem => write!(f, "REM"),
            Let => write!(f, "LET"),
            Dim => write!(f, "DIM"),
            Goto => write!(f, "GOTO"),
            Gosub => write!(f, "GOSUB"),
            Return => write!(f, "RETURN"),
            Cls => write!(f, "CLS"),
            Print => write!(f, "PRINT"),
            Input => write!(f, "INPUT"),
            New => write!(f, "NEW"),
            List => write!(f, "LIST"),
            Read => write!(f, "READ"),
            Write => write!(f, "WRITE"),
            Load => write!(f, "LOAD"),
            Save => write!(f, "SAVE"),
            End => write!(f, "END"),
            Quit => write!(f, "QUIT"),
            Run => write!(f, "RUN"),
            Reset => write!(f, "RESET"),
            Cont => write!(f, "CONT"),
            If => write!(f, "IF"),
            On => write!(f, "ON"),
            For => write!(f, "FOR"),
            Next => write!(f, "NEXT"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Keyword {
    To,
    Step,
    Then,
    Else,
}

impl Keyword {
    pub const ALL: [Keyword; 4] = [Keyword::To, Keyword::Step, Keyword::Then, Keyword::Else];
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Keyword::*;
        match self {
            To => write!(f, "TO"),
            Step => write!(f, "STEP"),
            Then => write!(f, "THEN"),
            Else => write!(f, "ELSE"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum BoolOperator {
    Not,
    And,
    Or,
    Xor,
}

impl BoolOperator {
    pub const ALL: [BoolOperator; 4] = [
        BoolOperator::Not,
        BoolOperator::And,
        BoolOperator::Or,
        BoolOperator::Xor,
    ];
}

impl std::fmt::Display for BoolOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use BoolOperator::*;
        match self {
            Not => write!(f, "NOT"),
            And => write!(f, "AND"),
            Or => write!(f, "OR"),
            Xor => write!(f, "XOR"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Function {
    Str,
    Int,
    Num,
    Len,
    Alen,
    Mid,
    Rnd,
}

impl Function {
    pub const ALL: [Function; 7] = [
        Function::Str,
        Function::Int,
        Function::Num,
        Function::Len,
        Function::Alen,
        Function::Mid,
        Function::Rnd,
    ];
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Function::*;
        match self {
            Str => write!(f, "STR$"),
            Int => write!(f, "INT"),
            Num => write!(f, "NUM"),
            Len => write!(f, "LEN"),
            Alen => write!(f, "ALEN"),
            Mid => write!(f, "MID$"),
            Rnd => write!(f, "RND"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum MulOp {
    Multiply,
    Divide,
    Div,
    Mod,
}

impl std::fmt::Display for MulOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use MulOp::*;
        match self {
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Div => write!(f, "DIV"),
            Mod => write!(f, "MOD"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum AddOp {
    Plus,
    Minus,
}

impl std::fmt::Display for AddOp {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AddOp::Plus => write!(f, "+"),
            AddOp::Minus => write!(f, "-"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Comparison {
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Comparison::*;
        match self {
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}
