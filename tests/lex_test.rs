use tinybasic::lang::token::*;
use tinybasic::lang::{lex, Line};

fn tokens(s: &str) -> Vec<Token> {
    lex(s).unwrap().into_iter().map(|l| l.token).collect()
}

#[test]
fn test_keywords_any_case() {
    assert_eq!(
        tokens("for i=1 to 9 step 2"),
        vec![
            Token::Statement(Statement::For),
            Token::Ident("I".into()),
            Token::Equal,
            Token::Literal(1),
            Token::Keyword(Keyword::To),
            Token::Literal(9),
            Token::Keyword(Keyword::Step),
            Token::Literal(2),
        ]
    );
}

#[test]
fn test_string_names_and_functions() {
    assert_eq!(
        tokens("A$=mid$(B$,1)"),
        vec![
            Token::Ident("A$".into()),
            Token::Equal,
            Token::Function(Function::Mid),
            Token::LParen,
            Token::Ident("B$".into()),
            Token::Comma,
            Token::Literal(1),
            Token::RParen,
        ]
    );
}

#[test]
fn test_comparisons() {
    assert_eq!(
        tokens("A<>B<=C>=D"),
        vec![
            Token::Ident("A".into()),
            Token::Comparison(Comparison::NotEqual),
            Token::Ident("B".into()),
            Token::Comparison(Comparison::LessEqual),
            Token::Ident("C".into()),
            Token::Comparison(Comparison::GreaterEqual),
            Token::Ident("D".into()),
        ]
    );
}

#[test]
fn test_canonical_line() {
    let line = Line::new("100 if a<>b then print \"x\";a").unwrap();
    assert_eq!(line.number(), Some(100));
    assert_eq!(line.to_string(), "100 IF A <> B THEN PRINT \"x\" ; A");
    let line = Line::new("loop: rem  the top ").unwrap();
    assert_eq!(line.label(), Some("LOOP"));
    assert_eq!(line.text(), "LOOP : REM the top");
}
