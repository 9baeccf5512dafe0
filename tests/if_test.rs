mod common;
use common::*;

#[test]
fn test_if_then_statement() {
    let r = &mut runtime();
    assert_eq!(exec(r, &["IF 1 THEN PRINT \"ONE\""]), "ONE\n");
    assert_eq!(exec(r, &["IF 0 THEN PRINT \"ONE\": PRINT \"TWO\""]), "");
    assert_eq!(
        exec(r, &["IF 1 THEN PRINT \"ONE\": PRINT \"TWO\""]),
        "ONE\nTWO\n"
    );
}

#[test]
fn test_if_jumps() {
    for form in ["IF 1 GOTO 30", "IF 1 THEN 30", "IF 1 30"].iter() {
        let r = &mut runtime();
        let line = format!("10 {}", form);
        assert_eq!(
            exec(r, &[line.as_str(), "20 PRINT \"NO\"", "30 PRINT \"YES\"", "RUN"]),
            "YES\nDONE.\n"
        );
    }
}

#[test]
fn test_if_errors() {
    let r = &mut runtime();
    assert_eq!(
        exec(r, &["IF \"A\" THEN PRINT 1"]),
        "?TYPE MISMATCH; NUMERIC CONDITION EXPECTED\n"
    );
    assert_eq!(
        exec(r, &["IF 1 PRINT 1"]),
        "?SYNTAX ERROR AT 1:6; KEYWORD EXPECTED, BUT 'PRINT' FOUND\n"
    );
}
