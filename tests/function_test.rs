mod common;
use common::*;

#[test]
fn test_mid() {
    let r = &mut runtime();
    assert_eq!(exec(r, &["PRINT MID$(\"HELLO\",1,3)"]), "ELL\n");
    assert_eq!(exec(r, &["PRINT MID$(\"HELLO\",4)"]), "O\n");
    assert_eq!(exec(r, &["PRINT MID$(\"HELLO\",3,10)"]), "LO\n");
    assert_eq!(
        exec(r, &["PRINT MID$(\"HELLO\",9)"]),
        "?ILLEGAL FUNCTION CALL; INDEX OUT OF RANGE IN MID$\n"
    );
    assert_eq!(
        exec(r, &["PRINT MID$(\"A\")"]),
        "?ILLEGAL FUNCTION CALL; TOO FEW ARGUMENTS FOR MID$\n"
    );
}

#[test]
fn test_len() {
    let r = &mut runtime();
    assert_eq!(exec(r, &["PRINT LEN(\"HELLO\")"]), "5\n");
    assert_eq!(
        exec(r, &["PRINT LEN(5)"]),
        "?TYPE MISMATCH; STRING EXPECTED, INTEGER FOUND\n"
    );
    assert_eq!(
        exec(r, &["PRINT LEN(\"A\",\"B\")"]),
        "?ILLEGAL FUNCTION CALL; TOO MANY ARGUMENTS FOR LEN\n"
    );
}

#[test]
fn test_conversions() {
    let r = &mut runtime();
    assert_eq!(exec(r, &["PRINT STR$(12)+\"!\""]), "12!\n");
    assert_eq!(exec(r, &["PRINT INT(\"42\")+1"]), "43\n");
    assert_eq!(exec(r, &["PRINT NUM(3)"]), "3.0\n");
    assert_eq!(exec(r, &["PRINT INT(NUM(7)/2)"]), "3\n");
}

#[test]
fn test_rnd() {
    let r = &mut runtime();
    assert_eq!(exec(r, &["X=RND(1): PRINT X"]), "0\n");
    assert_eq!(exec(r, &["PRINT RND(5,6)"]), "5\n");
    assert_eq!(
        exec(r, &["PRINT RND(0)"]),
        "?ILLEGAL FUNCTION CALL; EMPTY RANGE 0..0\n"
    );
}

#[test]
fn test_alen_needs_variable() {
    let r = &mut runtime();
    assert_eq!(exec(r, &["PRINT ALEN(NOPE)"]), "?UNDEFINED VARIABLE; NOPE\n");
    assert_eq!(exec(r, &["A=1: PRINT ALEN(A)"]), "1\n");
}
