mod common;
use common::*;

#[test]
fn test_input_string() {
    let r = &mut runtime();
    r.io_mut().push_input("BOB");
    assert_eq!(
        exec(r, &["INPUT \"NAME\"; N$: PRINT \"HI \" + N$"]),
        "NAME?BOB\nHI BOB\n"
    );
}

#[test]
fn test_input_number() {
    let r = &mut runtime();
    r.io_mut().push_input("21");
    assert_eq!(exec(r, &["INPUT \"N\", N: PRINT N*2"]), "N21\n42\n");
    r.io_mut().push_input("X");
    assert_eq!(
        exec(r, &["INPUT \"N\", N"]),
        "NX\n?TYPE MISMATCH; \"X\" IS NOT AN INTEGER\n"
    );
}

#[test]
fn test_input_into_array() {
    let r = &mut runtime();
    r.io_mut().push_input("5");
    assert_eq!(
        exec(r, &["DIM A(2): INPUT \"V\", A(1): PRINT A(1)"]),
        "V5\n5\n"
    );
}

#[test]
fn test_input_in_program() {
    let r = &mut runtime();
    r.io_mut().push_input("3");
    assert_eq!(
        exec(r, &["10 INPUT \"COUNT\"; C", "20 PRINT C+1", "RUN"]),
        "COUNT?3\n4\nDONE.\n"
    );
}
