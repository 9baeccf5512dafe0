mod common;
use common::*;

#[test]
fn test_out_of_bounds_keeps_session() {
    let r = &mut runtime();
    assert_eq!(
        exec(r, &["DIM A(3)", "A(5)=1"]),
        "?SUBSCRIPT OUT OF RANGE; A(5) OUTSIDE 0..3\n"
    );
    assert_eq!(exec(r, &["A(2)=7: PRINT A(2)"]), "7\n");
    assert_eq!(exec(r, &["PRINT A(0)"]), "?UNASSIGNED VARIABLE; A\n");
    assert_eq!(exec(r, &["PRINT A(-1)"]), "?SUBSCRIPT OUT OF RANGE; A(-1) OUTSIDE 0..3\n");
}

#[test]
fn test_dim_list() {
    let r = &mut runtime();
    assert_eq!(
        exec(r, &["DIM B$(2), C(4): PRINT ALEN(B$); ALEN(C)"]),
        "2 4\n"
    );
    assert_eq!(
        exec(r, &["DIM A(-1)"]),
        "?ILLEGAL FUNCTION CALL; DIM A(-1)\n"
    );
}

#[test]
fn test_indexed_write_needs_dim() {
    let r = &mut runtime();
    assert_eq!(exec(r, &["Q(1)=1"]), "?UNDEFINED VARIABLE; Q\n");
}

#[test]
fn test_string_array() {
    let r = &mut runtime();
    assert_eq!(
        exec(r, &["DIM N$(2): N$(0)=\"X\": N$(1)=\"Y\": PRINT N$(0)+N$(1)"]),
        "XY\n"
    );
}

#[test]
fn test_redim_clears() {
    let r = &mut runtime();
    assert_eq!(
        exec(r, &["DIM A(2): A(1)=1: DIM A(2): PRINT A(1)"]),
        "?UNASSIGNED VARIABLE; A\n"
    );
}
