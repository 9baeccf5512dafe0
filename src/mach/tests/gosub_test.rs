use super::*;

#[test]
fn test_gosub_returns_after_caller() {
    let mut r = runtime();
    let out = run(
        &mut r,
        &[
            "10 GOSUB 100",
            "20 END",
            "100 PRINT \"HI\"",
            "110 RETURN",
            "RUN",
        ],
    );
    assert_eq!(out, "HI\nDONE.\n");
}

#[test]
fn test_gosub_to_undefined_line_pushes_nothing() {
    let mut r = runtime();
    let out = run(&mut r, &["10 GOSUB 99", "RUN"]);
    assert_eq!(out, "?UNDEFINED LINE IN 10; LINE 99 NOT FOUND\n");
    assert!(r.context().stack.is_empty());
}

#[test]
fn test_return_without_gosub() {
    let mut r = runtime();
    assert_eq!(
        run(&mut r, &["RETURN"]),
        "?RETURN WITHOUT GOSUB; STACK IS EMPTY\n"
    );
    let out = run(&mut r, &["10 FOR I=1 TO 2", "20 RETURN", "RUN"]);
    assert_eq!(out, "?RETURN WITHOUT GOSUB IN 20; STACK TOP IS A LOOP\n");
}

#[test]
fn test_debug_dumps_stack() {
    let mut r = runtime();
    let out = run(
        &mut r,
        &["10 GOSUB 30", "20 END", "30 DEBUG", "40 RETURN", "RUN"],
    );
    assert_eq!(
        out,
        "IP=2@30\nLINE: DEBUG\nNEXT IP=3@40\nNEXT LINE: RETURN\nSTACK (1 entries): \n   RETURN 1\nDONE.\n"
    );
}
