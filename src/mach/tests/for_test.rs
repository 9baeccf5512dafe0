use super::*;

#[test]
fn test_for_next_on_program_lines() {
    let mut r = runtime();
    let out = run(
        &mut r,
        &["10 FOR I=1 TO 3", "20 PRINT I", "30 NEXT I", "RUN"],
    );
    assert_eq!(out, "1\n2\n3\nDONE.\n");
}

#[test]
fn test_body_count_follows_step() {
    let mut r = runtime();
    let out = run(
        &mut r,
        &["10 FOR I=1 TO 10 STEP 3", "20 PRINT I;", "30 NEXT", "RUN"],
    );
    assert_eq!(out, "1 4 7 10 DONE.\n");
}

#[test]
fn test_negative_step() {
    let mut r = runtime();
    let out = run(&mut r, &["FOR I=3 TO 1 STEP -1: PRINT I;: NEXT I"]);
    assert_eq!(out, "3 2 1 ");
}

#[test]
fn test_empty_range_skips_body() {
    let mut r = runtime();
    let out = run(
        &mut r,
        &[
            "10 FOR I=5 TO 1",
            "20 PRINT \"IN\"",
            "30 NEXT",
            "40 PRINT \"OUT\"",
            "RUN",
        ],
    );
    assert_eq!(out, "OUT\nDONE.\n");
}

#[test]
fn test_empty_range_skips_nested_loops() {
    let mut r = runtime();
    let out = run(
        &mut r,
        &[
            "10 FOR I=5 TO 1",
            "20 FOR J=1 TO 2",
            "30 NEXT J",
            "40 NEXT I",
            "50 PRINT \"OUT\"",
            "RUN",
        ],
    );
    assert_eq!(out, "OUT\nDONE.\n");
}

#[test]
fn test_empty_range_without_next() {
    let mut r = runtime();
    let out = run(&mut r, &["10 FOR I=5 TO 1", "20 PRINT I", "RUN"]);
    assert_eq!(out, "?FOR WITHOUT NEXT IN 10; I\n");
}

#[test]
fn test_inline_loop_continues_after_next() {
    let mut r = runtime();
    let out = run(&mut r, &["FOR I=1 TO 3: PRINT I;: NEXT I: PRINT \"X\""]);
    assert_eq!(out, "1 2 3 X\n");
}

#[test]
fn test_nested_inline_loops() {
    let mut r = runtime();
    let out = run(
        &mut r,
        &["FOR I=1 TO 2: FOR J=1 TO 2: PRINT I*J;: NEXT J: NEXT I"],
    );
    assert_eq!(out, "1 2 2 4 ");
}

#[test]
fn test_inline_loop_without_next_runs_rest_of_line() {
    let mut r = runtime();
    let out = run(&mut r, &["FOR I=1 TO 2: PRINT I"]);
    assert_eq!(out, "1\n2\n");
}

#[test]
fn test_breaking_out_of_loop_with_goto() {
    let mut r = runtime();
    let out = run(
        &mut r,
        &[
            "10 FOR Y=1 TO 2",
            "20 FOR X=8 TO 9",
            "30 PRINT Y;X",
            "40 GOTO 60",
            "50 NEXT",
            "60 NEXT Y",
            "RUN",
        ],
    );
    assert_eq!(out, "1 8\n2 8\nDONE.\n");
}

#[test]
fn test_loop_errors() {
    let mut r = runtime();
    assert_eq!(run(&mut r, &["NEXT"]), "?NEXT WITHOUT FOR\n");
    assert_eq!(
        run(&mut r, &["FOR I=1 TO 2 STEP 0: PRINT I"]),
        "?ILLEGAL FUNCTION CALL; STEP 0\n"
    );
    assert_eq!(
        run(&mut r, &["FOR A$=1 TO 2: PRINT 1"]),
        "?TYPE MISMATCH; A$ IS NOT A NUMERIC VARIABLE\n"
    );
    assert_eq!(
        run(&mut r, &["FOR I=1.5 TO 2: PRINT 1"]),
        "?SYNTAX ERROR AT 1:8; STATEMENT EXPECTED, BUT '.' FOUND\n"
    );
}

#[test]
fn test_unmatched_next_leaves_stack() {
    let mut r = runtime();
    assert_eq!(run(&mut r, &["FOR I=1 TO 2"]), "");
    assert_eq!(run(&mut r, &["NEXT J"]), "?NEXT WITHOUT FOR; J\n");
    assert_eq!(r.context().stack.len(), 1);
    assert_eq!(run(&mut r, &["NEXT I", "PRINT I"]), "2\n");

    let out = run(
        &mut r,
        &[
            "10 FOR K=1 TO 2",
            "20 GOSUB 40",
            "30 END",
            "40 NEXT K",
            "50 RETURN",
            "RUN",
        ],
    );
    assert_eq!(out, "?NEXT WITHOUT FOR IN 40; K\n");
    assert_eq!(r.context().stack.len(), 2);
}
