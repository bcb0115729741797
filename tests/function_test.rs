mod common;
use common::*;

#[test]
fn test_fn_abs() {
    assert_eq!(run("10 PRINT ABS(-9.5)"), "9.5\n");
    assert_eq!(run("10 PRINT ABS(9.5)"), "9.5\n");
}

#[test]
fn test_fn_int() {
    assert_eq!(run("10 PRINT INT(9.9)"), "9\n");
    assert_eq!(run("10 PRINT INT(-9.9)"), "-10\n");
}

#[test]
fn test_fn_sgn() {
    assert_eq!(run("10 PRINT SGN(-3)"), "-1\n");
    assert_eq!(run("10 PRINT SGN(0)"), "0\n");
    assert_eq!(run("10 PRINT SGN(42)"), "1\n");
}

#[test]
fn test_fn_sqr() {
    assert_eq!(run("10 PRINT SQR(9)"), "3\n");
    assert_eq!(run("10 PRINT SQR(-1)"), "NaN\n");
}

#[test]
fn test_fn_exp_log() {
    assert_eq!(run("10 PRINT EXP(0)"), "1\n");
    assert_eq!(run("10 PRINT LOG(1)"), "0\n");
}

#[test]
fn test_fn_trig_at_zero() {
    assert_eq!(run("10 PRINT SIN(0)"), "0\n");
    assert_eq!(run("10 PRINT COS(0)"), "1\n");
    assert_eq!(run("10 PRINT TAN(0)"), "0\n");
}

#[test]
fn test_fn_len() {
    assert_eq!(run("10 PRINT LEN(\"TASTY\")"), "5\n");
    assert_eq!(run("10 PRINT LEN(\"\")"), "0\n");
}

#[test]
fn test_fn_val() {
    assert_eq!(run("10 PRINT VAL(\"123\")"), "123\n");
    assert_eq!(run("10 PRINT VAL(\"one\")"), "0\n");
    assert_eq!(run("10 PRINT VAL(\"  42  \")"), "42\n");
    assert_eq!(
        run("10 PRINT VAL(123)"),
        "?TYPE MISMATCH IN 10; STRING VALUE REQUIRED\n"
    );
}

#[test]
fn test_fn_str() {
    assert_eq!(run("10 PRINT STR$(5)"), "5\n");
    assert_eq!(run("10 PRINT LEN(STR$(-5))"), "2\n");
}

#[test]
fn test_fn_chr() {
    assert_eq!(run("10 PRINT CHR$(65)"), "A\n");
    assert_eq!(
        run("10 PRINT CHR$(300)"),
        "?ILLEGAL FUNCTION CALL IN 10; CODE OUT OF RANGE\n"
    );
}

#[test]
fn test_fn_asc() {
    assert_eq!(run("10 PRINT ASC(\"A\")"), "65\n");
    assert_eq!(
        run("10 PRINT ASC(\"\")"),
        "?ILLEGAL FUNCTION CALL IN 10; EMPTY STRING\n"
    );
}

#[test]
fn test_fn_tab() {
    assert_eq!(run("10 PRINT TAB(5);\"!\""), "     !\n");
    assert_eq!(run("10 PRINT \"ABCDEF\";TAB(2);\"!\""), "ABCDEF\n  !\n");
}

#[test]
fn test_fn_rnd_reseeds_deterministically() {
    let source = "10 A = RND(-1)\n20 B = RND(-1)\n30 IF A = B THEN PRINT \"SAME\"";
    assert_eq!(run(source), "SAME\n");
}

#[test]
fn test_fn_rnd_range() {
    let source = "10 FOR I = 1 TO 10 : IF RND(1) >= 1 THEN PRINT \"BAD\"\n\
                  20 NEXT I\n\
                  30 PRINT \"OK\"";
    assert_eq!(run(source), "OK\n");
}

#[test]
fn test_unknown_function() {
    assert_eq!(
        run("10 PRINT FROB(1)"),
        "?SYNTAX ERROR IN 10:6; UNKNOWN FUNCTION\n"
    );
}
