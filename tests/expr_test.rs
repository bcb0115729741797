mod common;
use common::*;

#[test]
fn test_precedence() {
    assert_eq!(run("10 PRINT 1+2*3"), "7\n");
    assert_eq!(run("10 PRINT (1+2)*3"), "9\n");
}

#[test]
fn test_power_is_right_associative() {
    assert_eq!(run("10 PRINT 2^3^2"), "512\n");
}

#[test]
fn test_sign_binds_below_power() {
    assert_eq!(run("10 PRINT -2^2"), "4\n");
}

#[test]
fn test_numeric_literals() {
    assert_eq!(run("10 PRINT 1E3"), "1000\n");
    assert_eq!(run("10 PRINT .5"), "0.5\n");
    assert_eq!(run("10 PRINT 12."), "12\n");
    assert_eq!(run("10 PRINT 1.5E-2"), "0.015\n");
}

#[test]
fn test_unary_sign() {
    assert_eq!(run("10 A = 5 : PRINT -A : PRINT +A"), "-5\n5\n");
}

#[test]
fn test_string_concatenation() {
    assert_eq!(run("10 PRINT \"FOO\"+\"BAR\""), "FOOBAR\n");
}

#[test]
fn test_division_by_zero_follows_ieee() {
    assert_eq!(run("10 PRINT 1/0"), "inf\n");
    assert_eq!(run("10 PRINT -1/0"), "-inf\n");
    assert_eq!(run("10 PRINT 0/0"), "NaN\n");
}

#[test]
fn test_mixed_types_are_an_error() {
    assert_eq!(run("10 PRINT \"A\"+1"), "?TYPE MISMATCH IN 10\n");
}

#[test]
fn test_unterminated_string() {
    assert_eq!(
        run("10 PRINT \"OOPS"),
        "?SYNTAX ERROR IN 10:6; UNTERMINATED STRING\n"
    );
}

#[test]
fn test_missing_expression() {
    assert_eq!(
        run("10 PRINT *"),
        "?SYNTAX ERROR IN 10:6; EXPECTED EXPRESSION\n"
    );
}
