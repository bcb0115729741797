mod common;
use common::*;

#[test]
fn test_lines_execute_in_ascending_order() {
    assert_eq!(run("20 PRINT 2\n10 PRINT 1"), "1\n2\n");
}

#[test]
fn test_reentered_line_replaces_text() {
    assert_eq!(run("10 PRINT 1\n10 PRINT 9"), "9\n");
}

#[test]
fn test_blank_lines_are_ignored() {
    assert_eq!(run("\n10 PRINT 1\n\n"), "1\n");
}

#[test]
fn test_missing_line_number_is_fatal() {
    assert_eq!(run("PRINT 1"), "?SYNTAX ERROR; MISSING LINE NUMBER\n");
}

#[test]
fn test_empty_program_halts_cleanly() {
    assert_eq!(run(""), "");
}
