//! # MICRO BASIC
//!
//! A batch interpreter for the BASIC language as it was on 8-bit home
//! computers: line numbers, PRINT and INPUT, GOSUB and FOR/NEXT, string
//! and numeric variables, and arrays that grow on demand.
//!
//! Run a program by passing its listing on the command line:
//! ```text
//! $ microbasic hammurabi.bas
//! ```
//!
//! Listings load from a file path or an http(s) URL. Lines execute in
//! ascending line-number order no matter the order they appear in the
//! file. A program ends by running off the last line, or with `END` or
//! `STOP`.

#[path = "doc/statements.rs"]
#[allow(non_snake_case)]
pub mod _Statements;

pub mod lang;
pub mod mach;
pub mod term;
