//! # MICRO BASIC
//!
//! Batch runner for the BASIC interpreter. One argument: the program
//! listing, as a file path or an http(s) URL.

extern crate ansi_term;
use ansi_term::Style;
use basic::mach::Interp;
use basic::term::{self, Stdio};
use std::process::exit;

fn main() {
    let mut args = std::env::args();
    let name = args.next().unwrap_or_else(|| "microbasic".to_string());
    let source = match (args.next(), args.next()) {
        (Some(source), None) => source,
        _ => {
            eprintln!("usage: {} <program.bas>", name);
            exit(1);
        }
    };
    let program = match term::load(&source) {
        Ok(program) => program,
        Err(error) => {
            report(&error);
            exit(1);
        }
    };
    let mut interp = Interp::new(program, Box::new(Stdio::default()));
    // a runtime error halts the program cleanly; the process still
    // exits zero
    if let Err(error) = interp.run() {
        report(&error);
    }
}

fn report(error: &basic::lang::Error) {
    eprintln!("{}", Style::new().bold().paint(format!("?{}", error)));
}
