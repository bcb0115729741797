/*!
## Rust Terminal Module

This Rust module holds the interpreter's collaborators: console input
and output as the machine sees it, and program loading from the
filesystem or an HTTP server.

*/

use crate::error;
use crate::lang::Error;
use crate::mach::Program;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};

type Result<T> = std::result::Result<T, Error>;

/// Console I/O as the interpreter sees it. PRINT goes through
/// `write`; INPUT takes one line at a time from `read_line`, which
/// answers None at end of input.
pub trait Console {
    fn write(&mut self, text: &str);
    fn read_line(&mut self) -> Option<String>;
}

/// The process's standard input and output.
#[derive(Debug, Default)]
pub struct Stdio {}

impl Console for Stdio {
    fn write(&mut self, text: &str) {
        let stdout = std::io::stdout();
        let mut stdout = stdout.lock();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match std::io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                while line.ends_with('\n') || line.ends_with('\r') {
                    line.pop();
                }
                Some(line)
            }
        }
    }
}

/// Load a program listing from a file path or an http(s) URL.
pub fn load(source: &str) -> Result<Program> {
    if source.starts_with("http://") || source.starts_with("https://") {
        load_url(source)
    } else {
        load_file(source)
    }
}

fn load_file(filename: &str) -> Result<Program> {
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => {
            return match error.kind() {
                ErrorKind::NotFound => Err(error!(FileNotFound; filename)),
                _ => Err(error!(InternalError; &error.to_string())),
            }
        }
    };
    let mut program = Program::new();
    for (index, line) in reader.lines().enumerate() {
        match line {
            Ok(line) => load_line(&mut program, &line, index)?,
            Err(error) => return Err(error!(InternalError; &error.to_string())),
        }
    }
    Ok(program)
}

fn load_url(url: &str) -> Result<Program> {
    let response = match reqwest::blocking::get(url) {
        Ok(response) => response,
        Err(error) => return Err(error!(InternalError; &error.to_string())),
    };
    if !response.status().is_success() {
        return Err(error!(FileNotFound; url));
    }
    let body = match response.text() {
        Ok(body) => body,
        Err(error) => return Err(error!(InternalError; &error.to_string())),
    };
    let mut program = Program::new();
    for (index, line) in body.lines().enumerate() {
        load_line(&mut program, line, index)?;
    }
    Ok(program)
}

fn load_line(program: &mut Program, line: &str, index: usize) -> Result<()> {
    match program.load_str(line) {
        Ok(()) => Ok(()),
        Err(error) => Err(error.message(&format!(
            "IN LINE {} OF THE FILE (NOT A BASIC LINE NUMBER)",
            index + 1
        ))),
    }
}
