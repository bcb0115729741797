use crate::error;
use crate::lang::{Error, LineNumber, MaxValue};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Program listing
///
/// Lines keyed by number and kept in ascending order; execution walks
/// the vector by index. Re-entering a number replaces its text.

#[derive(Debug, Default)]
pub struct Program {
    lines: Vec<(u16, Rc<str>)>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Insert or replace the text for a line number.
    pub fn insert(&mut self, number: u16, text: &str) {
        match self.lines.binary_search_by_key(&number, |(n, _)| *n) {
            Ok(index) => self.lines[index].1 = text.into(),
            Err(index) => self.lines.insert(index, (number, text.into())),
        }
    }

    /// Parse one line of a listing: a decimal line number, whitespace,
    /// then statement text. Blank lines are ignored.
    pub fn load_str(&mut self, line: &str) -> Result<()> {
        let line = line.trim_end();
        let stripped = line.trim_start();
        if stripped.is_empty() {
            return Ok(());
        }
        let digits: usize = stripped
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return Err(error!(SyntaxError; "MISSING LINE NUMBER"));
        }
        let number = match stripped[..digits].parse::<u16>() {
            Ok(number) if number <= LineNumber::max_value() => number,
            _ => return Err(error!(SyntaxError; "LINE NUMBER TOO LARGE")),
        };
        self.insert(number, stripped[digits..].trim_start());
        Ok(())
    }

    pub fn number(&self, index: usize) -> LineNumber {
        self.lines.get(index).map(|(number, _)| *number)
    }

    pub fn text(&self, index: usize) -> Option<Rc<str>> {
        self.lines.get(index).map(|(_, text)| text.clone())
    }

    /// Index of a line by its number, for GOTO and GOSUB targets.
    pub fn index_of(&self, number: u16) -> Option<usize> {
        self.lines
            .binary_search_by_key(&number, |(n, _)| *n)
            .ok()
    }
}
