use super::{Column, Error};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// ## Statement text cursor
///
/// A byte offset into one line of statement text. Every parsing
/// function advances the cursor past exactly what it consumes and
/// never backtracks over it. Offsets only ever land on ASCII
/// boundaries, so slicing is always valid.

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Cursor<'a> {
        Cursor { text, pos: 0 }
    }

    pub fn at(text: &'a str, pos: usize) -> Cursor<'a> {
        Cursor { text, pos }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn column(&self) -> Column {
        self.pos..self.pos + 1
    }

    pub fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    pub fn skip_spaces(&mut self) {
        while let Some(ch) = self.peek() {
            if !is_basic_whitespace(ch) {
                break;
            }
            self.advance();
        }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Discard the remainder of the line.
    pub fn seek_end(&mut self) {
        self.pos = self.text.len();
    }

    /// Consume `ch` if it is the next significant character.
    pub fn eat(&mut self, ch: char) -> bool {
        self.skip_spaces();
        if self.peek() == Some(ch) {
            self.advance();
            return true;
        }
        false
    }

    /// Consume an exact character sequence, such as a relational
    /// operator, if it is next.
    pub fn eat_seq(&mut self, seq: &str) -> bool {
        self.skip_spaces();
        if self.text[self.pos..].starts_with(seq) {
            self.pos += seq.len();
            return true;
        }
        false
    }

    /// Consume a keyword, case-insensitively. A keyword only matches at
    /// a word boundary: the following character must not be alphabetic,
    /// so `FOR I` and `FOR(` match but `FORI` is a variable.
    pub fn eat_keyword(&mut self, word: &str) -> bool {
        self.skip_spaces();
        let rest = self.text[self.pos..].as_bytes();
        if rest.len() < word.len() {
            return false;
        }
        if !rest[..word.len()].eq_ignore_ascii_case(word.as_bytes()) {
            return false;
        }
        if let Some(next) = self.text[self.pos + word.len()..].chars().next() {
            if is_basic_alphabetic(next) {
                return false;
            }
        }
        self.pos += word.len();
        true
    }

    /// Scan a variable or function name: a letter, any alphanumeric
    /// tail, and an optional trailing `$`.
    pub fn name(&mut self) -> Option<&'a str> {
        self.skip_spaces();
        let start = self.pos;
        match self.peek() {
            Some(ch) if is_basic_alphabetic(ch) => self.advance(),
            _ => return None,
        };
        while let Some(ch) = self.peek() {
            if !is_basic_alphabetic(ch) && !is_basic_digit(ch) {
                break;
            }
            self.advance();
        }
        if self.peek() == Some('$') {
            self.advance();
        }
        Some(&self.text[start..self.pos])
    }

    /// Scan an unsigned numeric literal: integer part, optional
    /// fraction, optional exponent. Signs belong to the caller. The
    /// scan must find at least one digit.
    pub fn number(&mut self) -> Result<f64> {
        self.skip_spaces();
        let column = self.column();
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !is_basic_digit(ch) {
                break;
            }
            self.advance();
        }
        if self.peek() == Some('.') {
            self.advance();
            while let Some(ch) = self.peek() {
                if !is_basic_digit(ch) {
                    break;
                }
                self.advance();
            }
        }
        if self.pos == start || &self.text[start..self.pos] == "." {
            return Err(error!(SyntaxError, ..&column; "EXPECTED NUMBER"));
        }
        if let Some('E') | Some('e') = self.peek() {
            let mark = self.pos;
            self.advance();
            if let Some('+') | Some('-') = self.peek() {
                self.advance();
            }
            match self.peek() {
                Some(ch) if is_basic_digit(ch) => {
                    while let Some(ch) = self.peek() {
                        if !is_basic_digit(ch) {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => self.pos = mark,
            }
        }
        match self.text[start..self.pos].parse::<f64>() {
            Ok(number) => Ok(number),
            Err(_) => Err(error!(SyntaxError, ..&column; "EXPECTED NUMBER")),
        }
    }

    /// Scan a double-quoted string literal.
    pub fn string_literal(&mut self) -> Result<String> {
        self.skip_spaces();
        let column = self.column();
        if self.peek() != Some('"') {
            return Err(error!(SyntaxError, ..&column; "EXPECTED STRING"));
        }
        self.advance();
        let start = self.pos;
        loop {
            match self.advance() {
                Some('"') => return Ok(self.text[start..self.pos - 1].to_string()),
                Some(_) => continue,
                None => return Err(error!(SyntaxError, ..&column; "UNTERMINATED STRING")),
            }
        }
    }
}
