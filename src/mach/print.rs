use crate::term::Console;

/// PRINT zones are this many columns wide; a comma advances to the
/// start of the next zone.
pub const ZONE_WIDTH: usize = 14;

/// ## Column-tracking output
///
/// All program output flows through here so that TAB and comma zones
/// know where the cursor is.

pub struct Printer {
    console: Box<dyn Console>,
    column: usize,
}

impl Printer {
    pub fn new(console: Box<dyn Console>) -> Printer {
        Printer { console, column: 0 }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn write(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
        self.console.write(text);
    }

    pub fn newline(&mut self) {
        self.write("\n");
    }

    /// Pad to the given column; when already past it, start a new line
    /// first.
    pub fn tab(&mut self, column: usize) {
        if self.column > column {
            self.newline();
        }
        let pad = column - self.column;
        self.write(&" ".repeat(pad));
    }

    /// Comma separator: advance to the start of the next zone.
    pub fn next_zone(&mut self) {
        let pad = ZONE_WIDTH - self.column % ZONE_WIDTH;
        self.write(&" ".repeat(pad));
    }

    /// One line of input. The operator's newline resets the column.
    pub fn read_line(&mut self) -> Option<String> {
        self.column = 0;
        self.console.read_line()
    }
}
