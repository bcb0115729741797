use super::{Function, Printer, Program, Stack, Val, Var, VarName};
use crate::error;
use crate::lang::{Column, Cursor, Error, LineNumber, MaxValue};
use crate::term::Console;
use rand::rngs::StdRng;
use rand::SeedableRng;

type Result<T> = std::result::Result<T, Error>;

/// GOSUB and FOR nesting limit.
const STACK_LIMIT: usize = 64;

/// Where execution goes after a statement.
pub(super) enum Flow {
    /// Fall through to whatever follows at the cursor.
    Next,
    /// The statement rewrote the program counter.
    Jump(usize, usize),
    /// END or STOP.
    Halt,
}

#[derive(Debug, Clone, Copy)]
struct GosubFrame {
    line: usize,
    pos: usize,
}

#[derive(Debug, Clone, Copy)]
struct ForFrame {
    name: VarName,
    end: f64,
    step: f64,
    line: usize,
    pos: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stmt {
    Dim,
    End,
    For,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    Next,
    Print,
    Rem,
    Return,
    Sleep,
    Stop,
}

impl Stmt {
    const WORDS: [(&'static str, Stmt); 14] = [
        ("DIM", Stmt::Dim),
        ("END", Stmt::End),
        ("FOR", Stmt::For),
        ("GOSUB", Stmt::Gosub),
        ("GOTO", Stmt::Goto),
        ("IF", Stmt::If),
        ("INPUT", Stmt::Input),
        ("LET", Stmt::Let),
        ("NEXT", Stmt::Next),
        ("PRINT", Stmt::Print),
        ("REM", Stmt::Rem),
        ("RETURN", Stmt::Return),
        ("SLEEP", Stmt::Sleep),
        ("STOP", Stmt::Stop),
    ];

    /// Identify and consume the keyword at the cursor.
    fn scan(cursor: &mut Cursor) -> Option<Stmt> {
        if cursor.eat('?') {
            return Some(Stmt::Print);
        }
        if cursor.eat('\'') {
            return Some(Stmt::Rem);
        }
        for (word, stmt) in Stmt::WORDS.iter() {
            if cursor.eat_keyword(word) {
                return Some(*stmt);
            }
        }
        None
    }
}

/// ## The interpreter
///
/// One value owning all mutable state of a run: the program, the
/// variable memory, both control stacks, the printer, and the random
/// number generator. Build a fresh one per program.

pub struct Interp {
    program: Program,
    pub(super) vars: Var,
    gosubs: Stack<GosubFrame>,
    fors: Stack<ForFrame>,
    pub(super) printer: Printer,
    pub(super) rng: StdRng,
    line: usize,
    pos: usize,
}

impl Interp {
    pub fn new(program: Program, console: Box<dyn Console>) -> Interp {
        Interp {
            program,
            vars: Var::new(),
            gosubs: Stack::new("GOSUB STACK FULL", STACK_LIMIT),
            fors: Stack::new("FOR STACK FULL", STACK_LIMIT),
            printer: Printer::new(console),
            rng: StdRng::seed_from_u64(0),
            line: 0,
            pos: 0,
        }
    }

    /// Run until the program halts. A returned error already carries
    /// the line number it happened in; the mutations made before it
    /// stay in place.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => return Ok(()),
                Err(error) => {
                    return Err(error.in_line_number(self.program.number(self.line)))
                }
            }
        }
    }

    /// Execute one statement. False means the program halted.
    fn step(&mut self) -> Result<bool> {
        let text = match self.program.text(self.line) {
            Some(text) => text,
            None => return Ok(false),
        };
        let mut cursor = Cursor::at(&text, self.pos);
        cursor.skip_spaces();
        while cursor.eat(':') {}
        if cursor.at_end() {
            self.line += 1;
            self.pos = 0;
            return Ok(true);
        }
        match self.statement(&mut cursor)? {
            Flow::Next => {
                self.pos = cursor.pos();
                Ok(true)
            }
            Flow::Jump(line, pos) => {
                self.line = line;
                self.pos = pos;
                Ok(true)
            }
            Flow::Halt => Ok(false),
        }
    }

    fn statement(&mut self, cursor: &mut Cursor) -> Result<Flow> {
        match Stmt::scan(cursor) {
            Some(Stmt::Rem) => {
                cursor.seek_end();
                Ok(Flow::Next)
            }
            Some(Stmt::Print) => self.print(cursor),
            Some(Stmt::Input) => self.input(cursor),
            Some(Stmt::Let) => self.assign(cursor),
            Some(Stmt::Goto) => self.goto(cursor),
            Some(Stmt::Gosub) => self.gosub(cursor),
            Some(Stmt::Return) => self.return_(),
            Some(Stmt::If) => self.if_(cursor),
            Some(Stmt::For) => self.for_(cursor),
            Some(Stmt::Next) => self.next_(cursor),
            Some(Stmt::Dim) => self.dim(cursor),
            Some(Stmt::Sleep) => self.sleep(cursor),
            Some(Stmt::End) | Some(Stmt::Stop) => Ok(Flow::Halt),
            None => match cursor.peek() {
                Some(ch) if ch.is_ascii_alphabetic() => self.assign(cursor),
                _ => Err(error!(SyntaxError, ..&cursor.column())),
            },
        }
    }

    fn print(&mut self, cursor: &mut Cursor) -> Result<Flow> {
        let mut newline = true;
        loop {
            cursor.skip_spaces();
            match cursor.peek() {
                None | Some(':') => break,
                Some(';') => {
                    cursor.advance();
                    newline = false;
                }
                Some(',') => {
                    cursor.advance();
                    self.printer.next_zone();
                    newline = false;
                }
                _ => {
                    let value = self.expression(cursor)?;
                    self.printer.write(&value.to_string());
                    newline = true;
                }
            }
        }
        if newline {
            self.printer.newline();
        }
        Ok(Flow::Next)
    }

    fn input(&mut self, cursor: &mut Cursor) -> Result<Flow> {
        cursor.skip_spaces();
        if cursor.peek() == Some('"') {
            let prompt = cursor.string_literal()?;
            if !cursor.eat(';') {
                cursor.eat(',');
            }
            self.printer.write(&prompt);
        }
        loop {
            let (name, index) = self.variable_ref(cursor)?;
            self.printer.write("? ");
            let line = match self.printer.read_line() {
                Some(line) => line,
                None => return Err(error!(InputPastEnd)),
            };
            let value = if name.is_string() {
                Val::text(line)
            } else {
                Val::Number(Function::val(&line))
            };
            self.store(&name, index, value)?;
            if !cursor.eat(',') {
                break;
            }
        }
        Ok(Flow::Next)
    }

    /// LET, spelled out or implicit.
    fn assign(&mut self, cursor: &mut Cursor) -> Result<Flow> {
        let (name, index) = self.variable_ref(cursor)?;
        if !cursor.eat('=') {
            return Err(error!(SyntaxError, ..&cursor.column(); "EXPECTED EQUALS SIGN"));
        }
        let value = self.expression(cursor)?;
        self.store(&name, index, value)?;
        Ok(Flow::Next)
    }

    fn goto(&mut self, cursor: &mut Cursor) -> Result<Flow> {
        let line = self.line_target(cursor)?;
        Ok(Flow::Jump(line, 0))
    }

    fn gosub(&mut self, cursor: &mut Cursor) -> Result<Flow> {
        let target = self.line_target(cursor)?;
        self.gosubs.push(GosubFrame {
            line: self.line,
            pos: cursor.pos(),
        })?;
        Ok(Flow::Jump(target, 0))
    }

    fn return_(&mut self) -> Result<Flow> {
        match self.gosubs.pop() {
            Some(frame) => Ok(Flow::Jump(frame.line, frame.pos)),
            None => Err(error!(ReturnWithoutGosub)),
        }
    }

    fn if_(&mut self, cursor: &mut Cursor) -> Result<Flow> {
        let condition = self.condition(cursor)?.number()? != 0.0;
        if !cursor.eat_keyword("THEN") {
            return Err(error!(SyntaxError, ..&cursor.column(); "EXPECTED THEN"));
        }
        if !condition {
            cursor.seek_end();
            return Ok(Flow::Next);
        }
        cursor.skip_spaces();
        match cursor.peek() {
            Some(ch) if ch.is_ascii_digit() => {
                let column = cursor.column();
                let number = cursor.number()?;
                let line = self.jump_target(number, &column)?;
                Ok(Flow::Jump(line, 0))
            }
            _ => Ok(Flow::Next),
        }
    }

    fn for_(&mut self, cursor: &mut Cursor) -> Result<Flow> {
        let (name, index) = self.variable_ref(cursor)?;
        if name.is_string() || index.is_some() {
            return Err(error!(TypeMismatch; "LOOP VARIABLE MUST BE A NUMERIC SCALAR"));
        }
        if !cursor.eat('=') {
            return Err(error!(SyntaxError, ..&cursor.column(); "EXPECTED EQUALS SIGN"));
        }
        let start = self.expression(cursor)?.number()?;
        if !cursor.eat_keyword("TO") {
            return Err(error!(SyntaxError, ..&cursor.column(); "EXPECTED TO"));
        }
        let end = self.expression(cursor)?.number()?;
        let step = if cursor.eat_keyword("STEP") {
            self.expression(cursor)?.number()?
        } else {
            1.0
        };
        self.vars.store(&name, Val::Number(start))?;
        self.fors.push(ForFrame {
            name,
            end,
            step,
            line: self.line,
            pos: cursor.pos(),
        })?;
        Ok(Flow::Next)
    }

    fn next_(&mut self, cursor: &mut Cursor) -> Result<Flow> {
        let mut first = true;
        loop {
            cursor.skip_spaces();
            let name = match cursor.peek() {
                Some(ch) if ch.is_ascii_alphabetic() => {
                    let (name, index) = self.variable_ref(cursor)?;
                    if name.is_string() || index.is_some() {
                        return Err(error!(NextWithoutFor));
                    }
                    Some(name)
                }
                _ if first => None,
                _ => return Err(error!(SyntaxError, ..&cursor.column(); "EXPECTED VARIABLE")),
            };
            first = false;
            let index = match name {
                Some(name) => self.fors.iter().rposition(|frame| frame.name == name),
                None => self.fors.len().checked_sub(1),
            };
            let index = match index {
                Some(index) => index,
                None => return Err(error!(NextWithoutFor)),
            };
            let frame = match self.fors.get(index) {
                Some(frame) => *frame,
                None => return Err(error!(InternalError)),
            };
            // frames nested inside the one named are abandoned
            self.fors.truncate(index + 1);
            let value = self.vars.fetch(&frame.name).number()? + frame.step;
            self.vars.store(&frame.name, Val::Number(value))?;
            let done = if frame.step < 0.0 {
                value < frame.end
            } else {
                value > frame.end
            };
            if !done {
                return Ok(Flow::Jump(frame.line, frame.pos));
            }
            self.fors.truncate(index);
            if !cursor.eat(',') {
                return Ok(Flow::Next);
            }
        }
    }

    fn dim(&mut self, cursor: &mut Cursor) -> Result<Flow> {
        loop {
            let (name, index) = self.variable_ref(cursor)?;
            let size = match index {
                Some(size) => size,
                None => {
                    return Err(error!(SyntaxError, ..&cursor.column(); "EXPECTED SUBSCRIPT"))
                }
            };
            self.vars.dimension(&name, size)?;
            if !cursor.eat(',') {
                break;
            }
        }
        Ok(Flow::Next)
    }

    fn sleep(&mut self, cursor: &mut Cursor) -> Result<Flow> {
        let seconds = self.expression(cursor)?.number()?;
        if seconds.is_finite() && seconds > 0.0 {
            // clamp to keep the Duration construction in range
            let seconds = seconds.min(86_400.0);
            std::thread::sleep(std::time::Duration::from_secs_f64(seconds));
        }
        Ok(Flow::Next)
    }

    /// A variable reference: name plus optional subscript. Used by
    /// assignment targets, INPUT, FOR, NEXT, and DIM.
    pub(super) fn variable_ref(
        &mut self,
        cursor: &mut Cursor,
    ) -> Result<(VarName, Option<usize>)> {
        cursor.skip_spaces();
        let column = cursor.column();
        let raw = match cursor.name() {
            Some(raw) => raw,
            None => return Err(error!(SyntaxError, ..&column; "EXPECTED VARIABLE")),
        };
        if Function::is_intrinsic(&raw.to_ascii_uppercase()) {
            return Err(error!(SyntaxError, ..&column; "RESERVED FOR BUILT-IN"));
        }
        let name = match VarName::new(raw) {
            Some(name) => name,
            None => return Err(error!(SyntaxError, ..&column; "EXPECTED VARIABLE")),
        };
        let index = if cursor.eat('(') {
            let value = self.expression(cursor)?;
            if !cursor.eat(')') {
                return Err(
                    error!(SyntaxError, ..&cursor.column(); "EXPECTED CLOSING PARENTHESIS"),
                );
            }
            Some(Var::subscript(value)?)
        } else {
            None
        };
        Ok((name, index))
    }

    fn store(&mut self, name: &VarName, index: Option<usize>, value: Val) -> Result<()> {
        match index {
            Some(index) => self.vars.store_element(name, index, value),
            None => self.vars.store(name, value),
        }
    }

    fn line_target(&mut self, cursor: &mut Cursor) -> Result<usize> {
        cursor.skip_spaces();
        let column = cursor.column();
        let number = self.expression(cursor)?.number()?;
        self.jump_target(number, &column)
    }

    fn jump_target(&self, number: f64, column: &Column) -> Result<usize> {
        let number = number.round();
        if number >= 0.0 && number <= f64::from(LineNumber::max_value()) {
            if let Some(index) = self.program.index_of(number as u16) {
                return Ok(index);
            }
        }
        Err(error!(UndefinedLine, ..column))
    }
}
