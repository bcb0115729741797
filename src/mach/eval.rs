use super::{Function, Interp, Operation, Val, Var};
use crate::error;
use crate::lang::{Cursor, Error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type Result<T> = std::result::Result<T, Error>;

/// TAB can reach no further than this column.
const MAX_TAB: f64 = 255.0;

/// ## Expression evaluation
///
/// Recursive descent directly over the statement text; each level
/// consumes what it evaluates and leaves the cursor on whatever
/// follows. Precedence, lowest to highest: sum, product, power
/// (right-associative), sign, primary.

impl Interp {
    pub(super) fn expression(&mut self, cursor: &mut Cursor) -> Result<Val> {
        let mut lhs = self.term(cursor)?;
        loop {
            if cursor.eat('+') {
                lhs = Operation::sum(lhs, self.term(cursor)?)?;
            } else if cursor.eat('-') {
                lhs = Operation::subtract(lhs, self.term(cursor)?)?;
            } else {
                return Ok(lhs);
            }
        }
    }

    /// An expression with an optional relational comparison on top.
    /// The result of a comparison is -1 for true and 0 for false.
    pub(super) fn condition(&mut self, cursor: &mut Cursor) -> Result<Val> {
        let lhs = self.expression(cursor)?;
        if cursor.eat_seq("<=") || cursor.eat_seq("=<") {
            Operation::less_equal(lhs, self.expression(cursor)?)
        } else if cursor.eat_seq(">=") || cursor.eat_seq("=>") {
            Operation::greater_equal(lhs, self.expression(cursor)?)
        } else if cursor.eat_seq("<>") || cursor.eat_seq("><") {
            Operation::not_equal(lhs, self.expression(cursor)?)
        } else if cursor.eat('<') {
            Operation::less(lhs, self.expression(cursor)?)
        } else if cursor.eat('>') {
            Operation::greater(lhs, self.expression(cursor)?)
        } else if cursor.eat('=') {
            Operation::equal(lhs, self.expression(cursor)?)
        } else {
            Ok(lhs)
        }
    }

    fn term(&mut self, cursor: &mut Cursor) -> Result<Val> {
        let mut lhs = self.power(cursor)?;
        loop {
            if cursor.eat('*') {
                lhs = Operation::multiply(lhs, self.power(cursor)?)?;
            } else if cursor.eat('/') {
                lhs = Operation::divide(lhs, self.power(cursor)?)?;
            } else {
                return Ok(lhs);
            }
        }
    }

    fn power(&mut self, cursor: &mut Cursor) -> Result<Val> {
        let base = self.factor(cursor)?;
        if cursor.eat('^') {
            return Operation::power(base, self.power(cursor)?);
        }
        Ok(base)
    }

    fn factor(&mut self, cursor: &mut Cursor) -> Result<Val> {
        if cursor.eat('-') {
            return Operation::negate(self.primary(cursor)?);
        }
        if cursor.eat('+') {
            return Ok(Val::Number(self.primary(cursor)?.number()?));
        }
        self.primary(cursor)
    }

    fn primary(&mut self, cursor: &mut Cursor) -> Result<Val> {
        cursor.skip_spaces();
        match cursor.peek() {
            Some('(') => {
                cursor.advance();
                let value = self.expression(cursor)?;
                if !cursor.eat(')') {
                    return Err(
                        error!(SyntaxError, ..&cursor.column(); "EXPECTED CLOSING PARENTHESIS"),
                    );
                }
                Ok(value)
            }
            Some('"') => Ok(Val::text(cursor.string_literal()?)),
            Some(ch) if ch.is_ascii_digit() || ch == '.' => Ok(Val::Number(cursor.number()?)),
            Some(ch) if ch.is_ascii_alphabetic() => self.name_ref(cursor),
            _ => Err(error!(SyntaxError, ..&cursor.column(); "EXPECTED EXPRESSION")),
        }
    }

    /// A name at the cursor: an intrinsic function call, an array
    /// element, or a scalar. Names of three or more characters
    /// followed by a parenthesis must be functions; variables keep
    /// only two significant characters.
    fn name_ref(&mut self, cursor: &mut Cursor) -> Result<Val> {
        let column = cursor.column();
        let raw = match cursor.name() {
            Some(raw) => raw,
            None => return Err(error!(SyntaxError, ..&column; "EXPECTED EXPRESSION")),
        };
        let upper = raw.to_ascii_uppercase();
        if Function::is_intrinsic(&upper) {
            if !cursor.eat('(') {
                return Err(
                    error!(SyntaxError, ..&cursor.column(); "EXPECTED OPENING PARENTHESIS"),
                );
            }
            let arg = self.expression(cursor)?;
            if !cursor.eat(')') {
                return Err(
                    error!(SyntaxError, ..&cursor.column(); "EXPECTED CLOSING PARENTHESIS"),
                );
            }
            return match upper.as_str() {
                "RND" => Ok(Val::Number(self.rnd(arg.number()?))),
                "TAB" => self.tab(arg.number()?),
                _ => Function::call(&upper, arg),
            };
        }
        let name = match super::VarName::new(raw) {
            Some(name) => name,
            None => return Err(error!(SyntaxError, ..&column; "EXPECTED EXPRESSION")),
        };
        if cursor.eat('(') {
            if raw.trim_end_matches('$').len() > 2 {
                return Err(error!(SyntaxError, ..&column; "UNKNOWN FUNCTION"));
            }
            let index = Var::subscript(self.expression(cursor)?)?;
            if !cursor.eat(')') {
                return Err(
                    error!(SyntaxError, ..&cursor.column(); "EXPECTED CLOSING PARENTHESIS"),
                );
            }
            self.vars.fetch_element(&name, index)
        } else {
            Ok(self.vars.fetch(&name))
        }
    }

    /// A random number in [0,1). A negative argument reseeds the
    /// generator deterministically from its magnitude.
    fn rnd(&mut self, arg: f64) -> f64 {
        if arg < 0.0 {
            self.rng = StdRng::seed_from_u64((-arg).to_bits());
        }
        self.rng.gen()
    }

    /// TAB prints its way to the requested column and yields nothing.
    fn tab(&mut self, column: f64) -> Result<Val> {
        if !column.is_finite() || column < 0.0 || column > MAX_TAB {
            return Err(error!(IllegalFunctionCall; "COLUMN OUT OF RANGE"));
        }
        self.printer.tab(column as usize);
        Ok(Val::text(""))
    }
}
