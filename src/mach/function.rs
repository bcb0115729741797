use super::Val;
use crate::error;
use crate::lang::{Cursor, Error};

type Result<T> = std::result::Result<T, Error>;

/// ## Intrinsic functions
///
/// Every intrinsic takes a single parenthesized argument. The pure
/// ones live here; RND and TAB touch interpreter state and are
/// handled by the evaluator.

pub struct Function {}

impl Function {
    pub fn is_intrinsic(name: &str) -> bool {
        match name {
            "SIN" | "COS" | "TAN" | "ABS" | "INT" | "SQR" | "SGN" | "EXP" | "LOG" | "RND"
            | "LEN" | "VAL" | "STR$" | "CHR$" | "ASC" | "TAB" => true,
            _ => false,
        }
    }

    pub fn call(name: &str, arg: Val) -> Result<Val> {
        match name {
            "SIN" => Ok(Val::Number(arg.number()?.sin())),
            "COS" => Ok(Val::Number(arg.number()?.cos())),
            "TAN" => Ok(Val::Number(arg.number()?.tan())),
            "ABS" => Ok(Val::Number(arg.number()?.abs())),
            "INT" => Ok(Val::Number(arg.number()?.floor())),
            "SQR" => Ok(Val::Number(arg.number()?.sqrt())),
            "SGN" => Ok(Val::Number(Self::sgn(arg.number()?))),
            "EXP" => Ok(Val::Number(arg.number()?.exp())),
            "LOG" => Ok(Val::Number(arg.number()?.ln())),
            "LEN" => Ok(Val::Number(arg.string()?.chars().count() as f64)),
            "VAL" => Ok(Val::Number(Self::val(&arg.string()?))),
            "STR$" => Ok(Val::text(Val::Number(arg.number()?).to_string())),
            "CHR$" => Self::chr(arg.number()?),
            "ASC" => Self::asc(&arg.string()?),
            _ => Err(error!(InternalError; "NOT A PURE FUNCTION")),
        }
    }

    fn sgn(n: f64) -> f64 {
        if n > 0.0 {
            1.0
        } else if n < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    /// The leading number of a string, or 0 when there is none.
    pub fn val(s: &str) -> f64 {
        let mut cursor = Cursor::new(s);
        let negative = if cursor.eat('-') {
            true
        } else {
            cursor.eat('+');
            false
        };
        match cursor.number() {
            Ok(number) if negative => -number,
            Ok(number) => number,
            Err(_) => 0.0,
        }
    }

    fn chr(code: f64) -> Result<Val> {
        if code >= 0.0 && code <= 255.0 {
            Ok(Val::text((code as u8 as char).to_string()))
        } else {
            Err(error!(IllegalFunctionCall; "CODE OUT OF RANGE"))
        }
    }

    fn asc(s: &str) -> Result<Val> {
        match s.chars().next() {
            Some(ch) => Ok(Val::Number(u32::from(ch) as f64)),
            None => Err(error!(IllegalFunctionCall; "EMPTY STRING")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_is_floor() {
        assert_eq!(Function::call("INT", Val::Number(9.9)).unwrap(), Val::Number(9.0));
        assert_eq!(Function::call("INT", Val::Number(-9.9)).unwrap(), Val::Number(-10.0));
    }

    #[test]
    fn test_sgn() {
        assert_eq!(Function::call("SGN", Val::Number(-0.5)).unwrap(), Val::Number(-1.0));
        assert_eq!(Function::call("SGN", Val::Number(0.0)).unwrap(), Val::Number(0.0));
        assert_eq!(Function::call("SGN", Val::Number(42.0)).unwrap(), Val::Number(1.0));
    }

    #[test]
    fn test_val() {
        assert_eq!(Function::val("123"), 123.0);
        assert_eq!(Function::val("  -1.5E2  "), -150.0);
        assert_eq!(Function::val("one"), 0.0);
        assert_eq!(Function::val("  42 APPLES"), 42.0);
        assert_eq!(Function::val(""), 0.0);
    }

    #[test]
    fn test_chr_asc() {
        assert_eq!(Function::call("CHR$", Val::Number(65.0)).unwrap(), Val::text("A"));
        assert_eq!(Function::call("ASC", Val::text("A")).unwrap(), Val::Number(65.0));
        assert!(Function::call("CHR$", Val::Number(300.0)).is_err());
        assert!(Function::call("ASC", Val::text("")).is_err());
    }

    #[test]
    fn test_type_checks() {
        assert!(Function::call("SIN", Val::text("X")).is_err());
        assert!(Function::call("LEN", Val::Number(1.0)).is_err());
    }
}
