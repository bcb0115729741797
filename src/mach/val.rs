use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Maximum length of any string value, in characters. Anything past
/// the limit is dropped without error.
pub const MAX_STRING: usize = 255;

/// A runtime value: double-precision number or bounded string.
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(f64),
    String(String),
}

impl Val {
    /// Construct a string value, truncating at the string limit.
    pub fn text<S: Into<String>>(s: S) -> Val {
        let s = s.into();
        match s.char_indices().nth(MAX_STRING) {
            Some((index, _)) => Val::String(s[..index].to_string()),
            None => Val::String(s),
        }
    }

    pub fn number(self) -> Result<f64> {
        match self {
            Val::Number(n) => Ok(n),
            Val::String(_) => Err(error!(TypeMismatch; "NUMERIC VALUE REQUIRED")),
        }
    }

    pub fn string(self) -> Result<String> {
        match self {
            Val::String(s) => Ok(s),
            Val::Number(_) => Err(error!(TypeMismatch; "STRING VALUE REQUIRED")),
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Val::String(_))
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Number(n) => write!(f, "{}", n),
            Val::String(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_truncates() {
        let long = "X".repeat(300);
        match Val::text(long) {
            Val::String(s) => assert_eq!(s.len(), MAX_STRING),
            _ => panic!("expected string"),
        }
    }

    #[test]
    fn test_coercion() {
        assert_eq!(Val::Number(5.0).number().unwrap(), 5.0);
        assert!(Val::text("5").number().is_err());
        assert!(Val::Number(5.0).string().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Val::Number(5.0).to_string(), "5");
        assert_eq!(Val::Number(-0.5).to_string(), "-0.5");
        assert_eq!(Val::Number(1.0 / 0.0).to_string(), "inf");
        assert_eq!(Val::text("HI").to_string(), "HI");
    }
}
