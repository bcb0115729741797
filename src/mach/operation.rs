use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Truth values for relational results. True is all bits set in the
/// classic BASIC style.
pub const TRUE: f64 = -1.0;
pub const FALSE: f64 = 0.0;

/// ## Operators over values
///
/// Arithmetic follows IEEE 754 double semantics: division by zero and
/// domain errors yield infinity or NaN, never a runtime error.

pub struct Operation {}

impl Operation {
    pub fn negate(val: Val) -> Result<Val> {
        Ok(Val::Number(-val.number()?))
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Ok(Number(l + r)),
            (String(l), String(r)) => Ok(Val::text(l + &r)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Number(lhs.number()? - rhs.number()?))
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Number(lhs.number()? * rhs.number()?))
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Number(lhs.number()? / rhs.number()?))
    }

    pub fn power(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Number(lhs.number()?.powf(rhs.number()?)))
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Self::truth(Self::equal_bool(lhs, rhs)?))
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Self::truth(!Self::equal_bool(lhs, rhs)?))
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Self::truth(Self::less_bool(lhs, rhs)?))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Self::truth(Self::less_bool(rhs, lhs)?))
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Self::truth(Self::less_equal_bool(lhs, rhs)?))
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Self::truth(Self::less_equal_bool(rhs, lhs)?))
    }

    fn truth(b: bool) -> Val {
        Val::Number(if b { TRUE } else { FALSE })
    }

    fn equal_bool(lhs: Val, rhs: Val) -> Result<bool> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Ok(l == r),
            (String(l), String(r)) => Ok(l == r),
            _ => Err(error!(TypeMismatch)),
        }
    }

    fn less_bool(lhs: Val, rhs: Val) -> Result<bool> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Ok(l < r),
            (String(l), String(r)) => Ok(l < r),
            _ => Err(error!(TypeMismatch)),
        }
    }

    fn less_equal_bool(lhs: Val, rhs: Val) -> Result<bool> {
        use Val::*;
        match (lhs, rhs) {
            (Number(l), Number(r)) => Ok(l <= r),
            (String(l), String(r)) => Ok(l <= r),
            _ => Err(error!(TypeMismatch)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_concatenates_strings() {
        let val = Operation::sum(Val::text("FOO"), Val::text("BAR")).unwrap();
        assert_eq!(val, Val::text("FOOBAR"));
        assert!(Operation::sum(Val::text("FOO"), Val::Number(1.0)).is_err());
    }

    #[test]
    fn test_concatenation_is_bounded() {
        let l = "A".repeat(200);
        let r = "B".repeat(200);
        match Operation::sum(Val::text(l), Val::text(r)).unwrap() {
            Val::String(s) => assert_eq!(s.len(), super::super::val::MAX_STRING),
            _ => panic!("expected string"),
        }
    }

    #[test]
    fn test_divide_by_zero_is_not_an_error() {
        let val = Operation::divide(Val::Number(1.0), Val::Number(0.0)).unwrap();
        assert_eq!(val, Val::Number(f64::INFINITY));
    }

    #[test]
    fn test_relational_truth_convention() {
        let val = Operation::less(Val::Number(1.0), Val::Number(2.0)).unwrap();
        assert_eq!(val, Val::Number(TRUE));
        let val = Operation::less(Val::Number(2.0), Val::Number(1.0)).unwrap();
        assert_eq!(val, Val::Number(FALSE));
    }

    #[test]
    fn test_string_comparison_is_lexicographic() {
        let val = Operation::less(Val::text("APPLE"), Val::text("BANANA")).unwrap();
        assert_eq!(val, Val::Number(TRUE));
        assert!(Operation::less(Val::text("A"), Val::Number(1.0)).is_err());
    }
}
