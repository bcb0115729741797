use super::Val;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// Arrays created by a plain indexed reference get this many slots.
const DEFAULT_DIM: usize = 11;

/// Caps for the table and for any one array. Running into either is
/// an OUT OF MEMORY error, not a crash.
const MAX_ENTRIES: usize = u16::max_value() as usize;

/// Identity of a variable: the first two significant characters of
/// its name, uppercased, plus whether it names a string. `A` and `A$`
/// are distinct variables; `COUNT` and `COULD` are both `CO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarName {
    first: u8,
    second: u8,
    string: bool,
}

impl VarName {
    pub fn new(name: &str) -> Option<VarName> {
        let string = name.ends_with('$');
        let name = name.trim_end_matches('$');
        let mut chars = name.bytes().filter(|b| b.is_ascii_alphanumeric());
        let first = chars.next()?;
        if !first.is_ascii_alphabetic() {
            return None;
        }
        let second = chars.next().unwrap_or(0);
        Some(VarName {
            first: first.to_ascii_uppercase(),
            second: second.to_ascii_uppercase(),
            string,
        })
    }

    pub fn is_string(&self) -> bool {
        self.string
    }

    fn default_val(&self) -> Val {
        if self.string {
            Val::text("")
        } else {
            Val::Number(0.0)
        }
    }
}

impl std::fmt::Display for VarName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.first as char)?;
        if self.second != 0 {
            write!(f, "{}", self.second as char)?;
        }
        if self.string {
            write!(f, "$")?;
        }
        Ok(())
    }
}

/// ## Variable memory
///
/// Owns every scalar and array. Scalars and arrays of the same name
/// are distinct entries. Everything is created on first reference and
/// arrays only ever grow.

#[derive(Debug, Default)]
pub struct Var {
    scalars: HashMap<VarName, Val>,
    arrays: HashMap<VarName, Vec<Val>>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.scalars.clear();
        self.arrays.clear();
    }

    pub fn fetch(&self, name: &VarName) -> Val {
        match self.scalars.get(name) {
            Some(val) => val.clone(),
            None => name.default_val(),
        }
    }

    pub fn store(&mut self, name: &VarName, value: Val) -> Result<()> {
        let value = Self::check(name, value)?;
        if !self.scalars.contains_key(name) && self.scalars.len() >= MAX_ENTRIES {
            return Err(error!(OutOfMemory));
        }
        self.scalars.insert(*name, value);
        Ok(())
    }

    pub fn fetch_element(&mut self, name: &VarName, index: usize) -> Result<Val> {
        let arr = self.array_mut(name, index)?;
        Ok(arr[index].clone())
    }

    pub fn store_element(&mut self, name: &VarName, index: usize, value: Val) -> Result<()> {
        let value = Self::check(name, value)?;
        let arr = self.array_mut(name, index)?;
        arr[index] = value;
        Ok(())
    }

    /// DIM: ensure capacity for indices `0..=size`. An existing array
    /// grows if needed; it is never shrunk.
    pub fn dimension(&mut self, name: &VarName, size: usize) -> Result<()> {
        self.array_mut(name, size)?;
        Ok(())
    }

    /// Convert an index expression result to a subscript.
    pub fn subscript(value: Val) -> Result<usize> {
        let n = value.number()?;
        if !(n >= 0.0) {
            return Err(error!(SubscriptOutOfRange));
        }
        if n >= MAX_ENTRIES as f64 {
            return Err(error!(OutOfMemory));
        }
        Ok(n as usize)
    }

    fn check(name: &VarName, value: Val) -> Result<Val> {
        if value.is_string() != name.is_string() {
            return Err(error!(TypeMismatch));
        }
        Ok(value)
    }

    /// Backing storage for an array, created or grown to hold `index`.
    /// Existing elements are preserved; new ones take the default.
    fn array_mut(&mut self, name: &VarName, index: usize) -> Result<&mut Vec<Val>> {
        if index >= MAX_ENTRIES {
            return Err(error!(OutOfMemory));
        }
        if !self.arrays.contains_key(name) && self.arrays.len() >= MAX_ENTRIES {
            return Err(error!(OutOfMemory));
        }
        let arr = self.arrays.entry(*name).or_insert_with(Vec::new);
        let want = (index + 1).max(DEFAULT_DIM);
        if arr.len() < want {
            arr.resize(want, name.default_val());
        }
        Ok(arr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> VarName {
        VarName::new(s).unwrap()
    }

    #[test]
    fn test_identity() {
        assert_eq!(name("count"), name("COULD"));
        assert_ne!(name("A"), name("A$"));
        assert_ne!(name("A"), name("AB"));
        assert_eq!(name("B2"), name("b2x"));
        assert_eq!(name("A$").to_string(), "A$");
        assert_eq!(name("count").to_string(), "CO");
    }

    #[test]
    fn test_defaults() {
        let vars = Var::new();
        assert_eq!(vars.fetch(&name("A")), Val::Number(0.0));
        assert_eq!(vars.fetch(&name("A$")), Val::text(""));
    }

    #[test]
    fn test_type_check_leaves_target_unchanged() {
        let mut vars = Var::new();
        vars.store(&name("A$"), Val::text("KEEP")).unwrap();
        assert!(vars.store(&name("A$"), Val::Number(5.0)).is_err());
        assert_eq!(vars.fetch(&name("A$")), Val::text("KEEP"));
        assert!(vars.store(&name("A"), Val::text("NO")).is_err());
    }

    #[test]
    fn test_array_growth_preserves_elements() {
        let mut vars = Var::new();
        vars.dimension(&name("A"), 5).unwrap();
        vars.store_element(&name("A"), 3, Val::Number(7.0)).unwrap();
        vars.store_element(&name("A"), 10, Val::Number(1.0)).unwrap();
        assert_eq!(vars.fetch_element(&name("A"), 3).unwrap(), Val::Number(7.0));
        assert_eq!(vars.fetch_element(&name("A"), 6).unwrap(), Val::Number(0.0));
        assert_eq!(vars.fetch_element(&name("A"), 10).unwrap(), Val::Number(1.0));
    }

    #[test]
    fn test_dimension_never_shrinks() {
        let mut vars = Var::new();
        vars.dimension(&name("A"), 20).unwrap();
        vars.store_element(&name("A"), 15, Val::Number(9.0)).unwrap();
        vars.dimension(&name("A"), 5).unwrap();
        assert_eq!(vars.fetch_element(&name("A"), 15).unwrap(), Val::Number(9.0));
    }

    #[test]
    fn test_scalar_and_array_coexist() {
        let mut vars = Var::new();
        vars.store(&name("A"), Val::Number(1.0)).unwrap();
        vars.store_element(&name("A"), 0, Val::Number(2.0)).unwrap();
        assert_eq!(vars.fetch(&name("A")), Val::Number(1.0));
        assert_eq!(vars.fetch_element(&name("A"), 0).unwrap(), Val::Number(2.0));
    }

    #[test]
    fn test_subscript() {
        assert_eq!(Var::subscript(Val::Number(3.7)).unwrap(), 3);
        assert!(Var::subscript(Val::Number(-1.0)).is_err());
        assert!(Var::subscript(Val::text("3")).is_err());
    }
}
