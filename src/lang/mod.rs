/*!
## Rust Language Module

This Rust module provides the lexical layer of the interpreter: the
text cursor threaded through every parsing function, and the error
type shared by loading and execution.

*/

#[macro_use]
mod error;
mod cursor;

pub use cursor::Cursor;
pub use error::Error;
pub use error::ErrorCode;

pub type LineNumber = Option<u16>;
pub type Column = std::ops::Range<usize>;

pub trait MaxValue<T> {
    fn max_value() -> T;
}

impl MaxValue<u16> for LineNumber {
    fn max_value() -> u16 {
        65529
    }
}
