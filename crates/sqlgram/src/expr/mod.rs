//! Expression constructors.
//!
//! Each constructor accepts loosely typed operands, promotes them through the
//! coercion engine and returns the grammar node it builds. An operand that
//! cannot be promoted aborts with a message naming the constructor and
//! argument.

mod aggregate;
mod numeric;
mod predicate;
mod string;

pub use aggregate::*;
pub use numeric::*;
pub use predicate::*;
pub use string::*;

#[cfg(test)]
mod tests;
