//! Stringset prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::set::StringSet;
