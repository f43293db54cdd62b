//! Stringset
//!
//! A set of unique strings with the standard set operations, chainable
//! mutators, and a specialised "negative" mode for intersections.
//!
//! Negative sets invert the sense of a set when combining with
//! [`StringSet::intersection`]. They were created for managing tags, where it
//! is useful to match items that carry some tags but not others. Negation has
//! no effect on any other operation, including union and difference.
//!
//! This crate does not return errors. Set operations should be fast and
//! chainable; adding an item twice, or removing one that does not exist, are
//! normal outcomes rather than failures.

pub mod algebra;
pub mod format;
pub mod prelude;
pub mod set;

pub use set::StringSet;
