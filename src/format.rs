//! String Output
//!
//! Extracting and joining the members of a [`StringSet`].

use crate::set::StringSet;

impl StringSet {
    /// Returns all members as a vector of owned strings.
    ///
    /// The order is arbitrary and may differ between calls; sort the result
    /// when a stable order is needed.
    #[must_use]
    pub fn strings(&self) -> Vec<String> {
        self.members.iter().cloned().collect()
    }

    /// Iterates over the members as string slices, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    /// Joins all members into one string, in arbitrary order, separated by
    /// `sep`.
    #[must_use]
    pub fn join(&self, sep: &str) -> String {
        self.strings().join(sep)
    }

    /// Same as [`join`](StringSet::join), wrapped in a prefix and a suffix.
    #[must_use]
    pub fn wrapped_join(&self, prefix: &str, sep: &str, suffix: &str) -> String {
        let joined = self.join(sep);
        format!("{prefix}{joined}{suffix}")
    }
}
