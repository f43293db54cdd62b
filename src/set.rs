//! String Set
//!
//! The [`StringSet`] type: construction, chainable mutators, and membership
//! queries. The set algebra lives in [`crate::algebra`] and the string output
//! helpers in [`crate::format`].

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A set of unique strings with an optional "negative" interpretation.
///
/// Strings are copied into the set when added. The `negative` flag marks the
/// set as meaning "every string NOT in this collection"; only
/// [`intersection`](StringSet::intersection) consults it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StringSet {
    pub(crate) members: FxHashSet<String>,
    #[serde(default)]
    pub(crate) negative: bool,
}

impl StringSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set from string slices, deduplicating as it goes.
    #[must_use]
    pub fn from_strs(items: &[&str]) -> Self {
        let mut set = Self::new();
        set.add(items.iter().copied());
        set
    }

    /// Puts one or more strings into the set.
    ///
    /// Items already present leave the set unchanged. Returns the set for
    /// chaining.
    pub fn add<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for item in items {
            self.members.insert(item.into());
        }
        self
    }

    /// Removes one or more strings from the set, if present.
    ///
    /// Removing an absent item is a no-op. Returns the set for chaining.
    pub fn remove<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for item in items {
            self.members.remove(item.as_ref());
        }
        self
    }

    /// Flips the negative flag. Returns the set for chaining.
    pub fn negate(&mut self) -> &mut Self {
        self.negative = !self.negative;
        self
    }

    /// Whether this set is currently interpreted as negative.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The number of strings in the set, regardless of the negative flag.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether the given string is literally in the set.
    ///
    /// The negative flag is never applied here; only
    /// [`intersection`](StringSet::intersection) interprets it.
    pub fn contains(&self, item: &str) -> bool {
        self.members.contains(item)
    }
}

impl<S: Into<String>> FromIterator<S> for StringSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.add(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for StringSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.add(iter);
    }
}
