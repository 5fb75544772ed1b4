//! # Unique Names
//!
//! Allocates `<prefix>-<n>` names that do not collide with existing ones,
//! taking the smallest free `n` starting from 0.

use std::collections::HashSet;

/// Anything that carries a name: plain strings, or records with a name field.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for str {
    fn name(&self) -> &str {
        self
    }
}

impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Names already in use. Only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSet {
    names: HashSet<String>,
}

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in use, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Picks a free `<prefix>-<n>` and **adds it to this set** before returning it.
    pub fn allocate(&mut self, prefix: &str) -> String {
        let name = first_free(prefix, self.len(), |candidate| self.contains(candidate));
        self.names.insert(name.clone());
        name
    }

    /// Non-mutating form of [`NameSet::allocate`]: returns the name and the grown set.
    pub fn with_allocated(mut self, prefix: &str) -> (String, Self) {
        let name = self.allocate(prefix);
        (name, self)
    }
}

impl<N: Named> FromIterator<N> for NameSet {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(|n| n.name().to_string()).collect(),
        }
    }
}

/// Returns a `<prefix>-<n>` name not used by any of `existing`. Does not modify `existing`.
pub fn new_name<N: Named>(prefix: &str, existing: &[N]) -> String {
    first_free(prefix, existing.len(), |candidate| {
        existing.iter().any(|n| n.name() == candidate)
    })
}

// With `len` names taken, one of the first `len + 1` candidates is free.
fn first_free(prefix: &str, len: usize, taken: impl Fn(&str) -> bool) -> String {
    (0..=len)
        .map(|i| format!("{prefix}-{i}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| format!("{prefix}-{len}"))
}
