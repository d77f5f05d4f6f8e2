//! Domain object registries
//!
//! A registry owns one domain object per distinct name and preserves
//! registration order, so anything derived by iterating it (for example a
//! task's per-repository dependency list) comes out in a stable order.
//! Lookups never fail: rules probe registries with `get`/`contains` and
//! silently decline when an object is missing.

use crate::error::{CoreError, Result};

/// A domain object identified by a unique name within its registry
pub trait Named {
    /// The registry key; immutable after creation
    fn name(&self) -> &str;

    /// Human-readable kind label, used in error messages ("chart", "repository")
    fn kind() -> &'static str;
}

/// Insertion-ordered collection of named domain objects
#[derive(Debug, Clone)]
pub struct Registry<T: Named> {
    items: Vec<T>,
}

impl<T: Named> Default for Registry<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Named> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object under its name
    ///
    /// Fails with `DuplicateName` if an object with the same name is
    /// already present.
    pub fn register(&mut self, item: T) -> Result<()> {
        if self.contains(item.name()) {
            return Err(CoreError::DuplicateName {
                kind: T::kind(),
                name: item.name().to_string(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Look up an object by name; pure query, never errors
    pub fn get(&self, name: &str) -> Option<&T> {
        self.items.iter().find(|i| i.name() == name)
    }

    /// Look up a mutable object by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|i| i.name() == name)
    }

    /// Check whether an object with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.name() == name)
    }

    /// Remove an object by name
    pub fn remove(&mut self, name: &str) -> Result<T> {
        let idx = self
            .items
            .iter()
            .position(|i| i.name() == name)
            .ok_or_else(|| CoreError::NotFound {
                kind: T::kind(),
                name: name.to_string(),
            })?;
        Ok(self.items.remove(idx))
    }

    /// Iterate objects in registration order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// All registered names, in registration order
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T: Named> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
