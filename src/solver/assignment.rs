use im::HashMap;

use crate::solver::value::{Value, Variable};

/// A mapping from variables to their chosen values, built up during search.
///
/// Backed by a persistent (immutable) map, so extending an assignment with
/// [`Assignment::with`] produces a new assignment cheaply while leaving the
/// original untouched. The engine relies on this: each recursion level holds
/// its own candidate assignment, and backtracking is simply dropping it.
#[derive(Clone, Debug)]
pub struct Assignment<V: Variable, D: Value> {
    values: HashMap<V, D>,
}

impl<V: Variable, D: Value> Assignment<V, D> {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Returns a new assignment that additionally maps `variable` to `value`.
    pub fn with(&self, variable: V, value: D) -> Self {
        Self {
            values: self.values.update(variable, value),
        }
    }

    /// The value chosen for `variable`, if one has been committed.
    pub fn get(&self, variable: &V) -> Option<&D> {
        self.values.get(variable)
    }

    /// Whether `variable` has a committed value.
    pub fn is_assigned(&self, variable: &V) -> bool {
        self.values.contains_key(variable)
    }

    /// The number of assigned variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(variable, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &D)> {
        self.values.iter()
    }

    /// Iterates over the committed values in unspecified order.
    pub fn values(&self) -> impl Iterator<Item = &D> {
        self.values.values()
    }
}

impl<V: Variable, D: Value> Default for Assignment<V, D> {
    fn default() -> Self {
        Self::new()
    }
}
