use std::collections::HashSet;
use std::marker::PhantomData;

use crate::solver::{
    assignment::Assignment,
    constraint::{Constraint, ConstraintDescriptor},
    value::{Value, Variable},
};

/// Requires every variable in a set to hold a unique value.
///
/// Only scoped variables that are already assigned participate in the
/// uniqueness check, so the constraint is safe to evaluate against any
/// partial assignment.
#[derive(Debug, Clone)]
pub struct AllDifferentConstraint<V: Variable, D: Value> {
    pub vars: Vec<V>,
    _phantom: PhantomData<D>,
}

impl<V: Variable, D: Value> AllDifferentConstraint<V, D> {
    pub fn new(vars: Vec<V>) -> Self {
        Self {
            vars,
            _phantom: PhantomData,
        }
    }
}

impl<V: Variable, D: Value> Constraint<V, D> for AllDifferentConstraint<V, D> {
    fn variables(&self) -> &[V] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        let vars_str = self
            .vars
            .iter()
            .map(|v| format!("{v:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        ConstraintDescriptor {
            name: "AllDifferentConstraint".to_string(),
            description: format!("AllDifferent({vars_str})"),
        }
    }

    fn satisfied(&self, assignment: &Assignment<V, D>) -> bool {
        let mut seen: HashSet<&D> = HashSet::new();
        for var in &self.vars {
            if let Some(value) = assignment.get(var) {
                if !seen.insert(value) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_a_duplicate_among_assigned_variables() {
        let constraint = AllDifferentConstraint::new(vec!["A", "B", "C"]);
        let assignment = Assignment::new().with("A", 1).with("C", 1);
        assert!(!constraint.satisfied(&assignment));
    }

    #[test]
    fn ignores_unassigned_variables() {
        let constraint = AllDifferentConstraint::new(vec!["A", "B", "C"]);
        let assignment = Assignment::new().with("A", 1).with("B", 2);
        assert!(constraint.satisfied(&assignment));
    }

    #[test]
    fn ignores_values_outside_its_scope() {
        let constraint = AllDifferentConstraint::new(vec!["A", "B"]);
        let assignment = Assignment::new().with("A", 1).with("Z", 1);
        assert!(constraint.satisfied(&assignment));
    }
}
