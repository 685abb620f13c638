use std::marker::PhantomData;

use crate::solver::{
    assignment::Assignment,
    constraint::{Constraint, ConstraintDescriptor},
    value::{Value, Variable},
};

/// Requires two variables to hold distinct values.
///
/// While either variable is unassigned the constraint is trivially
/// satisfied.
#[derive(Debug, Clone)]
pub struct NotEqualConstraint<V: Variable, D: Value> {
    pub vars: [V; 2],
    _phantom: PhantomData<D>,
}

impl<V: Variable, D: Value> NotEqualConstraint<V, D> {
    pub fn new(a: V, b: V) -> Self {
        Self {
            vars: [a, b],
            _phantom: PhantomData,
        }
    }
}

impl<V: Variable, D: Value> Constraint<V, D> for NotEqualConstraint<V, D> {
    fn variables(&self) -> &[V] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "NotEqualConstraint".to_string(),
            description: format!("{:?} != {:?}", self.vars[0], self.vars[1]),
        }
    }

    fn satisfied(&self, assignment: &Assignment<V, D>) -> bool {
        match (assignment.get(&self.vars[0]), assignment.get(&self.vars[1])) {
            (Some(a), Some(b)) => a != b,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_partial_assignments() {
        let constraint = NotEqualConstraint::new("X", "Y");
        let assignment = Assignment::new().with("X", 1);
        assert!(constraint.satisfied(&assignment));
        assert!(constraint.satisfied(&Assignment::new()));
    }

    #[test]
    fn rejects_equal_values() {
        let constraint = NotEqualConstraint::new("X", "Y");
        let assignment = Assignment::new().with("X", 1).with("Y", 1);
        assert!(!constraint.satisfied(&assignment));
    }

    #[test]
    fn accepts_distinct_values() {
        let constraint = NotEqualConstraint::new("X", "Y");
        let assignment = Assignment::new().with("X", 1).with("Y", 2);
        assert!(constraint.satisfied(&assignment));
    }
}
