use crate::solver::{
    assignment::Assignment,
    constraint::{Constraint, ConstraintDescriptor},
    value::{Value, Variable},
};

/// Pins a variable to one pre-determined value.
///
/// The pinned value is an explicit immutable field on the constraint
/// instance, so the same problem can be searched concurrently from multiple
/// threads without any shared lookup table of "starting" values.
#[derive(Debug, Clone)]
pub struct FixedValueConstraint<V: Variable, D: Value> {
    scope: [V; 1],
    pub value: D,
}

impl<V: Variable, D: Value> FixedValueConstraint<V, D> {
    pub fn new(variable: V, value: D) -> Self {
        Self {
            scope: [variable],
            value,
        }
    }

    pub fn variable(&self) -> &V {
        &self.scope[0]
    }
}

impl<V: Variable, D: Value> Constraint<V, D> for FixedValueConstraint<V, D> {
    fn variables(&self) -> &[V] {
        &self.scope
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "FixedValueConstraint".to_string(),
            description: format!("{:?} == {:?}", self.scope[0], self.value),
        }
    }

    fn satisfied(&self, assignment: &Assignment<V, D>) -> bool {
        match assignment.get(&self.scope[0]) {
            Some(value) => *value == self.value,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_pinned_value_and_nothing_else() {
        let constraint = FixedValueConstraint::new("X", 5);
        assert!(constraint.satisfied(&Assignment::new()));
        assert!(constraint.satisfied(&Assignment::new().with("X", 5)));
        assert!(!constraint.satisfied(&Assignment::new().with("X", 6)));
    }
}
