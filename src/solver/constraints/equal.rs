use std::marker::PhantomData;

use crate::solver::{
    assignment::Assignment,
    constraint::{Constraint, ConstraintDescriptor},
    value::{Value, Variable},
};

/// Requires two variables to hold equal values.
#[derive(Debug, Clone)]
pub struct EqualConstraint<V: Variable, D: Value> {
    pub vars: [V; 2],
    _phantom: PhantomData<D>,
}

impl<V: Variable, D: Value> EqualConstraint<V, D> {
    pub fn new(a: V, b: V) -> Self {
        Self {
            vars: [a, b],
            _phantom: PhantomData,
        }
    }
}

impl<V: Variable, D: Value> Constraint<V, D> for EqualConstraint<V, D> {
    fn variables(&self) -> &[V] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "EqualConstraint".to_string(),
            description: format!("{:?} == {:?}", self.vars[0], self.vars[1]),
        }
    }

    fn satisfied(&self, assignment: &Assignment<V, D>) -> bool {
        match (assignment.get(&self.vars[0]), assignment.get(&self.vars[1])) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        }
    }
}
