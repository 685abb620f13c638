use crate::solver::{
    assignment::Assignment,
    value::{Value, Variable},
};

/// A human-readable identification of a constraint, used by the statistics
/// table and error messages.
#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// A rule over a subset of a problem's variables.
///
/// A constraint is *satisfied* by a partial assignment when, restricted to
/// whichever of its scoped variables are currently assigned, no violation is
/// detected. Implementations must treat unassigned scoped variables
/// permissively: the engine calls `satisfied` as soon as any scoped variable
/// is committed, with the rest possibly still open.
///
/// Evaluation must be pure. A constraint holds whatever data it needs as
/// explicit immutable fields (see
/// [`FixedValueConstraint`](crate::solver::constraints::fixed_value::FixedValueConstraint)
/// for pre-filled values); it never reaches into shared mutable state.
pub trait Constraint<V: Variable, D: Value>: std::fmt::Debug + Send + Sync {
    /// The variables this constraint is scoped to. Every one of them must be
    /// a variable of the problem the constraint is added to.
    fn variables(&self) -> &[V];

    fn descriptor(&self) -> ConstraintDescriptor;

    /// Whether the given (possibly partial) assignment violates this
    /// constraint.
    fn satisfied(&self, assignment: &Assignment<V, D>) -> bool;
}
