use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::{
    error::{ConfigurationError, Result},
    solver::{
        assignment::Assignment,
        constraint::Constraint,
        engine::BacktrackingSolver,
        value::{Value, Variable},
    },
};

/// Index of a constraint in a problem's flat constraint list.
pub type ConstraintId = usize;

/// A complete constraint satisfaction problem: the ordered variable list, a
/// domain registry, and a constraint registry.
///
/// The variable order and each domain's value order are significant: the
/// engine branches on the first unassigned variable in problem order and
/// tries candidates in domain order, which makes search results
/// deterministic.
///
/// A problem is assembled once ([`Problem::new`] plus any number of
/// [`Problem::add_constraint`] calls) and is read-only during search.
#[derive(Debug)]
pub struct Problem<V: Variable, D: Value> {
    variables: Vec<V>,
    domains: HashMap<V, Vec<D>>,
    constraints: Vec<Arc<dyn Constraint<V, D>>>,
    by_variable: HashMap<V, Vec<ConstraintId>>,
}

impl<V: Variable, D: Value> Problem<V, D> {
    /// Builds a problem from its variables and their domains.
    ///
    /// Fails with [`ConfigurationError::MissingDomain`] if any listed
    /// variable has no domain, and with
    /// [`ConfigurationError::UnknownDomainVariable`] if `domains` contains a
    /// key that is not a listed variable. An *empty* domain is accepted: the
    /// instance is then trivially unsatisfiable and `search` returns `None`.
    pub fn new(variables: Vec<V>, domains: HashMap<V, Vec<D>>) -> Result<Self> {
        for variable in &variables {
            if !domains.contains_key(variable) {
                return Err(ConfigurationError::MissingDomain {
                    variable: format!("{variable:?}"),
                }
                .into());
            }
        }

        let listed: HashSet<&V> = variables.iter().collect();
        for variable in domains.keys() {
            if !listed.contains(variable) {
                return Err(ConfigurationError::UnknownDomainVariable {
                    variable: format!("{variable:?}"),
                }
                .into());
            }
        }

        let by_variable = variables
            .iter()
            .map(|variable| (variable.clone(), Vec::new()))
            .collect();

        Ok(Self {
            variables,
            domains,
            constraints: Vec::new(),
            by_variable,
        })
    }

    /// Registers a constraint under every variable in its scope.
    ///
    /// Fails with [`ConfigurationError::UnknownScopeVariable`] if the scope
    /// mentions a variable that is not part of this problem.
    pub fn add_constraint<C>(&mut self, constraint: C) -> Result<()>
    where
        C: Constraint<V, D> + 'static,
    {
        for variable in constraint.variables() {
            if !self.by_variable.contains_key(variable) {
                return Err(ConfigurationError::UnknownScopeVariable {
                    constraint: constraint.descriptor().name,
                    variable: format!("{variable:?}"),
                }
                .into());
            }
        }

        let id = self.constraints.len();
        let constraint: Arc<dyn Constraint<V, D>> = Arc::new(constraint);
        for variable in constraint.variables() {
            let ids = self
                .by_variable
                .get_mut(variable)
                .expect("scope validated above");
            // A scope may mention the same variable twice; register once.
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        self.constraints.push(constraint);
        Ok(())
    }

    /// The problem's variables, in branching order.
    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    /// The ordered candidate values for `variable`.
    ///
    /// Construction guarantees a domain exists for every problem variable.
    pub fn domain(&self, variable: &V) -> &[D] {
        self.domains
            .get(variable)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All registered constraints, indexable by [`ConstraintId`].
    pub fn constraints(&self) -> &[Arc<dyn Constraint<V, D>>] {
        &self.constraints
    }

    /// Ids of the constraints whose scope includes `variable`.
    pub fn constraints_for(&self, variable: &V) -> &[ConstraintId] {
        self.by_variable
            .get(variable)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Runs a backtracking search over this problem.
    ///
    /// Returns a complete satisfying assignment, or `None` if the search
    /// space is exhausted. Exhaustion is an expected outcome, not an error.
    /// Use [`BacktrackingSolver::solve`] directly to also collect search
    /// statistics.
    pub fn search(&self) -> Option<Assignment<V, D>> {
        BacktrackingSolver::new().solve(self).0
    }
}
