//! Nexo is a generic, reusable backtracking solver for constraint
//! satisfaction problems (CSPs).
//!
//! A problem is modelled as a set of typed variables, an ordered domain of
//! candidate values per variable, and a collection of pluggable constraints.
//! The engine performs a deterministic depth-first backtracking search:
//! variables are branched on in problem order, values are tried in domain
//! order, and a candidate is pruned as soon as any constraint touching the
//! branched variable reports a violation.
//!
//! # Core Concepts
//!
//! - **[`Problem`](solver::problem::Problem)**: the variables, their domains, and the
//!   constraint registry. Immutable once search begins.
//! - **[`Constraint`](solver::constraint::Constraint)**: a trait representing a rule over a
//!   subset of variables. The crate provides a standard library of common
//!   constraints like [`NotEqualConstraint`](solver::constraints::not_equal::NotEqualConstraint)
//!   and [`AllDifferentConstraint`](solver::constraints::all_different::AllDifferentConstraint).
//! - **[`BacktrackingSolver`](solver::engine::BacktrackingSolver)**: the engine that takes a
//!   problem and finds a satisfying [`Assignment`](solver::assignment::Assignment), or reports
//!   that none exists.
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Here is a simple example of solving for `X != Y` where both `X` and `Y`
//! range over `{1, 2}`. Values are tried in domain order, so the first
//! solution found is `{X: 1, Y: 2}`.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use nexo::solver::constraints::not_equal::NotEqualConstraint;
//! use nexo::solver::problem::Problem;
//!
//! let mut domains = HashMap::new();
//! domains.insert("X", vec![1, 2]);
//! domains.insert("Y", vec![1, 2]);
//!
//! let mut problem = Problem::new(vec!["X", "Y"], domains).unwrap();
//! problem
//!     .add_constraint(NotEqualConstraint::new("X", "Y"))
//!     .unwrap();
//!
//! let solution = problem.search().expect("a solution exists");
//! assert_eq!(solution.get(&"X"), Some(&1));
//! assert_eq!(solution.get(&"Y"), Some(&2));
//! ```
//!
//! Absence of a solution is a normal outcome, not an error: `search` returns
//! `None` when the space is exhausted. Malformed problem setup (a variable
//! without a domain, a constraint scoped to an unknown variable) is reported
//! up front as a [`ConfigurationError`](error::ConfigurationError).
pub mod error;
pub mod puzzles;
pub mod solver;
