//! Puzzle frontends exercising the generic engine.
//!
//! Each module builds a [`Problem`](crate::solver::problem::Problem) from
//! puzzle-specific geometry, supplies the constraint implementations, and
//! renders a returned assignment for display. The engine itself knows
//! nothing about grids, words, chips, or digits.
pub mod circuit_board;
pub mod grid;
pub mod sudoku;
pub mod word_search;
