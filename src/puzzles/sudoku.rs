//! Sudoku: fill a 9x9 grid so every row, column, and 3x3 box holds the
//! digits 1 through 9 exactly once.
//!
//! Every cell is a variable with domain 1..=9; pre-filled cells get a
//! singleton domain. The givens also travel as an explicit field on the
//! constraint itself, so nothing about the puzzle lives in shared state.

use std::collections::HashMap;

use crate::{
    error::Result,
    puzzles::grid::GridLocation,
    solver::{
        assignment::Assignment,
        constraint::{Constraint, ConstraintDescriptor},
        problem::Problem,
    },
};

pub const SIZE: usize = 9;
const BOX: usize = 3;

/// The pre-filled cells of a puzzle instance.
pub type Givens = HashMap<GridLocation, u8>;

pub fn on_same_row(here: GridLocation, there: GridLocation) -> bool {
    here.row == there.row
}

pub fn in_same_column(here: GridLocation, there: GridLocation) -> bool {
    here.column == there.column
}

pub fn in_same_box(here: GridLocation, there: GridLocation) -> bool {
    here.row / BOX == there.row / BOX && here.column / BOX == there.column / BOX
}

/// All 81 cells in row-major order; this is the branching order.
pub fn all_cells() -> Vec<GridLocation> {
    (0..SIZE)
        .flat_map(|row| (0..SIZE).map(move |column| GridLocation::new(row, column)))
        .collect()
}

/// Parses an 81-character puzzle string in row-major order. Digits `1`-`9`
/// are givens; `.` and `0` are blanks. Any other character (including
/// whitespace) is skipped, so formatted multi-line strings work too.
pub fn parse_givens(text: &str) -> Givens {
    let mut givens = Givens::new();
    let mut index = 0usize;
    for ch in text.chars() {
        match ch {
            '1'..='9' => {
                let cell = GridLocation::new(index / SIZE, index % SIZE);
                givens.insert(cell, ch as u8 - b'0');
                index += 1;
            }
            '.' | '0' => index += 1,
            _ => {}
        }
    }
    givens
}

/// The sudoku rules: no repeated digit in any row, column, or box, and
/// givens keep their value.
#[derive(Debug, Clone)]
pub struct SudokuConstraint {
    cells: Vec<GridLocation>,
    givens: Givens,
}

impl SudokuConstraint {
    pub fn new(cells: Vec<GridLocation>, givens: Givens) -> Self {
        Self { cells, givens }
    }
}

impl Constraint<GridLocation, u8> for SudokuConstraint {
    fn variables(&self) -> &[GridLocation] {
        &self.cells
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "SudokuConstraint".to_string(),
            description: format!("SudokuRules({} givens)", self.givens.len()),
        }
    }

    fn satisfied(&self, assignment: &Assignment<GridLocation, u8>) -> bool {
        // One pass over the assignment, tallying digit occurrences per unit.
        let mut rows = [[false; 10]; SIZE];
        let mut columns = [[false; 10]; SIZE];
        let mut boxes = [[false; 10]; SIZE];

        for (cell, &digit) in assignment.iter() {
            if let Some(&given) = self.givens.get(cell) {
                if digit != given {
                    return false;
                }
            }

            let digit = digit as usize;
            let box_index = (cell.row / BOX) * BOX + cell.column / BOX;
            if rows[cell.row][digit]
                || columns[cell.column][digit]
                || boxes[box_index][digit]
            {
                return false;
            }
            rows[cell.row][digit] = true;
            columns[cell.column][digit] = true;
            boxes[box_index][digit] = true;
        }
        true
    }
}

/// Assembles the sudoku problem: full domains for open cells, singleton
/// domains for givens.
pub fn build_problem(givens: &Givens) -> Result<Problem<GridLocation, u8>> {
    let cells = all_cells();
    let mut domains = HashMap::new();
    for cell in &cells {
        let candidates = match givens.get(cell) {
            Some(&digit) => vec![digit],
            None => (1..=9).collect(),
        };
        domains.insert(*cell, candidates);
    }

    let mut problem = Problem::new(cells.clone(), domains)?;
    problem.add_constraint(SudokuConstraint::new(cells, givens.clone()))?;
    Ok(problem)
}

/// Draws the grid with the band separators of a printed puzzle.
pub fn render(solution: &Assignment<GridLocation, u8>) -> String {
    let mut lines = Vec::new();
    for row in 0..SIZE {
        if row != 0 && row % BOX == 0 {
            lines.push("------+-------+------".to_string());
        }
        let mut cells = Vec::new();
        for column in 0..SIZE {
            if column != 0 && column % BOX == 0 {
                cells.push("|".to_string());
            }
            let cell = GridLocation::new(row, column);
            cells.push(match solution.get(&cell) {
                Some(digit) => digit.to_string(),
                None => ".".to_string(),
            });
        }
        lines.push(cells.join(" "));
    }
    lines.join("\n")
}
