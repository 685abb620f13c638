//! Circuit board layout: fit rectangular chips onto a board with no
//! overlap.
//!
//! Each chip is a variable; its domain is every axis-aligned footprint the
//! chip could occupy, in both orientations for non-square chips. The single
//! constraint forbids two chips from claiming the same cell.

use std::collections::{HashMap, HashSet};

use crate::{
    error::Result,
    puzzles::grid::GridLocation,
    solver::{
        assignment::Assignment,
        constraint::{Constraint, ConstraintDescriptor},
        problem::Problem,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChipColor {
    Blue,
    Green,
    Purple,
    Red,
    Yellow,
}

impl ChipColor {
    pub fn symbol(self) -> char {
        match self {
            ChipColor::Blue => 'B',
            ChipColor::Green => 'G',
            ChipColor::Purple => 'P',
            ChipColor::Red => 'R',
            ChipColor::Yellow => 'Y',
        }
    }
}

/// A rectangular chip. The colour doubles as its mark in the rendered
/// board, so chips of one size must differ in colour to stay distinct
/// variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chip {
    pub width: usize,
    pub height: usize,
    pub color: ChipColor,
}

impl Chip {
    pub fn new(width: usize, height: usize, color: ChipColor) -> Self {
        Self {
            width,
            height,
            color,
        }
    }
}

/// The set of cells one placement of a chip occupies.
pub type Footprint = Vec<GridLocation>;

fn footprint(row: usize, col: usize, width: usize, height: usize) -> Footprint {
    let mut cells = Vec::with_capacity(width * height);
    for r in row..row + height {
        for c in col..col + width {
            cells.push(GridLocation::new(r, c));
        }
    }
    cells
}

/// Every placement of `chip` on a `rows` x `columns` board, both
/// orientations, in row-major scan order.
pub fn generate_domain(chip: &Chip, rows: usize, columns: usize) -> Vec<Footprint> {
    let mut domain = Vec::new();
    for row in 0..rows {
        for col in 0..columns {
            if col + chip.width <= columns && row + chip.height <= rows {
                domain.push(footprint(row, col, chip.width, chip.height));
            }
            // Rotated by 90 degrees; squares would only repeat themselves.
            if chip.width != chip.height
                && col + chip.height <= columns
                && row + chip.width <= rows
            {
                domain.push(footprint(row, col, chip.height, chip.width));
            }
        }
    }
    domain
}

/// No two chips may occupy the same cell.
#[derive(Debug, Clone)]
pub struct CircuitBoardConstraint {
    pub chips: Vec<Chip>,
}

impl CircuitBoardConstraint {
    pub fn new(chips: Vec<Chip>) -> Self {
        Self { chips }
    }
}

impl Constraint<Chip, Footprint> for CircuitBoardConstraint {
    fn variables(&self) -> &[Chip] {
        &self.chips
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "CircuitBoardConstraint".to_string(),
            description: format!("NoOverlap({} chips)", self.chips.len()),
        }
    }

    fn satisfied(&self, assignment: &Assignment<Chip, Footprint>) -> bool {
        let mut occupied: HashSet<GridLocation> = HashSet::new();
        for chip in &self.chips {
            if let Some(cells) = assignment.get(chip) {
                for cell in cells {
                    if !occupied.insert(*cell) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

/// Assembles the chip-placement problem for the given board dimensions.
pub fn build_problem(
    chips: Vec<Chip>,
    rows: usize,
    columns: usize,
) -> Result<Problem<Chip, Footprint>> {
    let mut domains = HashMap::new();
    for chip in &chips {
        domains.insert(*chip, generate_domain(chip, rows, columns));
    }
    let mut problem = Problem::new(chips.clone(), domains)?;
    problem.add_constraint(CircuitBoardConstraint::new(chips))?;
    Ok(problem)
}

/// Paints each chip's colour code onto a dot grid.
pub fn render(rows: usize, columns: usize, solution: &Assignment<Chip, Footprint>) -> String {
    let mut board = vec![vec!['.'; columns]; rows];
    for (chip, cells) in solution.iter() {
        for cell in cells {
            board[cell.row][cell.column] = chip.color.symbol();
        }
    }
    board
        .iter()
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::engine::BacktrackingSolver;

    fn demo_chips() -> Vec<Chip> {
        vec![
            Chip::new(1, 6, ChipColor::Blue),
            Chip::new(3, 4, ChipColor::Green),
            Chip::new(5, 5, ChipColor::Purple),
            Chip::new(2, 8, ChipColor::Red),
            Chip::new(3, 3, ChipColor::Yellow),
        ]
    }

    #[test]
    fn rotation_is_skipped_for_square_chips() {
        let square = Chip::new(2, 2, ChipColor::Blue);
        // 3x3 board: a 2x2 chip fits at four anchors, one orientation each.
        assert_eq!(generate_domain(&square, 3, 3).len(), 4);

        let oblong = Chip::new(1, 2, ChipColor::Red);
        // Vertical at six anchors, horizontal at six.
        assert_eq!(generate_domain(&oblong, 3, 3).len(), 12);
    }

    #[test]
    fn fits_all_five_chips_on_a_ten_by_ten_board() {
        let chips = demo_chips();
        let problem = build_problem(chips.clone(), 10, 10).unwrap();
        let solution = problem.search().expect("the demo layout is solvable");

        let mut occupied = HashSet::new();
        for chip in &chips {
            let cells = solution.get(chip).unwrap();
            assert_eq!(cells.len(), chip.width * chip.height);
            for cell in cells {
                assert!(cell.row < 10 && cell.column < 10);
                assert!(occupied.insert(*cell), "chips overlap at {cell:?}");
            }
        }
    }

    #[test]
    fn unplaceable_chip_fails_without_exploring_the_rest() {
        // A 1x6 chip cannot fit a 4x4 board in either orientation, so its
        // domain is empty and the very first frame exhausts.
        let chips = vec![
            Chip::new(1, 6, ChipColor::Blue),
            Chip::new(2, 2, ChipColor::Green),
        ];
        let problem = build_problem(chips, 4, 4).unwrap();

        let (solution, stats) = BacktrackingSolver::new().solve(&problem);
        assert!(solution.is_none());
        assert_eq!(stats.nodes_visited, 1);
    }

    #[test]
    fn overfull_board_has_no_solution() {
        // Two 3x3 chips need 18 cells; a 3x4 board has 12.
        let chips = vec![
            Chip::new(3, 3, ChipColor::Blue),
            Chip::new(3, 3, ChipColor::Red),
        ];
        let problem = build_problem(chips, 3, 4).unwrap();
        assert!(problem.search().is_none());
    }

    #[test]
    fn render_paints_each_footprint() {
        let chips = vec![Chip::new(2, 2, ChipColor::Yellow)];
        let problem = build_problem(chips, 3, 3).unwrap();
        let solution = problem.search().unwrap();

        let board = render(3, 3, &solution);
        assert_eq!(board.matches('Y').count(), 4);
        assert_eq!(board.matches('.').count(), 5);
    }
}
