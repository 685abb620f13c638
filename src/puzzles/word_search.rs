//! Word search: hide a list of words in a grid of letters.
//!
//! Each word is a variable; its domain is every straight-line path through
//! the grid that could spell it, forwards or reversed, along a row, a
//! column, or either diagonal. Two words may cross only where they agree on
//! the letter.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    error::Result,
    puzzles::grid::GridLocation,
    solver::{
        assignment::Assignment,
        constraint::{Constraint, ConstraintDescriptor},
        problem::Problem,
    },
};

/// One candidate placement: the word's letters with the cell each lands on.
pub type WordPath = Vec<(char, GridLocation)>;

pub type LetterGrid = Vec<Vec<char>>;

/// Fills a grid with uniformly random uppercase letters. Seeded, so demo
/// output is reproducible.
pub fn generate_grid(rows: usize, columns: usize, seed: u64) -> LetterGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..rows)
        .map(|_| {
            (0..columns)
                .map(|_| (b'A' + rng.gen_range(0..26)) as char)
                .collect()
        })
        .collect()
}

fn path_along(letters: &[char], cell_at: impl Fn(usize) -> GridLocation) -> WordPath {
    letters
        .iter()
        .enumerate()
        .map(|(offset, &letter)| (letter, cell_at(offset)))
        .collect()
}

/// Every placement of `word` that fits the grid: left-to-right, top-to-
/// bottom, both diagonals, each also reversed. Placements are emitted in
/// row-major scan order, which fixes the order solutions are discovered in.
pub fn generate_domain(word: &str, rows: usize, columns: usize) -> Vec<WordPath> {
    let letters: Vec<char> = word.chars().collect();
    let reversed: Vec<char> = letters.iter().rev().copied().collect();
    let length = letters.len();
    let mut domain = Vec::new();

    for row in 0..rows {
        for col in 0..columns {
            if col + length <= columns {
                // left to right
                domain.push(path_along(&letters, |i| GridLocation::new(row, col + i)));
                domain.push(path_along(&reversed, |i| GridLocation::new(row, col + i)));
                if row + length <= rows {
                    // diagonal towards bottom right
                    domain.push(path_along(&letters, |i| {
                        GridLocation::new(row + i, col + i)
                    }));
                    domain.push(path_along(&reversed, |i| {
                        GridLocation::new(row + i, col + i)
                    }));
                }
            }
            if row + length <= rows {
                // top to bottom
                domain.push(path_along(&letters, |i| GridLocation::new(row + i, col)));
                domain.push(path_along(&reversed, |i| GridLocation::new(row + i, col)));
                if col + 1 >= length {
                    // diagonal towards bottom left
                    domain.push(path_along(&letters, |i| {
                        GridLocation::new(row + i, col - i)
                    }));
                    domain.push(path_along(&reversed, |i| {
                        GridLocation::new(row + i, col - i)
                    }));
                }
            }
        }
    }

    domain
}

/// Words may overlap only on cells where they place the same letter.
#[derive(Debug, Clone)]
pub struct WordSearchConstraint {
    pub words: Vec<String>,
}

impl WordSearchConstraint {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }
}

impl Constraint<String, WordPath> for WordSearchConstraint {
    fn variables(&self) -> &[String] {
        &self.words
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "WordSearchConstraint".to_string(),
            description: format!("NoConflictingOverlap({})", self.words.join(", ")),
        }
    }

    fn satisfied(&self, assignment: &Assignment<String, WordPath>) -> bool {
        let mut letter_at: HashMap<GridLocation, char> = HashMap::new();
        for word in &self.words {
            if let Some(path) = assignment.get(word) {
                for &(letter, cell) in path {
                    match letter_at.entry(cell) {
                        Entry::Occupied(occupied) => {
                            if *occupied.get() != letter {
                                return false;
                            }
                        }
                        Entry::Vacant(vacant) => {
                            vacant.insert(letter);
                        }
                    }
                }
            }
        }
        true
    }
}

/// Assembles the full word search problem for the given board dimensions.
pub fn build_problem(
    words: Vec<String>,
    rows: usize,
    columns: usize,
) -> Result<Problem<String, WordPath>> {
    let mut domains = HashMap::new();
    for word in &words {
        domains.insert(word.clone(), generate_domain(word, rows, columns));
    }
    let mut problem = Problem::new(words.clone(), domains)?;
    problem.add_constraint(WordSearchConstraint::new(words))?;
    Ok(problem)
}

/// Overlays the placed words onto a copy of the letter grid and renders it
/// row by row.
pub fn render(grid: &LetterGrid, solution: &Assignment<String, WordPath>) -> String {
    let mut grid = grid.clone();
    for (_, path) in solution.iter() {
        for &(letter, cell) in path {
            grid[cell.row][cell.column] = letter;
        }
    }
    grid.iter()
        .map(|row| {
            row.iter()
                .map(|letter| letter.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
