//! Shorthand constructors for building datasets in tests.

use crate::data::challenge::{Challenge, Dataset, TestExample, TrainingExample};
use crate::data::grid::Grid;

/// Builds a grid, panicking on invalid rows.
pub fn grid<R: AsRef<[i64]>>(rows: &[R]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

/// A `size` x `size` grid filled with one colour.
pub fn filled(size: usize, color: i64) -> Grid {
    grid(&vec![vec![color; size]; size])
}

pub fn challenge(train: Vec<(Grid, Grid)>, test: Vec<Grid>) -> Challenge {
    Challenge {
        train: train
            .into_iter()
            .map(|(input, output)| TrainingExample { input, output })
            .collect(),
        test: test.into_iter().map(|input| TestExample { input }).collect(),
    }
}

/// Builds a dataset from `(id, challenge, solutions)` entries.
pub fn dataset(entries: Vec<(&str, Challenge, Option<Vec<Grid>>)>) -> Dataset {
    let mut result = Dataset::default();
    let mut solutions = Vec::new();
    for (id, challenge, solution) in entries {
        result.challenges.insert(id.to_string(), challenge);
        if let Some(solution) = solution {
            solutions.push((id.to_string(), solution));
        }
    }

    result.solutions = solutions.into_iter().collect();
    result
}
