//! Validated colour grids
//!
//! A [`Grid`] is the rectangular matrix of colour codes found in every ARC example.
//! Grids can only be built through [`Grid::from_rows`] (or deserialized, which goes
//! through the same path), so every grid in memory is non-empty, rectangular and
//! uses colours from the 10-entry palette.

use serde::Deserialize;
use thiserror::Error;

/// Number of distinct colour codes a cell may hold (`0..=9`).
pub const COLOR_COUNT: usize = 10;

/// Errors that can occur while validating a grid
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no rows")]
    NoRows,

    #[error("grid rows contain no cells")]
    NoColumns,

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("value {value} at row {row}, column {column} is outside the colour range 0-9")]
    InvalidColor { row: usize, column: usize, value: i64 },
}

type Result<T> = core::result::Result<T, GridError>;

/// Height and width of a grid, in that order.
pub type Shape = (usize, usize);

/// A rectangular matrix of colour codes, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>")]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Builds a grid from its rows, validating shape and colour range.
    ///
    /// # Arguments
    /// * `rows` - The rows of the matrix, top to bottom
    ///
    /// # Returns
    /// * `Ok(Grid)` - If every row has the same non-zero length and all values are in `0..=9`
    /// * `Err(GridError)` - Describing the first violation found
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        let first = rows.first().ok_or(GridError::NoRows)?;
        let width = first.as_ref().len();
        if width == 0 {
            return Err(GridError::NoColumns);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }

            for (column, &value) in values.iter().enumerate() {
                let color = u8::try_from(value)
                    .ok()
                    .filter(|&color| usize::from(color) < COLOR_COUNT)
                    .ok_or(GridError::InvalidColor { row, column, value })?;
                cells.push(color);
            }
        }

        Ok(Self {
            height: rows.len(),
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn shape(&self) -> Shape {
        (self.height, self.width)
    }

    /// Number of cells in the grid.
    pub fn area(&self) -> usize {
        self.height * self.width
    }

    /// Returns the colour at the given position, if it is inside the grid.
    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        if row >= self.height || column >= self.width {
            return None;
        }

        self.cells.get(row * self.width + column).copied()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks_exact(self.width)
    }

    /// Bit `n` is set when colour `n` appears somewhere in the grid.
    pub fn color_mask(&self) -> u16 {
        self.cells
            .iter()
            .fold(0u16, |mask, &color| mask | (1 << color))
    }

    /// Number of distinct colours used by the grid.
    pub fn distinct_color_count(&self) -> usize {
        self.color_mask().count_ones() as usize
    }
}

impl TryFrom<Vec<Vec<i64>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}
