//! Fixed-size display canvases for grids
//!
//! Grids come in many sizes. To make them comparable side by side, every grid smaller
//! than the display size is centred on a square canvas of padding cells. Grids that
//! already fill the display size in both directions keep their native size.

use crate::data::grid::Grid;

/// Side length of the square canvas grids are padded to.
pub const DEFAULT_DISPLAY_SIZE: usize = 30;

/// One cell of a display canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A real grid cell holding a palette value.
    Color(u8),
    /// Layout filler that is not part of the grid.
    Padding,
}

/// A grid laid out for display, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Lay out a grid for display
    ///
    /// # Arguments
    /// * `grid` - The grid to lay out
    /// * `display_size` - Side length of the padded canvas
    ///
    /// # Returns
    /// A `display_size` x `display_size` canvas with the grid centred when the grid is
    /// smaller in either direction. A dimension that exceeds `display_size` is kept
    /// whole and starts at offset 0. Grids at least `display_size` in both directions
    /// are returned at native size.
    pub fn from_grid(grid: &Grid, display_size: usize) -> Self {
        let needs_padding = grid.height() < display_size || grid.width() < display_size;
        if !needs_padding {
            return Self {
                height: grid.height(),
                width: grid.width(),
                cells: grid.cells().iter().map(|&value| Cell::Color(value)).collect(),
            };
        }

        let height = display_size.max(grid.height());
        let width = display_size.max(grid.width());
        let top = (height - grid.height()) / 2;
        let left = (width - grid.width()) / 2;

        let mut cells = vec![Cell::Padding; height * width];
        for (row, values) in grid.rows().enumerate() {
            let start = (top + row) * width + left;
            for (target, &value) in cells[start..start + values.len()].iter_mut().zip(values) {
                *target = Cell::Color(value);
            }
        }

        Self {
            height,
            width,
            cells,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row >= self.height || column >= self.width {
            return None;
        }
        self.cells.get(row * self.width + column).copied()
    }

    /// Iterates over the rows of the canvas, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }
}
