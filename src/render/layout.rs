//! Panel layout of a challenge figure
//!
//! A challenge figure has two rows. The first holds the training pairs, the second the
//! test inputs next to their solutions. Each example occupies two adjacent columns.
//! Layouts are plain values; drawing them is done by [`crate::render::plots`].

use crate::data::challenge::Challenge;
use crate::data::grid::Grid;

/// Rows in every challenge figure: training pairs, then test pairs.
pub const FIGURE_ROWS: usize = 2;

/// Row holding the training examples.
pub const TRAINING_ROW: usize = 0;

/// Row holding the test examples.
pub const TEST_ROW: usize = 1;

/// Pixel size of one panel column.
pub const COLUMN_WIDTH_PX: u32 = 375;

/// Pixel height of the whole figure.
pub const FIGURE_HEIGHT_PX: u32 = 900;

/// What a panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelContent<'a> {
    Grid(&'a Grid),
    /// The test example has no known solution.
    MissingSolution,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel<'a> {
    pub row: usize,
    pub column: usize,
    pub title: String,
    pub content: PanelContent<'a>,
}

/// The full arrangement of panels for one challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeFigure<'a> {
    pub challenge_id: &'a str,
    /// Number of panel columns; unused cells in a row stay blank.
    pub columns: usize,
    pub panels: Vec<Panel<'a>>,
}

impl<'a> ChallengeFigure<'a> {
    /// Arrange a challenge's examples into panels
    ///
    /// # Arguments
    /// * `challenge_id` - Identifier shown in the figure caption and file name
    /// * `challenge` - The challenge to lay out
    /// * `solutions` - Solutions aligned with `challenge.test`, if known
    ///
    /// # Returns
    /// A figure with `max(2 * train, 2 * test)` columns (at least one). Test examples
    /// without a solution get a [`PanelContent::MissingSolution`] panel.
    pub fn compose(
        challenge_id: &'a str,
        challenge: &'a Challenge,
        solutions: Option<&'a [Grid]>,
    ) -> Self {
        let columns = (2 * challenge.train.len())
            .max(2 * challenge.test.len())
            .max(1);
        let mut panels = Vec::with_capacity(2 * (challenge.train.len() + challenge.test.len()));

        for (index, example) in challenge.train.iter().enumerate() {
            let number = index + 1;
            panels.push(Panel {
                row: TRAINING_ROW,
                column: index * 2,
                title: format!("Train {} Input", number),
                content: PanelContent::Grid(&example.input),
            });
            panels.push(Panel {
                row: TRAINING_ROW,
                column: index * 2 + 1,
                title: format!("Train {} Output", number),
                content: PanelContent::Grid(&example.output),
            });
        }

        for (index, example) in challenge.test.iter().enumerate() {
            let number = index + 1;
            let solution = solutions.and_then(|solutions| solutions.get(index));
            panels.push(Panel {
                row: TEST_ROW,
                column: index * 2,
                title: format!("Test {} Input", number),
                content: PanelContent::Grid(&example.input),
            });
            panels.push(Panel {
                row: TEST_ROW,
                column: index * 2 + 1,
                title: format!("Test {} Solution", number),
                content: solution.map_or(PanelContent::MissingSolution, PanelContent::Grid),
            });
        }

        Self {
            challenge_id,
            columns,
            panels,
        }
    }

    /// Caption drawn above the figure.
    pub fn caption(&self) -> String {
        format!("ARC Challenge: {}", self.challenge_id)
    }

    /// File name the figure is saved under.
    pub fn file_name(&self) -> String {
        format!("challenge_{}.png", self.challenge_id)
    }

    /// Size of the rendered image in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.columns as u32 * COLUMN_WIDTH_PX, FIGURE_HEIGHT_PX)
    }
}
