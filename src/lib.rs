//! # ARC Data Visualisation
//! Loading, statistics and grid rendering for ARC-AGI challenge datasets.
//!
//! The crate is split into three layers:
//! - [`data`] parses and validates the challenge and solution documents.
//! - [`analysis`] derives statistics, interest categories and colour frequencies.
//! - [`render`] lays out and rasterises grids, challenges and statistics to PNG.
//!
//! The command line tools under `tools/` are thin wrappers over these layers.

/// Dataset model and JSON loading.
pub mod data {
    pub mod challenge;
    pub mod grid;
    pub mod loading;
    pub mod split;
}

/// Statistics derived from a loaded dataset.
pub mod analysis {
    pub mod binning;
    pub mod categories;
    pub mod frequencies;
    pub mod statistics;
    pub mod summary;
}

/// Turning grids and statistics into images.
///
/// [`render::canvas`] and [`render::layout`] are pure; only [`render::plots`] touches
/// the drawing backend.
pub mod render {
    pub mod canvas;
    pub mod layout;
    pub mod palette;
    pub mod plots;
}

/// Small shared helpers.
pub mod utilities {
    pub mod formatting;
    pub mod sampling;
    pub mod timestamp;

}
