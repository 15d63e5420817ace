//! PNG rendering of grids, challenge figures and dataset statistics
//!
//! This module draws onto [`plotters`] bitmap backends. Every public function creates
//! its own backend, presents it and drops it before returning, so no figure outlives
//! the call that produced it.

use crate::analysis::binning::{equal_width_bins, unit_bins, Bin};
use crate::analysis::frequencies::ValueFrequencies;
use crate::analysis::statistics::DatasetStatistics;
use crate::data::challenge::Challenge;
use crate::data::grid::{Grid, COLOR_COUNT};
use crate::render::canvas::{Canvas, DEFAULT_DISPLAY_SIZE};
use crate::render::layout::{ChallengeFigure, PanelContent, FIGURE_ROWS};
use crate::render::palette::{cell_colors, color_of};
use crate::utilities::formatting::format_thousands;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Size of the statistics overview figure.
pub const STATISTICS_FIGURE_SIZE: (u32, u32) = (1800, 1200);

/// Size of the colour frequency histogram.
pub const HISTOGRAM_FIGURE_SIZE: (u32, u32) = (1200, 800);

/// Bins used for the grid area histograms.
pub const AREA_BIN_COUNT: usize = 50;

const FONT: &str = "sans-serif";
const ORANGE: RGBColor = RGBColor(255, 165, 0);
const PURPLE: RGBColor = RGBColor(128, 0, 128);
const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const LIGHT_GREEN: RGBColor = RGBColor(144, 238, 144);

/// Inner spacing between a panel's edge and the grid drawn inside it.
const PANEL_INSET: u32 = 8;

/// Render a composed challenge figure to a PNG file
///
/// # Arguments
/// * `figure` - The panel layout produced by [`ChallengeFigure::compose`]
/// * `output_path` - Where the PNG is written
///
/// # Returns
/// * `Ok(())` - If the figure was drawn and saved
/// * `Err(PlotError)` - If the backend failed to draw or write the image
pub fn render_challenge_figure(figure: &ChallengeFigure, output_path: &Path) -> Result<()> {
    let root = BitMapBackend::new(output_path, figure.pixel_size()).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let body = root
        .titled(&figure.caption(), (FONT, 30))
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;
    let cells = body.split_evenly((FIGURE_ROWS, figure.columns));

    for panel in &figure.panels {
        let Some(area) = cells.get(panel.row * figure.columns + panel.column) else {
            continue;
        };

        match panel.content {
            PanelContent::Grid(grid) => draw_grid(area, &panel.title, grid)?,
            PanelContent::MissingSolution => draw_missing_solution(area, &panel.title)?,
        }
    }

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Compose and save the figure of one challenge into `save_dir`
///
/// # Arguments
/// * `challenge_id` - Identifier of the challenge
/// * `challenge` - The challenge itself
/// * `solutions` - Solutions aligned with the challenge's test examples, if known
/// * `save_dir` - Directory the figure is written into, created if missing
///
/// # Returns
/// The path of the written `challenge_{id}.png`.
pub fn save_challenge_figure(
    challenge_id: &str,
    challenge: &Challenge,
    solutions: Option<&[Grid]>,
    save_dir: &Path,
) -> Result<PathBuf> {
    std::fs::create_dir_all(save_dir)?;
    let figure = ChallengeFigure::compose(challenge_id, challenge, solutions);
    let output_path = save_dir.join(figure.file_name());
    render_challenge_figure(&figure, &output_path)?;
    Ok(output_path)
}

/// Render the six panel statistics overview of a dataset
///
/// Panels, left to right and top to bottom: training examples per challenge, test
/// examples per challenge, input areas, output areas, input dimensions and colour usage.
pub fn render_statistics_figure(stats: &DatasetStatistics, output_path: &Path) -> Result<()> {
    let root = BitMapBackend::new(output_path, STATISTICS_FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let panels = root.split_evenly((2, 3));

    draw_bins(
        &panels[0],
        "Training Examples per Challenge",
        "Number of Training Examples",
        &unit_bins(&stats.train_counts),
        SKY_BLUE,
    )?;
    draw_bins(
        &panels[1],
        "Test Examples per Challenge",
        "Number of Test Examples",
        &unit_bins(&stats.test_counts),
        LIGHT_GREEN,
    )?;
    draw_bins(
        &panels[2],
        "Input Grid Areas",
        "Area (cells)",
        &equal_width_bins(&stats.input_areas(), AREA_BIN_COUNT),
        ORANGE,
    )?;
    draw_bins(
        &panels[3],
        "Output Grid Areas",
        "Area (cells)",
        &equal_width_bins(&stats.output_areas(), AREA_BIN_COUNT),
        PURPLE,
    )?;
    draw_dimension_scatter(&panels[4], &stats.input_shapes)?;
    draw_color_usage(&panels[5], &stats.frequencies)?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Render the per-value frequency bar chart
///
/// # Arguments
/// * `frequencies` - Cell counts to plot; must contain at least one cell
/// * `title` - Chart caption
/// * `output_path` - Where the PNG is written
///
/// # Returns
/// * `Ok(())` - If the chart was drawn and saved
/// * `Err(PlotError)` - If there is nothing to plot or drawing failed
pub fn render_frequency_histogram(
    frequencies: &ValueFrequencies,
    title: &str,
    output_path: &Path,
) -> Result<()> {
    if frequencies.total() == 0 {
        return Err(PlotError::InvalidData(
            "No cells to plot in frequency histogram".to_string(),
        ));
    }

    let root = BitMapBackend::new(output_path, HISTOGRAM_FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let max_count = frequencies.counts().iter().copied().max().unwrap_or(0);
    let y_max = count_axis_limit(max_count as f64);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (FONT, 32))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(100)
        .build_cartesian_2d(-0.5f64..(COLOR_COUNT as f64 - 0.5), 0f64..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(COLOR_COUNT)
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format_thousands((*y).max(0.0) as u64))
        .x_desc("Integer Value")
        .y_desc("Frequency (Count)")
        .label_style((FONT, 18))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series((0..COLOR_COUNT as u8).map(|value| {
            let x = f64::from(value);
            Rectangle::new(
                [(x - 0.4, 0.0), (x + 0.4, frequencies.count(value) as f64)],
                color_of(value).filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series((0..COLOR_COUNT as u8).map(|value| {
            let x = f64::from(value);
            Rectangle::new(
                [(x - 0.4, 0.0), (x + 0.4, frequencies.count(value) as f64)],
                BLACK.stroke_width(1),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let annotation = (FONT, 14)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series((0..COLOR_COUNT as u8).map(|value| {
            let count = frequencies.count(value);
            Text::new(
                format_thousands(count),
                (f64::from(value), count as f64 + y_max * 0.01),
                annotation.clone(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    draw_stats_box(&root, &histogram_stats_lines(frequencies))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Draws one grid into a panel, keeping cells square.
fn draw_grid<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    grid: &Grid,
) -> Result<()> {
    let canvas = Canvas::from_grid(grid, DEFAULT_DISPLAY_SIZE);
    let titled = area
        .titled(title, (FONT, 18))
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let (offset, size) = fit_cells(titled.dim_in_pixel(), (canvas.height(), canvas.width()));
    if size.0 == 0 || size.1 == 0 {
        return Ok(());
    }
    let grid_area = titled.shrink(offset, size);

    let (height, width) = (canvas.height() as f64, canvas.width() as f64);
    let mut chart = ChartBuilder::on(&grid_area)
        .build_cartesian_2d(0f64..width, 0f64..height)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    // Row 0 is the top row, so rows are flipped onto the upward y axis.
    let squares = || {
        canvas.rows().enumerate().flat_map(move |(row, cells)| {
            let top = height - row as f64;
            cells
                .iter()
                .enumerate()
                .map(move |(column, &cell)| {
                    let left = column as f64;
                    ([(left, top), (left + 1.0, top - 1.0)], cell_colors(cell))
                })
        })
    };

    chart
        .draw_series(squares().map(|(corners, (fill, _))| Rectangle::new(corners, fill.filled())))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    chart
        .draw_series(
            squares().map(|(corners, (_, edge))| Rectangle::new(corners, edge.stroke_width(1))),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Draws the placeholder shown for a test example without a known solution.
fn draw_missing_solution<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
) -> Result<()> {
    let titled = area
        .titled(title, (FONT, 18))
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let (width, height) = titled.dim_in_pixel();
    let style = (FONT, 22)
        .into_font()
        .color(&RED)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let (x, y) = (width as i32 / 2, height as i32 / 2);

    titled
        .draw_text("No Solution", &style, (x, y - 14))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    titled
        .draw_text("Available", &style, (x, y + 14))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Draws a bar histogram of precomputed bins.
fn draw_bins<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    x_desc: &str,
    bins: &[Bin],
    color: RGBColor,
) -> Result<()> {
    let (Some(first), Some(last)) = (bins.first(), bins.last()) else {
        return Err(PlotError::InvalidData(format!("No values to plot for {}", title)));
    };

    let max_count = bins.iter().map(|bin| bin.count).max().unwrap_or(0);
    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(first.start..last.end, 0f64..count_axis_limit(max_count as f64))
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc("Count")
        .label_style((FONT, 14))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.start, 0.0), (bin.end, bin.count as f64)],
                color.mix(0.8).filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(bins.iter().filter(|bin| bin.count > 0).map(|bin| {
            Rectangle::new(
                [(bin.start, 0.0), (bin.end, bin.count as f64)],
                BLACK.stroke_width(1),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Scatter of input grid widths against heights.
fn draw_dimension_scatter<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    shapes: &[(usize, usize)],
) -> Result<()> {
    if shapes.is_empty() {
        return Err(PlotError::InvalidData(
            "No grid shapes to plot".to_string(),
        ));
    }

    let max_height = shapes.iter().map(|&(height, _)| height).max().unwrap_or(1);
    let max_width = shapes.iter().map(|&(_, width)| width).max().unwrap_or(1);

    let mut chart = ChartBuilder::on(area)
        .caption("Input Grid Dimensions", (FONT, 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..(max_width + 1) as f64, 0f64..(max_height + 1) as f64)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Width")
        .y_desc("Height")
        .label_style((FONT, 14))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(shapes.iter().map(|&(height, width)| {
            Circle::new((width as f64, height as f64), 3, BLUE.mix(0.5).filled())
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Bars of how many cells use each palette colour.
fn draw_color_usage<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    frequencies: &ValueFrequencies,
) -> Result<()> {
    let max_count = frequencies.counts().iter().copied().max().unwrap_or(0);

    let mut chart = ChartBuilder::on(area)
        .caption("Color Usage Frequency", (FONT, 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(
            -0.5f64..(COLOR_COUNT as f64 - 0.5),
            0f64..count_axis_limit(max_count as f64),
        )
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(COLOR_COUNT)
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format_thousands((*y).max(0.0) as u64))
        .x_desc("Color Value")
        .y_desc("Total Count")
        .label_style((FONT, 14))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series((0..COLOR_COUNT as u8).map(|value| {
            let x = f64::from(value);
            Rectangle::new(
                [(x - 0.4, 0.0), (x + 0.4, frequencies.count(value) as f64)],
                color_of(value).filled(),
            )
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Draws a boxed block of text in the top right corner of the area.
fn draw_stats_box<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    lines: &[String],
) -> Result<()> {
    const LINE_HEIGHT: i32 = 22;
    const BOX_WIDTH: i32 = 300;

    let (width, _) = area.dim_in_pixel();
    let right = width as i32 - 40;
    let (left, top) = (right - BOX_WIDTH, 80);
    let bottom = top + LINE_HEIGHT * lines.len() as i32 + 16;

    area.draw(&Rectangle::new(
        [(left, top), (right, bottom)],
        RGBColor(245, 222, 179).mix(0.8).filled(),
    ))
    .map_err(|e| PlotError::Drawing(e.to_string()))?;
    area.draw(&Rectangle::new(
        [(left, top), (right, bottom)],
        BLACK.stroke_width(1),
    ))
    .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let style = (FONT, 16).into_font().color(&BLACK);
    for (index, line) in lines.iter().enumerate() {
        area.draw_text(
            line,
            &style,
            (left + 10, top + 8 + LINE_HEIGHT * index as i32),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    Ok(())
}

/// Text lines of the histogram's statistics box.
fn histogram_stats_lines(frequencies: &ValueFrequencies) -> Vec<String> {
    let mut lines = vec![
        format!("Total cells: {}", format_thousands(frequencies.total())),
        format!("Unique values: {}", frequencies.distinct_values()),
    ];

    if let Some((value, count)) = frequencies.most_common() {
        lines.push(format!("Most common: {} ({} times)", value, format_thousands(count)));
    }
    if let Some((value, count)) = frequencies.least_common() {
        lines.push(format!("Least common: {} ({} times)", value, format_thousands(count)));
    }
    if let Some(ratio) = frequencies.most_to_least_ratio() {
        lines.push(format!("Ratio (most/least): {:.2}x", ratio));
    }

    lines
}

/// Upper y limit leaving headroom above the tallest bar.
fn count_axis_limit(max_count: f64) -> f64 {
    (max_count * 1.1).max(1.0)
}

/// Largest square-celled rectangle for a `rows` x `columns` canvas inside `available`
///
/// # Arguments
/// * `available` - Pixel size (width, height) of the panel
/// * `(rows, columns)` - Canvas size in cells
///
/// # Returns
/// The top left offset and pixel size (width, height) of the centred grid.
fn fit_cells(available: (u32, u32), (rows, columns): (usize, usize)) -> ((u32, u32), (u32, u32)) {
    let inner_width = available.0.saturating_sub(2 * PANEL_INSET);
    let inner_height = available.1.saturating_sub(2 * PANEL_INSET);
    if rows == 0 || columns == 0 {
        return ((PANEL_INSET, PANEL_INSET), (0, 0));
    }

    let cell = (f64::from(inner_width) / columns as f64).min(f64::from(inner_height) / rows as f64);
    let width = ((cell * columns as f64).floor() as u32).min(inner_width);
    let height = ((cell * rows as f64).floor() as u32).min(inner_height);

    let left = PANEL_INSET + (inner_width - width) / 2;
    let top = PANEL_INSET + (inner_height - height) / 2;
    ((left, top), (width, height))
}
