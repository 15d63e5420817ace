//! Fixed colour table used for every rendered grid

use crate::data::grid::COLOR_COUNT;
use crate::render::canvas::Cell;
use plotters::style::RGBColor;

/// Fill colour for each cell value, indexed by value.
pub const PALETTE: [RGBColor; COLOR_COUNT] = [
    RGBColor(0x00, 0x00, 0x00), // black
    RGBColor(0x00, 0x74, 0xD9), // blue
    RGBColor(0xFF, 0x41, 0x36), // red
    RGBColor(0x2E, 0xCC, 0x40), // green
    RGBColor(0xFF, 0xDC, 0x00), // yellow
    RGBColor(0xAA, 0xAA, 0xAA), // gray
    RGBColor(0xF0, 0x12, 0xBE), // fuchsia
    RGBColor(0xFF, 0x85, 0x1B), // orange
    RGBColor(0x7F, 0xDB, 0xFF), // aqua
    RGBColor(0x87, 0x0C, 0x25), // maroon
];

/// Fill of padding cells; lighter than any palette entry.
pub const PADDING_FILL: RGBColor = RGBColor(0xF0, 0xF0, 0xF0);

pub const PADDING_EDGE: RGBColor = RGBColor(0xD0, 0xD0, 0xD0);

pub const CELL_EDGE: RGBColor = RGBColor(0x80, 0x80, 0x80);

/// Palette colour of a value. Values outside the palette wrap around.
pub fn color_of(value: u8) -> RGBColor {
    PALETTE[usize::from(value) % COLOR_COUNT]
}

/// Fill and edge colour for a canvas cell.
pub fn cell_colors(cell: Cell) -> (RGBColor, RGBColor) {
    match cell {
        Cell::Color(value) => (color_of(value), CELL_EDGE),
        Cell::Padding => (PADDING_FILL, PADDING_EDGE),
    }
}
