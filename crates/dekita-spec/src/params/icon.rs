//! Parameters for the app icon.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// Default output location for the icon.
pub const DEFAULT_ICON_OUTPUT: &str = "assets/icon.png";

/// Parameters for the icon composer.
///
/// The icon is square. All calendar geometry is derived from `size` and
/// `margin`, so changing either keeps the layout proportional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconParams {
    /// Side length in pixels.
    pub size: u32,
    pub background: HexColor,
    /// Distance from the canvas edge to the calendar.
    pub margin: u32,

    /// Extra top offset of the calendar below `margin`.
    pub calendar_offset_y: u32,
    pub calendar_fill: HexColor,
    pub calendar_outline: HexColor,
    pub calendar_outline_width: u32,

    /// Header band height, measured from the calendar top.
    pub header_height: u32,
    pub header_color: HexColor,

    pub rings: RingParams,
    pub grid: IconGridParams,
    pub markers: DateMarkerParams,

    /// Output PNG path.
    pub output: PathBuf,
}

impl Default for IconParams {
    fn default() -> Self {
        Self {
            size: 1024,
            background: HexColor::from_u32(0x4CAF50),
            margin: 100,
            calendar_offset_y: 80,
            calendar_fill: HexColor::WHITE,
            calendar_outline: HexColor::from_u32(0x2E7D32),
            calendar_outline_width: 8,
            header_height: 120,
            header_color: HexColor::from_u32(0xFF5252),
            rings: RingParams::default(),
            grid: IconGridParams::default(),
            markers: DateMarkerParams::default(),
            output: PathBuf::from(DEFAULT_ICON_OUTPUT),
        }
    }
}

impl IconParams {
    /// Sets the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Sets the side length.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Top edge of the calendar, which is also the ring centre line.
    pub fn calendar_top(&self) -> i64 {
        self.margin as i64 + self.calendar_offset_y as i64
    }

    /// Right/bottom edge of the calendar.
    pub fn calendar_far_edge(&self) -> i64 {
        self.size as i64 - self.margin as i64
    }

    /// Ring centre x positions, evenly dividing the width.
    pub fn ring_centers_x(&self) -> Vec<i64> {
        let slots = self.rings.count as i64 + 1;
        (1..slots).map(|i| i * self.size as i64 / slots).collect()
    }

    /// Top edge of the date grid.
    pub fn grid_start_y(&self) -> i64 {
        self.margin as i64 + self.grid.offset_y as i64
    }

    /// Width of one grid column.
    pub fn cell_width(&self) -> i64 {
        (self.size as i64 - 2 * self.margin as i64) / self.grid.cols.max(1) as i64
    }

    /// Height of one grid row.
    pub fn cell_height(&self) -> i64 {
        (self.calendar_far_edge() - self.grid_start_y()) / self.grid.rows.max(1) as i64
    }

    /// Centre of the grid cell at `(row, col)`.
    pub fn cell_center(&self, row: u32, col: u32) -> (i64, i64) {
        let cw = self.cell_width();
        let ch = self.cell_height();
        (
            self.margin as i64 + col as i64 * cw + cw / 2,
            self.grid_start_y() + row as i64 * ch + ch / 2,
        )
    }
}

/// Binder rings across the calendar top edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RingParams {
    pub count: u32,
    pub radius: u32,
    pub fill: HexColor,
    pub outline: HexColor,
    pub outline_width: u32,
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            count: 3,
            radius: 30,
            fill: HexColor::from_u32(0x2E7D32),
            outline: HexColor::from_u32(0x1B5E20),
            outline_width: 4,
        }
    }
}

/// Grid lines separating the date cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconGridParams {
    /// Offset of the grid top below `margin`.
    pub offset_y: u32,
    pub rows: u32,
    pub cols: u32,
    pub line_color: HexColor,
    pub line_width: u32,
}

impl Default for IconGridParams {
    fn default() -> Self {
        Self {
            offset_y: 250,
            rows: 5,
            cols: 7,
            line_color: HexColor::from_u32(0xE0E0E0),
            line_width: 3,
        }
    }
}

/// Filled circles marking sample dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DateMarkerParams {
    /// Cells as `[row, col]`.
    pub cells: Vec<[u32; 2]>,
    pub radius: u32,
    pub color: HexColor,
}

impl Default for DateMarkerParams {
    fn default() -> Self {
        Self {
            cells: vec![[1, 0], [2, 1], [3, 2], [4, 3], [5, 4]],
            radius: 25,
            color: HexColor::from_u32(0x4CAF50),
        }
    }
}
