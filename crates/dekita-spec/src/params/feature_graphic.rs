//! Parameters for the store feature graphic.
//!
//! The feature graphic is a 1024x500 banner: a vertical green gradient, a
//! calendar card on the left with completion dots under finished days, a row
//! of badge circles below the card, and emphasized marketing copy on the right.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::font::FontSource;

/// Default output location for the feature graphic.
pub const DEFAULT_FEATURE_GRAPHIC_OUTPUT: &str = "assets/feature_graphic.png";

/// Parameters for the feature graphic composer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureGraphicParams {
    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Initial canvas fill, fully covered by the gradient.
    pub background: HexColor,

    /// Gradient color at the top row.
    pub gradient_start: HexColor,

    /// Gradient color the bottom row approaches.
    pub gradient_end: HexColor,

    /// Font used for every text element.
    pub font: FontSource,

    /// Calendar card layout.
    pub calendar: CalendarCardParams,

    /// Badge row below the card.
    pub badges: BadgeRowParams,

    /// Left edge of the copy column.
    pub text_x: i32,

    /// Copy color.
    pub text_color: HexColor,

    /// Copy lines, drawn top to bottom in list order.
    pub lines: Vec<TextLine>,

    /// Output PNG path.
    pub output: PathBuf,
}

impl Default for FeatureGraphicParams {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 500,
            background: HexColor::from_u32(0x4CAF50),
            gradient_start: HexColor::rgb(76, 175, 80),
            gradient_end: HexColor::rgb(120, 200, 120),
            font: FontSource::bundled(),
            calendar: CalendarCardParams::default(),
            badges: BadgeRowParams::default(),
            text_x: 350,
            text_color: HexColor::WHITE,
            lines: vec![
                TextLine::new("できたカレンダー", 50, 80.0, 2),
                TextLine::new("習慣を続けて、成長を実感", 155, 36.0, 1),
                TextLine::new("複雑な機能なし、シンプルに習慣管理", 215, 28.0, 1),
                TextLine::new("✓ カレンダーで一目で進捗確認", 275, 36.0, 1),
                TextLine::new("✓ 統計情報で達成状況を可視化", 335, 36.0, 1),
            ],
            output: PathBuf::from(DEFAULT_FEATURE_GRAPHIC_OUTPUT),
        }
    }
}

impl FeatureGraphicParams {
    /// Sets the font source.
    pub fn with_font(mut self, font: FontSource) -> Self {
        self.font = font;
        self
    }

    /// Sets the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Sets the canvas dimensions.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// One line of emphasized copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextLine {
    /// The text to draw.
    pub text: String,

    /// Top edge of the line in pixels.
    pub y: i32,

    /// Font size in pixels.
    pub font_size: f32,

    /// Offset radius of the emphasis passes (0 draws the text once).
    #[serde(default)]
    pub emphasis: u32,
}

impl TextLine {
    /// Creates a text line.
    pub fn new(text: impl Into<String>, y: i32, font_size: f32, emphasis: u32) -> Self {
        Self {
            text: text.into(),
            y,
            font_size,
            emphasis,
        }
    }
}

/// Calendar card on the left side of the feature graphic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarCardParams {
    /// Left edge of the card.
    pub x: i32,
    /// Top edge of the card.
    pub y: i32,
    /// Card width; the right edge is `x + width`.
    pub width: i32,
    /// Card height; the bottom edge is `y + height`.
    pub height: i32,
    /// Horizontal inset of the weekday/day grid.
    pub margin: i32,
    /// Corner radius of the card and its header.
    pub corner_radius: f64,
    pub fill: HexColor,
    pub outline: HexColor,
    pub outline_width: u32,

    /// Header band height.
    pub header_height: i32,
    pub header_color: HexColor,
    /// Offset from the card top where the header's square-cornered lower part begins.
    pub header_square_from: i32,

    /// Month label, centred in the header.
    pub month_label: String,
    pub month_font_size: f32,
    /// Offset of the month label from the card top.
    pub month_offset_y: i32,
    pub month_color: HexColor,

    /// Weekday labels, Sunday first.
    pub weekday_labels: Vec<String>,
    /// Gap between the header bottom and the weekday labels.
    pub weekday_gap: i32,
    /// Horizontal nudge of each label inside its cell.
    pub weekday_inset_x: i32,
    pub sunday_color: HexColor,
    pub saturday_color: HexColor,
    pub weekday_color: HexColor,

    /// Font size for weekday labels and day numbers.
    pub small_font_size: f32,

    /// Gap between the weekday labels and the first week row.
    pub grid_gap: i32,
    pub cell_height: i32,
    /// Day numbers, one row per week.
    pub weeks: Vec<[u32; 7]>,
    /// Offset of a day number inside its cell.
    pub day_offset: [i32; 2],
    pub day_color: HexColor,

    /// Days that get completion markers.
    pub completed_days: Vec<u32>,
    /// Number of marker dots under a completed day.
    pub marker_count: u32,
    pub marker_radius: f64,
    /// Horizontal distance between marker centres.
    pub marker_spacing: i32,
    /// Offset of the first marker centre inside the cell.
    pub marker_offset: [i32; 2],
    pub marker_color: HexColor,
}

impl Default for CalendarCardParams {
    fn default() -> Self {
        Self {
            x: 50,
            y: 60,
            width: 280,
            height: 320,
            margin: 20,
            corner_radius: 15.0,
            fill: HexColor::WHITE,
            outline: HexColor::from_u32(0x2E7D32),
            outline_width: 3,
            header_height: 50,
            header_color: HexColor::from_u32(0xFF5252),
            header_square_from: 35,
            month_label: "10月".to_string(),
            month_font_size: 24.0,
            month_offset_y: 12,
            month_color: HexColor::WHITE,
            weekday_labels: ["日", "月", "火", "水", "木", "金", "土"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            weekday_gap: 15,
            weekday_inset_x: 5,
            sunday_color: HexColor::from_u32(0xD32F2F),
            saturday_color: HexColor::from_u32(0x1976D2),
            weekday_color: HexColor::from_u32(0x666666),
            small_font_size: 18.0,
            grid_gap: 30,
            cell_height: 35,
            weeks: vec![
                [1, 2, 3, 4, 5, 6, 7],
                [8, 9, 10, 11, 12, 13, 14],
                [15, 16, 17, 18, 19, 20, 21],
                [22, 23, 24, 25, 26, 27, 28],
            ],
            day_offset: [4, 2],
            day_color: HexColor::from_u32(0x333333),
            completed_days: vec![1, 2, 3, 5, 8, 9, 10, 12, 15, 16, 17, 19, 22, 23, 24],
            marker_count: 3,
            marker_radius: 2.5,
            marker_spacing: 6,
            marker_offset: [8, 22],
            marker_color: HexColor::from_u32(0x4CAF50),
        }
    }
}

impl CalendarCardParams {
    /// Card bounds as inclusive `[x0, y0, x1, y1]`.
    ///
    /// Layout arithmetic saturates, so absurd offsets land on the `i32` limits
    /// and fail the card-in-canvas check instead of overflowing.
    pub fn bounds(&self) -> [i32; 4] {
        [
            self.x,
            self.y,
            self.x.saturating_add(self.width),
            self.y.saturating_add(self.height),
        ]
    }

    /// Width of one day column.
    pub fn cell_width(&self) -> i32 {
        self.width.saturating_sub(self.margin.saturating_mul(2)) / 7
    }

    /// Top edge of the weekday label row.
    pub fn weekday_y(&self) -> i32 {
        self.y
            .saturating_add(self.header_height)
            .saturating_add(self.weekday_gap)
    }

    /// Top edge of the first week row.
    pub fn grid_start_y(&self) -> i32 {
        self.weekday_y().saturating_add(self.grid_gap)
    }

    /// Top-left corner of the cell at `(week, weekday)`.
    pub fn cell_origin(&self, week: usize, weekday: usize) -> (i32, i32) {
        let column = saturating_index(weekday).saturating_mul(self.cell_width());
        let row = saturating_index(week).saturating_mul(self.cell_height);
        (
            self.x.saturating_add(self.margin).saturating_add(column),
            self.grid_start_y().saturating_add(row),
        )
    }

    /// Whether `day` is marked as completed.
    pub fn is_completed(&self, day: u32) -> bool {
        self.completed_days.contains(&day)
    }
}

/// Badge circles under the calendar card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BadgeRowParams {
    /// Gap between the card bottom and the badge centres.
    pub gap_y: i32,
    /// Badge diameter.
    pub size: i32,
    /// Distance between badge centres.
    pub spacing: i32,
    /// Offset of the first badge centre from the card's left edge.
    pub inset_x: i32,
    pub outline: HexColor,
    pub outline_width: u32,
    /// Badges in drawing order.
    pub badges: Vec<Badge>,
}

impl Default for BadgeRowParams {
    fn default() -> Self {
        Self {
            gap_y: 20,
            size: 30,
            spacing: 42,
            inset_x: 20,
            outline: HexColor::WHITE,
            outline_width: 2,
            badges: vec![
                Badge::new("Bronze", HexColor::from_u32(0xCD7F32)),
                Badge::new("Silver", HexColor::from_u32(0xC0C0C0)),
                Badge::new("Gold", HexColor::from_u32(0xFFD700)),
                Badge::new("Platinum", HexColor::from_u32(0xE5E4E2)),
                Badge::new("Diamond", HexColor::from_u32(0xB9F2FF)),
            ],
        }
    }
}

/// A single achievement badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Badge {
    pub name: String,
    pub color: HexColor,
}

impl Badge {
    pub fn new(name: impl Into<String>, color: HexColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

fn saturating_index(i: usize) -> i32 {
    i32::try_from(i).unwrap_or(i32::MAX)
}
