//! App icon composer.

use std::path::Path;

use dekita_spec::validation::validate_icon;
use dekita_spec::IconParams;

use super::common::{GridLines, HeaderBand};
use super::{ensure_valid, write_asset, AssetResult, ComposeError};
use crate::canvas::Canvas;
use crate::geometry::Bounds;
use crate::shapes::{draw_circle, draw_rectangle, ShapeStyle};

/// Draw the app icon.
pub fn compose_icon(params: &IconParams) -> Result<Canvas, ComposeError> {
    ensure_valid("icon", validate_icon(params))?;

    let size = params.size;
    let mut canvas = Canvas::new(size, size, params.background.into())?;

    let margin = params.margin as f64;
    let top = params.calendar_top() as f64;
    let far = params.calendar_far_edge() as f64;

    let body = ShapeStyle::filled(params.calendar_fill.into())
        .with_outline(params.calendar_outline.into(), params.calendar_outline_width);
    draw_rectangle(&mut canvas, Bounds::new(margin, top, far, far), &body);

    HeaderBand {
        bounds: Bounds::new(margin, top, far, top + params.header_height as f64),
        corner_radius: 0.0,
        square_from: top,
        color: params.header_color.into(),
    }
    .draw(&mut canvas);

    let ring = ShapeStyle::filled(params.rings.fill.into())
        .with_outline(params.rings.outline.into(), params.rings.outline_width);
    for x in params.ring_centers_x() {
        draw_circle(&mut canvas, (x as f64, top), params.rings.radius as f64, &ring);
    }

    GridLines {
        left: params.margin as i64,
        top: params.grid_start_y(),
        right: params.calendar_far_edge(),
        bottom: params.calendar_far_edge(),
        cell_width: params.cell_width(),
        cell_height: params.cell_height(),
        rows: params.grid.rows,
        cols: params.grid.cols,
    }
    .draw(&mut canvas, params.grid.line_color.into(), params.grid.line_width);

    let marker = ShapeStyle::filled(params.markers.color.into());
    for &[row, col] in &params.markers.cells {
        let (x, y) = params.cell_center(row, col);
        log::trace!("icon marker ({}, {}) at ({}, {})", row, col, x, y);
        draw_circle(&mut canvas, (x as f64, y as f64), params.markers.radius as f64, &marker);
    }

    Ok(canvas)
}

/// Draw the app icon and write it to `out_path`.
pub fn generate_icon(params: &IconParams, out_path: &Path) -> Result<AssetResult, ComposeError> {
    let canvas = compose_icon(params)?;
    write_asset(&canvas, out_path)
}
