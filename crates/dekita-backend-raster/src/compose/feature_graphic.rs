//! Feature graphic composer.

use std::path::Path;

use dekita_spec::validation::validate_feature_graphic;
use dekita_spec::{BadgeRowParams, CalendarCardParams, FeatureGraphicParams};

use super::common::{draw_centered_text, DotRow, HeaderBand};
use super::{ensure_valid, write_asset, AssetResult, ComposeError};
use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::Bounds;
use crate::gradient::VerticalGradient;
use crate::shapes::{draw_rounded_rectangle, ShapeStyle};
use crate::text::{draw_emphasized_text, draw_text, FontFace};

/// Draw the feature graphic.
pub fn compose_feature_graphic(params: &FeatureGraphicParams) -> Result<Canvas, ComposeError> {
    ensure_valid("feature graphic", validate_feature_graphic(params))?;

    let mut canvas = Canvas::new(params.width, params.height, params.background.into())?;
    VerticalGradient::new(params.gradient_start.channels(), params.gradient_end.channels())
        .paint(&mut canvas);

    let face = FontFace::load_or_fallback(&params.font);
    log::debug!("feature graphic font: {:?}", face);

    draw_calendar_card(&mut canvas, &params.calendar, &face);
    draw_badges(&mut canvas, &params.calendar, &params.badges);
    draw_copy(&mut canvas, params, &face);

    Ok(canvas)
}

/// Draw the feature graphic and write it to `out_path`.
pub fn generate_feature_graphic(
    params: &FeatureGraphicParams,
    out_path: &Path,
) -> Result<AssetResult, ComposeError> {
    let canvas = compose_feature_graphic(params)?;
    write_asset(&canvas, out_path)
}

fn draw_calendar_card(canvas: &mut Canvas, card: &CalendarCardParams, face: &FontFace) {
    let bounds = Bounds::from(card.bounds());
    let style = ShapeStyle::filled(card.fill.into())
        .with_outline(card.outline.into(), card.outline_width);
    draw_rounded_rectangle(canvas, bounds, card.corner_radius, &style);

    HeaderBand {
        bounds: Bounds::new(
            bounds.x0,
            bounds.y0,
            bounds.x1,
            card.y.saturating_add(card.header_height) as f64,
        ),
        corner_radius: card.corner_radius,
        square_from: card.y.saturating_add(card.header_square_from) as f64,
        color: card.header_color.into(),
    }
    .draw(canvas);

    let month_font = face.at_size(card.month_font_size);
    draw_centered_text(
        canvas,
        card.x,
        card.width,
        card.y.saturating_add(card.month_offset_y),
        &card.month_label,
        card.month_color.into(),
        &month_font,
    );

    let small_font = face.at_size(card.small_font_size);
    let weekday_y = card.weekday_y();
    let last = card.weekday_labels.len().saturating_sub(1);
    for (i, label) in card.weekday_labels.iter().enumerate() {
        let color = match i {
            0 => card.sunday_color,
            i if i == last => card.saturday_color,
            _ => card.weekday_color,
        };
        let (x, _) = card.cell_origin(0, i);
        let position = (x.saturating_add(card.weekday_inset_x), weekday_y);
        draw_text(canvas, position, label, color.into(), &small_font);
    }

    let marker = ShapeStyle::filled(card.marker_color.into());
    let markers = vec![marker; card.marker_count as usize];
    for (week, days) in card.weeks.iter().enumerate() {
        for (weekday, &day) in days.iter().enumerate() {
            let (x, y) = card.cell_origin(week, weekday);
            draw_text(
                canvas,
                (
                    x.saturating_add(card.day_offset[0]),
                    y.saturating_add(card.day_offset[1]),
                ),
                &day.to_string(),
                card.day_color.into(),
                &small_font,
            );

            if card.is_completed(day) {
                DotRow {
                    first_center: (
                        x.saturating_add(card.marker_offset[0]) as f64,
                        y.saturating_add(card.marker_offset[1]) as f64,
                    ),
                    spacing: card.marker_spacing as f64,
                    radius: card.marker_radius,
                }
                .draw(canvas, &markers);
            }
        }
    }
}

fn draw_badges(canvas: &mut Canvas, card: &CalendarCardParams, badges: &BadgeRowParams) {
    let outline: Color = badges.outline.into();
    let styles: Vec<ShapeStyle> = badges
        .badges
        .iter()
        .map(|badge| ShapeStyle::filled(badge.color.into()).with_outline(outline, badges.outline_width))
        .collect();

    DotRow {
        first_center: (
            card.x.saturating_add(badges.inset_x) as f64,
            card.y
                .saturating_add(card.height)
                .saturating_add(badges.gap_y) as f64,
        ),
        spacing: badges.spacing as f64,
        radius: badges.size.div_euclid(2) as f64,
    }
    .draw(canvas, &styles);
}

fn draw_copy(canvas: &mut Canvas, params: &FeatureGraphicParams, face: &FontFace) {
    let color: Color = params.text_color.into();
    for line in &params.lines {
        let font = face.at_size(line.font_size);
        draw_emphasized_text(
            canvas,
            (params.text_x, line.y),
            &line.text,
            color,
            &font,
            line.emphasis,
        );
    }
}
