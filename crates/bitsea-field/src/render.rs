//! Projection of field state onto a terminal frame.

use bitsea_core::Rgb;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::field::BinaryField;
use crate::glyph::Bit;

/// One occupied cell of the projected grid.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CellGlyph {
    ch: char,
    color: Rgb,
    dim: bool,
}

/// Render the field into `area`: fill it with the background color, then
/// overlay every on-canvas glyph at its projected cell.
///
/// A zero-sized area draws nothing, which is the whole failure story of
/// this component.
pub fn render(field: &BinaryField, frame: &mut Frame, area: Rect) {
    let cells = grid(field, area.width, area.height);
    if cells.is_empty() {
        return;
    }

    let background = field.config().colors.background.to_color();
    let blank = Style::new().bg(background);

    let lines: Vec<Line> = (0..area.height)
        .map(|row| {
            let spans: Vec<Span> = (0..area.width)
                .map(
                    |col| match cells[row as usize * area.width as usize + col as usize] {
                        Some(cell) => {
                            let mut style = Style::new().fg(cell.color.to_color()).bg(background);
                            if cell.dim {
                                style = style.add_modifier(Modifier::DIM);
                            }
                            Span::styled(cell.ch.to_string(), style)
                        }
                        None => Span::styled(" ", blank),
                    },
                )
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Project the drawn glyphs onto a `cols` x `rows` grid, row-major.
/// Later glyphs overwrite earlier ones, matching canvas draw order.
fn grid(field: &BinaryField, cols: u16, rows: u16) -> Vec<Option<CellGlyph>> {
    let mut cells = vec![None; cols as usize * rows as usize];
    let config = field.config();
    let palette = &config.colors;

    for g in field.drawn() {
        let Some((col, row)) = cell_of(g.x, g.y, config.width, config.height, cols, rows) else {
            continue;
        };
        let fg = match g.value {
            Bit::One => palette.primary,
            Bit::Zero => palette.secondary,
        };
        cells[row as usize * cols as usize + col as usize] = Some(CellGlyph {
            ch: g.value.glyph(),
            color: fg.blend(palette.background, g.opacity),
            dim: g.blurred,
        });
    }

    cells
}

/// Map field coordinates to a cell, or `None` when the point is off the
/// canvas. Freshly recycled glyphs sit beyond the right edge until the
/// drift brings them back into view.
fn cell_of(x: f32, y: f32, width: f32, height: f32, cols: u16, rows: u16) -> Option<(u16, u16)> {
    if cols == 0 || rows == 0 || width <= 0.0 || height <= 0.0 {
        return None;
    }
    if !(0.0..width).contains(&x) || !(0.0..height).contains(&y) {
        return None;
    }
    let col = ((x / width) * cols as f32) as u16;
    let row = ((y / height) * rows as f32) as u16;
    Some((col.min(cols - 1), row.min(rows - 1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitsea_core::FieldConfig;

    fn still_config(density: usize) -> FieldConfig {
        FieldConfig {
            density,
            speed: 0.0,
            wave_amplitude: 0.0,
            ..FieldConfig::default()
        }
    }

    #[test]
    fn corners_map_to_corner_cells() {
        assert_eq!(cell_of(0.0, 0.0, 800.0, 400.0, 80, 24), Some((0, 0)));
        assert_eq!(cell_of(799.9, 399.9, 800.0, 400.0, 80, 24), Some((79, 23)));
    }

    #[test]
    fn off_canvas_points_are_clipped() {
        for (x, y) in [(-0.1, 10.0), (800.0, 10.0), (10.0, -3.0), (10.0, 400.0)] {
            assert_eq!(cell_of(x, y, 800.0, 400.0, 80, 24), None);
        }
    }

    #[test]
    fn degenerate_surfaces_draw_nothing() {
        assert_eq!(cell_of(10.0, 10.0, 800.0, 400.0, 0, 24), None);
        assert_eq!(cell_of(10.0, 10.0, 800.0, 400.0, 80, 0), None);
        assert_eq!(cell_of(10.0, 10.0, 0.0, 400.0, 80, 24), None);
        assert_eq!(cell_of(10.0, 10.0, 800.0, 0.0, 80, 24), None);
    }

    #[test]
    fn zero_density_projects_an_empty_grid() {
        let mut field = BinaryField::new(still_config(0), 1);
        for _ in 0..5 {
            field.update();
            assert!(grid(&field, 80, 24).iter().all(Option::is_none));
        }
    }

    #[test]
    fn glyphs_project_with_their_bit_and_blended_color() {
        let mut saw_one = false;
        for seed in 0..20 {
            let mut field = BinaryField::new(still_config(1), seed);
            field.update();
            let cells = grid(&field, 80, 24);
            let occupied: Vec<&CellGlyph> = cells.iter().flatten().collect();
            assert!(occupied.len() <= 1);

            let Some(cell) = occupied.first() else {
                // Glyph drawn within the flow margin of an edge and clipped.
                continue;
            };
            saw_one = true;

            let d = field.drawn()[0];
            let palette = &field.config().colors;
            let expected_fg = match d.value {
                Bit::One => palette.primary,
                Bit::Zero => palette.secondary,
            };
            assert_eq!(cell.ch, d.value.glyph());
            assert_eq!(cell.color, expected_fg.blend(palette.background, d.opacity));
            assert_eq!(cell.dim, d.blurred);
        }
        assert!(saw_one, "no seed produced an on-canvas glyph");
    }

    #[test]
    fn every_on_canvas_drawn_glyph_lands_in_an_occupied_cell() {
        let mut field = BinaryField::new(FieldConfig::default(), 9);
        field.update();
        let config = field.config().clone();
        let cells = grid(&field, 120, 40);
        for d in field.drawn() {
            if let Some((col, row)) = cell_of(d.x, d.y, config.width, config.height, 120, 40) {
                assert!(cells[row as usize * 120 + col as usize].is_some());
            }
        }
    }
}
