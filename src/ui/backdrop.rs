//! Backdrop: gradient wash plus the parallax plate
//!
//! The gradient is fixed to the viewport. The plate (a sparse grid of neon
//! dots and crosses) is drawn shifted by the current parallax offset.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use tokio::time::Instant;

use crate::app::App;
use crate::ui::Theme;

/// Horizontal spacing of plate dots
const DOT_STEP_X: i32 = 8;
/// Vertical spacing of plate dots
const DOT_STEP_Y: i32 = 4;
/// Every Nth dot becomes a cross
const CROSS_EVERY: i32 = 3;

pub fn render(app: &App, now: Instant, area: Rect, buf: &mut Buffer) {
    let (ox, oy) = app.sequencer().parallax().cells_at(now);
    render_plate(area, ox, oy, buf);
}

/// Draw the gradient and the plate offset by `(ox, oy)` cells
pub fn render_plate(area: Rect, ox: i16, oy: i16, buf: &mut Buffer) {
    let width = area.width.max(1) as f32;
    let dot = Theme::plate_dot();
    let cross = Theme::plate_cross();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let Some(cell) = buf.cell_mut((x, y)) else {
                continue;
            };
            cell.reset();
            cell.set_bg(Theme::backdrop((x - area.x) as f32 / width));

            let px = (x - area.x) as i32 - ox as i32;
            let py = (y - area.y) as i32 - oy as i32;
            if px.rem_euclid(DOT_STEP_X) == 0 && py.rem_euclid(DOT_STEP_Y) == 0 {
                let is_cross = (px.div_euclid(DOT_STEP_X) + py.div_euclid(DOT_STEP_Y))
                    .rem_euclid(CROSS_EVERY)
                    == 0;
                if is_cross {
                    cell.set_symbol("+").set_style(cross);
                } else {
                    cell.set_symbol("·").set_style(dot);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::fx::buffer_to_text;

    fn first_mark(buf: &Buffer) -> Option<(u16, u16)> {
        let area = buf.area;
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if buf.cell((x, y)).map(|c| c.symbol() != " ").unwrap_or(false) {
                    return Some((x, y));
                }
            }
        }
        None
    }

    #[test]
    fn test_plate_moves_with_offset() {
        let area = Rect::new(0, 0, 16, 8);

        let mut still = Buffer::empty(area);
        render_plate(area, 0, 0, &mut still);
        assert_eq!(first_mark(&still), Some((0, 0)));

        let mut moved = Buffer::empty(area);
        render_plate(area, 2, 1, &mut moved);
        assert_eq!(first_mark(&moved), Some((2, 1)));
    }

    #[test]
    fn test_negative_offset_wraps_pattern() {
        let area = Rect::new(0, 0, 16, 8);
        let mut buf = Buffer::empty(area);
        render_plate(area, -3, -1, &mut buf);
        // Pattern repeats, so a mark still appears inside the viewport
        assert!(first_mark(&buf).is_some());
        assert_eq!(buffer_to_text(&buf).lines().count(), 8);
    }
}
