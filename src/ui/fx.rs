//! Compositing helpers for animated sections
//!
//! Sections draw into a scratch buffer at their natural position; the scratch
//! buffer is then copied onto the frame shifted by the section's pose and
//! faded toward the background by its alpha. Cells with no background keep
//! the backdrop fill, and blank ones are skipped entirely.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::motion::Pose;
use crate::ui::theme::fade;

/// Draw a section through its pose. Hidden poses draw nothing.
pub fn staged(dst: &mut Buffer, area: Rect, pose: Pose, draw: impl FnOnce(&mut Buffer)) {
    if !pose.is_visible() || area.is_empty() {
        return;
    }

    let mut scratch = Buffer::empty(area);
    draw(&mut scratch);
    blit(&scratch, dst, pose.dx.round() as i32, pose.dy.round() as i32, pose.alpha);
}

/// Copy `src` onto `dst` shifted by `(dx, dy)` cells, faded by `alpha`.
///
/// Cells landing outside `dst` are dropped.
pub fn blit(src: &Buffer, dst: &mut Buffer, dx: i32, dy: i32, alpha: f32) {
    let alpha = alpha.clamp(0.0, 1.0);
    let from = src.area;
    let bounds = dst.area;

    for y in from.top()..from.bottom() {
        for x in from.left()..from.right() {
            let Some(cell) = src.cell((x, y)) else {
                continue;
            };
            if cell.symbol() == " " && cell.bg == Color::Reset {
                continue;
            }

            let tx = x as i32 + dx;
            let ty = y as i32 + dy;
            if tx < bounds.left() as i32
                || ty < bounds.top() as i32
                || tx >= bounds.right() as i32
                || ty >= bounds.bottom() as i32
            {
                continue;
            }

            if let Some(target) = dst.cell_mut((tx as u16, ty as u16)) {
                // Cells without a fill keep whatever is underneath
                let under = target.bg;
                *target = cell.clone();
                if cell.bg == Color::Reset {
                    target.bg = under;
                } else if alpha < 1.0 {
                    target.bg = fade(cell.bg, alpha);
                }
                if alpha < 1.0 {
                    target.fg = fade(cell.fg, alpha);
                }
            }
        }
    }
}

/// Offset a rect by whole cells, clipped to `bounds`
pub fn shift(area: Rect, dx: i16, dy: i16, bounds: Rect) -> Rect {
    let x = (area.x as i32 + dx as i32).max(0) as u16;
    let y = (area.y as i32 + dy as i32).max(0) as u16;
    Rect::new(x, y, area.width, area.height).intersection(bounds)
}

/// Centered rect of at most `width × height` inside `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render a buffer as plain text, one line per row, trailing blanks trimmed
pub fn buffer_to_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                line.push_str(cell.symbol());
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    #[test]
    fn test_blit_shifts_and_clips() {
        let mut src = Buffer::empty(Rect::new(0, 0, 4, 1));
        src.set_string(0, 0, "abcd", Style::default());

        let mut dst = Buffer::empty(Rect::new(0, 0, 4, 1));
        blit(&src, &mut dst, 2, 0, 1.0);
        assert_eq!(buffer_to_text(&dst), "  ab\n");
    }

    #[test]
    fn test_blank_cells_are_transparent() {
        let src = Buffer::empty(Rect::new(0, 0, 3, 1));
        let mut dst = Buffer::empty(Rect::new(0, 0, 3, 1));
        dst.set_string(0, 0, "xyz", Style::default());

        blit(&src, &mut dst, 0, 0, 1.0);
        assert_eq!(buffer_to_text(&dst), "xyz\n");
    }

    #[test]
    fn test_unfilled_cells_keep_backdrop() {
        let mut src = Buffer::empty(Rect::new(0, 0, 1, 1));
        src.set_string(0, 0, "a", Style::default());

        let mut dst = Buffer::empty(Rect::new(0, 0, 1, 1));
        dst.set_style(dst.area, Style::default().bg(Color::Rgb(1, 2, 3)));
        blit(&src, &mut dst, 0, 0, 1.0);

        let cell = dst.cell((0, 0)).unwrap();
        assert_eq!(cell.symbol(), "a");
        assert_eq!(cell.bg, Color::Rgb(1, 2, 3));
    }

    #[test]
    fn test_staged_hidden_draws_nothing() {
        let mut dst = Buffer::empty(Rect::new(0, 0, 3, 1));
        let area = dst.area;
        staged(&mut dst, area, Pose::new(0.0, 0.0, 0.0), |buf| {
            buf.set_string(0, 0, "abc", Style::default());
        });
        assert_eq!(buffer_to_text(&dst), "\n");
    }

    #[test]
    fn test_shift_clips_to_bounds() {
        let bounds = Rect::new(0, 0, 10, 10);
        let shifted = shift(Rect::new(5, 5, 4, 4), 3, -2, bounds);
        assert_eq!(shifted, Rect::new(8, 3, 2, 4));
    }

    #[test]
    fn test_centered() {
        let r = centered(Rect::new(0, 0, 80, 24), 20, 6);
        assert_eq!(r, Rect::new(30, 9, 20, 6));
        assert_eq!(centered(Rect::new(0, 0, 10, 4), 20, 6), Rect::new(0, 0, 10, 4));
    }
}
