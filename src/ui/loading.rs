//! Loading overlay shown until the load gate opens

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use std::time::Duration;

use crate::ui::{fx, Theme};

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
const SPINNER_FRAME: Duration = Duration::from_millis(80);

/// Spinner glyph after `elapsed` since mount
pub fn spinner_frame(elapsed: Duration) -> &'static str {
    let i = (elapsed.as_millis() / SPINNER_FRAME.as_millis()) as usize;
    SPINNER[i % SPINNER.len()]
}

/// Cover `area` with the overlay
pub fn render(elapsed: Duration, area: Rect, buf: &mut Buffer) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.reset();
                cell.set_style(Theme::loading().bg(Theme::BACKGROUND));
            }
        }
    }

    let boxed = fx::centered(area, 24, 5);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .style(Theme::loading().bg(Theme::BACKGROUND));

    let lines = vec![
        Line::from(Span::styled(spinner_frame(elapsed), Theme::loading())),
        Line::from(Span::styled("LOADING ASSETS", Theme::loading_text())),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
        .render(boxed, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::fx::buffer_to_text;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(Duration::ZERO), "⣾");
        assert_eq!(spinner_frame(Duration::from_millis(85)), "⣽");
        assert_eq!(spinner_frame(Duration::from_millis(640)), "⣾");
    }

    #[test]
    fn test_overlay_covers_viewport() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 0, "underneath", Theme::text());
        render(Duration::ZERO, area, &mut buf);

        let text = buffer_to_text(&buf);
        assert!(text.contains("LOADING ASSETS"));
        assert!(!text.contains("underneath"));
        assert_eq!(buf.cell((0, 0)).unwrap().bg, Theme::BACKGROUND);
    }
}
