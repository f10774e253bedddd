//! Status bar: phase indicator, carousel position, key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::Theme;

pub fn render(loaded: bool, news_index: usize, news_len: usize, area: Rect, buf: &mut Buffer) {
    let phase = if loaded {
        Span::styled(" LIVE ", Style::default().fg(Theme::BACKGROUND).bg(Theme::PRIMARY))
    } else {
        Span::styled(" LOADING ", Style::default().fg(Theme::BACKGROUND).bg(Theme::ACCENT))
    };

    let position = if news_len > 0 {
        Span::styled(format!(" news {}/{} ", news_index + 1, news_len), Theme::muted())
    } else {
        Span::styled(" no news ", Theme::muted())
    };

    let line = Line::from(vec![
        phase,
        position,
        Span::raw("│ "),
        Span::styled("q", Theme::keybind()),
        Span::styled(":quit  ", Theme::muted()),
        Span::styled("←/→", Theme::keybind()),
        Span::styled(":news  ", Theme::muted()),
        Span::styled("1-9", Theme::keybind()),
        Span::styled(":select", Theme::muted()),
    ]);

    Paragraph::new(line).style(Theme::status_bar()).render(area, buf);
}
