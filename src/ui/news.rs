//! News carousel panel
//!
//! Shows the entry under the carousel cursor with prev/next controls and one
//! tab per entry. Returns the clickable regions it drew.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::app::HitMap;
use crate::models::NewsItem;
use crate::ui::Theme;

const PREV: &str = " ◀ ";
const NEXT: &str = " ▶ ";

pub fn render(news: &[NewsItem], index: usize, area: Rect, buf: &mut Buffer) -> HitMap {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_dim())
        .style(Theme::panel());
    let inner = block.inner(area);
    block.render(area, buf);

    let mut hits = HitMap::default();
    if inner.is_empty() {
        return hits;
    }

    let [header, _, title, summary, _, tabs] = Layout::vertical([Constraint::Length(1); 6])
        .areas(inner);

    // Header with controls pinned to the right edge
    Paragraph::new(Span::styled(" Latest Updates", Theme::heading())).render(header, buf);
    if header.width >= 8 && header.height > 0 {
        let next = Rect::new(header.right() - 4, header.y, 3, 1);
        let prev = Rect::new(header.right() - 8, header.y, 3, 1);
        buf.set_string(prev.x, prev.y, PREV, Theme::button().bg(Theme::PANEL_ACTIVE));
        buf.set_string(next.x, next.y, NEXT, Theme::button().bg(Theme::PANEL_ACTIVE));
        hits.news_prev = Some(prev);
        hits.news_next = Some(next);
    }

    if let Some(item) = news.get(index) {
        let headline = Line::from(vec![
            Span::raw("  "),
            Span::styled(item.icon.as_str(), Theme::text()),
            Span::raw("  "),
            Span::styled(item.title.as_str(), Theme::title()),
        ]);
        Paragraph::new(headline).render(title, buf);
        Paragraph::new(Span::styled(format!("      {}", item.summary), Theme::body()))
            .render(summary, buf);
    }

    if tabs.height == 0 {
        return hits;
    }

    // One tab per entry, active one highlighted
    let mut x = tabs.x + 1;
    for (i, item) in news.iter().enumerate() {
        let label = format!(" {} ", item.title);
        let width = label.chars().count() as u16;
        if x + width > tabs.right() {
            break;
        }

        let style = if i == index {
            Theme::tab_active()
        } else {
            Theme::tab()
        };
        buf.set_string(x, tabs.y, &label, style);
        hits.news_tabs.push(Rect::new(x, tabs.y, width, 1));
        x += width + 2;
    }

    hits
}
