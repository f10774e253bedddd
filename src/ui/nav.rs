//! Navigation bar
//!
//! Logo and studio name on the left, menu and call-to-action on the right.
//! The menu and the subtitle drop out on narrow terminals.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::ui::Theme;

const MENU: [&str; 4] = ["Home", "Games", "Updates", "Community"];

/// Render the nav bar at glow intensity `glow`
pub fn render(glow: f32, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_dim())
        .style(Theme::panel());
    let inner = block.inner(area);
    block.render(area, buf);

    let wide = inner.width >= 100;

    let mut brand = vec![
        Span::styled(" RG ", Theme::logo()),
        Span::raw("  "),
        Span::styled("RGNs Collective", Theme::headline()),
    ];
    if inner.width >= 70 {
        brand.push(Span::styled("  Games — Updates — News", Theme::muted()));
    }

    let mut menu = Vec::new();
    if wide {
        for item in MENU {
            menu.push(Span::styled(item, Theme::text()));
            menu.push(Span::raw("   "));
        }
    }
    menu.push(Span::styled("[Sign in]", Theme::button()));
    menu.push(Span::raw(" "));
    menu.push(Span::styled(" Get Started ", Theme::cta(glow)));
    menu.push(Span::raw(" "));
    let menu = Line::from(menu);

    let [left, right] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(menu.width() as u16),
    ])
    .areas(inner);

    Paragraph::new(Line::from(brand)).render(left, buf);
    Paragraph::new(menu.right_aligned()).render(right, buf);
}
