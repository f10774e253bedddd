//! Page footer: brand blurb, newsletter sign-up, social links, copyright

use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::Theme;

const BLURB: &str =
    "Riot-inspired showcase template. Replace with real branding and assets as appropriate.";

const SOCIALS: [&str; 3] = ["TW", "YT", "DC"];

/// Copyright line for the given year
pub fn copyright(year: i32) -> String {
    format!("© {year} RGN Collective. All rights reserved.")
}

pub fn render(area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Theme::border_dim());
    let inner = block.inner(area);
    block.render(area, buf);

    let [columns, legal] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let [brand, newsletter, follow] = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(40),
        Constraint::Percentage(20),
    ])
    .spacing(2)
    .areas(columns);

    let brand_lines = vec![
        Line::from(vec![
            Span::styled(" RG ", Theme::logo()),
            Span::raw("  "),
            Span::styled("RGNs Collective", Theme::headline()),
        ]),
        Line::from(Span::styled(BLURB, Theme::fine_print())),
    ];
    Paragraph::new(brand_lines)
        .wrap(Wrap { trim: true })
        .render(brand, buf);

    let newsletter_lines = vec![
        Line::from(Span::styled("Newsletter", Theme::heading())),
        Line::from(Span::styled("Get the latest updates and drops.", Theme::muted())),
        Line::from(vec![
            Span::styled(" your@email.com      ", Theme::input()),
            Span::raw(" "),
            Span::styled(" Subscribe ", Theme::cta(0.0)),
        ]),
    ];
    Paragraph::new(newsletter_lines).render(newsletter, buf);

    let mut socials = Vec::new();
    for name in SOCIALS {
        socials.push(Span::styled(format!("[{name}]"), Theme::button()));
        socials.push(Span::raw(" "));
    }
    let follow_lines = vec![
        Line::from(Span::styled("Follow", Theme::heading())),
        Line::from(socials),
    ];
    Paragraph::new(follow_lines).render(follow, buf);

    let year = chrono::Local::now().year();
    Paragraph::new(Line::from(Span::styled(copyright(year), Theme::fine_print())).centered())
        .render(legal, buf);
}
