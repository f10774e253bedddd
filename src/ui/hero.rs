//! Hero banner for the flagship title
//!
//! Pitch and call-to-action on the left, feature card on the right. The
//! feature card rides the parallax plate at a reduced scale.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::models::Game;
use crate::ui::cards::image_placeholder;
use crate::ui::{fx, Theme};

const PITCH: &str = "Dive into a fast-paced competitive battleground. New champions, \
                     a reworked ranked ladder, and a soundtrack that hits like thunder.";

/// Share of the plate offset applied to the feature card, per axis
const CARD_PARALLAX: (f32, f32) = (0.4, 0.2);

/// Inputs sampled for one hero frame
#[derive(Debug, Clone, Copy)]
pub struct HeroFrame<'a> {
    pub game: Option<&'a Game>,
    pub asset_base: &'a str,
    pub glow: f32,
    /// Current plate offset in cells
    pub plate: (f32, f32),
}

pub fn render(frame: HeroFrame<'_>, area: Rect, buf: &mut Buffer) {
    let with_card = area.width >= 90 && frame.game.is_some();
    let (left, right) = if with_card {
        let [l, r] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(area);
        (l, Some(r))
    } else {
        (area, None)
    };

    render_pitch(&frame, left, buf);

    if let (Some(right), Some(game)) = (right, frame.game) {
        let dx = (frame.plate.0 * CARD_PARALLAX.0).round() as i16;
        let dy = (frame.plate.1 * CARD_PARALLAX.1).round() as i16;
        let slot = Rect::new(
            right.x + 2,
            right.y + 1,
            right.width.saturating_sub(4),
            right.height.saturating_sub(2),
        );
        render_feature_card(game, frame.asset_base, fx::shift(slot, dx, dy, area), buf);
    }
}

fn render_pitch(frame: &HeroFrame<'_>, area: Rect, buf: &mut Buffer) {
    let inner = Rect::new(
        area.x + 2,
        area.y,
        area.width.saturating_sub(4),
        area.height,
    );

    let [text, buttons, stats] = Layout::vertical([
        Constraint::Min(2),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    let title = frame.game.map(|g| g.title.as_str()).unwrap_or("RGN Collective");
    let lines = vec![
        Line::from(Span::styled("NEW RELEASE", Theme::kicker())),
        Line::from(Span::styled(title.to_uppercase(), Theme::headline())),
        Line::from(""),
        Line::from(Span::styled(PITCH, Theme::body())),
    ];
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(text, buf);

    let [play, _, notes, _] = Layout::horizontal([
        Constraint::Length(14),
        Constraint::Length(2),
        Constraint::Length(15),
        Constraint::Min(0),
    ])
    .areas(buttons);

    Paragraph::new(Span::styled("Play Now", Theme::cta(frame.glow)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::cta_border(frame.glow)),
        )
        .render(play, buf);

    Paragraph::new(Span::styled("Patch Notes", Theme::button()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::border()),
        )
        .render(notes, buf);

    let status = Line::from(vec![
        Span::styled("Servers", Theme::headline()),
        Span::styled(" Online", Theme::muted()),
        Span::raw("    "),
        Span::styled("Players", Theme::heading()),
        Span::styled(" 1.2M", Theme::muted()),
    ]);
    Paragraph::new(status).render(stats, buf);
}

fn render_feature_card(game: &Game, asset_base: &str, area: Rect, buf: &mut Buffer) {
    if area.height < 4 || area.width < 10 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_dim())
        .style(Theme::panel());
    let inner = block.inner(area);
    block.render(area, buf);

    let [image, title, tagline] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    image_placeholder(game.image_seed, &game.image_url(asset_base), image, buf);
    Paragraph::new(Span::styled(format!(" {}", game.title), Theme::title())).render(title, buf);
    Paragraph::new(Span::styled(format!(" {}", game.tagline), Theme::body())).render(tagline, buf);
}
