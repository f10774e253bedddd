//! Featured game cards

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::models::Game;
use crate::ui::theme::{mix, Theme};

/// Section header above the grid
pub fn render_header(area: Rect, buf: &mut Buffer) {
    let title = Line::from(Span::styled(" Featured Games", Theme::heading()));
    Paragraph::new(title).render(area, buf);

    if area.width >= 70 {
        let blurb = Line::from(Span::styled(
            "Discover our latest & most popular titles ",
            Theme::muted(),
        ))
        .right_aligned();
        Paragraph::new(blurb).render(area, buf);
    }
}

/// Split the grid row into one slot per card
pub fn slots(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    Layout::horizontal(vec![Constraint::Ratio(1, count as u32); count])
        .spacing(1)
        .split(area)
        .to_vec()
}

/// Render one game card
pub fn render_card(game: &Game, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .style(Theme::panel());
    let inner = block.inner(area);
    block.render(area, buf);

    let [image, title, tagline, _, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    image_placeholder(game.image_seed, &format!("IMG #{}", game.image_seed), image, buf);
    Paragraph::new(Span::styled(game.title.as_str(), Theme::title())).render(title, buf);
    Paragraph::new(Span::styled(game.tagline.as_str(), Theme::body())).render(tagline, buf);

    Paragraph::new(Span::styled(game.platform_line(), Theme::muted())).render(footer, buf);
    if footer.width >= 24 {
        Paragraph::new(Line::from(Span::styled("[View]", Theme::button())).right_aligned())
            .render(footer, buf);
    }
}

/// Shaded stand-in for an image, tinted by its seed, with a centered caption
pub fn image_placeholder(seed: u32, caption: &str, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }

    let tint = Theme::image_tint(seed);
    let shades = ["░", "▒", "▓"];
    let width = area.width.max(1) as f32;

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let t = (x - area.x) as f32 / width;
            let shade = shades[((t * shades.len() as f32) as usize).min(shades.len() - 1)];
            let fg = mix(Theme::PANEL, tint, 0.25 + 0.35 * t);
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(shade).set_style(Style::default().fg(fg).bg(Theme::PANEL));
            }
        }
    }

    let caption_width = caption.chars().count() as u16;
    if caption_width + 2 <= area.width {
        let x = area.x + (area.width - caption_width) / 2;
        let y = area.y + area.height / 2;
        buf.set_string(x, y, caption, Theme::muted().bg(Theme::PANEL));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Catalog;
    use crate::ui::fx::buffer_to_text;

    #[test]
    fn test_card_shows_game() {
        let game = &Catalog::builtin().games[0];
        let area = Rect::new(0, 0, 30, 7);
        let mut buf = Buffer::empty(area);
        render_card(game, area, &mut buf);

        let text = buffer_to_text(&buf);
        assert!(text.contains("Apex of Legends"));
        assert!(text.contains("A new era of champions"));
        assert!(text.contains("PC • Console"));
        assert!(text.contains("[View]"));
        assert!(text.contains("IMG #1"));
    }

    #[test]
    fn test_slots_split_evenly() {
        let split = slots(Rect::new(0, 0, 83, 7), 4);
        assert_eq!(split.len(), 4);
        assert!(split.iter().all(|r| r.width >= 19));
        assert!(slots(Rect::new(0, 0, 80, 7), 0).is_empty());
    }
}
