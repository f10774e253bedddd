//! Terminal UI components
//!
//! Every frame is a pure function of the app state and the current instant:
//! the backdrop is drawn first, then either the loading overlay or the page
//! sections, each composited through its entrance pose.

pub mod backdrop;
pub mod cards;
pub mod footer;
pub mod fx;
pub mod hero;
pub mod loading;
pub mod nav;
pub mod news;
pub mod status;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    Frame,
};
use tokio::time::Instant;

use crate::app::{App, HitMap};
use crate::motion::Target;

/// Footer only fits on tall terminals
const FOOTER_MIN_HEIGHT: u16 = 36;

/// Render into a ratatui frame
pub fn render(frame: &mut Frame, app: &App, now: Instant) -> HitMap {
    let area = frame.area();
    draw(app, now, area, frame.buffer_mut())
}

/// Draw the whole page at `now`, returning the clickable regions
pub fn draw(app: &App, now: Instant, area: Rect, buf: &mut Buffer) -> HitMap {
    backdrop::render(app, now, area, buf);

    let sequencer = app.sequencer();
    let news_len = app.catalog().news.len();
    if !sequencer.is_loaded() {
        let [body, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let elapsed = now.saturating_duration_since(sequencer.mounted_at());
        loading::render(elapsed, body, buf);
        status::render(false, sequencer.news_index(), news_len, status_area, buf);
        return HitMap::default();
    }

    let footer_height = if area.height >= FOOTER_MIN_HEIGHT { 6 } else { 0 };
    let [nav_area, hero_area, header_area, cards_area, news_area, footer_area, status_area] =
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(2),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Length(footer_height),
            Constraint::Length(1),
        ])
        .areas(area);

    let glow = sequencer.glow_at(now);

    fx::staged(buf, nav_area, sequencer.pose(Target::Nav, now), |b| {
        nav::render(glow, nav_area, b)
    });

    let hero_frame = hero::HeroFrame {
        game: app.featured(),
        asset_base: &app.asset_base,
        glow,
        plate: sequencer.parallax().offset_at(now),
    };
    fx::staged(buf, hero_area, sequencer.pose(Target::Hero, now), |b| {
        hero::render(hero_frame, hero_area, b)
    });

    cards::render_header(header_area, buf);
    let games = &app.catalog().games;
    for (i, (game, slot)) in games
        .iter()
        .zip(cards::slots(cards_area, games.len()))
        .enumerate()
    {
        fx::staged(buf, slot, sequencer.pose(Target::Card(i), now), |b| {
            cards::render_card(game, slot, b)
        });
    }

    let mut hits = HitMap::default();
    let news_pose = sequencer.pose(Target::News, now);
    fx::staged(buf, news_area, news_pose, |b| {
        hits = news::render(&app.catalog().news, sequencer.news_index(), news_area, b);
    });
    let (dx, dy) = (news_pose.dx.round() as i16, news_pose.dy.round() as i16);
    if dx != 0 || dy != 0 {
        hits = offset_hits(hits, dx, dy, area);
    }

    if footer_height > 0 {
        footer::render(footer_area, buf);
    }

    status::render(
        sequencer.is_loaded(),
        sequencer.news_index(),
        news_len,
        status_area,
        buf,
    );

    hits
}

/// Render a frame off-screen and return it as plain text
pub fn snapshot(app: &App, now: Instant, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    draw(app, now, area, &mut buf);
    fx::buffer_to_text(&buf)
}

fn offset_hits(hits: HitMap, dx: i16, dy: i16, bounds: Rect) -> HitMap {
    HitMap {
        news_tabs: hits
            .news_tabs
            .into_iter()
            .map(|r| fx::shift(r, dx, dy, bounds))
            .collect(),
        news_prev: hits.news_prev.map(|r| fx::shift(r, dx, dy, bounds)),
        news_next: hits.news_next.map(|r| fx::shift(r, dx, dy, bounds)),
    }
}
