//! App state and input routing
//!
//! Holds the top-level view state (running flag, viewport, catalog) and routes
//! keyboard, mouse and timer input into the presentation sequencer.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tokio::time::Instant;

use crate::models::{Catalog, Game, NewsItem};
use crate::sequencer::{Sequencer, Signal};

// =============================================================================
// Hit Regions
// =============================================================================

/// Clickable regions recorded by the last render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    /// One tab per news entry, in catalog order
    pub news_tabs: Vec<Rect>,
    pub news_prev: Option<Rect>,
    pub news_next: Option<Rect>,
}

/// What a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    NewsTab(usize),
    NewsPrev,
    NewsNext,
}

impl HitMap {
    pub fn hit(&self, col: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(col, row);
        if self.news_prev.is_some_and(|r| r.contains(pos)) {
            return Some(Hit::NewsPrev);
        }
        if self.news_next.is_some_and(|r| r.contains(pos)) {
            return Some(Hit::NewsNext);
        }
        self.news_tabs
            .iter()
            .position(|r| r.contains(pos))
            .map(Hit::NewsTab)
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Terminal size (columns, rows)
    pub viewport: (u16, u16),
    /// Base URL for placeholder images
    pub asset_base: String,
    /// Clickable regions from the last frame
    pub hits: HitMap,
    catalog: Arc<Catalog>,
    sequencer: Sequencer,
}

impl App {
    pub fn new(catalog: Arc<Catalog>, sequencer: Sequencer, asset_base: impl Into<String>) -> Self {
        Self {
            running: true,
            viewport: (0, 0),
            asset_base: asset_base.into(),
            hits: HitMap::default(),
            catalog,
            sequencer,
        }
    }

    /// Quit the application and cancel all timers
    pub fn quit(&mut self) {
        self.running = false;
        self.sequencer.teardown();
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut Sequencer {
        &mut self.sequencer
    }

    /// Entry currently shown by the carousel
    pub fn current_news(&self) -> Option<&NewsItem> {
        self.catalog.news.get(self.sequencer.news_index())
    }

    pub fn featured(&self) -> Option<&Game> {
        self.catalog.featured()
    }

    pub fn handle_signal(&mut self, signal: Signal, now: Instant) {
        self.sequencer.on_signal(signal, now);
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returns true if event was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit();
                true
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.sequencer.prev_news();
                true
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.sequencer.next_news();
                true
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Direct selection by number
                let idx = (c as usize) - ('1' as usize);
                self.sequencer.select_news(idx)
            }
            _ => false,
        }
    }

    // -------------------------------------------------------------------------
    // Mouse Event Handling
    // -------------------------------------------------------------------------

    /// Handle mouse event, returns true if event was consumed
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> bool {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let (width, height) = self.viewport;
                self.sequencer
                    .pointer_moved(mouse.column, mouse.row, width, height, now);
                true
            }
            MouseEventKind::Down(MouseButton::Left) => {
                match self.hits.hit(mouse.column, mouse.row) {
                    Some(Hit::NewsTab(i)) => self.sequencer.select_news(i),
                    Some(Hit::NewsPrev) => {
                        self.sequencer.prev_news();
                        true
                    }
                    Some(Hit::NewsNext) => {
                        self.sequencer.next_news();
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn app() -> App {
        let catalog = Arc::new(Catalog::builtin());
        let sequencer = Sequencer::detached(&catalog, Instant::now());
        let mut app = App::new(catalog, sequencer, "https://example.test/img");
        app.resize(80, 24);
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn test_app_quit_key() {
        let mut app = app();
        assert!(app.running);

        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.running);
        assert!(!app.sequencer().is_active());
    }

    #[test]
    fn test_app_quit_ctrl_c() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_arrow_keys_move_carousel() {
        let mut app = app();
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.sequencer().news_index(), 2);

        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.sequencer().news_index(), 0);

        app.handle_key(key(KeyCode::Char('l')));
        assert_eq!(app.current_news().unwrap().title, "Season Pass Live");
    }

    #[test]
    fn test_number_keys_select_directly() {
        let mut app = app();
        assert!(app.handle_key(key(KeyCode::Char('3'))));
        assert_eq!(app.current_news().unwrap().title, "Developer Livestream");

        // Beyond the catalog is ignored
        assert!(!app.handle_key(key(KeyCode::Char('9'))));
        assert_eq!(app.sequencer().news_index(), 2);
    }

    #[test]
    fn test_unknown_key_not_consumed() {
        let mut app = app();
        let mut ev = key(KeyCode::Char('z'));
        ev.kind = KeyEventKind::Press;
        assert!(!app.handle_key(ev));
    }

    #[test]
    fn test_mouse_move_retargets_parallax() {
        let mut app = app();
        let now = Instant::now();
        app.handle_mouse(mouse(MouseEventKind::Moved, 0, 0), now);
        assert_eq!(app.sequencer().parallax().target(), (-5.0, -5.0));
    }

    #[test]
    fn test_click_on_news_tab() {
        let mut app = app();
        app.hits = HitMap {
            news_tabs: vec![
                Rect::new(2, 20, 10, 1),
                Rect::new(14, 20, 10, 1),
                Rect::new(26, 20, 10, 1),
            ],
            news_prev: Some(Rect::new(60, 15, 3, 1)),
            news_next: Some(Rect::new(64, 15, 3, 1)),
        };

        let now = Instant::now();
        assert!(app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 27, 20), now));
        assert_eq!(app.sequencer().news_index(), 2);

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 65, 15), now);
        assert_eq!(app.sequencer().news_index(), 0);

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 61, 15), now);
        assert_eq!(app.sequencer().news_index(), 2);

        assert!(!app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), now));
    }
}
