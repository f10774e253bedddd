//! Data structures for the showcase catalog
//!
//! The catalog is read-only content fed to the renderer:
//! - **Games**: featured titles shown in the hero and the card grid
//! - **News**: entries rotated by the carousel
//!
//! It is built once at startup (built-in sample data or a TOML file) and
//! shared as `Arc<Catalog>` afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Games
// =============================================================================

/// A featured game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: u32,
    pub title: String,
    pub tagline: String,
    /// Placeholder image seed
    pub image_seed: u32,
    /// Platform labels, in display order
    #[serde(default)]
    pub platforms: Vec<String>,
}

impl Game {
    /// Placeholder image URL under `asset_base`
    pub fn image_url(&self, asset_base: &str) -> String {
        format!(
            "{}?random={}",
            asset_base.trim_end_matches('/'),
            self.image_seed
        )
    }

    /// Platforms joined for display, e.g. `PC • Console`
    pub fn platform_line(&self) -> String {
        self.platforms.join(" • ")
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.title, self.tagline)?;
        if !self.platforms.is_empty() {
            write!(f, " [{}]", self.platforms.join(", "))?;
        }
        Ok(())
    }
}

// =============================================================================
// News
// =============================================================================

/// A news entry shown in the carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub summary: String,
    /// Single glyph shown next to the entry
    pub icon: String,
}

impl fmt::Display for NewsItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.icon, self.title, self.summary)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Errors from catalog loading and validation
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Catalog has no {0}")]
    Empty(&'static str),
    #[error("Duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },
}

/// All content shown by the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub games: Vec<Game>,
    pub news: Vec<NewsItem>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Sample lineup shipped with the binary
    pub fn builtin() -> Self {
        fn game(id: u32, title: &str, tagline: &str, platforms: &[&str]) -> Game {
            Game {
                id,
                title: title.into(),
                tagline: tagline.into(),
                image_seed: id,
                platforms: platforms.iter().map(|p| p.to_string()).collect(),
            }
        }

        fn news(id: u32, title: &str, summary: &str, icon: &str) -> NewsItem {
            NewsItem {
                id,
                title: title.into(),
                summary: summary.into(),
                icon: icon.into(),
            }
        }

        Self {
            games: vec![
                game(1, "Apex of Legends", "A new era of champions", &["PC", "Console"]),
                game(2, "Shadow Protocol", "Stealth meets overload", &["PC"]),
                game(3, "Arcane Drift", "Magic crashes the net", &["PC", "Mobile"]),
                game(4, "Steel Rebellion", "Riot on the streets", &["Console"]),
            ],
            news: vec![
                news(1, "Patch 2.1: Balance Update", "Champion tuning and bug fixes.", "🔧"),
                news(2, "Season Pass Live", "New rewards and events available.", "🎟"),
                news(3, "Developer Livestream", "Behind the scenes with the team.", "🎙"),
            ],
        }
    }

    /// Parse and validate a TOML catalog
    pub fn from_toml(s: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(s)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a TOML catalog file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Check that both collections are non-empty with unique ids
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.games.is_empty() {
            return Err(CatalogError::Empty("games"));
        }
        if self.news.is_empty() {
            return Err(CatalogError::Empty("news"));
        }

        let mut seen = HashSet::new();
        for g in &self.games {
            if !seen.insert(g.id) {
                return Err(CatalogError::DuplicateId { kind: "game", id: g.id });
            }
        }

        seen.clear();
        for n in &self.news {
            if !seen.insert(n.id) {
                return Err(CatalogError::DuplicateId { kind: "news", id: n.id });
            }
        }

        Ok(())
    }

    /// Flagship title shown in the hero
    pub fn featured(&self) -> Option<&Game> {
        self.games.first()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.games.len(), 4);
        assert_eq!(catalog.news.len(), 3);
        assert_eq!(catalog.featured().unwrap().title, "Apex of Legends");
    }

    #[test]
    fn test_image_url() {
        let game = &Catalog::builtin().games[1];
        assert_eq!(
            game.image_url("https://picsum.photos/800/450/"),
            "https://picsum.photos/800/450?random=2"
        );
    }

    #[test]
    fn test_platform_line() {
        let game = &Catalog::builtin().games[0];
        assert_eq!(game.platform_line(), "PC • Console");
    }

    #[test]
    fn test_display() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.games[2].to_string(),
            "Arcane Drift - Magic crashes the net [PC, Mobile]"
        );
        assert!(catalog.news[0].to_string().contains("Patch 2.1"));
    }

    #[test]
    fn test_duplicate_news_id_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.news[2].id = 1;
        match catalog.validate() {
            Err(CatalogError::DuplicateId { kind, id }) => {
                assert_eq!(kind, "news");
                assert_eq!(id, 1);
            }
            other => panic!("Expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_games_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.games.clear();
        assert!(matches!(catalog.validate(), Err(CatalogError::Empty("games"))));
    }
}
