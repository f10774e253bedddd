//! Neon theme for the showcase
//!
//! Color palette and style helpers for the TUI: deep blue-black background,
//! violet and cyan neon, periwinkle body text.

use ratatui::style::{Color, Modifier, Style};

/// Neon color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #06060b (near black)
    pub const BACKGROUND: Color = Color::Rgb(0x06, 0x06, 0x0b);

    /// Primary: #7c3aed (violet neon)
    pub const PRIMARY: Color = Color::Rgb(0x7c, 0x3a, 0xed);

    /// Secondary: #06b6d4 (cyan neon)
    pub const SECONDARY: Color = Color::Rgb(0x06, 0xb6, 0xd4);

    /// Accent: #ef4444 (signal red)
    pub const ACCENT: Color = Color::Rgb(0xef, 0x44, 0x44);

    /// Glow: #6366f1 (indigo, call-to-action pulse peak)
    pub const GLOW: Color = Color::Rgb(0x63, 0x66, 0xf1);

    /// Text: #f3f4f6 (soft white)
    pub const TEXT: Color = Color::Rgb(0xf3, 0xf4, 0xf6);

    /// Body: #bfc9ff (lavender)
    pub const BODY: Color = Color::Rgb(0xbf, 0xc9, 0xff);

    /// Muted: #9aa6ff (periwinkle)
    pub const MUTED: Color = Color::Rgb(0x9a, 0xa6, 0xff);

    /// Loader: #c7b3ff (pale violet)
    pub const LOADER: Color = Color::Rgb(0xc7, 0xb3, 0xff);

    /// Fine print: #8f9ad1
    pub const FINE: Color = Color::Rgb(0x8f, 0x9a, 0xd1);

    // ═══════════════════════════════════════════════════════════════════════
    // DERIVED COLORS (for UI elements)
    // ═══════════════════════════════════════════════════════════════════════

    /// Panels and cards
    pub const PANEL: Color = Color::Rgb(0x0b, 0x0a, 0x0f);

    /// Active tab
    pub const PANEL_ACTIVE: Color = Color::Rgb(0x1b, 0x13, 0x30);

    /// Border color (dim purple)
    pub const BORDER: Color = Color::Rgb(0x3b, 0x2a, 0x55);

    /// Faint border for large panels
    pub const BORDER_DIM: Color = Color::Rgb(0x2b, 0x1a, 0x3a);

    /// Backdrop gradient start: #050212
    pub const BACKDROP_FROM: Color = Color::Rgb(0x05, 0x02, 0x12);

    /// Backdrop gradient middle: #071129
    pub const BACKDROP_VIA: Color = Color::Rgb(0x07, 0x11, 0x29);

    /// Backdrop gradient end: #12040a
    pub const BACKDROP_TO: Color = Color::Rgb(0x12, 0x04, 0x0a);

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Paragraph text
    pub fn body() -> Style {
        Style::default().fg(Self::BODY)
    }

    /// Dimmed/muted text
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED)
    }

    pub fn fine_print() -> Style {
        Style::default().fg(Self::FINE)
    }

    /// Title/header style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .add_modifier(Modifier::BOLD)
    }

    /// Neon headline
    pub fn headline() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Section heading (cyan)
    pub fn heading() -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Small caps label above headlines
    pub fn kicker() -> Style {
        Style::default().fg(Self::MUTED).add_modifier(Modifier::DIM)
    }

    /// Logo badge
    pub fn logo() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Normal border
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Faint border
    pub fn border_dim() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    /// Card/panel fill
    pub fn panel() -> Style {
        Style::default().bg(Self::PANEL)
    }

    /// Secondary button
    pub fn button() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Filled call-to-action at glow intensity `glow` (0..=1)
    pub fn cta(glow: f32) -> Style {
        Style::default()
            .fg(Self::TEXT)
            .bg(mix(Self::PRIMARY, Self::GLOW, glow))
            .add_modifier(Modifier::BOLD)
    }

    /// Border around a call-to-action at glow intensity `glow` (0..=1)
    pub fn cta_border(glow: f32) -> Style {
        let fg = mix(Self::BORDER, Self::GLOW, 0.35 + 0.65 * glow.clamp(0.0, 1.0));
        let style = Style::default().fg(fg);
        if glow > 0.5 {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Inactive news tab
    pub fn tab() -> Style {
        Style::default().fg(Self::MUTED)
    }

    /// Active news tab
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Self::TEXT)
            .bg(Self::PANEL_ACTIVE)
            .add_modifier(Modifier::BOLD)
    }

    /// Loading/spinner indicator
    pub fn loading() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Loading caption
    pub fn loading_text() -> Style {
        Style::default().fg(Self::LOADER)
    }

    /// Keybinding hint style
    pub fn keybind() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    /// Status bar style
    pub fn status_bar() -> Style {
        Style::default().fg(Self::MUTED).bg(Self::PANEL)
    }

    /// Placeholder input field
    pub fn input() -> Style {
        Style::default().fg(Self::FINE).bg(Self::PANEL)
    }

    /// Parallax plate dots
    pub fn plate_dot() -> Style {
        Style::default().fg(mix(Self::BACKGROUND, Self::PRIMARY, 0.35))
    }

    /// Parallax plate crosses
    pub fn plate_cross() -> Style {
        Style::default().fg(mix(Self::BACKGROUND, Self::SECONDARY, 0.3))
    }

    /// Backdrop gradient color at horizontal position `t` (0..=1)
    pub fn backdrop(t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        if t < 0.5 {
            mix(Self::BACKDROP_FROM, Self::BACKDROP_VIA, t * 2.0)
        } else {
            mix(Self::BACKDROP_VIA, Self::BACKDROP_TO, (t - 0.5) * 2.0)
        }
    }

    /// Placeholder image tint for a seed
    pub fn image_tint(seed: u32) -> Color {
        const TINTS: [Color; 4] = [Theme::PRIMARY, Theme::SECONDARY, Theme::ACCENT, Theme::GLOW];
        TINTS[seed as usize % TINTS.len()]
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Blend two RGB colors, `t = 0` is `a` and `t = 1` is `b`.
/// Non-RGB colors are returned unchanged (`a` below the midpoint, `b` above).
pub fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (color_to_rgb(a), color_to_rgb(b)) {
        (Some((ar, ag, ab)), Some((br, bg, bb))) => {
            let ch = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
            Color::Rgb(ch(ar, br), ch(ag, bg), ch(ab, bb))
        }
        _ if t < 0.5 => a,
        _ => b,
    }
}

/// Fade a color toward the background; `alpha = 0` is fully faded
pub fn fade(color: Color, alpha: f32) -> Color {
    mix(Theme::BACKGROUND, color, alpha)
}

/// Extract RGB tuple from ratatui Color (only works for Rgb variant)
pub fn color_to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(color: Color) -> (u8, u8, u8) {
        color_to_rgb(color).expect("Theme colors should all be RGB")
    }

    #[test]
    fn test_colors_match_palette() {
        assert_eq!(rgb(Theme::BACKGROUND), (0x06, 0x06, 0x0b));
        assert_eq!(rgb(Theme::PRIMARY), (0x7c, 0x3a, 0xed));
        assert_eq!(rgb(Theme::SECONDARY), (0x06, 0xb6, 0xd4));
        assert_eq!(rgb(Theme::ACCENT), (0xef, 0x44, 0x44));
        assert_eq!(rgb(Theme::GLOW), (0x63, 0x66, 0xf1));
        assert_eq!(rgb(Theme::BODY), (0xbf, 0xc9, 0xff));
    }

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(mix(Theme::PRIMARY, Theme::GLOW, 0.0), Theme::PRIMARY);
        assert_eq!(mix(Theme::PRIMARY, Theme::GLOW, 1.0), Theme::GLOW);
        assert_eq!(mix(Color::Reset, Theme::GLOW, 0.2), Color::Reset);
    }

    #[test]
    fn test_mix_midpoint_rounds_channels() {
        // (0x7c + 0x63) / 2 = 111.5, (0x3a + 0x66) / 2 = 80, (0xed + 0xf1) / 2 = 239
        assert_eq!(
            mix(Theme::PRIMARY, Theme::GLOW, 0.5),
            Color::Rgb(112, 80, 239)
        );
        assert_eq!(mix(Theme::PRIMARY, Theme::GLOW, 7.0), Theme::GLOW);
    }

    #[test]
    fn test_fade() {
        assert_eq!(fade(Theme::TEXT, 0.0), Theme::BACKGROUND);
        assert_eq!(fade(Theme::TEXT, 1.0), Theme::TEXT);
    }

    #[test]
    fn test_cta_brightens_with_glow() {
        let dim = Theme::cta(0.0).bg.and_then(color_to_rgb).unwrap();
        let bright = Theme::cta(1.0).bg.and_then(color_to_rgb).unwrap();
        assert_eq!(dim, rgb(Theme::PRIMARY));
        assert_eq!(bright, rgb(Theme::GLOW));
    }

    #[test]
    fn test_backdrop_gradient() {
        assert_eq!(Theme::backdrop(0.0), Theme::BACKDROP_FROM);
        assert_eq!(Theme::backdrop(0.5), Theme::BACKDROP_VIA);
        assert_eq!(Theme::backdrop(1.0), Theme::BACKDROP_TO);
    }
}
