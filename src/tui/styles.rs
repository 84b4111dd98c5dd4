//! Color palette and preset styles.
//!
//! Teal/slate clinical palette with semantic colors for the four risk groups.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::ScoreBand;

/// Calculator theme.
pub struct Theme;

impl Theme {
    /// Deep teal (#0D9488)
    pub const PRIMARY: Color = Color::Rgb(13, 148, 136);
    /// Light teal (#2DD4BF)
    pub const PRIMARY_LIGHT: Color = Color::Rgb(45, 212, 191);
    /// Light slate for borders (#94A3B8)
    pub const SLATE: Color = Color::Rgb(148, 163, 184);

    /// Emerald (#10B981)
    pub const SUCCESS: Color = Color::Rgb(16, 185, 129);
    /// Blue (#3B82F6)
    pub const INFO: Color = Color::Rgb(59, 130, 246);
    /// Amber (#FBBF24)
    pub const WARNING: Color = Color::Rgb(251, 191, 36);
    /// Rose (#F43F5E)
    pub const DANGER: Color = Color::Rgb(244, 63, 94);

    /// #F8FAFC
    pub const TEXT_PRIMARY: Color = Color::Rgb(248, 250, 252);
    /// #94A3B8
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);
    /// #64748B
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

    #[must_use]
    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    #[must_use]
    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn cursor() -> Style {
        Style::default().fg(Self::PRIMARY_LIGHT)
    }

    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::SLATE)
    }

    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Style for a risk group, green through rose.
    #[must_use]
    pub fn band(band: ScoreBand) -> Style {
        let color = match band {
            ScoreBand::Below5 => Self::SUCCESS,
            ScoreBand::From5To10 => Self::INFO,
            ScoreBand::From11To15 => Self::WARNING,
            ScoreBand::Above15 => Self::DANGER,
        };
        Style::default().fg(color)
    }
}
