//! Color schemes and styles for the light and dark themes.

use ratatui::style::{Color, Modifier, Style};

use crate::theme::ThemeMode;
use crate::view::common::RowStyleClass;

/// Color palette of one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub tab_active: Color,
    pub border: Color,
    pub warning: Color,
    pub critical: Color,
    pub key: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        bg: Color::Black,
        fg: Color::White,
        fg_dim: Color::DarkGray,
        header_bg: Color::Blue,
        header_fg: Color::White,
        selected_bg: Color::DarkGray,
        selected_fg: Color::White,
        tab_active: Color::Cyan,
        border: Color::Cyan,
        warning: Color::Yellow,
        critical: Color::Red,
        key: Color::Yellow,
    };

    pub const LIGHT: Palette = Palette {
        bg: Color::White,
        fg: Color::Black,
        fg_dim: Color::Gray,
        header_bg: Color::LightBlue,
        header_fg: Color::Black,
        selected_bg: Color::LightCyan,
        selected_fg: Color::Black,
        tab_active: Color::Blue,
        border: Color::Blue,
        warning: Color::Magenta,
        critical: Color::Red,
        key: Color::Blue,
    };

    pub fn for_mode(mode: ThemeMode) -> Palette {
        match mode {
            ThemeMode::Dark => Self::DARK,
            ThemeMode::Light => Self::LIGHT,
        }
    }
}

/// Pre-defined styles for the active palette.
#[derive(Debug, Clone, Copy)]
pub struct Styles {
    p: Palette,
}

impl Styles {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            p: Palette::for_mode(mode),
        }
    }

    /// Default text style.
    pub fn default(&self) -> Style {
        Style::default().fg(self.p.fg).bg(self.p.bg)
    }

    /// Header bar style.
    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.p.header_fg)
            .bg(self.p.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row style.
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.p.selected_fg)
            .bg(self.p.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header(&self) -> Style {
        self.header()
    }

    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.p.tab_active)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.p.fg_dim)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.p.fg_dim)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.p.border)
    }

    /// Status messages and the "fetching" marker.
    pub fn warning(&self) -> Style {
        Style::default().fg(self.p.warning)
    }

    /// Error lines.
    pub fn critical(&self) -> Style {
        Style::default()
            .fg(self.p.critical)
            .add_modifier(Modifier::BOLD)
    }

    /// Filter input style.
    pub fn filter_input(&self) -> Style {
        Style::default()
            .fg(self.p.header_fg)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Section header style for detail popups.
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.p.warning)
            .add_modifier(Modifier::BOLD)
    }

    /// Help text style.
    pub fn help(&self) -> Style {
        Style::default().fg(self.p.fg_dim)
    }

    /// Highlighted keys in help lines.
    pub fn help_key(&self) -> Style {
        Style::default().fg(self.p.key).add_modifier(Modifier::BOLD)
    }

    /// Maps a UI-agnostic [`RowStyleClass`] to a ratatui [`Style`].
    pub fn from_class(&self, class: RowStyleClass) -> Style {
        match class {
            RowStyleClass::Normal => self.default(),
            RowStyleClass::Stale => self.default().fg(self.p.fg_dim),
        }
    }
}
