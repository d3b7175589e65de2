//! Styles for the agrocat CLI.
//!
//! Templates refer to styles by semantic name (`title`, `price`, `muted`)
//! through the `style` filter; the [`Theme`] maps each name to a
//! `console::Style`. A name that is not registered renders with a `(!?)`
//! prefix so typos in templates show up immediately, with or without color.

use std::collections::HashMap;

use console::Style;
use once_cell::sync::Lazy;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const TITLE: &str = "title";
    pub const HEADER: &str = "header";
    pub const ID: &str = "id";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const PRICE: &str = "price";
    pub const FREE: &str = "free";
    pub const RATING: &str = "rating";
    pub const BADGE: &str = "badge";
    pub const HIGHLIGHT: &str = "highlight";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A collection of named styles.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Styled text, or the text prefixed with the missing indicator.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self.styles.get(name) {
            Some(style) => style.apply_to(text).force_styling(true).to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }

    /// Plain text, still flagging unknown style names.
    pub fn apply_plain(&self, name: &str, text: &str) -> String {
        if self.styles.contains_key(name) {
            text.to_string()
        } else {
            format!("{} {}", MISSING_STYLE_INDICATOR, text)
        }
    }

    #[cfg(test)]
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

pub static AGROCAT_THEME: Lazy<Theme> = Lazy::new(|| {
    let grey = Style::new().color256(rgb_to_ansi256((138, 138, 138)));
    let soil = Style::new().color256(rgb_to_ansi256((175, 135, 0)));
    let leaf = Style::new().color256(rgb_to_ansi256((95, 175, 0)));

    Theme::new()
        .add(names::TITLE, Style::new().bold())
        .add(names::HEADER, leaf.clone().bold())
        .add(names::ID, soil.clone())
        .add(names::MUTED, grey.clone())
        .add(names::FAINT, grey.dim())
        .add(names::PRICE, Style::new())
        .add(names::FREE, leaf.clone())
        .add(names::RATING, Style::new().yellow())
        .add(names::BADGE, leaf.italic())
        .add(names::HIGHLIGHT, Style::new().black().on_yellow())
        .add(names::ERROR, Style::new().red())
        .add(names::WARNING, Style::new().yellow())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, Style::new())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_is_registered() {
        for name in [
            names::TITLE,
            names::HEADER,
            names::ID,
            names::MUTED,
            names::FAINT,
            names::PRICE,
            names::FREE,
            names::RATING,
            names::BADGE,
            names::HIGHLIGHT,
            names::ERROR,
            names::WARNING,
            names::SUCCESS,
            names::INFO,
        ] {
            assert!(AGROCAT_THEME.has(name), "{} missing", name);
        }
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(AGROCAT_THEME.apply_plain("titel", "Miel"), "(!?) Miel");
        assert!(AGROCAT_THEME.apply("titel", "Miel").starts_with("(!?)"));
    }

    #[test]
    fn known_style_in_plain_mode_is_untouched() {
        assert_eq!(AGROCAT_THEME.apply_plain(names::TITLE, "Miel"), "Miel");
    }

    #[test]
    fn known_style_with_color_emits_ansi() {
        let styled = AGROCAT_THEME.apply(names::ERROR, "oops");
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("oops"));
    }

    #[test]
    fn grey_maps_to_greyscale_ramp() {
        assert!(rgb_to_ansi256((138, 138, 138)) >= 232);
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
    }
}
