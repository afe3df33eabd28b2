//! Design tokens for the plain-text links surface.
//!
//! All glyphs drawn by [`Rendering::to_text`](crate::Rendering::to_text)
//! are sourced from this module, with an ASCII fallback for terminals that
//! cannot draw Unicode.

pub mod icons {
    /// Marks an entry that opens a submenu
    pub const MENU: &str = "▶";
    /// Repeated to draw a separator line
    pub const RULE: &str = "─";
}

pub mod icons_ascii {
    pub const MENU: &str = "[>]";
    pub const RULE: &str = "-";
}

/// Glyph of the text surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Menu,
    Rule,
}

impl Glyph {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Glyph::Menu) => icons::MENU,
            (true, Glyph::Rule) => icons::RULE,
            (false, Glyph::Menu) => icons_ascii::MENU,
            (false, Glyph::Rule) => icons_ascii::RULE,
        }
    }
}
