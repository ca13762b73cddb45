//! Named terminal styles shared by templates and message printing.
//!
//! Templates refer to styles by semantic name through the `style` filter (see
//! `render.rs`); the actual colors live only here. Severity tiers reuse the color
//! names of [`caremate::severity::SeverityColor`], so a badge is styled by its tier.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Shown in front of text styled with an unknown name, to catch template typos.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const TITLE: &str = "title";
    pub const SUBTITLE: &str = "subtitle";
    pub const SECTION: &str = "section";
    pub const GROUP: &str = "group";
    pub const INDEX: &str = "index";
    pub const MUTED: &str = "muted";
    pub const NOTES: &str = "notes";
    pub const PROGRESS: &str = "progress";
    pub const CURRENT: &str = "current";
    // Severity tiers
    pub const YELLOW: &str = "yellow";
    pub const ORANGE: &str = "orange";
    pub const RED: &str = "red";
    pub const GRAY: &str = "gray";
}

pub static CAREMATE_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    let muted = Style::new().color256(245);
    HashMap::from([
        (names::TITLE, Style::new().bold().cyan()),
        (names::SUBTITLE, muted.clone().italic()),
        (names::SECTION, Style::new().bold()),
        (names::GROUP, Style::new().underlined()),
        (names::INDEX, Style::new().color256(178)),
        (names::MUTED, muted.clone()),
        (names::NOTES, muted.italic()),
        (names::PROGRESS, Style::new().blue()),
        (names::CURRENT, Style::new().bold().blue()),
        (names::YELLOW, Style::new().color256(178)),
        (names::ORANGE, Style::new().color256(208)),
        (names::RED, Style::new().red().bold()),
        (names::GRAY, Style::new().color256(245)),
    ])
});

/// Applies a named style. With `use_color == false` only the lookup is checked.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match CAREMATE_THEME.get(name) {
        Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
        Some(_) => text.to_string(),
        None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
    }
}
