//! Terminal output templates.
//!
//! Templates live as standalone files next to this module and are embedded at
//! compile time. They are rendered with `trim_blocks` and `lstrip_blocks` on, so a
//! line whose last token is a block tag emits no newline of its own; blank lines in a
//! template are therefore explicit. Layout math (truncation, padding) is done in Rust
//! before rendering, and styles are applied by name through the `style` filter.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const STATUS_TEMPLATE: &str = include_str!("templates/status.tmp");
pub const TIPS_TEMPLATE: &str = include_str!("templates/tips.tmp");
pub const SUGGESTIONS_TEMPLATE: &str = include_str!("templates/suggestions.tmp");
