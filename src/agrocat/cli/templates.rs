//! Output templates.
//!
//! Templates live in `templates/*.tmp` as standalone minijinja files and are
//! compiled into the binary here. They are rendered with `trim_blocks` and
//! `lstrip_blocks`, so a line holding only a block tag produces no output;
//! every other line ends with exactly one newline.
//!
//! Layout math (widths, truncation, padding) happens in `render.rs`. Templates
//! only choose what to print and which semantic style to print it with.

pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const LISTING_TEMPLATE: &str = include_str!("templates/listing.tmp");
pub const ITEM_TEMPLATE: &str = include_str!("templates/item.tmp");
pub const FACETS_TEMPLATE: &str = include_str!("templates/facets.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
