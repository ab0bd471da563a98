//! HTML rendering of the pages.
//!
//! Views are plain state; everything here is a pure function from that state
//! to markup, so each GET re-renders the page from scratch.

pub mod chat;
pub mod markdown;
pub mod page;
pub mod summary;

pub use markdown::markdown_to_html;
pub use page::{PageKind, render_page};

/// URL schemes a rendered link or media source may not point at.
const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Whether `url` uses a scheme that must never reach an `href` or `src`.
#[must_use]
pub fn is_blocked(url: &str) -> bool {
    let lowered = url.trim_start().to_ascii_lowercase();
    BLOCKED_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme))
}

/// Escape text for use in HTML element content or a quoted attribute.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
