//! Markdown summary to HTML.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

use crate::render::is_blocked;

/// Convert a markdown summary into an HTML fragment.
///
/// Headings, emphasis, lists, links, tables and strikethrough are supported.
/// Raw HTML embedded in the markdown is escaped and shown as text.
#[must_use]
pub fn markdown_to_html(md: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(md, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if is_blocked(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(md.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
