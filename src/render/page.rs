//! Page shell shared by both routes.

use crate::render::chat::render_chat_section;
use crate::render::escape_html;
use crate::render::summary::render_summary_section;
use crate::views::summarizer::SEARCH_PENDING_LABEL;
use crate::views::{ChatView, SummarizerView};

/// Third-party embed widget loader.
const WIDGETS_SRC: &str = "https://platform.twitter.com/widgets.js";

const STYLE: &str = r"
body { font-family: system-ui, sans-serif; max-width: 46rem; margin: 0 auto; padding: 1rem; }
nav a { margin-right: 1rem; }
nav a.active { font-weight: bold; }
form { display: flex; gap: .5rem; margin: 1rem 0; }
form input { flex: 1; padding: .4rem; }
.post { border-top: 1px solid #ddd; padding: .5rem 0; }
.post-media img, .post-media video { max-width: 100%; display: block; margin: .5rem 0; }
.summary-meta, .summary-note { color: #666; font-size: .9rem; }
.transcript { padding-left: 1.2rem; }
";

/// Head script: queues widget loads until the loader is ready and disables
/// a form's button as soon as it is submitted.
const SCRIPT: &str = r#"
window.twttr = window.twttr || { _e: [], ready: function (f) { this._e.push(f); } };
function trendlensLoadEmbeds(id) {
  twttr.ready(function (t) {
    var el = document.getElementById(id);
    if (el && t.widgets) { t.widgets.load(el); }
  });
}
document.addEventListener("DOMContentLoaded", function () {
  document.querySelectorAll("form[data-pending-label]").forEach(function (form) {
    form.addEventListener("submit", function () {
      var button = form.querySelector("button");
      button.disabled = true;
      button.textContent = form.dataset.pendingLabel;
    });
  });
});
"#;

/// The two navigable pages.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PageKind {
    /// Summary only.
    Summarizer,
    /// Summary plus follow-up chat.
    Combined,
}

impl PageKind {
    /// Route of the page; searches are posted to the same path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Summarizer => "/",
            Self::Combined => "/chat",
        }
    }

    /// Route questions are posted to (combined page only).
    #[must_use]
    pub const fn ask_path(self) -> Option<&'static str> {
        match self {
            Self::Summarizer => None,
            Self::Combined => Some("/chat/ask"),
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Summarizer => "Summarizer",
            Self::Combined => "Summarize & Chat",
        }
    }
}

/// Render a full HTML document for `kind`.
///
/// `chat` is only consulted for [`PageKind::Combined`].
#[must_use]
pub fn render_page(kind: PageKind, summarizer: &SummarizerView, chat: Option<&ChatView>) -> String {
    let mut html = String::from("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    html.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    html.push_str(&format!("<title>trendlens - {}</title>", kind.title()));
    html.push_str(&format!("<style>{STYLE}</style><script>{SCRIPT}</script>"));
    html.push_str(&format!(
        r#"<script async src="{WIDGETS_SRC}" charset="utf-8"></script></head><body>"#
    ));

    html.push_str(&render_nav(kind));
    html.push_str(&format!("<h1>{}</h1>", kind.title()));
    html.push_str(&render_search_form(kind, summarizer));
    html.push_str(&render_summary_section(summarizer));

    if let (Some(ask_path), Some(chat)) = (kind.ask_path(), chat) {
        html.push_str(&render_chat_section(chat, summarizer.has_summary(), ask_path));
    }

    html.push_str("</body></html>");
    html
}

fn render_nav(active: PageKind) -> String {
    let mut html = String::from("<nav>");
    for kind in [PageKind::Summarizer, PageKind::Combined] {
        let class = if kind == active { r#" class="active""# } else { "" };
        html.push_str(&format!(r#"<a href="{}"{class}>{}</a>"#, kind.path(), kind.title()));
    }
    html.push_str("</nav>");
    html
}

fn render_search_form(kind: PageKind, view: &SummarizerView) -> String {
    let disabled = if view.is_pending() { " disabled" } else { "" };
    format!(
        r#"<form method="post" action="{}" data-pending-label="{SEARCH_PENDING_LABEL}"><input type="text" name="query" placeholder="Enter a topic" value="{}"{disabled}><button type="submit"{disabled}>{}</button></form>"#,
        kind.path(),
        escape_html(view.query()),
        view.button_label()
    )
}
