//! Chat section: transcript and question form.

use crate::render::escape_html;
use crate::views::ChatView;
use crate::views::chat::ASK_PENDING_LABEL;

/// Render the chat section posting to `action`, or nothing without a summary.
#[must_use]
pub fn render_chat_section(view: &ChatView, has_summary: bool, action: &str) -> String {
    if !has_summary {
        return String::new();
    }

    let mut html = String::from(r#"<section class="chat"><h2>Ask about this summary</h2>"#);

    if !view.transcript().is_empty() {
        html.push_str(r#"<ol class="transcript">"#);
        for turn in view.transcript() {
            html.push_str(&format!(
                r#"<li class="turn"><p class="question"><strong>Q:</strong> {}</p><p class="answer"><strong>A:</strong> {}</p></li>"#,
                escape_html(&turn.question),
                escape_html(&turn.answer)
            ));
        }
        html.push_str("</ol>");
    }

    let disabled = if view.is_pending() { " disabled" } else { "" };
    html.push_str(&format!(
        r#"<form method="post" action="{}" data-pending-label="{ASK_PENDING_LABEL}"><input type="text" name="question" placeholder="Ask a question about the summary" value="{}"{disabled}><button type="submit"{disabled}>{}</button></form>"#,
        escape_html(action),
        escape_html(view.draft()),
        view.button_label()
    ));

    html.push_str("</section>");
    html
}
