//! Summary section: rendered markdown plus the related posts.

use crate::model::{MediaKind, PostReference};
use crate::render::{escape_html, is_blocked, markdown_to_html};
use crate::views::SummarizerView;

/// Fallback text inside `<video>` for browsers without video support.
const VIDEO_FALLBACK_TEXT: &str = "Your browser does not support the video tag.";

/// DOM id of the summary container for the displayed search.
#[must_use]
pub fn container_id(view: &SummarizerView) -> String {
    format!("summary-{}", view.generation())
}

/// Render the summary section, or nothing while there is no summary.
#[must_use]
pub fn render_summary_section(view: &SummarizerView) -> String {
    if !view.has_summary() {
        return String::new();
    }

    let id = container_id(view);
    let mut html = format!(r#"<section class="summary" id="{id}">"#);

    html.push_str(r#"<div class="summary-text">"#);
    html.push_str(&markdown_to_html(view.summary()));
    html.push_str("</div>");

    if let Some(count) = view.tweets_fetched() {
        html.push_str(&format!(
            r#"<p class="summary-meta">Based on {count} post{}.</p>"#,
            if count == 1 { "" } else { "s" }
        ));
    }
    if let Some(note) = view.backend_note() {
        html.push_str(&format!(r#"<p class="summary-note">{}</p>"#, escape_html(note)));
    }

    let mut embeds = 0usize;
    if !view.posts().is_empty() {
        html.push_str(r#"<h2>Top posts</h2><div class="posts">"#);
        for (index, post) in view.posts().iter().enumerate() {
            if embed_id(post).is_some() {
                embeds += 1;
            }
            html.push_str(&render_post(post, &view.post_key(index)));
        }
        html.push_str("</div>");
    }

    // Widgets are (re)loaded for this container only, after it is in the DOM.
    if embeds > 0 {
        html.push_str(&format!(r#"<script>trendlensLoadEmbeds("{id}");</script>"#));
    }

    html.push_str("</section>");
    html
}

/// Post id to embed, if the post has one and its URL is safe to link.
fn embed_id(post: &PostReference) -> Option<&str> {
    if is_blocked(&post.source_url) {
        return None;
    }
    post.post_id()
}

/// Render one post: the embed (or a plain link), its text and its media.
///
/// A source URL with a script scheme is shown as text, never linked.
#[must_use]
pub fn render_post(post: &PostReference, key: &str) -> String {
    let url = escape_html(&post.source_url);
    let mut html = format!(r#"<article class="post" data-key="{}">"#, escape_html(key));

    if is_blocked(&post.source_url) {
        html.push_str(&format!(r#"<span class="post-link">{url}</span>"#));
    } else {
        match post.post_id() {
            Some(id) => html.push_str(&format!(
                r#"<blockquote class="twitter-tweet" data-post-id="{}"><a href="{url}">{url}</a></blockquote>"#,
                escape_html(id)
            )),
            None => html.push_str(&format!(r#"<a class="post-link" href="{url}">{url}</a>"#)),
        }
    }

    if let Some(text) = &post.text {
        html.push_str(&format!(r#"<p class="post-text">{}</p>"#, escape_html(text)));
    }

    if !post.media.is_empty() {
        html.push_str(r#"<div class="post-media">"#);
        for (kind, media_url) in post.media_items() {
            html.push_str(&render_media(kind, media_url));
        }
        html.push_str("</div>");
    }

    html.push_str("</article>");
    html
}

/// Render a single media attachment; URLs with a script scheme render nothing.
#[must_use]
pub fn render_media(kind: MediaKind, url: &str) -> String {
    if is_blocked(url) {
        tracing::debug!("Skipping media with blocked scheme");
        return String::new();
    }
    let src = escape_html(url);
    match kind {
        MediaKind::Image => format!(r#"<img src="{src}" alt="Post media" loading="lazy">"#),
        MediaKind::Video => format!(
            r#"<video controls preload="metadata"><source src="{src}" type="video/mp4">{VIDEO_FALLBACK_TEXT}</video>"#
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::api::{SummarizeResponse, TweetDto};

    fn view_with(response: SummarizeResponse) -> SummarizerView {
        let mut view = SummarizerView::new();
        let ticket = view.begin("AI");
        view.complete(&ticket, Ok(response));
        view
    }

    #[test]
    fn test_nothing_without_summary() {
        assert_eq!(render_summary_section(&SummarizerView::new()), "");
    }

    #[test]
    fn test_end_to_end_ai_example() {
        let view = view_with(SummarizeResponse {
            summary: Some("# AI\nShort overview.".to_string()),
            top_tweets: Some(vec![TweetDto {
                tweet_url: "https://x.com/u/status/999".to_string(),
                media: Some(vec!["https://cdn/x.png".to_string()]),
                text: None,
            }]),
            ..SummarizeResponse::default()
        });

        let html = render_summary_section(&view);
        assert!(html.contains("<h1>AI</h1>"));
        assert_eq!(html.matches(r#"class="twitter-tweet""#).count(), 1);
        assert!(html.contains(r#"data-post-id="999""#));
        assert_eq!(html.matches("<img ").count(), 1);
        assert!(html.contains(r#"<img src="https://cdn/x.png""#));
        assert!(!html.contains("<video"));
        assert!(html.contains(r#"trendlensLoadEmbeds("summary-1")"#));
    }

    #[test]
    fn test_video_has_single_fallback_source() {
        let html = render_media(MediaKind::Video, "https://cdn/clip.mp4");
        assert_eq!(html.matches("<source ").count(), 1);
        assert!(html.contains(r#"src="https://cdn/clip.mp4""#));
        assert!(html.contains(VIDEO_FALLBACK_TEXT));
    }

    #[test]
    fn test_post_without_id_is_a_plain_link() {
        let post = PostReference::new("https://x.com/u/status/");
        let html = render_post(&post, "1-#0");
        assert!(html.contains(r#"class="post-link""#));
        assert!(!html.contains("twitter-tweet"));
    }

    #[test]
    fn test_no_embed_script_without_embeds() {
        let view = view_with(SummarizeResponse {
            summary: Some("text".to_string()),
            tweets_fetched: Some(1),
            ..SummarizeResponse::default()
        });
        let html = render_summary_section(&view);
        assert!(!html.contains("<script>"));
        assert!(html.contains("Based on 1 post."));
    }

    #[test]
    fn test_post_text_is_escaped() {
        let mut post = PostReference::new("https://x.com/u/status/1");
        post.text = Some("<b>hi</b>".to_string());
        let html = render_post(&post, "k");
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
    }

    #[test]
    fn test_script_urls_are_never_linked() {
        let mut post = PostReference::new("javascript:alert(document.cookie)//1");
        post.media = vec![
            "javascript:alert(1)//x.png".to_string(),
            " data:video/mp4;base64,AAAA.mp4".to_string(),
            "https://cdn/ok.jpg".to_string(),
        ];
        let html = render_post(&post, "1-1");

        assert!(!html.contains("href=\"javascript"));
        assert!(!html.contains("src=\"javascript"));
        assert!(!html.contains("src=\" data:"));
        assert!(!html.contains("twitter-tweet"));
        assert!(html.contains(r#"<span class="post-link">javascript:alert(document.cookie)//1</span>"#));
        assert_eq!(html.matches("<img ").count(), 1);
        assert!(!html.contains("<video"));
    }

    #[test]
    fn test_blocked_post_does_not_load_embeds() {
        let view = view_with(SummarizeResponse {
            summary: Some("text".to_string()),
            top_tweets: Some(vec![TweetDto {
                tweet_url: "javascript:alert(1)//999".to_string(),
                media: None,
                text: None,
            }]),
            ..SummarizeResponse::default()
        });
        let html = render_summary_section(&view);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("href=\"javascript"));
    }
}
