//! Form front-end
//!
//! A single self-contained page: the form posts JSON to `/api/build-app`
//! and renders whatever `BuildResponse` comes back.

use crate::BuildRequest;

use axum::response::Html;

const FORM_TEMPLATE: &str = include_str!("../static/build_form.html");
const EXAMPLE_PAYLOAD_PLACEHOLDER: &str = "{{EXAMPLE_PAYLOAD}}";

/// GET /
pub async fn build_form() -> Html<String> {
    Html(render_form())
}

/// The form page with the example payload filled in
pub fn render_form() -> String {
    FORM_TEMPLATE.replace(EXAMPLE_PAYLOAD_PLACEHOLDER, &escape_html(&example_payload()))
}

/// Pretty-printed request body shown as endpoint documentation
pub fn example_payload() -> String {
    let example = BuildRequest {
        task: Some("Build a landing page".to_string()),
        plan: Some("Detailed requirements...".to_string()),
        webhook_url: Some("https://your-webhook.com/callback".to_string()),
    };

    serde_json::to_string_pretty(&example).unwrap_or_default()
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
