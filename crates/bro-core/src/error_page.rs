//! Fallback document shown in a frame whose load failed.

use base64::prelude::*;

use crate::engine::ErrorCode;

pub const ERROR_PAGE_MIME_TYPE: &str = "text/html";

/// Render the error document for a failed load.
pub fn render(failed_url: &str, error_text: &str, error_code: ErrorCode) -> String {
    format!(
        "<html><body bgcolor=\"white\"><h2>Failed to load URL {} with error {} ({}).</h2></body></html>",
        escape_html(failed_url),
        escape_html(error_text),
        error_code
    )
}

/// Build an inline `data:` URI: base64 body, then percent-encoded so the
/// URI survives the engine's URL parser.
pub fn data_uri(data: &str, mime_type: &str) -> String {
    let encoded = BASE64_STANDARD.encode(data.as_bytes());
    format!("data:{mime_type};base64,{}", urlencoding::encode(&encoded))
}

/// The `data:` URI that loads the error document.
pub fn error_page_uri(failed_url: &str, error_text: &str, error_code: ErrorCode) -> String {
    data_uri(&render(failed_url, error_text, error_code), ERROR_PAGE_MIME_TYPE)
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(uri: &str) -> String {
        let payload = uri
            .strip_prefix("data:text/html;base64,")
            .expect("text/html base64 data uri");
        let base64 = urlencoding::decode(payload).unwrap();
        String::from_utf8(BASE64_STANDARD.decode(base64.as_bytes()).unwrap()).unwrap()
    }

    #[test]
    fn document_names_url_text_and_code() {
        let html = render("https://x", "ERR", ErrorCode(-105));
        assert_eq!(
            html,
            "<html><body bgcolor=\"white\"><h2>Failed to load URL https://x with error ERR (-105).</h2></body></html>"
        );
    }

    #[test]
    fn uri_round_trips_to_the_document() {
        let uri = error_page_uri("https://x", "ERR", ErrorCode(-105));
        let body = decode(&uri);
        assert!(body.contains("https://x"));
        assert!(body.contains("ERR"));
        assert!(body.contains("-105"));
    }

    #[test]
    fn base64_padding_is_percent_encoded() {
        // 4 bytes -> "YWJjZA==", padding must not appear raw.
        let uri = data_uri("abcd", "text/plain");
        assert_eq!(uri, "data:text/plain;base64,YWJjZA%3D%3D");
    }

    #[test]
    fn markup_in_url_is_escaped() {
        let html = render("https://x/<script>", "A&B", ErrorCode(-2));
        assert!(html.contains("https://x/&lt;script&gt;"));
        assert!(html.contains("A&amp;B"));
        assert!(!html.contains("<script>"));
    }
}
