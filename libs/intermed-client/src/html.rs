//! Unwrapping of JSON payloads the portal delivers inside an HTML document.
//!
//! The endpoints declare `application/json` but the body frequently arrives as
//! `<html><head></head><body>{...}</body></html>`. The payload is the text
//! content of the `<body>` element. Responses without a body element are
//! passed through unchanged.

use std::borrow::Cow;

/// Extract the text content of the `<body>` element, or the whole input when
/// there is none.
///
/// # Examples
/// ```
/// use intermed_client::html::extract_body_text;
/// assert_eq!(extract_body_text("<html><body>{\"a\":1}</body></html>"), "{\"a\":1}");
/// assert_eq!(extract_body_text("  [1,2]  "), "[1,2]");
/// ```
pub fn extract_body_text(document: &str) -> String {
    let Some(inner) = body_inner(document) else {
        return document.trim().to_string();
    };

    let text = strip_tags(inner);
    html_escape::decode_html_entities(&text).trim().to_string()
}

/// Slice between `<body ...>` and `</body>`. Missing close tag runs to the end.
fn body_inner(document: &str) -> Option<&str> {
    // ASCII lowering keeps byte offsets aligned with `document`
    let lower = document.to_ascii_lowercase();

    let open = find_open_tag(&lower, "body")?;
    let content_start = lower[open..].find('>').map(|i| open + i + 1)?;
    let content_end = lower[content_start..]
        .rfind("</body")
        .map(|i| content_start + i)
        .unwrap_or(document.len());

    Some(&document[content_start..content_end])
}

fn find_open_tag(lower: &str, name: &str) -> Option<usize> {
    let needle = format!("<{}", name);
    let mut from = 0;
    while let Some(pos) = lower[from..].find(&needle) {
        let start = from + pos;
        let after = start + needle.len();
        match lower[after..].chars().next() {
            Some(c) if c == '>' || c == '/' || c.is_ascii_whitespace() => return Some(start),
            None => return None,
            _ => from = after,
        }
    }
    None
}

/// Drop markup. A `<` only opens a tag when followed by a letter, `/`, `!` or
/// `?`; any other `<` is text, as in HTML5 tokenization.
fn strip_tags(fragment: &str) -> Cow<'_, str> {
    if !fragment.contains('<') {
        return Cow::Borrowed(fragment);
    }

    let mut out = String::with_capacity(fragment.len());
    let mut in_tag = false;
    let mut chars = fragment.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            '<' if chars.peek().is_some_and(|&n| opens_tag(n)) => in_tag = true,
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn opens_tag(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_json_from_wrapped_document() {
        let doc = r#"<html><head><title></title></head><body>{"GetPatientInfoResponse":{"Session_ID":"S1"}}</body></html>"#;
        assert_eq!(
            extract_body_text(doc),
            r#"{"GetPatientInfoResponse":{"Session_ID":"S1"}}"#
        );
    }

    #[test]
    fn test_decodes_entities() {
        let doc = "<body>{&quot;name&quot;:&quot;A &amp; B&quot;}</body>";
        assert_eq!(extract_body_text(doc), r#"{"name":"A & B"}"#);
    }

    #[test]
    fn test_body_with_attributes_and_nested_tags() {
        let doc = "<HTML><BODY class=\"x\">\n  <pre>[1, 2]</pre>\n</BODY></HTML>";
        assert_eq!(extract_body_text(doc), "[1, 2]");
    }

    #[test]
    fn test_unclosed_body_runs_to_end() {
        assert_eq!(extract_body_text("<html><body>{}"), "{}");
    }

    #[test]
    fn test_raw_json_passes_through() {
        assert_eq!(extract_body_text("\n{\"a\":\"<b>\"}\n"), "{\"a\":\"<b>\"}");
    }

    #[test]
    fn test_ignores_lookalike_tags() {
        let doc = "<bodyguard>x</bodyguard><body>42</body>";
        assert_eq!(extract_body_text(doc), "42");
    }

    #[test]
    fn test_preserves_cyrillic_text() {
        let doc = "<body>{\"Resource_Name\":\"Иванов И.И.\"}</body>";
        assert_eq!(extract_body_text(doc), "{\"Resource_Name\":\"Иванов И.И.\"}");
    }

    #[test]
    fn test_bare_less_than_is_text() {
        let doc = r#"<html><body>{"GetResourceInfoResponse":{"Error":{"errorDetail":{"errorCode":0,"errorMessage":"a < b"}}}}</body></html>"#;
        let text = extract_body_text(doc);
        assert_eq!(
            text,
            r#"{"GetResourceInfoResponse":{"Error":{"errorDetail":{"errorCode":0,"errorMessage":"a < b"}}}}"#
        );
        assert!(serde_json::from_str::<serde_json::Value>(&text).is_ok());
    }

    #[test]
    fn test_less_than_before_digit_is_text() {
        assert_eq!(extract_body_text("<body>{\"n\":\"<5\"}</body>"), "{\"n\":\"<5\"}");
    }
}
