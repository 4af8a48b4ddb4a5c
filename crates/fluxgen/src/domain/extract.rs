//! Image URL Extraction Policy
//!
//! The upstream model replies with free-form text: sometimes a bare
//! image URL, sometimes a URL buried in prose, sometimes nothing
//! usable. This module isolates the extraction rules as a pure
//! function so they can be tested without any networking.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches an http(s) URL ending in a supported image extension.
static IMAGE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)https?://\S+\.(?:jpg|jpeg|png|webp|gif)").expect("image URL pattern compiles")
});

/// Extract an image URL from free-form reply content.
///
/// Policy, in order:
/// 1. The first substring matching an image URL pattern.
/// 2. Otherwise, if the content itself starts with `http`, the whole
///    content is treated as the URL.
/// 3. Otherwise, no URL is found.
pub fn extract_image_url(content: &str) -> Option<String> {
    if let Some(m) = IMAGE_URL_RE.find(content) {
        return Some(m.as_str().to_string());
    }

    if content.starts_with("http") {
        return Some(content.to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_url_is_returned_verbatim() {
        let content = "https://cdn.example.com/out.png";
        assert_eq!(extract_image_url(content), Some(content.to_string()));
    }

    #[test]
    fn embedded_url_is_extracted_from_surrounding_text() {
        let content = "Here: https://cdn.example.com/img123.png enjoy";
        assert_eq!(
            extract_image_url(content),
            Some("https://cdn.example.com/img123.png".to_string())
        );
    }

    #[test]
    fn first_of_multiple_urls_wins() {
        let content = "https://a.example.com/1.jpg then https://b.example.com/2.png";
        assert_eq!(
            extract_image_url(content),
            Some("https://a.example.com/1.jpg".to_string())
        );
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let content = "result at HTTPS://CDN.EXAMPLE.COM/OUT.PNG today";
        assert_eq!(
            extract_image_url(content),
            Some("HTTPS://CDN.EXAMPLE.COM/OUT.PNG".to_string())
        );
    }

    #[test]
    fn content_starting_with_http_is_taken_whole() {
        // No supported extension, so the pattern cannot match, but the
        // content itself looks like a URL.
        let content = "https://images.example.com/render/550e8400";
        assert_eq!(extract_image_url(content), Some(content.to_string()));
    }

    #[test]
    fn prose_without_url_yields_none() {
        assert_eq!(extract_image_url("I could not generate an image."), None);
        assert_eq!(extract_image_url(""), None);
    }

    #[test]
    fn all_supported_extensions_match() {
        for ext in ["jpg", "jpeg", "png", "webp", "gif"] {
            let content = format!("see http://example.com/pic.{ext} now");
            assert_eq!(
                extract_image_url(&content),
                Some(format!("http://example.com/pic.{ext}"))
            );
        }
    }
}
