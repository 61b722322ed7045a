//! Content validation
//!
//! Confirms a reconciled document matches the expected shape and field
//! constraints before it is trusted by consumers or written to storage.
//! Every violation is collected, not just the first; callers on the write
//! path abort on any violation, while the read path logs and serves the
//! document anyway.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use super::model::SiteContent;
use super::{ABOUT_STAT_COUNT, INFO_CARD_COUNT};

lazy_static! {
    static ref URL_RE: Regex = Regex::new(r"^https?://\S+$").unwrap();
    // Absolute URL, site-relative path, or in-page anchor
    static ref LINK_RE: Regex = Regex::new(r"^(https?://\S+|/\S*|#\S*)$").unwrap();
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Dotted path of the offending field, e.g. `tourDates[2].ticketUrl`
    pub path: String,
    pub message: String,
}

impl Violation {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Validate a candidate document
///
/// Returns the typed content on success, or the full list of violations.
/// Never panics, whatever the input shape.
pub fn validate_document(doc: &Value) -> Result<SiteContent, Vec<Violation>> {
    let mut out = Vec::new();

    if !doc.is_object() {
        return Err(vec![Violation::new("", "document must be an object")]);
    }

    require_text(doc, "artistName", "artistName", &mut out);
    require_text(doc, "artistTagline", "artistTagline", &mut out);
    require_text(doc, "artistBio", "artistBio", &mut out);

    require_image(doc, "heroImage", "heroImage", &mut out);
    require_image(doc, "artistImage", "artistImage", &mut out);
    require_image(doc, "tourImage", "tourImage", &mut out);

    if let Some(ctas) = object_at(doc, "heroCtas", "heroCtas", &mut out) {
        require_link(ctas, "listenNow", "heroCtas.listenNow", &mut out);
        require_link(ctas, "upcomingShows", "heroCtas.upcomingShows", &mut out);
    }

    if let Some(cards) = array_at(doc, "infoCards", "infoCards", &mut out) {
        if cards.len() != INFO_CARD_COUNT {
            out.push(Violation::new(
                "infoCards",
                format!("must contain exactly {INFO_CARD_COUNT} cards"),
            ));
        }
        for (i, card) in cards.iter().enumerate() {
            require_text(card, "label", &format!("infoCards[{i}].label"), &mut out);
            require_text(card, "value", &format!("infoCards[{i}].value"), &mut out);
            require_text(card, "icon", &format!("infoCards[{i}].icon"), &mut out);
        }
    }

    if let Some(stats) = array_at(doc, "aboutStats", "aboutStats", &mut out) {
        if stats.len() != ABOUT_STAT_COUNT {
            out.push(Violation::new(
                "aboutStats",
                format!("must contain exactly {ABOUT_STAT_COUNT} stats"),
            ));
        }
        for (i, stat) in stats.iter().enumerate() {
            require_text(stat, "label", &format!("aboutStats[{i}].label"), &mut out);
            require_text(stat, "value", &format!("aboutStats[{i}].value"), &mut out);
            require_text(stat, "icon", &format!("aboutStats[{i}].icon"), &mut out);
        }
    }

    for list in ["musicLinks", "socialLinks"] {
        if let Some(links) = array_at(doc, list, list, &mut out) {
            for (i, link) in links.iter().enumerate() {
                require_text(link, "platform", &format!("{list}[{i}].platform"), &mut out);
                require_url(link, "url", &format!("{list}[{i}].url"), &mut out);
                require_text(link, "icon", &format!("{list}[{i}].icon"), &mut out);
            }
        }
    }

    if let Some(links) = array_at(doc, "navLinks", "navLinks", &mut out) {
        for (i, link) in links.iter().enumerate() {
            require_link(link, "href", &format!("navLinks[{i}].href"), &mut out);
            require_text(link, "label", &format!("navLinks[{i}].label"), &mut out);
        }
    }

    if let Some(dates) = array_at(doc, "tourDates", "tourDates", &mut out) {
        for (i, date) in dates.iter().enumerate() {
            require_text(date, "date", &format!("tourDates[{i}].date"), &mut out);
            require_text(date, "venue", &format!("tourDates[{i}].venue"), &mut out);
            require_text(date, "city", &format!("tourDates[{i}].city"), &mut out);
            require_url(date, "ticketUrl", &format!("tourDates[{i}].ticketUrl"), &mut out);
        }
    }

    if let Some(items) = array_at(doc, "galleryItems", "galleryItems", &mut out) {
        for (i, item) in items.iter().enumerate() {
            require_string(item, "id", &format!("galleryItems[{i}].id"), &mut out);
            require_text(item, "title", &format!("galleryItems[{i}].title"), &mut out);
            require_text(
                item,
                "description",
                &format!("galleryItems[{i}].description"),
                &mut out,
            );
            require_image(item, "image", &format!("galleryItems[{i}].image"), &mut out);
        }
    }

    if let Some(videos) = array_at(doc, "youtubeVideos", "youtubeVideos", &mut out) {
        for (i, video) in videos.iter().enumerate() {
            require_string(video, "id", &format!("youtubeVideos[{i}].id"), &mut out);
            require_url(video, "url", &format!("youtubeVideos[{i}].url"), &mut out);
            require_text(video, "title", &format!("youtubeVideos[{i}].title"), &mut out);
        }
    }

    if let Some(reels) = array_at(doc, "instagramReels", "instagramReels", &mut out) {
        for (i, reel) in reels.iter().enumerate() {
            require_string(reel, "id", &format!("instagramReels[{i}].id"), &mut out);
            require_url(reel, "url", &format!("instagramReels[{i}].url"), &mut out);
            require_text(reel, "caption", &format!("instagramReels[{i}].caption"), &mut out);
        }
    }

    if let Some(quotes) = array_at(doc, "testimonials", "testimonials", &mut out) {
        for (i, quote) in quotes.iter().enumerate() {
            require_string(quote, "id", &format!("testimonials[{i}].id"), &mut out);
            require_text(quote, "quote", &format!("testimonials[{i}].quote"), &mut out);
            require_text(quote, "author", &format!("testimonials[{i}].author"), &mut out);
            require_text(quote, "source", &format!("testimonials[{i}].source"), &mut out);
        }
    }

    require_url(doc, "featuredVideoUrl", "featuredVideoUrl", &mut out);
    require_link(doc, "startListeningUrl", "startListeningUrl", &mut out);
    require_link(doc, "pressKitUrl", "pressKitUrl", &mut out);

    if let Some(contact) = object_at(doc, "contact", "contact", &mut out) {
        require_email(contact, "email", "contact.email", &mut out);
        require_text(contact, "phone", "contact.phone", &mut out);
        require_text(contact, "location", "contact.location", &mut out);
    }

    if !out.is_empty() {
        return Err(out);
    }

    // Field checks passed; the typed decode should follow. A failure here
    // means a constraint the walker does not model yet.
    serde_json::from_value::<SiteContent>(doc.clone())
        .map_err(|e| vec![Violation::new("", format!("document does not match schema: {e}"))])
}

fn string_value<'a>(
    parent: &'a Value,
    key: &str,
    label: &str,
    out: &mut Vec<Violation>,
) -> Option<&'a str> {
    match parent.get(key) {
        None | Some(Value::Null) => {
            out.push(Violation::new(label, "is required"));
            None
        }
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            out.push(Violation::new(label, "must be a string"));
            None
        }
    }
}

/// Field must be a string (empty allowed, e.g. generated ids)
fn require_string(parent: &Value, key: &str, label: &str, out: &mut Vec<Violation>) {
    let _ = string_value(parent, key, label, out);
}

/// Field must be a non-empty string
fn require_text(parent: &Value, key: &str, label: &str, out: &mut Vec<Violation>) {
    if let Some(s) = string_value(parent, key, label, out) {
        if s.trim().is_empty() {
            out.push(Violation::new(label, "must not be empty"));
        }
    }
}

/// Field must be an absolute http(s) URL
fn require_url(parent: &Value, key: &str, label: &str, out: &mut Vec<Violation>) {
    if let Some(s) = string_value(parent, key, label, out) {
        if !URL_RE.is_match(s) {
            out.push(Violation::new(label, "must be a valid URL"));
        }
    }
}

/// Field must be a URL, site path, or in-page anchor
fn require_link(parent: &Value, key: &str, label: &str, out: &mut Vec<Violation>) {
    if let Some(s) = string_value(parent, key, label, out) {
        if !LINK_RE.is_match(s) {
            out.push(Violation::new(label, "must be a URL, path or #anchor"));
        }
    }
}

/// Field must be a syntactically valid email address
fn require_email(parent: &Value, key: &str, label: &str, out: &mut Vec<Violation>) {
    if let Some(s) = string_value(parent, key, label, out) {
        if !EMAIL_RE.is_match(s) {
            out.push(Violation::new(label, "must be a valid email address"));
        }
    }
}

/// Field must be an image object with a valid URL
fn require_image(parent: &Value, key: &str, label: &str, out: &mut Vec<Violation>) {
    if let Some(image) = object_at(parent, key, label, out) {
        require_url(image, "imageUrl", &format!("{label}.imageUrl"), out);
    }
}

fn object_at<'a>(
    parent: &'a Value,
    key: &str,
    label: &str,
    out: &mut Vec<Violation>,
) -> Option<&'a Value> {
    match parent.get(key) {
        None | Some(Value::Null) => {
            out.push(Violation::new(label, "is required"));
            None
        }
        Some(v) if v.is_object() => Some(v),
        Some(_) => {
            out.push(Violation::new(label, "must be an object"));
            None
        }
    }
}

fn array_at<'a>(
    parent: &'a Value,
    key: &str,
    label: &str,
    out: &mut Vec<Violation>,
) -> Option<&'a Vec<Value>> {
    match parent.get(key) {
        None | Some(Value::Null) => {
            out.push(Violation::new(label, "is required"));
            None
        }
        Some(Value::Array(items)) => Some(items),
        Some(_) => {
            out.push(Violation::new(label, "must be a list"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{default_document, reconcile};
    use serde_json::json;

    #[test]
    fn test_default_document_validates() {
        assert!(validate_document(&default_document()).is_ok());
    }

    #[test]
    fn test_invalid_email_is_reported_with_path() {
        let mut doc = default_document();
        doc["contact"]["email"] = json!("not-an-email");
        let violations = validate_document(&doc).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| v.path == "contact.email" && v.message.contains("email")));
    }

    #[test]
    fn test_all_violations_are_enumerated() {
        let mut doc = default_document();
        doc["artistName"] = json!("");
        doc["contact"]["email"] = json!("nope");
        doc["musicLinks"][0]["url"] = json!("spotify dot com");
        let violations = validate_document(&doc).unwrap_err();
        let paths: Vec<_> = violations.iter().map(|v| v.path.as_str()).collect();
        assert!(paths.contains(&"artistName"));
        assert!(paths.contains(&"contact.email"));
        assert!(paths.contains(&"musicLinks[0].url"));
        assert!(violations.len() >= 3);
    }

    #[test]
    fn test_fixed_length_lists_are_enforced() {
        let mut doc = default_document();
        doc["infoCards"].as_array_mut().unwrap().pop();
        let violations = validate_document(&doc).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| v.path == "infoCards" && v.message.contains("exactly 3")));
    }

    #[test]
    fn test_anchor_links_are_accepted() {
        // defaults already carry "#music", "/press-kit.pdf" style links and
        // validate clean; absolute URLs are fine in those fields too
        let mut doc = default_document();
        doc["pressKitUrl"] = json!("https://cdn.example.com/press.pdf");
        doc["startListeningUrl"] = json!("#listen");
        assert!(validate_document(&doc).is_ok());
    }

    #[test]
    fn test_reconciled_garbage_never_panics() {
        let default = default_document();
        for weird in [
            json!(null),
            json!([]),
            json!("text"),
            json!({ "artistName": 5, "heroImage": [], "contact": "x" }),
            json!({ "tourDates": [{ "date": 1 }] }),
            json!({ "infoCards": [null, null, null] }),
        ] {
            let merged = reconcile(&default, &weird);
            // either a typed document or an explicit violation list
            let _ = validate_document(&merged);
        }
    }

    #[test]
    fn test_missing_field_reported_when_not_reconciled() {
        let doc = json!({ "artistName": "Solo" });
        let violations = validate_document(&doc).unwrap_err();
        assert!(violations.iter().any(|v| v.path == "artistTagline"));
        assert!(violations.iter().any(|v| v.path == "contact"));
    }
}
