//! Extension extraction from URL paths.

/// Extension of the URL's final path segment, leading dot included.
///
/// Returns the empty string when the URL does not parse or the segment has no
/// dot. Query strings and fragments never leak into the result.
pub fn extension_from_url_path(url: &str) -> String {
    let Ok(parsed) = url::Url::parse(url) else {
        return String::new();
    };
    let segment = parsed.path().rsplit('/').next().unwrap_or("");
    match segment.rfind('.') {
        Some(i) => segment[i..].to_string(),
        None => String::new(),
    }
}
