//! URL modeling and filename derivation.
//!
//! Turns platform thumbnail URLs into full-size ones and derives safe local
//! filenames from the account handle plus the image URL's extension.

mod path;
mod sanitize;

pub use path::extension_from_url_path;
pub use sanitize::sanitize_handle;

/// Size suffix the platform injects into thumbnail URLs before the extension.
const THUMBNAIL_SUFFIX: &str = "_normal";

/// Fallback stem when a handle sanitizes down to nothing.
const DEFAULT_STEM: &str = "mutual";

/// Full-resolution variant of a profile image URL.
///
/// Removes the first occurrence of `_normal` (case-sensitive); a URL without
/// the suffix passes through unchanged.
pub fn full_size_url(thumbnail_url: &str) -> String {
    thumbnail_url.replacen(THUMBNAIL_SUFFIX, "", 1)
}

/// Local filename for a mutual's picture: sanitized handle plus the extension
/// of the image URL's path (empty when the path has none).
pub fn derive_filename(handle: &str, image_url: &str) -> String {
    let stem = sanitize_handle(handle);
    let stem = if stem.is_empty() {
        DEFAULT_STEM
    } else {
        stem.as_str()
    };
    format!("{}{}", stem, extension_from_url_path(image_url))
}
