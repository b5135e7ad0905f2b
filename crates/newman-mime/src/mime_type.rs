//! File extension to MIME type lookup.

use mime_guess::mime;

/// Returns the extension of the last path segment, including the dot.
///
/// Returns an empty string when the final segment has no dot.
#[must_use]
pub fn extension(filename: &str) -> &str {
    let name = filename.rsplit('/').next().unwrap_or(filename);
    name.rfind('.').map_or("", |idx| &name[idx..])
}

/// Returns the registered MIME type for a filename's extension.
///
/// The extension is lowercased before lookup. Text types carry
/// `charset=utf-8`. Unknown or missing extensions yield an empty string.
#[must_use]
pub fn mime_type(filename: &str) -> String {
    let ext = extension(filename).to_lowercase();
    let ext = ext.trim_start_matches('.');
    if ext.is_empty() {
        return String::new();
    }

    mime_guess::from_ext(ext)
        .first()
        .map_or_else(String::new, |m| {
            if m.type_() == mime::TEXT && m.get_param(mime::CHARSET).is_none() {
                format!("{}; charset=utf-8", m.essence_str())
            } else {
                m.essence_str().to_string()
            }
        })
}
