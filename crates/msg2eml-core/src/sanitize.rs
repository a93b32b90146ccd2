//! Filename sanitation and MIME type guessing.

/// Default name used when nothing usable can be derived.
pub const DEFAULT_ATTACHMENT_NAME: &str = "unnamed_file";

/// Sanitizes a filename for use in a disposition header or on disk.
///
/// Strips any path components, replaces filesystem-illegal characters and
/// whitespace/underscore runs with a single underscore, and trims edge
/// underscores. Falls back to `default` when the result is empty.
/// Idempotent: sanitizing a sanitized name is a no-op.
#[must_use]
pub fn sanitize_filename(input: &str, default: &str) -> String {
    if input.is_empty() {
        return default.to_string();
    }

    // Keep only the final path component, whatever the separator style
    let base = input
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(input);

    let mut result = String::with_capacity(base.len());
    let mut pending_underscore = false;
    for c in base.chars() {
        if c.is_whitespace() || c == '_' || "\\/*?:\"<>|".contains(c) {
            pending_underscore = !result.is_empty();
        } else {
            if pending_underscore {
                result.push('_');
                pending_underscore = false;
            }
            result.push(c);
        }
    }

    if result.is_empty() {
        default.to_string()
    } else {
        result
    }
}

/// Guesses a MIME type/subtype from a filename's extension.
///
/// Unknown or missing extensions yield `("application", "octet-stream")`.
#[must_use]
pub fn guess_mime_type(filename: &str) -> (&'static str, &'static str) {
    let extension = filename
        .rsplit('.')
        .next()
        .filter(|ext| ext.len() < filename.len())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "txt" | "log" => ("text", "plain"),
        "htm" | "html" => ("text", "html"),
        "css" => ("text", "css"),
        "csv" => ("text", "csv"),
        "xml" => ("text", "xml"),
        "md" => ("text", "markdown"),
        "ics" => ("text", "calendar"),
        "eml" => ("message", "rfc822"),
        "json" => ("application", "json"),
        "pdf" => ("application", "pdf"),
        "zip" => ("application", "zip"),
        "gz" => ("application", "gzip"),
        "doc" => ("application", "msword"),
        "docx" => (
            "application",
            "vnd.openxmlformats-officedocument.wordprocessingml.document",
        ),
        "xls" => ("application", "vnd.ms-excel"),
        "xlsx" => (
            "application",
            "vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ),
        "ppt" => ("application", "vnd.ms-powerpoint"),
        "pptx" => (
            "application",
            "vnd.openxmlformats-officedocument.presentationml.presentation",
        ),
        "rtf" => ("application", "rtf"),
        "png" => ("image", "png"),
        "jpg" | "jpeg" => ("image", "jpeg"),
        "gif" => ("image", "gif"),
        "bmp" => ("image", "bmp"),
        "tif" | "tiff" => ("image", "tiff"),
        "svg" => ("image", "svg+xml"),
        "webp" => ("image", "webp"),
        "ico" => ("image", "vnd.microsoft.icon"),
        "mp3" => ("audio", "mpeg"),
        "wav" => ("audio", "wav"),
        "ogg" => ("audio", "ogg"),
        "mp4" => ("video", "mp4"),
        "avi" => ("video", "x-msvideo"),
        "mov" => ("video", "quicktime"),
        _ => ("application", "octet-stream"),
    }
}
