//! Audio format catalogue.
//!
//! Nothing here rejects uploads; the content-type check only feeds logging.

use std::path::Path;

/// MIME types recognised as audio uploads.
pub const KNOWN_AUDIO_CONTENT_TYPES: &[&str] = &[
    "audio/wav",
    "audio/mpeg",
    "audio/mp3",
    "audio/ogg",
    "audio/webm",
    "audio/x-wav",
    "audio/x-m4a",
    "audio/mp4",
];

/// File extensions advertised by `GET /audio/status`.
pub const SUPPORTED_AUDIO_EXTENSIONS: &[&str] = &["wav", "mp3", "ogg", "webm", "m4a"];

/// Check if a declared content type is one of the known audio MIME types.
pub fn is_known_audio_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    KNOWN_AUDIO_CONTENT_TYPES.contains(&essence.as_str())
}

/// Best-effort content type for an upload that did not declare one.
pub fn guess_content_type(filename: &str) -> Option<String> {
    Path::new(filename).extension()?;
    mime_guess::from_path(filename)
        .first()
        .map(|mime| mime.essence_str().to_string())
}
