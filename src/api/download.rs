//! Binary artifacts returned by PDF endpoints: the raw bytes plus the
//! server-suggested filename carried in `Content-Disposition`. Bytes are
//! passed through untouched; naming and saving are left to callers.

use bytes::Bytes;
use regex::Regex;
use std::sync::OnceLock;

/// A downloaded binary artifact.
#[derive(Debug, Clone)]
pub struct Download {
    /// Filename hint from `Content-Disposition`, if the server sent one.
    pub filename: Option<String>,
    pub bytes: Bytes,
}

impl Download {
    /// Filename hint, or `fallback` when the server did not supply one.
    #[must_use]
    pub fn filename_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.filename.as_deref().unwrap_or(fallback)
    }
}

fn disposition_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)filename\s*=\s*"?([^";]+)"?"#))
        .as_ref()
        .ok()
}

/// Extract the filename hint from a `Content-Disposition` header value.
///
/// Handles both `filename="q1.pdf"` and the unquoted form; surrounding
/// quotes and whitespace are stripped.
#[must_use]
pub fn filename_from_disposition(value: &str) -> Option<String> {
    let captures = disposition_regex()?.captures(value)?;
    let name = captures.get(1)?.as_str().trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
