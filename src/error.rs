use std::io;

use thiserror::Error;

/// Everything that can abort a run. There is no per-entry recovery: any of
/// these ends the process with a non-zero status.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("failed to read dictionary input")]
    Read(#[source] io::Error),

    #[error("input is not valid JSON")]
    Json(#[source] serde_json::Error),

    #[error("expected a JSON object of headword -> html, found {found}")]
    NotAnObject { found: &'static str },

    #[error("entry {headword:?} must map to an html string, found {found}")]
    NotAString {
        headword: String,
        found: &'static str,
    },

    #[error("failed to write cleaned dictionary")]
    Write(#[source] io::Error),
}
