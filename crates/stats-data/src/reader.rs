//! Chat export discovery and loading.
//!
//! Reads exported `.txt` transcripts from disk and hands decoded lines to the
//! parser.  Decoding is strict: an export that is not valid UTF-8 surfaces as
//! an explicit error rather than a partially parsed result.

use std::path::{Path, PathBuf};

use stats_core::error::{Result, StatsError};
use stats_core::models::Message;
use tracing::warn;

use crate::parser::parse_text;

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all `.txt` files recursively under `dir`, sorted by path.
pub fn find_chat_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        warn!("Chat directory does not exist: {}", dir.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext == "txt")
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Read a chat export as decoded text.
///
/// Fails with [`StatsError::FileRead`] when the file cannot be opened or is
/// not valid UTF-8.  There is no mid-stream recovery: either the whole file
/// decodes, or the caller gets the error.
pub fn read_chat_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| StatsError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a chat export and split it into lines (line terminators stripped).
pub fn read_chat_lines(path: &Path) -> Result<Vec<String>> {
    Ok(read_chat_text(path)?.lines().map(str::to_owned).collect())
}

/// Read and parse a chat export into messages in one step.
pub fn load_messages(path: &Path) -> Result<Vec<Message>> {
    let text = read_chat_text(path)?;
    Ok(parse_text(&text))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
