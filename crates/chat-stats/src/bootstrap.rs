use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.chat-stats/` directory hierarchy exists.
///
/// Creates the following directories if absent (including any missing parents):
/// - `~/.chat-stats/`
/// - `~/.chat-stats/logs/`
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let stats_dir = home.join(".chat-stats");
    std::fs::create_dir_all(&stats_dir)?;
    std::fs::create_dir_all(stats_dir.join("logs"))?;
    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
///
/// The `log_file` parameter is accepted for forward-compatibility but file
/// logging is not yet wired – all output currently goes to stderr.
pub fn setup_logging(log_level: &str, _log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let upper = log_level.to_uppercase();
    let normalised = match upper.as_str() {
        "DEBUG" | "CRITICAL" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        other => other,
    };

    let filter = EnvFilter::try_new(normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Chat-export discovery ──────────────────────────────────────────────────────

/// File names that chat apps conventionally give their exports.
const EXPORT_CANDIDATES: [&str; 2] = ["_chat.txt", "whatsapp_chat.txt"];

/// Attempt to locate a chat export under `dir`.
///
/// Checks the conventional export names first, then falls back to scanning
/// for `.txt` files whose name starts with `"WhatsApp Chat"` (the name the
/// app gives exports shared from a phone).  Returns `None` when nothing
/// plausible is found.
pub fn discover_chat_file_in(dir: &Path) -> Option<PathBuf> {
    for name in EXPORT_CANDIDATES {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    stats_data::reader::find_chat_files(dir)
        .into_iter()
        .find(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with("WhatsApp Chat"))
                .unwrap_or(false)
        })
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ── test_ensure_directories ───────────────────────────────────────────────

    #[test]
    fn test_ensure_directories() {
        let tmp = TempDir::new().expect("tempdir");

        // Override HOME so that dirs::home_dir() resolves to our temp dir.
        let original_home = std::env::var_os("HOME");
        std::env::set_var("HOME", tmp.path());

        let result = ensure_directories();

        // Restore HOME.
        match original_home {
            Some(v) => std::env::set_var("HOME", v),
            None => std::env::remove_var("HOME"),
        }

        result.expect("ensure_directories should succeed");

        let stats_dir = tmp.path().join(".chat-stats");
        assert!(stats_dir.is_dir(), ".chat-stats dir must exist");
        assert!(stats_dir.join("logs").is_dir(), "logs subdir must exist");
    }

    // ── test_discover_chat_file ───────────────────────────────────────────────

    #[test]
    fn test_discover_returns_none_when_absent() {
        let tmp = TempDir::new().expect("tempdir");
        assert!(discover_chat_file_in(tmp.path()).is_none());
    }

    #[test]
    fn test_discover_finds_underscore_chat() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("_chat.txt");
        std::fs::write(&path, "x").expect("write export");

        assert_eq!(discover_chat_file_in(tmp.path()), Some(path));
    }

    #[test]
    fn test_discover_finds_whatsapp_chat_name() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("whatsapp_chat.txt");
        std::fs::write(&path, "x").expect("write export");

        assert_eq!(discover_chat_file_in(tmp.path()), Some(path));
    }

    #[test]
    fn test_discover_falls_back_to_named_export() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("WhatsApp Chat with Alice.txt");
        std::fs::write(&path, "x").expect("write export");
        // A decoy .txt that is not an export name.
        std::fs::write(tmp.path().join("notes.txt"), "x").expect("write decoy");

        assert_eq!(discover_chat_file_in(tmp.path()), Some(path));
    }

    #[test]
    fn test_discover_prefers_conventional_name() {
        let tmp = TempDir::new().expect("tempdir");
        let conventional = tmp.path().join("_chat.txt");
        std::fs::write(&conventional, "x").expect("write export");
        std::fs::write(tmp.path().join("WhatsApp Chat with Bob.txt"), "x")
            .expect("write second export");

        assert_eq!(discover_chat_file_in(tmp.path()), Some(conventional));
    }
}
