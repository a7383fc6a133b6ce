use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by chat-stats.
#[derive(Error, Debug)]
pub enum StatsError {
    /// A chat export could not be opened, read, or decoded as UTF-8.
    #[error("Failed to read chat export {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input contained no parseable messages, so no date range exists
    /// for the calendar aggregation.
    #[error("No messages found in the chat export")]
    NoMessages,

    /// No chat export file was named or discovered under the given directory.
    #[error("No chat export found in {0}")]
    NoChatFile(PathBuf),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the chat-stats crates.
pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = StatsError::FileRead {
            path: PathBuf::from("/some/_chat.txt"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read chat export"));
        assert!(msg.contains("/some/_chat.txt"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_no_messages() {
        let err = StatsError::NoMessages;
        assert_eq!(err.to_string(), "No messages found in the chat export");
    }

    #[test]
    fn test_error_display_no_chat_file() {
        let err = StatsError::NoChatFile(PathBuf::from("/empty/dir"));
        assert_eq!(err.to_string(), "No chat export found in /empty/dir");
    }

    #[test]
    fn test_error_display_terminal() {
        let err = StatsError::Terminal("crossterm failure".to_string());
        assert_eq!(err.to_string(), "Terminal error: crossterm failure");
    }

    #[test]
    fn test_error_display_config() {
        let err = StatsError::Config("unknown view".to_string());
        assert_eq!(err.to_string(), "Configuration error: unknown view");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StatsError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_no_messages_is_matchable() {
        // Callers distinguish the empty-input condition by matching on the
        // variant, not by string comparison.
        let err = StatsError::NoMessages;
        assert!(matches!(err, StatsError::NoMessages));
    }
}
