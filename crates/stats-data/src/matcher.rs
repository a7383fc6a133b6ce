//! Single-line recogniser for the exported chat header format.
//!
//! A header line looks like
//!
//! ```text
//! [15/03/24, 09:05:02] Alice: hello there
//! ```
//!
//! Anything else – system notices without a sender, continuation lines of a
//! wrapped message, blank lines – is not a header and produces no match.

use regex::Regex;
use std::sync::OnceLock;

/// The header grammar: `"[" DD/MM/YY ", " HH:MM:SS "] " SENDER ": " BODY`.
///
/// * Each date/time field is exactly two ASCII digits.
/// * `SENDER` is one or more characters excluding `:`.
/// * `BODY` is the non-empty remainder of the line.
///
/// The pattern is anchored at the start of the line; a line with leading
/// whitespace or any other prefix does not match.
const HEADER_PATTERN: &str = r"^\[(\d{2}/\d{2}/\d{2}), (\d{2}:\d{2}:\d{2})\] ([^:]+): (.+)";

fn header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(HEADER_PATTERN).expect("header pattern compiles"))
}

/// The four raw tokens captured from a matching header line.
///
/// Tokens borrow from the input line; the parser turns them into an owned
/// [`stats_core::models::Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderTokens<'a> {
    /// `DD/MM/YY` date token.
    pub date: &'a str,
    /// `HH:MM:SS` time token.
    pub time: &'a str,
    /// Sender display name.
    pub sender: &'a str,
    /// Message body (rest of the line).
    pub body: &'a str,
}

/// Try to recognise `line` as a message header.
///
/// Returns `None` for any line that does not match the grammar.  Absence of a
/// match is a normal outcome, never an error – malformed input cannot make
/// this function fail.
pub fn match_header(line: &str) -> Option<HeaderTokens<'_>> {
    let caps = header_regex().captures(line)?;
    Some(HeaderTokens {
        date: caps.get(1)?.as_str(),
        time: caps.get(2)?.as_str(),
        sender: caps.get(3)?.as_str(),
        body: caps.get(4)?.as_str(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Matching lines ────────────────────────────────────────────────────────

    #[test]
    fn test_match_basic_header() {
        let tokens = match_header("[15/03/24, 09:05:02] Alice: hello there").unwrap();
        assert_eq!(tokens.date, "15/03/24");
        assert_eq!(tokens.time, "09:05:02");
        assert_eq!(tokens.sender, "Alice");
        assert_eq!(tokens.body, "hello there");
    }

    #[test]
    fn test_match_body_may_contain_colons() {
        let tokens = match_header("[15/03/24, 09:05:02] Alice: note: see 10:30").unwrap();
        assert_eq!(tokens.sender, "Alice");
        assert_eq!(tokens.body, "note: see 10:30");
    }

    #[test]
    fn test_match_sender_with_spaces() {
        let tokens = match_header("[01/01/24, 00:00:00] Alice Smith: hi").unwrap();
        assert_eq!(tokens.sender, "Alice Smith");
    }

    #[test]
    fn test_match_body_greedy_to_end_of_line() {
        let tokens = match_header("[15/03/24, 09:05:02] Bob: a b c  d").unwrap();
        assert_eq!(tokens.body, "a b c  d");
    }

    // ── Non-matching lines ────────────────────────────────────────────────────

    #[test]
    fn test_no_match_without_bracket_prefix() {
        assert!(match_header("Sistema: Alice se unió al grupo").is_none());
    }

    #[test]
    fn test_no_match_with_leading_whitespace() {
        assert!(match_header(" [15/03/24, 09:05:02] Alice: hello").is_none());
    }

    #[test]
    fn test_no_match_continuation_line() {
        assert!(match_header("this is the second line of a wrapped message").is_none());
    }

    #[test]
    fn test_no_match_empty_line() {
        assert!(match_header("").is_none());
    }

    #[test]
    fn test_no_match_without_sender_separator() {
        // A system notice keeps the timestamp but has no `": "` after it.
        assert!(match_header("[15/03/24, 09:05:02] Messages are end-to-end encrypted").is_none());
    }

    #[test]
    fn test_no_match_empty_body() {
        assert!(match_header("[15/03/24, 09:05:02] Alice: ").is_none());
    }

    #[test]
    fn test_no_match_single_digit_fields() {
        assert!(match_header("[5/3/24, 9:05:02] Alice: hello").is_none());
    }

    #[test]
    fn test_no_match_wrong_separator() {
        assert!(match_header("[15/03/24 09:05:02] Alice: hello").is_none());
        assert!(match_header("[15-03-24, 09:05:02] Alice: hello").is_none());
    }

    // ── Digit-shape only ──────────────────────────────────────────────────────

    #[test]
    fn test_match_does_not_validate_calendar() {
        // The matcher checks digit shape only; calendar validity is the
        // parser's concern.
        let tokens = match_header("[99/99/99, 23:59:59] Bob: hi").unwrap();
        assert_eq!(tokens.date, "99/99/99");
    }
}
