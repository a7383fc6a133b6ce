//! Chat transcript parsing.
//!
//! Classifies each input line with the [`matcher`](crate::matcher) and builds
//! an ordered `Vec<Message>`.  Parsing carries no cross-line state: lines
//! that do not match the header grammar are skipped silently, including the
//! continuation lines of wrapped multi-line messages.  Output order equals
//! input line order; messages are not re-sorted even when the export itself
//! is out of chronological order.

use stats_core::models::Message;
use stats_core::time_utils::{parse_chat_date, parse_chat_time};
use tracing::debug;

use crate::matcher::match_header;

/// Parse an iterator of lines into an ordered sequence of [`Message`]s.
///
/// Every non-matching line is dropped without error.  A line that matches the
/// header shape but names an impossible calendar date or wall-clock time
/// (e.g. `31/02/24`) is dropped the same way.
pub fn parse_lines<'a, I>(lines: I) -> Vec<Message>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut messages: Vec<Message> = Vec::new();
    let mut lines_seen = 0u64;
    let mut lines_dropped = 0u64;

    for line in lines {
        lines_seen += 1;

        let Some(tokens) = match_header(line) else {
            lines_dropped += 1;
            continue;
        };

        let (Some(date), Some(time)) = (parse_chat_date(tokens.date), parse_chat_time(tokens.time))
        else {
            debug!(
                "Dropping header line with out-of-range date/time: [{}, {}]",
                tokens.date, tokens.time
            );
            lines_dropped += 1;
            continue;
        };

        messages.push(Message {
            date,
            time,
            sender: tokens.sender.to_string(),
            body: tokens.body.to_string(),
        });
    }

    debug!(
        "Parsed {} messages from {} lines ({} dropped)",
        messages.len(),
        lines_seen,
        lines_dropped,
    );

    messages
}

/// Parse a whole transcript held in memory.
pub fn parse_text(text: &str) -> Vec<Message> {
    parse_lines(text.lines())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
