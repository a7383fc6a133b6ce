//! Top-level analysis pipeline for chat-stats.
//!
//! Orchestrates reading, parsing and all four aggregations, returning a
//! [`ChatAnalysis`] ready for the presentation layer.  Each call builds its
//! own message sequence and aggregates; nothing is shared or accumulated
//! across calls, so concurrent hosts can run one analysis per input file in
//! isolation.

use std::path::Path;

use chrono::Utc;
use stats_core::error::{Result, StatsError};
use stats_core::models::Message;

use crate::aggregate::{DayCount, MessageAggregator, SenderCount};
use crate::reader::read_chat_text;

// ── Public types ──────────────────────────────────────────────────────────────

/// Metadata produced alongside the analysis result.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ChatAnalysisMetadata {
    /// ISO-8601 timestamp when this result was generated.
    pub generated_at: String,
    /// Number of input lines read from the export.
    pub lines_read: usize,
    /// Number of lines that parsed into messages.
    pub messages_parsed: usize,
    /// Wall-clock seconds spent reading the export.
    pub read_time_seconds: f64,
    /// Wall-clock seconds spent parsing and aggregating.
    pub parse_time_seconds: f64,
}

/// The complete output of [`analyze_chat`]: all four statistics plus the
/// parsed messages they were computed from.
#[derive(Debug, Clone)]
pub struct ChatAnalysis {
    /// Parsed messages in file-line order.
    pub messages: Vec<Message>,
    /// Per-sender counts in first-appearance order.
    pub senders: Vec<SenderCount>,
    /// Per-hour counts, dense over hours 0–23.
    pub hourly: [u64; 24],
    /// Densified per-day counts, `None` when the export contained no
    /// parseable messages (no date range exists).
    pub daily: Option<Vec<DayCount>>,
    /// Per-weekday counts, Monday..Sunday.
    pub weekdays: [u64; 7],
    /// Metadata about this analysis run.
    pub metadata: ChatAnalysisMetadata,
}

impl ChatAnalysis {
    /// Total number of parsed messages.
    pub fn total_messages(&self) -> usize {
        self.messages.len()
    }

    /// True when the export yielded no messages at all.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the full analysis pipeline over one chat export.
///
/// 1. Read and decode the export (I/O failures propagate).
/// 2. Parse header lines into [`Message`]s.
/// 3. Run the four aggregations.
///
/// An export with zero parseable messages is not an error at this level: the
/// sender list comes back empty, the hour and weekday series zero-filled, and
/// the daily series as `None` so the caller can render a "no messages found"
/// state.
pub fn analyze_chat(path: &Path) -> Result<ChatAnalysis> {
    let read_start = std::time::Instant::now();
    let text = read_chat_text(path)?;
    let read_time = read_start.elapsed().as_secs_f64();

    let lines_read = text.lines().count();

    let parse_start = std::time::Instant::now();
    let messages = crate::parser::parse_text(&text);
    let analysis = analyze_messages(messages, lines_read, read_time, parse_start)?;

    tracing::info!(
        "Analyzed {}: {} messages from {} lines",
        path.display(),
        analysis.total_messages(),
        lines_read,
    );

    Ok(analysis)
}

/// Aggregate an already-parsed message sequence.
fn analyze_messages(
    messages: Vec<Message>,
    lines_read: usize,
    read_time: f64,
    parse_start: std::time::Instant,
) -> Result<ChatAnalysis> {
    let senders = MessageAggregator::count_by_sender(&messages);
    let hourly = MessageAggregator::count_by_hour(&messages);
    let weekdays = MessageAggregator::count_by_weekday(&messages);

    let daily = match MessageAggregator::count_by_day(&messages) {
        Ok(series) => Some(series),
        Err(StatsError::NoMessages) => None,
        Err(e) => return Err(e),
    };

    let metadata = ChatAnalysisMetadata {
        generated_at: Utc::now().to_rfc3339(),
        lines_read,
        messages_parsed: messages.len(),
        read_time_seconds: read_time,
        parse_time_seconds: parse_start.elapsed().as_secs_f64(),
    };

    Ok(ChatAnalysis {
        messages,
        senders,
        hourly,
        daily,
        weekdays,
        metadata,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
