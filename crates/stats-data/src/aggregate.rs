//! Message statistics aggregation.
//!
//! Four independent single-pass folds over a parsed message sequence:
//! per-sender, per-hour-of-day, per-calendar-day (densified over the full
//! date range) and per-weekday.  All are pure functions of their input; the
//! caller owns the messages and nothing is accumulated across calls.

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use stats_core::error::{Result, StatsError};
use stats_core::models::Message;
use stats_core::time_utils::weekday_index;

// ── Output records ────────────────────────────────────────────────────────────

/// Message count for one sender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderCount {
    /// Sender display name as it appeared in the export.
    pub sender: String,
    /// Number of messages attributed to this sender.
    pub count: u64,
}

/// Message count for one calendar day of the densified daily series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    /// The calendar day.
    pub date: NaiveDate,
    /// Number of messages on that day (zero for gap days).
    pub count: u64,
}

// ── MessageAggregator ─────────────────────────────────────────────────────────

/// Stateless helper that folds message slices into per-category counts.
pub struct MessageAggregator;

impl MessageAggregator {
    /// Count messages per sender.
    ///
    /// Only senders present in the input appear (no zero-fill).  Output order
    /// is first-appearance order, which keeps downstream rendering stable
    /// within a run.
    pub fn count_by_sender(messages: &[Message]) -> Vec<SenderCount> {
        let mut counts: Vec<SenderCount> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for message in messages {
            match index.get(message.sender.as_str()) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(message.sender.as_str(), counts.len());
                    counts.push(SenderCount {
                        sender: message.sender.clone(),
                        count: 1,
                    });
                }
            }
        }

        counts
    }

    /// Count messages per hour of day.
    ///
    /// The result is dense: index `h` holds the count for hour `h`, all 24
    /// hours present even when zero.  The hour is the whole-hour component of
    /// the message time, taken verbatim (no timezone conversion).
    pub fn count_by_hour(messages: &[Message]) -> [u64; 24] {
        let mut counts = [0u64; 24];
        for message in messages {
            counts[message.time.hour() as usize] += 1;
        }
        counts
    }

    /// Count messages per calendar day, densified over the full date range.
    ///
    /// The series runs from the earliest to the latest message date inclusive,
    /// strictly ascending, with explicit zero entries for days without any
    /// message.  The downstream week-grid reshape relies on the series being
    /// gap-free, so densification is a correctness requirement here, not a
    /// convenience.
    ///
    /// Fails with [`StatsError::NoMessages`] on empty input: with no messages
    /// there is no date range to densify.
    pub fn count_by_day(messages: &[Message]) -> Result<Vec<DayCount>> {
        let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for message in messages {
            *counts.entry(message.date).or_insert(0) += 1;
        }

        let first = match counts.keys().next() {
            Some(date) => *date,
            None => return Err(StatsError::NoMessages),
        };
        let last = counts.keys().next_back().copied().unwrap_or(first);

        let mut series = Vec::new();
        let mut day = first;
        loop {
            series.push(DayCount {
                date: day,
                count: counts.get(&day).copied().unwrap_or(0),
            });
            if day == last {
                break;
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }

        Ok(series)
    }

    /// Count messages per weekday.
    ///
    /// The result is indexed Monday..Sunday (see
    /// [`stats_core::time_utils::WEEKDAY_NAMES`]), zero-filled, with the
    /// weekday derived from the message date on the proleptic Gregorian
    /// calendar.
    pub fn count_by_weekday(messages: &[Message]) -> [u64; 7] {
        let mut counts = [0u64; 7];
        for message in messages {
            counts[weekday_index(message.date)] += 1;
        }
        counts
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
