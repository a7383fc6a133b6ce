use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One parsed chat entry from an exported transcript.
///
/// A `Message` is produced by the parser for every line that matches the
/// bracketed-timestamp header grammar and is never mutated afterwards.
/// Aggregators take read-only slices of messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Calendar date of the message, resolved from the two-digit
    /// day/month/year token on the header line.
    pub date: NaiveDate,
    /// Wall-clock time of day, to the second, taken verbatim from the
    /// header (no timezone conversion).
    pub time: NaiveTime,
    /// Display name of the sender: everything up to the first `": "` after
    /// the timestamp brackets.
    pub sender: String,
    /// Remaining text of the header line (may itself contain colons).
    pub body: String,
}

impl Message {
    /// Combine `date` and `time` into a single naive timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Message {
        Message {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            time: NaiveTime::from_hms_opt(9, 5, 2).unwrap(),
            sender: "Alice".to_string(),
            body: "hello there".to_string(),
        }
    }

    #[test]
    fn test_timestamp_combines_date_and_time() {
        let msg = sample();
        let ts = msg.timestamp();
        assert_eq!(ts.date(), msg.date);
        assert_eq!(ts.time(), msg.time);
    }

    #[test]
    fn test_message_serde_round_trip() {
        let msg = sample();
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_message_json_field_names() {
        let msg = sample();
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"date\""));
        assert!(json.contains("\"time\""));
        assert!(json.contains("\"sender\""));
        assert!(json.contains("\"body\""));
    }
}
