//! Per-sender message share view.
//!
//! Renders one proportional horizontal bar per sender, in first-appearance
//! order, each labelled with its count and share of the total.  This is the
//! terminal counterpart of the original per-person pie chart.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use stats_core::formatting::percentage;
use stats_data::aggregate::SenderCount;

use crate::components::bars::CountBar;
use crate::themes::Theme;

/// Render the per-sender bar list into `area`.
pub fn render_sender_view(frame: &mut Frame, area: Rect, senders: &[SenderCount], theme: &Theme) {
    let lines = sender_lines(senders, theme);

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Messages by Sender ")
            .border_style(theme.separator),
    );

    frame.render_widget(paragraph, area);
}

/// Build one bar line per sender.
fn sender_lines<'a>(senders: &[SenderCount], theme: &'a Theme) -> Vec<Line<'a>> {
    let total: u64 = senders.iter().map(|c| c.count).sum();
    let max = senders.iter().map(|c| c.count).max().unwrap_or(0);

    senders
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let share = percentage(entry.count as f64, total as f64, 1);
            CountBar::new(
                entry.sender.clone(),
                entry.count,
                max,
                theme.sender_style(i),
                theme,
            )
            .with_share(share)
            .to_line()
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> Vec<SenderCount> {
        pairs
            .iter()
            .map(|(sender, count)| SenderCount {
                sender: sender.to_string(),
                count: *count,
            })
            .collect()
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_one_line_per_sender() {
        let theme = Theme::dark();
        let senders = counts(&[("Alice", 6), ("Bob", 2)]);
        let lines = sender_lines(&senders, &theme);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_lines_preserve_input_order() {
        let theme = Theme::dark();
        let senders = counts(&[("Zoe", 1), ("Alice", 5)]);
        let lines = sender_lines(&senders, &theme);
        assert!(line_text(&lines[0]).starts_with("Zoe"));
        assert!(line_text(&lines[1]).starts_with("Alice"));
    }

    #[test]
    fn test_share_percentages_shown() {
        let theme = Theme::dark();
        let senders = counts(&[("Alice", 3), ("Bob", 1)]);
        let lines = sender_lines(&senders, &theme);
        assert!(line_text(&lines[0]).contains("(75.0%)"));
        assert!(line_text(&lines[1]).contains("(25.0%)"));
    }

    #[test]
    fn test_empty_sender_list_renders_nothing() {
        let theme = Theme::dark();
        let lines = sender_lines(&[], &theme);
        assert!(lines.is_empty());
    }
}
