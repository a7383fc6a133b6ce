//! Messages-per-weekday view.
//!
//! Seven horizontal bars, Monday through Sunday, always all present.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use stats_core::time_utils::WEEKDAY_NAMES;

use crate::components::bars::CountBar;
use crate::themes::Theme;

/// Render the per-weekday bar list into `area`.
pub fn render_weekday_view(frame: &mut Frame, area: Rect, weekdays: &[u64; 7], theme: &Theme) {
    let lines = weekday_lines(weekdays, theme);

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Messages per Weekday ")
            .border_style(theme.separator),
    );

    frame.render_widget(paragraph, area);
}

/// Build one bar line per weekday, Monday first.
fn weekday_lines<'a>(weekdays: &[u64; 7], theme: &'a Theme) -> Vec<Line<'a>> {
    let max = weekdays.iter().copied().max().unwrap_or(0);

    WEEKDAY_NAMES
        .iter()
        .zip(weekdays.iter())
        .map(|(name, &count)| {
            CountBar::new(name.to_string(), count, max, theme.bar_fill, theme).to_line()
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_always_seven_lines() {
        let theme = Theme::dark();
        let lines = weekday_lines(&[0u64; 7], &theme);
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_monday_first_sunday_last() {
        let theme = Theme::dark();
        let lines = weekday_lines(&[1, 2, 3, 4, 5, 6, 7], &theme);
        assert!(line_text(&lines[0]).starts_with("Monday"));
        assert!(line_text(&lines[6]).starts_with("Sunday"));
    }

    #[test]
    fn test_zero_days_still_listed() {
        let theme = Theme::dark();
        let mut weekdays = [0u64; 7];
        weekdays[4] = 10; // Friday only
        let lines = weekday_lines(&weekdays, &theme);
        assert_eq!(lines.len(), 7);
        assert!(line_text(&lines[0]).contains(" 0"));
    }
}
