//! Calendar heatmap view.
//!
//! Reshapes the dense daily series into a week grid (one row per week, seven
//! columns) and renders each day as a colour-bucketed cell.  The reshape
//! starts at the first observed day and pads the final row with zeros, the
//! same way the original heatmap laid out its grid; it relies on the daily
//! series being gap-free — a single missing day would shift every later
//! cell's column.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use stats_data::aggregate::DayCount;

use crate::themes::Theme;

/// Short column labels for the grid header row.
const DAY_COLUMNS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Width of one day cell in terminal columns.
const CELL: &str = "███ ";

/// Reshape the dense daily series into rows of seven counts.
///
/// The final week is padded with zeros so every row has exactly seven
/// columns.  Returns an empty grid for an empty series.
pub fn week_grid(daily: &[DayCount]) -> Vec<[u64; 7]> {
    let mut grid: Vec<[u64; 7]> = Vec::with_capacity(daily.len().div_ceil(7));

    for week in daily.chunks(7) {
        let mut row = [0u64; 7];
        for (i, day) in week.iter().enumerate() {
            row[i] = day.count;
        }
        grid.push(row);
    }

    grid
}

/// Render the calendar heatmap into `area`.
pub fn render_calendar_view(frame: &mut Frame, area: Rect, daily: &[DayCount], theme: &Theme) {
    let grid = week_grid(daily);
    let max = daily.iter().map(|d| d.count).max().unwrap_or(0);

    let mut lines: Vec<Line> = Vec::with_capacity(grid.len() + 1);

    // Column header: "        Mon Tue Wed ...".
    let mut header_spans = vec![Span::styled("       ", theme.dim)];
    for label in DAY_COLUMNS {
        header_spans.push(Span::styled(format!("{label} "), theme.label));
    }
    lines.push(Line::from(header_spans));

    for (week_index, row) in grid.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::with_capacity(8);

        // Row gutter: date of the week's first day.
        let gutter = daily
            .get(week_index * 7)
            .map(|d| d.date.format("%d/%m ").to_string())
            .unwrap_or_else(|| "      ".to_string());
        spans.push(Span::styled(format!("{gutter} "), theme.dim));

        for &count in row {
            spans.push(Span::styled(CELL, theme.heat_style(count, max)));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Messages per Day ")
            .border_style(theme.separator),
    );

    frame.render_widget(paragraph, area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series(start: (i32, u32, u32), counts: &[u64]) -> Vec<DayCount> {
        let mut date = NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap();
        let mut out = Vec::new();
        for &count in counts {
            out.push(DayCount { date, count });
            date = date.succ_opt().unwrap();
        }
        out
    }

    // ── week_grid ─────────────────────────────────────────────────────────────

    #[test]
    fn test_week_grid_exact_week() {
        let daily = series((2024, 3, 18), &[1, 2, 3, 4, 5, 6, 7]);
        let grid = week_grid(&daily);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0], [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_week_grid_pads_final_row_with_zeros() {
        let daily = series((2024, 3, 18), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let grid = week_grid(&daily);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[1], [8, 9, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_week_grid_single_day() {
        let daily = series((2024, 3, 15), &[4]);
        let grid = week_grid(&daily);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0], [4, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_week_grid_empty_series() {
        assert!(week_grid(&[]).is_empty());
    }

    #[test]
    fn test_week_grid_preserves_all_counts() {
        let counts = [2, 0, 0, 5, 1, 0, 0, 3, 7, 0];
        let daily = series((2024, 1, 1), &counts);
        let grid = week_grid(&daily);

        let grid_sum: u64 = grid.iter().flat_map(|row| row.iter()).sum();
        assert_eq!(grid_sum, counts.iter().sum::<u64>());
    }

    #[test]
    fn test_week_grid_row_count() {
        // 10 days → 2 rows; 14 days → 2 rows; 15 days → 3 rows.
        assert_eq!(week_grid(&series((2024, 1, 1), &[0; 10])).len(), 2);
        assert_eq!(week_grid(&series((2024, 1, 1), &[0; 14])).len(), 2);
        assert_eq!(week_grid(&series((2024, 1, 1), &[0; 15])).len(), 3);
    }
}
