//! Main application state and TUI event loop for chat-stats.
//!
//! [`App`] owns the theme and the currently selected view.  The event loop is
//! synchronous: the analysis is computed once before the UI starts, so the
//! loop only needs to redraw and react to key presses.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};

use stats_data::analysis::ChatAnalysis;

use crate::calendar_view::render_calendar_view;
use crate::components::header::Header;
use crate::hour_view::render_hour_view;
use crate::sender_view::render_sender_view;
use crate::themes::Theme;
use crate::weekday_view::render_weekday_view;

// ── ViewMode ──────────────────────────────────────────────────────────────────

/// Which view the TUI is currently rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// All four statistics on one screen.
    Dashboard,
    /// Per-sender message shares.
    Senders,
    /// Messages per hour of day.
    Hours,
    /// Calendar heatmap of messages per day.
    Calendar,
    /// Messages per weekday.
    Weekdays,
}

impl ViewMode {
    /// Map a CLI view name to a mode.  Unknown names fall back to the
    /// dashboard.
    pub fn from_name(name: &str) -> Self {
        match name {
            "senders" => Self::Senders,
            "hours" => Self::Hours,
            "calendar" => Self::Calendar,
            "weekdays" => Self::Weekdays,
            _ => Self::Dashboard,
        }
    }

    /// The next view in Tab-cycle order.
    pub fn next(self) -> Self {
        match self {
            Self::Dashboard => Self::Senders,
            Self::Senders => Self::Hours,
            Self::Hours => Self::Calendar,
            Self::Calendar => Self::Weekdays,
            Self::Weekdays => Self::Dashboard,
        }
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the chat-stats TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Current view mode.
    pub view_mode: ViewMode,
    /// Display name of the analysed export (file name).
    pub source: String,
}

impl App {
    /// Construct a new application with the given configuration.
    pub fn new(theme_name: &str, view_mode: ViewMode, source: String) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            view_mode,
            source,
        }
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the TUI over a completed analysis.
    ///
    /// Uses `crossterm::event::poll` with a 250 ms timeout so redraws stay
    /// responsive without burning a core.  The loop exits on `q`, `Q`, or
    /// `Ctrl+C`; `Tab`, `d` and `1`–`4` switch views.
    pub fn run(mut self, analysis: &ChatAnalysis) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            terminal.draw(|frame| self.render(frame, analysis))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            break Ok(());
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') => break Ok(()),
                        KeyCode::Tab => self.view_mode = self.view_mode.next(),
                        KeyCode::Char('d') => self.view_mode = ViewMode::Dashboard,
                        KeyCode::Char('1') => self.view_mode = ViewMode::Senders,
                        KeyCode::Char('2') => self.view_mode = ViewMode::Hours,
                        KeyCode::Char('3') => self.view_mode = ViewMode::Calendar,
                        KeyCode::Char('4') => self.view_mode = ViewMode::Weekdays,
                        _ => {}
                    }
                }
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame, analysis: &ChatAnalysis) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let header = Header::new(&self.source, analysis.total_messages() as u64, &self.theme);
        frame.render_widget(Paragraph::new(header.to_lines()), chunks[0]);

        if analysis.is_empty() {
            render_no_data(frame, chunks[1], &self.theme);
        } else {
            self.render_body(frame, chunks[1], analysis);
        }

        let hint = Line::from(Span::styled(
            " q quit · tab next view · d dashboard · 1-4 single views",
            self.theme.dim,
        ));
        frame.render_widget(Paragraph::new(hint), chunks[2]);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect, analysis: &ChatAnalysis) {
        // `daily` is only `None` for an empty analysis, which is handled by
        // the no-data placeholder before this point.
        let daily: &[_] = analysis.daily.as_deref().unwrap_or(&[]);

        match self.view_mode {
            ViewMode::Dashboard => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(area);
                let top = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(rows[0]);
                let bottom = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(rows[1]);

                render_sender_view(frame, top[0], &analysis.senders, &self.theme);
                render_hour_view(frame, top[1], &analysis.hourly, &self.theme);
                render_calendar_view(frame, bottom[0], daily, &self.theme);
                render_weekday_view(frame, bottom[1], &analysis.weekdays, &self.theme);
            }
            ViewMode::Senders => render_sender_view(frame, area, &analysis.senders, &self.theme),
            ViewMode::Hours => render_hour_view(frame, area, &analysis.hourly, &self.theme),
            ViewMode::Calendar => render_calendar_view(frame, area, daily, &self.theme),
            ViewMode::Weekdays => {
                render_weekday_view(frame, area, &analysis.weekdays, &self.theme)
            }
        }
    }
}

// ── No-data placeholder ───────────────────────────────────────────────────────

/// Render a "no messages found" placeholder when the export parsed to an
/// empty message sequence.
fn render_no_data(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No messages found", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            "The export contained no lines matching the chat header format.",
            theme.dim,
        )),
        Line::from(Span::styled("Press q to quit.", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(text).alignment(ratatui::layout::Alignment::Center),
        area,
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── ViewMode ─────────────────────────────────────────────────────────────

    #[test]
    fn test_view_mode_from_name() {
        assert_eq!(ViewMode::from_name("dashboard"), ViewMode::Dashboard);
        assert_eq!(ViewMode::from_name("senders"), ViewMode::Senders);
        assert_eq!(ViewMode::from_name("hours"), ViewMode::Hours);
        assert_eq!(ViewMode::from_name("calendar"), ViewMode::Calendar);
        assert_eq!(ViewMode::from_name("weekdays"), ViewMode::Weekdays);
    }

    #[test]
    fn test_view_mode_from_name_unknown_falls_back() {
        assert_eq!(ViewMode::from_name("nonsense"), ViewMode::Dashboard);
    }

    #[test]
    fn test_view_mode_cycle_returns_to_start() {
        let mut mode = ViewMode::Dashboard;
        for _ in 0..5 {
            mode = mode.next();
        }
        assert_eq!(mode, ViewMode::Dashboard);
    }

    #[test]
    fn test_view_mode_cycle_visits_all_views() {
        let mut mode = ViewMode::Dashboard;
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(mode);
            mode = mode.next();
        }
        assert!(seen.contains(&ViewMode::Senders));
        assert!(seen.contains(&ViewMode::Hours));
        assert!(seen.contains(&ViewMode::Calendar));
        assert!(seen.contains(&ViewMode::Weekdays));
    }

    // ── App ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_app_new_defaults() {
        let app = App::new("dark", ViewMode::Dashboard, "_chat.txt".to_string());
        assert_eq!(app.view_mode, ViewMode::Dashboard);
        assert_eq!(app.source, "_chat.txt");
    }
}
