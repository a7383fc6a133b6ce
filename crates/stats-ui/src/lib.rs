//! Terminal UI layer for chat-stats.
//!
//! Provides themes, the header and bar components, the four statistic views
//! (senders, hours, calendar, weekdays), and the main application event loop
//! built on top of [`ratatui`] for rendering chat statistics in the terminal.

pub mod app;
pub mod calendar_view;
pub mod components;
pub mod hour_view;
pub mod sender_view;
pub mod themes;
pub mod weekday_view;

pub use stats_core as core;
