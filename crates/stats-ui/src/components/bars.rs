use crate::themes::Theme;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use stats_core::formatting::format_count;
use unicode_width::UnicodeWidthChar;

/// Configuration controlling visual appearance of a horizontal count bar.
pub struct CountBarConfig {
    /// Display width reserved for the label column.
    pub label_width: u16,
    /// Total width in terminal columns of the bar portion.
    pub bar_width: u16,
    /// Character used to fill the completed portion of the bar.
    pub filled_char: char,
    /// Character used to fill the empty portion of the bar.
    pub empty_char: char,
}

impl Default for CountBarConfig {
    fn default() -> Self {
        Self {
            label_width: 14,
            bar_width: 30,
            filled_char: '\u{2588}', // █  FULL BLOCK
            empty_char: '\u{2591}',  // ░  LIGHT SHADE
        }
    }
}

// ── CountBar ─────────────────────────────────────────────────────────────────

/// Horizontal bar that shows one category's message count relative to the
/// largest count in its series.
///
/// Renders as `label █████░░░░ count (share%)`.  The share suffix is only
/// shown when a percentage is supplied (the sender view shows shares, the
/// weekday view does not).
pub struct CountBar<'a> {
    /// Category label (sender name, weekday name, ...).
    pub label: String,
    /// Message count for this category.
    pub count: u64,
    /// Largest count in the series; the bar is scaled against it.
    pub max_count: u64,
    /// Share of the series total in percent, shown after the count if set.
    pub share: Option<f64>,
    /// Fill style for the bar portion.
    pub fill_style: Style,
    /// Theme from which the remaining styles are taken.
    pub theme: &'a Theme,
    /// Visual configuration.
    pub config: CountBarConfig,
}

impl<'a> CountBar<'a> {
    /// Construct a bar with the default configuration.
    pub fn new(label: String, count: u64, max_count: u64, fill_style: Style, theme: &'a Theme) -> Self {
        Self {
            label,
            count,
            max_count,
            share: None,
            fill_style,
            theme,
            config: CountBarConfig::default(),
        }
    }

    /// Attach a percentage-of-total suffix to the bar label.
    pub fn with_share(mut self, share: f64) -> Self {
        self.share = Some(share);
        self
    }

    /// Render the bar as a [`Line`] suitable for embedding in any ratatui
    /// widget that accepts `Line` values.
    pub fn to_line(&self) -> Line<'a> {
        let filled = if self.max_count > 0 {
            ((self.count as f64 / self.max_count as f64) * self.config.bar_width as f64).round()
                as u16
        } else {
            0
        };
        let empty = self.config.bar_width.saturating_sub(filled);

        let filled_str = self.config.filled_char.to_string().repeat(filled as usize);
        let empty_str = self.config.empty_char.to_string().repeat(empty as usize);

        let label = fit_display_width(&self.label, self.config.label_width as usize);

        let suffix = match self.share {
            Some(pct) => format!(" {} ({:.1}%)", format_count(self.count), pct),
            None => format!(" {}", format_count(self.count)),
        };

        Line::from(vec![
            Span::styled(format!("{label} "), self.theme.label),
            Span::styled(filled_str, self.fill_style),
            Span::styled(empty_str, self.theme.bar_empty),
            Span::styled(suffix, self.theme.bar_label),
        ])
    }
}

// ── Display-width helpers ─────────────────────────────────────────────────────

/// Truncate or pad `s` to exactly `width` terminal columns.
///
/// Sender names can contain emoji and other wide glyphs, so the calculation
/// uses display width, not character count.  Truncation appends `…` when the
/// name does not fit.
pub fn fit_display_width(s: &str, width: usize) -> String {
    let full_width = unicode_width::UnicodeWidthStr::width(s);
    if full_width <= width {
        let mut out = s.to_string();
        out.push_str(&" ".repeat(width - full_width));
        return out;
    }

    // Truncate, reserving one column for the ellipsis.
    let mut out = String::new();
    let mut used = 0usize;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    used += 1;

    // A wide glyph boundary can leave a one-column gap; pad it.
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
