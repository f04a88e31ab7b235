//! Status bar widget — persistent one-line app context display.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget; decoupled from the model types so
/// screens can render it without borrowing the whole app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Number of stored submissions.
    pub submission_count: usize,
    /// Whether the optional form fields are currently shown.
    pub advanced_shown: bool,
}

/// Renders a one-line status bar.
///
/// Display format (left-aligned, Cyan):
/// - `enroll  no submissions`
/// - `enroll  1 submission`
/// - `enroll  4 submissions  ADVANCED`  (ADVANCED in Yellow)
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);
    let yellow = Style::default().fg(Color::Yellow);

    let mut spans: Vec<Span> = vec![
        Span::styled("enroll", cyan),
        Span::styled("  ", cyan),
        Span::styled(count_text(ctx.submission_count), cyan),
    ];
    if ctx.advanced_shown {
        spans.push(Span::styled("  ", cyan));
        spans.push(Span::styled("ADVANCED", yellow));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Submission count phrase with the right plural form.
fn count_text(count: usize) -> String {
    match count {
        0 => "no submissions".to_string(),
        1 => "1 submission".to_string(),
        n => format!("{n} submissions"),
    }
}
