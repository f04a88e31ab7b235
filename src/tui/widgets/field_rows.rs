//! Bordered label/value rows for form rendering.
//!
//! The form data itself lives in the model ([`crate::model::FormState`]);
//! screens build a transient `Vec<FieldRow>` from it every frame and hand it
//! here to draw.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// One rendered form row: a bordered box with a label, the current value,
/// and an optional error line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    /// Display label shown as the box title.
    pub label: String,
    /// Current value text.
    pub value: String,
    /// Validation error message, if any.
    pub error: Option<String>,
    /// Whether the label gets a `*` marker.
    pub required: bool,
    /// Whether this row currently has input focus.
    pub focused: bool,
}

impl FieldRow {
    /// Border color: error beats focus beats idle.
    pub fn border_color(&self) -> Color {
        if self.error.is_some() {
            Color::Red
        } else if self.focused {
            Color::Yellow
        } else {
            Color::DarkGray
        }
    }

    /// Box title, with the required marker applied.
    pub fn title(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }
}

/// Height of one rendered row in terminal cells.
pub const ROW_HEIGHT: u16 = 3;

/// Renders the rows stacked vertically within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_field_rows(rows: &[FieldRow], frame: &mut Frame, area: Rect) {
    let constraints: Vec<Constraint> = rows
        .iter()
        .map(|_| Constraint::Length(ROW_HEIGHT))
        .collect();

    let slots = Layout::vertical(constraints).split(area);

    for (i, row) in rows.iter().enumerate() {
        let block = Block::default()
            .title(row.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(row.border_color()));

        let mut spans = vec![Span::raw(&row.value)];
        if row.focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, slots[i]);

        // Error overlaps the bottom border of the row
        if let Some(ref err) = row.error {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            let err_area = Rect {
                x: slots[i].x + 2,
                y: slots[i].y + ROW_HEIGHT.saturating_sub(1),
                width: slots[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn make_row(label: &str) -> FieldRow {
        FieldRow {
            label: label.to_string(),
            value: String::new(),
            error: None,
            required: false,
            focused: false,
        }
    }

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render_rows(rows: &[FieldRow], width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_field_rows(rows, frame, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn border_color_error_beats_focus() {
        let row = FieldRow {
            error: Some("bad".into()),
            focused: true,
            ..make_row("Name")
        };
        assert_eq!(row.border_color(), Color::Red);
    }

    #[test]
    fn border_color_focus_beats_idle() {
        let row = FieldRow {
            focused: true,
            ..make_row("Name")
        };
        assert_eq!(row.border_color(), Color::Yellow);
    }

    #[test]
    fn border_color_idle() {
        assert_eq!(make_row("Name").border_color(), Color::DarkGray);
    }

    #[test]
    fn title_marks_required_fields() {
        let row = FieldRow {
            required: true,
            ..make_row("Email")
        };
        assert_eq!(row.title(), "Email *");
        assert_eq!(make_row("Message").title(), "Message");
    }

    #[test]
    fn renders_labels_and_values() {
        let rows = vec![
            FieldRow {
                value: "Jo".into(),
                required: true,
                ..make_row("Name")
            },
            make_row("Message"),
        ];
        let rendered = render_rows(&rows, 40, 6);
        assert!(rendered.contains("Name *"));
        assert!(rendered.contains("Jo"));
        assert!(rendered.contains("Message"));
    }

    #[test]
    fn renders_error_text() {
        let rows = vec![FieldRow {
            error: Some("Name is required".into()),
            ..make_row("Name")
        }];
        let rendered = render_rows(&rows, 40, 3);
        assert!(rendered.contains("Name is required"));
    }
}
