//! Submissions screen — scrollable table of stored records.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Row, Table};

use crate::model::Submission;
use crate::tui::action::Action;
use crate::tui::app::Screen;

/// State for the submissions screen.
#[derive(Debug, Clone)]
pub struct SubmissionsState {
    /// Index of the currently highlighted row (0-based).
    selected: usize,
}

impl Default for SubmissionsState {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionsState {
    /// Creates a new state with the cursor at the first row.
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent, count: usize) -> Action {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                if count > 0 {
                    self.selected = (self.selected + 1).min(count - 1);
                }
                Action::None
            }
            KeyCode::Home => {
                self.selected = 0;
                Action::None
            }
            KeyCode::End => {
                self.selected = count.saturating_sub(1);
                Action::None
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if count > 0 {
                    Action::Delete(self.selected)
                } else {
                    Action::None
                }
            }
            KeyCode::F(1) => Action::Navigate(Screen::Help),
            KeyCode::Esc | KeyCode::Char('q') => Action::Navigate(Screen::FormEntry),
            _ => Action::None,
        }
    }

    /// Returns the currently selected row index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Keeps the cursor on a valid row after the list shrinks.
    pub fn clamp(&mut self, count: usize) {
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    /// Resets the cursor to the first row.
    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

/// Renders the submissions screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_submissions(
    state: &SubmissionsState,
    submissions: &[Submission],
    frame: &mut Frame,
    area: Rect,
) {
    let [title_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let title_text = match submissions.len() {
        0 => "Submitted Forms".to_string(),
        n => format!("Submitted Forms ({n})"),
    };
    let title = Paragraph::new(Line::from(title_text))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, title_area);

    if submissions.is_empty() {
        let empty = Paragraph::new("No forms submitted yet").alignment(Alignment::Center);
        frame.render_widget(empty, table_area);
    } else {
        let header = Row::new(vec!["Submitted", "Name", "Email", "Country", "Interests"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let rows: Vec<Row> = submissions
            .iter()
            .enumerate()
            .map(|(i, sub)| {
                let style = if i == state.selected() {
                    Style::default().fg(Color::Black).bg(Color::Yellow)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    sub.submitted_at.clone(),
                    sub.name.clone(),
                    sub.email.clone(),
                    sub.country.clone(),
                    sub.interests.join(", "),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(20),
            Constraint::Length(16),
            Constraint::Length(24),
            Constraint::Length(10),
            Constraint::Min(0),
        ];

        let table = Table::new(rows, widths).header(header);
        frame.render_widget(table, table_area);
    }

    let footer = Paragraph::new("↑↓: navigate  Home/End: jump  d: delete  q: back")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
