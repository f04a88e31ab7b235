//! Form entry screen — the registration form itself.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{COUNTRIES, Field, FormState, INTERESTS};
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::field_rows::{FieldRow, ROW_HEIGHT, draw_field_rows};

/// Focus order while advanced fields are hidden.
static BASIC_FIELDS: &[Field] = &[Field::Name, Field::Email, Field::Message];

/// Focus order while advanced fields are shown.
static ADVANCED_FIELDS: &[Field] = &[
    Field::Name,
    Field::Email,
    Field::Age,
    Field::Country,
    Field::Interests,
    Field::Message,
];

/// State for the form entry screen: focus and cursors only, never form
/// data. The draft lives in [`FormState`].
#[derive(Debug, Clone, Default)]
pub struct FormEntryState {
    focus: usize,
    interest_cursor: usize,
}

impl FormEntryState {
    /// Creates a state focused on the first field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields in focus order for the given visibility flag.
    pub fn visible_fields(advanced_shown: bool) -> &'static [Field] {
        if advanced_shown {
            ADVANCED_FIELDS
        } else {
            BASIC_FIELDS
        }
    }

    /// The currently focused field.
    pub fn focused(&self, advanced_shown: bool) -> Field {
        let fields = Self::visible_fields(advanced_shown);
        fields[self.focus.min(fields.len() - 1)]
    }

    /// The highlighted entry on the interests row.
    pub fn interest_cursor(&self) -> usize {
        self.interest_cursor
    }

    /// Returns focus and cursors to the first field, for use after the
    /// draft resets.
    pub fn reset(&mut self) {
        self.focus = 0;
        self.interest_cursor = 0;
    }

    /// Handles a key event, driving the form state and returning an
    /// [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent, form: &mut FormState) -> Action {
        let fields = Self::visible_fields(form.show_advanced());
        match key.code {
            KeyCode::Tab => {
                self.focus = (self.focus + 1) % fields.len();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus = (self.focus + fields.len() - 1) % fields.len();
                Action::None
            }
            KeyCode::F(2) => {
                self.toggle_advanced(form);
                Action::None
            }
            KeyCode::F(3) => Action::Navigate(Screen::Submissions),
            KeyCode::F(1) => Action::Navigate(Screen::Help),
            KeyCode::Esc => Action::Quit,
            KeyCode::Enter => Action::Submit,
            KeyCode::Backspace => {
                self.delete_char(form);
                Action::None
            }
            KeyCode::Left => {
                self.cycle(form, false);
                Action::None
            }
            KeyCode::Right => {
                self.cycle(form, true);
                Action::None
            }
            KeyCode::Char(' ') if self.focused(form.show_advanced()) == Field::Interests => {
                self.toggle_focused_interest(form);
                Action::None
            }
            KeyCode::Char(ch) => {
                self.insert_char(form, ch);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Flips advanced-field visibility, keeping the same field focused when
    /// it is still visible afterwards.
    fn toggle_advanced(&mut self, form: &mut FormState) {
        let current = self.focused(form.show_advanced());
        form.toggle_advanced();
        let fields = Self::visible_fields(form.show_advanced());
        self.focus = fields.iter().position(|&f| f == current).unwrap_or(0);
    }

    /// Appends a character to the focused text field.
    ///
    /// Country and interests are not typable; they change via ←/→ and Space.
    fn insert_char(&mut self, form: &mut FormState, ch: char) {
        let field = self.focused(form.show_advanced());
        if matches!(field, Field::Country | Field::Interests) {
            return;
        }
        let value = format!("{}{ch}", form.draft().get(field));
        form.update_field(field, &value);
    }

    /// Deletes the last character from the focused text field.
    fn delete_char(&mut self, form: &mut FormState) {
        let field = self.focused(form.show_advanced());
        if matches!(field, Field::Country | Field::Interests) {
            return;
        }
        let mut value = form.draft().get(field).to_string();
        value.pop();
        form.update_field(field, &value);
    }

    /// ←/→ behavior: cycles the country value or moves the interest cursor.
    fn cycle(&mut self, form: &mut FormState, forward: bool) {
        match self.focused(form.show_advanced()) {
            Field::Country => cycle_country(form, forward),
            Field::Interests => {
                self.interest_cursor = if forward {
                    (self.interest_cursor + 1) % INTERESTS.len()
                } else {
                    (self.interest_cursor + INTERESTS.len() - 1) % INTERESTS.len()
                };
            }
            _ => {}
        }
    }

    /// Toggles the interest under the cursor, flipping its current
    /// membership.
    fn toggle_focused_interest(&mut self, form: &mut FormState) {
        let interest = INTERESTS[self.interest_cursor];
        let include = !form.draft().has_interest(interest);
        form.toggle_interest(interest, include);
    }
}

/// Cycles the draft's country through "(none)" and [`COUNTRIES`], wrapping.
fn cycle_country(form: &mut FormState, forward: bool) {
    let mut options = vec![""];
    options.extend(COUNTRIES);

    let pos = options
        .iter()
        .position(|&c| c == form.draft().country)
        .unwrap_or(0);
    let next = if forward {
        (pos + 1) % options.len()
    } else {
        (pos + options.len() - 1) % options.len()
    };
    form.update_field(Field::Country, options[next]);
}

/// Builds the interests row text: `[x]`/`[ ]` markers for each available
/// interest, with the cursor entry wrapped in angle quotes while the row is
/// focused.
fn interests_line(form: &FormState, cursor: usize, focused: bool) -> String {
    let cells: Vec<String> = INTERESTS
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mark = if form.draft().has_interest(name) { 'x' } else { ' ' };
            let cell = format!("[{mark}] {name}");
            if focused && i == cursor {
                format!("\u{2039}{cell}\u{203a}")
            } else {
                cell
            }
        })
        .collect();
    cells.join("  ")
}

/// Display text for one field row.
fn display_value(form: &FormState, state: &FormEntryState, field: Field) -> String {
    match field {
        Field::Country => {
            if form.draft().country.is_empty() {
                "(none)".to_string()
            } else {
                form.draft().country.clone()
            }
        }
        Field::Interests => interests_line(
            form,
            state.interest_cursor(),
            state.focused(form.show_advanced()) == Field::Interests,
        ),
        _ => form.draft().get(field).to_string(),
    }
}

/// Renders the form entry screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form_entry(
    state: &FormEntryState,
    form: &FormState,
    flash: Option<&str>,
    frame: &mut Frame,
    area: Rect,
) {
    let block = Block::default()
        .title(" User Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = FormEntryState::visible_fields(form.show_advanced());
    let focused = state.focused(form.show_advanced());

    let [form_area, flash_area, _, footer_area] = Layout::vertical([
        Constraint::Length(fields.len() as u16 * ROW_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let rows: Vec<FieldRow> = fields
        .iter()
        .map(|&field| FieldRow {
            label: field.label().to_string(),
            value: display_value(form, state, field),
            error: form.error(field).map(str::to_string),
            required: field.required() && (field != Field::Age || form.show_advanced()),
            focused: field == focused,
        })
        .collect();
    draw_field_rows(&rows, frame, form_area);

    if let Some(flash) = flash {
        let line = Paragraph::new(Span::styled(flash, Style::default().fg(Color::Green)));
        frame.render_widget(line, flash_area);
    }

    let hint = if form.show_advanced() {
        "Tab: next  ←/→: change  Space: toggle  Enter: submit  F2: basic  F3: submissions  Esc: quit"
    } else {
        "Tab: next  Enter: submit  F2: more fields  F3: submissions  F1: help  Esc: quit"
    };
    let footer =
        Paragraph::new(Line::from(hint)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_str(state: &mut FormEntryState, form: &mut FormState, text: &str) {
        for ch in text.chars() {
            state.handle_key(press(KeyCode::Char(ch)), form);
        }
    }

    // --- Focus ---

    #[test]
    fn focus_starts_on_name() {
        let state = FormEntryState::new();
        assert_eq!(state.focused(false), Field::Name);
    }

    #[test]
    fn tab_cycles_basic_fields() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        state.handle_key(press(KeyCode::Tab), &mut form);
        assert_eq!(state.focused(false), Field::Email);
        state.handle_key(press(KeyCode::Tab), &mut form);
        assert_eq!(state.focused(false), Field::Message);
        state.handle_key(press(KeyCode::Tab), &mut form);
        assert_eq!(state.focused(false), Field::Name);
    }

    #[test]
    fn reset_returns_focus_to_first_field() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        state.handle_key(press(KeyCode::Tab), &mut form);
        state.reset();
        assert_eq!(state.focused(false), Field::Name);
    }

    #[test]
    fn backtab_wraps_backward() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        state.handle_key(press(KeyCode::BackTab), &mut form);
        assert_eq!(state.focused(false), Field::Message);
    }

    #[test]
    fn advanced_focus_order_includes_optional_fields() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        state.handle_key(press(KeyCode::F(2)), &mut form);
        assert!(form.show_advanced());

        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(state.focused(true));
            state.handle_key(press(KeyCode::Tab), &mut form);
        }
        assert_eq!(seen, ADVANCED_FIELDS);
    }

    #[test]
    fn toggle_keeps_focused_field_when_still_visible() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        state.handle_key(press(KeyCode::Tab), &mut form); // Email
        state.handle_key(press(KeyCode::F(2)), &mut form);
        assert_eq!(state.focused(true), Field::Email);
        state.handle_key(press(KeyCode::F(2)), &mut form);
        assert_eq!(state.focused(false), Field::Email);
    }

    #[test]
    fn toggle_off_while_on_hidden_field_resets_focus() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        state.handle_key(press(KeyCode::F(2)), &mut form);
        state.handle_key(press(KeyCode::Tab), &mut form);
        state.handle_key(press(KeyCode::Tab), &mut form); // Age
        assert_eq!(state.focused(true), Field::Age);

        state.handle_key(press(KeyCode::F(2)), &mut form);
        assert_eq!(state.focused(false), Field::Name);
    }

    // --- Text editing ---

    #[test]
    fn typing_fills_the_focused_field() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        type_str(&mut state, &mut form, "Jo");
        state.handle_key(press(KeyCode::Tab), &mut form);
        type_str(&mut state, &mut form, "jo@x.com");
        assert_eq!(form.draft().name, "Jo");
        assert_eq!(form.draft().email, "jo@x.com");
    }

    #[test]
    fn backspace_deletes_last_char() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        type_str(&mut state, &mut form, "Jon");
        state.handle_key(press(KeyCode::Backspace), &mut form);
        assert_eq!(form.draft().name, "Jo");
    }

    #[test]
    fn backspace_on_empty_field_is_noop() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        state.handle_key(press(KeyCode::Backspace), &mut form);
        assert_eq!(form.draft().name, "");
    }

    #[test]
    fn space_is_a_normal_char_in_text_fields() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        type_str(&mut state, &mut form, "Jo Ann");
        assert_eq!(form.draft().name, "Jo Ann");
    }

    #[test]
    fn typing_clears_the_field_error() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        let dir = tempfile::tempdir().unwrap();
        let mut store = crate::storage::SubmissionStore::with_path(dir.path()).unwrap();
        form.submit(&mut store);
        assert!(form.error(Field::Name).is_some());

        state.handle_key(press(KeyCode::Char('J')), &mut form);
        assert!(form.error(Field::Name).is_none());
    }

    // --- Country ---

    fn focus_country(state: &mut FormEntryState, form: &mut FormState) {
        state.handle_key(press(KeyCode::F(2)), form);
        for _ in 0..3 {
            state.handle_key(press(KeyCode::Tab), form);
        }
        assert_eq!(state.focused(true), Field::Country);
    }

    #[test]
    fn right_cycles_country_forward() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        focus_country(&mut state, &mut form);

        state.handle_key(press(KeyCode::Right), &mut form);
        assert_eq!(form.draft().country, "USA");
        state.handle_key(press(KeyCode::Right), &mut form);
        assert_eq!(form.draft().country, "Canada");
    }

    #[test]
    fn left_from_none_wraps_to_last_country() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        focus_country(&mut state, &mut form);

        state.handle_key(press(KeyCode::Left), &mut form);
        assert_eq!(form.draft().country, "Germany");
    }

    #[test]
    fn country_ignores_typed_chars() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        focus_country(&mut state, &mut form);
        type_str(&mut state, &mut form, "xyz");
        assert_eq!(form.draft().country, "");
    }

    // --- Interests ---

    fn focus_interests(state: &mut FormEntryState, form: &mut FormState) {
        state.handle_key(press(KeyCode::F(2)), form);
        for _ in 0..4 {
            state.handle_key(press(KeyCode::Tab), form);
        }
        assert_eq!(state.focused(true), Field::Interests);
    }

    #[test]
    fn space_toggles_interest_under_cursor() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        focus_interests(&mut state, &mut form);

        state.handle_key(press(KeyCode::Char(' ')), &mut form);
        assert_eq!(form.draft().interests, vec!["Technology"]);
        state.handle_key(press(KeyCode::Char(' ')), &mut form);
        assert!(form.draft().interests.is_empty());
    }

    #[test]
    fn arrows_move_interest_cursor_with_wrap() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        focus_interests(&mut state, &mut form);

        state.handle_key(press(KeyCode::Right), &mut form);
        assert_eq!(state.interest_cursor(), 1);
        state.handle_key(press(KeyCode::Left), &mut form);
        state.handle_key(press(KeyCode::Left), &mut form);
        assert_eq!(state.interest_cursor(), INTERESTS.len() - 1);
    }

    #[test]
    fn cursor_and_space_select_a_later_interest() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        focus_interests(&mut state, &mut form);

        state.handle_key(press(KeyCode::Right), &mut form);
        state.handle_key(press(KeyCode::Char(' ')), &mut form);
        assert_eq!(form.draft().interests, vec!["Sports"]);
    }

    // --- Actions ---

    #[test]
    fn enter_requests_submit() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        assert_eq!(state.handle_key(press(KeyCode::Enter), &mut form), Action::Submit);
    }

    #[test]
    fn esc_requests_quit() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        assert_eq!(state.handle_key(press(KeyCode::Esc), &mut form), Action::Quit);
    }

    #[test]
    fn f3_opens_submissions() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        assert_eq!(
            state.handle_key(press(KeyCode::F(3)), &mut form),
            Action::Navigate(Screen::Submissions)
        );
    }

    #[test]
    fn f1_opens_help() {
        let mut state = FormEntryState::new();
        let mut form = FormState::new();
        assert_eq!(
            state.handle_key(press(KeyCode::F(1)), &mut form),
            Action::Navigate(Screen::Help)
        );
    }

    // --- Rendering helpers ---

    #[test]
    fn interests_line_marks_selection_and_cursor() {
        let mut form = FormState::new();
        form.toggle_interest("Sports", true);
        let line = interests_line(&form, 0, true);
        assert!(line.contains("\u{2039}[ ] Technology\u{203a}"));
        assert!(line.contains("[x] Sports"));
    }

    #[test]
    fn interests_line_hides_cursor_when_unfocused() {
        let form = FormState::new();
        let line = interests_line(&form, 0, false);
        assert!(!line.contains('\u{2039}'));
    }

    #[test]
    fn display_value_shows_none_for_empty_country() {
        let form = FormState::new();
        let state = FormEntryState::new();
        assert_eq!(display_value(&form, &state, Field::Country), "(none)");
    }
}
