use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tracing::warn;

use crate::model::{FormState, SubmitOutcome};
use crate::storage::SubmissionStore;

use super::action::Action;
use super::error::AppError;
use super::screens::form_entry::{FormEntryState, draw_form_entry};
use super::screens::help::{HelpState, draw_help};
use super::screens::submissions::{SubmissionsState, draw_submissions};
use super::widgets::{StatusBarContext, draw_status_bar};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The registration form (home screen).
    FormEntry,
    /// Table of stored submissions.
    Submissions,
    /// Keybinding help.
    Help,
}

/// Top-level application state.
///
/// Owns the form state and the submission store; screens return [`Action`]
/// values and the `App` applies them, so all business logic stays in the
/// model and storage layers.
pub struct App {
    screen: Screen,
    form: FormState,
    store: SubmissionStore,
    entry: FormEntryState,
    submissions: SubmissionsState,
    help: HelpState,
    flash: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` starting on the [`Screen::FormEntry`] screen.
    pub fn new(store: SubmissionStore) -> Self {
        Self {
            screen: Screen::FormEntry,
            form: FormState::new(),
            store,
            entry: FormEntryState::new(),
            submissions: SubmissionsState::new(),
            help: HelpState::new(),
            flash: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the status bar and the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [status_area, body_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(frame.area());

        let ctx = StatusBarContext {
            submission_count: self.store.list().len(),
            advanced_shown: self.form.show_advanced(),
        };
        draw_status_bar(&ctx, frame, status_area);

        match self.screen {
            Screen::FormEntry => {
                draw_form_entry(&self.entry, &self.form, self.flash.as_deref(), frame, body_area);
            }
            Screen::Submissions => {
                draw_submissions(&self.submissions, self.store.list(), frame, body_area);
            }
            Screen::Help => draw_help(&self.help, frame, body_area),
        }
    }

    /// Dispatches a key event to the current screen and applies the
    /// resulting action.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = match self.screen {
            Screen::FormEntry => self.entry.handle_key(key, &mut self.form),
            Screen::Submissions => self.submissions.handle_key(key, self.store.list().len()),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    /// Applies an action returned by a screen handler.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => {
                if screen == Screen::Help {
                    self.help.set_origin(self.screen);
                    self.help.reset();
                }
                // Coming back from help keeps the cursor where it was
                if screen == Screen::Submissions && self.screen == Screen::FormEntry {
                    self.submissions.reset();
                }
                self.flash = None;
                self.screen = screen;
            }
            Action::Submit => match self.form.submit(&mut self.store) {
                SubmitOutcome::Accepted => {
                    self.entry.reset();
                    self.flash = Some("Form submitted successfully!".to_string());
                }
                SubmitOutcome::Rejected => self.flash = None,
            },
            Action::Delete(index) => {
                if let Some(id) = self.store.list().get(index).map(|s| s.id)
                    && let Err(e) = self.store.remove(id)
                {
                    warn!(error = %e, "could not persist deletion; in-memory list already updated");
                }
                self.submissions.clamp(self.store.list().len());
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns a reference to the form state.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Returns a reference to the submission store.
    pub fn store(&self) -> &SubmissionStore {
        &self.store
    }

    /// Returns the current flash message, if any.
    pub fn flash(&self) -> Option<&str> {
        self.flash.as_deref()
    }
}
