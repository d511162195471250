use crate::candidate::{Candidate, FieldId};
use crate::config::IntakeConfig;
use crate::form::{ErrorMap, FieldEdit, FormState, SubmitOutcome};
use crate::submit::{LogSink, SubmissionSink};
use crate::theme::Palette;

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Insert,
}

/// Application state: the form session plus the UI bookkeeping around it.
pub struct App {
    form: FormState,
    sink: Box<dyn SubmissionSink>,
    focus: FieldId,
    cursor: usize,
    mode: InputMode,
    status_message: Option<String>,
    submitted: usize,
    should_quit: bool,
    palette: Palette,
}

impl App {
    pub fn new() -> Self {
        let config = IntakeConfig::load().unwrap_or_default();
        let palette = if config.high_contrast() {
            Palette::high_contrast()
        } else {
            Palette::standard()
        };

        let mut app = Self::with_sink(Box::new(LogSink));
        app.palette = palette;
        app
    }

    /// Build an app around a custom submission sink.
    pub fn with_sink(sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            form: FormState::new(),
            sink,
            focus: FieldId::ALL[0],
            cursor: 0,
            mode: InputMode::default(),
            status_message: None,
            submitted: 0,
            should_quit: false,
            palette: Palette::standard(),
        }
    }

    pub fn candidate(&self) -> &Candidate {
        self.form.candidate()
    }

    pub fn errors(&self) -> &ErrorMap {
        self.form.errors()
    }

    pub fn focus(&self) -> FieldId {
        self.focus
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn input_mode(&self) -> InputMode {
        self.mode
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn submitted_count(&self) -> usize {
        self.submitted
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn enter_insert_mode(&mut self) {
        self.mode = InputMode::Insert;
        self.cursor = self.clamp_cursor(self.cursor);
    }

    pub fn enter_insert_mode_at_end(&mut self) {
        self.mode = InputMode::Insert;
        self.move_cursor_end();
    }

    pub fn enter_normal_mode(&mut self) {
        self.mode = InputMode::Normal;
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    pub fn focus_first(&mut self) {
        self.set_focus(FieldId::ALL[0]);
    }

    pub fn focus_last(&mut self) {
        self.set_focus(FieldId::ALL[FieldId::ALL.len() - 1]);
    }

    pub fn focus_is_last(&self) -> bool {
        self.focus.is_last()
    }

    fn set_focus(&mut self, field: FieldId) {
        self.focus = field;
        self.move_cursor_end();
    }

    /// Current text of the focused field.
    pub fn focused_text(&self) -> &str {
        self.form.candidate().text(self.focus)
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor.saturating_add(1);
        self.cursor = self.clamp_cursor(cursor_moved_right);
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.focused_text().chars().count();
    }

    /// Insert a character at the cursor. Every keystroke routes one
    /// `FieldEdit` through the reducer, so the candidate is mutated as the
    /// user types.
    pub fn enter_char(&mut self, new_char: char) {
        let mut text = self.focused_text().to_string();
        let index = byte_index(&text, self.cursor);
        text.insert(index, new_char);
        self.apply_focused(text);
        self.move_cursor_right();
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let text = self.focused_text();
        let before_char_to_delete = text.chars().take(self.cursor - 1);
        let after_char_to_delete = text.chars().skip(self.cursor);
        let text: String = before_char_to_delete.chain(after_char_to_delete).collect();

        self.apply_focused(text);
        self.move_cursor_left();
    }

    pub fn delete_char_forward(&mut self) {
        let text = self.focused_text();
        if self.cursor >= text.chars().count() {
            return;
        }

        let before_char = text.chars().take(self.cursor);
        let after_char = text.chars().skip(self.cursor + 1);
        let text: String = before_char.chain(after_char).collect();

        self.apply_focused(text);
    }

    /// Clear the focused field. Clearing the resume path detaches the file.
    pub fn clear_field(&mut self) {
        self.apply_focused(String::new());
        self.reset_cursor();
    }

    /// Run a submit attempt against the app's sink.
    pub fn submit(&mut self) {
        match self.form.submit(self.sink.as_mut()) {
            SubmitOutcome::Submitted => {
                self.submitted += 1;
                self.focus = FieldId::ALL[0];
                self.cursor = 0;
                self.status_message = Some("Candidate submitted".to_string());
            }
            SubmitOutcome::Rejected { missing } => {
                let noun = if missing == 1 { "field" } else { "fields" };
                self.status_message = Some(format!("{missing} required {noun} missing"));
                if let Some(first) = self.form.errors().first_field() {
                    self.set_focus(first);
                }
            }
        }
    }

    fn apply_focused(&mut self, text: String) {
        self.form.apply(FieldEdit::from_text(self.focus, text));
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.focused_text().chars().count())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn byte_index(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .map(|(i, _)| i)
        .nth(cursor)
        .unwrap_or(text.len())
}
