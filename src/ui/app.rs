use crate::config::Config;
use crate::form::{FieldId, SignupForm, ViewMode};
use crate::scheduler::TransitionScheduler;
use crate::ui::alert::{AlertIntent, AlertReducer, AlertState, PopupNotifier};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owns the signup component plus the UI-only state around it
/// (focused field, alert popup) and the transition timer.
pub struct App {
    should_quit: bool,
    form: SignupForm,
    focus: FieldId,
    /// Popup alert (MVI pattern).
    alert: AlertState,
    /// Delivers confirmations back through `on_confirmation_due`.
    scheduler: Box<dyn TransitionScheduler>,
}

impl App {
    pub fn new(form: SignupForm, scheduler: Box<dyn TransitionScheduler>) -> Self {
        Self {
            should_quit: false,
            form,
            focus: FieldId::Name,
            alert: AlertState::default(),
            scheduler,
        }
    }

    pub fn from_config(config: &Config, scheduler: Box<dyn TransitionScheduler>) -> Self {
        Self::new(
            SignupForm::new(config.policy, config.ui.confirm_delay()),
            scheduler,
        )
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn view_mode(&self) -> ViewMode {
        self.form.view_mode()
    }

    pub fn focus(&self) -> FieldId {
        self.focus
    }

    pub fn alert(&self) -> &AlertState {
        &self.alert
    }

    // ========================================================================
    // Form editing
    // ========================================================================

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Append a typed character to the focused field.
    ///
    /// Characters the field's input control rejects are dropped.
    pub fn type_char(&mut self, ch: char) {
        if self.form.view_mode() != ViewMode::Form || !self.focus.accepts(ch) {
            return;
        }
        let mut value = self.form.input().get(self.focus).to_string();
        value.push(ch);
        self.form.set_field(self.focus, value);
    }

    pub fn backspace(&mut self) {
        if self.form.view_mode() != ViewMode::Form {
            return;
        }
        let mut value = self.form.input().get(self.focus).to_string();
        if value.pop().is_some() {
            self.form.set_field(self.focus, value);
        }
    }

    pub fn clear_focused_field(&mut self) {
        if self.form.view_mode() != ViewMode::Form {
            return;
        }
        self.form.set_field(self.focus, String::new());
    }

    pub fn toggle_password_visibility(&mut self) {
        self.form.toggle_password_visibility();
    }

    // ========================================================================
    // Submission and transitions
    // ========================================================================

    /// Validate and, on success, schedule the confirmation view.
    pub fn submit(&mut self) {
        if self.form.view_mode() != ViewMode::Form {
            return;
        }
        let mut notifier = PopupNotifier::new(&mut self.alert);
        if let Ok(pending) = self.form.submit(&mut notifier) {
            self.scheduler.schedule(pending);
        }
    }

    /// A scheduled confirmation fired.
    pub fn on_confirmation_due(&mut self, generation: u64) {
        self.form.confirm(generation);
    }

    /// Back to an empty form. Cancels any pending confirmation.
    pub fn reset(&mut self) {
        self.scheduler.cancel();
        self.form.reset();
        self.focus = FieldId::Name;
    }

    /// Called once before the app is dropped.
    pub fn teardown(&mut self) {
        if let Some(pending) = self.form.teardown() {
            tracing::debug!(
                generation = pending.generation,
                "dropping pending confirmation on teardown"
            );
        }
        self.scheduler.cancel();
    }

    // ========================================================================
    // Alert popup (MVI pattern)
    // ========================================================================

    pub fn dispatch_alert(&mut self, intent: AlertIntent) {
        dispatch_mvi!(self, alert, AlertReducer, intent);
    }

    pub fn dismiss_alert(&mut self) {
        self.dispatch_alert(AlertIntent::Dismiss);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.scheduler.cancel();
    }
}
