use std::time::Duration;

use crate::form::input::{FieldId, FormInput};
use crate::form::policy::{Policy, CONFIRM_DELAY};
use crate::form::validation::{validate, ValidationError};
use crate::notify::{Notice, Notifier};

/// Which view is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Form,
    Confirmation,
}

/// A scheduled switch to the confirmation view.
///
/// Only the most recent generation is honoured by `SignupForm::confirm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingConfirmation {
    pub generation: u64,
    pub delay: Duration,
}

/// State of the signup component. Its methods are the only mutators.
#[derive(Debug, Clone)]
pub struct SignupForm {
    input: FormInput,
    view: ViewMode,
    password_visible: bool,
    policy: Policy,
    confirm_delay: Duration,
    pending: Option<PendingConfirmation>,
    generation: u64,
}

impl SignupForm {
    pub fn new(policy: Policy, confirm_delay: Duration) -> Self {
        Self {
            input: FormInput::default(),
            view: ViewMode::Form,
            password_visible: false,
            policy,
            confirm_delay,
            pending: None,
            generation: 0,
        }
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn pending(&self) -> Option<PendingConfirmation> {
        self.pending
    }

    /// Replace one field. No validation happens here.
    pub fn set_field(&mut self, field: FieldId, value: impl Into<String>) {
        self.input.set(field, value.into());
        tracing::trace!(field = field.label(), "field updated");
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Validate the current input and notify the outcome exactly once.
    ///
    /// On success the returned `PendingConfirmation` must be delivered back
    /// through [`SignupForm::confirm`] after its delay. A newer successful
    /// submit supersedes any earlier pending confirmation. The input is never
    /// modified.
    pub fn submit(
        &mut self,
        notifier: &mut dyn Notifier,
    ) -> Result<PendingConfirmation, ValidationError> {
        if let Err(err) = validate(&self.input, &self.policy) {
            tracing::info!(reason = %err, "signup rejected");
            notifier.notify_notice(&err.notice());
            return Err(err);
        }

        notifier.notify_notice(&Notice::welcome(&self.input.name));

        self.generation += 1;
        let pending = PendingConfirmation {
            generation: self.generation,
            delay: self.confirm_delay,
        };
        self.pending = Some(pending);
        tracing::info!(
            generation = pending.generation,
            delay_ms = pending.delay.as_millis() as u64,
            "signup accepted, confirmation scheduled"
        );
        Ok(pending)
    }

    /// Switch to the confirmation view if `generation` is still pending.
    ///
    /// Returns false for stale, cancelled or duplicate deliveries.
    pub fn confirm(&mut self, generation: u64) -> bool {
        match self.pending {
            Some(pending) if pending.generation == generation => {
                self.pending = None;
                self.view = ViewMode::Confirmation;
                tracing::info!(generation, "showing confirmation");
                true
            }
            _ => {
                tracing::debug!(generation, "ignoring stale confirmation");
                false
            }
        }
    }

    /// Clear every field and return to the form view.
    pub fn reset(&mut self) {
        self.input = FormInput::default();
        self.view = ViewMode::Form;
        self.password_visible = false;
        self.pending = None;
        tracing::info!("form reset");
    }

    /// Drop any pending confirmation before the component goes away.
    pub fn teardown(&mut self) -> Option<PendingConfirmation> {
        self.pending.take()
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new(Policy::default(), CONFIRM_DELAY)
    }
}
