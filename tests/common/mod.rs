//! Shared test utilities: recording notifier, manual scheduler, key helpers.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use parking_lot::Mutex;
use signup_form::form::{FieldId, FormInput, PendingConfirmation, SignupForm};
use signup_form::notify::{Notice, NoticeKind, Notifier};
use signup_form::scheduler::TransitionScheduler;
use signup_form::ui::app::App;
use std::sync::Arc;

/// Notifier that keeps every notice it receives.
#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str) {
        self.notices.push(Notice::new(kind, title, message));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerCall {
    Schedule(PendingConfirmation),
    Cancel,
}

pub type SchedulerLog = Arc<Mutex<Vec<SchedulerCall>>>;

/// Scheduler that never fires on its own; tests deliver generations by hand.
pub struct ManualScheduler {
    log: SchedulerLog,
}

impl TransitionScheduler for ManualScheduler {
    fn schedule(&mut self, pending: PendingConfirmation) {
        self.log.lock().push(SchedulerCall::Schedule(pending));
    }

    fn cancel(&mut self) {
        self.log.lock().push(SchedulerCall::Cancel);
    }
}

pub fn manual_scheduler() -> (Box<dyn TransitionScheduler>, SchedulerLog) {
    let log: SchedulerLog = Arc::new(Mutex::new(Vec::new()));
    let scheduler = ManualScheduler {
        log: Arc::clone(&log),
    };
    (Box::new(scheduler), log)
}

/// Most recently scheduled confirmation.
pub fn last_scheduled(log: &SchedulerLog) -> Option<PendingConfirmation> {
    log.lock().iter().rev().find_map(|call| match call {
        SchedulerCall::Schedule(pending) => Some(*pending),
        SchedulerCall::Cancel => None,
    })
}

pub fn make_app() -> (App, SchedulerLog) {
    let (scheduler, log) = manual_scheduler();
    (App::new(SignupForm::default(), scheduler), log)
}

/// Form with the given values already entered.
pub fn form_with(input: &FormInput) -> SignupForm {
    let mut form = SignupForm::default();
    for field in FieldId::ALL {
        form.set_field(field, input.get(field));
    }
    form
}

pub fn valid_input() -> FormInput {
    FormInput::new("Ann", "a@b.com", "secret1", "30")
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Type `text` into the focused field via key events.
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        signup_form::ui::input::handle_key(app, key(KeyCode::Char(ch)));
    }
}

/// Fill all four fields through the keyboard, leaving focus on Age.
pub fn fill_form(app: &mut App, input: &FormInput) {
    for (index, field) in FieldId::ALL.iter().enumerate() {
        type_text(app, input.get(*field));
        if index + 1 < FieldId::ALL.len() {
            signup_form::ui::input::handle_key(app, key(KeyCode::Tab));
        }
    }
}
