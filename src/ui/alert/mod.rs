mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_alert;
pub use intent::AlertIntent;
pub use reducer::AlertReducer;
pub use state::AlertState;

use crate::notify::{Notice, NoticeKind, Notifier};
use crate::ui::mvi::dispatch;

/// Notifier that shows each notice as the terminal popup.
pub struct PopupNotifier<'a> {
    state: &'a mut AlertState,
}

impl<'a> PopupNotifier<'a> {
    pub fn new(state: &'a mut AlertState) -> Self {
        Self { state }
    }
}

impl Notifier for PopupNotifier<'_> {
    fn notify(&mut self, kind: NoticeKind, title: &str, message: &str) {
        tracing::debug!(%kind, title, "showing alert");
        let notice = Notice::new(kind, title, message);
        dispatch::<AlertReducer>(&mut *self.state, AlertIntent::Show { notice });
    }
}
