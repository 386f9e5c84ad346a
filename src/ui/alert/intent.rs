use crate::notify::Notice;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AlertIntent {
    /// Show a notice, replacing whatever is on screen.
    Show { notice: Notice },
    /// User closed the popup (Enter or Esc).
    Dismiss,
}

impl Intent for AlertIntent {}
