use crate::notify::Notice;
use crate::ui::mvi::UiState;

/// Popup alert overlay.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AlertState {
    #[default]
    Hidden,
    Visible {
        notice: Notice,
    },
}

impl UiState for AlertState {}

impl AlertState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Self::Visible { notice } => Some(notice),
            Self::Hidden => None,
        }
    }
}
