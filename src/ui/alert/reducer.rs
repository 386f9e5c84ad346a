use crate::ui::alert::intent::AlertIntent;
use crate::ui::alert::state::AlertState;
use crate::ui::mvi::Reducer;

pub struct AlertReducer;

impl Reducer for AlertReducer {
    type State = AlertState;
    type Intent = AlertIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AlertIntent::Show { notice } => AlertState::Visible { notice },
            AlertIntent::Dismiss => AlertState::Hidden,
        }
    }
}
