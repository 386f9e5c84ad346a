//! Model-View-Intent primitives for the UI layer.
//!
//! ```text
//! key / notice ──→ Intent ──→ Reducer ──→ State ──→ render
//! ```
//!
//! Reducers are the only place popup and dialog state changes.

/// State owned by a dialog or overlay. `Default` is the hidden state.
pub trait UiState: Clone + PartialEq + Default + 'static {}

/// An action applied to a [`UiState`].
pub trait Intent: 'static {}

/// Pure transition `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Apply a reducer to a state stored behind `&mut`.
pub fn dispatch<R: Reducer>(state: &mut R::State, intent: R::Intent) {
    *state = R::reduce(std::mem::take(state), intent);
}
