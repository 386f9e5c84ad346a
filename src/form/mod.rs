//! Signup form core.
//!
//! ```text
//! set_field ──→ FormInput
//!                  │
//! submit ──→ validate ──→ Err ──→ notify(error | warning)
//!                  │
//!                  └──→ Ok ──→ notify(success) ──→ PendingConfirmation
//!                                                      │ (after delay)
//! confirm(generation) ──→ ViewMode::Confirmation ◄─────┘
//! reset ──→ empty FormInput + ViewMode::Form
//! ```

mod component;
mod input;
mod policy;
mod validation;

pub use component::{PendingConfirmation, SignupForm, ViewMode};
pub use input::{FieldId, FormInput};
pub use policy::{Policy, CONFIRM_DELAY, MAX_AGE, MIN_PASSWORD_LENGTH};
pub use validation::{parse_age, password_length, validate, ValidationError};
