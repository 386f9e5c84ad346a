use thiserror::Error;

use crate::form::input::FormInput;
use crate::form::policy::Policy;
use crate::notify::{Notice, NoticeKind};

/// Why a submission was rejected. All variants are user-correctable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("one or more required fields are blank")]
    IncompleteFields,

    #[error("age exceeds the maximum of {max_age}")]
    AgeRestriction { max_age: u32 },

    #[error("password is shorter than {min_length} characters")]
    WeakPassword { min_length: usize },
}

impl ValidationError {
    /// The popup shown for this rejection.
    pub fn notice(&self) -> Notice {
        match self {
            ValidationError::IncompleteFields => Notice::new(
                NoticeKind::Error,
                "Oops...",
                "⚠️ Please fill all fields!",
            ),
            ValidationError::AgeRestriction { max_age } => Notice::new(
                NoticeKind::Warning,
                "Age Restriction",
                format!("⚠️ You must be at least {} years old!", max_age),
            ),
            ValidationError::WeakPassword { min_length } => Notice::new(
                NoticeKind::Error,
                "Weak Password",
                format!("⚠️ Password must be at least {} characters long!", min_length),
            ),
        }
    }
}

/// Runs the submission checks in order, stopping at the first failure:
/// completeness, then age, then password length.
pub fn validate(input: &FormInput, policy: &Policy) -> Result<(), ValidationError> {
    if input.has_blank_field() {
        return Err(ValidationError::IncompleteFields);
    }

    match parse_age(&input.age) {
        Some(age) if age > f64::from(policy.max_age) => {
            return Err(ValidationError::AgeRestriction {
                max_age: policy.max_age,
            });
        }
        Some(_) => {}
        // Not a number: never exceeds the maximum, so the age check passes.
        None => tracing::debug!("age is not numeric, skipping age policy"),
    }

    if password_length(&input.password) < policy.min_password_length {
        return Err(ValidationError::WeakPassword {
            min_length: policy.min_password_length,
        });
    }

    Ok(())
}

/// Parses the age text as a number. `None` when it is not a number.
///
/// Accepts decimal and exponent notation, `0x`/`0o`/`0b` integer literals
/// and the exact spellings `Infinity`, `+Infinity` and `-Infinity`. Other
/// words (`inf`, `nan`, `infinity`) are not numbers.
pub fn parse_age(raw: &str) -> Option<f64> {
    let text = raw.trim();
    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if digits.is_empty() {
            return None;
        }
        return digits.chars().try_fold(0.0_f64, |value, ch| {
            ch.to_digit(radix)
                .map(|digit| value * f64::from(radix) + f64::from(digit))
        });
    }

    // `f64::from_str` also takes "inf" and "nan" in any case.
    if text
        .chars()
        .any(|ch| ch.is_ascii_alphabetic() && !matches!(ch, 'e' | 'E'))
    {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Password length in UTF-16 code units, so characters outside the Basic
/// Multilingual Plane count twice.
pub fn password_length(password: &str) -> usize {
    password.encode_utf16().count()
}
