//! Submission contract of the signup component: check order, notifier
//! calls, and the confirmation/reset lifecycle.

mod common;

use common::*;
use signup_form::form::{
    validate, FieldId, FormInput, Policy, SignupForm, ValidationError, ViewMode,
};
use signup_form::notify::NoticeKind;
use std::time::Duration;

fn submit(input: &FormInput) -> (SignupForm, RecordingNotifier, Result<u64, ValidationError>) {
    let mut form = form_with(input);
    let mut notifier = RecordingNotifier::default();
    let result = form.submit(&mut notifier).map(|p| p.generation);
    (form, notifier, result)
}

// -- concrete scenarios -------------------------------------------------------

#[test]
fn missing_name_is_incomplete() {
    let input = FormInput::new("", "a@b.com", "secret1", "30");
    let (form, notifier, result) = submit(&input);

    assert_eq!(result, Err(ValidationError::IncompleteFields));
    assert_eq!(form.view_mode(), ViewMode::Form);
    assert_eq!(notifier.notices.len(), 1);
    assert_eq!(notifier.notices[0].kind, NoticeKind::Error);
    assert_eq!(notifier.notices[0].title, "Oops...");
    assert_eq!(notifier.notices[0].message, "⚠️ Please fill all fields!");
}

#[test]
fn age_over_limit_is_restricted() {
    let input = FormInput::new("Ann", "a@b.com", "secret1", "45");
    let (form, notifier, result) = submit(&input);

    assert_eq!(result, Err(ValidationError::AgeRestriction { max_age: 40 }));
    assert_eq!(form.view_mode(), ViewMode::Form);
    assert_eq!(notifier.notices.len(), 1);
    assert_eq!(notifier.notices[0].kind, NoticeKind::Warning);
    assert_eq!(notifier.notices[0].title, "Age Restriction");
}

#[test]
fn short_password_is_weak() {
    let input = FormInput::new("Ann", "a@b.com", "abc", "30");
    let (form, notifier, result) = submit(&input);

    assert_eq!(result, Err(ValidationError::WeakPassword { min_length: 6 }));
    assert_eq!(form.view_mode(), ViewMode::Form);
    assert_eq!(notifier.notices.len(), 1);
    assert_eq!(notifier.notices[0].kind, NoticeKind::Error);
    assert_eq!(notifier.notices[0].title, "Weak Password");
}

#[test]
fn valid_input_succeeds_and_confirms_after_delivery() {
    let (mut form, notifier, result) = submit(&valid_input());

    let generation = result.expect("valid input accepted");
    assert_eq!(notifier.notices.len(), 1);
    assert_eq!(notifier.notices[0].kind, NoticeKind::Success);
    assert_eq!(notifier.notices[0].title, "Signup Successful!");
    assert_eq!(notifier.notices[0].message, "Welcome Ann!");

    // Still on the form until the delay elapses.
    assert_eq!(form.view_mode(), ViewMode::Form);
    assert_eq!(form.pending().map(|p| p.delay), Some(Duration::from_secs(2)));

    assert!(form.confirm(generation));
    assert_eq!(form.view_mode(), ViewMode::Confirmation);
    assert_eq!(form.input(), &valid_input());
}

#[test]
fn reset_from_confirmation_clears_everything() {
    let (mut form, _, result) = submit(&valid_input());
    form.toggle_password_visibility();
    assert!(form.confirm(result.unwrap()));

    form.reset();

    assert_eq!(form.view_mode(), ViewMode::Form);
    assert!(form.input().is_empty());
    assert!(!form.password_visible());
    assert_eq!(form.pending(), None);
}

// -- properties ---------------------------------------------------------------

#[test]
fn any_blank_field_is_incomplete_even_when_others_are_invalid() {
    // Age and password would fail too; completeness is checked first.
    let base = FormInput::new("Ann", "a@b.com", "abc", "99");
    for field in FieldId::ALL {
        for blank in ["", "   "] {
            let mut input = base.clone();
            input.set(field, blank.to_string());
            assert_eq!(
                validate(&input, &Policy::default()),
                Err(ValidationError::IncompleteFields),
                "{:?} = {:?}",
                field,
                blank
            );
        }
    }
}

#[test]
fn age_is_checked_before_password() {
    let input = FormInput::new("Ann", "a@b.com", "abc", "41");
    assert_eq!(
        validate(&input, &Policy::default()),
        Err(ValidationError::AgeRestriction { max_age: 40 })
    );
}

#[test]
fn word_ages_are_not_numbers_and_pass() {
    for age in ["inf", "INFINITY", "nan", "forty"] {
        let input = FormInput::new("Ann", "a@b.com", "secret1", age);
        assert_eq!(validate(&input, &Policy::default()), Ok(()), "age {age:?}");
    }
}

#[test]
fn astral_characters_count_twice_toward_password_length() {
    let input = FormInput::new("Ann", "a@b.com", "😀😀😀", "30");
    assert_eq!(validate(&input, &Policy::default()), Ok(()));
    let input = FormInput::new("Ann", "a@b.com", "😀😀", "30");
    assert_eq!(
        validate(&input, &Policy::default()),
        Err(ValidationError::WeakPassword { min_length: 6 })
    );
}

#[test]
fn age_boundary_is_inclusive() {
    for age in ["0", "18", "39", "40", "40.0", " 40 "] {
        let input = FormInput::new("Ann", "a@b.com", "secret1", age);
        assert_eq!(validate(&input, &Policy::default()), Ok(()), "age {age:?}");
    }
    for age in ["41", "40.01", "100", "1e3", "0x29", "Infinity"] {
        let input = FormInput::new("Ann", "a@b.com", "secret1", age);
        assert_eq!(
            validate(&input, &Policy::default()),
            Err(ValidationError::AgeRestriction { max_age: 40 }),
            "age {age:?}"
        );
    }
}

#[test]
fn non_numeric_age_passes_age_check() {
    let input = FormInput::new("Ann", "a@b.com", "secret1", "forty-five");
    assert_eq!(validate(&input, &Policy::default()), Ok(()));

    // It is still caught by a later check when that check fails.
    let weak = FormInput::new("Ann", "a@b.com", "abc", "forty-five");
    assert_eq!(
        validate(&weak, &Policy::default()),
        Err(ValidationError::WeakPassword { min_length: 6 })
    );
}

#[test]
fn password_boundary() {
    for (password, ok) in [("abcde", false), ("abcdef", true), ("abcdefg", true)] {
        let input = FormInput::new("Ann", "a@b.com", password, "30");
        assert_eq!(validate(&input, &Policy::default()).is_ok(), ok, "{password:?}");
    }
}

#[test]
fn custom_policy_thresholds_apply() {
    let policy = Policy {
        max_age: 65,
        min_password_length: 10,
    };
    let input = FormInput::new("Ann", "a@b.com", "secret1", "60");
    assert_eq!(
        validate(&input, &policy),
        Err(ValidationError::WeakPassword { min_length: 10 })
    );
    let err = ValidationError::WeakPassword { min_length: 10 };
    assert_eq!(
        err.notice().message,
        "⚠️ Password must be at least 10 characters long!"
    );
}

#[test]
fn no_outcome_mutates_input() {
    let inputs = [
        FormInput::new("", "a@b.com", "secret1", "30"),
        FormInput::new("Ann", "a@b.com", "secret1", "45"),
        FormInput::new("Ann", "a@b.com", "abc", "30"),
        valid_input(),
    ];
    for input in inputs {
        let (form, notifier, _) = submit(&input);
        assert_eq!(form.input(), &input);
        assert_eq!(notifier.notices.len(), 1, "exactly one notice per submit");
    }
}

#[test]
fn reset_always_returns_to_empty_form() {
    let mut fresh = SignupForm::default();
    fresh.reset();
    assert!(fresh.input().is_empty());

    let (mut pending, _, _) = submit(&valid_input());
    pending.reset();
    assert!(pending.input().is_empty());
    assert_eq!(pending.view_mode(), ViewMode::Form);
    assert_eq!(pending.pending(), None);
}

// -- delayed transition -------------------------------------------------------

#[test]
fn stale_generation_is_ignored() {
    let mut form = form_with(&valid_input());
    let mut notifier = RecordingNotifier::default();
    let first = form.submit(&mut notifier).unwrap();
    let second = form.submit(&mut notifier).unwrap();

    assert!(!form.confirm(first.generation));
    assert_eq!(form.view_mode(), ViewMode::Form);
    assert!(form.confirm(second.generation));
    assert_eq!(form.view_mode(), ViewMode::Confirmation);
}

#[test]
fn reset_cancels_pending_confirmation() {
    let (mut form, _, result) = submit(&valid_input());
    form.reset();
    assert!(!form.confirm(result.unwrap()));
    assert_eq!(form.view_mode(), ViewMode::Form);
}

#[test]
fn set_field_touches_only_one_field() {
    let mut form = form_with(&valid_input());
    form.set_field(FieldId::Age, "31");
    assert_eq!(form.input(), &FormInput::new("Ann", "a@b.com", "secret1", "31"));
}
