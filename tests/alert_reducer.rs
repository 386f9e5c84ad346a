use signup_form::notify::{Notice, NoticeKind, Notifier};
use signup_form::ui::alert::{AlertIntent, AlertReducer, AlertState, PopupNotifier};
use signup_form::ui::mvi::Reducer;

fn notice(kind: NoticeKind) -> Notice {
    Notice::new(kind, "Title", "Message")
}

#[test]
fn hidden_is_default() {
    assert_eq!(AlertState::default(), AlertState::Hidden);
    assert!(AlertState::default().notice().is_none());
}

#[test]
fn show_makes_alert_visible() {
    let state = AlertReducer::reduce(
        AlertState::Hidden,
        AlertIntent::Show {
            notice: notice(NoticeKind::Error),
        },
    );
    assert!(state.is_visible());
    assert_eq!(state.notice(), Some(&notice(NoticeKind::Error)));
}

#[test]
fn show_replaces_current_notice() {
    let state = AlertState::Visible {
        notice: notice(NoticeKind::Error),
    };
    let state = AlertReducer::reduce(
        state,
        AlertIntent::Show {
            notice: notice(NoticeKind::Success),
        },
    );
    assert_eq!(state.notice().map(|n| n.kind), Some(NoticeKind::Success));
}

#[test]
fn dismiss_hides_alert() {
    let state = AlertState::Visible {
        notice: notice(NoticeKind::Warning),
    };
    let state = AlertReducer::reduce(state, AlertIntent::Dismiss);
    assert!(!state.is_visible());
}

#[test]
fn dismiss_on_hidden_is_noop() {
    let state = AlertReducer::reduce(AlertState::Hidden, AlertIntent::Dismiss);
    assert_eq!(state, AlertState::Hidden);
}

#[test]
fn popup_notifier_shows_notice() {
    let mut state = AlertState::Hidden;
    PopupNotifier::new(&mut state).notify(NoticeKind::Warning, "Age Restriction", "too old");
    assert_eq!(
        state.notice(),
        Some(&Notice::new(NoticeKind::Warning, "Age Restriction", "too old"))
    );
}
