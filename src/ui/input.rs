use crate::form::ViewMode;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Raw mode delivers Ctrl+C as a key, not a signal.
    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // The popup is modal.
    if app.alert().is_visible() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_alert();
        }
        return;
    }

    match app.view_mode() {
        ViewMode::Form => handle_form_key(app, key),
        ViewMode::Confirmation => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('b') | KeyCode::Char('B')) {
                app.reset();
            }
        }
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 't') {
        app.toggle_password_visibility();
        return;
    }
    if is_ctrl_char(key, 'u') {
        app.clear_focused_field();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_previous(),
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.type_char(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
