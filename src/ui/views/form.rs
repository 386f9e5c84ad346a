use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::form::{FieldId, SignupForm};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, ACCENT_DIM, GLOBAL_BORDER, HEADER_TEXT, PLACEHOLDER};
use crate::ui::views::{mask, visible_tail};
use unicode_width::UnicodeWidthStr;

const CARD_WIDTH: u16 = 52;
const FIELD_HEIGHT: u16 = 3;
// title (2) + four fields + spacer (1) + button (1) + borders (2)
const CARD_HEIGHT: u16 = 2 + FIELD_HEIGHT * 4 + 1 + 1 + 2;

/// Draw the entry form. The cursor is placed in `focus` when `show_cursor`.
pub fn render_form(
    frame: &mut Frame,
    area: Rect,
    form: &SignupForm,
    focus: FieldId,
    show_cursor: bool,
) {
    let card = centered_rect_by_size(area, CARD_WIDTH, CARD_HEIGHT);
    frame.render_widget(Clear, card);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        "Create Your Account",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    for (index, field) in FieldId::ALL.iter().enumerate() {
        let focused = *field == focus;
        if let Some(cursor) = render_field(frame, rows[index + 1], form, *field, focused) {
            if focused && show_cursor {
                frame.set_cursor_position(cursor);
            }
        }
    }

    let button = Paragraph::new(Line::from(Span::styled(
        "  Sign Up (Enter)  ",
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACCENT_DIM)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(button, rows[6]);
}

/// Draws one labelled input box and returns where the cursor would go.
fn render_field(
    frame: &mut Frame,
    area: Rect,
    form: &SignupForm,
    field: FieldId,
    focused: bool,
) -> Option<(u16, u16)> {
    let border_color = if focused { ACCENT } else { GLOBAL_BORDER };
    let label = match field {
        FieldId::Password if form.password_visible() => " Password (Ctrl+T: hide) ".to_string(),
        FieldId::Password => " Password (Ctrl+T: show) ".to_string(),
        other => format!(" {} ", other.label()),
    };
    let block = Block::default()
        .title(Span::styled(label, Style::default().fg(HEADER_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return None;
    }

    let raw = form.input().get(field);
    let shown = if field == FieldId::Password && !form.password_visible() {
        mask(raw)
    } else {
        raw.to_string()
    };

    let max_width = inner.width.saturating_sub(1) as usize;
    let (line, text_width) = if shown.is_empty() {
        let placeholder = Span::styled(field.placeholder(), Style::default().fg(PLACEHOLDER));
        (Line::from(placeholder), 0)
    } else {
        let tail = visible_tail(&shown, max_width);
        let width = tail.width();
        (Line::from(Span::styled(tail.to_string(), Style::default().fg(HEADER_TEXT))), width)
    };
    frame.render_widget(Paragraph::new(line), inner);

    Some((inner.x + text_width as u16, inner.y))
}
