//! Popup rendering for notices.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::alert::state::AlertState;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{notice_color, notice_icon, ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER};

const MIN_WIDTH: u16 = 36;
const MAX_WIDTH: u16 = 60;

/// Draw the alert over `area` (usually the whole frame).
pub fn render_alert(frame: &mut Frame, area: Rect, state: &AlertState) {
    let Some(notice) = state.notice() else {
        return;
    };

    let color = notice_color(notice.kind);
    let icon = notice_icon(notice.kind);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(notice.message.clone(), Style::default().fg(HEADER_TEXT)))
            .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            "  OK  ",
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    ];

    let message_width = notice.message.chars().count() as u16;
    let title_width = notice.title.chars().count() as u16 + 4;
    let width = message_width
        .max(title_width)
        .saturating_add(6)
        .clamp(MIN_WIDTH, MAX_WIDTH);
    let inner_width = width.saturating_sub(2).max(1);
    let wrapped_rows = message_width.div_ceil(inner_width).max(1);
    let height = wrapped_rows + 5;

    let popup_area = centered_rect_by_size(area, width, height);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} {} ", icon, notice.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, popup_area);
}
