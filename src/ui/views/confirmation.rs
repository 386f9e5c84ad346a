use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::form::FormInput;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use crate::ui::views::mask;

const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 14;
const LABEL_WIDTH: usize = 10;

/// Draw the read-only summary of a completed signup.
pub fn render_confirmation(frame: &mut Frame, area: Rect, input: &FormInput) {
    let card = centered_rect_by_size(area, CARD_WIDTH, CARD_HEIGHT);
    frame.render_widget(Clear, card);

    let label_style = Style::default().fg(HEADER_SEPARATOR).add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(HEADER_TEXT);
    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("  {:<width$}", label, width = LABEL_WIDTH), label_style),
            Span::styled(value, value_style),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            "✔ Signup Successful!",
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            Span::styled("Welcome ", value_style),
            Span::styled(
                input.name.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("! Your account has been created.", value_style),
        ])
        .alignment(Alignment::Center),
        Line::from(""),
        row("Email:", input.email.clone()),
        row("Age:", input.age.clone()),
        row("Password:", mask(&input.password)),
        Line::from(""),
        Line::from(Span::styled(
            "  Back (Reset Form)  ",
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let widget = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(widget, card);
}
