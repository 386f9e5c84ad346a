use crate::form::ViewMode;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn widget(view: ViewMode) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (marker, marker_color, step) = match view {
            ViewMode::Form => ("●", ACCENT, "Create Your Account"),
            ViewMode::Confirmation => ("✔", STATUS_OK, "Signup Complete"),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(marker, Style::default().fg(marker_color)),
            Span::styled("  ", text_style),
            Span::styled("Signup", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(step, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
