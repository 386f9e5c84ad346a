use crate::form::ViewMode;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Footer {
    pub fn hints(view: ViewMode, alert_visible: bool) -> &'static str {
        if alert_visible {
            return " Enter/Esc: Close │ Ctrl+Q: Quit";
        }
        match view {
            ViewMode::Form => {
                " Tab/↑↓: Field │ Enter: Sign Up │ Ctrl+T: Show/Hide │ Ctrl+U: Clear │ Ctrl+Q: Quit"
            }
            ViewMode::Confirmation => " Enter/B: Back (Reset Form) │ Ctrl+Q: Quit",
        }
    }

    pub fn widget(view: ViewMode, alert_visible: bool, area: Rect) -> Paragraph<'static> {
        let hints = Self::hints(view, alert_visible);
        let version = format!("v{} ", VERSION);

        // Pad by char count, not bytes.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
