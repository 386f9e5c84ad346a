use crate::form::ViewMode;
use crate::ui::alert::render_alert;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::views::{render_confirmation, render_form};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let view = app.view_mode();
    let alert_visible = app.alert().is_visible();

    frame.render_widget(Header::widget(view), header);
    frame.render_widget(Clear, body);
    if body.width > 0 && body.height > 0 {
        match view {
            ViewMode::Form => {
                render_form(frame, body, app.form(), app.focus(), !alert_visible);
            }
            ViewMode::Confirmation => render_confirmation(frame, body, app.form().input()),
        }
    }
    frame.render_widget(Footer::widget(view, alert_visible, footer), footer);

    render_alert(frame, area, app.alert());
}
