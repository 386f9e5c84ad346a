use ratatui::style::Color;

use crate::notify::NoticeKind;

pub const ACCENT: Color = Color::Rgb(0x63, 0x66, 0xf1);
pub const ACCENT_DIM: Color = Color::Rgb(0x43, 0x38, 0xca);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PLACEHOLDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_WARN: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

pub fn notice_color(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Error => STATUS_ERROR,
        NoticeKind::Warning => STATUS_WARN,
        NoticeKind::Success => STATUS_OK,
    }
}

pub fn notice_icon(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Error => "✖",
        NoticeKind::Warning => "!",
        NoticeKind::Success => "✔",
    }
}
