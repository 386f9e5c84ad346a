//! The two body views: the entry form and the read-only confirmation.

mod confirmation;
mod form;

pub use confirmation::render_confirmation;
pub use form::render_form;

use unicode_width::UnicodeWidthChar;

use crate::form::password_length;

/// One `*` per unit of password length.
pub fn mask(password: &str) -> String {
    "*".repeat(password_length(password))
}

/// The end of `text` that fits in `max_width` terminal columns.
fn visible_tail(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (index, ch) in text.char_indices().rev() {
        width += ch.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = index;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_uses_one_star_per_length_unit() {
        assert_eq!(mask("secret1"), "*******");
        assert_eq!(mask("äö"), "**");
        assert_eq!(mask("😀"), "**");
        assert_eq!(mask(""), "");
    }

    #[test]
    fn visible_tail_keeps_the_end() {
        assert_eq!(visible_tail("hello", 10), "hello");
        assert_eq!(visible_tail("hello world", 5), "world");
        assert_eq!(visible_tail("äbcd", 2), "cd");
        assert_eq!(visible_tail("abc", 0), "");
    }

    #[test]
    fn visible_tail_measures_wide_characters() {
        assert_eq!(visible_tail("名前テスト", 4), "スト");
        assert_eq!(visible_tail("a名前", 5), "a名前");
        // A wide char that only half fits is dropped.
        assert_eq!(visible_tail("名前", 3), "前");
    }
}
