#[cfg(test)]
#[path = "./utils.tests.rs"]
mod utils_tests;

/// Truncates a string slice to the new length.
pub fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Adds right padding to the string slice.
pub fn add_padding(s: &str, width: usize) -> String {
    let mut text = String::with_capacity(width);
    text.push_cell(s, width, false);
    text
}

/// Extension methods for building padded table lines.
pub trait PadStringExt {
    /// Appends a cell text onto the end of this `String`, padded or truncated
    /// to `len` characters; `to_right` aligns the text to the right.
    fn push_cell(&mut self, s: &str, len: usize, to_right: bool);
}

impl PadStringExt for String {
    fn push_cell(&mut self, s: &str, len: usize, to_right: bool) {
        if len == 0 {
            return;
        }

        let padding_len = len.saturating_sub(s.chars().count());
        if to_right && padding_len > 0 {
            (0..padding_len).for_each(|_| self.push(' '));
        }

        self.push_str(truncate(s, len));

        if !to_right && padding_len > 0 {
            (0..padding_len).for_each(|_| self.push(' '));
        }
    }
}
