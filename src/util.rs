pub struct Util;

impl Util {
    pub fn strip_comment(line: &str) -> &str {
        match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        }
    }

    /// Split at the first `=` or `:`, trimming both halves.
    pub fn split_option(line: &str) -> Option<(&str, &str)> {
        let (key, value) = line.split_once(|c| c == '=' || c == ':')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some((key, value.trim()))
    }

    /// Byte length of the char starting at `pos`, at least 1.
    pub fn char_len_at(text: &str, pos: usize) -> usize {
        text[pos..].chars().next().map(char::len_utf8).unwrap_or(1)
    }
}
