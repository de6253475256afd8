/// 한 줄 입력 버퍼 편집 (cursor_pos는 UTF-8 바이트 인덱스)
pub(super) struct LineEdit;

impl LineEdit {
    pub(super) fn insert_char(value: &mut String, cursor_pos: &mut usize, c: char) {
        value.insert(*cursor_pos, c);
        *cursor_pos += c.len_utf8();
    }

    pub(super) fn backspace(value: &mut String, cursor_pos: &mut usize) {
        if let Some(prev) = Self::prev_boundary(value, *cursor_pos) {
            value.replace_range(prev..*cursor_pos, "");
            *cursor_pos = prev;
        }
    }

    pub(super) fn delete(value: &mut String, cursor_pos: usize) {
        if let Some(next) = Self::next_boundary(value, cursor_pos) {
            value.replace_range(cursor_pos..next, "");
        }
    }

    pub(super) fn left(value: &str, cursor_pos: &mut usize) {
        if let Some(prev) = Self::prev_boundary(value, *cursor_pos) {
            *cursor_pos = prev;
        }
    }

    pub(super) fn right(value: &str, cursor_pos: &mut usize) {
        if let Some(next) = Self::next_boundary(value, *cursor_pos) {
            *cursor_pos = next;
        }
    }

    /// 커서 앞의 경로 구성요소 하나 삭제 (Ctrl+W)
    ///
    /// 커서 바로 앞의 구분자는 함께 지우고, 그 앞의 구분자에서 멈춥니다.
    pub(super) fn delete_prev_segment(value: &mut String, cursor_pos: &mut usize) {
        let head = &value[..*cursor_pos];
        let trimmed = head.trim_end_matches(Self::is_separator);
        let start = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| Self::is_separator(*c))
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        value.replace_range(start..*cursor_pos, "");
        *cursor_pos = start;
    }

    fn prev_boundary(value: &str, cursor_pos: usize) -> Option<usize> {
        value[..cursor_pos].char_indices().next_back().map(|(i, _)| i)
    }

    fn next_boundary(value: &str, cursor_pos: usize) -> Option<usize> {
        value[cursor_pos..]
            .chars()
            .next()
            .map(|c| cursor_pos + c.len_utf8())
    }

    fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '/' | '\\' | '.' | '_' | '-')
    }
}

#[cfg(test)]
mod tests {
    use super::LineEdit;

    #[test]
    fn test_insert_backspace_delete_utf8_cursor_boundary() {
        let mut value = "\u{AC00}\u{B098}".to_string();
        let mut cursor_pos = "\u{AC00}".len();

        LineEdit::insert_char(&mut value, &mut cursor_pos, '\u{B2E4}');
        assert_eq!(value, "\u{AC00}\u{B2E4}\u{B098}");
        assert_eq!(cursor_pos, "\u{AC00}\u{B2E4}".len());

        LineEdit::backspace(&mut value, &mut cursor_pos);
        assert_eq!(value, "\u{AC00}\u{B098}");
        assert_eq!(cursor_pos, "\u{AC00}".len());

        LineEdit::delete(&mut value, 0);
        assert_eq!(value, "\u{B098}");
    }

    #[test]
    fn test_cursor_moves_stop_at_edges() {
        let value = "a\u{AC00}b".to_string();
        let mut cursor_pos = 0;

        LineEdit::left(&value, &mut cursor_pos);
        assert_eq!(cursor_pos, 0);

        LineEdit::right(&value, &mut cursor_pos);
        LineEdit::right(&value, &mut cursor_pos);
        assert_eq!(cursor_pos, "a\u{AC00}".len());

        cursor_pos = value.len();
        LineEdit::right(&value, &mut cursor_pos);
        assert_eq!(cursor_pos, value.len());
    }

    #[test]
    fn test_delete_prev_segment_path() {
        let mut value = "/home/user/combined.txt".to_string();
        let mut cursor_pos = value.len();

        LineEdit::delete_prev_segment(&mut value, &mut cursor_pos);
        assert_eq!(value, "/home/user/combined.");

        LineEdit::delete_prev_segment(&mut value, &mut cursor_pos);
        assert_eq!(value, "/home/user/");

        LineEdit::delete_prev_segment(&mut value, &mut cursor_pos);
        assert_eq!(value, "/home/");
        assert_eq!(cursor_pos, value.len());
    }

    #[test]
    fn test_delete_prev_segment_at_start_is_noop() {
        let mut value = "abc".to_string();
        let mut cursor_pos = 0;
        LineEdit::delete_prev_segment(&mut value, &mut cursor_pos);
        assert_eq!(value, "abc");
        assert_eq!(cursor_pos, 0);
    }
}
