// Selection list component - 선택 목록 컴포넌트
//
// 결합 순서대로 파일 경로를 번호와 함께 표시

use crate::ui::Theme;
use crate::utils::path_display::fit_path;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use std::collections::HashSet;
use std::path::PathBuf;

/// 빈 HashSet을 위한 정적 참조
static EMPTY_MARKS: std::sync::LazyLock<HashSet<usize>> = std::sync::LazyLock::new(HashSet::new);

/// 선택 목록 컴포넌트
pub struct SelectionList<'a> {
    /// 결합 순서의 경로 목록
    paths: &'a [PathBuf],
    /// 커서 위치
    cursor: usize,
    /// 스크롤 오프셋
    scroll_offset: usize,
    /// 마킹된 항목 인덱스
    marked: &'a HashSet<usize>,
    border_color: Color,
    bg_color: Color,
    fg_color: Color,
    cursor_fg_color: Color,
    cursor_bg_color: Color,
    marked_color: Color,
    index_color: Color,
}

impl<'a> Default for SelectionList<'a> {
    fn default() -> Self {
        Self {
            paths: &[],
            cursor: 0,
            scroll_offset: 0,
            marked: &EMPTY_MARKS,
            border_color: Color::Rgb(0, 120, 212),
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            cursor_fg_color: Color::Rgb(255, 255, 255),
            cursor_bg_color: Color::Rgb(0, 120, 212),
            marked_color: Color::Rgb(255, 215, 0),
            index_color: Color::Rgb(128, 128, 128),
        }
    }
}

impl<'a> SelectionList<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 경로 목록 설정
    pub fn paths(mut self, paths: &'a [PathBuf]) -> Self {
        self.paths = paths;
        self
    }

    /// 커서 위치 설정
    pub fn cursor(mut self, index: usize) -> Self {
        self.cursor = index;
        self
    }

    /// 스크롤 오프셋 설정
    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// 마킹 항목 설정
    pub fn marked(mut self, marked: &'a HashSet<usize>) -> Self {
        self.marked = marked;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.border_color = theme.list_border.to_color();
        self.bg_color = theme.list_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.cursor_fg_color = theme.item_cursor_fg.to_color();
        self.cursor_bg_color = theme.item_cursor_bg.to_color();
        self.marked_color = theme.item_marked.to_color();
        self.index_color = theme.item_index.to_color();
        self
    }

    fn render_row(&self, idx: usize, inner: Rect, y: u16, buf: &mut Buffer) {
        let path = &self.paths[idx];
        let is_cursor = idx == self.cursor;
        let is_marked = self.marked.contains(&idx);

        let base = if is_cursor {
            Style::default().bg(self.cursor_bg_color)
        } else {
            Style::default()
        };
        let name_fg = match (is_cursor, is_marked) {
            (_, true) => self.marked_color,
            (true, false) => self.cursor_fg_color,
            (false, false) => self.fg_color,
        };

        let number = format!("{:>4}. ", idx + 1);
        let marker = if is_marked { "*" } else { " " };
        let reserved = number.len() + marker.len();
        let name = fit_path(path, (inner.width as usize).saturating_sub(reserved));

        if is_cursor {
            buf.set_style(Rect::new(inner.x, inner.y + y, inner.width, 1), base);
        }

        let line = Line::from(vec![
            Span::styled(marker, base.fg(self.marked_color)),
            Span::styled(number, base.fg(self.index_color)),
            Span::styled(name, base.fg(name_fg)),
        ]);
        buf.set_line(inner.x, inner.y + y, &line, inner.width);
    }

    fn render_empty_state(&self, inner: Rect, buf: &mut Buffer) {
        let hint = Line::from(vec![Span::styled(
            " No files selected. Press 'a' to add files.",
            Style::default().fg(self.index_color),
        )]);
        buf.set_line(inner.x, inner.y, &hint, inner.width);
    }
}

impl Widget for SelectionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let title = format!(" Selected Files ({}) ", self.paths.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(self.border_color)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(self.bg_color));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }
        if self.paths.is_empty() {
            self.render_empty_state(inner, buf);
            return;
        }

        let visible = inner.height as usize;
        for (y, idx) in (self.scroll_offset..self.paths.len())
            .take(visible)
            .enumerate()
        {
            self.render_row(idx, inner, y as u16, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::buffer_text;

    fn sample_paths() -> Vec<PathBuf> {
        vec![
            PathBuf::from("/work/a.py"),
            PathBuf::from("/work/b.py"),
            PathBuf::from("/work/c.py"),
        ]
    }

    #[test]
    fn test_renders_numbered_rows_in_order() {
        let paths = sample_paths();
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        SelectionList::new().paths(&paths).render(area, &mut buf);

        let text = buffer_text(&buf);
        let first = text.find("1. /work/a.py").expect("first row");
        let third = text.find("3. /work/c.py").expect("third row");
        assert!(first < third);
        assert!(text.contains("Selected Files (3)"));
    }

    #[test]
    fn test_marked_rows_show_marker() {
        let paths = sample_paths();
        let marked: HashSet<usize> = [1].into_iter().collect();
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        SelectionList::new()
            .paths(&paths)
            .marked(&marked)
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("*   2. /work/b.py"), "rendered=\n{}", text);
    }

    #[test]
    fn test_scroll_offset_skips_rows() {
        let paths = sample_paths();
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        SelectionList::new()
            .paths(&paths)
            .scroll_offset(1)
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(!text.contains("a.py"));
        assert!(text.contains("b.py"));
        assert!(text.contains("c.py"));
    }

    #[test]
    fn test_empty_state_hint() {
        let area = Rect::new(0, 0, 60, 4);
        let mut buf = Buffer::empty(area);
        SelectionList::new().render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("No files selected"));
    }
}
