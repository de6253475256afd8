// Status bar component - 상태바 컴포넌트
//
// 선택된 파일 수, 총 크기, 마킹 수, 마지막 알림 메시지 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// 선택 목록의 파일 수
    file_count: usize,
    /// 총 크기 (포맷된 문자열)
    total_size: &'a str,
    /// 마킹된 항목 수
    marked_count: usize,
    /// 오른쪽에 표시할 알림 (마지막 작업 결과 등)
    notice: Option<&'a str>,
    bg_color: Color,
    fg_color: Color,
    marked_color: Color,
}

impl<'a> Default for StatusBar<'a> {
    fn default() -> Self {
        Self {
            file_count: 0,
            total_size: "0 B",
            marked_count: 0,
            notice: None,
            bg_color: Color::Rgb(0, 122, 204),
            fg_color: Color::White,
            marked_color: Color::Yellow,
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_count(mut self, count: usize) -> Self {
        self.file_count = count;
        self
    }

    pub fn total_size(mut self, size: &'a str) -> Self {
        self.total_size = size;
        self
    }

    pub fn marked_count(mut self, count: usize) -> Self {
        self.marked_count = count;
        self
    }

    pub fn notice(mut self, notice: Option<&'a str>) -> Self {
        self.notice = notice;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.marked_color = theme.item_marked.to_color();
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let noun = if self.file_count == 1 { "file" } else { "files" };
        let left_info = format!(" {} {} | {}", self.file_count, noun, self.total_size);

        let marked_info = if self.marked_count > 0 {
            format!(" | {} marked", self.marked_count)
        } else {
            String::new()
        };

        let right_info = self
            .notice
            .map(|n| format!("{} ", n))
            .unwrap_or_default();

        let used = left_info.width() + marked_info.width() + right_info.width();
        let padding = " ".repeat((area.width as usize).saturating_sub(used));

        let line = Line::from(vec![
            Span::styled(left_info, Style::default().fg(self.fg_color)),
            Span::styled(marked_info, Style::default().fg(self.marked_color)),
            Span::raw(padding),
            Span::styled(right_info, Style::default().fg(self.fg_color)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
