// Title bar component - 상단 타이틀바
//
// 앱 이름과 현재 파일 필터 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct TitleBar<'a> {
    filter: &'a str,
    bg_color: Color,
    fg_color: Color,
    accent_color: Color,
}

impl<'a> TitleBar<'a> {
    pub fn new(filter: &'a str) -> Self {
        Self {
            filter,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(212, 212, 212),
            accent_color: Color::Rgb(0, 120, 212),
        }
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.title_bar_bg.to_color();
        self.fg_color = theme.title_bar_fg.to_color();
        self.accent_color = theme.accent.to_color();
        self
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let line = Line::from(vec![
            Span::styled(
                " File Combiner ",
                Style::default()
                    .fg(self.accent_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("| Filter: ", Style::default().fg(self.fg_color)),
            Span::styled(self.filter, Style::default().fg(self.fg_color)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::buffer_text;

    #[test]
    fn test_title_bar_shows_filter() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        TitleBar::new("Python Files (*.py)").render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Filter: Python Files (*.py)"), "rendered={}", text);
    }
}
