// Warning screen component - 경고 화면 컴포넌트
//
// 터미널이 너무 작을 때 표시

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::Theme;

/// 경고 화면 컴포넌트
pub struct WarningScreen {
    /// 현재 터미널 크기
    current_size: (u16, u16),
    warning_color: Color,
    bg_color: Color,
    fg_color: Color,
}

impl Default for WarningScreen {
    fn default() -> Self {
        Self {
            current_size: (0, 0),
            warning_color: Color::Yellow,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
        }
    }
}

impl WarningScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 터미널 크기 설정
    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.current_size = (width, height);
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.warning_color = theme.warning.to_color();
        self.bg_color = theme.bg_primary.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self
    }
}

impl Widget for WarningScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let emphasis = Style::default()
            .fg(self.warning_color)
            .add_modifier(Modifier::BOLD);
        let plain = Style::default().fg(self.fg_color);

        let lines = vec![
            Line::from(Span::styled("Terminal Too Small", emphasis)),
            Line::from(""),
            Line::from(Span::styled(
                format!("Current: {}x{}", self.current_size.0, self.current_size.1),
                plain,
            )),
            Line::from(Span::styled(
                format!("Required: {}x{}", MIN_WIDTH, MIN_HEIGHT),
                plain,
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.warning_color))
            .style(Style::default().bg(self.bg_color));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::buffer_text;

    #[test]
    fn test_warning_screen_shows_sizes() {
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        WarningScreen::new().current_size(30, 8).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Current: 30x8"), "rendered=\n{}", text);
        assert!(text.contains("Required: 40x10"), "rendered=\n{}", text);
    }
}
