// Command bar component - 하단 커맨드 바
//
// 액션 레지스트리의 F키 단축키 표시

use crate::core::actions::generate_command_bar_items;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 커맨드 항목
#[derive(Debug, Clone)]
pub struct CommandItem {
    /// 단축키 (F1, F2, ...)
    pub key: String,
    /// 레이블 (Help, Add, ...)
    pub label: String,
    /// 활성화 여부
    pub enabled: bool,
}

impl CommandItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            enabled: true,
        }
    }
}

/// 커맨드 바 컴포넌트
pub struct CommandBar {
    commands: Vec<CommandItem>,
    bg_color: Color,
    key_fg_color: Color,
    label_fg_color: Color,
    disabled_color: Color,
}

impl Default for CommandBar {
    fn default() -> Self {
        Self {
            commands: generate_command_bar_items(),
            bg_color: Color::Rgb(30, 30, 30),
            key_fg_color: Color::Rgb(0, 120, 212),
            label_fg_color: Color::Rgb(212, 212, 212),
            disabled_color: Color::Rgb(100, 100, 100),
        }
    }
}

impl CommandBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// 선택 목록이 비었을 때 쓸모없는 항목(Combine, Clear, Remove) 비활성화
    pub fn selection_empty(mut self, empty: bool) -> Self {
        for cmd in &mut self.commands {
            if matches!(cmd.key.as_str(), "F5" | "F7" | "F8") {
                cmd.enabled = !empty;
            }
        }
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.command_bar_bg.to_color();
        self.key_fg_color = theme.accent.to_color();
        self.label_fg_color = theme.command_bar_fg.to_color();
        self
    }
}

impl Widget for CommandBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let mut spans = vec![Span::raw(" ")];
        for (i, cmd) in self.commands.iter().enumerate() {
            let (key_style, label_style) = if cmd.enabled {
                (
                    Style::default()
                        .fg(self.key_fg_color)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(self.label_fg_color),
                )
            } else {
                (
                    Style::default().fg(self.disabled_color),
                    Style::default().fg(self.disabled_color),
                )
            };

            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(cmd.key.clone(), key_style));
            spans.push(Span::styled(":", label_style));
            spans.push(Span::styled(cmd.label.clone(), label_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::buffer_text;

    #[test]
    fn test_command_bar_default_items() {
        let bar = CommandBar::default();
        assert_eq!(bar.commands.len(), 7);
        assert!(bar.commands.iter().all(|c| c.enabled));
    }

    #[test]
    fn test_selection_empty_disables_file_commands() {
        let bar = CommandBar::new().selection_empty(true);
        let disabled: Vec<&str> = bar
            .commands
            .iter()
            .filter(|c| !c.enabled)
            .map(|c| c.key.as_str())
            .collect();
        assert_eq!(disabled, vec!["F5", "F7", "F8"]);
    }

    #[test]
    fn test_command_bar_render() {
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        CommandBar::new().render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("F1:Help"), "rendered={}", text);
        assert!(text.contains("F5:Combine"), "rendered={}", text);
    }
}
