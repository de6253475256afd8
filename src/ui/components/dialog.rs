//! 다이얼로그 시스템
//!
//! 파일 추가, 결합 대상 입력, 목록 비우기 확인, 결과 메시지, 도움말 위젯 정의

use crate::core::actions::generate_help_entries;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 다이얼로그 내부 좌우 패딩 (border 안쪽 여백)
const DIALOG_H_PADDING: u16 = 2;
/// 다이얼로그 내부 상단 패딩 (border 아래 여백)
const DIALOG_V_PADDING: u16 = 1;
/// 도움말 키 컬럼 너비
const HELP_KEY_COL_WIDTH: u16 = 16;

/// 입력 다이얼로그 목적
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    /// 추가할 파일/디렉토리/glob 입력
    AddFiles,
    /// 결합 결과 저장 경로 입력
    CombineDestination,
}

/// 다이얼로그 종류
#[derive(Debug, Clone)]
pub enum DialogKind {
    /// 입력 다이얼로그
    Input {
        title: String,
        prompt: String,
        value: String,
        cursor_pos: usize,
        selected_button: usize, // 0: OK, 1: Cancel
        purpose: InputPurpose,
    },
    /// 확인 다이얼로그 (Yes/No)
    Confirm {
        title: String,
        message: String,
        selected_button: usize, // 0: OK, 1: Cancel
    },
    /// 에러 다이얼로그
    Error { title: String, message: String },
    /// 메시지 다이얼로그 (정보 표시)
    Message { title: String, message: String },
    /// 단축키 도움말 다이얼로그
    Help { scroll_offset: usize },
}

impl DialogKind {
    /// 새 입력 다이얼로그 생성
    pub fn input(
        title: impl Into<String>,
        prompt: impl Into<String>,
        initial: impl Into<String>,
        purpose: InputPurpose,
    ) -> Self {
        let value: String = initial.into();
        let cursor_pos = value.len();
        DialogKind::Input {
            title: title.into(),
            prompt: prompt.into(),
            value,
            cursor_pos,
            selected_button: 0, // OK 기본 선택
            purpose,
        }
    }

    /// 파일 추가 입력 다이얼로그 생성
    pub fn add_files_input(initial: impl Into<String>) -> Self {
        Self::input(
            "Add Files",
            "File, directory or glob:",
            initial,
            InputPurpose::AddFiles,
        )
    }

    /// 결합 결과 저장 경로 입력 다이얼로그 생성
    pub fn combine_destination_input(initial: impl Into<String>) -> Self {
        Self::input(
            "Combine Files",
            "Save combined file as:",
            initial,
            InputPurpose::CombineDestination,
        )
    }

    /// 새 확인 다이얼로그 생성
    pub fn confirm(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Confirm {
            title: title.into(),
            message: message.into(),
            selected_button: 0,
        }
    }

    /// 새 에러 다이얼로그 생성
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Error {
            title: title.into(),
            message: message.into(),
        }
    }

    /// 새 메시지 다이얼로그 생성
    pub fn message(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Message {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn help() -> Self {
        DialogKind::Help { scroll_offset: 0 }
    }
}

/// 도움말 행 목록: (is_header, col1, col2), 카테고리 사이에 빈 줄
fn help_rows() -> Vec<(bool, &'static str, &'static str)> {
    let mut rows = Vec::new();
    for (category, items) in generate_help_entries() {
        rows.push((true, category, ""));
        for (key, desc) in items {
            rows.push((false, key, desc));
        }
        rows.push((false, "", ""));
    }
    rows.pop();
    rows
}

/// 도움말 전체 행 수 (스크롤 상한 계산용)
pub fn help_line_count() -> usize {
    help_rows().len()
}

pub struct Dialog<'a> {
    kind: &'a DialogKind,
    bg_color: Color,
    fg_color: Color,
    border_color: Color,
    title_color: Color,
    button_bg: Color,
    button_fg: Color,
    button_selected_bg: Color,
    button_selected_fg: Color,
    input_bg: Color,
    error_color: Color,
    muted_color: Color,
}

impl<'a> Dialog<'a> {
    pub fn new(kind: &'a DialogKind) -> Self {
        Self {
            kind,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(212, 212, 212),
            border_color: Color::Rgb(0, 120, 212),
            title_color: Color::Rgb(0, 120, 212),
            button_bg: Color::Rgb(60, 60, 60),
            button_fg: Color::Rgb(212, 212, 212),
            button_selected_bg: Color::Rgb(0, 120, 212),
            button_selected_fg: Color::White,
            input_bg: Color::Rgb(30, 30, 30),
            error_color: Color::Rgb(244, 71, 71),
            muted_color: Color::Rgb(128, 128, 128),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.list_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.border_color = theme.list_border.to_color();
        self.title_color = theme.accent.to_color();
        self.button_bg = theme.command_bar_bg.to_color();
        self.button_fg = theme.fg_primary.to_color();
        self.button_selected_bg = theme.item_cursor_bg.to_color();
        self.button_selected_fg = theme.item_cursor_fg.to_color();
        self.input_bg = theme.bg_primary.to_color();
        self.error_color = theme.error.to_color();
        self.muted_color = theme.item_index.to_color();
        self
    }

    /// 다이얼로그 영역 계산 (화면 중앙, 반응형)
    fn calculate_area(&self, screen: Rect) -> Rect {
        let sw = screen.width;
        let sh = screen.height;

        let (width, height) = match self.kind {
            DialogKind::Input { .. } => {
                let w = ((sw as f32 * 0.72) as u16).clamp(40, 100);
                (w, 7u16)
            }
            DialogKind::Confirm { .. } => (44u16.min(sw.saturating_sub(4)).max(25), 8u16),
            DialogKind::Error { message, .. } | DialogKind::Message { message, .. } => {
                let lines = message.lines().count().max(1);
                let longest = message.lines().map(|l| l.width()).max().unwrap_or(0) as u16;
                let w = (longest + 6).clamp(30, 80).min(sw.saturating_sub(4));
                let h = (6 + lines as u16).min(sh.saturating_sub(4)).max(6);
                (w, h)
            }
            DialogKind::Help { .. } => {
                let w = 56u16.min(sw.saturating_sub(4)).max(36);
                let h = sh.saturating_sub(4).max(10);
                (w, h)
            }
        };

        let width = width.min(sw.saturating_sub(4));
        let height = height.min(sh.saturating_sub(2));

        let x = screen.x + (sw.saturating_sub(width)) / 2;
        let y = screen.y + (sh.saturating_sub(height)) / 2;

        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// 테두리와 제목을 그리고 패딩을 뺀 내부 영역 반환
    fn frame(&self, area: Rect, buf: &mut Buffer, title: &str, is_error: bool) -> Rect {
        let (title_color, border_color) = if is_error {
            (self.error_color, self.error_color)
        } else {
            (self.title_color, self.border_color)
        };
        let block = Block::default()
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(title_color).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.bg_color));
        block.render(area, buf);

        Rect {
            x: area.x + DIALOG_H_PADDING,
            y: area.y + DIALOG_V_PADDING,
            width: area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: area.height.saturating_sub(DIALOG_V_PADDING * 2),
        }
    }

    /// 버튼 렌더링 헬퍼
    fn render_button(
        &self,
        buf: &mut Buffer,
        x: u16,
        y: u16,
        label: &str,
        is_selected: bool,
    ) -> u16 {
        let (bg, fg) = if is_selected {
            (self.button_selected_bg, self.button_selected_fg)
        } else {
            (self.button_bg, self.button_fg)
        };

        let padded_label = format!(" {} ", label);
        let width = padded_label.width() as u16;
        buf.set_string(x, y, &padded_label, Style::default().fg(fg).bg(bg));
        width
    }

    /// OK / Cancel 버튼 쌍 (하단 중앙)
    fn render_ok_cancel(&self, buf: &mut Buffer, area: Rect, selected_button: usize) {
        let button_y = area.y + area.height.saturating_sub(2);
        let buttons_width = (" OK ".width() + 2 + " Cancel ".width()) as u16;
        let button_x = area.x + (area.width.saturating_sub(buttons_width)) / 2;

        let ok_width = self.render_button(buf, button_x, button_y, "OK", selected_button == 0);
        self.render_button(
            buf,
            button_x + ok_width + 2,
            button_y,
            "Cancel",
            selected_button == 1,
        );
    }

    /// 입력 다이얼로그 렌더링
    #[allow(clippy::too_many_arguments)]
    fn render_input(
        &self,
        buf: &mut Buffer,
        area: Rect,
        title: &str,
        prompt: &str,
        value: &str,
        cursor_pos: usize,
        selected_button: usize,
    ) {
        let inner = self.frame(area, buf, title, false);
        if inner.width < 3 || inner.height < 2 {
            return;
        }

        buf.set_string(inner.x, inner.y, prompt, Style::default().fg(self.fg_color));

        // 입력 필드 배경
        let input_y = inner.y + 1;
        for x in inner.x..inner.x + inner.width {
            if let Some(cell) = buf.cell_mut((x, input_y)) {
                cell.set_bg(self.input_bg);
            }
        }

        // cursor_pos는 바이트 인덱스, 화면 표시는 display width 기반
        let max_display = inner.width as usize - 2;
        let cursor_col: usize = value[..cursor_pos]
            .chars()
            .map(|c| c.width().unwrap_or(0))
            .sum();

        let (display_value, cursor_display_col) = if cursor_col < max_display {
            (value, cursor_col)
        } else {
            // 커서가 오른쪽 끝에 오도록 앞부분을 잘라냄
            let target_start_width = cursor_col - (max_display - 1);
            let mut start_byte = value.len();
            let mut width_sum = 0;
            for (i, c) in value.char_indices() {
                if width_sum >= target_start_width {
                    start_byte = i;
                    break;
                }
                width_sum += c.width().unwrap_or(0);
            }
            (&value[start_byte..], cursor_col - width_sum)
        };

        let value_style = Style::default().fg(self.fg_color).bg(self.input_bg);
        buf.set_stringn(inner.x + 1, input_y, display_value, max_display, value_style);

        let cursor_x = inner.x + 1 + cursor_display_col as u16;
        if cursor_x < inner.x + inner.width - 1 {
            if let Some(cell) = buf.cell_mut((cursor_x, input_y)) {
                if cursor_pos < value.len() {
                    cell.set_style(Style::default().fg(self.input_bg).bg(self.fg_color));
                } else {
                    cell.set_char('▏');
                    cell.set_style(Style::default().fg(self.fg_color).bg(self.input_bg));
                }
            }
        }

        self.render_ok_cancel(buf, area, selected_button);
    }

    fn render_confirm(
        &self,
        buf: &mut Buffer,
        area: Rect,
        title: &str,
        message: &str,
        selected_button: usize,
    ) {
        let inner = self.frame(area, buf, title, false);

        let msg_area = Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        };
        Paragraph::new(message)
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: true })
            .render(msg_area, buf);

        self.render_ok_cancel(buf, area, selected_button);
    }

    /// 에러/메시지 다이얼로그 렌더링
    fn render_message(
        &self,
        buf: &mut Buffer,
        area: Rect,
        title: &str,
        message: &str,
        is_error: bool,
    ) {
        let inner = self.frame(area, buf, title, is_error);

        let msg_area = Rect {
            height: area.height.saturating_sub(DIALOG_V_PADDING + 3),
            ..inner
        };
        Paragraph::new(message)
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: false })
            .render(msg_area, buf);

        let button_y = area.y + area.height.saturating_sub(2);
        let button_width = " OK ".width() as u16;
        let button_x = area.x + (area.width.saturating_sub(button_width)) / 2;
        self.render_button(buf, button_x, button_y, "OK", true);
    }

    fn render_help(&self, buf: &mut Buffer, area: Rect, scroll_offset: usize) {
        let inner = self.frame(area, buf, "Keyboard Shortcuts", false);

        let rows = help_rows();

        let header_style = Style::default()
            .fg(self.title_color)
            .add_modifier(Modifier::BOLD);
        let key_style = Style::default().fg(self.title_color);
        let desc_style = Style::default().fg(self.fg_color);

        // 하단 힌트 줄 공간 확보
        let visible_height = inner.height.saturating_sub(1) as usize;
        let max_scroll = rows.len().saturating_sub(visible_height);
        let effective_scroll = scroll_offset.min(max_scroll);

        for (i, (is_header, col1, col2)) in rows
            .iter()
            .skip(effective_scroll)
            .take(visible_height)
            .enumerate()
        {
            let y = inner.y + i as u16;
            if *is_header {
                buf.set_string(inner.x, y, col1, header_style);
            } else if !col1.is_empty() {
                buf.set_string(inner.x + 2, y, col1, key_style);
                buf.set_string(inner.x + HELP_KEY_COL_WIDTH, y, col2, desc_style);
            }
        }

        let hint = "j/k: Scroll  Esc: Close";
        let hint_x = area.x + (area.width.saturating_sub(hint.width() as u16)) / 2;
        let hint_y = area.y + area.height.saturating_sub(2);
        buf.set_string(hint_x, hint_y, hint, Style::default().fg(self.muted_color));
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = self.calculate_area(area);
        if dialog_area.width == 0 || dialog_area.height == 0 {
            return;
        }

        // 배경 클리어
        Clear.render(dialog_area, buf);

        match self.kind {
            DialogKind::Input {
                title,
                prompt,
                value,
                cursor_pos,
                selected_button,
                ..
            } => {
                self.render_input(
                    buf,
                    dialog_area,
                    title,
                    prompt,
                    value,
                    *cursor_pos,
                    *selected_button,
                );
            }
            DialogKind::Confirm {
                title,
                message,
                selected_button,
            } => {
                self.render_confirm(buf, dialog_area, title, message, *selected_button);
            }
            DialogKind::Error { title, message } => {
                self.render_message(buf, dialog_area, title, message, true);
            }
            DialogKind::Message { title, message } => {
                self.render_message(buf, dialog_area, title, message, false);
            }
            DialogKind::Help { scroll_offset } => {
                self.render_help(buf, dialog_area, *scroll_offset);
            }
        }
    }
}
