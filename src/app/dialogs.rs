use super::text_edit::LineEdit;
use super::*;
use crate::ui::components::dialog::help_line_count;

impl App {
    // === 다이얼로그 입력 처리 메서드 ===

    fn input_buffer(&mut self) -> Option<(&mut String, &mut usize)> {
        match &mut self.dialog {
            Some(DialogKind::Input {
                value, cursor_pos, ..
            }) => Some((value, cursor_pos)),
            _ => None,
        }
    }

    /// 입력 다이얼로그: 문자 입력
    pub fn dialog_input_char(&mut self, c: char) {
        if let Some((value, cursor_pos)) = self.input_buffer() {
            LineEdit::insert_char(value, cursor_pos, c);
        }
    }

    /// 입력 다이얼로그: 백스페이스
    pub fn dialog_input_backspace(&mut self) {
        if let Some((value, cursor_pos)) = self.input_buffer() {
            LineEdit::backspace(value, cursor_pos);
        }
    }

    /// 입력 다이얼로그: Delete
    pub fn dialog_input_delete(&mut self) {
        if let Some((value, cursor_pos)) = self.input_buffer() {
            LineEdit::delete(value, *cursor_pos);
        }
    }

    /// 입력 다이얼로그: 이전 경로 구성요소 삭제 (Ctrl+W)
    pub fn dialog_input_delete_prev_segment(&mut self) {
        if let Some((value, cursor_pos)) = self.input_buffer() {
            LineEdit::delete_prev_segment(value, cursor_pos);
        }
    }

    pub fn dialog_input_left(&mut self) {
        if let Some((value, cursor_pos)) = self.input_buffer() {
            LineEdit::left(value, cursor_pos);
        }
    }

    pub fn dialog_input_right(&mut self) {
        if let Some((value, cursor_pos)) = self.input_buffer() {
            LineEdit::right(value, cursor_pos);
        }
    }

    pub fn dialog_input_home(&mut self) {
        if let Some((_, cursor_pos)) = self.input_buffer() {
            *cursor_pos = 0;
        }
    }

    pub fn dialog_input_end(&mut self) {
        if let Some((value, cursor_pos)) = self.input_buffer() {
            *cursor_pos = value.len();
        }
    }

    /// 입력/확인 다이얼로그: 버튼 선택 변경 (Tab)
    pub fn dialog_toggle_button(&mut self) {
        if let Some(
            DialogKind::Input {
                selected_button, ..
            }
            | DialogKind::Confirm {
                selected_button, ..
            },
        ) = &mut self.dialog
        {
            *selected_button = if *selected_button == 0 { 1 } else { 0 };
        }
    }

    /// 입력/확인 다이얼로그: 선택된 버튼 반환
    pub fn get_dialog_selected_button(&self) -> Option<usize> {
        match &self.dialog {
            Some(
                DialogKind::Input {
                    selected_button, ..
                }
                | DialogKind::Confirm {
                    selected_button, ..
                },
            ) => Some(*selected_button),
            _ => None,
        }
    }

    pub fn get_dialog_input_purpose(&self) -> Option<InputPurpose> {
        if let Some(DialogKind::Input { purpose, .. }) = &self.dialog {
            Some(*purpose)
        } else {
            None
        }
    }

    /// 현재 다이얼로그 입력값 반환 (Input 다이얼로그용)
    pub fn get_dialog_input_value(&self) -> Option<String> {
        if let Some(DialogKind::Input { value, .. }) = &self.dialog {
            Some(value.clone())
        } else {
            None
        }
    }

    /// 입력 다이얼로그: Enter (OK면 확정, Cancel이면 닫기)
    pub fn submit_input_dialog(&mut self) {
        match (self.get_dialog_selected_button(), self.get_dialog_input_value()) {
            (Some(0), Some(value)) => self.confirm_input_dialog(value),
            _ => self.close_dialog(),
        }
    }

    /// 확인 다이얼로그: Enter (OK면 실행, Cancel이면 닫기)
    pub fn submit_confirm_dialog(&mut self) {
        if self.get_dialog_selected_button() == Some(0) {
            self.confirm_confirm_dialog();
        } else {
            self.close_dialog();
        }
    }

    // === 도움말 스크롤 ===

    pub fn help_scroll_up(&mut self) {
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            *scroll_offset = scroll_offset.saturating_sub(1);
        }
    }

    pub fn help_scroll_down(&mut self) {
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            if *scroll_offset + 1 < help_line_count() {
                *scroll_offset += 1;
            }
        }
    }
}
