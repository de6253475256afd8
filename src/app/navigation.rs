use super::*;

impl App {
    // === 목록 탐색 ===

    fn max_index(&self) -> usize {
        self.selection.len().saturating_sub(1)
    }

    /// 한 페이지 크기 (레이아웃 계산 전에는 1)
    fn page_size(&self) -> usize {
        self.layout.list_rows().max(1)
    }

    /// 커서가 보이도록 스크롤 오프셋 조정
    pub(super) fn adjust_scroll_offset(&mut self) {
        let visible = self.page_size();
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + visible {
            self.scroll_offset = self.cursor + 1 - visible;
        }
        let max_offset = self.selection.len().saturating_sub(visible);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    /// 목록이 바뀐 뒤 커서/마킹 정리
    pub(super) fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.max_index());
        let len = self.selection.len();
        self.marked.retain(|&i| i < len);
        self.adjust_scroll_offset();
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll_offset();
        }
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor < self.max_index() {
            self.cursor += 1;
            self.adjust_scroll_offset();
        }
    }

    pub fn move_cursor_page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.page_size());
        self.adjust_scroll_offset();
    }

    pub fn move_cursor_page_down(&mut self) {
        self.cursor = (self.cursor + self.page_size()).min(self.max_index());
        self.adjust_scroll_offset();
    }

    /// 맨 위로 이동 (Home / g)
    pub fn go_to_top(&mut self) {
        self.cursor = 0;
        self.adjust_scroll_offset();
    }

    /// 맨 아래로 이동 (End / G)
    pub fn go_to_bottom(&mut self) {
        self.cursor = self.max_index();
        self.adjust_scroll_offset();
    }

    // === 마킹 ===

    /// 커서 항목 마킹 토글 후 다음 항목으로 이동
    pub fn toggle_mark(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        if !self.marked.remove(&self.cursor) {
            self.marked.insert(self.cursor);
        }
        self.move_cursor_down();
    }

    pub fn mark_all(&mut self) {
        self.marked = (0..self.selection.len()).collect();
    }

    pub fn unmark_all(&mut self) {
        self.marked.clear();
    }

    /// 제거 대상 인덱스: 마킹된 항목, 없으면 커서 항목
    pub fn removal_targets(&self) -> Vec<usize> {
        if !self.marked.is_empty() {
            let mut targets: Vec<usize> = self.marked.iter().copied().collect();
            targets.sort_unstable();
            targets
        } else if self.selection.is_empty() {
            Vec::new()
        } else {
            vec![self.cursor]
        }
    }
}
