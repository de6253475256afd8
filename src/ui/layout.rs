// Layout system - 레이아웃 계산
//
// 타이틀바 | 선택 목록 | 상태바 | 커맨드바
// 터미널이 너무 작으면 경고 화면

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 10;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 일반 모드
    Normal,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    /// 상단 타이틀바 (활성 필터 표시)
    pub title_bar: Rect,
    /// 선택 목록
    pub list: Rect,
    /// 상태바
    pub status_bar: Rect,
    /// 하단 커맨드 바
    pub command_bar: Rect,
    /// 경고 메시지 영역 (TooSmall 모드에서 사용)
    pub warning: Rect,
}

/// 레이아웃 매니저
#[derive(Debug)]
pub struct LayoutManager {
    mode: LayoutMode,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            mode: LayoutMode::Normal,
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }

    /// 터미널 크기에 따라 레이아웃 모드 결정
    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else {
            LayoutMode::Normal
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        self.terminal_size = (area.width, area.height);
        self.mode = Self::determine_mode(area.width, area.height);
        self.areas = match self.mode {
            LayoutMode::TooSmall => LayoutAreas {
                warning: area,
                ..Default::default()
            },
            LayoutMode::Normal => Self::calculate_areas(area),
        };
    }

    fn calculate_areas(area: Rect) -> LayoutAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // 타이틀바
                Constraint::Min(3),    // 목록
                Constraint::Length(1), // 상태바
                Constraint::Length(1), // 커맨드바
            ])
            .split(area);

        LayoutAreas {
            title_bar: chunks[0],
            list: chunks[1],
            status_bar: chunks[2],
            command_bar: chunks[3],
            warning: Rect::default(),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// 목록에서 한 화면에 보이는 행 수 (테두리 제외)
    pub fn list_rows(&self) -> usize {
        self.areas.list.height.saturating_sub(2) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_mode() {
        assert_eq!(LayoutManager::determine_mode(80, 24), LayoutMode::Normal);
        assert_eq!(LayoutManager::determine_mode(40, 10), LayoutMode::Normal);
        assert_eq!(LayoutManager::determine_mode(39, 24), LayoutMode::TooSmall);
        assert_eq!(LayoutManager::determine_mode(80, 9), LayoutMode::TooSmall);
    }

    #[test]
    fn test_areas_stack_vertically() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 80, 24));

        let areas = manager.areas();
        assert_eq!(areas.title_bar.height, 1);
        assert_eq!(areas.list.height, 21);
        assert_eq!(areas.status_bar.y, 22);
        assert_eq!(areas.command_bar.y, 23);
        assert_eq!(manager.list_rows(), 19);
    }

    #[test]
    fn test_too_small_uses_warning_area() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 30, 8));

        assert_eq!(manager.mode(), LayoutMode::TooSmall);
        assert_eq!(manager.areas().warning, Rect::new(0, 0, 30, 8));
        assert_eq!(manager.list_rows(), 0);
    }
}
