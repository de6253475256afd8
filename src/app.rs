use crate::config::Settings;
use crate::core::actions::Action;
use crate::models::{FileFilter, SelectionSet};
use crate::system::{Combiner, FilePicker, FileSystem};
use crate::ui::{DialogKind, InputPurpose, LayoutManager, LayoutMode, ThemeManager};
use crate::utils::formatter::format_file_size;
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

mod dialogs;
mod navigation;
mod operations;
mod text_edit;

/// 확인 다이얼로그가 승인되면 실행할 작업
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingConfirm {
    ClearSelection,
}

/// 앱 상태
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    /// 결합 대상 파일 목록
    pub selection: SelectionSet,
    /// 목록 커서 위치
    pub cursor: usize,
    /// 목록 스크롤 오프셋
    pub scroll_offset: usize,
    /// 제거 요청용으로 표시된 항목 인덱스
    pub marked: HashSet<usize>,
    /// 현재 필터 프리셋 인덱스
    pub filter_index: usize,
    /// 파일 시스템
    pub filesystem: FileSystem,
    picker: FilePicker,
    combiner: Combiner,
    /// 테마 관리자
    pub theme_manager: ThemeManager,
    /// 현재 표시 중인 다이얼로그
    pub dialog: Option<DialogKind>,
    pending_confirm: Option<PendingConfirm>,
    /// 상태바 오른쪽 알림 (마지막 작업 결과)
    pub notice: Option<String>,
    /// 마지막으로 결합 결과를 저장한 경로
    pub last_destination: Option<PathBuf>,
    /// 상대 경로 입력의 기준 디렉토리
    base_dir: PathBuf,
    /// 테스트에서 설정 저장 경로를 격리하기 위한 override
    settings_override: Option<PathBuf>,
}

impl App {
    const DEFAULT_OUTPUT_NAME: &'static str = "combined.txt";

    pub fn new() -> Self {
        let base_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let mut app = Self::with_base_dir(base_dir, None);
        app.load_settings();
        app
    }

    fn with_base_dir(base_dir: PathBuf, settings_override: Option<PathBuf>) -> Self {
        Self {
            should_quit: false,
            layout: LayoutManager::new(),
            selection: SelectionSet::new(),
            cursor: 0,
            scroll_offset: 0,
            marked: HashSet::new(),
            filter_index: 0,
            filesystem: FileSystem::new(),
            picker: FilePicker::new(),
            combiner: Combiner::new(),
            theme_manager: ThemeManager::new(),
            dialog: None,
            pending_confirm: None,
            notice: None,
            last_destination: None,
            base_dir,
            settings_override,
        }
    }

    #[cfg(test)]
    pub(crate) fn new_for_test(base_dir: &Path) -> Self {
        Self::with_base_dir(
            base_dir.to_path_buf(),
            Some(base_dir.join(".filecombiner-test-settings.toml")),
        )
    }

    /// 종료
    pub fn quit(&mut self) {
        self.save_settings();
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn settings_path(&self) -> Option<PathBuf> {
        self.settings_override
            .clone()
            .or_else(Settings::default_path)
    }

    fn load_settings(&mut self) {
        let Some(path) = self.settings_path() else {
            return;
        };
        let settings = Settings::load(&path);
        if let Err(e) = self.theme_manager.switch_theme(&settings.theme) {
            warn!("{}", e);
        }
        self.filter_index = FileFilter::preset_index(settings.filter);
        self.last_destination = settings.last_destination;
    }

    fn current_settings(&self) -> Settings {
        Settings {
            theme: self.theme_manager.current_name().to_string(),
            filter: self.filter_index,
            last_destination: self.last_destination.clone(),
            ..Settings::default()
        }
    }

    pub(crate) fn save_settings(&self) {
        let Some(path) = self.settings_path() else {
            return;
        };
        match self.current_settings().save(&path) {
            Ok(()) => debug!(path = %path.display(), "settings saved"),
            Err(e) => warn!(path = %path.display(), error = %e, "failed to save settings"),
        }
    }

    /// 현재 필터
    pub fn filter(&self) -> &'static FileFilter {
        FileFilter::preset(self.filter_index)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout.mode()
    }

    /// 선택 목록 전체 크기 (포맷된 문자열)
    pub fn total_size_display(&self) -> String {
        format_file_size(self.filesystem.total_size(self.selection.snapshot()))
    }

    /// 다이얼로그 활성화 여부
    pub fn is_dialog_active(&self) -> bool {
        self.dialog.is_some()
    }

    /// 다이얼로그 닫기
    pub fn close_dialog(&mut self) {
        self.dialog = None;
        self.pending_confirm = None;
    }

    fn show_message(&mut self, title: &str, message: impl Into<String>) {
        self.dialog = Some(DialogKind::message(title, message));
    }

    fn show_error(&mut self, title: &str, message: impl Into<String>) {
        self.dialog = Some(DialogKind::error(title, message));
    }

    /// 액션 실행 (단일 진실 원천)
    pub fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit(),
            Action::MoveUp => self.move_cursor_up(),
            Action::MoveDown => self.move_cursor_down(),
            Action::GoToTop => self.go_to_top(),
            Action::GoToBottom => self.go_to_bottom(),
            Action::PageUp => self.move_cursor_page_up(),
            Action::PageDown => self.move_cursor_page_down(),
            Action::ToggleMark => self.toggle_mark(),
            Action::MarkAll => self.mark_all(),
            Action::UnmarkAll => self.unmark_all(),
            Action::AddFiles => self.start_add_files(),
            Action::RemoveSelected => self.remove_selected(),
            Action::ClearAll => self.start_clear(),
            Action::Combine => self.start_combine(),
            Action::CycleFilter => self.cycle_filter(),
            Action::ShowHelp => self.dialog = Some(DialogKind::help()),
            Action::ToggleTheme => self.theme_manager.cycle_theme(),
        }
    }

    /// 입력 다이얼로그 확정 처리
    pub fn confirm_input_dialog(&mut self, value: String) {
        let Some(purpose) = self.get_dialog_input_purpose() else {
            return;
        };
        self.close_dialog();
        match purpose {
            InputPurpose::AddFiles => self.add_files_from_input(&value),
            InputPurpose::CombineDestination => self.combine_to_input(&value),
        }
    }

    /// 확인 다이얼로그 확정 처리
    pub fn confirm_confirm_dialog(&mut self) {
        let pending = self.pending_confirm.take();
        self.close_dialog();
        if let Some(PendingConfirm::ClearSelection) = pending {
            self.clear_selection();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
