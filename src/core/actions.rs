//! 액션 레지스트리
//!
//! 키 바인딩, 커맨드바 항목, 도움말 내용이 모두 이 테이블을 참조합니다.

use crate::ui::components::command_bar::CommandItem;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    PageUp,
    PageDown,
    // Selection (목록 마킹)
    ToggleMark,
    MarkAll,
    UnmarkAll,
    // File
    AddFiles,
    RemoveSelected,
    ClearAll,
    Combine,
    CycleFilter,
    // System
    ShowHelp,
    ToggleTheme,
    Quit,
}

/// 액션 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Selection,
    File,
    System,
}

impl ActionCategory {
    fn title(self) -> &'static str {
        match self {
            ActionCategory::Navigation => "Navigation",
            ActionCategory::Selection => "Selection",
            ActionCategory::File => "Files",
            ActionCategory::System => "System",
        }
    }
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub label: &'static str,
    pub category: ActionCategory,
    pub shortcut_display: Option<&'static str>,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    // Navigation
    ActionDef {
        action: Action::MoveUp,
        id: "move_up",
        label: "Move up",
        category: ActionCategory::Navigation,
        shortcut_display: Some("k / Up"),
        command_bar: None,
    },
    ActionDef {
        action: Action::MoveDown,
        id: "move_down",
        label: "Move down",
        category: ActionCategory::Navigation,
        shortcut_display: Some("j / Down"),
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToTop,
        id: "go_top",
        label: "Go to first file",
        category: ActionCategory::Navigation,
        shortcut_display: Some("g / Home"),
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToBottom,
        id: "go_bottom",
        label: "Go to last file",
        category: ActionCategory::Navigation,
        shortcut_display: Some("G / End"),
        command_bar: None,
    },
    ActionDef {
        action: Action::PageUp,
        id: "page_up",
        label: "Page up",
        category: ActionCategory::Navigation,
        shortcut_display: Some("PgUp"),
        command_bar: None,
    },
    ActionDef {
        action: Action::PageDown,
        id: "page_down",
        label: "Page down",
        category: ActionCategory::Navigation,
        shortcut_display: Some("PgDn"),
        command_bar: None,
    },
    // Selection
    ActionDef {
        action: Action::ToggleMark,
        id: "toggle_mark",
        label: "Mark / unmark file",
        category: ActionCategory::Selection,
        shortcut_display: Some("Space"),
        command_bar: None,
    },
    ActionDef {
        action: Action::MarkAll,
        id: "mark_all",
        label: "Mark all files",
        category: ActionCategory::Selection,
        shortcut_display: Some("* / Ctrl+A"),
        command_bar: None,
    },
    ActionDef {
        action: Action::UnmarkAll,
        id: "unmark_all",
        label: "Unmark all files",
        category: ActionCategory::Selection,
        shortcut_display: Some("u"),
        command_bar: None,
    },
    // File
    ActionDef {
        action: Action::AddFiles,
        id: "add_files",
        label: "Add files",
        category: ActionCategory::File,
        shortcut_display: Some("a / F2"),
        command_bar: Some(CommandBarEntry {
            key: "F2",
            label: "Add",
            priority: 2,
        }),
    },
    ActionDef {
        action: Action::CycleFilter,
        id: "cycle_filter",
        label: "Next file filter",
        category: ActionCategory::File,
        shortcut_display: Some("f / F3"),
        command_bar: Some(CommandBarEntry {
            key: "F3",
            label: "Filter",
            priority: 3,
        }),
    },
    ActionDef {
        action: Action::Combine,
        id: "combine",
        label: "Combine files",
        category: ActionCategory::File,
        shortcut_display: Some("w / F5"),
        command_bar: Some(CommandBarEntry {
            key: "F5",
            label: "Combine",
            priority: 5,
        }),
    },
    ActionDef {
        action: Action::ClearAll,
        id: "clear_all",
        label: "Clear all files",
        category: ActionCategory::File,
        shortcut_display: Some("c / F7"),
        command_bar: Some(CommandBarEntry {
            key: "F7",
            label: "Clear",
            priority: 7,
        }),
    },
    ActionDef {
        action: Action::RemoveSelected,
        id: "remove_selected",
        label: "Remove marked files",
        category: ActionCategory::File,
        shortcut_display: Some("d / Del / F8"),
        command_bar: Some(CommandBarEntry {
            key: "F8",
            label: "Remove",
            priority: 8,
        }),
    },
    // System
    ActionDef {
        action: Action::ShowHelp,
        id: "help",
        label: "Show help",
        category: ActionCategory::System,
        shortcut_display: Some("? / F1"),
        command_bar: Some(CommandBarEntry {
            key: "F1",
            label: "Help",
            priority: 1,
        }),
    },
    ActionDef {
        action: Action::ToggleTheme,
        id: "toggle_theme",
        label: "Switch theme",
        category: ActionCategory::System,
        shortcut_display: Some("t"),
        command_bar: None,
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        label: "Quit",
        category: ActionCategory::System,
        shortcut_display: Some("q / F10 / Ctrl+C"),
        command_bar: Some(CommandBarEntry {
            key: "F10",
            label: "Quit",
            priority: 10,
        }),
    },
];

fn bind(code: KeyCode, modifiers: Option<KeyModifiers>, action: Action) -> KeyBinding {
    KeyBinding {
        code,
        modifiers,
        action,
    }
}

fn build_key_bindings() -> Vec<KeyBinding> {
    let none = Some(KeyModifiers::NONE);
    let shift = Some(KeyModifiers::SHIFT);
    let ctrl = Some(KeyModifiers::CONTROL);

    vec![
        // Ctrl 조합이 먼저 매칭되어야 함
        bind(KeyCode::Char('c'), ctrl, Action::Quit),
        bind(KeyCode::Char('a'), ctrl, Action::MarkAll),
        // Navigation
        bind(KeyCode::Up, None, Action::MoveUp),
        bind(KeyCode::Char('k'), none, Action::MoveUp),
        bind(KeyCode::Down, None, Action::MoveDown),
        bind(KeyCode::Char('j'), none, Action::MoveDown),
        bind(KeyCode::Home, None, Action::GoToTop),
        bind(KeyCode::Char('g'), none, Action::GoToTop),
        bind(KeyCode::End, None, Action::GoToBottom),
        bind(KeyCode::Char('G'), shift, Action::GoToBottom),
        bind(KeyCode::Char('G'), none, Action::GoToBottom),
        bind(KeyCode::PageUp, None, Action::PageUp),
        bind(KeyCode::PageDown, None, Action::PageDown),
        // Selection
        bind(KeyCode::Char(' '), None, Action::ToggleMark),
        bind(KeyCode::Char('*'), None, Action::MarkAll),
        bind(KeyCode::Char('u'), none, Action::UnmarkAll),
        // File
        bind(KeyCode::Char('a'), none, Action::AddFiles),
        bind(KeyCode::F(2), None, Action::AddFiles),
        bind(KeyCode::Char('f'), none, Action::CycleFilter),
        bind(KeyCode::F(3), None, Action::CycleFilter),
        bind(KeyCode::Char('w'), none, Action::Combine),
        bind(KeyCode::F(5), None, Action::Combine),
        bind(KeyCode::Char('c'), none, Action::ClearAll),
        bind(KeyCode::F(7), None, Action::ClearAll),
        bind(KeyCode::Char('d'), none, Action::RemoveSelected),
        bind(KeyCode::Delete, None, Action::RemoveSelected),
        bind(KeyCode::F(8), None, Action::RemoveSelected),
        // System
        bind(KeyCode::F(1), None, Action::ShowHelp),
        bind(KeyCode::Char('?'), None, Action::ShowHelp),
        bind(KeyCode::Char('t'), none, Action::ToggleTheme),
        bind(KeyCode::Char('q'), none, Action::Quit),
        bind(KeyCode::F(10), None, Action::Quit),
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            binding.code == code
                && match binding.modifiers {
                    None => true,
                    Some(required) => modifiers == required,
                }
        })
        .map(|binding| binding.action)
}

impl Action {
    /// action_id 문자열로 Action 조회
    pub fn from_id(id: &str) -> Option<Action> {
        ACTION_DEFS.iter().find(|d| d.id == id).map(|d| d.action)
    }
}

/// 커맨드바용 항목 생성 (priority 순 정렬)
pub fn generate_command_bar_items() -> Vec<CommandItem> {
    let mut entries: Vec<&CommandBarEntry> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref())
        .collect();
    entries.sort_by_key(|cb| cb.priority);
    entries
        .into_iter()
        .map(|cb| CommandItem::new(cb.key, cb.label))
        .collect()
}

/// 도움말 다이얼로그용 엔트리 생성
///
/// 반환: (카테고리명, Vec<(단축키, 설명)>) 목록
pub fn generate_help_entries() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    [
        ActionCategory::Navigation,
        ActionCategory::Selection,
        ActionCategory::File,
        ActionCategory::System,
    ]
    .iter()
    .map(|cat| {
        let items = ACTION_DEFS
            .iter()
            .filter(|d| d.category == *cat)
            .filter_map(|d| d.shortcut_display.map(|key| (key, d.label)))
            .collect::<Vec<_>>();
        (cat.title(), items)
    })
    .filter(|(_, items)| !items.is_empty())
    .collect()
}
