// UI Components
pub mod command_bar;
pub mod dialog;
pub mod selection_list;
pub mod status_bar;
pub mod title_bar;
pub mod warning;

// Re-export components for convenience
pub use command_bar::{CommandBar, CommandItem};
pub use dialog::{Dialog, DialogKind, InputPurpose};
pub use selection_list::SelectionList;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
pub use warning::WarningScreen;

/// 렌더링된 버퍼를 줄 단위 문자열로 변환 (테스트용)
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
