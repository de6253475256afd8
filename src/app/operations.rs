use super::*;
use crate::models::CombineReport;
use crate::utils::error::{AppError, Result};
use crate::utils::formatter::{format_clock, pluralize};
use chrono::Local;
use std::path::MAIN_SEPARATOR;

/// 결과 메시지에 나열할 건너뛴 파일 최대 수
const MAX_SKIPPED_LISTED: usize = 5;

impl App {
    // === 파일 추가 ===

    /// 파일 추가 입력 다이얼로그 열기
    pub fn start_add_files(&mut self) {
        let initial = format!("{}{}", self.base_dir.display(), MAIN_SEPARATOR);
        self.dialog = Some(DialogKind::add_files_input(initial));
    }

    /// 입력한 경로/디렉토리/글로브를 해석해 선택 목록에 추가
    pub fn add_files_from_input(&mut self, input: &str) {
        if input.trim().is_empty() {
            return;
        }
        let filter = self.filter();
        match self.picker.resolve(input, &self.base_dir, filter) {
            Ok(paths) if paths.is_empty() => {
                self.notice = Some(format!("No matching {}", filter.label.to_lowercase()));
            }
            Ok(paths) => {
                let found = paths.len();
                let added = self.selection.add(paths, Some(filter.label));
                let already = found - added;
                let mut notice = format!("Added {}", pluralize(added, "file", "files"));
                if already > 0 {
                    notice.push_str(&format!(" ({} already selected)", already));
                }
                self.notice = Some(notice);
                self.clamp_cursor();
            }
            Err(e) => {
                warn!(input, error = %e, "cannot resolve input");
                self.show_error("Add Files", e.to_string());
            }
        }
    }

    // === 제거 / 비우기 ===

    /// 마킹된 항목(없으면 커서 항목) 제거
    pub fn remove_selected(&mut self) {
        let targets = self.removal_targets();
        if targets.is_empty() {
            return;
        }
        let removed = self.selection.remove_at(targets);
        self.marked.clear();
        self.clamp_cursor();
        self.notice = Some(format!("Removed {}", pluralize(removed.len(), "file", "files")));
    }

    /// 비우기 확인 다이얼로그 열기
    pub fn start_clear(&mut self) {
        if self.selection.is_empty() {
            self.show_message("Clear Selection", "The selection is already empty.");
            return;
        }
        let message = format!(
            "Remove all {} from the selection?",
            pluralize(self.selection.len(), "file", "files")
        );
        self.dialog = Some(DialogKind::confirm("Clear Selection", message));
        self.pending_confirm = Some(PendingConfirm::ClearSelection);
    }

    /// 선택 목록 비우기 (확인 후 호출)
    pub fn clear_selection(&mut self) {
        let removed = self.selection.clear();
        self.marked.clear();
        self.cursor = 0;
        self.scroll_offset = 0;
        self.notice = Some(format!("Cleared {}", pluralize(removed, "file", "files")));
    }

    // === 결합 ===

    /// 저장 경로 입력 다이얼로그 열기 (선택 목록이 비었으면 안내만)
    pub fn start_combine(&mut self) {
        if self.selection.is_empty() {
            self.show_message(
                "No Files Selected",
                "Add files to the selection before combining.",
            );
            return;
        }
        let initial = self
            .last_destination
            .clone()
            .unwrap_or_else(|| self.base_dir.join(Self::DEFAULT_OUTPUT_NAME));
        self.dialog = Some(DialogKind::combine_destination_input(
            initial.display().to_string(),
        ));
    }

    /// 선택 목록을 대상 파일로 결합
    pub fn combine_to(&self, destination: &Path) -> Result<CombineReport> {
        let report = self.combiner.run(self.selection.snapshot(), destination)?;
        Ok(report)
    }

    /// 저장 경로 입력 확정 처리 (빈 입력은 취소로 간주)
    pub fn combine_to_input(&mut self, input: &str) {
        let Some(destination) = self.picker.resolve_destination(input, &self.base_dir) else {
            return;
        };

        match self.combine_to(&destination) {
            Ok(report) => {
                debug!(destination = %destination.display(), "combine notice updated");
                self.notice = Some(format!(
                    "Combined {} at {}",
                    pluralize(report.files_written, "file", "files"),
                    format_clock(Local::now())
                ));
                self.last_destination = Some(destination);
                self.show_message("Combine Complete", success_message(&report));
                self.save_settings();
            }
            Err(e) => {
                warn!(destination = %destination.display(), error = %e, "combine failed");
                self.notice = Some("Combine failed".to_string());
                self.show_error("Combine Failed", failure_message(&e));
            }
        }
    }

    // === 필터 ===

    /// 다음 필터 프리셋으로 전환
    pub fn cycle_filter(&mut self) {
        self.filter_index = FileFilter::next_index(self.filter_index);
        self.notice = Some(format!("Filter: {}", self.filter().display()));
    }
}

/// 결합 성공 메시지 (경로, 개수, 건너뛴 파일)
pub(super) fn success_message(report: &CombineReport) -> String {
    let mut lines = vec![
        format!("Saved to {}", report.destination.display()),
        format!(
            "{} written, {} skipped ({})",
            pluralize(report.files_written, "file", "files"),
            report.files_skipped(),
            format_file_size(report.bytes_written)
        ),
    ];
    if report.has_skipped() {
        lines.push("Skipped:".to_string());
        for skipped in report.skipped.iter().take(MAX_SKIPPED_LISTED) {
            let name = skipped
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| skipped.path.display().to_string());
            lines.push(format!("  {}: {}", name, skipped.reason));
        }
        if report.skipped.len() > MAX_SKIPPED_LISTED {
            lines.push(format!(
                "  ... and {} more",
                report.skipped.len() - MAX_SKIPPED_LISTED
            ));
        }
    }
    lines.join("\n")
}

/// 결합 실패 메시지 (에러 종류 + 상세)
pub(super) fn failure_message(err: &AppError) -> String {
    match err {
        AppError::Combine(inner) => format!("{}\n{}", inner.kind_label(), inner),
        other => other.to_string(),
    }
}
