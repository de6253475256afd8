//! 확장자 필터 프리셋
//!
//! 파일 선택기가 디렉토리/글로브 입력을 해석할 때 적용하는 필터.
//! 선택 집합에는 이름(label)만 전달됩니다.

use crate::utils::glob::glob_match;

/// 파일 필터
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    /// 사람이 읽는 이름 (예: "Python Files")
    pub label: &'static str,
    /// 글로브 패턴 목록 (하나라도 맞으면 통과)
    pub patterns: &'static [&'static str],
}

/// 기본 제공 필터 (첫 항목이 기본값)
pub static FILTER_PRESETS: &[FileFilter] = &[
    FileFilter {
        label: "Python Files",
        patterns: &["*.py"],
    },
    FileFilter {
        label: "Rust Files",
        patterns: &["*.rs"],
    },
    FileFilter {
        label: "Text Files",
        patterns: &["*.txt", "*.md"],
    },
    FileFilter {
        label: "All Files",
        patterns: &["*"],
    },
];

impl FileFilter {
    /// 인덱스로 프리셋 조회 (범위 밖이면 기본 필터)
    pub fn preset(index: usize) -> &'static FileFilter {
        FILTER_PRESETS.get(index).unwrap_or(&FILTER_PRESETS[0])
    }

    /// 저장된 인덱스 검증 (범위 밖이면 0)
    pub fn preset_index(index: usize) -> usize {
        if index < FILTER_PRESETS.len() {
            index
        } else {
            0
        }
    }

    /// 다음 프리셋 인덱스 (순환)
    pub fn next_index(index: usize) -> usize {
        (index + 1) % FILTER_PRESETS.len()
    }

    /// 파일 이름이 필터를 통과하는지 확인 (대소문자 무시)
    pub fn matches(&self, file_name: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| glob_match(pattern, file_name))
    }

    /// "Python Files (*.py)" 형태의 표시 문자열
    pub fn display(&self) -> String {
        format!("{} ({})", self.label, self.patterns.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset_is_python() {
        let filter = FileFilter::preset(0);
        assert_eq!(filter.label, "Python Files");
        assert!(filter.matches("main.py"));
        assert!(filter.matches("MAIN.PY"));
        assert!(!filter.matches("main.rs"));
    }

    #[test]
    fn test_preset_out_of_range_falls_back() {
        assert_eq!(FileFilter::preset(99), &FILTER_PRESETS[0]);
    }

    #[test]
    fn test_preset_index_validates_stored_value() {
        assert_eq!(FileFilter::preset_index(1), 1);
        assert_eq!(FileFilter::preset_index(FILTER_PRESETS.len()), 0);
    }

    #[test]
    fn test_next_index_cycles() {
        let last = FILTER_PRESETS.len() - 1;
        assert_eq!(FileFilter::next_index(0), 1);
        assert_eq!(FileFilter::next_index(last), 0);
    }

    #[test]
    fn test_multi_pattern_filter() {
        let text = FileFilter::preset(2);
        assert!(text.matches("notes.txt"));
        assert!(text.matches("README.md"));
        assert!(!text.matches("script.py"));
        assert_eq!(text.display(), "Text Files (*.txt, *.md)");
    }

    #[test]
    fn test_all_files_matches_everything() {
        let all = FileFilter::preset(3);
        assert!(all.matches("Makefile"));
        assert!(all.matches("a.b.c"));
    }
}
