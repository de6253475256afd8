//! 파일 선택기
//!
//! 터미널 UI에서 입력한 경로/디렉토리/글로브를 후보 파일 목록으로 바꿉니다.
//! 하위 디렉토리는 탐색하지 않습니다.

use crate::models::file_filter::FileFilter;
use crate::system::filesystem::FileSystem;
use crate::utils::error::{AppError, Result};
use crate::utils::glob::{glob_match, is_glob_pattern};
use std::path::{Component, Path, PathBuf};

/// 파일 선택기
#[derive(Debug, Default)]
pub struct FilePicker {
    filesystem: FileSystem,
}

impl FilePicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 입력을 절대 경로 후보 목록으로 해석
    ///
    /// - 일반 파일: 그 파일 하나 (필터 미적용)
    /// - 디렉토리: 필터를 통과한 직속 파일들
    /// - 마지막 구성요소가 글로브: 부모 디렉토리에서 글로브와 필터를 모두 통과한 파일들
    pub fn resolve(&self, input: &str, base_dir: &Path, filter: &FileFilter) -> Result<Vec<PathBuf>> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        let path = normalize(&absolutize(&expand_home(trimmed), base_dir));

        if path.is_file() {
            return Ok(vec![path]);
        }
        if path.is_dir() {
            return self.filesystem.list_filtered(&path, filter);
        }

        let pattern = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        if is_glob_pattern(&pattern) {
            let parent = path.parent().unwrap_or(base_dir);
            return self.filesystem.list_files(parent, |name| {
                glob_match(&pattern, name) && filter.matches(name)
            });
        }

        Err(AppError::PathNotFound { path })
    }

    /// 저장 경로 입력을 절대 경로로 해석 (빈 입력이면 None)
    ///
    /// 확장자가 없으면 `.txt`를 붙입니다.
    pub fn resolve_destination(&self, input: &str, base_dir: &Path) -> Option<PathBuf> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        let mut path = normalize(&absolutize(&expand_home(trimmed), base_dir));
        if path.extension().is_none() {
            path.set_extension(DEFAULT_OUTPUT_EXTENSION);
        }
        Some(path)
    }
}

/// 저장 경로에 확장자가 없을 때 붙이는 기본 확장자
const DEFAULT_OUTPUT_EXTENSION: &str = "txt";

/// `~` 접두어를 홈 디렉토리로 확장
fn expand_home(input: &str) -> PathBuf {
    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

fn absolutize(path: &Path, base_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// `.`/`..` 구성요소 정리 (파일 시스템 조회 없이)
fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            other => result.push(other.as_os_str()),
        }
    }
    result
}
