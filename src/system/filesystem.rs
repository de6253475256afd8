use crate::models::file_filter::FileFilter;
use crate::utils::error::{AppError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// 파일 시스템 모듈
#[derive(Debug, Default)]
pub struct FileSystem;

impl FileSystem {
    /// 새 파일 시스템 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 디렉토리의 파일 목록 읽기 (하위 디렉토리는 따라가지 않음)
    ///
    /// 일반 파일 중 `accept`를 통과한 것만 이름순으로 반환합니다.
    pub fn list_files<F>(&self, dir: &Path, accept: F) -> Result<Vec<PathBuf>>
    where
        F: Fn(&str) -> bool,
    {
        // 1. 경로 존재 확인
        if !dir.exists() {
            return Err(AppError::PathNotFound {
                path: dir.to_path_buf(),
            });
        }

        // 2. 디렉토리 읽기
        let read_dir = fs::read_dir(dir).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                AppError::PermissionDenied {
                    path: dir.to_path_buf(),
                }
            } else {
                AppError::Io(e)
            }
        })?;

        // 3. 일반 파일만 수집 (에러 난 엔트리는 스킵)
        let mut files: Vec<(String, PathBuf)> = Vec::new();
        for entry in read_dir {
            let Ok(entry) = entry else { continue };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if accept(&name) {
                files.push((name, path));
            }
        }

        files.sort_by(|a, b| a.0.to_lowercase().cmp(&b.0.to_lowercase()));
        Ok(files.into_iter().map(|(_, path)| path).collect())
    }

    /// 필터를 적용한 디렉토리 파일 목록
    pub fn list_filtered(&self, dir: &Path, filter: &FileFilter) -> Result<Vec<PathBuf>> {
        self.list_files(dir, |name| filter.matches(name))
    }

    /// 경로 목록의 전체 크기 (읽을 수 없는 항목은 0으로 계산)
    #[allow(clippy::unused_self)]
    pub fn total_size(&self, paths: &[PathBuf]) -> u64 {
        paths
            .iter()
            .filter_map(|p| fs::metadata(p).ok())
            .filter(|m| m.is_file())
            .map(|m| m.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::file_filter::FileFilter;
    use tempfile::TempDir;

    #[test]
    fn test_list_filtered_is_sorted_and_non_recursive() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.py"), "b").unwrap();
        fs::write(temp.path().join("A.py"), "a").unwrap();
        fs::write(temp.path().join("notes.txt"), "n").unwrap();
        let sub = temp.path().join("pkg");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("inner.py"), "i").unwrap();

        let fs_module = FileSystem::new();
        let files = fs_module
            .list_filtered(temp.path(), FileFilter::preset(0))
            .unwrap();

        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["A.py", "b.py"]);
    }

    #[test]
    fn test_list_missing_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let result = FileSystem::new().list_files(&missing, |_| true);
        assert!(matches!(result, Err(AppError::PathNotFound { .. })));
    }

    #[test]
    fn test_total_size_ignores_missing() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.txt");
        fs::write(&a, "12345").unwrap();
        let missing = temp.path().join("missing.txt");

        assert_eq!(FileSystem::new().total_size(&[a, missing]), 5);
    }
}
