//! 결합 결과 모델
//!
//! 한 번의 결합 실행이 돌려주는 보고서와 건너뛴 파일 정보

use std::fmt;
use std::io;
use std::path::PathBuf;

/// 소스 파일을 건너뛴 이유
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// 파일 없음 (선택 후 삭제된 경우 등)
    NotFound,
    /// 읽기 권한 없음
    PermissionDenied,
    /// 일반 파일이 아님 (디렉토리 등)
    NotAFile,
    /// UTF-8 텍스트가 아님
    InvalidUtf8,
    /// 기타 읽기 에러
    Io(String),
}

impl SkipReason {
    /// io::Error를 건너뛰기 이유로 변환
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => SkipReason::NotFound,
            io::ErrorKind::PermissionDenied => SkipReason::PermissionDenied,
            io::ErrorKind::InvalidData => SkipReason::InvalidUtf8,
            _ => SkipReason::Io(err.to_string()),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotFound => write!(f, "file not found"),
            SkipReason::PermissionDenied => write!(f, "permission denied"),
            SkipReason::NotAFile => write!(f, "not a regular file"),
            SkipReason::InvalidUtf8 => write!(f, "not valid UTF-8 text"),
            SkipReason::Io(msg) => write!(f, "read error: {}", msg),
        }
    }
}

/// 건너뛴 파일
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// 결합 실행 보고서
#[derive(Debug, Clone)]
pub struct CombineReport {
    /// 결과 파일 경로
    pub destination: PathBuf,
    /// 내용을 기록한 파일 수
    pub files_written: usize,
    /// 건너뛴 파일 목록 (처리 순서)
    pub skipped: Vec<SkippedFile>,
    /// 결과 파일 전체 크기 (바이트)
    pub bytes_written: u64,
}

impl CombineReport {
    pub fn new(destination: PathBuf) -> Self {
        Self {
            destination,
            files_written: 0,
            skipped: Vec::new(),
            bytes_written: 0,
        }
    }

    /// 건너뛴 파일 수
    pub fn files_skipped(&self) -> usize {
        self.skipped.len()
    }

    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }

    /// 처리한 전체 파일 수
    pub fn total_files(&self) -> usize {
        self.files_written + self.skipped.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reason_from_io() {
        let not_found = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert_eq!(SkipReason::from_io(&not_found), SkipReason::NotFound);

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "no");
        assert_eq!(SkipReason::from_io(&denied), SkipReason::PermissionDenied);

        let other = io::Error::new(io::ErrorKind::Other, "boom");
        assert!(matches!(SkipReason::from_io(&other), SkipReason::Io(msg) if msg == "boom"));
    }

    #[test]
    fn test_report_counts() {
        let mut report = CombineReport::new(PathBuf::from("/tmp/out.txt"));
        report.files_written = 2;
        report.skipped.push(SkippedFile {
            path: PathBuf::from("/tmp/bin.dat"),
            reason: SkipReason::InvalidUtf8,
        });

        assert_eq!(report.files_skipped(), 1);
        assert_eq!(report.total_files(), 3);
        assert!(report.has_skipped());
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::InvalidUtf8.to_string(), "not valid UTF-8 text");
        assert_eq!(SkipReason::NotFound.to_string(), "file not found");
    }
}
