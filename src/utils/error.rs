use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 결합(combine) 작업 에러
///
/// 실행 전 조건 실패와 실행 중 예기치 못한 실패를 구분합니다.
/// 개별 소스 파일을 읽지 못한 경우는 에러가 아니라 `SkipReason`으로 기록됩니다.
#[derive(Error, Debug)]
pub enum CombineError {
    #[error("No files selected")]
    EmptySelection,

    #[error("Cannot write destination {}: {source}", path.display())]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unexpected error while writing {}: {source}", path.display())]
    Unexpected {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CombineError {
    /// 사용자에게 보여줄 에러 종류 이름
    pub fn kind_label(&self) -> &'static str {
        match self {
            CombineError::EmptySelection => "Empty selection",
            CombineError::DestinationWrite { .. } => "Destination not writable",
            CombineError::Unexpected { .. } => "Unexpected error",
        }
    }
}

/// 애플리케이션 에러
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Combine(#[from] CombineError),
}

pub type Result<T> = std::result::Result<T, AppError>;
