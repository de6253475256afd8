//! 로그 초기화
//!
//! 터미널은 UI가 점유하므로 로그는 파일로만 남깁니다.
//! 위치: `<data_local_dir>/filecombiner/logs/filecombiner.log`
//! 레벨: 기본 `info`, `RUST_LOG`로 변경 가능

use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "filecombiner.log";

/// 기본 필터 지시어
fn default_directives() -> String {
    if cfg!(debug_assertions) {
        "filecombiner=debug,info".to_string()
    } else {
        "info".to_string()
    }
}

/// 로그 디렉토리
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("filecombiner").join("logs"))
}

/// 전역 subscriber 등록
///
/// 로그 디렉토리를 만들 수 없으면 로그 없이 계속 진행합니다.
pub fn init() -> anyhow::Result<()> {
    let Some(dir) = log_dir() else {
        return Ok(());
    };
    if fs::create_dir_all(&dir).is_err() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives()));

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("log guard already initialized"))?;

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(non_blocking);

    registry().with(env_filter).with(file_layer).try_init()?;
    Ok(())
}
