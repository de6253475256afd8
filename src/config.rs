//! 설정 저장/복원
//!
//! 테마, 마지막으로 고른 필터, 마지막 저장 경로를 TOML로 보관합니다.
//! 경로: `$FILECOMBINER_SETTINGS_FILE` 또는 `<config_dir>/filecombiner/settings.toml`

use crate::utils::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 설정 파일 경로 환경 변수
pub const SETTINGS_ENV: &str = "FILECOMBINER_SETTINGS_FILE";

const SETTINGS_VERSION: u32 = 1;

/// 저장되는 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub version: u32,
    pub theme: String,
    /// 필터 프리셋 인덱스
    pub filter: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_destination: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            theme: "dark".to_string(),
            filter: 0,
            last_destination: None,
        }
    }
}

impl Settings {
    /// 기본 설정 파일 경로
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(custom) = env::var(SETTINGS_ENV) {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::config_dir().map(|dir| dir.join("filecombiner").join("settings.toml"))
    }

    /// TOML 문자열 해석 (버전이 다르거나 형식이 틀리면 None)
    pub fn decode(data: &str) -> Option<Self> {
        let parsed: Settings = toml::from_str(data).ok()?;
        if parsed.version != SETTINGS_VERSION {
            return None;
        }
        if parsed.theme.trim().is_empty() {
            return None;
        }
        Some(parsed)
    }

    pub fn encode(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// 설정 로드 (문제가 있으면 기본값)
    pub fn load(path: &Path) -> Self {
        let Ok(data) = fs::read_to_string(path) else {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        };
        match Self::decode(&data) {
            Some(settings) => settings,
            None => {
                warn!(path = %path.display(), "ignoring invalid settings file");
                Self::default()
            }
        }
    }

    /// 설정 저장 (상위 디렉토리 생성)
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.encode()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_settings_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("settings.toml");
        let settings = Settings {
            theme: "light".to_string(),
            filter: 2,
            last_destination: Some(PathBuf::from("/tmp/combined.txt")),
            ..Settings::default()
        };

        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        assert_eq!(Settings::load(&temp.path().join("none.toml")), Settings::default());
    }

    #[test]
    fn test_malformed_or_old_version_uses_defaults() {
        assert!(Settings::decode("theme = ").is_none());
        assert!(Settings::decode("version = 99\ntheme = \"dark\"\nfilter = 0\n").is_none());
        assert!(Settings::decode("version = 1\ntheme = \" \"\nfilter = 0\n").is_none());

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "not toml at all [").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_decode_without_destination() {
        let settings = Settings::decode("version = 1\ntheme = \"dark\"\nfilter = 1\n").unwrap();
        assert_eq!(settings.filter, 1);
        assert!(settings.last_destination.is_none());
    }
}
