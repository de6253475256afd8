//! 파일 결합기
//!
//! 선택된 파일을 순서대로 읽어 하나의 텍스트 파일로 합칩니다.
//!
//! 출력 형식 (파일마다):
//!
//! ```text
//! # === <basename> ===
//! <내용 그대로>
//! <빈 줄>
//! ```
//!
//! 읽을 수 없는 파일은 내용 대신 `# [skipped: <reason>]` 한 줄과 빈 줄을 씁니다.
//!
//! 결과는 대상 디렉토리의 임시 파일에 먼저 쓰고, 모두 성공하면
//! 대상 경로로 rename 합니다. 실패 시 대상 파일은 건드리지 않습니다.
//! 대상이 심볼릭 링크면 링크 대상 파일을 교체하고, 기존 파일의 권한은 유지합니다.
//! 읽기 전용인 기존 파일은 `DestinationWrite`로 거부합니다.

use crate::models::combine::{CombineReport, SkipReason, SkippedFile};
use crate::utils::error::CombineError;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// 구분선 형식: `# === <basename> ===`
pub fn delimiter_line(path: &Path) -> String {
    format!("# === {} ===\n", display_name(path))
}

/// 건너뛴 파일 자리 표시 줄
pub fn placeholder_line(reason: &SkipReason) -> String {
    format!("# [skipped: {}]\n", reason)
}

/// 디렉토리를 뺀 파일 이름 (없으면 경로 전체)
fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    }
}

/// 소스 파일을 UTF-8 텍스트로 읽기
fn read_source(path: &Path) -> std::result::Result<String, SkipReason> {
    let metadata = fs::metadata(path).map_err(|e| SkipReason::from_io(&e))?;
    if !metadata.is_file() {
        return Err(SkipReason::NotAFile);
    }
    let bytes = fs::read(path).map_err(|e| SkipReason::from_io(&e))?;
    String::from_utf8(bytes).map_err(|_| SkipReason::InvalidUtf8)
}

/// 대상 디렉토리에 임시 파일 생성
///
/// 새 파일은 umask가 적용된 일반 파일 권한(0666 기준)으로 만들어집니다.
fn create_temp(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".filecombiner-");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// 결합 실행기
#[derive(Debug, Default)]
pub struct Combiner;

impl Combiner {
    pub fn new() -> Self {
        Self
    }

    /// 결합 실행
    ///
    /// `ordered_paths`가 비어 있으면 어떤 I/O도 하지 않고 `EmptySelection`을 반환합니다.
    /// 개별 파일 읽기 실패는 보고서의 `skipped`에 모이고 실행은 계속됩니다.
    pub fn run(
        &self,
        ordered_paths: &[PathBuf],
        destination: &Path,
    ) -> std::result::Result<CombineReport, CombineError> {
        if ordered_paths.is_empty() {
            return Err(CombineError::EmptySelection);
        }

        info!(
            files = ordered_paths.len(),
            destination = %destination.display(),
            "combine started"
        );

        // 심볼릭 링크는 링크 대상에 씀
        let target = fs::canonicalize(destination).unwrap_or_else(|_| destination.to_path_buf());
        let existing = fs::metadata(&target).ok().filter(|m| m.is_file());
        if let Some(metadata) = &existing {
            if metadata.permissions().readonly() {
                return Err(CombineError::DestinationWrite {
                    path: destination.to_path_buf(),
                    source: io::Error::new(
                        io::ErrorKind::PermissionDenied,
                        "destination is read-only",
                    ),
                });
            }
        }

        let dest_dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let temp = create_temp(&dest_dir).map_err(|source| CombineError::DestinationWrite {
            path: destination.to_path_buf(),
            source,
        })?;

        // 기존 파일을 교체할 때는 권한을 그대로 유지
        if let Some(metadata) = existing {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|source| CombineError::DestinationWrite {
                    path: destination.to_path_buf(),
                    source,
                })?;
        }

        let mut report = CombineReport::new(destination.to_path_buf());
        let mut writer = BufWriter::new(temp);

        Self::write_entries(&mut writer, ordered_paths, &mut report).map_err(|source| {
            CombineError::Unexpected {
                path: destination.to_path_buf(),
                source,
            }
        })?;

        let temp = writer.into_inner().map_err(|e| CombineError::Unexpected {
            path: destination.to_path_buf(),
            source: e.into_error(),
        })?;
        temp.as_file()
            .sync_all()
            .map_err(|source| CombineError::Unexpected {
                path: destination.to_path_buf(),
                source,
            })?;

        // 임시 파일 → 대상 경로 (기존 파일은 교체)
        temp.persist(&target)
            .map_err(|e| CombineError::DestinationWrite {
                path: destination.to_path_buf(),
                source: e.error,
            })?;

        info!(
            written = report.files_written,
            skipped = report.files_skipped(),
            bytes = report.bytes_written,
            "combine finished"
        );
        Ok(report)
    }

    /// 모든 항목 기록 (소스 읽기 실패는 자리 표시로 대체)
    fn write_entries<W: Write>(
        writer: &mut W,
        ordered_paths: &[PathBuf],
        report: &mut CombineReport,
    ) -> io::Result<()> {
        for path in ordered_paths {
            let header = delimiter_line(path);
            writer.write_all(header.as_bytes())?;
            report.bytes_written += header.len() as u64;

            match read_source(path) {
                Ok(content) => {
                    writer.write_all(content.as_bytes())?;
                    writer.write_all(b"\n\n")?;
                    report.bytes_written += content.len() as u64 + 2;
                    report.files_written += 1;
                }
                Err(reason) => {
                    warn!(path = %path.display(), %reason, "source skipped");
                    let placeholder = placeholder_line(&reason);
                    writer.write_all(placeholder.as_bytes())?;
                    writer.write_all(b"\n")?;
                    report.bytes_written += placeholder.len() as u64 + 1;
                    report.skipped.push(SkippedFile {
                        path: path.clone(),
                        reason,
                    });
                }
            }
        }
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_combine_exact_format() {
        let temp = TempDir::new().unwrap();
        let f1 = write_file(temp.path(), "f1", b"hello\n");
        let f2 = write_file(temp.path(), "f2", b"world\n");
        let dest = temp.path().join("out.txt");

        let report = Combiner::new().run(&[f1, f2], &dest).unwrap();

        let output = fs::read_to_string(&dest).unwrap();
        assert_eq!(output, "# === f1 ===\nhello\n\n\n# === f2 ===\nworld\n\n\n");
        assert_eq!(report.files_written, 2);
        assert_eq!(report.files_skipped(), 0);
        assert_eq!(report.bytes_written, output.len() as u64);
        assert_eq!(report.destination, dest);
    }

    #[test]
    fn test_delimiter_uses_basename_only() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("pkg");
        fs::create_dir(&nested).unwrap();
        let src = write_file(&nested, "module.py", b"x = 1");
        let dest = temp.path().join("out.txt");

        Combiner::new().run(&[src], &dest).unwrap();

        let output = fs::read_to_string(&dest).unwrap();
        assert_eq!(output, "# === module.py ===\nx = 1\n\n");
        assert!(!output.contains("pkg"));
    }

    #[test]
    fn test_empty_selection_performs_no_io() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("out.txt");

        let result = Combiner::new().run(&[], &dest);

        assert!(matches!(result, Err(CombineError::EmptySelection)));
        assert!(!dest.exists());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_invalid_utf8_is_skipped_and_run_continues() {
        let temp = TempDir::new().unwrap();
        let f1 = write_file(temp.path(), "f1", b"hello\n");
        let f2 = write_file(temp.path(), "f2", &[0xff, 0xfe, 0x00, 0x80]);
        let dest = temp.path().join("out.txt");

        let report = Combiner::new().run(&[f1, f2.clone()], &dest).unwrap();

        let output = fs::read_to_string(&dest).unwrap();
        assert_eq!(
            output,
            "# === f1 ===\nhello\n\n\n# === f2 ===\n# [skipped: not valid UTF-8 text]\n\n"
        );
        assert_eq!(report.files_written, 1);
        assert_eq!(report.files_skipped(), 1);
        assert_eq!(report.skipped[0].path, f2);
        assert_eq!(report.skipped[0].reason, SkipReason::InvalidUtf8);
    }

    #[test]
    fn test_missing_source_is_skipped() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("deleted.py");
        let kept = write_file(temp.path(), "kept.py", b"print(1)\n");
        let dest = temp.path().join("out.txt");

        let report = Combiner::new().run(&[gone, kept], &dest).unwrap();

        let output = fs::read_to_string(&dest).unwrap();
        assert!(output.starts_with("# === deleted.py ===\n# [skipped: file not found]\n\n"));
        assert!(output.ends_with("# === kept.py ===\nprint(1)\n\n\n"));
        assert_eq!(report.files_written, 1);
        assert_eq!(report.skipped[0].reason, SkipReason::NotFound);
    }

    #[test]
    fn test_directory_source_is_skipped() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("subdir");
        fs::create_dir(&dir).unwrap();
        let dest = temp.path().join("out.txt");

        let report = Combiner::new().run(&[dir], &dest).unwrap();

        assert_eq!(report.files_written, 0);
        assert_eq!(report.skipped[0].reason, SkipReason::NotAFile);
    }

    #[test]
    fn test_destination_is_overwritten() {
        let temp = TempDir::new().unwrap();
        let a = write_file(temp.path(), "a.py", b"first");
        let b = write_file(temp.path(), "b.py", b"second");
        let dest = temp.path().join("out.txt");

        Combiner::new().run(&[a], &dest).unwrap();
        Combiner::new().run(&[b], &dest).unwrap();

        let output = fs::read_to_string(&dest).unwrap();
        assert_eq!(output, "# === b.py ===\nsecond\n\n");
    }

    #[test]
    fn test_unwritable_destination_fails_without_output() {
        let temp = TempDir::new().unwrap();
        let src = write_file(temp.path(), "a.py", b"x");
        let dest = temp.path().join("missing_dir").join("out.txt");

        let result = Combiner::new().run(&[src], &dest);

        assert!(matches!(result, Err(CombineError::DestinationWrite { .. })));
        assert!(!dest.exists());
    }

    #[test]
    fn test_destination_is_directory_fails_and_leaves_no_temp() {
        let temp = TempDir::new().unwrap();
        let src = write_file(temp.path(), "a.py", b"x");
        let dest = temp.path().join("out_dir");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("keep.txt"), "keep").unwrap();

        let result = Combiner::new().run(&[src], &dest);

        assert!(matches!(result, Err(CombineError::DestinationWrite { .. })));
        assert!(dest.is_dir());
        // 소스, 대상 디렉토리만 남아야 함 (임시 파일 정리됨)
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_source_listed_twice_is_written_twice() {
        // 중복 제거는 선택 집합의 책임
        let temp = TempDir::new().unwrap();
        let a = write_file(temp.path(), "a.py", b"x");
        let dest = temp.path().join("out.txt");

        let report = Combiner::new().run(&[a.clone(), a], &dest).unwrap();
        assert_eq!(report.files_written, 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_destination_writes_through_link() {
        let temp = TempDir::new().unwrap();
        let src = write_file(temp.path(), "a.py", b"x\n");
        let real = write_file(temp.path(), "real.txt", b"old");
        let link = temp.path().join("link.txt");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        Combiner::new().run(&[src], &link).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "# === a.py ===\nx\n\n\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_destination_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let src = write_file(temp.path(), "a.py", b"x");
        let dest = write_file(temp.path(), "out.txt", b"old");
        fs::set_permissions(&dest, fs::Permissions::from_mode(0o600)).unwrap();

        Combiner::new().run(&[src], &dest).unwrap();

        let mode = fs::metadata(&dest).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "# === a.py ===\nx\n\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_read_only_destination_is_rejected() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let src = write_file(temp.path(), "a.py", b"x");
        let dest = write_file(temp.path(), "out.txt", b"old");
        fs::set_permissions(&dest, fs::Permissions::from_mode(0o444)).unwrap();

        let result = Combiner::new().run(&[src], &dest);

        assert!(matches!(result, Err(CombineError::DestinationWrite { .. })));
        assert_eq!(fs::read_to_string(&dest).unwrap(), "old");
        let mode = fs::metadata(&dest).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o444);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_destination_is_owner_read_write() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let src = write_file(temp.path(), "a.py", b"x");
        let dest = temp.path().join("out.txt");

        Combiner::new().run(&[src], &dest).unwrap();

        let mode = fs::metadata(&dest).unwrap().permissions().mode();
        assert_eq!(mode & 0o600, 0o600);
    }
}
