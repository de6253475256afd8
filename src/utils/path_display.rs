use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "…";

/// 경로를 표시 문자열로 변환 (HOME은 `~`)
pub fn display_path(path: &Path) -> String {
    let text = path.to_string_lossy().to_string();
    let Some(home) = dirs::home_dir() else {
        return text;
    };
    let home = home.to_string_lossy().to_string();
    if home.is_empty() || home == "/" {
        return text;
    }
    if text == home {
        "~".to_string()
    } else if let Some(rest) = text.strip_prefix(&home) {
        if rest.starts_with('/') {
            format!("~{}", rest)
        } else {
            text
        }
    } else {
        text
    }
}

/// 최대 너비에 맞춰 앞부분을 생략한다. 파일 이름 쪽(끝)이 항상 보이게 한다.
pub fn truncate_front(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(ELLIPSIS.width());
    let mut tail: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > budget {
            break;
        }
        tail.push(ch);
        width += ch_width;
    }
    tail.reverse();
    format!("{}{}", ELLIPSIS, tail.into_iter().collect::<String>())
}

/// Path에 `~` 축약과 앞부분 생략을 함께 적용한다.
pub fn fit_path(path: &Path, max_width: usize) -> String {
    truncate_front(&display_path(path), max_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_truncate_front_short() {
        assert_eq!(truncate_front("/tmp/a.py", 20), "/tmp/a.py");
    }

    #[test]
    fn test_truncate_front_keeps_file_name() {
        let truncated = truncate_front("/very/long/directory/structure/main.py", 16);
        assert!(truncated.starts_with('…'));
        assert!(truncated.ends_with("main.py"));
        assert!(truncated.width() <= 16);
    }

    #[test]
    fn test_truncate_front_wide_chars() {
        let truncated = truncate_front("/문서/프로젝트/한글파일.py", 10);
        assert!(truncated.width() <= 10);
        assert!(truncated.ends_with(".py"));
    }

    #[test]
    fn test_display_path_home() {
        if let Some(home) = dirs::home_dir() {
            if home != PathBuf::from("/") {
                let inside = home.join("src").join("a.py");
                assert_eq!(display_path(&inside), "~/src/a.py");
            }
        }
        assert_eq!(display_path(Path::new("/")), "/");
    }
}
