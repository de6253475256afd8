//! 글로브 패턴 매칭
//!
//! `*` (0개 이상 임의 문자), `?` (임의 1문자) 지원.
//! 대소문자 무시. 파일 선택기의 필터와 글로브 입력에 사용합니다.

/// 패턴에 글로브 와일드카드(`*` 또는 `?`)가 포함되어 있는지 확인
pub fn is_glob_pattern(s: &str) -> bool {
    s.contains('*') || s.contains('?')
}

/// 글로브 패턴 매칭 (대소문자 무시, UTF-8 안전)
///
/// - `*` : 0개 이상의 임의 문자
/// - `?` : 정확히 1개의 임의 문자
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
    let text: Vec<char> = text.to_lowercase().chars().collect();
    match_from(&pattern, &text)
}

/// 백트래킹 매칭: 마지막 `*` 위치만 기억하고 되돌아감
fn match_from(pattern: &[char], text: &[char]) -> bool {
    let (mut p, mut t) = (0usize, 0usize);
    let mut star: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some('*') => {
                star = Some((p, t));
                p += 1;
            }
            Some(&c) if c == '?' || c == text[t] => {
                p += 1;
                t += 1;
            }
            _ => match star {
                // `*`가 한 글자 더 소비하도록 재시도
                Some((sp, st)) => {
                    p = sp + 1;
                    t = st + 1;
                    star = Some((sp, st + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}
