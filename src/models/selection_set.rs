//! 선택 집합 (Selection Set)
//!
//! 사용자가 고른 파일 경로의 순서 있는, 중복 없는 목록.
//! UI는 사본을 갖지 않고 인덱스로만 제거를 요청합니다.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 선택된 파일 경로 목록
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    /// 추가된 순서대로 보관
    paths: Vec<PathBuf>,
    /// 중복 확인용 색인
    index: HashSet<PathBuf>,
}

impl SelectionSet {
    /// 빈 선택 집합 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 경로 추가
    ///
    /// 이미 있는 경로(같은 호출 안에서 반복된 경로 포함)는 조용히 건너뜁니다.
    /// 나머지는 받은 순서대로 뒤에 붙습니다. 새로 추가된 개수를 반환합니다.
    ///
    /// `filter_label`은 파일 선택기가 적용한 필터의 이름으로, 기록 용도로만 쓰입니다.
    pub fn add<I, P>(&mut self, candidates: I, filter_label: Option<&str>) -> usize
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut added = 0;
        for candidate in candidates {
            let path = candidate.into();
            if self.index.contains(&path) {
                continue;
            }
            self.index.insert(path.clone());
            self.paths.push(path);
            added += 1;
        }
        debug!(added, total = self.paths.len(), filter = ?filter_label, "selection add");
        added
    }

    /// 인덱스 집합으로 제거
    ///
    /// 모든 인덱스는 제거 전 순서를 기준으로 해석됩니다.
    /// 범위를 벗어난 인덱스는 무시합니다. 제거된 경로를 원래 순서대로 반환합니다.
    pub fn remove_at<I>(&mut self, indices: I) -> Vec<PathBuf>
    where
        I: IntoIterator<Item = usize>,
    {
        let len = self.paths.len();
        let targets: BTreeSet<usize> = indices.into_iter().filter(|&i| i < len).collect();
        if targets.is_empty() {
            return Vec::new();
        }

        let mut removed = Vec::with_capacity(targets.len());
        let mut kept = Vec::with_capacity(len - targets.len());
        for (i, path) in self.paths.drain(..).enumerate() {
            if targets.contains(&i) {
                removed.push(path);
            } else {
                kept.push(path);
            }
        }
        for path in &removed {
            self.index.remove(path);
        }
        self.paths = kept;

        debug!(removed = removed.len(), total = self.paths.len(), "selection remove");
        removed
    }

    /// 전체 비우기 (확인 절차는 호출자 몫)
    pub fn clear(&mut self) -> usize {
        let count = self.paths.len();
        self.paths.clear();
        self.index.clear();
        debug!(removed = count, "selection clear");
        count
    }

    /// 현재 순서의 읽기 전용 보기
    pub fn snapshot(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PathBuf> {
        self.paths.get(index)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.index.contains(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.paths.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_add_skips_duplicates() {
        let mut set = SelectionSet::new();
        assert_eq!(set.add(paths(&["/a.py", "/a.py"]), None), 1);
        assert_eq!(set.len(), 1);

        // 다음 호출에서도 중복은 건너뜀
        assert_eq!(set.add(paths(&["/b.py", "/a.py"]), Some("Python Files")), 1);
        assert_eq!(set.snapshot(), paths(&["/a.py", "/b.py"]).as_slice());
    }

    #[test]
    fn test_add_empty_is_noop() {
        let mut set = SelectionSet::new();
        assert_eq!(set.add(Vec::<PathBuf>::new(), None), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut set = SelectionSet::new();
        set.add(paths(&["a", "b"]), None);
        set.add(paths(&["c"]), None);

        let removed = set.remove_at([1]);
        assert_eq!(removed, paths(&["b"]));
        assert_eq!(set.snapshot(), paths(&["a", "c"]).as_slice());
    }

    #[test]
    fn test_remove_multiple_uses_pre_removal_indices() {
        let mut set = SelectionSet::new();
        set.add(paths(&["a", "b", "c", "d", "e"]), None);

        let removed = set.remove_at([3, 0, 1]);
        assert_eq!(removed, paths(&["a", "b", "d"]));
        assert_eq!(set.snapshot(), paths(&["c", "e"]).as_slice());
    }

    #[test]
    fn test_remove_ignores_out_of_range() {
        let mut set = SelectionSet::new();
        set.add(paths(&["a", "b"]), None);

        let removed = set.remove_at([1, 7, 1]);
        assert_eq!(removed, paths(&["b"]));
        assert_eq!(set.snapshot(), paths(&["a"]).as_slice());

        assert!(set.remove_at([5]).is_empty());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_from_empty() {
        let mut set = SelectionSet::new();
        assert!(set.remove_at(Vec::new()).is_empty());
        assert!(set.is_empty());
    }

    #[test]
    fn test_removed_path_can_be_added_again() {
        let mut set = SelectionSet::new();
        set.add(paths(&["a", "b"]), None);
        set.remove_at([0]);
        assert!(!set.contains(Path::new("a")));

        assert_eq!(set.add(paths(&["a"]), None), 1);
        assert_eq!(set.snapshot(), paths(&["b", "a"]).as_slice());
    }

    #[test]
    fn test_clear_resets() {
        let mut set = SelectionSet::new();
        set.add(paths(&["a", "b", "c"]), None);

        assert_eq!(set.clear(), 3);
        assert!(set.snapshot().is_empty());
        assert_eq!(set.clear(), 0);
        assert_eq!(set.add(paths(&["a"]), None), 1);
    }
}
