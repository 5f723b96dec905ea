//! 최대 분기 지점 탐색
//!
//! 단어를 따라 트라이를 내려가며 자식 수(분기 수)가 가장 큰 깊이를 경계로 봅니다.
//! - 단일 분할: 최대값이 *처음* 나타난 깊이 (엄격한 `>` 비교)
//! - 동점 분할: 현재 최대값과 같은 모든 깊이 (`>`이면 초기화, `==`이면 추가)
//!
//! 두 비교 방식의 차이는 의도된 것이므로 하나로 합치지 않습니다.

use std::fmt;

use serde::Serialize;

use super::node::Trie;

/// 어간/접미사 분할 결과
///
/// `stem + suffix`는 항상 원래 단어와 같습니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Split {
    pub stem: String,
    pub suffix: String,
}

impl Split {
    pub fn new(stem: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            suffix: suffix.into(),
        }
    }

    /// 앞에서 `stem_chars`개 문자를 어간으로 하여 분할
    ///
    /// 위치는 바이트가 아닌 문자 단위입니다.
    pub(crate) fn at_char(word: &str, stem_chars: usize) -> Self {
        let byte = word
            .char_indices()
            .nth(stem_chars)
            .map(|(i, _)| i)
            .unwrap_or(word.len());
        let (stem, suffix) = word.split_at(byte);
        Self::new(stem, suffix)
    }

    /// 단어 전체를 어간으로 둔 분할 (경계 없음)
    pub fn unsplit(word: &str) -> Self {
        Self::new(word, "")
    }

    /// 원래 단어 복원
    pub fn joined(&self) -> String {
        format!("{}{}", self.stem, self.suffix)
    }

    pub fn has_suffix(&self) -> bool {
        !self.suffix.is_empty()
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.stem, self.suffix)
    }
}

impl From<Split> for (String, String) {
    fn from(split: Split) -> Self {
        (split.stem, split.suffix)
    }
}

/// 분기 수가 처음으로 최대가 된 깊이 (1부터). 경로가 비어 있으면 0
pub(crate) fn best_depth(path: &[usize]) -> usize {
    let mut split_index = 0;
    let mut max_branching = 0;
    for (i, &branching) in path.iter().enumerate() {
        if branching > max_branching {
            max_branching = branching;
            split_index = i + 1;
        }
    }
    split_index
}

/// 최대 분기 수와 같은 모든 깊이 (얕은 순서)
///
/// 최대값이 갱신되면 목록을 비우고, 같으면 뒤에 추가합니다.
/// 최대값은 0에서 시작하므로 자식 없는 노드도 동점 후보가 될 수 있습니다.
pub(crate) fn tied_depths(path: &[usize]) -> Vec<usize> {
    let mut depths = Vec::new();
    let mut max_branching = 0;
    for (i, &branching) in path.iter().enumerate() {
        if branching > max_branching {
            max_branching = branching;
            depths.clear();
            depths.push(i + 1);
        } else if branching == max_branching {
            depths.push(i + 1);
        }
    }
    depths
}

impl Trie {
    /// 단일 최대 분기 지점으로 분할
    ///
    /// 첫 문자부터 경로가 없으면 어간은 비고 단어 전체가 접미사가 됩니다.
    ///
    /// # Examples
    /// ```
    /// use stemtrie::{Split, Trie};
    ///
    /// let trie = Trie::from_words(["cat", "cats", "car", "cars"]);
    /// assert_eq!(trie.find_split_point("cats"), Split::new("ca", "ts"));
    /// ```
    pub fn find_split_point(&self, word: &str) -> Split {
        if word.is_empty() {
            return Split::new("", "");
        }
        let path = self.branching_path(word.chars());
        Split::at_char(word, best_depth(&path))
    }

    /// 최대 분기 수와 같은 모든 지점으로 분할
    ///
    /// 항상 하나 이상을 반환합니다. 후보가 없으면 `(word, "")` 하나를 돌려줍니다.
    pub fn find_all_splits(&self, word: &str) -> Vec<Split> {
        if word.is_empty() {
            return vec![Split::unsplit(word)];
        }
        let path = self.branching_path(word.chars());
        let splits: Vec<Split> = tied_depths(&path)
            .into_iter()
            .map(|depth| Split::at_char(word, depth))
            .collect();

        if splits.is_empty() {
            vec![Split::unsplit(word)]
        } else {
            splits
        }
    }
}
