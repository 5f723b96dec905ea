//! 기준 접미사 집합에 대한 정확도 채점

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::trie::{SuffixTrie, Trie};

/// 더 나은 결과를 낸 트라이 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrieKind {
    Prefix,
    Suffix,
}

impl fmt::Display for TrieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrieKind::Prefix => write!(f, "Prefix trie"),
            TrieKind::Suffix => write!(f, "Suffix trie"),
        }
    }
}

/// 채점 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccuracyReport {
    /// 채점한 단어 수
    pub total: usize,
    /// 접두사 트라이 분할의 접미사가 기준 집합에 있는 단어 수
    pub correct_prefix: usize,
    /// 접미사 트라이 분할의 접미사가 기준 집합에 있는 단어 수
    pub correct_suffix: usize,
}

impl AccuracyReport {
    /// 접미사 트라이가 엄격히 더 많을 때만 Suffix, 동점이면 Prefix
    pub fn winner(&self) -> TrieKind {
        if self.correct_suffix > self.correct_prefix {
            TrieKind::Suffix
        } else {
            TrieKind::Prefix
        }
    }
}

/// 두 트라이의 분할 결과를 기준 접미사 집합과 비교
pub fn score<S: AsRef<str>>(
    words: &[S],
    prefix: &Trie,
    suffix: &SuffixTrie,
    reference: &HashSet<String>,
) -> AccuracyReport {
    let mut report = AccuracyReport {
        total: words.len(),
        correct_prefix: 0,
        correct_suffix: 0,
    };

    for word in words {
        let word = word.as_ref();
        if reference.contains(&prefix.find_split_point(word).suffix) {
            report.correct_prefix += 1;
        }
        if reference.contains(&suffix.find_suffix_split(word).suffix) {
            report.correct_suffix += 1;
        }
    }

    log::debug!(
        "정확도 채점: 접두사 {} / 접미사 {} (전체 {})",
        report.correct_prefix,
        report.correct_suffix,
        report.total
    );
    report
}
