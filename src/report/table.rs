//! 접두사/접미사 트라이 분할 비교 표

use std::fmt::Write;

use serde::Serialize;

use crate::trie::{SuffixTrie, Trie};

/// 비교 표의 한 행
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub word: String,
    /// 접두사 트라이 분할 ("stem+suffix")
    pub prefix_split: String,
    /// 접미사 트라이 분할 ("stem+suffix")
    pub suffix_split: String,
}

impl ComparisonRow {
    pub fn new(word: &str, prefix: &Trie, suffix: &SuffixTrie) -> Self {
        Self {
            word: word.to_string(),
            prefix_split: prefix.find_split_point(word).to_string(),
            suffix_split: suffix.find_suffix_split(word).to_string(),
        }
    }
}

/// 앞에서부터 `limit`개 단어의 비교 행 생성
pub fn comparison_rows<S: AsRef<str>>(
    words: &[S],
    prefix: &Trie,
    suffix: &SuffixTrie,
    limit: usize,
) -> Vec<ComparisonRow> {
    words
        .iter()
        .take(limit)
        .map(|w| ComparisonRow::new(w.as_ref(), prefix, suffix))
        .collect()
}

/// 비교 표 문자열
pub fn format_table(rows: &[ComparisonRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<15} {:<20} {:<20}", "Word", "Prefix Trie", "Suffix Trie");
    let _ = writeln!(out, "{}", "-".repeat(60));
    for row in rows {
        let _ = writeln!(
            out,
            "{:<15} {:<20} {:<20}",
            row.word, row.prefix_split, row.suffix_split
        );
    }
    out
}
