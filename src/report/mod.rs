//! 분할 결과 보고
//!
//! 트라이 질의 결과를 받아 비교 표, 접미사 빈도, 정확도, 다중 형태소 예시를
//! 하나의 보고서로 모읍니다. 텍스트 출력과 JSON 직렬화를 모두 지원합니다.

mod accuracy;
mod frequency;
mod table;

use std::collections::HashSet;
use std::fmt::Write;

use serde::Serialize;

use crate::config::SegmenterConfig;
use crate::trie::{SuffixTrie, Trie};

// 공개 인터페이스
pub use accuracy::{score, AccuracyReport, TrieKind};
pub use frequency::{SuffixCount, SuffixCounter};
pub use table::{comparison_rows, format_table, ComparisonRow};

/// 다중 형태소 분할 예시
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MorphemeSample {
    pub word: String,
    pub morphemes: Vec<String>,
}

impl MorphemeSample {
    /// "un+employ+ed" 형식
    pub fn joined(&self) -> String {
        self.morphemes.join("+")
    }
}

/// 말뭉치 전체 분할 보고서
#[derive(Debug, Clone, Serialize)]
pub struct SegmentationReport {
    pub total_words: usize,
    pub comparison: Vec<ComparisonRow>,
    pub top_suffixes: Vec<SuffixCount>,
    pub accuracy: AccuracyReport,
    pub winner: TrieKind,
    pub samples: Vec<MorphemeSample>,
}

impl SegmentationReport {
    /// 이미 생성된 두 트라이로 보고서 작성
    pub fn build<S: AsRef<str>>(
        words: &[S],
        prefix: &Trie,
        suffix: &SuffixTrie,
        config: &SegmenterConfig,
    ) -> Self {
        let comparison = comparison_rows(words, prefix, suffix, config.table_rows);

        let counter: SuffixCounter = words
            .iter()
            .map(|w| suffix.find_suffix_split(w.as_ref()).suffix)
            .collect();
        let top_suffixes = counter.most_common(config.top_suffixes);

        let reference: HashSet<String> = config.reference_suffixes.iter().cloned().collect();
        let accuracy = score(words, prefix, suffix, &reference);
        let winner = accuracy.winner();

        let samples = config
            .sample_words
            .iter()
            .map(|w| MorphemeSample {
                word: w.clone(),
                morphemes: suffix.multi_morpheme_split(w),
            })
            .collect();

        Self {
            total_words: words.len(),
            comparison,
            top_suffixes,
            accuracy,
            winner,
            samples,
        }
    }

    /// 콘솔 출력용 텍스트
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Total words: {}", self.total_words);
        let _ = writeln!(out);
        out.push_str(&format_table(&self.comparison));

        let _ = writeln!(out);
        let _ = writeln!(out, "Most common suffixes:");
        for entry in &self.top_suffixes {
            let _ = writeln!(out, "{}: {}", entry.suffix, entry.count);
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Prefix Trie correct splits: {}", self.accuracy.correct_prefix);
        let _ = writeln!(out, "Suffix Trie correct splits: {}", self.accuracy.correct_suffix);
        let _ = writeln!(
            out,
            "=> {} works better for stemming in this dataset.",
            self.winner
        );

        if !self.samples.is_empty() {
            let _ = writeln!(out);
            for sample in &self.samples {
                let _ = writeln!(out, "{} -> {}", sample.word, sample.joined());
            }
        }
        out
    }
}
