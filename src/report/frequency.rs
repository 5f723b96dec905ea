//! 접미사 빈도 집계

use std::collections::HashMap;

use serde::Serialize;

/// 접미사와 등장 횟수
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuffixCount {
    pub suffix: String,
    pub count: usize,
}

/// 접미사 빈도 카운터
///
/// 동점일 때는 먼저 등장한 접미사가 앞에 옵니다.
#[derive(Debug, Clone, Default)]
pub struct SuffixCounter {
    /// 접미사 -> (첫 등장 순서, 횟수)
    counts: HashMap<String, (usize, usize)>,
}

impl SuffixCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 접미사 1회 추가. 빈 접미사는 무시
    pub fn add(&mut self, suffix: &str) {
        if suffix.is_empty() {
            return;
        }
        let order = self.counts.len();
        self.counts.entry(suffix.to_string()).or_insert((order, 0)).1 += 1;
    }

    /// 접미사 등장 횟수
    pub fn get(&self, suffix: &str) -> usize {
        self.counts.get(suffix).map(|&(_, count)| count).unwrap_or(0)
    }

    /// 서로 다른 접미사 수
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// 가장 많이 등장한 접미사 `n`개 (횟수 내림차순, 동점은 첫 등장 순)
    pub fn most_common(&self, n: usize) -> Vec<SuffixCount> {
        let mut entries: Vec<(&String, &(usize, usize))> = self.counts.iter().collect();
        entries.sort_by(|a, b| b.1 .1.cmp(&a.1 .1).then(a.1 .0.cmp(&b.1 .0)));
        entries
            .into_iter()
            .take(n)
            .map(|(suffix, &(_, count))| SuffixCount {
                suffix: suffix.clone(),
                count,
            })
            .collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SuffixCounter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counter = Self::new();
        for suffix in iter {
            counter.add(suffix.as_ref());
        }
        counter
    }
}
