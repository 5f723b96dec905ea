//! 역순 트라이를 이용한 접미사 탐지
//!
//! 공통 어미("-ing", "-ed")를 가진 단어들은 뒤집으면 공통 접두사를 갖습니다.
//! 역순 단어로 만든 트라이에서 최대 분기 지점을 찾고, 그 깊이를 원래 단어의
//! 끝에서부터 센 접미사 길이로 되돌립니다.

use super::node::Trie;
use super::split::{best_depth, tied_depths, Split};

/// 역순 단어로 구성한 접미사 트라이
#[derive(Debug, Clone, Default)]
pub struct SuffixTrie {
    reversed: Trie,
}

impl SuffixTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// 단어 목록을 뒤집어 일괄 삽입
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        log::debug!(
            "접미사 트라이 생성 완료: 단어 {}개, 노드 {}개",
            trie.reversed.len(),
            trie.reversed.node_count()
        );
        trie
    }

    /// 단어를 뒤집어 삽입
    pub fn insert(&mut self, word: &str) {
        self.reversed.insert_chars(word.chars().rev());
    }

    /// 내부 역순 트라이
    pub fn reversed(&self) -> &Trie {
        &self.reversed
    }

    /// 주어진 어미로 끝나는 삽입 단어 수
    pub fn ending_count(&self, ending: &str) -> usize {
        let reversed: String = ending.chars().rev().collect();
        self.reversed.prefix_count(&reversed)
    }

    /// 역순 경로의 분기 수
    fn reversed_path(&self, word: &str) -> Vec<usize> {
        self.reversed.branching_path(word.chars().rev())
    }

    /// 끝에서 `suffix_chars`개 문자를 접미사로 하여 분할
    fn split_from_end(word: &str, char_len: usize, suffix_chars: usize) -> Split {
        Split::at_char(word, char_len - suffix_chars)
    }

    /// 단일 최대 분기 지점으로 접미사 분할
    ///
    /// 분기 지점이 없으면 `(word, "")`를 반환합니다.
    ///
    /// # Examples
    /// ```
    /// use stemtrie::{Split, SuffixTrie};
    ///
    /// let trie = SuffixTrie::from_words(["cats", "rats", "bats"]);
    /// assert_eq!(trie.find_suffix_split("cats"), Split::new("c", "ats"));
    /// ```
    pub fn find_suffix_split(&self, word: &str) -> Split {
        if word.is_empty() {
            return Split::unsplit(word);
        }
        let path = self.reversed_path(word);
        Self::split_from_end(word, word.chars().count(), best_depth(&path))
    }

    /// 최대 분기 수와 같은 모든 접미사 분할 (얕은 순서 = 짧은 접미사 먼저)
    ///
    /// 항상 하나 이상을 반환합니다.
    pub fn find_all_suffix_splits(&self, word: &str) -> Vec<Split> {
        if word.is_empty() {
            return vec![Split::unsplit(word)];
        }
        let path = self.reversed_path(word);
        let char_len = word.chars().count();
        let splits: Vec<Split> = tied_depths(&path)
            .into_iter()
            .map(|depth| Self::split_from_end(word, char_len, depth))
            .collect();

        if splits.is_empty() {
            vec![Split::unsplit(word)]
        } else {
            splits
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_suffix_split() {
        let trie = SuffixTrie::from_words(["cats", "rats", "bats"]);
        assert_eq!(trie.find_suffix_split("cats"), Split::new("c", "ats"));
    }

    #[test]
    fn test_common_ending() {
        let trie = SuffixTrie::from_words(["walked", "talked", "jumped", "walking", "talking"]);
        // 역순 "deklaw": d(1) e(2: k, p) k(1) l(1) a(2: w, t) w(0)
        assert_eq!(trie.find_suffix_split("walked"), Split::new("walk", "ed"));
        assert_eq!(trie.ending_count("ed"), 3);
        assert_eq!(trie.ending_count("ing"), 2);
        assert_eq!(trie.reversed().len(), 5);
        assert!(trie.reversed().contains("deklaw"));
    }

    #[test]
    fn test_unmatched_last_char() {
        let trie = SuffixTrie::from_words(["cats", "rats"]);
        assert_eq!(trie.find_suffix_split("dog"), Split::unsplit("dog"));
        assert_eq!(trie.find_all_suffix_splits("dog"), vec![Split::unsplit("dog")]);
    }

    #[test]
    fn test_whole_word_as_suffix() {
        // 역순 "ab", "ac" -> 깊이 1에서 분기 2
        let trie = SuffixTrie::from_words(["ba", "ca"]);
        assert_eq!(trie.find_suffix_split("a"), Split::new("", "a"));
    }

    #[test]
    fn test_all_suffix_splits_tie() {
        let trie = SuffixTrie::from_words(["bats", "bots", "bads"]);
        // 역순 "stab": s(2: t,d) t(2: a,o) a(1) b(0)
        assert_eq!(
            trie.find_all_suffix_splits("bats"),
            vec![Split::new("bat", "s"), Split::new("ba", "ts")]
        );
        assert_eq!(trie.find_suffix_split("bats"), Split::new("bat", "s"));
    }

    #[test]
    fn test_empty_word() {
        let trie = SuffixTrie::from_words(["cats"]);
        assert_eq!(trie.find_suffix_split(""), Split::new("", ""));
        assert_eq!(trie.find_all_suffix_splits(""), vec![Split::new("", "")]);
    }

    #[test]
    fn test_multibyte_suffix() {
        let trie = SuffixTrie::from_words(["먹었다", "잡았다", "갔었다"]);
        // 역순 "다었먹", "다았잡", "다었갔": 다(2) 었(2) -> 첫 최대는 깊이 1
        assert_eq!(trie.find_suffix_split("먹었다"), Split::new("먹었", "다"));
    }
}
