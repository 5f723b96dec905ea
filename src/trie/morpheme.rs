//! 다중 형태소 분할
//!
//! 접미사 트라이의 동점 분할을 줄어드는 어간에 반복 적용하여
//! `un+employ+ed` 같은 형태소 열을 만듭니다.

use std::collections::VecDeque;

use super::suffix::SuffixTrie;

impl SuffixTrie {
    /// 단어를 어간과 접미사들로 분할
    ///
    /// 매 반복마다 동점 후보 중 첫 번째(가장 짧은 접미사)만 사용하며,
    /// 다른 후보로 되돌아가 탐색하지 않습니다. 접미사는 항상 비어 있지 않으므로
    /// 어간은 매번 줄어들고, 반복 횟수는 단어의 문자 수를 넘지 않습니다.
    ///
    /// 결과를 이어 붙이면 원래 단어가 됩니다. 어간이 남아 있으면 맨 앞에 옵니다.
    ///
    /// # Examples
    /// ```
    /// use stemtrie::SuffixTrie;
    ///
    /// let trie = SuffixTrie::from_words(["cats", "rats", "bats"]);
    /// assert_eq!(trie.multi_morpheme_split("cats").concat(), "cats");
    /// ```
    pub fn multi_morpheme_split(&self, word: &str) -> Vec<String> {
        let mut parts: VecDeque<String> = VecDeque::new();
        let mut stem = word.to_string();

        while !stem.is_empty() {
            let mut splits = self.find_all_suffix_splits(&stem);
            let first = splits.swap_remove(0);
            if !first.has_suffix() {
                break;
            }
            log::trace!("'{}' -> '{}' + '{}'", stem, first.stem, first.suffix);

            // 새 접미사는 지금까지 찾은 접미사들보다 안쪽에 붙음
            parts.push_front(first.suffix);
            stem = first.stem;
        }

        if !stem.is_empty() {
            parts.push_front(stem);
        }

        log::debug!("다중 형태소 분할: {} -> {:?}", word, parts);
        parts.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_suffix() {
        let trie = SuffixTrie::from_words(["cats", "rats", "bats"]);
        let parts = trie.multi_morpheme_split("cats");
        assert_eq!(parts.concat(), "cats");
        assert_eq!(parts.first().map(String::as_str), Some("c"));
    }

    #[test]
    fn test_peels_multiple_suffixes() {
        // 역순 "stac": s(2: t, g) -> "s", 이어서 "tac": t(1) a(2: c, b) -> "at"
        let trie = SuffixTrie::from_words(["cats", "dogs", "cat", "bat"]);
        assert_eq!(trie.multi_morpheme_split("cats"), vec!["c", "at", "s"]);
    }

    #[test]
    fn test_stops_when_stem_unmatched() {
        // "use"를 뒤집은 "esu"로 시작하는 역순 단어가 없음
        let trie = SuffixTrie::from_words(["used", "uses", "user", "and"]);
        assert_eq!(trie.multi_morpheme_split("used"), vec!["use", "d"]);
    }

    #[test]
    fn test_unknown_word_is_single_stem() {
        let trie = SuffixTrie::from_words(["cats", "rats"]);
        assert_eq!(trie.multi_morpheme_split("dog"), vec!["dog".to_string()]);
    }

    #[test]
    fn test_empty_word() {
        let trie = SuffixTrie::from_words(["cats"]);
        assert!(trie.multi_morpheme_split("").is_empty());
    }

    #[test]
    fn test_stem_exhausted() {
        // 역순 "ab", "ac": 'a' 아래 분기 2 -> "a" 전체가 접미사
        let trie = SuffixTrie::from_words(["ba", "ca"]);
        assert_eq!(trie.multi_morpheme_split("a"), vec!["a".to_string()]);
    }

    #[test]
    fn test_iterations_bounded_by_length() {
        let words = ["walked", "talked", "jumped", "walking", "talking", "walks", "talks"];
        let trie = SuffixTrie::from_words(words);
        for word in words {
            let parts = trie.multi_morpheme_split(word);
            assert_eq!(parts.concat(), word);
            assert!(parts.len() <= word.chars().count());
            assert!(parts.iter().all(|p| !p.is_empty()));
        }
    }
}
