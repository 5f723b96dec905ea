//! 통합 테스트 - 트라이 분기 기반 분할

use stemtrie::corpus::parse_words;
use stemtrie::{Split, SuffixTrie, Trie};

const CORPUS: &str = "
cat
cats
car
cars
kite
kites
played
playing
plays
studies
studied
studying
employ
employed
employment
unemployed
unemployment
walked
walking
talks
";

fn words() -> Vec<String> {
    parse_words(CORPUS)
}

#[test]
fn test_prefix_split_scenario() {
    let trie = Trie::from_words(["cat", "cats", "car", "cars"]);
    assert_eq!(trie.find_split_point("cats"), Split::new("ca", "ts"));
    assert_eq!(trie.find_all_splits("cats"), vec![Split::new("ca", "ts")]);
}

#[test]
fn test_suffix_split_scenario() {
    let trie = SuffixTrie::from_words(["cats", "rats", "bats"]);
    assert_eq!(trie.find_suffix_split("cats"), Split::new("c", "ats"));
}

#[test]
fn test_empty_query() {
    let mut prefix = Trie::new();
    prefix.insert("");
    let mut suffix = SuffixTrie::new();
    suffix.insert("");

    let empty = Split::new("", "");
    assert_eq!(prefix.find_split_point(""), empty);
    assert_eq!(prefix.find_all_splits(""), vec![empty.clone()]);
    assert_eq!(suffix.find_suffix_split(""), empty);
    assert_eq!(suffix.find_all_suffix_splits(""), vec![empty]);
    assert!(suffix.multi_morpheme_split("").is_empty());
}

#[test]
fn test_round_trip() {
    let words = words();
    let prefix = Trie::from_words(&words);
    let suffix = SuffixTrie::from_words(&words);

    let queries = words.iter().map(String::as_str).chain(["unknown", "catalog", "x"]);
    for word in queries {
        assert_eq!(prefix.find_split_point(word).joined(), word);
        assert_eq!(suffix.find_suffix_split(word).joined(), word);
        for split in prefix.find_all_splits(word) {
            assert_eq!(split.joined(), word);
        }
        for split in suffix.find_all_suffix_splits(word) {
            assert_eq!(split.joined(), word);
        }
    }
}

#[test]
fn test_all_splits_never_empty() {
    let words = words();
    let prefix = Trie::from_words(&words);
    let suffix = SuffixTrie::from_words(&words);

    for word in words.iter().map(String::as_str).chain(["", "zzz"]) {
        assert!(!prefix.find_all_splits(word).is_empty());
        assert!(!suffix.find_all_suffix_splits(word).is_empty());
    }
}

#[test]
fn test_best_split_is_first_tie() {
    let words = words();
    let prefix = Trie::from_words(&words);
    let suffix = SuffixTrie::from_words(&words);

    // 두 글자 이상인 말뭉치 단어는 첫 깊이에서 분기가 1 이상
    for word in words.iter().filter(|w| w.chars().count() >= 2) {
        assert_eq!(prefix.find_split_point(word), prefix.find_all_splits(word)[0]);
        assert_eq!(suffix.find_suffix_split(word), suffix.find_all_suffix_splits(word)[0]);
    }
}

#[test]
fn test_deterministic_across_threads() {
    let words = words();
    let prefix = Trie::from_words(&words);
    let suffix = SuffixTrie::from_words(&words);

    let expected: Vec<(Split, Vec<String>)> = words
        .iter()
        .map(|w| (prefix.find_split_point(w), suffix.multi_morpheme_split(w)))
        .collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    words
                        .iter()
                        .map(|w| (prefix.find_split_point(w), suffix.multi_morpheme_split(w)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_multi_morpheme_round_trip() {
    let words = words();
    let suffix = SuffixTrie::from_words(&words);

    for word in &words {
        let parts = suffix.multi_morpheme_split(word);
        assert_eq!(parts.concat(), *word);
        assert!(parts.len() <= word.chars().count());
        assert!(parts.iter().all(|p| !p.is_empty()));
    }
}

#[test]
fn test_count_invariant() {
    let words = words();
    let prefix = Trie::from_words(&words);
    let suffix = SuffixTrie::from_words(&words);

    for probe in ["c", "ca", "play", "employ", "unemploy", "stud"] {
        let expected = words.iter().filter(|w| w.starts_with(probe)).count();
        assert_eq!(prefix.prefix_count(probe), expected, "prefix '{}'", probe);
    }
    for ending in ["s", "ed", "ing", "ment"] {
        let expected = words.iter().filter(|w| w.ends_with(ending)).count();
        assert_eq!(suffix.ending_count(ending), expected, "ending '{}'", ending);
    }
}
