//! 트라이 분기 기반 형태소 경계 탐지
//!
//! 단어 목록으로 만든 문자 트라이에서, 자식 수(분기 수)가 가장 큰 지점을
//! 어간과 접미사의 경계로 추정합니다.
//!
//! # 개요
//!
//! - [`Trie`]: 단어를 그대로 삽입한 접두사 트라이. 어간 경계 탐지에 사용
//! - [`SuffixTrie`]: 단어를 뒤집어 삽입한 트라이. 공통 어미 탐지에 사용
//! - 다중 형태소 분할: 접미사 분할을 줄어드는 어간에 반복 적용
//!
//! 두 트라이는 호출자가 한 번 생성한 뒤 참조로 넘겨 사용하며,
//! 생성 이후 모든 질의는 트라이를 변경하지 않습니다.
//!
//! # 사용 예시
//!
//! ```
//! use stemtrie::trie::{Split, SuffixTrie, Trie};
//!
//! let words = ["cat", "cats", "car", "cars"];
//! let prefix = Trie::from_words(words);
//! assert_eq!(prefix.find_split_point("cats"), Split::new("ca", "ts"));
//!
//! let suffix = SuffixTrie::from_words(["cats", "rats", "bats"]);
//! assert_eq!(suffix.find_suffix_split("cats"), Split::new("c", "ats"));
//! ```

mod morpheme;
mod node;
mod split;
mod suffix;

// 공개 인터페이스
pub use node::{NodeId, Trie, TrieNode};
pub use split::Split;
pub use suffix::SuffixTrie;
