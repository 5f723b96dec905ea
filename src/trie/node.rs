//! 문자 트라이 (아레나 기반)
//!
//! 노드는 `Vec<TrieNode>` 아레나에 저장되고, 부모는 자식을 인덱스로 참조합니다.
//! 루트는 항상 인덱스 0입니다.

use std::collections::HashMap;

/// 아레나 내 노드 인덱스
pub type NodeId = usize;

const ROOT: NodeId = 0;

/// 트라이 노드
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// 문자 -> 자식 노드 인덱스
    children: HashMap<char, NodeId>,
    /// 이 노드를 지나간 삽입 횟수
    count: usize,
    /// 어떤 단어가 이 노드에서 끝나는지
    end_of_word: bool,
}

impl TrieNode {
    /// 분기 수 (서로 다른 자식 개수)
    pub fn branching(&self) -> usize {
        self.children.len()
    }

    /// 이 노드를 지나간 단어 수
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_end_of_word(&self) -> bool {
        self.end_of_word
    }

    /// 문자에 해당하는 자식 인덱스
    pub fn child(&self, ch: char) -> Option<NodeId> {
        self.children.get(&ch).copied()
    }
}

/// 문자 트라이
///
/// 말뭉치 전체를 한 번에 삽입한 뒤에는 읽기 전용으로 사용합니다.
/// 모든 질의는 `&self`만 빌리므로 여러 스레드에서 동시에 호출해도 안전합니다.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    /// 삽입된 단어 수 (중복 포함)
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// 루트만 있는 빈 트라이 생성
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            words: 0,
        }
    }

    /// 단어 목록을 일괄 삽입하여 트라이 생성
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
            "트라이 생성 완료: 단어 {}개, 노드 {}개",
            trie.words,
            trie.nodes.len()
        );
        trie
    }

    /// 단어 삽입
    ///
    /// 지나가는 노드마다 `count`를 1 증가시키고, 마지막 노드에 단어 끝을 표시합니다.
    pub fn insert(&mut self, word: &str) {
        self.insert_chars(word.chars());
    }

    /// 문자 시퀀스 삽입 (역순 삽입에서 재사용)
    pub(crate) fn insert_chars<I: IntoIterator<Item = char>>(&mut self, chars: I) {
        let mut node = ROOT;
        for ch in chars {
            node = match self.nodes[node].child(ch) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(ch, next);
                    next
                }
            };
            self.nodes[node].count += 1;
        }
        self.nodes[node].end_of_word = true;
        self.words += 1;
    }

    /// 루트 노드
    pub fn root(&self) -> &TrieNode {
        &self.nodes[ROOT]
    }

    /// 인덱스로 노드 조회
    pub fn node(&self, id: NodeId) -> Option<&TrieNode> {
        self.nodes.get(id)
    }

    /// 삽입된 단어 수 (중복 포함)
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// 루트를 포함한 전체 노드 수
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// 접두사를 따라 내려간 노드. 중간에 경로가 끊기면 None
    fn descend<I: IntoIterator<Item = char>>(&self, chars: I) -> Option<&TrieNode> {
        let mut node = &self.nodes[ROOT];
        for ch in chars {
            node = &self.nodes[node.child(ch)?];
        }
        Some(node)
    }

    /// 주어진 접두사를 공유하는 삽입 단어 수
    ///
    /// 빈 접두사는 전체 삽입 횟수를 반환합니다.
    pub fn prefix_count(&self, prefix: &str) -> usize {
        if prefix.is_empty() {
            return self.words;
        }
        self.descend(prefix.chars()).map(TrieNode::count).unwrap_or(0)
    }

    /// 단어가 그대로 삽입된 적이 있는지
    pub fn contains(&self, word: &str) -> bool {
        self.descend(word.chars())
            .map(TrieNode::is_end_of_word)
            .unwrap_or(false)
    }

    /// 문자를 따라 내려가며 도달한 각 깊이의 분기 수를 수집
    ///
    /// 반환값의 `i`번째 원소는 깊이 `i + 1` 노드의 자식 수입니다.
    /// 자식이 없는 문자를 만나면 거기서 멈춥니다.
    pub(crate) fn branching_path<I: IntoIterator<Item = char>>(&self, chars: I) -> Vec<usize> {
        let mut path = Vec::new();
        let mut node = &self.nodes[ROOT];
        for ch in chars {
            let Some(next) = node.child(ch) else {
                log::trace!("'{}'에서 경로 끊김 (깊이 {})", ch, path.len());
                break;
            };
            node = &self.nodes[next];
            path.push(node.branching());
        }
        path
    }
}
