pub mod config;
pub mod corpus;
pub mod report;
pub mod trie;

pub use report::SegmentationReport;
pub use trie::{Split, SuffixTrie, Trie};
