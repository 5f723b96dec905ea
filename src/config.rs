//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 파일 경로를 지정하는 환경 변수
pub const CONFIG_ENV: &str = "STEMTRIE_CONFIG";

/// 분할 보고서 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SegmenterConfig {
    /// 말뭉치 파일 경로 (한 줄에 한 단어)
    #[serde(default = "default_corpus_path")]
    pub corpus_path: PathBuf,
    /// 비교 표에 출력할 단어 수
    #[serde(default = "default_table_rows")]
    pub table_rows: usize,
    /// 출력할 상위 접미사 수
    #[serde(default = "default_top_suffixes")]
    pub top_suffixes: usize,
    /// 정확도 채점에 쓰는 기준 접미사
    #[serde(default = "default_reference_suffixes")]
    pub reference_suffixes: Vec<String>,
    /// 다중 형태소 분할 예시 단어
    #[serde(default = "default_sample_words")]
    pub sample_words: Vec<String>,
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from("brown_nouns.txt")
}

fn default_table_rows() -> usize {
    50
}

fn default_top_suffixes() -> usize {
    10
}

fn default_reference_suffixes() -> Vec<String> {
    ["s", "es", "ing", "ed"].iter().map(|s| s.to_string()).collect()
}

fn default_sample_words() -> Vec<String> {
    ["unemployed", "unemployment", "kites", "studies", "playing"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            corpus_path: default_corpus_path(),
            table_rows: default_table_rows(),
            top_suffixes: default_top_suffixes(),
            reference_suffixes: default_reference_suffixes(),
            sample_words: default_sample_words(),
        }
    }
}

impl SegmenterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 말뭉치 경로 설정
    pub fn with_corpus_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.corpus_path = path.into();
        self
    }

    /// 비교 표 행 수 설정
    pub fn with_table_rows(mut self, rows: usize) -> Self {
        self.table_rows = rows;
        self
    }

    /// 상위 접미사 수 설정
    pub fn with_top_suffixes(mut self, n: usize) -> Self {
        self.top_suffixes = n;
        self
    }

    /// 기준 접미사 설정
    pub fn with_reference_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reference_suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// 예시 단어 설정
    pub fn with_sample_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sample_words = words.into_iter().map(Into::into).collect();
        self
    }
}

/// 설정 파일 경로: $STEMTRIE_CONFIG, 없으면 ./stemtrie.json
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("stemtrie.json"))
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config(path: &Path) -> SegmenterConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            SegmenterConfig::default()
        }),
        Err(_) => {
            log::debug!("설정 파일 없음, 기본값 사용: {}", path.display());
            SegmenterConfig::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_config(config: &SegmenterConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(())
}
