//! 말뭉치 로드
//!
//! 한 줄에 한 단어인 텍스트 파일을 읽어 소문자 단어 목록으로 만듭니다.

use std::fs;
use std::path::{Path, PathBuf};

/// 말뭉치 로드 에러
#[derive(Debug)]
pub enum CorpusError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// 단어가 하나도 없음
    Empty(PathBuf),
}

impl std::fmt::Display for CorpusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorpusError::IoError(e) => write!(f, "말뭉치 파일 읽기 오류: {}", e),
            CorpusError::Empty(path) => write!(f, "말뭉치에 단어가 없습니다: {}", path.display()),
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorpusError::IoError(e) => Some(e),
            CorpusError::Empty(_) => None,
        }
    }
}

impl From<std::io::Error> for CorpusError {
    fn from(e: std::io::Error) -> Self {
        CorpusError::IoError(e)
    }
}

/// 텍스트를 단어 목록으로 변환
///
/// 각 줄의 앞뒤 공백을 제거하고 빈 줄은 건너뛰며 소문자로 바꿉니다.
/// 순서와 중복은 그대로 유지합니다.
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// 파일에서 단어 목록 로드
pub fn load_words(path: impl AsRef<Path>) -> Result<Vec<String>, CorpusError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let words = parse_words(&text);

    if words.is_empty() {
        return Err(CorpusError::Empty(path.to_path_buf()));
    }

    log::info!("말뭉치 로드: {} ({}개 단어)", path.display(), words.len());
    Ok(words)
}
