//! stemtrie - 트라이 분기 기반 어간/접미사 분할

use std::path::PathBuf;
use std::process;

use stemtrie::config::{config_path, load_config, save_config, SegmenterConfig};
use stemtrie::corpus::load_words;
use stemtrie::{SegmentationReport, SuffixTrie, Trie};

/// 명령행 옵션
#[derive(Debug, Default)]
struct Args {
    corpus: Option<PathBuf>,
    config: Option<PathBuf>,
    json: bool,
    init_config: bool,
}

fn parse_args() -> Args {
    let mut parsed = Args::default();
    let mut args = std::env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--corpus" => parsed.corpus = args.next().map(PathBuf::from),
            "--config" => parsed.config = args.next().map(PathBuf::from),
            "--json" => parsed.json = true,
            "--init-config" => parsed.init_config = true,
            "--help" | "-h" => print_help(),
            other => log::warn!("알 수 없는 인자 무시: {}", other),
        }
    }
    parsed
}

fn print_help() -> ! {
    println!("사용법: stemtrie [--corpus <path>] [--config <path>] [--json] [--init-config]");
    println!("  --corpus <path>   한 줄에 한 단어인 말뭉치 파일 (설정보다 우선)");
    println!("  --config <path>   설정 파일 (기본: $STEMTRIE_CONFIG 또는 ./stemtrie.json)");
    println!("  --json            보고서를 JSON으로 출력");
    println!("  --init-config     기본 설정 파일을 생성하고 종료");
    process::exit(0);
}

fn main() {
    // 로깅 초기화 (기본 warn, RUST_LOG로 조정)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = parse_args();
    let path = args.config.clone().unwrap_or_else(config_path);

    if args.init_config {
        if let Err(e) = save_config(&SegmenterConfig::default(), &path) {
            eprintln!("{}", e);
            process::exit(1);
        }
        println!("설정 파일 생성: {}", path.display());
        return;
    }

    let mut config = load_config(&path);
    if let Some(corpus) = args.corpus {
        config.corpus_path = corpus;
    }

    let words = match load_words(&config.corpus_path) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{} ({})", e, config.corpus_path.display());
            process::exit(1);
        }
    };

    // 두 트라이는 여기서 한 번만 생성하고 이후에는 읽기만 함
    let prefix = Trie::from_words(&words);
    let suffix = SuffixTrie::from_words(&words);

    let report = SegmentationReport::build(&words, &prefix, &suffix, &config);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("보고서 직렬화 실패: {}", e);
                process::exit(1);
            }
        }
    } else {
        print!("{}", report.render_text());
    }
}
