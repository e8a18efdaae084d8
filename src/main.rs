use std::path::PathBuf;

use clap::{Parser, Subcommand};
use roi_calculator::app::{self, AppError, InputOverrides, OutputFormat};
use roi_calculator::config::{self, DEFAULT_CONFIG_PATH};
use roi_calculator::i18n::{self, Translator};
use tracing::error;

/// 폐기물/소모품 절감 투자에 대한 회수기간, 12개월 ROI, NPV 계산기.
#[derive(Debug, Parser)]
#[command(name = "roi_calculator", author, version, long_about = None)]
struct Cli {
    /// 설정 파일 경로
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// 언어 코드 (ko/en/auto)
    #[arg(long)]
    lang: Option<String>,

    /// 언어팩(<code>.toml) 디렉터리
    #[arg(long)]
    locales: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 대화형 메뉴 (기본)
    Interactive,
    /// 설정 기본값으로 한 번 계산한다
    Compute {
        #[command(flatten)]
        overrides: InputOverrides,
        /// 월별 누적 현금흐름 표도 출력
        #[arg(long)]
        series: bool,
        /// 결과를 JSON으로 출력
        #[arg(long, conflicts_with = "series")]
        json: bool,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        error!(%err, "실행 실패");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    let code = i18n::resolve_language(cli.lang.as_deref(), cfg.language.as_deref());
    let mut tr = Translator::new_with_pack(&code, cli.locales.as_deref());

    match cli.command {
        Some(Command::Compute {
            overrides,
            series,
            json,
        }) => {
            let format = if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text {
                    with_series: series,
                }
            };
            app::run_once(&cfg, &overrides, format, &tr).map(|out| println!("{out}"))
        }
        Some(Command::Interactive) | None => {
            app::run(&mut cfg, &cli.config, &mut tr, cli.locales.as_deref())
        }
    }
}
