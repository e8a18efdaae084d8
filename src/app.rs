use std::path::Path;

use clap::Args;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::report;
use crate::roi::{self, RoiInputs};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// JSON 출력 오류
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 일회성 계산에서 설정 기본값을 덮어쓰는 입력값. 지정하지 않은 항목은 설정값을 쓴다.
#[derive(Debug, Clone, Default, Args)]
pub struct InputOverrides {
    /// 기존 폐기/할증 비용 [/월]
    #[arg(long, allow_negative_numbers = true)]
    pub disposal: Option<f64>,
    /// 소모품 비용 [/월]
    #[arg(long, allow_negative_numbers = true)]
    pub consumables: Option<f64>,
    /// 예상 절감률 [%]
    #[arg(long, allow_negative_numbers = true)]
    pub reduction: Option<f64>,
    /// 1회성 도입 비용
    #[arg(long = "impl", allow_negative_numbers = true)]
    pub impl_cost: Option<f64>,
    /// 월 운영비 변화 (양수=추가 비용, 음수=추가 절감)
    #[arg(long, allow_negative_numbers = true)]
    pub opex_delta: Option<f64>,
    /// 할인율 [%/년]
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,
    /// 분석 기간 [년]
    #[arg(long, allow_negative_numbers = true)]
    pub horizon: Option<f64>,
}

impl InputOverrides {
    /// 지정된 항목만 기본값 위에 덮어쓴다.
    pub fn apply(&self, base: RoiInputs) -> RoiInputs {
        RoiInputs {
            disposal: self.disposal.unwrap_or(base.disposal),
            consumables: self.consumables.unwrap_or(base.consumables),
            reduction: self.reduction.unwrap_or(base.reduction),
            impl_cost: self.impl_cost.unwrap_or(base.impl_cost),
            opex_delta: self.opex_delta.unwrap_or(base.opex_delta),
            rate: self.rate.unwrap_or(base.rate),
            horizon: self.horizon.unwrap_or(base.horizon),
        }
    }
}

/// 일회성 계산 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text { with_series: bool },
    Json,
}

/// 설정 기본값 + 덮어쓰기 입력으로 한 번 계산하고 출력 문자열을 돌려준다.
pub fn run_once(
    config: &Config,
    overrides: &InputOverrides,
    format: OutputFormat,
    tr: &Translator,
) -> Result<String, AppError> {
    let inputs = overrides.apply(config.defaults);
    let result = roi::compute_roi(&inputs);
    debug!(?inputs, "일회성 계산");
    let out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Text { with_series } => {
            let mut text = report::render_summary(&result, &config.display, tr);
            if with_series {
                text.push('\n');
                text.push_str(&report::render_series(&result, &config.display, tr));
            }
            text
        }
    };
    Ok(out)
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(
    config: &mut Config,
    config_path: &Path,
    tr: &mut Translator,
    locales_dir: Option<&Path>,
) -> Result<(), AppError> {
    let mut last_inputs = config.defaults;
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Compute => {
                last_inputs = ui_cli::handle_compute(tr, config, &last_inputs)?;
            }
            MenuChoice::Series => ui_cli::handle_series(tr, config, &last_inputs),
            MenuChoice::Defaults => {
                ui_cli::handle_defaults(tr, config)?;
                config.save(config_path)?;
                last_inputs = config.defaults;
                println!("{}", tr.t(i18n::keys::DEFAULTS_SAVED));
            }
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, config)? {
                    let code = i18n::resolve_language(None, config.language.as_deref());
                    *tr = Translator::new_with_pack(&code, locales_dir);
                    info!(language = tr.language_code(), "언어 변경");
                }
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
