use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;
use tracing::{debug, warn};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_COMPUTE: &str = "main_menu.compute";
    pub const MAIN_MENU_SERIES: &str = "main_menu.series";
    pub const MAIN_MENU_DEFAULTS: &str = "main_menu.defaults";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const INPUTS_HEADING: &str = "inputs.heading";
    pub const INPUTS_KEEP_DEFAULT_NOTE: &str = "inputs.keep_default_note";
    pub const PROMPT_DISPOSAL: &str = "prompt.disposal";
    pub const PROMPT_CONSUMABLES: &str = "prompt.consumables";
    pub const PROMPT_REDUCTION: &str = "prompt.reduction";
    pub const PROMPT_IMPL_COST: &str = "prompt.impl_cost";
    pub const PROMPT_OPEX_DELTA: &str = "prompt.opex_delta";
    pub const HELP_OPEX_DELTA: &str = "help.opex_delta";
    pub const PROMPT_RATE: &str = "prompt.rate";
    pub const PROMPT_HORIZON: &str = "prompt.horizon";

    pub const RESULTS_HEADING: &str = "results.heading";
    pub const RESULT_MONTHLY_SAVINGS: &str = "results.monthly_savings";
    pub const RESULT_ROI12: &str = "results.roi12";
    pub const RESULT_PAYBACK: &str = "results.payback";
    pub const RESULT_NPV: &str = "results.npv";
    pub const RESULT_BREAK_EVEN: &str = "results.break_even";
    pub const RESULT_BREAK_EVEN_NONE: &str = "results.break_even_none";
    pub const UNIT_MONTHS_SHORT: &str = "unit.months_short";

    pub const SERIES_HEADING: &str = "series.heading";
    pub const SERIES_COL_MONTH: &str = "series.col_month";
    pub const SERIES_COL_CUMULATIVE: &str = "series.col_cumulative";

    pub const DEFAULTS_HEADING: &str = "defaults.heading";
    pub const DEFAULTS_SAVED: &str = "defaults.saved";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_SYMBOL: &str = "settings.prompt_symbol";
    pub const SETTINGS_PROMPT_DIGITS: &str = "settings.prompt_digits";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.trim().to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 -> 선택 언어 -> 영어 순으로 찾고, 모두 없으면 키 자체를 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        let built_in = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        built_in.unwrap_or(key)
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: 섹션/키 구조를 "섹션.키" 플랫 맵으로 펼친다.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(err) => {
            debug!(path = %path.display(), %err, "언어팩 없음");
            return None;
        }
    };
    let map = parse_toml_to_map(&content);
    if map.is_none() {
        warn!(path = %path.display(), "언어팩을 해석할 수 없어 내장 문자열을 사용합니다");
    }
    map
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== ROI 계산기 ===",
        MAIN_MENU_COMPUTE => "1) ROI 계산",
        MAIN_MENU_SERIES => "2) 누적 현금흐름 표",
        MAIN_MENU_DEFAULTS => "3) 기본 가정값 변경",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        INPUTS_HEADING => "\n-- ROI 입력 --",
        INPUTS_KEEP_DEFAULT_NOTE => "엔터만 누르면 [ ] 안의 기본값을 사용합니다.",
        PROMPT_DISPOSAL => "기존 폐기물/할증 비용 [/월]",
        PROMPT_CONSUMABLES => "소모품(절삭유/필터) 비용 [/월]",
        PROMPT_REDUCTION => "예상 절감률 [%]",
        PROMPT_IMPL_COST => "도입 비용 [1회]",
        PROMPT_OPEX_DELTA => "월 운영비 변화 [/월]",
        HELP_OPEX_DELTA => "양수=추가 비용, 음수=추가 절감.",
        PROMPT_RATE => "할인율 [%/년]",
        PROMPT_HORIZON => "분석 기간 [년]",
        RESULTS_HEADING => "\n-- 결과 --",
        RESULT_MONTHLY_SAVINGS => "월 절감액",
        RESULT_ROI12 => "12개월 ROI",
        RESULT_PAYBACK => "회수기간",
        RESULT_NPV => "NPV (분석 기간)",
        RESULT_BREAK_EVEN => "손익분기 도달",
        RESULT_BREAK_EVEN_NONE => "분석 기간 내 손익분기 미도달",
        UNIT_MONTHS_SHORT => "개월",
        SERIES_HEADING => "\n-- 누적 현금흐름 --",
        SERIES_COL_MONTH => "월",
        SERIES_COL_CUMULATIVE => "누적",
        DEFAULTS_HEADING => "\n-- 기본 가정값 --",
        DEFAULTS_SAVED => "기본 가정값을 저장했습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => "1) 언어  2) 통화 기호  3) 소수 자릿수",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (ko/en/auto): ",
        SETTINGS_PROMPT_SYMBOL => "통화 기호: ",
        SETTINGS_PROMPT_DIGITS => "소수 자릿수 (0~6): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== ROI Calculator ===",
        MAIN_MENU_COMPUTE => "1) Compute ROI",
        MAIN_MENU_SERIES => "2) Cumulative cashflow table",
        MAIN_MENU_DEFAULTS => "3) Edit default assumptions",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        INPUTS_HEADING => "\n-- ROI Inputs --",
        INPUTS_KEEP_DEFAULT_NOTE => "Press enter to keep the default shown in [ ].",
        PROMPT_DISPOSAL => "Baseline waste & surcharges [/mo]",
        PROMPT_CONSUMABLES => "Consumables (coolant/filters) [/mo]",
        PROMPT_REDUCTION => "Expected reduction [%]",
        PROMPT_IMPL_COST => "Implementation cost [one-time]",
        PROMPT_OPEX_DELTA => "Monthly OPEX change [/mo]",
        HELP_OPEX_DELTA => "Positive = extra cost, negative = extra savings.",
        PROMPT_RATE => "Discount rate [%/yr]",
        PROMPT_HORIZON => "Horizon [years]",
        RESULTS_HEADING => "\n-- Results --",
        RESULT_MONTHLY_SAVINGS => "Monthly Savings",
        RESULT_ROI12 => "12-mo ROI",
        RESULT_PAYBACK => "Payback",
        RESULT_NPV => "NPV (horizon)",
        RESULT_BREAK_EVEN => "Break-even reached",
        RESULT_BREAK_EVEN_NONE => "No break-even within horizon",
        UNIT_MONTHS_SHORT => "mo",
        SERIES_HEADING => "\n-- Cumulative Cashflow --",
        SERIES_COL_MONTH => "Month",
        SERIES_COL_CUMULATIVE => "Cumulative",
        DEFAULTS_HEADING => "\n-- Default Assumptions --",
        DEFAULTS_SAVED => "Default assumptions saved.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Language  2) Currency symbol  3) Fraction digits",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_PROMPT_LANGUAGE => "Language code (ko/en/auto): ",
        SETTINGS_PROMPT_SYMBOL => "Currency symbol: ",
        SETTINGS_PROMPT_DIGITS => "Fraction digits (0-6): ",
        SETTINGS_INVALID => "Invalid input; setting unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}
