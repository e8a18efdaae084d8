use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::report;
use crate::roi::{self, RoiInputs};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Compute,
    Series,
    Defaults,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_COMPUTE));
    println!("{}", tr.t(keys::MAIN_MENU_SERIES));
    println!("{}", tr.t(keys::MAIN_MENU_DEFAULTS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match parse_menu(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn parse_menu(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::Compute),
        "2" => Some(MenuChoice::Series),
        "3" => Some(MenuChoice::Defaults),
        "4" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// ROI 계산 메뉴를 처리한다. 이번에 사용한 입력을 돌려준다.
pub fn handle_compute(
    tr: &Translator,
    cfg: &Config,
    previous: &RoiInputs,
) -> Result<RoiInputs, AppError> {
    let inputs = prompt_inputs(tr, previous)?;
    let result = roi::compute_roi(&inputs);
    println!("{}", report::render_summary(&result, &cfg.display, tr));
    Ok(inputs)
}

/// 마지막 입력으로 누적 현금흐름 표를 출력한다.
pub fn handle_series(tr: &Translator, cfg: &Config, inputs: &RoiInputs) {
    let result = roi::compute_roi(inputs);
    println!("{}", report::render_series(&result, &cfg.display, tr));
}

/// 설정 파일에 저장될 기본 가정값을 변경한다.
pub fn handle_defaults(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DEFAULTS_HEADING));
    println!("{}", report::render_inputs(&cfg.defaults, &cfg.display, tr));
    cfg.defaults = prompt_inputs(tr, &cfg.defaults)?;
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어가 바뀌었으면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} lang={} symbol={} digits={}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.language.as_deref().unwrap_or("auto"),
        cfg.display.currency_symbol,
        cfg.display.fraction_digits
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => Ok(false),
        "1" => {
            let code = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            cfg.language = match code.trim() {
                "" | "auto" => None,
                other => Some(other.to_string()),
            };
            Ok(true)
        }
        "2" => {
            let symbol = read_line(tr.t(keys::SETTINGS_PROMPT_SYMBOL))?;
            cfg.display.currency_symbol = symbol.trim().to_string();
            Ok(false)
        }
        "3" => {
            let digits = read_line(tr.t(keys::SETTINGS_PROMPT_DIGITS))?;
            match digits.trim().parse::<u8>() {
                Ok(d) if d <= 6 => cfg.display.fraction_digits = d,
                _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
            }
            Ok(false)
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            Ok(false)
        }
    }
}

fn prompt_inputs(tr: &Translator, defaults: &RoiInputs) -> Result<RoiInputs, AppError> {
    println!("{}", tr.t(keys::INPUTS_HEADING));
    println!("{}", tr.t(keys::INPUTS_KEEP_DEFAULT_NOTE));
    let disposal = read_f64_or(tr, keys::PROMPT_DISPOSAL, defaults.disposal)?;
    let consumables = read_f64_or(tr, keys::PROMPT_CONSUMABLES, defaults.consumables)?;
    let reduction = read_f64_or(tr, keys::PROMPT_REDUCTION, defaults.reduction)?;
    let impl_cost = read_f64_or(tr, keys::PROMPT_IMPL_COST, defaults.impl_cost)?;
    println!("{}", tr.t(keys::HELP_OPEX_DELTA));
    let opex_delta = read_f64_or(tr, keys::PROMPT_OPEX_DELTA, defaults.opex_delta)?;
    let rate = read_f64_or(tr, keys::PROMPT_RATE, defaults.rate)?;
    let horizon = read_f64_or(tr, keys::PROMPT_HORIZON, defaults.horizon)?;
    Ok(RoiInputs {
        disposal,
        consumables,
        reduction,
        impl_cost,
        opex_delta,
        rate,
        horizon,
    })
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64_or(tr: &Translator, key: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{} [{default}]: ", tr.t(key)))?;
        match parse_number_or(&s, default) {
            Some(v) => return Ok(v),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력은 기본값, 그 외에는 천 단위 쉼표를 허용하는 유한 숫자만 받는다.
fn parse_number_or(input: &str, default: f64) -> Option<f64> {
    let s = input.trim();
    if s.is_empty() {
        return Some(default);
    }
    s.replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
