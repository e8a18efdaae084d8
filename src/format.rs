//! 결과 표시용 포맷터. 계산 모듈은 포맷을 하지 않고 여기서만 반올림한다.

use crate::config::DisplaySettings;

/// 값이 없거나 무한대일 때 표시하는 기호.
pub const NOT_AVAILABLE: &str = "—";

/// 통화 금액을 천 단위 구분 기호와 함께 표시한다. 예: -1234.4 -> "-$1,234"
pub fn format_currency(value: f64, display: &DisplaySettings) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let digits = display.fraction_digits as usize;
    let fixed = format!("{:.*}", digits, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };
    // 반올림 결과가 0이면 부호를 붙이지 않는다.
    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&display.currency_symbol);
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// 비율을 정수 퍼센트로 표시한다. 0.5 -> "50%"
pub fn format_percent(ratio: f64) -> String {
    if !ratio.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.0}%", ratio * 100.0)
}

/// 회수기간을 소수점 한 자리로 표시한다. 회수 불가이면 "—".
pub fn format_payback(months: f64, unit_suffix: &str) -> String {
    if months.is_finite() {
        format!("{months:.1} {unit_suffix}")
    } else {
        NOT_AVAILABLE.to_string()
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
