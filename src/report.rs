//! 계산 결과를 CLI 출력용 텍스트로 만든다.

use crate::config::DisplaySettings;
use crate::format::{format_currency, format_payback, format_percent};
use crate::i18n::{keys, Translator};
use crate::roi::{RoiInputs, RoiResult};

/// KPI 요약(월 절감액, 12개월 ROI, 회수기간, NPV)을 만든다.
pub fn render_summary(result: &RoiResult, display: &DisplaySettings, tr: &Translator) -> String {
    let payback = format_payback(result.payback_months, tr.t(keys::UNIT_MONTHS_SHORT));
    let break_even = match result.break_even_month() {
        Some(month) => format!("{}: M{month}", tr.t(keys::RESULT_BREAK_EVEN)),
        None => tr.t(keys::RESULT_BREAK_EVEN_NONE).to_string(),
    };
    [
        tr.t(keys::RESULTS_HEADING).to_string(),
        kpi_line(
            tr.t(keys::RESULT_MONTHLY_SAVINGS),
            &format_currency(result.monthly_savings, display),
        ),
        kpi_line(tr.t(keys::RESULT_ROI12), &format_percent(result.roi12)),
        kpi_line(tr.t(keys::RESULT_PAYBACK), &payback),
        kpi_line(tr.t(keys::RESULT_NPV), &format_currency(result.npv, display)),
        break_even,
    ]
    .join("\n")
}

/// 월별 누적 현금흐름 표를 만든다.
pub fn render_series(result: &RoiResult, display: &DisplaySettings, tr: &Translator) -> String {
    let mut lines = vec![
        tr.t(keys::SERIES_HEADING).to_string(),
        format!(
            "{:<8} {:>16}",
            tr.t(keys::SERIES_COL_MONTH),
            tr.t(keys::SERIES_COL_CUMULATIVE)
        ),
    ];
    lines.extend(
        result
            .series
            .iter()
            .map(|p| format!("{:<8} {:>16}", p.label, format_currency(p.cumulative, display))),
    );
    lines.join("\n")
}

/// 입력 가정값 목록을 만든다.
pub fn render_inputs(inputs: &RoiInputs, display: &DisplaySettings, tr: &Translator) -> String {
    [
        kpi_line(tr.t(keys::PROMPT_DISPOSAL), &format_currency(inputs.disposal, display)),
        kpi_line(
            tr.t(keys::PROMPT_CONSUMABLES),
            &format_currency(inputs.consumables, display),
        ),
        kpi_line(tr.t(keys::PROMPT_REDUCTION), &inputs.reduction.to_string()),
        kpi_line(tr.t(keys::PROMPT_IMPL_COST), &format_currency(inputs.impl_cost, display)),
        kpi_line(
            tr.t(keys::PROMPT_OPEX_DELTA),
            &format_currency(inputs.opex_delta, display),
        ),
        kpi_line(tr.t(keys::PROMPT_RATE), &inputs.rate.to_string()),
        kpi_line(tr.t(keys::PROMPT_HORIZON), &inputs.horizon.to_string()),
    ]
    .join("\n")
}

fn kpi_line(label: &str, value: &str) -> String {
    format!("{label}: {value}")
}
