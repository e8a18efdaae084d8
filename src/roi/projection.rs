use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rates::{discount_factor, horizon_months, monthly_rate, round_half_up};

/// ROI 계산 입력. 금액 단위는 통화 단위(원, 달러 등)를 그대로 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    /// 기존 폐기/운반/할증 비용 [통화/월]
    pub disposal: f64,
    /// 기존 소모품 비용(절삭유, 필터, 약품) [통화/월]
    pub consumables: f64,
    /// (disposal + consumables)에 적용할 예상 절감률 [%]
    pub reduction: f64,
    /// 1회성 도입 비용 [통화]
    pub impl_cost: f64,
    /// 도입 후 월 운영비 변화 [통화/월]. 양수=추가 비용, 음수=추가 절감
    pub opex_delta: f64,
    /// NPV 할인율 [%/년]
    pub rate: f64,
    /// 분석 기간 [년]
    pub horizon: f64,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            disposal: 12_000.0,
            consumables: 8_000.0,
            reduction: 35.0,
            impl_cost: 65_000.0,
            opex_delta: -1_500.0,
            rate: 10.0,
            horizon: 3.0,
        }
    }
}

/// 누적 현금흐름 한 점. 라벨은 순번 기반("M1", "M2", ...)이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowPoint {
    pub label: String,
    /// 누적 순현금흐름, 정수 단위로 반올림됨
    pub cumulative: f64,
}

/// ROI 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    /// 월 절감액 [통화/월]. 0 이하일 수 있다.
    pub monthly_savings: f64,
    /// 회수기간 [월]. 회수 불가이면 `f64::INFINITY`
    pub payback_months: f64,
    /// 12개월 ROI (비율, 0.5 = 50%)
    pub roi12: f64,
    /// 분석 기간 NPV [통화]
    pub npv: f64,
    /// 월별 누적 현금흐름 (시간순)
    pub series: Vec<CashflowPoint>,
}

impl RoiResult {
    /// 회수기간이 유한한지 여부.
    pub fn payback_reached(&self) -> bool {
        self.payback_months.is_finite()
    }

    /// 누적 현금흐름이 처음으로 0 이상이 되는 달(1부터). 기간 내에 없으면 None.
    pub fn break_even_month(&self) -> Option<usize> {
        self.series
            .iter()
            .position(|p| p.cumulative >= 0.0)
            .map(|idx| idx + 1)
    }
}

/// 입력 가정으로 월 절감액, 회수기간, 12개월 ROI, NPV, 누적 현금흐름을 계산한다.
///
/// 모든 유한 입력에 대해 값을 돌려준다. 절감액이 0 이하이면 회수기간은 무한대,
/// 도입 비용이 0 이하이면 ROI는 0으로 정의한다(무한대 ROI를 0으로 눌러 두는 기존 동작).
pub fn compute_roi(inputs: &RoiInputs) -> RoiResult {
    let base_monthly = (inputs.disposal + inputs.consumables) * (inputs.reduction / 100.0);
    // 음수 opex_delta는 이미 추가 절감이므로 다시 빼지 않는다.
    let monthly_savings = base_monthly - inputs.opex_delta.max(0.0);

    let payback_months = if monthly_savings > 0.0 {
        inputs.impl_cost / monthly_savings
    } else {
        f64::INFINITY
    };
    let roi12 = if inputs.impl_cost > 0.0 {
        (monthly_savings * 12.0 - inputs.impl_cost) / inputs.impl_cost
    } else {
        0.0
    };

    let r = monthly_rate(inputs.rate);
    let months = horizon_months(inputs.horizon);
    debug!(monthly_savings, months, monthly_rate = r, "ROI 계산");

    let series: Vec<CashflowPoint> = (1..=months)
        .scan(-inputs.impl_cost, |cum, m| {
            *cum += monthly_savings;
            Some(CashflowPoint {
                label: format!("M{m}"),
                cumulative: round_half_up(*cum),
            })
        })
        .collect();

    let npv = (1..=months).fold(-inputs.impl_cost, |acc, m| {
        acc + monthly_savings / discount_factor(r, m)
    });

    RoiResult {
        monthly_savings,
        payback_months,
        roi12,
        npv,
        series,
    }
}
