//! 할인율/기간 환산 헬퍼.

/// 연 할인율(%)을 월 할인율(소수)로 환산한다. 10%/년 -> 0.008333...
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

/// 분석 기간(년)을 월 단위 기간 수로 환산한다. 0년이나 음수여도 최소 1개월이다.
pub fn horizon_months(horizon_years: f64) -> usize {
    // NaN은 f64::max에서 무시되어 1개월로 처리된다.
    round_half_up(horizon_years * 12.0).max(1.0) as usize
}

/// m번째 달의 할인 계수 (1 + r)^m.
pub fn discount_factor(monthly_rate: f64, month: usize) -> f64 {
    (1.0 + monthly_rate).powf(month as f64)
}

/// .5는 +∞ 방향으로 반올림한다. -2.5 -> -2, 2.5 -> 3
///
/// `f64::round`는 0에서 멀어지는 방향이라 음수 누적값에서 결과가 달라진다.
/// `value + 0.5`를 먼저 더하면 그 덧셈에서 이미 반올림이 일어나므로 소수부로 비교한다.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
