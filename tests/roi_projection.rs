//! ROI 계산 회귀 테스트. 회수기간/ROI/NPV/누적 현금흐름의 경계 조건을 검증한다.
use roi_calculator::roi::{compute_roi, RoiInputs};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn inputs(disposal: f64, consumables: f64, reduction: f64, impl_cost: f64, opex_delta: f64) -> RoiInputs {
    RoiInputs {
        disposal,
        consumables,
        reduction,
        impl_cost,
        opex_delta,
        rate: 10.0,
        horizon: 3.0,
    }
}

#[test]
fn monthly_savings_from_reduction() {
    let res = compute_roi(&inputs(10_000.0, 5_000.0, 40.0, 60_000.0, 0.0));
    assert_close("monthly_savings", res.monthly_savings, 6_000.0, 1e-12);
    assert_close("payback", res.payback_months, 10.0, 1e-12);
    // (6000*12 - 60000) / 60000
    assert_close("roi12", res.roi12, 0.2, 1e-12);
}

#[test]
fn negative_opex_delta_is_not_subtracted_again() {
    let res = compute_roi(&inputs(12_000.0, 8_000.0, 35.0, 65_000.0, -1_500.0));
    assert_close("monthly_savings", res.monthly_savings, 7_000.0, 1e-12);
}

#[test]
fn positive_opex_delta_reduces_savings() {
    let res = compute_roi(&inputs(12_000.0, 8_000.0, 35.0, 65_000.0, 500.0));
    assert_close("monthly_savings", res.monthly_savings, 6_500.0, 1e-12);
}

#[test]
fn zero_savings_never_pays_back() {
    for opex_delta in [0.0, -250.0] {
        let res = compute_roi(&inputs(0.0, 0.0, 0.0, 50_000.0, opex_delta));
        assert!(!res.payback_months.is_finite(), "payback={}", res.payback_months);
        assert!(!res.payback_reached());
        assert_eq!(res.break_even_month(), None);
        assert_close("roi12", res.roi12, -1.0, 1e-12);
        assert_close("npv", res.npv, -50_000.0, 1e-12);
    }
}

#[test]
fn negative_savings_never_pays_back() {
    let res = compute_roi(&inputs(1_000.0, 0.0, 10.0, 5_000.0, 400.0));
    assert!(res.monthly_savings < 0.0);
    assert_eq!(res.payback_months, f64::INFINITY);
    assert!(res.npv < -5_000.0);
}

/// 도입 비용이 0이면 절감액이 커도 12개월 ROI는 0이다(무한대 대신 0으로 고정된 동작).
#[test]
fn zero_implementation_cost_pins_roi12_to_zero() {
    let res = compute_roi(&inputs(10_000.0, 5_000.0, 40.0, 0.0, 0.0));
    assert!(res.monthly_savings > 0.0);
    assert_eq!(res.roi12, 0.0);
    assert_eq!(res.payback_months, 0.0);
}

#[test]
fn series_length_follows_rounded_horizon() {
    let cases = [
        (3.0, 36),
        (1.0, 12),
        (0.5, 6),
        (1.0 / 24.0, 1),
        (0.04, 1),
        (0.0, 1),
        (-2.0, 1),
        (0.25, 3),
    ];
    for (horizon, expected) in cases {
        let res = compute_roi(&RoiInputs {
            horizon,
            ..RoiInputs::default()
        });
        assert_eq!(res.series.len(), expected, "horizon={horizon}");
    }
}

#[test]
fn series_is_chronological_and_cumulative() {
    let res = compute_roi(&RoiInputs {
        disposal: 10_000.0,
        consumables: 5_000.0,
        reduction: 40.0,
        impl_cost: 60_000.0,
        opex_delta: 0.0,
        rate: 10.0,
        horizon: 1.0,
    });
    assert_eq!(res.series.len(), 12);
    for (idx, point) in res.series.iter().enumerate() {
        let m = idx + 1;
        assert_eq!(point.label, format!("M{m}"));
        assert_close(
            &point.label,
            point.cumulative,
            -60_000.0 + 6_000.0 * m as f64,
            1e-12,
        );
    }
    assert!(res
        .series
        .windows(2)
        .all(|w| w[1].cumulative > w[0].cumulative));
    assert_eq!(res.break_even_month(), Some(10));
}

#[test]
fn series_rounds_half_toward_positive_infinity() {
    let res = compute_roi(&RoiInputs {
        disposal: 1.0,
        consumables: 0.0,
        reduction: 50.0,
        impl_cost: 1.0,
        opex_delta: 0.0,
        rate: 0.0,
        horizon: 0.25,
    });
    let values: Vec<f64> = res.series.iter().map(|p| p.cumulative).collect();
    // 누적: -0.5, 0.0, 0.5
    assert_eq!(values, vec![0.0, 0.0, 1.0]);
    assert_close("monthly_savings", res.monthly_savings, 0.5, 1e-12);
}

#[test]
fn npv_without_discount_is_plain_sum() {
    let res = compute_roi(&RoiInputs {
        disposal: 10_000.0,
        consumables: 5_000.0,
        reduction: 40.0,
        impl_cost: 60_000.0,
        opex_delta: 0.0,
        rate: 0.0,
        horizon: 1.0,
    });
    assert_close("npv", res.npv, 12_000.0, 1e-12);
}

#[test]
fn npv_matches_monthly_annuity() {
    // r = 1%/월, 12개월, 월 1000 -> 1000 * (1 - 1.01^-12) / 0.01
    let res = compute_roi(&RoiInputs {
        disposal: 1_000.0,
        consumables: 0.0,
        reduction: 100.0,
        impl_cost: 0.0,
        opex_delta: 0.0,
        rate: 12.0,
        horizon: 1.0,
    });
    let expected = 1_000.0 * (1.0 - 1.01_f64.powi(-12)) / 0.01;
    assert_close("npv", res.npv, expected, 1e-9);
    assert_close("npv", res.npv, 11_255.077_52, 1e-6);
}

#[test]
fn npv_strictly_decreases_as_rate_rises() {
    let base = RoiInputs::default();
    let npvs: Vec<f64> = [0.0, 2.5, 5.0, 10.0, 20.0, 40.0]
        .iter()
        .map(|&rate| compute_roi(&RoiInputs { rate, ..base }).npv)
        .collect();
    assert!(
        npvs.windows(2).all(|w| w[1] < w[0]),
        "npv not strictly decreasing: {npvs:?}"
    );
}

#[test]
fn identical_inputs_give_identical_results() {
    let input = RoiInputs::default();
    let before = input;
    let first = compute_roi(&input);
    let second = compute_roi(&input);
    assert_eq!(first, second);
    assert_eq!(input, before);
}

#[test]
fn concurrent_callers_do_not_interfere() {
    let cases: Vec<RoiInputs> = (1..=8)
        .map(|i| RoiInputs {
            reduction: 5.0 * i as f64,
            ..RoiInputs::default()
        })
        .collect();
    let expected: Vec<_> = cases.iter().map(compute_roi).collect();
    let actual: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = cases
            .iter()
            .map(|input| s.spawn(move || compute_roi(input)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker"))
            .collect()
    });
    assert_eq!(actual, expected);
}

#[test]
fn default_assumptions_match_demo_form() {
    let res = compute_roi(&RoiInputs::default());
    assert_close("monthly_savings", res.monthly_savings, 7_000.0, 1e-12);
    assert_close("payback", res.payback_months, 65_000.0 / 7_000.0, 1e-12);
    assert_eq!(res.series.len(), 36);
    assert!(res.npv > 0.0);
}

#[test]
fn large_odd_cumulative_is_not_shifted_by_rounding() {
    let res = compute_roi(&RoiInputs {
        disposal: 4_503_599_627_370_497.0,
        consumables: 0.0,
        reduction: 100.0,
        impl_cost: 0.0,
        opex_delta: 0.0,
        rate: 0.0,
        horizon: 0.0,
    });
    assert_eq!(res.series.len(), 1);
    assert_eq!(res.series[0].cumulative, 4_503_599_627_370_497.0);
}

#[test]
fn implausible_negative_inputs_stay_consistent() {
    let cases = [
        // (disposal, consumables, reduction, 기대 월 절감액)
        (1_000.0, 3_000.0, -20.0, -800.0),
        (-1_000.0, 0.0, 50.0, -500.0),
        (-1_000.0, -3_000.0, 25.0, -1_000.0),
    ];
    for (disposal, consumables, reduction, expected) in cases {
        let res = compute_roi(&RoiInputs {
            disposal,
            consumables,
            reduction,
            impl_cost: 10_000.0,
            opex_delta: 0.0,
            rate: 10.0,
            horizon: 1.0,
        });
        let label = format!("disposal={disposal} reduction={reduction}");
        assert_close(&label, res.monthly_savings, expected, 1e-12);
        assert_eq!(res.payback_months, f64::INFINITY, "{label}");
        assert!(res.npv.is_finite() && res.npv < -10_000.0, "{label}");
        assert_eq!(res.series.len(), 12, "{label}");
        for (idx, point) in res.series.iter().enumerate() {
            let m = (idx + 1) as f64;
            assert_close(&label, point.cumulative, -10_000.0 + expected * m, 1e-12);
        }
    }
}
