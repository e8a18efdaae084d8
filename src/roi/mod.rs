//! ROI(투자수익률) 추정 계산 모듈 모음.

pub mod projection;
pub mod rates;

pub use projection::*;
