//! Arden Buck 식 기반 포화 수증기압/이슬점/상대습도 계산.
//!
//! -80 °C ~ 50 °C 범위에서 유효하다. 온도는 섭씨, 압력은 hPa 이다.
//! 정의역 밖의 입력(예: `dp <= -c`, `p <= 0`)은 NaN/Infinity 로 그대로 전파되며
//! 별도로 검사하지 않는다.

/// 표준 대기압 [hPa]
pub const STD_ATMOSPHERE_HPA: f64 = 1013.25;

/// 온도 부호에 따라 달라지는 Arden Buck 계수.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArdenBuckParams {
    /// [hPa]
    pub a: f64,
    pub b: f64,
    /// [°C]
    pub c: f64,
    /// [°C]
    pub d: f64,
}

/// 물 위 (t > 0 °C)
const OVER_WATER: ArdenBuckParams = ArdenBuckParams {
    a: 6.1121,
    b: 18.678,
    c: 257.14,
    d: 234.5,
};

/// 얼음 위 (t <= 0 °C)
const OVER_ICE: ArdenBuckParams = ArdenBuckParams {
    a: 6.1115,
    b: 23.036,
    c: 279.82,
    d: 333.7,
};

impl ArdenBuckParams {
    pub fn for_temperature(t: f64) -> Self {
        if t > 0.0 {
            OVER_WATER
        } else {
            OVER_ICE
        }
    }
}

pub fn arden_buck_constant(t: f64) -> f64 {
    let p = ArdenBuckParams::for_temperature(t);
    ((p.b - t / p.d) * (t / (p.c + t))).exp()
}

/// 포화 수증기압 [hPa]
pub fn saturation_pressure(t: f64) -> f64 {
    ArdenBuckParams::for_temperature(t).a * arden_buck_constant(t)
}

pub fn gamma_from_dewpoint(t: f64, dp: f64) -> f64 {
    let p = ArdenBuckParams::for_temperature(t);
    (dp * p.b) / (p.c + dp)
}

/// 이슬점에서의 수증기 분압 [hPa]. 계수는 `t` 기준으로 고른다.
pub fn pressure_from_dewpoint(t: f64, dp: f64) -> f64 {
    ArdenBuckParams::for_temperature(t).a * gamma_from_dewpoint(t, dp).exp()
}

/// 수증기 분압 [hPa]에서 이슬점(서리점) [°C]을 구한다.
pub fn dewpoint_from_pressure(t: f64, p: f64) -> f64 {
    let params = ArdenBuckParams::for_temperature(t);
    let ln = (p / params.a).ln();
    params.c * ln / (params.b - ln)
}

/// 상대습도 [%]
pub fn rh_from_dewpoint(t: f64, dp: f64) -> f64 {
    100.0 * gamma_from_dewpoint(t, dp).exp() / arden_buck_constant(t)
}

pub fn gamma_from_rh(t: f64, rh: f64) -> f64 {
    (arden_buck_constant(t) * rh / 100.0).ln()
}

pub fn pressure_from_rh(t: f64, rh: f64) -> f64 {
    ArdenBuckParams::for_temperature(t).a * gamma_from_rh(t, rh).exp()
}

pub fn dewpoint_from_rh(t: f64, rh: f64) -> f64 {
    dewpoint_from_pressure(t, pressure_from_rh(t, rh))
}

/// 수증기 분압 [hPa]으로부터 상대습도 [%]
pub fn rh_from_pressure(t: f64, p_w: f64) -> f64 {
    100.0 * p_w / saturation_pressure(t)
}
