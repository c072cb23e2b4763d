//! 습도비, 비엔탈피, 밀도, 습구온도 등 습공기 파생량.
//!
//! 압력은 hPa, 온도는 °C, 비엔탈피는 kJ/kg(건공기) 기준이다.

use super::arden_buck::{pressure_from_rh, saturation_pressure, STD_ATMOSPHERE_HPA};
use crate::units::c_to_k;

/// 건공기 기체상수 [J/(kg·K)]
pub const R_AIR: f64 = 286.9;
/// 수증기 기체상수 [J/(kg·K)]
pub const R_VAPOR: f64 = 461.5;
/// 건공기 정압비열 [kJ/(kg·K)]
pub const CP_AIR: f64 = 1.006;
/// 수증기 정압비열 [kJ/(kg·K)]
pub const CP_VAPOR: f64 = 1.84;
/// 0 °C 물의 증발잠열 [kJ/kg]
pub const EVAP_HEAT_0C: f64 = 2501.0;

/// 단일 습공기 상태 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct HumidAirState {
    /// 건구온도 [°C]
    pub dry_bulb_c: f64,
    /// 상대습도 [%]
    pub relative_humidity_pct: f64,
    /// 수증기 분압 [hPa]
    pub vapor_pressure_hpa: f64,
    /// 습도비 [kg수증기/kg건공기]
    pub humidity_ratio: f64,
    /// 비엔탈피 [kJ/kg건공기]
    pub specific_enthalpy_kj_per_kg: f64,
    /// 습공기 밀도 [kg/m3]
    pub density_kg_per_m3: f64,
    /// 습구온도(Stull 근사) [°C]
    pub wet_bulb_c: f64,
}

/// 건구온도, 상대습도, 대기압으로 습공기 상태를 계산한다.
///
/// 수증기 분압에는 다지점 계산과 같은 대기압 보정비(`p_a / 1013.25`)를 곱한다.
pub fn humid_air_state(dry_bulb_c: f64, relative_humidity_pct: f64, p_a: f64) -> HumidAirState {
    let p_w = p_a / STD_ATMOSPHERE_HPA * pressure_from_rh(dry_bulb_c, relative_humidity_pct);
    HumidAirState {
        dry_bulb_c,
        relative_humidity_pct,
        vapor_pressure_hpa: p_w,
        humidity_ratio: humidity_ratio(p_w, p_a),
        specific_enthalpy_kj_per_kg: specific_enthalpy_air(dry_bulb_c, p_w, p_a),
        density_kg_per_m3: density_humid_air(dry_bulb_c, p_w, p_a),
        wet_bulb_c: wet_bulb_stull(dry_bulb_c, relative_humidity_pct),
    }
}

/// 습도비 W = (R_a/R_w) * P_w / (P_a - P_w)
pub fn humidity_ratio(p_w: f64, p_a: f64) -> f64 {
    (R_AIR / R_VAPOR) * p_w / (p_a - p_w)
}

/// 건공기 현열 비엔탈피
pub fn specific_enthalpy_dry_air(t: f64) -> f64 {
    CP_AIR * t
}

/// 수증기 1 kg 당 비엔탈피 (0 °C 물 기준)
pub fn specific_enthalpy_vapor(t: f64) -> f64 {
    EVAP_HEAT_0C + CP_VAPOR * t
}

/// 건공기 1 kg 에 섞인 수증기의 비엔탈피, W * h_g.
///
/// 25 °C 포화, 표준 대기압에서 약 51 kJ/kg 이다.
pub fn specific_enthalpy_moisture(t: f64, p_w: f64, p_a: f64) -> f64 {
    humidity_ratio(p_w, p_a) * specific_enthalpy_vapor(t)
}

/// 습공기 비엔탈피 h = c_pa*t + W*(2501 + c_pw*t)
pub fn specific_enthalpy_air(t: f64, p_w: f64, p_a: f64) -> f64 {
    specific_enthalpy_dry_air(t) + specific_enthalpy_moisture(t, p_w, p_a)
}

pub fn specific_enthalpy_saturated_air(t: f64, p_a: f64) -> f64 {
    specific_enthalpy_air(t, saturation_pressure(t), p_a)
}

/// 건공기 밀도 [kg/m3]
pub fn density_dry_air(t: f64, p_a: f64) -> f64 {
    (100.0 * p_a) / (R_AIR * c_to_k(t))
}

/// 수증기 밀도(절대습도) [kg/m3]
pub fn density_water_vapor(t: f64, p_w: f64) -> f64 {
    (100.0 * p_w) / (R_VAPOR * c_to_k(t))
}

pub fn density_from_humidity_ratio(w: f64, t: f64, p_a: f64) -> f64 {
    density_dry_air(t, p_a) * (1.0 + w) / (1.0 + R_VAPOR / R_AIR * w)
}

/// 습공기 밀도 [kg/m3]
pub fn density_humid_air(t: f64, p_w: f64, p_a: f64) -> f64 {
    density_from_humidity_ratio(humidity_ratio(p_w, p_a), t, p_a)
}

/// 체적 습도 [kg/m3], W * ρ_H
pub fn volumetric_humidity(t: f64, p_w: f64, p_a: f64) -> f64 {
    let w = humidity_ratio(p_w, p_a);
    w * density_from_humidity_ratio(w, t, p_a)
}

/// 비습 [kg수증기/kg습공기], W / (1 + W)
pub fn specific_humidity(p_w: f64, p_a: f64) -> f64 {
    let w = humidity_ratio(p_w, p_a);
    w / (1.0 + w)
}

/// 단위 체적당 엔탈피 [kJ/m3]
pub fn enthalpy_density_air(t: f64, p_w: f64, p_a: f64) -> f64 {
    density_humid_air(t, p_w, p_a) * specific_enthalpy_air(t, p_w, p_a)
}

/// Stull (2011) 경험식으로 습구온도를 근사한다. RH 5~99 %, -20~50 °C 범위용.
pub fn wet_bulb_stull(t: f64, rh: f64) -> f64 {
    t * (0.151977 * (rh + 8.313659).sqrt()).atan() + (t + rh).atan() - (rh - 1.676331).atan()
        + 0.00391838 * rh.powf(1.5) * (0.023101 * rh).atan()
        - 4.686035
}
