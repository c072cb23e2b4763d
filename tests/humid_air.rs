//! 습공기 상태량 회귀 테스트 (표준 대기압).
use humidity_toolbox::air::humid_air::{
    density_dry_air, density_humid_air, humidity_ratio, specific_enthalpy_dry_air,
    specific_enthalpy_moisture, specific_enthalpy_saturated_air, wet_bulb_stull,
};
use humidity_toolbox::air::{humid_air_state, saturation_pressure, STD_ATMOSPHERE_HPA};

#[test]
fn saturated_enthalpy_at_25c() {
    let p_s = saturation_pressure(25.0);
    let moisture = specific_enthalpy_moisture(25.0, p_s, STD_ATMOSPHERE_HPA);
    let total = specific_enthalpy_saturated_air(25.0, STD_ATMOSPHERE_HPA);
    assert!((moisture - 51.1).abs() < 0.1, "moisture {moisture}");
    assert!((total - 76.3).abs() < 0.1, "total {total}");
    assert!((specific_enthalpy_dry_air(25.0) - 25.15).abs() < 1e-9);
}

#[test]
fn humidity_ratio_at_saturation() {
    let w = humidity_ratio(saturation_pressure(25.0), STD_ATMOSPHERE_HPA);
    assert!((w - 0.02007).abs() < 1e-4, "W = {w}");
}

#[test]
fn densities_at_25c() {
    let dry = density_dry_air(25.0, STD_ATMOSPHERE_HPA);
    let humid = density_humid_air(25.0, 30.0, STD_ATMOSPHERE_HPA);
    assert!((dry - 1.18).abs() < 0.01, "dry {dry}");
    assert!((humid - 1.17).abs() < 0.01, "humid {humid}");
    assert!(humid < dry);
}

#[test]
fn stull_wet_bulb_reference() {
    // Stull (2011): 20 °C, 50 % -> 13.7 °C
    assert!((wet_bulb_stull(20.0, 50.0) - 13.7).abs() < 0.05);
}

#[test]
fn state_bundle_is_consistent() {
    let s = humid_air_state(25.0, 100.0, STD_ATMOSPHERE_HPA);
    assert!((s.vapor_pressure_hpa - saturation_pressure(25.0)).abs() < 1e-9);
    assert!((s.specific_enthalpy_kj_per_kg - 76.3).abs() < 0.1);
    assert!(s.wet_bulb_c <= 25.5);
}
