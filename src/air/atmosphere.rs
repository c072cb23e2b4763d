//! 건공기 조성과 고도에 따른 대기압 근사.

use super::arden_buck::STD_ATMOSPHERE_HPA;
use super::humid_air::{density_humid_air, humidity_ratio};
use crate::units::c_to_k;

/// 중력가속도 [m/s2]
pub const GRAVITY: f64 = 9.80665;
/// 기체상수 [J/(mol·K)]
pub const GAS_CONSTANT: f64 = 8.3144598;
/// 건공기 몰질량 [g/mol]
pub const MOLAR_MASS_AIR: f64 = 28.97;
/// 국제표준대기 해수면 기온 [°C]. 고도 보정의 기본 온도로 쓴다.
pub const ISA_SEA_LEVEL_TEMP_C: f64 = 15.0;
/// 물 몰질량 [g/mol]
pub const MOLAR_MASS_WATER: f64 = 18.01528;

/// 건공기 구성 성분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constituent {
    Nitrogen,
    Oxygen,
    Argon,
    CarbonDioxide,
    Trace,
}

impl Constituent {
    pub const ALL: [Constituent; 5] = [
        Constituent::Nitrogen,
        Constituent::Oxygen,
        Constituent::Argon,
        Constituent::CarbonDioxide,
        Constituent::Trace,
    ];

    /// 건공기 중 부피 분율
    pub fn volume_fraction(self) -> f64 {
        match self {
            Constituent::Nitrogen => 0.780818,
            Constituent::Oxygen => 0.209435,
            Constituent::Argon => 0.009332,
            Constituent::CarbonDioxide => 0.000420,
            Constituent::Trace => 0.000030,
        }
    }

    /// 몰질량 [g/mol]
    pub fn molar_mass(self) -> f64 {
        match self {
            Constituent::Nitrogen => 28.0134,
            Constituent::Oxygen => 31.9988,
            Constituent::Argon => 39.9480,
            Constituent::CarbonDioxide => 44.0100,
            Constituent::Trace => 19.8254,
        }
    }

    /// 건공기 중 질량 분율
    pub fn mass_fraction(self) -> f64 {
        self.volume_fraction() * self.molar_mass() / MOLAR_MASS_AIR
    }

    /// 습공기에서 이 성분이 차지하는 분압 [hPa]
    pub fn partial_pressure(self, p_w: f64, p_a: f64) -> f64 {
        (p_a - p_w) * self.volume_fraction()
    }

    /// 습공기 중 부피 분율. 수증기가 차지한 만큼 줄어든다.
    pub fn moist_volume_fraction(self, p_w: f64, p_a: f64) -> f64 {
        (1.0 - p_w / p_a) * self.volume_fraction()
    }

    pub fn moist_mass_fraction(self, p_w: f64, p_a: f64) -> f64 {
        (1.0 - humidity_ratio(p_w, p_a)) * self.mass_fraction()
    }

    /// 습공기 1 m3 에 든 이 성분의 질량 [kg/m3]
    pub fn absolute_mass(self, t: f64, p_w: f64, p_a: f64) -> f64 {
        density_humid_air(t, p_w, p_a) * self.partial_pressure(p_w, p_a) / p_a
    }
}

/// 조성표로부터 건공기 평균 몰질량 [g/mol]을 계산한다.
pub fn molar_mass_dry_air() -> f64 {
    let total: f64 = Constituent::ALL.iter().map(|c| c.volume_fraction()).sum();
    Constituent::ALL
        .iter()
        .map(|c| c.volume_fraction() * c.molar_mass() / total)
        .sum()
}

/// 등온 대기 가정의 고도 보정계수 exp(-M g h / (R T)). `h_m` 은 해발고도 [m].
pub fn altitude_pressure_coefficient(h_m: f64, t_c: f64) -> f64 {
    (-(MOLAR_MASS_AIR / 1000.0) * GRAVITY * h_m / (GAS_CONSTANT * c_to_k(t_c))).exp()
}

/// 해발고도에서의 대기압 [hPa]
pub fn pressure_at_altitude(h_m: f64, t_c: f64) -> f64 {
    STD_ATMOSPHERE_HPA * altitude_pressure_coefficient(h_m, t_c)
}
