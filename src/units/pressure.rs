use serde::{Deserialize, Serialize};

/// 대기압/수증기압 단위. 내부 기준은 항상 hPa(절대압)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PressureUnit {
    #[default]
    HectoPascal,
    MilliBar,
    Pascal,
    KiloPascal,
    Atm,
    MmHg,
    InHg,
    Psi,
}

const PA_PER_HPA: f64 = 100.0;
const HPA_PER_ATM: f64 = 1013.25;
const HPA_PER_MMHG: f64 = 1.333_224;
const HPA_PER_INHG: f64 = 33.863_89;
const HPA_PER_PSI: f64 = 68.947_57;

impl PressureUnit {
    /// 출력용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::HectoPascal => "hPa",
            PressureUnit::MilliBar => "mbar",
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::Atm => "atm",
            PressureUnit::MmHg => "mmHg",
            PressureUnit::InHg => "inHg",
            PressureUnit::Psi => "psi",
        }
    }
}

/// 주어진 압력을 hPa 로 변환한다.
pub fn to_hpa(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::HectoPascal | PressureUnit::MilliBar => value,
        PressureUnit::Pascal => value / PA_PER_HPA,
        PressureUnit::KiloPascal => value * 10.0,
        PressureUnit::Atm => value * HPA_PER_ATM,
        PressureUnit::MmHg => value * HPA_PER_MMHG,
        PressureUnit::InHg => value * HPA_PER_INHG,
        PressureUnit::Psi => value * HPA_PER_PSI,
    }
}

/// hPa 값을 원하는 단위로 변환한다.
pub fn from_hpa(value_hpa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::HectoPascal | PressureUnit::MilliBar => value_hpa,
        PressureUnit::Pascal => value_hpa * PA_PER_HPA,
        PressureUnit::KiloPascal => value_hpa / 10.0,
        PressureUnit::Atm => value_hpa / HPA_PER_ATM,
        PressureUnit::MmHg => value_hpa / HPA_PER_MMHG,
        PressureUnit::InHg => value_hpa / HPA_PER_INHG,
        PressureUnit::Psi => value_hpa / HPA_PER_PSI,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    from_hpa(to_hpa(value, from), to)
}
