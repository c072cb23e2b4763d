use crate::units::{
    convert_specific_enthalpy, from_celsius, from_hpa, PressureUnit, SpecificEnthalpyUnit,
    TemperatureUnit,
};

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Temperature(TemperatureUnit),
    Pressure(PressureUnit),
    RelativeHumidity,
    HumidityRatio,
    SpecificEnthalpy(SpecificEnthalpyUnit),
}

impl QuantityKind {
    pub fn symbol(self) -> &'static str {
        match self {
            QuantityKind::Temperature(u) => u.symbol(),
            QuantityKind::Pressure(u) => u.symbol(),
            QuantityKind::RelativeHumidity => "%",
            QuantityKind::HumidityRatio => "g/kg",
            QuantityKind::SpecificEnthalpy(u) => u.symbol(),
        }
    }

    /// 기본 소수 자릿수
    pub fn decimals(self) -> usize {
        match self {
            QuantityKind::Temperature(_) => 1,
            QuantityKind::Pressure(PressureUnit::Pascal) => 0,
            QuantityKind::Pressure(PressureUnit::Atm) => 5,
            QuantityKind::Pressure(_) => 2,
            QuantityKind::RelativeHumidity => 1,
            QuantityKind::HumidityRatio => 2,
            QuantityKind::SpecificEnthalpy(_) => 1,
        }
    }
}

/// 값과 단위 태그의 묶음. 값은 이미 `kind` 의 단위로 환산되어 있다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityValue {
    pub kind: QuantityKind,
    pub value: f64,
}

impl QuantityValue {
    /// 섭씨 값을 원하는 단위로 환산해 담는다.
    pub fn temperature(value_c: f64, unit: TemperatureUnit) -> Self {
        Self {
            kind: QuantityKind::Temperature(unit),
            value: from_celsius(value_c, unit),
        }
    }

    /// hPa 값을 원하는 단위로 환산해 담는다.
    pub fn pressure(value_hpa: f64, unit: PressureUnit) -> Self {
        Self {
            kind: QuantityKind::Pressure(unit),
            value: from_hpa(value_hpa, unit),
        }
    }

    pub fn relative_humidity(value_pct: f64) -> Self {
        Self {
            kind: QuantityKind::RelativeHumidity,
            value: value_pct,
        }
    }

    /// kg/kg 값을 g/kg 로 담는다.
    pub fn humidity_ratio(value_kg_per_kg: f64) -> Self {
        Self {
            kind: QuantityKind::HumidityRatio,
            value: value_kg_per_kg * 1000.0,
        }
    }

    /// kJ/kg 값을 원하는 단위로 환산해 담는다.
    pub fn specific_enthalpy(value_kj_per_kg: f64, unit: SpecificEnthalpyUnit) -> Self {
        Self {
            kind: QuantityKind::SpecificEnthalpy(unit),
            value: convert_specific_enthalpy(value_kj_per_kg, SpecificEnthalpyUnit::KjPerKg, unit),
        }
    }
}

/// 단위 기호를 붙여 문자열로 만든다. NaN 은 `NaN` 으로 그대로 표시된다.
pub fn format_quantity(q: QuantityValue) -> String {
    format!("{:.*} {}", q.kind.decimals(), q.value, q.kind.symbol())
}
