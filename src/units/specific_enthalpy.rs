use serde::{Deserialize, Serialize};

/// 비엔탈피 단위. 내부 기준은 kJ/kg(건공기)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpecificEnthalpyUnit {
    #[default]
    KjPerKg,
    KcalPerKg,
    BtuPerPound,
}

impl SpecificEnthalpyUnit {
    /// kJ/kg 에 대한 배율.
    fn kj_per_kg(self) -> f64 {
        match self {
            SpecificEnthalpyUnit::KjPerKg => 1.0,
            SpecificEnthalpyUnit::KcalPerKg => 4.184,
            SpecificEnthalpyUnit::BtuPerPound => 2.326,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            SpecificEnthalpyUnit::KjPerKg => "kJ/kg",
            SpecificEnthalpyUnit::KcalPerKg => "kcal/kg",
            SpecificEnthalpyUnit::BtuPerPound => "Btu/lb",
        }
    }
}

/// 비엔탈피를 변환한다. 기준점(0 °C) 이동 없이 배율만 바꾼다.
pub fn convert_specific_enthalpy(
    value: f64,
    from: SpecificEnthalpyUnit,
    to: SpecificEnthalpyUnit,
) -> f64 {
    value * from.kj_per_kg() / to.kj_per_kg()
}
