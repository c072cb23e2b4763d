use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다. 내부 계산은 항상 섭씨로 한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// 출력용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    /// 값 뒤에 붙는 접미 문자(`C`/`F`/`K`)로 단위를 찾는다. 대소문자는 구분하지 않는다.
    pub fn from_suffix(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(TemperatureUnit::Celsius),
            'F' => Some(TemperatureUnit::Fahrenheit),
            'K' => Some(TemperatureUnit::Kelvin),
            _ => None,
        }
    }
}

pub fn c_to_f(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn f_to_c(f: f64) -> f64 {
    5.0 / 9.0 * (f - 32.0)
}

pub fn c_to_k(c: f64) -> f64 {
    c + 273.15
}

pub fn k_to_c(k: f64) -> f64 {
    k - 273.15
}

/// 주어진 값을 섭씨로 변환한다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => f_to_c(value),
        TemperatureUnit::Kelvin => k_to_c(value),
    }
}

/// 섭씨 값을 원하는 단위로 변환한다.
pub fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Fahrenheit => c_to_f(value_c),
        TemperatureUnit::Kelvin => c_to_k(value_c),
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    from_celsius(to_celsius(value, from), to)
}
