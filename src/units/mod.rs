//! 습공기 계산에 쓰이는 단위 정의 및 변환 모듈 모음.

pub mod pressure;
pub mod specific_enthalpy;
pub mod temperature;

pub use pressure::{convert_pressure, from_hpa, to_hpa, PressureUnit};
pub use specific_enthalpy::{convert_specific_enthalpy, SpecificEnthalpyUnit};
pub use temperature::{
    c_to_f, c_to_k, convert_temperature, f_to_c, from_celsius, k_to_c, to_celsius,
    TemperatureUnit,
};
