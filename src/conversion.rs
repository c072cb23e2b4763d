use thiserror::Error;

use crate::error::PsychroError;
use crate::units::*;

/// 단위 문자열 해석 시 발생 가능한 오류.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 숫자 부분을 해석할 수 없음
    #[error("숫자로 해석할 수 없는 값: {0}")]
    InvalidNumber(String),
}

/// 사용자가 넘긴 입력 값. 숫자이거나 단위 접미사가 붙을 수 있는 문자열이다.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Number(f64),
    Text(String),
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Reading::Number(value)
    }
}

impl From<&str> for Reading {
    fn from(value: &str) -> Self {
        Reading::Text(value.to_string())
    }
}

impl From<String> for Reading {
    fn from(value: String) -> Self {
        Reading::Text(value)
    }
}

/// 온도형 입력(온도, 이슬점)을 섭씨로 해석한다.
///
/// 문자열 끝의 `C`/`F`/`K` 는 기본 단위보다 우선한다. 숫자로 읽을 수 없으면 NaN 을 돌려준다.
pub fn parse_temperature(reading: &Reading, default_unit: TemperatureUnit) -> f64 {
    try_parse_temperature(reading, default_unit).unwrap_or(f64::NAN)
}

/// [`parse_temperature`] 의 엄격 버전. 숫자가 아니면 `PsychroError::Parse`.
pub fn try_parse_temperature(
    reading: &Reading,
    default_unit: TemperatureUnit,
) -> Result<f64, PsychroError> {
    match reading {
        Reading::Number(v) => Ok(to_celsius(*v, default_unit)),
        Reading::Text(s) => {
            let trimmed = s.trim();
            let (number, unit) = match trimmed.chars().last().and_then(TemperatureUnit::from_suffix)
            {
                Some(unit) => (&trimmed[..trimmed.len() - 1], unit),
                None => (trimmed, default_unit),
            };
            let value = parse_number(number).ok_or_else(|| PsychroError::Parse {
                input: s.clone(),
            })?;
            Ok(to_celsius(value, unit))
        }
    }
}

/// 상대습도 입력 [%]. 끝의 `%` 는 무시한다. 숫자로 읽을 수 없으면 NaN.
pub fn parse_humidity(reading: &Reading) -> f64 {
    try_parse_humidity(reading).unwrap_or(f64::NAN)
}

pub fn try_parse_humidity(reading: &Reading) -> Result<f64, PsychroError> {
    match reading {
        Reading::Number(v) => Ok(*v),
        Reading::Text(s) => {
            let trimmed = s.trim();
            let number = trimmed.strip_suffix('%').unwrap_or(trimmed);
            parse_number(number).ok_or_else(|| PsychroError::Parse { input: s.clone() })
        }
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

/// 단위가 붙을 수 있는 압력 문자열(`900`, `900hPa`, `29.92 inHg`)을 hPa 로 변환한다.
/// 단위가 없으면 `default_unit` 으로 본다.
pub fn parse_pressure(s: &str, default_unit: PressureUnit) -> Result<f64, ConversionError> {
    let trimmed = s.trim();
    let split = trimmed
        .char_indices()
        .find(|(i, c)| c.is_ascii_alphabetic() && !is_exponent(trimmed, *i))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    let (number, unit_str) = trimmed.split_at(split);
    let value = parse_number(number)
        .ok_or_else(|| ConversionError::InvalidNumber(trimmed.to_string()))?;
    let unit = if unit_str.trim().is_empty() {
        default_unit
    } else {
        parse_pressure_unit(unit_str.trim())?
    };
    Ok(to_hpa(value, unit))
}

/// `1e3` 처럼 숫자 사이에 낀 지수 표기 `e` 인지 확인한다.
fn is_exponent(s: &str, i: usize) -> bool {
    let bytes = s.as_bytes();
    matches!(bytes[i], b'e' | b'E')
        && i > 0
        && bytes[i - 1].is_ascii_digit()
        && bytes
            .get(i + 1)
            .is_some_and(|b| b.is_ascii_digit() || *b == b'-' || *b == b'+')
}

pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "hpa" | "hectopascal" => Ok(PressureUnit::HectoPascal),
        "mbar" | "millibar" | "mb" => Ok(PressureUnit::MilliBar),
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "atm" => Ok(PressureUnit::Atm),
        "mmhg" | "torr" => Ok(PressureUnit::MmHg),
        "inhg" => Ok(PressureUnit::InHg),
        "psi" | "psia" => Ok(PressureUnit::Psi),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_specific_enthalpy_unit(s: &str) -> Result<SpecificEnthalpyUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kj/kg" => Ok(SpecificEnthalpyUnit::KjPerKg),
        "kcal/kg" => Ok(SpecificEnthalpyUnit::KcalPerKg),
        "btu/lb" | "btu/lbm" => Ok(SpecificEnthalpyUnit::BtuPerPound),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

/// 명령행 지점 토큰의 종류.
#[derive(Debug, Clone, PartialEq)]
pub enum PointToken {
    /// `t=<값>`
    Temperature(String),
    /// `dp=<값>`
    Dewpoint(String),
    /// `rh=<값>` 또는 `<값>%`
    Humidity(String),
    /// 접두사 없는 값. 직전 지점 상태에 따라 온도 또는 이슬점이 된다.
    Auto(String),
}

/// 명령행 토큰 하나를 분류한다.
pub fn classify_token(token: &str) -> PointToken {
    let trimmed = token.trim();
    if let Some((key, value)) = trimmed.split_once('=') {
        let value = value.to_string();
        match key.trim().to_lowercase().as_str() {
            "t" | "temp" => return PointToken::Temperature(value),
            "dp" | "dewpoint" => return PointToken::Dewpoint(value),
            "rh" | "humidity" => return PointToken::Humidity(value),
            _ => {}
        }
    }
    if trimmed.ends_with('%') {
        return PointToken::Humidity(trimmed.to_string());
    }
    PointToken::Auto(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_overrides_default_unit() {
        let c = TemperatureUnit::Celsius;
        let f = TemperatureUnit::Fahrenheit;
        assert!((parse_temperature(&"50F".into(), c) - 10.0).abs() < 1e-9);
        assert!((parse_temperature(&"50f".into(), c) - 10.0).abs() < 1e-9);
        assert!((parse_temperature(&"283.15K".into(), f) - 10.0).abs() < 1e-9);
        assert!((parse_temperature(&"10c".into(), f) - 10.0).abs() < 1e-9);
        assert!((parse_temperature(&"50".into(), f) - 10.0).abs() < 1e-9);
        assert!((parse_temperature(&Reading::Number(283.15), TemperatureUnit::Kelvin) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn malformed_text_is_nan() {
        assert!(parse_temperature(&"abc".into(), TemperatureUnit::Celsius).is_nan());
        assert!(parse_temperature(&"".into(), TemperatureUnit::Celsius).is_nan());
        assert!(parse_humidity(&"wet".into()).is_nan());
        let err = try_parse_temperature(&"x1".into(), TemperatureUnit::Celsius).unwrap_err();
        assert_eq!(err, PsychroError::Parse { input: "x1".into() });
    }

    #[test]
    fn humidity_accepts_percent_sign() {
        assert_eq!(parse_humidity(&"55.3%".into()), 55.3);
        assert_eq!(parse_humidity(&Reading::Number(40.0)), 40.0);
    }

    #[test]
    fn pressure_with_units() {
        let d = PressureUnit::HectoPascal;
        assert_eq!(parse_pressure("900", d).unwrap(), 900.0);
        assert_eq!(parse_pressure("900hPa", d).unwrap(), 900.0);
        assert!((parse_pressure("101.325 kPa", d).unwrap() - 1013.25).abs() < 1e-9);
        assert!((parse_pressure("29.92inHg", d).unwrap() - 1013.2).abs() < 0.1);
        assert_eq!(parse_pressure("1e3", d).unwrap(), 1000.0);
        assert_eq!(
            parse_pressure("900 furlongs", d).unwrap_err(),
            ConversionError::UnknownUnit("furlongs".into())
        );
        assert!(matches!(
            parse_pressure("hPa", d),
            Err(ConversionError::InvalidNumber(_))
        ));
    }

    #[test]
    fn unit_names() {
        assert_eq!(parse_temperature_unit("F").unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!(parse_temperature_unit("kelvin").unwrap(), TemperatureUnit::Kelvin);
        assert!(parse_temperature_unit("R").is_err());
        assert_eq!(parse_pressure_unit("Torr").unwrap(), PressureUnit::MmHg);
        assert_eq!(
            parse_specific_enthalpy_unit("Btu/lb").unwrap(),
            SpecificEnthalpyUnit::BtuPerPound
        );
    }

    #[test]
    fn tokens() {
        assert_eq!(classify_token("t=22.8"), PointToken::Temperature("22.8".into()));
        assert_eq!(classify_token("dp=31F"), PointToken::Dewpoint("31F".into()));
        assert_eq!(classify_token("RH=55.3"), PointToken::Humidity("55.3".into()));
        assert_eq!(classify_token("55.3%"), PointToken::Humidity("55.3%".into()));
        assert_eq!(classify_token("-0.6"), PointToken::Auto("-0.6".into()));
    }

    #[test]
    fn trailing_words_make_value_non_numeric() {
        let reading = Reading::from("7.8 deg");
        assert!(parse_temperature(&reading, TemperatureUnit::Celsius).is_nan());
        assert_eq!(
            try_parse_temperature(&reading, TemperatureUnit::Celsius),
            Err(PsychroError::Parse {
                input: "7.8 deg".into()
            })
        );
    }
}
