use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::air::STD_ATMOSPHERE_HPA;
use crate::units::*;

/// 기본 설정 파일 이름. 작업 디렉터리 기준이다.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 입력/출력에 쓰는 기본 단위 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    /// 단위 접미사 없는 온도 입력과 온도 출력 보조 단위
    pub temperature: TemperatureUnit,
    /// 단위 없는 대기압 입력의 단위
    pub pressure: PressureUnit,
    pub specific_enthalpy: SpecificEnthalpyUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            pressure: PressureUnit::HectoPascal,
            specific_enthalpy: SpecificEnthalpyUnit::KjPerKg,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_units: DefaultUnits,
    /// 대기압 [hPa]
    pub atmospheric_pressure_hpa: f64,
    /// 해석 불가 입력이나 유한하지 않은 결과를 오류로 처리한다.
    pub strict: bool,
    /// 습도비/비엔탈피/습구온도도 출력한다.
    pub extended_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_units: DefaultUnits::default(),
            atmospheric_pressure_hpa: STD_ATMOSPHERE_HPA,
            strict: false,
            extended_output: false,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 읽는다. 파일이 없으면 기본 설정을 돌려준다(파일은 만들지 않는다).
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "설정 로드");
        Ok(cfg)
    } else {
        Ok(Config::default())
    }
}

impl Config {
    /// 설정을 TOML 로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!(path = %path.display(), "설정 저장");
        Ok(())
    }
}
