//! 여러 측정 지점을 순서대로 풀어 이슬점/상대습도/수증기 분압을 채우는 계산기.
//!
//! 모든 지점은 같은 대기압을 공유한다. 이슬점이나 상대습도가 없는 지점은 직전 지점의
//! 수증기 분압을 그대로 이어받는다(등압 가정: 같은 공기 덩어리가 온도만 바뀐 경우).

use tracing::{debug, trace};

use super::arden_buck::{
    dewpoint_from_pressure, pressure_from_dewpoint, pressure_from_rh, rh_from_dewpoint,
    saturation_pressure, STD_ATMOSPHERE_HPA,
};
use super::humid_air;
use crate::conversion::{
    parse_humidity, parse_temperature, try_parse_humidity, try_parse_temperature, Reading,
};
use crate::error::{PsychroError, Result};
use crate::units::TemperatureUnit;

/// 입력된 그대로의 지점. `None` 은 주어지지 않은 값이다.
///
/// `Some(NaN)` 은 "입력은 있었으나 해석 불가"를 뜻하며 이후 계산을 오염시킨다.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointInput {
    /// [°C]
    pub temperature: Option<f64>,
    /// [°C]
    pub dewpoint: Option<f64>,
    /// [%]
    pub relative_humidity: Option<f64>,
}

impl PointInput {
    fn has_moisture(&self) -> bool {
        self.dewpoint.is_some() || self.relative_humidity.is_some()
    }
}

/// 계산이 끝난 지점. 구할 수 없는 값은 NaN 이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// 건구온도 [°C]
    pub temperature: f64,
    /// 이슬점/서리점 [°C]
    pub dewpoint: f64,
    /// 상대습도 [%]
    pub relative_humidity: f64,
    /// 포화 수증기압 [hPa], 대기압 보정 포함
    pub saturation_pressure: f64,
    /// 수증기 분압 [hPa], 대기압 보정 포함
    pub partial_pressure: f64,
}

impl Point {
    fn from_input(input: &PointInput) -> Self {
        Self {
            temperature: input.temperature.unwrap_or(f64::NAN),
            dewpoint: input.dewpoint.unwrap_or(f64::NAN),
            relative_humidity: input.relative_humidity.unwrap_or(f64::NAN),
            saturation_pressure: f64::NAN,
            partial_pressure: f64::NAN,
        }
    }

    /// 다섯 값이 모두 유한한지 확인한다.
    pub fn is_solved(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.is_finite())
    }

    fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("온도", self.temperature),
            ("이슬점", self.dewpoint),
            ("상대습도", self.relative_humidity),
            ("포화 수증기압", self.saturation_pressure),
            ("수증기 분압", self.partial_pressure),
        ]
    }

    /// 습도비 [kg/kg]. `p_a` 는 대기압 [hPa].
    pub fn humidity_ratio(&self, p_a: f64) -> f64 {
        humid_air::humidity_ratio(self.partial_pressure, p_a)
    }

    /// 습공기 비엔탈피 [kJ/kg건공기]
    pub fn specific_enthalpy(&self, p_a: f64) -> f64 {
        humid_air::specific_enthalpy_air(self.temperature, self.partial_pressure, p_a)
    }

    /// 습구온도(Stull 근사) [°C]
    pub fn wet_bulb(&self) -> f64 {
        humid_air::wet_bulb_stull(self.temperature, self.relative_humidity)
    }
}

/// 다지점 상대습도 계산기.
///
/// 입력을 차례로 추가한 뒤 [`RhSolver::calculate`] 를 호출하고 [`RhSolver::results`] 로 읽는다.
#[derive(Debug, Clone)]
pub struct RhSolver {
    pressure: f64,
    temperature_unit: TemperatureUnit,
    inputs: Vec<PointInput>,
    outputs: Vec<Point>,
}

impl Default for RhSolver {
    fn default() -> Self {
        Self {
            pressure: STD_ATMOSPHERE_HPA,
            temperature_unit: TemperatureUnit::Celsius,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }
}

impl RhSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// 대기압 [hPa]. 모든 지점에 같은 값이 적용된다.
    pub fn set_pressure(&mut self, hpa: f64) {
        self.pressure = hpa;
    }

    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// 단위 접미사가 없는 입력에 적용할 기본 온도 단위.
    pub fn set_temperature_unit(&mut self, unit: TemperatureUnit) {
        self.temperature_unit = unit;
    }

    pub fn temperature_unit(&self) -> TemperatureUnit {
        self.temperature_unit
    }

    pub fn inputs(&self) -> &[PointInput] {
        &self.inputs
    }

    /// 계산 결과. 입력과 같은 순서, 같은 개수다. `calculate` 전에는 비어 있다.
    pub fn results(&self) -> &[Point] {
        &self.outputs
    }

    /// 새 지점을 연다. 온도는 항상 새 지점을 시작한다.
    pub fn add_temperature(&mut self, value: impl Into<Reading>) {
        let t = parse_temperature(&value.into(), self.temperature_unit);
        self.push_temperature(t);
    }

    /// 이슬점을 추가한다. 직전 지점에 이슬점/상대습도가 없으면 그 지점을 채우고,
    /// 있으면 직전 지점의 온도를 이어받는 새 지점을 만든다.
    pub fn add_dewpoint(&mut self, value: impl Into<Reading>) {
        let dp = parse_temperature(&value.into(), self.temperature_unit);
        self.push_dewpoint(dp);
    }

    /// 상대습도 [%]를 추가한다. 규칙은 [`RhSolver::add_dewpoint`] 와 같다.
    pub fn add_humidity(&mut self, value: impl Into<Reading>) {
        let rh = parse_humidity(&value.into());
        self.push_humidity(rh);
    }

    /// 종류를 지정하지 않은 값. 지점이 없거나 직전 지점에 이미 이슬점/상대습도가 있으면
    /// 온도로, 아니면 이슬점으로 받는다. `7.8 -0.6 22.8` 은 온도1, 이슬점1, 온도2 가 된다.
    pub fn add_param(&mut self, value: impl Into<Reading>) {
        if self.awaits_moisture() {
            self.add_dewpoint(value);
        } else {
            self.add_temperature(value);
        }
    }

    /// 해석할 수 없는 값을 NaN 대신 오류로 돌려주는 `add_temperature`.
    pub fn try_add_temperature(&mut self, value: impl Into<Reading>) -> Result<()> {
        let t = try_parse_temperature(&value.into(), self.temperature_unit)?;
        self.push_temperature(t);
        Ok(())
    }

    pub fn try_add_dewpoint(&mut self, value: impl Into<Reading>) -> Result<()> {
        let dp = try_parse_temperature(&value.into(), self.temperature_unit)?;
        self.push_dewpoint(dp);
        Ok(())
    }

    pub fn try_add_humidity(&mut self, value: impl Into<Reading>) -> Result<()> {
        let rh = try_parse_humidity(&value.into())?;
        self.push_humidity(rh);
        Ok(())
    }

    pub fn try_add_param(&mut self, value: impl Into<Reading>) -> Result<()> {
        if self.awaits_moisture() {
            self.try_add_dewpoint(value)
        } else {
            self.try_add_temperature(value)
        }
    }

    /// 이미 섭씨로 정리된 지점을 그대로 추가한다. 온도 없이 이슬점/상대습도만 가진
    /// 지점은 계산 시 직전 지점의 온도를 이어받는다.
    pub fn push_input(&mut self, input: PointInput) {
        self.inputs.push(input);
    }

    fn push_temperature(&mut self, t: f64) {
        trace!(temperature = t, "새 지점");
        self.inputs.push(PointInput {
            temperature: Some(t),
            ..PointInput::default()
        });
    }

    /// 직전 지점이 있고 아직 이슬점/상대습도가 없는지.
    fn awaits_moisture(&self) -> bool {
        self.inputs.last().is_some_and(|p| !p.has_moisture())
    }

    fn push_dewpoint(&mut self, dp: f64) {
        if let Some(last) = self.inputs.last_mut().filter(|p| !p.has_moisture()) {
            last.dewpoint = Some(dp);
            return;
        }
        let temperature = self.inputs.last().and_then(|p| p.temperature);
        trace!(dewpoint = dp, "이슬점으로 새 지점");
        self.inputs.push(PointInput {
            temperature,
            dewpoint: Some(dp),
            relative_humidity: None,
        });
    }

    fn push_humidity(&mut self, rh: f64) {
        if let Some(last) = self.inputs.last_mut().filter(|p| !p.has_moisture()) {
            last.relative_humidity = Some(rh);
            return;
        }
        let temperature = self.inputs.last().and_then(|p| p.temperature);
        trace!(relative_humidity = rh, "상대습도로 새 지점");
        self.inputs.push(PointInput {
            temperature,
            dewpoint: None,
            relative_humidity: Some(rh),
        });
    }

    /// 모든 지점을 입력 순서대로 푼다. 다시 호출하면 처음부터 같은 결과를 다시 만든다.
    pub fn calculate(&mut self) {
        let atm = self.pressure / STD_ATMOSPHERE_HPA;
        self.outputs.clear();
        self.outputs.reserve(self.inputs.len());

        let mut last: Option<Point> = None;
        for (index, input) in self.inputs.iter().enumerate() {
            let point = solve_point(input, last.as_ref(), atm);
            debug!(
                index,
                t = point.temperature,
                dp = point.dewpoint,
                rh = point.relative_humidity,
                p_s = point.saturation_pressure,
                p_w = point.partial_pressure,
                "지점 계산"
            );
            self.outputs.push(point);
            last = Some(point);
        }
    }

    /// 엄격 모드: 입력 단계에서 해석 불가(NaN) 값이나 무한값이 있으면 오류.
    pub fn check_inputs(&self) -> Result<()> {
        for (index, input) in self.inputs.iter().enumerate() {
            let supplied = [
                ("온도", input.temperature),
                ("이슬점", input.dewpoint),
                ("상대습도", input.relative_humidity),
            ];
            for (quantity, value) in supplied {
                if let Some(value) = value.filter(|v| !v.is_finite()) {
                    return Err(PsychroError::Domain {
                        index,
                        quantity,
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    /// 엄격 모드: 계산 결과에 유한하지 않은 값이 있으면 첫 번째 것을 오류로 돌려준다.
    pub fn check_results(&self) -> Result<()> {
        for (index, (input, point)) in self.inputs.iter().zip(&self.outputs).enumerate() {
            if !input.has_moisture() && point.partial_pressure.is_nan() {
                return Err(PsychroError::Underspecified { index });
            }
            if let Some((quantity, value)) =
                point.fields().into_iter().find(|(_, v)| !v.is_finite())
            {
                return Err(PsychroError::Domain {
                    index,
                    quantity,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// 지점 하나를 푼다. `last` 는 직전에 계산된 지점이다.
fn solve_point(input: &PointInput, last: Option<&Point>, atm: f64) -> Point {
    let mut point = Point::from_input(input);

    if input.temperature.is_some() {
        point.saturation_pressure = atm * saturation_pressure(point.temperature);
        if !resolve_moisture(&mut point, input, atm) {
            if let Some(prev) = last.filter(|p| !p.partial_pressure.is_nan()) {
                point.partial_pressure = prev.partial_pressure;
                point.dewpoint =
                    dewpoint_from_pressure(point.temperature, point.partial_pressure / atm);
                point.relative_humidity = rh_from_dewpoint(point.temperature, point.dewpoint);
            }
        }
    } else if input.has_moisture() {
        if let Some(prev) = last.filter(|p| !p.temperature.is_nan()) {
            point.temperature = prev.temperature;
            point.saturation_pressure = prev.saturation_pressure;
            resolve_moisture(&mut point, input, atm);
        }
    }

    point
}

/// 이슬점 또는 상대습도 입력으로 나머지 값을 채운다. 둘 다 없으면 `false`.
///
/// 이슬점은 보정 전(표준 대기압 기준) 분압으로 구하므로 대기압 보정은 압력 값에만 곱해진다.
fn resolve_moisture(point: &mut Point, input: &PointInput, atm: f64) -> bool {
    let t = point.temperature;
    if let Some(dp) = input.dewpoint {
        point.partial_pressure = atm * pressure_from_dewpoint(t, dp);
        point.relative_humidity = rh_from_dewpoint(t, dp);
        true
    } else if let Some(rh) = input.relative_humidity {
        let p_w = pressure_from_rh(t, rh);
        point.partial_pressure = atm * p_w;
        point.dewpoint = dewpoint_from_pressure(t, p_w);
        true
    } else {
        false
    }
}
