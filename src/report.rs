//! 계산된 지점을 사람이 읽는 문자열로 만든다.

use crate::air::Point;
use crate::quantity::{format_quantity, QuantityValue};
use crate::units::{PressureUnit, SpecificEnthalpyUnit, TemperatureUnit};

/// 보고서 출력 옵션.
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// 섭씨 옆에 함께 보여줄 온도 단위
    pub secondary_temperature: TemperatureUnit,
    pub enthalpy_unit: SpecificEnthalpyUnit,
    /// 습도비/비엔탈피/습구온도 출력 여부
    pub extended: bool,
    /// 대기압 [hPa]. 확장 출력에 쓰인다.
    pub pressure_hpa: f64,
}

fn temperature_pair(value_c: f64, secondary: TemperatureUnit) -> String {
    let secondary = match secondary {
        TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
        other => other,
    };
    format!(
        "{} / {}",
        format_quantity(QuantityValue::temperature(value_c, TemperatureUnit::Celsius)),
        format_quantity(QuantityValue::temperature(value_c, secondary))
    )
}

fn pressure(value_hpa: f64) -> String {
    format_quantity(QuantityValue::pressure(value_hpa, PressureUnit::HectoPascal))
}

/// 지점 하나를 여러 줄 문자열로 만든다. `number` 는 1부터 센다.
pub fn format_point(number: usize, point: &Point, opts: &ReportOptions) -> String {
    let mut lines = vec![
        format!(
            "온도 {number} = [{}]",
            temperature_pair(point.temperature, opts.secondary_temperature)
        ),
        format!(
            "이슬점/서리점 = [{}]",
            temperature_pair(point.dewpoint, opts.secondary_temperature)
        ),
        format!("포화 수증기압 = [{}]", pressure(point.saturation_pressure)),
        format!("수증기 분압 = [{}]", pressure(point.partial_pressure)),
        format!(
            "상대습도 = [{}]",
            format_quantity(QuantityValue::relative_humidity(point.relative_humidity))
        ),
    ];
    if opts.extended {
        let ratio = QuantityValue::humidity_ratio(point.humidity_ratio(opts.pressure_hpa));
        let enthalpy = QuantityValue::specific_enthalpy(
            point.specific_enthalpy(opts.pressure_hpa),
            opts.enthalpy_unit,
        );
        lines.push(format!("습도비 = [{}]", format_quantity(ratio)));
        lines.push(format!("비엔탈피 = [{}]", format_quantity(enthalpy)));
        lines.push(format!(
            "습구온도 = [{}]",
            temperature_pair(point.wet_bulb(), opts.secondary_temperature)
        ));
    }
    lines.iter().map(|line| format!("{line}\n")).collect()
}

/// 모든 지점의 보고서. 지점 사이에 빈 줄을 둔다.
pub fn format_report(points: &[Point], opts: &ReportOptions) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| format_point(i + 1, p, opts))
        .collect::<Vec<_>>()
        .join("\n")
}
