use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::air::atmosphere::{pressure_at_altitude, ISA_SEA_LEVEL_TEMP_C};
use crate::app::{calculate_report, AppError, RunSettings};
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::conversion::{parse_pressure, parse_temperature_unit};
use crate::units::TemperatureUnit;

/// 명령행 인자.
#[derive(Debug, Parser)]
#[command(
    name = "humidity_toolbox",
    version,
    about = "온도와 이슬점/상대습도로 포화 수증기압, 수증기 분압, 상대습도를 계산한다",
    after_help = "지점 토큰: t=<온도> dp=<이슬점> rh=<상대습도> <상대습도>%\n\
                  접두사 없는 값은 첫 값이 온도, 그 다음이 이슬점, 이후 다시 온도로 해석된다.\n\
                  예: humidity_toolbox 7.8 -0.6 22.8\n\
                      humidity_toolbox -f -p 900 46 31 73\n\
                      humidity_toolbox t=7.8 55.3% t=22.8"
)]
pub struct Cli {
    /// 온도를 섭씨로 입력 [기본]
    #[arg(short = 'c', long, group = "unit")]
    pub celsius: bool,

    /// 온도를 화씨로 입력
    #[arg(short = 'f', long, group = "unit")]
    pub fahrenheit: bool,

    /// 온도를 켈빈으로 입력
    #[arg(short = 'k', long, group = "unit")]
    pub kelvin: bool,

    /// 대기압. 단위가 없으면 설정의 기본 압력 단위(hPa), 예: 900, 29.92inHg
    #[arg(short = 'p', long, conflicts_with = "altitude")]
    pub pressure: Option<String>,

    /// 해발고도 [m]로 대기압을 근사한다
    #[arg(long)]
    pub altitude: Option<f64>,

    /// 해석 불가 입력이나 유한하지 않은 결과를 오류로 처리한다
    #[arg(long)]
    pub strict: bool,

    /// 습도비, 비엔탈피, 습구온도도 출력한다
    #[arg(short = 'x', long)]
    pub extended: bool,

    /// 설정 파일 경로
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// 대화형 메뉴로 실행한다
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// 지점 토큰 (온도, 이슬점, 상대습도)
    #[arg(allow_negative_numbers = true)]
    pub tokens: Vec<String>,
}

impl Cli {
    /// 명령행 플래그가 설정 파일 값보다 우선한다.
    pub fn settings(&self, cfg: &Config) -> Result<RunSettings, AppError> {
        let mut settings = RunSettings::from_config(cfg);
        if self.celsius {
            settings.temperature_unit = TemperatureUnit::Celsius;
        } else if self.fahrenheit {
            settings.temperature_unit = TemperatureUnit::Fahrenheit;
        } else if self.kelvin {
            settings.temperature_unit = TemperatureUnit::Kelvin;
        }
        if let Some(p) = &self.pressure {
            settings.pressure_hpa = parse_pressure(p, cfg.default_units.pressure)?;
        } else if let Some(h) = self.altitude {
            settings.pressure_hpa = pressure_at_altitude(h, ISA_SEA_LEVEL_TEMP_C);
        }
        settings.strict |= self.strict;
        settings.extended |= self.extended;
        Ok(settings)
    }
}

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면 `Exit`.
pub fn main_menu(input: &mut impl BufRead, out: &mut impl Write) -> Result<MenuChoice, AppError> {
    writeln!(out, "\n=== Humidity Toolbox ===")?;
    writeln!(out, "1) 상대습도/이슬점 계산")?;
    writeln!(out, "2) 설정")?;
    writeln!(out, "0) 종료")?;
    loop {
        let Some(sel) = read_line(input, out, "메뉴 선택: ")? else {
            return Ok(MenuChoice::Exit);
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => writeln!(out, "잘못된 입력입니다. 다시 선택하세요.")?,
        }
    }
}

/// 지점 토큰을 한 줄씩 받아 계산한다. 빈 줄이나 입력 끝에서 계산한다.
pub fn handle_calculation(
    input: &mut impl BufRead,
    out: &mut impl Write,
    settings: &RunSettings,
) -> Result<(), AppError> {
    writeln!(out, "\n-- 상대습도/이슬점 계산 --")?;
    writeln!(
        out,
        "기본 온도 단위: {}, 대기압: {:.2} hPa",
        settings.temperature_unit.symbol(),
        settings.pressure_hpa
    )?;
    writeln!(out, "예: 7.8  dp=-0.6  rh=55.3  55.3%  t=22.8  46F")?;
    let mut tokens: Vec<String> = Vec::new();
    while let Some(line) = read_line(input, out, "값 입력 (빈 줄이면 계산): ")? {
        if line.trim().is_empty() {
            break;
        }
        tokens.extend(line.split_whitespace().map(str::to_string));
    }
    if tokens.is_empty() {
        writeln!(out, "입력된 값이 없습니다.")?;
        return Ok(());
    }
    match calculate_report(tokens.as_slice(), settings) {
        Ok(report) => writeln!(out, "\n{report}")?,
        // 대화형에서는 계산 오류로 종료하지 않는다
        Err(AppError::Psychro(e)) => writeln!(out, "계산 오류: {e}")?,
        Err(e) => return Err(e),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 값이 바뀌었으면 `true`.
pub fn handle_settings(
    input: &mut impl BufRead,
    out: &mut impl Write,
    cfg: &mut Config,
) -> Result<bool, AppError> {
    writeln!(out, "\n-- 설정 --")?;
    writeln!(
        out,
        "1) 기본 온도 단위 [{}]",
        cfg.default_units.temperature.symbol()
    )?;
    writeln!(out, "2) 대기압 [{:.2} hPa]", cfg.atmospheric_pressure_hpa)?;
    writeln!(out, "3) 엄격 모드 [{}]", on_off(cfg.strict))?;
    writeln!(out, "4) 확장 출력 [{}]", on_off(cfg.extended_output))?;
    let Some(sel) = read_line(input, out, "변경할 번호(취소하려면 엔터): ")? else {
        return Ok(false);
    };
    match sel.trim() {
        "" => Ok(false),
        "1" => {
            let Some(s) = read_line(input, out, "온도 단위 (C/F/K): ")? else {
                return Ok(false);
            };
            match parse_temperature_unit(&s) {
                Ok(unit) => {
                    cfg.default_units.temperature = unit;
                    Ok(true)
                }
                Err(e) => {
                    writeln!(out, "{e}. 변경하지 않습니다.")?;
                    Ok(false)
                }
            }
        }
        "2" => {
            let Some(s) = read_line(input, out, "대기압 (예: 1013.25, 29.92inHg): ")? else {
                return Ok(false);
            };
            match parse_pressure(&s, cfg.default_units.pressure) {
                Ok(p) => {
                    cfg.atmospheric_pressure_hpa = p;
                    Ok(true)
                }
                Err(e) => {
                    writeln!(out, "{e}. 변경하지 않습니다.")?;
                    Ok(false)
                }
            }
        }
        "3" => {
            cfg.strict = !cfg.strict;
            Ok(true)
        }
        "4" => {
            cfg.extended_output = !cfg.extended_output;
            Ok(true)
        }
        _ => {
            writeln!(out, "잘못된 입력이므로 변경하지 않습니다.")?;
            Ok(false)
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "켜짐"
    } else {
        "꺼짐"
    }
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 `None`.
fn read_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> Result<Option<String>, AppError> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["humidity_toolbox", "-f", "-p", "900", "46", "31", "73"]);
        let s = cli.settings(&Config::default()).expect("settings");
        assert_eq!(s.temperature_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(s.pressure_hpa, 900.0);
        assert_eq!(cli.tokens, ["46", "31", "73"]);
    }

    #[test]
    fn negative_dewpoint_is_a_token() {
        let cli = Cli::parse_from(["humidity_toolbox", "7.8", "-0.6", "22.8"]);
        assert_eq!(cli.tokens, ["7.8", "-0.6", "22.8"]);
        assert!(!cli.interactive);
    }

    #[test]
    fn unit_flags_are_exclusive() {
        assert!(Cli::try_parse_from(["humidity_toolbox", "-f", "-k", "10"]).is_err());
    }

    #[test]
    fn altitude_sets_pressure() {
        let cli = Cli::parse_from(["humidity_toolbox", "--altitude", "1000", "20"]);
        let s = cli.settings(&Config::default()).expect("settings");
        assert!(s.pressure_hpa < 1013.25 && s.pressure_hpa > 880.0);
    }

    #[test]
    fn menu_exits_when_input_ends() {
        let mut out = Vec::new();
        let choice = main_menu(&mut Cursor::new(""), &mut out).expect("menu");
        assert_eq!(choice, MenuChoice::Exit);
        let text = String::from_utf8(out).expect("utf8");
        assert!(!text.contains("잘못된 입력"));
    }

    #[test]
    fn menu_retries_then_reads_choice() {
        let mut out = Vec::new();
        let choice = main_menu(&mut Cursor::new("9\n2\n"), &mut out).expect("menu");
        assert_eq!(choice, MenuChoice::Settings);
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.matches("잘못된 입력").count(), 1);
    }

    #[test]
    fn settings_left_unchanged_at_end_of_input() {
        let mut cfg = Config::default();
        let mut out = Vec::new();
        assert!(!handle_settings(&mut Cursor::new(""), &mut out, &mut cfg).expect("settings"));
        assert!(!handle_settings(&mut Cursor::new("1\n"), &mut out, &mut cfg).expect("settings"));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn settings_menu_updates_pressure() {
        let mut cfg = Config::default();
        let mut out = Vec::new();
        let changed =
            handle_settings(&mut Cursor::new("2\n900\n"), &mut out, &mut cfg).expect("settings");
        assert!(changed);
        assert_eq!(cfg.atmospheric_pressure_hpa, 900.0);
    }

    #[test]
    fn calculation_reads_tokens_until_end_of_input() {
        let settings = RunSettings::from_config(&Config::default());
        let mut out = Vec::new();
        handle_calculation(&mut Cursor::new("7.8 -0.6\n22.8"), &mut out, &settings)
            .expect("calculation");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("온도 2 = [22.8 °C / 73.0 °F]"));
        assert!(text.contains("상대습도 = [21.1 %]"));
    }

    #[test]
    fn bad_pressure_unit_is_reported() {
        let cli = Cli::parse_from(["humidity_toolbox", "-p", "900 parsecs", "20"]);
        assert!(matches!(
            cli.settings(&Config::default()),
            Err(AppError::Conversion(_))
        ));
    }
}
