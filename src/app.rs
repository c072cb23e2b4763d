use std::io::{self, BufRead, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::air::RhSolver;
use crate::config::{Config, ConfigError};
use crate::conversion::{classify_token, ConversionError, PointToken};
use crate::error::PsychroError;
use crate::report::{format_report, ReportOptions};
use crate::ui_cli::{self, Cli, MenuChoice};
use crate::units::{SpecificEnthalpyUnit, TemperatureUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 해석 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 습공기 계산 오류(엄격 모드)
    #[error("습공기 계산 오류: {0}")]
    Psychro(#[from] PsychroError),
}

/// 명령행과 설정 파일을 합친 한 번의 계산 설정.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSettings {
    pub temperature_unit: TemperatureUnit,
    /// [hPa]
    pub pressure_hpa: f64,
    pub strict: bool,
    pub extended: bool,
    pub enthalpy_unit: SpecificEnthalpyUnit,
}

impl RunSettings {
    /// 명령행 없이 설정 파일 값만으로 만든다.
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            temperature_unit: cfg.default_units.temperature,
            pressure_hpa: cfg.atmospheric_pressure_hpa,
            strict: cfg.strict,
            extended: cfg.extended_output,
            enthalpy_unit: cfg.default_units.specific_enthalpy,
        }
    }

    fn report_options(&self) -> ReportOptions {
        ReportOptions {
            secondary_temperature: self.temperature_unit,
            enthalpy_unit: self.enthalpy_unit,
            extended: self.extended,
            pressure_hpa: self.pressure_hpa,
        }
    }
}

/// 지점 토큰을 순서대로 계산기에 넣는다. 엄격 모드면 해석 불가 값에서 멈춘다.
pub fn build_solver<S: AsRef<str>>(
    tokens: &[S],
    settings: &RunSettings,
) -> Result<RhSolver, PsychroError> {
    let mut solver = RhSolver::new();
    solver.set_pressure(settings.pressure_hpa);
    solver.set_temperature_unit(settings.temperature_unit);

    for token in tokens {
        match (classify_token(token.as_ref()), settings.strict) {
            (PointToken::Temperature(v), false) => solver.add_temperature(v),
            (PointToken::Dewpoint(v), false) => solver.add_dewpoint(v),
            (PointToken::Humidity(v), false) => solver.add_humidity(v),
            (PointToken::Auto(v), false) => solver.add_param(v),
            (PointToken::Temperature(v), true) => solver.try_add_temperature(v)?,
            (PointToken::Dewpoint(v), true) => solver.try_add_dewpoint(v)?,
            (PointToken::Humidity(v), true) => solver.try_add_humidity(v)?,
            (PointToken::Auto(v), true) => solver.try_add_param(v)?,
        }
    }
    Ok(solver)
}

/// 토큰을 계산해 보고서 문자열을 돌려준다.
pub fn calculate_report<S: AsRef<str>>(
    tokens: &[S],
    settings: &RunSettings,
) -> Result<String, AppError> {
    let mut solver = build_solver(tokens, settings)?;
    solver.calculate();
    if settings.strict {
        solver.check_inputs()?;
        solver.check_results()?;
    } else if let Some(index) = solver.results().iter().position(|p| !p.is_solved()) {
        warn!(index, "유한하지 않은 값이 포함된 지점이 있습니다");
    }
    Ok(format_report(solver.results(), &settings.report_options()))
}

/// 명령행 인자에 따라 한 번 계산하거나 대화형 메뉴를 실행한다.
pub fn run(cli: &Cli, config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    if cli.interactive || cli.tokens.is_empty() {
        let stdin = io::stdin();
        let stdout = io::stdout();
        return run_interactive(cli, config, config_path, &mut stdin.lock(), &mut stdout.lock());
    }
    let settings = cli.settings(config)?;
    info!(points = cli.tokens.len(), pressure = settings.pressure_hpa, "계산 시작");
    println!("{}", calculate_report(cli.tokens.as_slice(), &settings)?);
    Ok(())
}

/// 대화형 메인 루프를 실행한다. 명령행 플래그는 설정을 바꾼 뒤에도 계속 우선한다.
pub fn run_interactive(
    cli: &Cli,
    config: &mut Config,
    config_path: &Path,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let mut settings = cli.settings(config)?;
    loop {
        match ui_cli::main_menu(input, out)? {
            MenuChoice::Calculate => ui_cli::handle_calculation(input, out, &settings)?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(input, out, config)? {
                    config.save(config_path)?;
                    settings = cli.settings(config)?;
                }
            }
            MenuChoice::Exit => {
                writeln!(out, "종료합니다.")?;
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;

    fn settings() -> RunSettings {
        RunSettings::from_config(&Config::default())
    }

    #[test]
    fn strict_mode_stops_on_bad_token() {
        let mut s = settings();
        s.strict = true;
        let err = build_solver(&["7.8", "dp=cold"], &s).unwrap_err();
        assert_eq!(err, PsychroError::Parse { input: "cold".into() });
    }

    #[test]
    fn lax_mode_contaminates() {
        let solver = build_solver(&["7.8", "dp=cold"], &settings()).expect("lax");
        assert!(solver.inputs()[0].dewpoint.is_some_and(f64::is_nan));
    }

    #[test]
    fn strict_report_flags_underspecified_point() {
        let mut s = settings();
        s.strict = true;
        let err = calculate_report(&["25"], &s).unwrap_err();
        assert!(matches!(
            err,
            AppError::Psychro(PsychroError::Underspecified { index: 0 })
        ));
    }

    fn session(args: &[&str], script: &str, config_path: &Path) -> (Config, String) {
        let cli = Cli::parse_from(args.iter().copied());
        let mut cfg = Config::default();
        let mut out = Vec::new();
        run_interactive(&cli, &mut cfg, config_path, &mut Cursor::new(script), &mut out)
            .expect("session");
        (cfg, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn interactive_calculation_uses_command_line_flags() {
        let (_, text) = session(
            &["humidity_toolbox", "-f", "-p", "900"],
            "1\n46 31 73\n\n0\n",
            Path::new("unused.toml"),
        );
        assert!(text.contains("기본 온도 단위: °F, 대기압: 900.00 hPa"));
        assert!(text.contains("온도 1 = [7.8 °C / 46.0 °F]"));
        assert!(text.contains("포화 수증기압 = [9.39 hPa]"));
        assert!(text.contains("상대습도 = [21.2 %]"));
    }

    #[test]
    fn command_line_flags_survive_settings_menu() {
        let path = std::env::temp_dir().join(format!(
            "humidity_toolbox_session_{}.toml",
            std::process::id()
        ));
        let (cfg, text) = session(
            &["humidity_toolbox", "-f"],
            "2\n2\n950\n1\n46 31\n\n0\n",
            &path,
        );
        let saved = crate::config::load_or_default(&path).expect("saved");
        let _ = std::fs::remove_file(&path);
        assert_eq!(cfg.atmospheric_pressure_hpa, 950.0);
        assert_eq!(saved, cfg);
        assert!(text.contains("기본 온도 단위: °F, 대기압: 950.00 hPa"));
    }

    #[test]
    fn interactive_session_ends_with_input() {
        let (cfg, text) = session(&["humidity_toolbox"], "", Path::new("unused.toml"));
        assert_eq!(cfg, Config::default());
        assert!(text.ends_with("종료합니다.\n"));
        assert!(!text.contains("잘못된 입력"));
    }
}
