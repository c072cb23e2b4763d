use std::process::ExitCode;

use clap::Parser;
use humidity_toolbox::{app, config, ui_cli::Cli};
use tracing_subscriber::EnvFilter;

/// 프로그램의 엔트리 포인트. 로그와 설정을 준비한 뒤 계산 또는 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        eprintln!("오류: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn try_run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default(&cli.config)?;
    app::run(cli, &mut cfg, &cli.config)?;
    Ok(())
}

/// `RUST_LOG` 로 수준을 정한다. 기본은 경고 이상만 stderr 로 출력한다.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
