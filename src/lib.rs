//! 습공기 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 다른 프런트엔드에서도 쓸 수 있게 한다.

pub mod air;
pub mod app;
pub mod config;
pub mod conversion;
pub mod error;
pub mod quantity;
pub mod report;
pub mod ui_cli;
pub mod units;

pub use air::{Point, PointInput, RhSolver};
pub use conversion::Reading;
pub use error::PsychroError;
pub use units::TemperatureUnit;
