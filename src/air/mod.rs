//! 습공기(Psychrometrics) 계산 모듈.

pub mod arden_buck;
pub mod atmosphere;
pub mod humid_air;
pub mod rh_solver;

pub use arden_buck::{
    arden_buck_constant, dewpoint_from_pressure, dewpoint_from_rh, gamma_from_dewpoint,
    gamma_from_rh, pressure_from_dewpoint, pressure_from_rh, rh_from_dewpoint, rh_from_pressure,
    saturation_pressure, ArdenBuckParams, STD_ATMOSPHERE_HPA,
};
pub use humid_air::{humid_air_state, HumidAirState};
pub use rh_solver::{Point, PointInput, RhSolver};
