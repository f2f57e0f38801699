//! HYSPLIT CONTROL file generation.
//!
//! Turns a JSON simulation request into the line-oriented CONTROL file the
//! HYSPLIT executables read at startup.

pub mod error;
pub mod payload;
pub mod writer;

pub use error::{ControlFileError, ControlFileResult};
pub use payload::{
    ConcentrationGrid, Direction, FileLocation, ModelType, Payload, PhysicsConfig, Pollutant,
    PollutantMatrixConfig, ReleasePoint, SimulationMeta,
};
pub use writer::{format_hysplit_time, generate_control_file, run_duration_hours};
