//! Simulation request payload, as posted by the job scheduler.

use serde::{Deserialize, Serialize};

use crate::error::ControlFileResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModelType {
    Concentration,
    Trajectory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    #[serde(default)]
    pub job_id: String,
    pub simulation_meta: SimulationMeta,
    #[serde(default)]
    pub met_files: Vec<FileLocation>,
    pub physics_config: PhysicsConfig,
    #[serde(default)]
    pub points: Vec<ReleasePoint>,
    #[serde(default)]
    pub pollutant_matrix_config: PollutantMatrixConfig,
    #[serde(default)]
    pub concentration_grids: Vec<ConcentrationGrid>,
}

impl Payload {
    pub fn from_json(text: &str) -> ControlFileResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationMeta {
    pub model_type: ModelType,
    pub direction: Direction,
    #[serde(rename = "startEpochUTC")]
    pub start_epoch_utc: i64,
    #[serde(rename = "endEpochUTC")]
    pub end_epoch_utc: i64,
    pub output_file: FileLocation,
}

/// A directory plus file name, written as two separate lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileLocation {
    pub directory: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsConfig {
    pub vertical_motion_code: i32,
    #[serde(rename = "topOfModelMAgl")]
    pub top_of_model_m_agl: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleasePoint {
    #[serde(default)]
    pub point_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "heightMAgl")]
    pub height_m_agl: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PollutantMatrixConfig {
    #[serde(default)]
    pub sox: Pollutant,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pollutant {
    #[serde(default)]
    pub pollutant_id: String,
    #[serde(default)]
    pub initial_mass_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcentrationGrid {
    pub center_lat: f64,
    pub center_lon: f64,
    pub spacing_lat: f64,
    pub spacing_lon: f64,
    /// Grid extent in points
    pub span_lat: u32,
    pub span_lon: u32,
    #[serde(rename = "outputLevelsMAgl", default)]
    pub output_levels_m_agl: Vec<f64>,
}
