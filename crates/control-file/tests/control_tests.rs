//! CONTROL file output for each model type and direction.

use control_file::{
    generate_control_file, run_duration_hours, ControlFileError, Direction, ModelType, Payload,
};

const PAYLOAD: &str = r#"{
  "jobId": "job-42",
  "simulationMeta": {
    "modelType": "CONCENTRATION",
    "direction": "FORWARD",
    "startEpochUTC": 1704110400,
    "endEpochUTC": 1704132000,
    "outputFile": { "directory": "/out/", "fileName": "cdump" }
  },
  "metFiles": [
    { "directory": "/data/met/", "fileName": "gdas1.jan24.w1" },
    { "directory": "/data/met/", "fileName": "hrrr.20240101" }
  ],
  "physicsConfig": { "verticalMotionCode": 0, "topOfModelMAgl": 10000 },
  "points": [
    { "pointId": 1, "latitude": 40.0, "longitude": -100.0, "heightMAgl": 10.0 }
  ],
  "pollutantMatrixConfig": {
    "sox": { "pollutantId": "so2", "initialMassG": 1000.0 },
    "isEmissionRateZero": false
  },
  "concentrationGrids": [
    {
      "centerLat": 40.0,
      "centerLon": -100.0,
      "spacingLat": 0.05,
      "spacingLon": 0.05,
      "spanLat": 30,
      "spanLon": 30,
      "outputLevelsMAgl": [0, 100, 500]
    }
  ]
}"#;

const HEADER: &str = "\
24 01 01 12 0
1
40.000000 -100.000000 10.00
";

const MET_BLOCK: &str = "\
0
10000
2
/data/met/
gdas1.jan24.w1
/data/met/
hrrr.20240101
";

const GRID_AND_DEPOSITION: &str = "\
1
40.0 -100.0
0.050 0.050
30 30
/out/
cdump
3
0 100 500
24 01 01 12 0
00 00 00 06 00
0 1 0
1
0.0 0.0 0.0
0.0 0.0 0.0 0.0 0.0
0.0 0.0 0.0
0
0.0
";

fn payload(model_type: ModelType, direction: Direction) -> Payload {
    let mut payload = Payload::from_json(PAYLOAD).unwrap();
    payload.simulation_meta.model_type = model_type;
    payload.simulation_meta.direction = direction;
    payload
}

#[test]
fn test_payload_decodes() {
    let payload = Payload::from_json(PAYLOAD).unwrap();
    assert_eq!(payload.job_id, "job-42");
    assert_eq!(payload.simulation_meta.model_type, ModelType::Concentration);
    assert_eq!(payload.pollutant_matrix_config.sox.pollutant_id, "so2");
    assert_eq!(payload.concentration_grids[0].span_lat, 30);
}

#[test]
fn test_concentration_forward() {
    let text = generate_control_file(&payload(ModelType::Concentration, Direction::Forward)).unwrap();
    let expected = format!(
        "{}6\n{}1\nSO2\n1\n1.0\n24 01 01 12 0\n{}",
        HEADER, MET_BLOCK, GRID_AND_DEPOSITION
    );
    assert_eq!(text, expected);
}

#[test]
fn test_concentration_backward() {
    let text =
        generate_control_file(&payload(ModelType::Concentration, Direction::Backward)).unwrap();
    let expected = format!(
        "{}-6\n{}1\nSO2\n1\n1.0\n00 00 00 00 0\n{}",
        HEADER, MET_BLOCK, GRID_AND_DEPOSITION
    );
    assert_eq!(text, expected);
}

#[test]
fn test_trajectory_forward() {
    let mut p = payload(ModelType::Trajectory, Direction::Forward);
    p.simulation_meta.output_file.file_name = "tdump".to_string();
    let text = generate_control_file(&p).unwrap();
    assert_eq!(text, format!("{}6\n{}/out/\ntdump\n0\n100\n", HEADER, MET_BLOCK));
}

#[test]
fn test_trajectory_backward_ignores_grids() {
    let mut p = payload(ModelType::Trajectory, Direction::Backward);
    p.concentration_grids.clear();
    let text = generate_control_file(&p).unwrap();
    assert_eq!(text, format!("{}-6\n{}/out/\ncdump\n0\n100\n", HEADER, MET_BLOCK));
}

#[test]
fn test_duration_sign_follows_direction() {
    let mut p = payload(ModelType::Trajectory, Direction::Backward);
    // Backward runs are sometimes submitted with end before start.
    p.simulation_meta.end_epoch_utc = p.simulation_meta.start_epoch_utc - 12 * 3600;
    assert_eq!(run_duration_hours(&p.simulation_meta), -12.0);

    p.simulation_meta.direction = Direction::Forward;
    assert_eq!(run_duration_hours(&p.simulation_meta), 12.0);
}

#[test]
fn test_missing_points_rejected() {
    let mut p = payload(ModelType::Concentration, Direction::Forward);
    p.points.clear();
    assert!(matches!(generate_control_file(&p), Err(ControlFileError::NoPoints)));
}

#[test]
fn test_missing_met_files_rejected() {
    let mut p = payload(ModelType::Trajectory, Direction::Forward);
    p.met_files.clear();
    assert!(matches!(generate_control_file(&p), Err(ControlFileError::NoMetFiles)));
}

#[test]
fn test_concentration_grid_count_enforced() {
    let mut p = payload(ModelType::Concentration, Direction::Forward);
    let grid = p.concentration_grids[0].clone();
    p.concentration_grids.push(grid);
    assert!(matches!(generate_control_file(&p), Err(ControlFileError::GridCount(2))));

    p.concentration_grids.clear();
    assert!(matches!(generate_control_file(&p), Err(ControlFileError::GridCount(0))));
}

#[test]
fn test_unknown_model_type_rejected() {
    let text = PAYLOAD.replace("\"CONCENTRATION\"", "\"PUFF\"");
    assert!(matches!(Payload::from_json(&text), Err(ControlFileError::Json(_))));
}
