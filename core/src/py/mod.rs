// core/src/py/mod.rs
// PyO3 bindings. Built only with the `python` feature.
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use serde::Deserialize;
use serde_json as json;
use serde_path_to_error as spte;

use crate::report;

#[derive(Debug, Deserialize)]
struct TrainingIn {
    data: String,
    #[serde(alias = "weight_kg")]
    weight: f64,
    #[serde(alias = "height_cm")]
    height: f64,
}

fn call_training_summary_from_json(json_in: &str) -> Result<String, String> {
    let mut de = json::Deserializer::from_str(json_in);
    let parsed: TrainingIn = spte::deserialize(&mut de)
        .map_err(|e| format!("parse error (TrainingIn) at {}: {}", e.path(), e.inner()))?;

    let summary = report::training_summary(&parsed.data, parsed.weight, parsed.height)
        .map_err(|e| e.to_string())?;
    Ok(summary.to_json().to_string())
}

/// Best-effort: returns "" when the record is rejected.
#[pyfunction]
fn step_report(data: &str, weight: f64, height: f64) -> String {
    report::step_report(data, weight, height)
}

#[pyfunction]
fn training_report(data: &str, weight: f64, height: f64) -> PyResult<String> {
    report::training_report(data, weight, height).map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pyfunction]
fn training_summary_json(json_str: &str) -> PyResult<String> {
    call_training_summary_from_json(json_str).map_err(PyValueError::new_err)
}

#[pymodule]
fn tracker_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(step_report, m)?)?;
    m.add_function(wrap_pyfunction!(training_report, m)?)?;
    m.add_function(wrap_pyfunction!(training_summary_json, m)?)?;
    Ok(())
}

