use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{RangeError, TrackerError};

/// Which record layout a call site expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordShape {
    /// `steps,duration`
    Steps,
    /// `steps,activity,duration`
    Training,
}

impl RecordShape {
    pub fn field_count(self) -> usize {
        match self {
            RecordShape::Steps => 2,
            RecordShape::Training => 3,
        }
    }
}

/// A decoded record. `activity` is only set for training records and is
/// kept verbatim; it is resolved to an [`ActivityKind`] at calculation time.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub steps: u64,
    pub activity: Option<String>,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Walking,
    Running,
}

impl ActivityKind {
    /// Maps a record label to a kind. Labels match exactly.
    pub fn from_label(label: &str) -> Result<Self, TrackerError> {
        match label {
            "Ходьба" | "Walking" => Ok(ActivityKind::Walking),
            "Бег" | "Running" => Ok(ActivityKind::Running),
            other => Err(TrackerError::UnknownActivity(other.to_string())),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityKind::Walking => f.write_str("Walking"),
            ActivityKind::Running => f.write_str("Running"),
        }
    }
}

/// Body measurements supplied per call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl PhysicalProfile {
    pub fn new(weight_kg: f64, height_cm: f64) -> Self {
        Self { weight_kg, height_cm }
    }

    /// Both measurements must be strictly positive (NaN fails too).
    pub fn validate(&self) -> Result<(), RangeError> {
        if self.weight_kg > 0.0 && self.height_cm > 0.0 {
            Ok(())
        } else {
            Err(RangeError::Profile)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}
