//! Activity tracker core: parses step and training records and derives
//! distance, mean speed and calories.

pub mod config;
pub mod duration;
pub mod error;
pub mod metrics;
pub mod parser;
pub mod physics;
pub mod report;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use config::{load_config, TrackerConfig};
pub use duration::parse_duration;
pub use error::{FormatError, RangeError, TrackerError};
pub use parser::parse_record;
pub use physics::{
    compute_metrics, distance_km, mean_speed_kmh, running_spent_calories, spent_calories,
    walking_spent_calories,
};
pub use report::{
    step_report, step_summary, training_report, training_summary, StepSummary, Tracker,
    TrainingSummary,
};
pub use types::{ActivityKind, ActivityRecord, DerivedMetrics, PhysicalProfile, RecordShape};
