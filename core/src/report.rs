use std::fmt;

use serde::Serialize;
use serde_json::{json, Value};

use crate::config::TrackerConfig;
use crate::duration::as_hours_f64;
use crate::error::{RangeError, Result, TrackerError};
use crate::metrics::{self, records_parsed_total, records_rejected_total, reports_total};
use crate::parser::parse_record;
use crate::physics::{compute_metrics, distance_km, stride_length_m, RoundTo};
use crate::types::{ActivityKind, PhysicalProfile, RecordShape};

/// Daily step summary built from a `steps,duration` record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepSummary {
    pub steps: u64,
    pub distance_km: f64,
    pub calories_kcal: f64,
}

impl StepSummary {
    pub fn to_json(&self) -> Value {
        json!({
            "steps": self.steps,
            "distance_km": self.distance_km.round_to(2),
            "calories_kcal": self.calories_kcal.round_to(2),
        })
    }
}

impl fmt::Display for StepSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Steps: {}.\nDistance: {:.2} km.\nCalories burned: {:.2} kcal.\n",
            self.steps, self.distance_km, self.calories_kcal
        )
    }
}

/// Workout summary built from a `steps,activity,duration` record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingSummary {
    /// Label as written in the record.
    pub activity: String,
    pub kind: ActivityKind,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl TrainingSummary {
    pub fn to_json(&self) -> Value {
        json!({
            "activity": self.activity,
            "kind": self.kind,
            "duration_h": self.duration_h.round_to(2),
            "distance_km": self.distance_km.round_to(2),
            "mean_speed_kmh": self.mean_speed_kmh.round_to(2),
            "calories_kcal": self.calories_kcal.round_to(2),
        })
    }
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Activity: {}\nDuration: {:.2} h.\nDistance: {:.2} km.\nSpeed: {:.2} km/h\nCalories burned: {:.2}\n",
            self.activity, self.duration_h, self.distance_km, self.mean_speed_kmh, self.calories_kcal
        )
    }
}

/// Bumps the global counters for one report attempt.
fn observe<T>(kind: &str, res: Result<T>) -> Result<T> {
    if let Some(m) = metrics::global() {
        match &res {
            Ok(_) => reports_total(m, kind).inc(),
            Err(e) => records_rejected_total(m, e).inc(),
        }
    }
    res
}

fn mark_parsed() {
    if let Some(m) = metrics::global() {
        records_parsed_total(m).inc();
    }
}

/// Report builder bound to one set of formula constants.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    config: TrackerConfig,
}

impl Tracker {
    pub fn new(config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn step_summary(&self, data: &str, weight_kg: f64, height_cm: f64) -> Result<StepSummary> {
        observe("steps", self.build_step_summary(data, weight_kg, height_cm))
    }

    fn build_step_summary(&self, data: &str, weight_kg: f64, height_cm: f64) -> Result<StepSummary> {
        let record = parse_record(data, RecordShape::Steps)?;
        mark_parsed();

        // only height gates the step report; a bad weight just zeroes calories
        if !(height_cm > 0.0) {
            return Err(RangeError::Profile.into());
        }

        let step_length_m = self.config.step_length_m;
        let profile = PhysicalProfile::new(weight_kg, height_cm);
        let calories_kcal = match compute_metrics(
            ActivityKind::Walking,
            record.steps,
            &record.duration,
            &profile,
            step_length_m,
            &self.config,
        ) {
            Ok(m) => m.calories_kcal,
            Err(TrackerError::Range(RangeError::Profile)) => {
                log::debug!("weight {weight_kg} is not positive, calories reported as 0");
                0.0
            }
            Err(e) => return Err(e),
        };

        Ok(StepSummary {
            steps: record.steps,
            distance_km: distance_km(record.steps, step_length_m),
            calories_kcal,
        })
    }

    /// Best-effort step report: any failure is logged and yields `""`.
    /// A non-positive weight still reports, with 0 kcal.
    pub fn step_report(&self, data: &str, weight_kg: f64, height_cm: f64) -> String {
        match self.step_summary(data, weight_kg, height_cm) {
            Ok(summary) => summary.to_string(),
            Err(e) => {
                log::warn!("step record {data:?} rejected ({}): {e}", e.kind());
                String::new()
            }
        }
    }

    pub fn training_summary(
        &self,
        data: &str,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<TrainingSummary> {
        observe("training", self.build_training_summary(data, weight_kg, height_cm))
    }

    fn build_training_summary(
        &self,
        data: &str,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<TrainingSummary> {
        let record = parse_record(data, RecordShape::Training)?;
        mark_parsed();

        let profile = PhysicalProfile::new(weight_kg, height_cm);
        profile.validate()?;

        let activity = record.activity.unwrap_or_default();
        let kind = ActivityKind::from_label(&activity)?;

        let stride = stride_length_m(profile.height_cm, &self.config);
        let m = compute_metrics(kind, record.steps, &record.duration, &profile, stride, &self.config)?;

        Ok(TrainingSummary {
            activity,
            kind,
            duration_h: as_hours_f64(&record.duration),
            distance_km: m.distance_km,
            mean_speed_kmh: m.mean_speed_kmh,
            calories_kcal: m.calories_kcal,
        })
    }

    /// Training report; the first error is logged and returned.
    pub fn training_report(&self, data: &str, weight_kg: f64, height_cm: f64) -> Result<String> {
        self.training_summary(data, weight_kg, height_cm)
            .map(|summary| summary.to_string())
            .map_err(|e| {
                log::warn!("training record {data:?} rejected ({}): {e}", e.kind());
                e
            })
    }
}

/// [`Tracker::step_summary`] with the default constants.
pub fn step_summary(data: &str, weight_kg: f64, height_cm: f64) -> Result<StepSummary> {
    Tracker::default().step_summary(data, weight_kg, height_cm)
}

/// [`Tracker::step_report`] with the default constants.
pub fn step_report(data: &str, weight_kg: f64, height_cm: f64) -> String {
    Tracker::default().step_report(data, weight_kg, height_cm)
}

/// [`Tracker::training_summary`] with the default constants.
pub fn training_summary(data: &str, weight_kg: f64, height_cm: f64) -> Result<TrainingSummary> {
    Tracker::default().training_summary(data, weight_kg, height_cm)
}

/// [`Tracker::training_report`] with the default constants.
pub fn training_report(data: &str, weight_kg: f64, height_cm: f64) -> Result<String> {
    Tracker::default().training_report(data, weight_kg, height_cm)
}
