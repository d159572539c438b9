// core/src/physics.rs
use chrono::Duration;

use crate::config::TrackerConfig;
use crate::duration::{as_hours_f64, as_minutes_f64};
use crate::error::{RangeError, Result};
use crate::types::{ActivityKind, DerivedMetrics, PhysicalProfile};

pub const M_IN_KM: f64 = 1000.0;
pub const CM_IN_M: f64 = 100.0;
pub const MIN_IN_H: f64 = 60.0;

// --- RoundTo trait (public, used for JSON output) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 {
            return self.round();
        }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Stride length (m) estimated from height (cm).
#[inline]
pub fn stride_length_m(height_cm: f64, cfg: &TrackerConfig) -> f64 {
    height_cm * cfg.stride_coefficient / CM_IN_M
}

/// Distance (km) = steps × step length (m) / 1000.
#[inline]
pub fn distance_km(steps: u64, step_length_m: f64) -> f64 {
    steps as f64 * step_length_m / M_IN_KM
}

/// Mean speed (km/h) over the whole span. 0 for a non-positive span.
pub fn mean_speed_kmh(distance_km: f64, duration: &Duration) -> f64 {
    if *duration <= Duration::zero() {
        return 0.0;
    }
    distance_km / as_hours_f64(duration)
}

/// Calories = weight × mean speed × minutes / 60, scaled per activity.
pub fn calories_kcal(
    kind: ActivityKind,
    weight_kg: f64,
    mean_speed_kmh: f64,
    duration: &Duration,
    cfg: &TrackerConfig,
) -> f64 {
    let coefficient = match kind {
        ActivityKind::Walking => cfg.walking_calories_coefficient,
        ActivityKind::Running => cfg.running_calories_coefficient,
    };
    (weight_kg * mean_speed_kmh * as_minutes_f64(duration)) / MIN_IN_H * coefficient
}

/// Validates inputs, then derives distance, speed and calories for a
/// session covered with the given per-step length.
pub fn compute_metrics(
    kind: ActivityKind,
    steps: u64,
    duration: &Duration,
    profile: &PhysicalProfile,
    step_length_m: f64,
    cfg: &TrackerConfig,
) -> Result<DerivedMetrics> {
    profile.validate()?;
    if steps == 0 {
        return Err(RangeError::Steps.into());
    }
    if *duration <= Duration::zero() {
        return Err(RangeError::Duration.into());
    }

    let dist = distance_km(steps, step_length_m);
    let speed = mean_speed_kmh(dist, duration);
    let kcal = calories_kcal(kind, profile.weight_kg, speed, duration, cfg);

    log::debug!(
        "{kind}: steps={steps} step_len={step_length_m:.4}m dist={dist:.4}km speed={speed:.4}km/h kcal={kcal:.4}"
    );

    Ok(DerivedMetrics {
        distance_km: dist,
        mean_speed_kmh: speed,
        calories_kcal: kcal,
    })
}

/// Calories for a training session, with stride length taken from height.
pub fn spent_calories(
    kind: ActivityKind,
    steps: u64,
    profile: &PhysicalProfile,
    duration: &Duration,
    cfg: &TrackerConfig,
) -> Result<f64> {
    let stride = stride_length_m(profile.height_cm, cfg);
    compute_metrics(kind, steps, duration, profile, stride, cfg).map(|m| m.calories_kcal)
}

pub fn walking_spent_calories(
    steps: u64,
    profile: &PhysicalProfile,
    duration: &Duration,
    cfg: &TrackerConfig,
) -> Result<f64> {
    spent_calories(ActivityKind::Walking, steps, profile, duration, cfg)
}

pub fn running_spent_calories(
    steps: u64,
    profile: &PhysicalProfile,
    duration: &Duration,
    cfg: &TrackerConfig,
) -> Result<f64> {
    spent_calories(ActivityKind::Running, steps, profile, duration, cfg)
}
