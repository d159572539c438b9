use chrono::Duration;

use crate::duration::parse_duration;
use crate::error::{FormatError, RangeError, Result};
use crate::types::{ActivityRecord, RecordShape};

/// Decodes a raw record into typed fields.
///
/// Checks run in order and the first failure wins:
/// 1. no whitespace anywhere
/// 2. exactly `shape.field_count()` comma-separated fields
/// 3. step field: no `-`, one optional leading `+`, ASCII digits only, > 0
/// 4. activity field (training shape): taken verbatim
/// 5. duration field: no `-`, valid duration grammar, > 0
pub fn parse_record(data: &str, shape: RecordShape) -> Result<ActivityRecord> {
    if data.chars().any(char::is_whitespace) {
        return Err(FormatError::Whitespace.into());
    }

    let parts: Vec<&str> = data.split(',').collect();
    let expected = shape.field_count();
    if parts.len() != expected {
        return Err(FormatError::FieldCount {
            expected,
            found: parts.len(),
        }
        .into());
    }

    let steps = parse_steps(parts[0])?;
    let activity = match shape {
        RecordShape::Training => Some(parts[1].to_string()),
        RecordShape::Steps => None,
    };
    let duration = parse_positive_duration(parts[expected - 1])?;

    Ok(ActivityRecord {
        steps,
        activity,
        duration,
    })
}

fn parse_steps(raw: &str) -> Result<u64> {
    if raw.contains('-') {
        return Err(FormatError::NegativeSteps.into());
    }

    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::InvalidSteps(raw.to_string()).into());
    }

    // only digits left, so a parse failure can only be overflow
    let steps: u64 = digits
        .parse()
        .map_err(|_| FormatError::StepsOverflow(raw.to_string()))?;

    if steps == 0 {
        return Err(RangeError::Steps.into());
    }
    Ok(steps)
}

fn parse_positive_duration(raw: &str) -> Result<Duration> {
    if raw.contains('-') {
        return Err(FormatError::NegativeDuration.into());
    }

    let duration = parse_duration(raw)?;
    if duration <= Duration::zero() {
        return Err(RangeError::Duration.into());
    }
    Ok(duration)
}
