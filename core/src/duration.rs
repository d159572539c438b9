// core/src/duration.rs
use chrono::Duration;
use thiserror::Error;

const NANOS_PER_SEC: u64 = 1_000_000_000;
const NANOS_PER_MIN: u64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MIN;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,
    #[error("malformed number in duration {0:?}")]
    InvalidNumber(String),
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },
    #[error("duration {0:?} is out of range")]
    Overflow(String),
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(NANOS_PER_MIN),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

/// Fractional digits scaled into the unit. Digits past the 18th cannot move
/// the result by a whole nanosecond, so they are dropped.
fn fraction_nanos(digits: &str, scale: u64) -> u64 {
    let mut value = 0u64;
    let mut denom = 1u64;
    for b in digits.bytes().take(18) {
        value = value * 10 + u64::from(b - b'0');
        denom *= 10;
    }
    (value as f64 * (scale as f64 / denom as f64)) as u64
}

/// Parses a duration string such as `3h00m00s`, `1h30m`, `45m` or `1.5h`.
///
/// Grammar: optional sign, then one or more `<decimal><unit>` pairs with
/// units `h`, `m`, `s`, `ms`, `us`/`µs`, `ns`. A bare `0` needs no unit.
/// The sign is part of the grammar; callers that must refuse negative
/// spans check for `-` themselves.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    if input.is_empty() {
        return Err(DurationError::Empty);
    }

    let (negative, mut rest) = if let Some(tail) = input.strip_prefix('-') {
        (true, tail)
    } else if let Some(tail) = input.strip_prefix('+') {
        (false, tail)
    } else {
        (false, input)
    };

    if rest == "0" {
        return Ok(Duration::zero());
    }
    if rest.is_empty() {
        return Err(DurationError::InvalidNumber(input.to_string()));
    }

    let overflow = || DurationError::Overflow(input.to_string());
    let mut total: u64 = 0;

    while !rest.is_empty() {
        let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (int_digits, after) = rest.split_at(int_len);

        let (frac_digits, after) = match after.strip_prefix('.') {
            Some(tail) => {
                let n = tail.bytes().take_while(u8::is_ascii_digit).count();
                tail.split_at(n)
            }
            None => ("", after),
        };

        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(DurationError::InvalidNumber(input.to_string()));
        }

        let unit_len = after
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after.len());
        let (unit, tail) = after.split_at(unit_len);

        if unit.is_empty() {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let whole: u64 = if int_digits.is_empty() {
            0
        } else {
            int_digits.parse().map_err(|_| overflow())?
        };

        let mut nanos = whole.checked_mul(scale).ok_or_else(overflow)?;
        if !frac_digits.is_empty() {
            nanos = nanos
                .checked_add(fraction_nanos(frac_digits, scale))
                .ok_or_else(overflow)?;
        }

        total = total.checked_add(nanos).ok_or_else(overflow)?;
        rest = tail;
    }

    let signed = i64::try_from(total).map_err(|_| overflow())?;
    Ok(Duration::nanoseconds(if negative { -signed } else { signed }))
}

fn nanos_f64(d: &Duration) -> f64 {
    match d.num_nanoseconds() {
        Some(n) => n as f64,
        // only spans beyond ~292 years overflow i64 nanoseconds
        None => d.num_milliseconds() as f64 * 1e6,
    }
}

/// Span in fractional hours.
pub fn as_hours_f64(d: &Duration) -> f64 {
    nanos_f64(d) / NANOS_PER_HOUR as f64
}

/// Span in fractional minutes.
pub fn as_minutes_f64(d: &Duration) -> f64 {
    nanos_f64(d) / NANOS_PER_MIN as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compound_spans() {
        assert_eq!(parse_duration("3h00m00s").unwrap(), Duration::hours(3));
        assert_eq!(parse_duration("30m0s").unwrap(), Duration::minutes(30));
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::minutes(90));
        assert_eq!(parse_duration("45m").unwrap(), Duration::minutes(45));
        assert_eq!(parse_duration("250ms").unwrap(), Duration::milliseconds(250));
        assert_eq!(parse_duration("2µs").unwrap(), Duration::microseconds(2));
    }

    #[test]
    fn parses_fractions() {
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::minutes(90));
        assert_eq!(parse_duration(".5m").unwrap(), Duration::seconds(30));
        assert_eq!(parse_duration("2.s").unwrap(), Duration::seconds(2));
    }

    #[test]
    fn zero_needs_no_unit() {
        assert_eq!(parse_duration("0").unwrap(), Duration::zero());
        assert_eq!(parse_duration("+0").unwrap(), Duration::zero());
    }

    #[test]
    fn sign_is_part_of_the_grammar() {
        assert_eq!(parse_duration("-10m").unwrap(), Duration::minutes(-10));
        assert_eq!(parse_duration("+10m").unwrap(), Duration::minutes(10));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_duration(""), Err(DurationError::Empty));
        assert!(matches!(parse_duration("45"), Err(DurationError::MissingUnit(_))));
        assert!(matches!(
            parse_duration("10d"),
            Err(DurationError::UnknownUnit { ref unit, .. }) if unit == "d"
        ));
        assert!(matches!(parse_duration("."), Err(DurationError::InvalidNumber(_))));
        assert!(matches!(parse_duration("h"), Err(DurationError::InvalidNumber(_))));
        assert!(matches!(
            parse_duration("1h+30m"),
            Err(DurationError::UnknownUnit { ref unit, .. }) if unit == "h+"
        ));
        assert!(matches!(parse_duration("-"), Err(DurationError::InvalidNumber(_))));
    }

    #[test]
    fn rejects_overflow() {
        assert!(matches!(
            parse_duration("9999999999999h"),
            Err(DurationError::Overflow(_))
        ));
    }

    #[test]
    fn converts_to_hours_and_minutes() {
        let d = Duration::minutes(90);
        assert!((as_hours_f64(&d) - 1.5).abs() < 1e-12);
        assert!((as_minutes_f64(&d) - 90.0).abs() < 1e-12);
    }
}
