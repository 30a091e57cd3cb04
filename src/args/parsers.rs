use std::time::Duration;

use url::Url;

use crate::error::{AppError, AppResult, ValidationError};

pub(crate) fn parse_target_url(s: &str) -> Result<String, ValidationError> {
    let value = s.trim();
    let parsed = Url::parse(value).map_err(|err| ValidationError::InvalidUrl {
        url: value.to_owned(),
        source: err,
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(value.to_owned()),
        other => Err(ValidationError::UnsupportedScheme {
            url: value.to_owned(),
            scheme: other.to_owned(),
        }),
    }
}

/// Milliseconds per supported duration unit; a bare number means seconds.
const DURATION_UNITS_MS: [(&str, u64); 4] =
    [("ms", 1), ("s", 1_000), ("m", 60_000), ("h", 3_600_000)];

pub(crate) fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    let value = s.trim();
    if value.is_empty() {
        return Err(AppError::validation(ValidationError::DurationEmpty));
    }

    let split_at = value
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(value.len());
    let (amount, unit) = value.split_at(split_at);
    if amount.is_empty() {
        return Err(AppError::validation(
            ValidationError::InvalidDurationFormat {
                value: value.to_owned(),
            },
        ));
    }
    let amount: u64 = amount.parse().map_err(|err| {
        AppError::validation(ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })
    })?;

    let unit = if unit.is_empty() { "s" } else { unit };
    let scale_ms = DURATION_UNITS_MS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, scale)| *scale)
        .ok_or_else(|| {
            AppError::validation(ValidationError::InvalidDurationUnit {
                unit: unit.to_owned(),
            })
        })?;
    let millis = amount
        .checked_mul(scale_ms)
        .ok_or_else(|| AppError::validation(ValidationError::DurationOverflow))?;

    if millis == 0 {
        return Err(AppError::validation(ValidationError::DurationZero));
    }
    Ok(Duration::from_millis(millis))
}
