use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use serde_json::Value;

use crate::config::settings::ScoringSettings;
use crate::domain::{ScoreBreakdown, Video};
use crate::errors::MalformedInputError;

// ISO-8601 shapes accepted after RFC 3339 fails.
const FALLBACK_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Relevance score of a single video, never negative.
///
/// `current_time` is the instant the video's age is measured against.
pub fn calculate_score(
    video: &Video,
    current_time: DateTime<Utc>,
    settings: &ScoringSettings,
) -> Result<f64, MalformedInputError> {
    score_breakdown(video, current_time, settings).map(|b| b.score)
}

/// Every intermediate value of the score computation.
pub fn score_breakdown(
    video: &Video,
    current_time: DateTime<Utc>,
    settings: &ScoringSettings,
) -> Result<ScoreBreakdown, MalformedInputError> {
    let created_at = created_at_of(video)?;
    let like_count = like_count_of(video)?;
    let comment_count = comment_count_of(video)?;
    let days_gone = calculate_days_gone(created_at, current_time);

    let raw_score = like_count * settings.like_weight
        + comment_count as f64 * settings.comment_weight
        - days_gone as f64 * settings.daily_decay;

    Ok(ScoreBreakdown {
        like_count,
        comment_count,
        days_gone,
        raw_score,
        score: raw_score.max(0.0),
    })
}

/// Parses an ISO-8601 timestamp with an explicit offset. A `Z` designator
/// is read as `+00:00`; timestamps without an offset are rejected.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, MalformedInputError> {
    let normalized = value.trim().replace('Z', "+00:00");

    let rfc3339_err = match DateTime::parse_from_rfc3339(&normalized) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(e) => e,
    };

    FALLBACK_FORMATS
        .iter()
        .find_map(|fmt| DateTime::<FixedOffset>::parse_from_str(&normalized, fmt).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| MalformedInputError::InvalidCreatedAt {
            value: value.to_string(),
            source: rfc3339_err,
        })
}

/// Whole days elapsed, floored: 23 hours is 0 days, one hour in the
/// future is -1.
pub fn calculate_days_gone(created_at: DateTime<Utc>, current_time: DateTime<Utc>) -> i64 {
    let elapsed = current_time.signed_duration_since(created_at);
    let whole_days = elapsed.num_days();
    let remainder = elapsed - TimeDelta::days(whole_days);
    if remainder < TimeDelta::zero() {
        whole_days - 1
    } else {
        whole_days
    }
}

fn created_at_of(video: &Video) -> Result<DateTime<Utc>, MalformedInputError> {
    match video.created_at() {
        Some(Value::String(s)) => parse_timestamp(s),
        Some(other) => Err(MalformedInputError::CreatedAtNotString {
            value: other.clone(),
        }),
        None => Err(MalformedInputError::MissingCreatedAt),
    }
}

fn like_count_of(video: &Video) -> Result<f64, MalformedInputError> {
    match video.like_count() {
        None => Ok(0.0),
        Some(Value::Bool(flag)) => Ok(f64::from(u8::from(*flag))),
        Some(value) => value
            .as_f64()
            .ok_or_else(|| MalformedInputError::InvalidLikeCount {
                value: value.clone(),
            }),
    }
}

// Strings count characters and objects count keys.
fn comment_count_of(video: &Video) -> Result<usize, MalformedInputError> {
    match video.comments() {
        None => Ok(0),
        Some(Value::Array(comments)) => Ok(comments.len()),
        Some(Value::Object(comments)) => Ok(comments.len()),
        Some(Value::String(comments)) => Ok(comments.chars().count()),
        Some(other) => Err(MalformedInputError::InvalidComments {
            value: other.clone(),
        }),
    }
}
