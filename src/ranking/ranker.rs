use chrono::{DateTime, Utc};

use super::score::score_breakdown;
use crate::config::settings::ScoringSettings;
use crate::domain::{ScoredVideo, Video};
use crate::errors::MalformedInputError;

/// Returns the videos ordered by descending score. Videos with equal
/// scores keep their input order. Fails on the first unscorable video.
pub fn rank_videos(
    videos: &[Video],
    current_time: DateTime<Utc>,
    settings: &ScoringSettings,
) -> Result<Vec<Video>, MalformedInputError> {
    let ranked = rank_with_scores(videos, current_time, settings)?;
    Ok(ranked.into_iter().map(|scored| scored.video).collect())
}

/// Same as [`rank_videos`], measured against the wall clock. The clock is
/// read once so the whole batch shares one reference instant.
pub fn rank_videos_now(
    videos: &[Video],
    settings: &ScoringSettings,
) -> Result<Vec<Video>, MalformedInputError> {
    rank_videos(videos, Utc::now(), settings)
}

pub fn rank_with_scores(
    videos: &[Video],
    current_time: DateTime<Utc>,
    settings: &ScoringSettings,
) -> Result<Vec<ScoredVideo>, MalformedInputError> {
    let mut scored = score_all(videos, current_time, settings)?;
    sort_by_score_desc(&mut scored);
    Ok(scored)
}

fn score_all(
    videos: &[Video],
    current_time: DateTime<Utc>,
    settings: &ScoringSettings,
) -> Result<Vec<ScoredVideo>, MalformedInputError> {
    videos
        .iter()
        .map(|video| {
            score_breakdown(video, current_time, settings).map(|breakdown| ScoredVideo {
                video: video.clone(),
                breakdown,
            })
        })
        .collect()
}

// `sort_by` is stable, which keeps ties in input order.
fn sort_by_score_desc(scored: &mut [ScoredVideo]) {
    scored.sort_by(|a, b| b.breakdown.score.total_cmp(&a.breakdown.score));
}
