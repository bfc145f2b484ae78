use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::io::{Read, Write};
use std::path::Path;

use super::io;
use crate::config::settings::AppConfig;
use crate::domain::{ScoredVideo, Video};
use crate::errors::parse_context;
use crate::ranking;

pub struct RankingService {
    config: AppConfig,
}

impl RankingService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Reads videos from `input` (stdin if `None`), ranks them and writes the
    /// ranked list to `output` (stdout if `None`). Nothing is written unless
    /// ranking succeeds; `input` and `output` may be the same file.
    pub fn run(&self, input: Option<&Path>, output: Option<&Path>) -> Result<()> {
        info!(
            "Ranking videos from {} into {}",
            io::describe_input(input),
            io::describe_output(output)
        );

        let videos = io::read_videos(io::open_input(input)?)?;
        let ranked = self.rank(&videos)?;
        io::write_output(output, &ranked, self.config.output.pretty)?;

        info!("Ranked {} videos", ranked.len());
        Ok(())
    }

    pub fn rank_stream<R: Read, W: Write>(&self, reader: R, writer: W) -> Result<usize> {
        let videos = io::read_videos(reader)?;
        let ranked = self.rank(&videos)?;
        io::write_videos(writer, &ranked, self.config.output.pretty)?;
        Ok(ranked.len())
    }

    pub fn rank(&self, videos: &[Video]) -> Result<Vec<Video>> {
        let current_time = self.reference_time()?;
        debug!("Scoring {} videos against {}", videos.len(), current_time);

        let ranked = ranking::rank_videos(videos, current_time, &self.config.scoring)
            .context("Failed to rank videos")?;
        Ok(ranked)
    }

    pub fn rank_with_scores(&self, videos: &[Video]) -> Result<Vec<ScoredVideo>> {
        let current_time = self.reference_time()?;
        debug!("Scoring {} videos against {}", videos.len(), current_time);

        let ranked = ranking::rank_with_scores(videos, current_time, &self.config.scoring)
            .context("Failed to rank videos")?;
        Ok(ranked)
    }

    /// The pinned reference instant if one is configured, else the wall clock.
    pub fn reference_time(&self) -> Result<DateTime<Utc>> {
        match &self.config.reference_time {
            Some(value) => {
                let pinned = ranking::parse_timestamp(value)
                    .with_context(|| parse_context("reference time"))?;
                debug!("Using pinned reference time {}", pinned);
                Ok(pinned)
            }
            None => Ok(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(now: &str) -> RankingService {
        let config = AppConfig::new().with_reference_time(Some(now.to_string()));
        RankingService::new(config)
    }

    #[test]
    fn test_rank_stream_orders_and_preserves_fields() {
        let input = r#"[
            {"id": "C", "createdAt": "2024-01-10T00:00:00Z", "likeCount": 0, "comments": []},
            {"id": "A", "createdAt": "2024-01-09T00:00:00Z", "likeCount": 10, "comments": ["c1", "c2"], "url": "https://example.com/a"},
            {"id": "B", "createdAt": "2023-12-01T00:00:00Z", "likeCount": 50, "comments": []}
        ]"#;
        let mut out = Vec::new();

        let count = service("2024-01-10T00:00:00Z")
            .rank_stream(input.as_bytes(), &mut out)
            .unwrap();

        assert_eq!(count, 3);
        let ranked: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let ids: Vec<&str> = ranked
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
        assert_eq!(ranked[1]["url"], "https://example.com/a");
        assert_eq!(ranked[1]["comments"], serde_json::json!(["c1", "c2"]));
    }

    #[test]
    fn test_invalid_reference_time_is_an_error() {
        assert!(service("not a time").reference_time().is_err());
    }

    #[test]
    fn test_malformed_record_aborts_without_output() {
        let input = r#"[{"id": "ok", "createdAt": "2024-01-09T00:00:00Z"}, {"id": "bad"}]"#;
        let mut out = Vec::new();

        let err = service("2024-01-10T00:00:00Z")
            .rank_stream(input.as_bytes(), &mut out)
            .unwrap_err();

        assert!(out.is_empty());
        assert!(err.downcast_ref::<crate::errors::MalformedInputError>().is_some());
    }
}
