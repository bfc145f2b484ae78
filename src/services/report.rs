use anyhow::Result;
use colored::Colorize;
use log::info;
use std::io::{Read, Write};
use std::path::Path;

use super::io;
use super::ranking::RankingService;
use crate::domain::ScoredVideo;

/// Prints the ranking as a table of scores instead of JSON.
pub struct ScoreReportService {
    ranking: RankingService,
}

impl ScoreReportService {
    pub fn new(ranking: RankingService) -> Self {
        Self { ranking }
    }

    pub fn run(&self, input: Option<&Path>) -> Result<()> {
        info!("Scoring videos from {}", io::describe_input(input));

        let reader = io::open_input(input)?;
        let writer = std::io::stdout().lock();
        self.report_stream(reader, writer)?;
        Ok(())
    }

    pub fn report_stream<R: Read, W: Write>(&self, reader: R, mut writer: W) -> Result<usize> {
        let videos = io::read_videos(reader)?;
        let ranked = self.ranking.rank_with_scores(&videos)?;

        writeln!(writer, "{}", header())?;
        for (idx, scored) in ranked.iter().enumerate() {
            writeln!(writer, "{}", format_row(idx + 1, scored))?;
        }
        writer.flush()?;
        Ok(ranked.len())
    }
}

fn header() -> String {
    format!(
        "{:>4}  {:>10}  {:>8}  {:>8}  {:>6}  {}",
        "rank", "score", "likes", "comments", "days", "video"
    )
}

fn format_row(rank: usize, scored: &ScoredVideo) -> String {
    let b = &scored.breakdown;
    let score = format!("{:>10.2}", b.score);
    let score = if b.score > 0.0 {
        score.green().bold()
    } else {
        score.dimmed()
    };
    format!(
        "{:>4}  {}  {:>8}  {:>8}  {:>6}  {}",
        rank,
        score,
        b.like_count,
        b.comment_count,
        b.days_gone,
        scored.video.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::AppConfig;

    #[test]
    fn test_report_lists_videos_in_rank_order() {
        colored::control::set_override(false);
        let config = AppConfig::new().with_reference_time(Some("2024-01-10T00:00:00Z".into()));
        let service = ScoreReportService::new(RankingService::new(config));
        let input = r#"[
            {"title": "quiet", "createdAt": "2024-01-10T00:00:00Z"},
            {"title": "loud", "createdAt": "2024-01-09T00:00:00Z", "likeCount": 10, "comments": [1, 2]}
        ]"#;
        let mut out = Vec::new();

        let count = service.report_stream(input.as_bytes(), &mut out).unwrap();

        assert_eq!(count, 2);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("score"));
        assert!(lines[1].contains("21.60") && lines[1].ends_with("loud"));
        assert!(lines[2].contains("0.00") && lines[2].ends_with("quiet"));
    }
}
