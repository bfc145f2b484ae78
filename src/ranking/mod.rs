pub mod ranker;
pub mod score;

pub use ranker::{rank_videos, rank_videos_now, rank_with_scores};
pub use score::{calculate_score, parse_timestamp, score_breakdown};
