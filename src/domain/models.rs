use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const CREATED_AT_KEY: &str = "createdAt";
// Older producers emit the misspelled key.
const LEGACY_CREATED_AT_KEY: &str = "createAt";
const LIKE_COUNT_KEY: &str = "likeCount";
const COMMENTS_KEY: &str = "comments";

/// One video record. Wraps the full JSON object so fields the ranking
/// never looks at (title, id, url, ...) survive untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Video {
    fields: Map<String, Value>,
}

impl Video {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Raw `createdAt` value, falling back to the legacy `createAt` key.
    pub fn created_at(&self) -> Option<&Value> {
        self.non_null(CREATED_AT_KEY)
            .or_else(|| self.non_null(LEGACY_CREATED_AT_KEY))
    }

    pub fn like_count(&self) -> Option<&Value> {
        self.non_null(LIKE_COUNT_KEY)
    }

    pub fn comments(&self) -> Option<&Value> {
        self.non_null(COMMENTS_KEY)
    }

    /// Human-readable label for listings: `title`, else `id`, else empty.
    pub fn label(&self) -> String {
        match self.get("title").or_else(|| self.get("id")) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    fn non_null(&self, key: &str) -> Option<&Value> {
        self.fields.get(key).filter(|v| !v.is_null())
    }
}

/// A video together with the values that produced its score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredVideo {
    pub video: Video,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub like_count: f64,
    pub comment_count: usize,
    pub days_gone: i64,
    pub raw_score: f64,
    pub score: f64,
}
