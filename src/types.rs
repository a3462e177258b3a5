use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize, Serializer};

/// A feed as handed to the processor: the channel title plus its entries
/// in the order the feed listed them (conventionally newest first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFeed {
    pub title: String,
    pub entries: Vec<RawEntry>,
}

/// One feed item. `published` is the verbatim RFC-822-style publication
/// date string from the feed; it is not interpreted until processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    pub title: String,
    pub published: String,
}

/// One published (or predicted) episode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Episode {
    /// Feed title, constant across all episodes from one feed.
    pub podcast: String,
    pub title: String,
    /// Publication instant, keeping the offset the feed declared.
    pub published_at: DateTime<FixedOffset>,
    /// Gap to the previous episode in chronological order; zero for the
    /// earliest episode. For the synthetic record this is how overdue the
    /// predicted episode is relative to now (negative if not yet due).
    #[serde(serialize_with = "duration_as_seconds")]
    pub time_since_last: Duration,
    /// False only for the one synthetic next-episode record per feed.
    pub is_published: bool,
}

fn duration_as_seconds<S>(duration: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_i64(duration.num_seconds())
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "podcast-stats/0.1".to_string(),
            timeout_seconds: 30,
            max_redirects: 5,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("No usable feed found at {url}")]
    InvalidFeed { url: String },

    #[error("Unparseable publication date {value:?} on entry {title:?}")]
    DateParse { title: String, value: String },
}

pub type Result<T> = std::result::Result<T, StatsError>;
