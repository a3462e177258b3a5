pub mod fetcher;
pub mod parser;
pub mod processor;
pub mod render;
pub mod stats;
pub mod types;

pub use fetcher::{FetchFeed, HttpFetcher};
pub use parser::parse_feed;
pub use processor::{FeedProcessor, TzAbbreviations, NEXT_EPISODE_TITLE};
pub use stats::{weekday_distribution, weekday_label};
pub use types::{Episode, FetchConfig, RawEntry, RawFeed, Result, StatsError};
