use crate::types::{Episode, RawFeed, Result, StatsError};
use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, TimeZone, Utc};
use std::collections::HashMap;
use tracing::debug;

/// Sentinel title for the one predicted-next-episode record per feed.
pub const NEXT_EPISODE_TITLE: &str = "[Next unpublished episode]";

/// Standard RSS publication date after the weekday prefix, e.g.
/// "01 Jan 2024 10:00:00 +0000".
const RSS_DATE_FORMAT: &str = "%d %b %Y %H:%M:%S %z";
/// The same format with the zone token split off, used on the fallback path.
const RSS_DATE_NAIVE_FORMAT: &str = "%d %b %Y %H:%M:%S";

/// Mapping from timezone abbreviations to UTC offsets, for feeds whose
/// dates end in a named zone ("PST") instead of a numeric offset.
#[derive(Debug, Clone)]
pub struct TzAbbreviations {
    map: HashMap<String, FixedOffset>,
}

fn offset_hours(hours: i32) -> FixedOffset {
    FixedOffset::east_opt(hours * 3600).expect("offset within valid range")
}

impl Default for TzAbbreviations {
    fn default() -> Self {
        // The obsolete zone names RFC 822 allows in date-times.
        let mut map = HashMap::new();
        for abbr in ["UT", "GMT", "UTC"] {
            map.insert(abbr.to_string(), offset_hours(0));
        }
        map.insert("EST".to_string(), offset_hours(-5));
        map.insert("EDT".to_string(), offset_hours(-4));
        map.insert("CST".to_string(), offset_hours(-6));
        map.insert("CDT".to_string(), offset_hours(-5));
        map.insert("MST".to_string(), offset_hours(-7));
        map.insert("MDT".to_string(), offset_hours(-6));
        map.insert("PST".to_string(), offset_hours(-8));
        map.insert("PDT".to_string(), offset_hours(-7));
        Self { map }
    }
}

impl TzAbbreviations {
    pub fn with_mapping(mut self, abbr: &str, offset: FixedOffset) -> Self {
        self.map.insert(abbr.to_string(), offset);
        self
    }

    pub fn get(&self, abbr: &str) -> Option<FixedOffset> {
        self.map.get(abbr).copied()
    }
}

/// Turns a raw feed into a chronological episode sequence enriched with
/// inter-episode gaps and one predicted next-episode record.
#[derive(Debug, Clone, Default)]
pub struct FeedProcessor {
    timezones: TzAbbreviations,
}

impl FeedProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the timezone abbreviation table for feeds using a zone name
    /// the default table does not cover.
    pub fn with_timezone(mut self, abbr: &str, offset: FixedOffset) -> Self {
        self.timezones = self.timezones.with_mapping(abbr, offset);
        self
    }

    /// Process a fetched feed into episodes ordered by ascending
    /// publication date, followed by the synthetic next-episode record.
    ///
    /// The output always has `entries.len() + 1` records. An absent or
    /// entry-less feed is an [`StatsError::InvalidFeed`].
    pub fn process(&self, raw: Option<RawFeed>, url: &str) -> Result<Vec<Episode>> {
        let raw = raw.ok_or_else(|| StatsError::InvalidFeed {
            url: url.to_string(),
        })?;
        if raw.entries.is_empty() {
            return Err(StatsError::InvalidFeed {
                url: url.to_string(),
            });
        }

        debug!("Processing feed {:?} ({} entries)", raw.title, raw.entries.len());

        let mut episodes = Vec::with_capacity(raw.entries.len() + 1);
        let mut last_published: Option<DateTime<FixedOffset>> = None;

        // Feeds list newest first; walk them backwards so gaps look forward.
        for entry in raw.entries.iter().rev() {
            let published_at = self.parse_pub_date(&entry.title, &entry.published)?;
            let time_since_last = match last_published {
                None => Duration::zero(),
                Some(prev) => published_at.signed_duration_since(prev),
            };

            episodes.push(Episode {
                podcast: raw.title.clone(),
                title: entry.title.clone(),
                published_at,
                time_since_last,
                is_published: true,
            });
            last_published = Some(published_at);
        }

        let last_published = match last_published {
            Some(dt) => dt,
            None => {
                return Err(StatsError::InvalidFeed {
                    url: url.to_string(),
                })
            }
        };

        let predicted = last_published + average_gap(&episodes);
        episodes.push(Episode {
            podcast: raw.title,
            title: NEXT_EPISODE_TITLE.to_string(),
            published_at: predicted,
            time_since_last: Utc::now().signed_duration_since(predicted.with_timezone(&Utc)),
            is_published: false,
        });

        Ok(episodes)
    }

    /// Parse an entry's publication date string. Tries the standard RSS
    /// format first; on failure, splits off the trailing zone token and
    /// re-parses the rest against the abbreviation table.
    fn parse_pub_date(&self, entry_title: &str, value: &str) -> Result<DateTime<FixedOffset>> {
        let value = value.trim();
        // The leading "Mon, " weekday token is informational and feeds get
        // it wrong often enough; parse from the day number onward.
        let datetime_part = match value.split_once(',') {
            Some((_, rest)) => rest.trim_start(),
            None => value,
        };

        if let Ok(dt) = DateTime::parse_from_str(datetime_part, RSS_DATE_FORMAT) {
            return Ok(dt);
        }

        let date_error = || StatsError::DateParse {
            title: entry_title.to_string(),
            value: value.to_string(),
        };

        let (naive_part, abbr) = datetime_part.rsplit_once(' ').ok_or_else(date_error)?;
        let offset = self.timezones.get(abbr).ok_or_else(date_error)?;
        let naive = NaiveDateTime::parse_from_str(naive_part.trim_end(), RSS_DATE_NAIVE_FORMAT)
            .map_err(|_| date_error())?;

        offset
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(date_error)
    }
}

/// Mean gap between consecutive episodes, over strictly positive day-gaps
/// only. A feed with no positive gap (single episode, or all same-day) has
/// no cadence to extrapolate from and gets a zero-day mean.
fn average_gap(episodes: &[Episode]) -> Duration {
    let positive_days: Vec<i64> = episodes
        .iter()
        .map(|e| e.time_since_last.num_days())
        .filter(|days| *days > 0)
        .collect();

    if positive_days.is_empty() {
        return Duration::zero();
    }

    let mean_days = positive_days.iter().sum::<i64>() as f64 / positive_days.len() as f64;
    Duration::seconds((mean_days * 86_400.0).round() as i64)
}
