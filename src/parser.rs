use crate::types::{RawEntry, RawFeed, Result, StatsError};
use rss::Channel;
use tracing::{debug, info};

/// Parse RSS content into a [`RawFeed`], keeping each item's `pubDate`
/// string verbatim so the processor can apply its own date handling.
pub fn parse_feed(content: &str) -> Result<RawFeed> {
    debug!("Parsing feed content ({} bytes)", content.len());

    let channel = Channel::read_from(content.as_bytes())
        .map_err(|e| StatsError::Parse(format!("Failed to parse feed: {}", e)))?;

    let title = channel.title().to_string();

    let mut entries = Vec::new();
    for item in channel.items() {
        let entry_title = item
            .title()
            .map(|t| t.to_string())
            .unwrap_or_else(|| "Untitled".to_string());

        // An item with no pubDate carries nothing we can compute with.
        let Some(published) = item.pub_date() else {
            debug!("Skipping entry without publication date: {}", entry_title);
            continue;
        };

        entries.push(RawEntry {
            title: entry_title,
            published: published.to_string(),
        });
    }

    info!("Parsed feed {:?} with {} entries", title, entries.len());

    Ok(RawFeed { title, entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Test Cast</title>
    <link>https://example.com</link>
    <description>A test feed</description>
    <item>
      <title>Episode Two</title>
      <pubDate>Wed, 03 Jan 2024 10:00:00 +0000</pubDate>
    </item>
    <item>
      <title>Episode One</title>
      <pubDate>Mon, 01 Jan 2024 10:00:00 +0000</pubDate>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn parses_title_and_entries_in_feed_order() {
        let feed = parse_feed(FEED).unwrap();
        assert_eq!(feed.title, "Test Cast");
        assert_eq!(feed.entries.len(), 2);
        assert_eq!(feed.entries[0].title, "Episode Two");
        assert_eq!(feed.entries[0].published, "Wed, 03 Jan 2024 10:00:00 +0000");
        assert_eq!(feed.entries[1].title, "Episode One");
    }

    #[test]
    fn rejects_non_feed_content() {
        assert!(parse_feed("this is not xml").is_err());
    }
}
