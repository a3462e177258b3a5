use chrono::{Duration, FixedOffset, TimeZone, Weekday};
use podcast_stats::{weekday_distribution, weekday_label, Episode};
use pretty_assertions::assert_eq;

fn episode_on(year: i32, month: u32, day: u32, hour: u32, offset_hours: i32, published: bool) -> Episode {
    let offset = FixedOffset::east_opt(offset_hours * 3600).unwrap();
    Episode {
        podcast: "Test Cast".to_string(),
        title: "Episode".to_string(),
        published_at: offset.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap(),
        time_since_last: Duration::zero(),
        is_published: published,
    }
}

#[test]
fn counts_rank_by_descending_frequency() {
    // Three Mondays and one Tuesday in January 2024.
    let episodes = vec![
        episode_on(2024, 1, 1, 10, 0, true),
        episode_on(2024, 1, 8, 10, 0, true),
        episode_on(2024, 1, 15, 10, 0, true),
        episode_on(2024, 1, 2, 10, 0, true),
    ];

    let distribution = weekday_distribution(&episodes);
    assert_eq!(
        distribution,
        vec![(Weekday::Mon, 3), (Weekday::Tue, 1)]
    );
}

#[test]
fn synthetic_records_are_never_counted() {
    let episodes = vec![
        episode_on(2024, 1, 1, 10, 0, true),
        episode_on(2024, 1, 8, 10, 0, false),
    ];

    let distribution = weekday_distribution(&episodes);
    assert_eq!(distribution, vec![(Weekday::Mon, 1)]);
}

#[test]
fn ties_keep_first_seen_order() {
    // Tue, Thu, Tue, Thu: equal counts, Tuesday seen first.
    let episodes = vec![
        episode_on(2024, 1, 2, 10, 0, true),
        episode_on(2024, 1, 4, 10, 0, true),
        episode_on(2024, 1, 9, 10, 0, true),
        episode_on(2024, 1, 11, 10, 0, true),
    ];

    let distribution = weekday_distribution(&episodes);
    assert_eq!(
        distribution,
        vec![(Weekday::Tue, 2), (Weekday::Thu, 2)]
    );
}

#[test]
fn weekday_is_taken_in_the_embedded_offset() {
    // 23:00 Tuesday in -08:00 is already Wednesday morning in UTC; the
    // count must stay on Tuesday.
    let episodes = vec![episode_on(2024, 1, 2, 23, -8, true)];

    let distribution = weekday_distribution(&episodes);
    assert_eq!(distribution, vec![(Weekday::Tue, 1)]);
}

#[test]
fn empty_input_yields_an_empty_distribution() {
    assert_eq!(weekday_distribution(&[]), Vec::new());
}

#[test]
fn labels_cover_the_whole_week() {
    let labels: Vec<&str> = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ]
    .into_iter()
    .map(weekday_label)
    .collect();
    assert_eq!(labels, vec!["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
}
