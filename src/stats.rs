use crate::types::Episode;
use chrono::{Datelike, Weekday};

/// Count published episodes by the weekday of their publication instant,
/// evaluated in each timestamp's own embedded offset. Synthetic records
/// are excluded. The result is ranked by descending count; ties keep the
/// order the weekday was first seen in (stable sort).
pub fn weekday_distribution(episodes: &[Episode]) -> Vec<(Weekday, usize)> {
    let mut counts: Vec<(Weekday, usize)> = Vec::new();

    for episode in episodes.iter().filter(|e| e.is_published) {
        let weekday = episode.published_at.weekday();
        match counts.iter_mut().find(|(day, _)| *day == weekday) {
            Some((_, count)) => *count += 1,
            None => counts.push((weekday, 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Calendar abbreviation for a weekday, as shown in the reports.
pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}
