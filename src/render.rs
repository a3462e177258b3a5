use crate::stats::weekday_label;
use crate::types::Episode;
use chrono::{Local, Weekday};

const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Render the weekday histogram as a single calendar-ordered row,
/// filling in zero for weekdays with no published episodes.
pub fn render_heatmap(distribution: &[(Weekday, usize)]) -> String {
    let mut header = String::new();
    let mut row = String::new();

    for day in WEEK {
        let count = distribution
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, c)| *c)
            .unwrap_or(0);
        header.push_str(&format!("{:>5}", weekday_label(day)));
        row.push_str(&format!("{:>5}", count));
    }

    format!("Weekday Heatmap\n{header}\n{row}\n")
}

/// Render the episode table, newest first, with titles whitespace-
/// normalized, timestamps in the local display timezone, and gaps as
/// whole days.
pub fn render_episodes(episodes: &[Episode]) -> String {
    let mut ordered: Vec<&Episode> = episodes.iter().collect();
    ordered.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    let rows: Vec<[String; 4]> = ordered
        .iter()
        .map(|e| {
            [
                e.podcast.clone(),
                normalize_whitespace(&e.title),
                e.published_at
                    .with_timezone(&Local)
                    .format("%a, %b %-d, %Y %-I:%M %p")
                    .to_string(),
                e.time_since_last.num_days().to_string(),
            ]
        })
        .collect();

    let headers = ["Podcast", "Title", "Date published", "Days since last"];
    let mut widths: [usize; 4] = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::from("Episodes\n");
    out.push_str(&format_row(&headers.map(String::from), &widths));
    for row in &rows {
        out.push_str(&format_row(row, &widths));
    }
    out
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    format!(
        "{:<w0$}  {:<w1$}  {:<w2$}  {:>w3$}\n",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    )
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
