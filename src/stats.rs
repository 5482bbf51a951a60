use crate::models::{DailyLog, DailyMoodPoint, MoodSummaryResponse, TagCount, WeeklyMoodPoint};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::{BTreeMap, HashMap};

const WEEK_COUNT: usize = 8;
const TOP_TAGS: usize = 5;

/// First and last date the summary for `today` reads from.
pub fn summary_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first_week = week_start(today) - Duration::weeks(WEEK_COUNT as i64 - 1);
    (first_week, today)
}

pub fn build_summary_at(today: NaiveDate, logs: &[DailyLog]) -> MoodSummaryResponse {
    // Moods are unbounded, so sums are widened.
    let mut days: BTreeMap<NaiveDate, (u32, i128)> = BTreeMap::new();
    for log in logs {
        let Ok(date) = NaiveDate::parse_from_str(&log.date, "%Y-%m-%d") else {
            continue;
        };
        let entry = days.entry(date).or_default();
        entry.0 += 1;
        entry.1 += i128::from(log.mood);
    }

    let mut last_7_days = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        let (entries, total) = days.get(&date).copied().unwrap_or_default();
        last_7_days.push(DailyMoodPoint {
            date: date.to_string(),
            entries,
            avg_mood: average(total, entries),
        });
    }

    let current_week_start = week_start(today);
    let mut weekly_averages = Vec::with_capacity(WEEK_COUNT);
    for offset in (0..WEEK_COUNT).rev() {
        let start = current_week_start - Duration::weeks(offset as i64);
        let end = start + Duration::days(6);

        let (entries, total) = days
            .range(start..=end)
            .fold((0u32, 0i128), |(entries, total), (_, (count, sum))| {
                (entries + count, total + sum)
            });

        weekly_averages.push(WeeklyMoodPoint {
            week: week_label(start),
            start_date: start.to_string(),
            end_date: end.to_string(),
            entries,
            avg_mood: average(total, entries),
        });
    }

    MoodSummaryResponse {
        last_7_days,
        weekly_averages,
        top_tags: top_tags(logs),
    }
}

fn top_tags(logs: &[DailyLog]) -> Vec<TagCount> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for tag in logs.iter().flat_map(|log| log.tags.iter()) {
        let tag = tag.trim();
        if !tag.is_empty() {
            *counts.entry(tag).or_default() += 1;
        }
    }

    let mut tags: Vec<TagCount> = counts
        .into_iter()
        .map(|(tag, count)| TagCount {
            tag: tag.to_string(),
            count,
        })
        .collect();
    tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    tags.truncate(TOP_TAGS);
    tags
}

fn average(total: i128, entries: u32) -> Option<f64> {
    (entries > 0).then(|| total as f64 / f64::from(entries))
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}
