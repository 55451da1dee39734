use crate::goals::CHALLENGE_DAYS;
use crate::models::{DayCell, Goal, Progress, SummaryResponse};
use chrono::{Local, NaiveDate};

pub fn build_summary(goal: &Goal, records: &[Progress]) -> SummaryResponse {
    build_summary_at(Local::now().date_naive(), goal, records)
}

pub fn build_summary_at(today: NaiveDate, goal: &Goal, records: &[Progress]) -> SummaryResponse {
    let days = records
        .iter()
        .enumerate()
        .map(|(index, record)| DayCell {
            day: day_index(&goal.start_date, &record.date).unwrap_or(index as i64 + 1),
            date: record.date.clone(),
            completed: record.completed,
            is_today: is_today_at(today, &record.date),
            is_future: is_future_at(today, &record.date),
        })
        .collect();

    SummaryResponse {
        goal_id: goal.id.clone(),
        total_days: records.len() as u32,
        completed_days: completed_count(records),
        completion_rate: completion_rate(records),
        current_streak: current_streak_at(today, records),
        best_streak: best_streak(records),
        elapsed_percent: elapsed_percent_at(today, goal),
        days,
    }
}

pub fn completed_count(records: &[Progress]) -> u32 {
    records.iter().filter(|record| record.completed).count() as u32
}

pub fn completion_rate(records: &[Progress]) -> u8 {
    if records.is_empty() {
        return 0;
    }
    (f64::from(completed_count(records)) * 100.0 / records.len() as f64).round() as u8
}

/// Consecutive completed days ending at the newest record dated on or before
/// `today`. Records dated after `today` cannot have been acted on yet and do
/// not interrupt the run.
pub fn current_streak_at(today: NaiveDate, records: &[Progress]) -> u32 {
    let today_key = date_key(today);
    let mut streak = 0;
    for record in records.iter().rev() {
        if record.date.as_str() > today_key.as_str() {
            continue;
        }
        if !record.completed {
            break;
        }
        streak += 1;
    }
    streak
}

pub fn best_streak(records: &[Progress]) -> u32 {
    let mut best = 0;
    let mut run = 0;
    for record in records {
        if record.completed {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

/// 1-based position of `date` in a window starting at `start_date`, by
/// whole-day calendar difference.
pub fn day_index(start_date: &str, date: &str) -> Option<i64> {
    let start = parse_date(start_date)?;
    let date = parse_date(date)?;
    Some(date.signed_duration_since(start).num_days() + 1)
}

pub fn is_today_at(today: NaiveDate, date: &str) -> bool {
    date == date_key(today)
}

pub fn is_future_at(today: NaiveDate, date: &str) -> bool {
    date > date_key(today).as_str()
}

/// Share of the challenge window already elapsed, clamped to [0, 100].
pub fn elapsed_percent_at(today: NaiveDate, goal: &Goal) -> u8 {
    let (start, end) = match (parse_date(&goal.start_date), parse_date(&goal.end_date)) {
        (Some(start), Some(end)) => (start, end),
        _ => return 0,
    };

    if today < start {
        return 0;
    }
    if today > end {
        return 100;
    }

    let elapsed = today.signed_duration_since(start).num_days();
    let percent = (elapsed as f64 * 100.0 / CHALLENGE_DAYS as f64).round() as i64;
    percent.min(100) as u8
}

pub(crate) fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
