use crate::models::{Goal, Progress, TrackerData};
use crate::stats::date_key;
use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

/// Length of every challenge window, in days.
pub const CHALLENGE_DAYS: i64 = 30;

/// Inserts a goal together with its 30 seeded progress rows, one per day of
/// the window, all incomplete. The caller holds the state lock and persists
/// the document afterwards.
pub fn create_goal(
    data: &mut TrackerData,
    title: &str,
    description: Option<String>,
    today: NaiveDate,
) -> Goal {
    let goal = Goal {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        description,
        start_date: date_key(today),
        end_date: date_key(today + Duration::days(CHALLENGE_DAYS - 1)),
        created_at: Utc::now().to_rfc3339(),
    };

    for offset in 0..CHALLENGE_DAYS {
        let row = Progress {
            id: Uuid::new_v4().to_string(),
            goal_id: goal.id.clone(),
            date: date_key(today + Duration::days(offset)),
            completed: false,
            notes: None,
        };
        data.progress.insert(row.id.clone(), row);
    }

    data.goals.insert(goal.id.clone(), goal.clone());
    goal
}

/// Removes the goal and every progress row it owns. Returns whether the goal
/// existed; deleting a missing id is a no-op.
pub fn delete_goal(data: &mut TrackerData, goal_id: &str) -> bool {
    data.progress.retain(|_, row| row.goal_id != goal_id);
    data.goals.remove(goal_id).is_some()
}

/// Goals ordered by creation time, newest first.
pub fn list_goals(data: &TrackerData) -> Vec<Goal> {
    let mut goals: Vec<Goal> = data.goals.values().cloned().collect();
    goals.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
    goals
}

/// Progress rows for one goal, ordered by date ascending.
pub fn goal_progress(data: &TrackerData, goal_id: &str) -> Vec<Progress> {
    let mut rows: Vec<Progress> = data
        .progress
        .values()
        .filter(|row| row.goal_id == goal_id)
        .cloned()
        .collect();
    rows.sort_by(|a, b| a.date.cmp(&b.date));
    rows
}
