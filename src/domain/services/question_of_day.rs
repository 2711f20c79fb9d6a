use crate::domain::models::question::QuizQuestion;
use chrono::{Datelike, NaiveDate};

/// Picks the question shown on `date`.
///
/// A question scheduled for that exact date wins. Otherwise the active,
/// unscheduled questions (ordered by creation) are rotated one per day.
pub fn pick_for_date(questions: &[QuizQuestion], date: NaiveDate) -> Option<&QuizQuestion> {
    let active = questions.iter().filter(|q| q.is_active);

    if let Some(scheduled) = active.clone().find(|q| q.scheduled_date == Some(date)) {
        return Some(scheduled);
    }

    let mut pool: Vec<&QuizQuestion> = active.filter(|q| q.scheduled_date.is_none()).collect();
    if pool.is_empty() {
        return None;
    }
    pool.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

    let index = date.num_days_from_ce().rem_euclid(pool.len() as i32) as usize;
    Some(pool[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn question(text: &str, offset_secs: i64) -> QuizQuestion {
        let mut q = QuizQuestion::new(text.into(), "42".into());
        q.created_at = Utc::now() + Duration::seconds(offset_secs);
        q
    }

    #[test]
    fn test_scheduled_question_wins() {
        let day = NaiveDate::from_ymd_opt(2025, 5, 4).unwrap();
        let mut special = question("Star Wars day?", 10);
        special.scheduled_date = Some(day);
        let questions = vec![question("a", 0), question("b", 1), special];

        assert_eq!(pick_for_date(&questions, day).unwrap().question, "Star Wars day?");
    }

    #[test]
    fn test_rotation_changes_daily_and_wraps() {
        let questions = vec![question("a", 0), question("b", 1), question("c", 2)];
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        let first = pick_for_date(&questions, day).unwrap().question.clone();
        let next = pick_for_date(&questions, day.succ_opt().unwrap()).unwrap().question.clone();
        let wrapped = pick_for_date(&questions, day + Duration::days(3)).unwrap().question.clone();

        assert_ne!(first, next);
        assert_eq!(first, wrapped);
    }

    #[test]
    fn test_inactive_and_other_days_are_ignored() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut inactive = question("hidden", 0);
        inactive.is_active = false;
        let mut tomorrow = question("tomorrow", 1);
        tomorrow.scheduled_date = day.succ_opt();

        assert!(pick_for_date(&[inactive.clone(), tomorrow.clone()], day).is_none());

        let questions = vec![inactive, tomorrow, question("visible", 2)];
        assert_eq!(pick_for_date(&questions, day).unwrap().question, "visible");
    }
}
