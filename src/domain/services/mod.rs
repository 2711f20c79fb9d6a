pub mod recurrence;
pub mod question_of_day;
