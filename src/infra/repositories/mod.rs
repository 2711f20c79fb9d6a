pub mod sqlite_venue_repo;
pub mod sqlite_event_repo;
pub mod sqlite_recurring_repo;
pub mod sqlite_team_repo;
pub mod sqlite_gallery_repo;
pub mod sqlite_review_repo;
pub mod sqlite_service_repo;
pub mod sqlite_setting_repo;
pub mod sqlite_contact_repo;
pub mod sqlite_question_repo;
pub mod sqlite_social_repo;

pub mod postgres_venue_repo;
pub mod postgres_event_repo;
pub mod postgres_recurring_repo;
pub mod postgres_team_repo;
pub mod postgres_gallery_repo;
pub mod postgres_review_repo;
pub mod postgres_service_repo;
pub mod postgres_setting_repo;
pub mod postgres_contact_repo;
pub mod postgres_question_repo;
pub mod postgres_social_repo;
