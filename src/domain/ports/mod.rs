use crate::domain::models::{
    venue::Venue, event::{Event, EventFilter}, recurring::RecurringTemplate,
    team_member::TeamMember, gallery::GalleryImage, review::Review, service::Service,
    setting::Setting, contact::ContactSubmission, question::QuizQuestion, social::SocialPostCache,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait VenueRepository: Send + Sync {
    async fn create(&self, venue: &Venue) -> Result<Venue, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Venue>, AppError>;
    async fn list(&self, include_inactive: bool) -> Result<Vec<Venue>, AppError>;
    async fn update(&self, venue: &Venue) -> Result<Venue, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError>;
    async fn list(&self, filter: &EventFilter) -> Result<Vec<Event>, AppError>;
    async fn list_by_template(&self, template_id: &str) -> Result<Vec<Event>, AppError>;
    async fn update(&self, event: &Event) -> Result<Event, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

/// The slice of the event store the recurrence materializer writes through.
#[async_trait]
pub trait OccurrenceStore: Send + Sync {
    async fn occurrence_exists(&self, template_id: &str, date: NaiveDate) -> Result<bool, AppError>;

    /// Inserts unless a row for (template, date) already exists.
    /// Returns `None` when the storage-level uniqueness check rejected it.
    async fn insert_occurrence(&self, event: &Event) -> Result<Option<Event>, AppError>;
}

#[async_trait]
pub trait RecurringTemplateRepository: Send + Sync {
    async fn create(&self, template: &RecurringTemplate) -> Result<RecurringTemplate, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<RecurringTemplate>, AppError>;
    async fn list(&self) -> Result<Vec<RecurringTemplate>, AppError>;
    async fn list_active(&self) -> Result<Vec<RecurringTemplate>, AppError>;
    async fn update(&self, template: &RecurringTemplate) -> Result<RecurringTemplate, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait TeamMemberRepository: Send + Sync {
    async fn create(&self, member: &TeamMember) -> Result<TeamMember, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<TeamMember>, AppError>;
    async fn list(&self, include_inactive: bool) -> Result<Vec<TeamMember>, AppError>;
    async fn update(&self, member: &TeamMember) -> Result<TeamMember, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait GalleryRepository: Send + Sync {
    async fn create(&self, image: &GalleryImage) -> Result<GalleryImage, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<GalleryImage>, AppError>;
    async fn list(&self) -> Result<Vec<GalleryImage>, AppError>;
    async fn update(&self, image: &GalleryImage) -> Result<GalleryImage, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: &Review) -> Result<Review, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Review>, AppError>;
    async fn list(&self, published_only: bool) -> Result<Vec<Review>, AppError>;
    async fn update(&self, review: &Review) -> Result<Review, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, service: &Service) -> Result<Service, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Service>, AppError>;
    async fn list(&self, include_inactive: bool) -> Result<Vec<Service>, AppError>;
    async fn update(&self, service: &Service) -> Result<Service, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait SettingRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Setting>, AppError>;
    async fn get(&self, key: &str) -> Result<Option<Setting>, AppError>;
    async fn upsert(&self, setting: &Setting) -> Result<Setting, AppError>;
    async fn delete(&self, key: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, submission: &ContactSubmission) -> Result<ContactSubmission, AppError>;
    async fn list(&self, unread_only: bool) -> Result<Vec<ContactSubmission>, AppError>;
    async fn mark_read(&self, id: &str) -> Result<ContactSubmission, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(&self, question: &QuizQuestion) -> Result<QuizQuestion, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<QuizQuestion>, AppError>;
    async fn list(&self) -> Result<Vec<QuizQuestion>, AppError>;
    async fn list_active(&self) -> Result<Vec<QuizQuestion>, AppError>;
    async fn update(&self, question: &QuizQuestion) -> Result<QuizQuestion, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait SocialPostRepository: Send + Sync {
    async fn get(&self, platform: &str) -> Result<Option<SocialPostCache>, AppError>;
    async fn upsert(&self, entry: &SocialPostCache) -> Result<SocialPostCache, AppError>;
}
