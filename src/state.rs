use std::sync::Arc;
use governor::DefaultDirectRateLimiter;
use crate::domain::ports::{
    VenueRepository, EventRepository, RecurringTemplateRepository,
    TeamMemberRepository, GalleryRepository, ReviewRepository, ServiceRepository,
    SettingRepository, ContactRepository, QuestionRepository, SocialPostRepository,
};
use crate::domain::services::recurrence::RecurrenceService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub venue_repo: Arc<dyn VenueRepository>,
    pub event_repo: Arc<dyn EventRepository>,
    pub recurring_repo: Arc<dyn RecurringTemplateRepository>,
    pub team_repo: Arc<dyn TeamMemberRepository>,
    pub gallery_repo: Arc<dyn GalleryRepository>,
    pub review_repo: Arc<dyn ReviewRepository>,
    pub service_repo: Arc<dyn ServiceRepository>,
    pub setting_repo: Arc<dyn SettingRepository>,
    pub contact_repo: Arc<dyn ContactRepository>,
    pub question_repo: Arc<dyn QuestionRepository>,
    pub social_repo: Arc<dyn SocialPostRepository>,
    pub recurrence_service: Arc<RecurrenceService>,
    pub contact_limiter: Arc<DefaultDirectRateLimiter>,
}
