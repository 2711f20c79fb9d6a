use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn, info_span, Instrument};
use crate::state::AppState;

/// Periodically tops up every active recurring event's occurrences so the
/// public calendar always covers each template's look-ahead window.
pub async fn start_generation_worker(state: Arc<AppState>) {
    let interval = Duration::from_secs(state.config.generation_interval_secs);
    info!("Starting recurring event generation worker (every {:?})", interval);

    loop {
        let today = state.config.today();
        let span = info_span!("generation_run", today = %today);

        async {
            match state.recurrence_service.generate_all_active(today).await {
                Ok(summaries) => {
                    let created: usize = summaries.iter().map(|s| s.created).sum();
                    for failed in summaries.iter().filter(|s| s.error.is_some()) {
                        warn!(
                            template_id = %failed.template_id,
                            "Recurring event '{}' failed: {}",
                            failed.title,
                            failed.error.as_deref().unwrap_or_default()
                        );
                    }
                    info!(templates = summaries.len(), created, "Generation run complete");
                }
                Err(e) => error!("Failed to load active recurring events: {:?}", e),
            }
        }
            .instrument(span)
            .await;

        sleep(interval).await;
    }
}
