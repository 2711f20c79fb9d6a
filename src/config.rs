use std::env;
use std::str::FromStr;
use chrono::Duration;
use chrono_tz::Tz;
use tracing::warn;

const DEFAULT_SOCIAL_CACHE_TTL_MINUTES: i64 = 60;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Bearer token for admin routes. Admin routes reject every request when unset.
    pub admin_token: Option<String>,
    pub business_timezone: Tz,
    /// Seconds between background generation runs; 0 disables the worker.
    pub generation_interval_secs: u64,
    pub social_cache_ttl_minutes: i64,
    pub contact_rate_per_minute: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://quiznight.db".to_string()),
            port: parse_or("PORT", 3000),
            admin_token: env::var("ADMIN_TOKEN").ok().filter(|t| !t.trim().is_empty()),
            business_timezone: parse_or("BUSINESS_TIMEZONE", chrono_tz::Europe::London),
            generation_interval_secs: parse_or("GENERATION_INTERVAL_SECS", 6 * 60 * 60),
            social_cache_ttl_minutes: parse_or("SOCIAL_CACHE_TTL_MINUTES", DEFAULT_SOCIAL_CACHE_TTL_MINUTES),
            contact_rate_per_minute: parse_or("CONTACT_RATE_PER_MINUTE", 5),
        }
    }

    /// Age after which a cached social feed is reported as stale.
    /// Negative or out-of-range minute counts fall back to the default.
    pub fn social_cache_ttl(&self) -> Duration {
        match Duration::try_minutes(self.social_cache_ttl_minutes) {
            Some(ttl) if ttl >= Duration::zero() => ttl,
            _ => {
                warn!("SOCIAL_CACHE_TTL_MINUTES={} is out of range, using default", self.social_cache_ttl_minutes);
                Duration::minutes(DEFAULT_SOCIAL_CACHE_TTL_MINUTES)
            }
        }
    }

    /// The business's current calendar date; generation windows start here.
    pub fn today(&self) -> chrono::NaiveDate {
        chrono::Utc::now().with_timezone(&self.business_timezone).date_naive()
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Invalid value for {}: '{}', using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_ttl(minutes: i64) -> Config {
        Config {
            database_url: "sqlite::memory:".into(),
            port: 0,
            admin_token: None,
            business_timezone: chrono_tz::Europe::London,
            generation_interval_secs: 0,
            social_cache_ttl_minutes: minutes,
            contact_rate_per_minute: 5,
        }
    }

    #[test]
    fn test_social_cache_ttl_in_range() {
        assert_eq!(config_with_ttl(15).social_cache_ttl(), Duration::minutes(15));
    }

    #[test]
    fn test_social_cache_ttl_out_of_range_uses_default() {
        let default = Duration::minutes(DEFAULT_SOCIAL_CACHE_TTL_MINUTES);
        assert_eq!(config_with_ttl(i64::MAX).social_cache_ttl(), default);
        assert_eq!(config_with_ttl(i64::MIN).social_cache_ttl(), default);
        assert_eq!(config_with_ttl(-5).social_cache_ttl(), default);
    }
}
