use anyhow::anyhow;
use jsonwebtoken::{Algorithm, EncodingKey};
use jwt_auth::util::{parse_jwt_algorithms, parse_jwt_encoding_key};
use std::time::Duration;
use uuid::Uuid;

/// Whole window is kept in memory and cloned for every read
const MAX_NOTIFICATIONS_LIMIT: usize = 10_000;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub api_base_url: String,
    pub stream_base_url: String,

    /// `None` means nobody is signed in and notifications are inactive
    pub user_id: Option<Uuid>,

    pub jwt_algorithm: Algorithm,
    pub jwt_key: EncodingKey,
    pub jwt_lifespan: Duration,

    pub retry_interval: Duration,
    pub retry_max_count: Option<u32>,

    pub fetch_limit: usize,
    pub max_notifications: usize,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("TRIP_NOTIFIER_CLIENT_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("TRIP_NOTIFIER_CLIENT_LOG_FILENAME")?;
        let api_base_url = Self::env_var("TRIP_NOTIFIER_CLIENT_API_BASE_URL")?;
        let stream_base_url = Self::env_var("TRIP_NOTIFIER_CLIENT_STREAM_BASE_URL")?;
        let user_id = Self::optional_env_var("TRIP_NOTIFIER_CLIENT_USER_ID")
            .map(|user_id| Uuid::parse_str(&user_id))
            .transpose()
            .map_err(|err| anyhow!("TRIP_NOTIFIER_CLIENT_USER_ID is not valid uuid: {err}"))?;
        let jwt_algorithms =
            parse_jwt_algorithms(Self::env_var("TRIP_NOTIFIER_CLIENT_JWT_ALGORITHMS")?)?;
        let jwt_algorithm = *jwt_algorithms.first().ok_or(anyhow!(
            "TRIP_NOTIFIER_CLIENT_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let jwt_key = parse_jwt_encoding_key(
            &jwt_algorithm,
            Self::env_var("TRIP_NOTIFIER_CLIENT_JWT_KEY")?,
        )?;
        let jwt_lifespan = Duration::from_secs(
            Self::env_var("TRIP_NOTIFIER_CLIENT_JWT_LIFESPAN")?.parse::<u64>()?,
        );
        let retry_interval = Duration::from_millis(
            Self::env_var("TRIP_NOTIFIER_CLIENT_RETRY_INTERVAL")?.parse::<u64>()?,
        );
        let retry_max_count = Self::optional_env_var("TRIP_NOTIFIER_CLIENT_RETRY_MAX_COUNT")
            .map(|retry_max_count| retry_max_count.parse::<u32>())
            .transpose()?;
        let fetch_limit = Self::env_var("TRIP_NOTIFIER_CLIENT_FETCH_LIMIT")?.parse::<usize>()?;
        let max_notifications = Self::validate_max_notifications(
            Self::env_var("TRIP_NOTIFIER_CLIENT_MAX_NOTIFICATIONS")?.parse::<usize>()?,
        )?;

        Ok(Self {
            log_directory,
            log_filename,
            api_base_url,
            stream_base_url,
            user_id,
            jwt_algorithm,
            jwt_key,
            jwt_lifespan,
            retry_interval,
            retry_max_count,
            fetch_limit,
            max_notifications,
        })
    }

    fn validate_max_notifications(max_notifications: usize) -> anyhow::Result<usize> {
        if !(1..=MAX_NOTIFICATIONS_LIMIT).contains(&max_notifications) {
            anyhow::bail!(
                "TRIP_NOTIFIER_CLIENT_MAX_NOTIFICATIONS must be between 1 and {MAX_NOTIFICATIONS_LIMIT}"
            );
        }

        Ok(max_notifications)
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn optional_env_var(name: &'static str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}
