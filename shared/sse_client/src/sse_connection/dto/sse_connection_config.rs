use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SseConnectionConfig {
    /// Fixed delay between failure and next connection attempt
    pub retry_interval: Duration,

    /// How many consecutive failed attempts are allowed before giving up.
    /// `None` means connection is retried forever
    pub retry_max_count: Option<u32>,
}

impl Default for SseConnectionConfig {
    fn default() -> Self {
        Self {
            retry_interval: Duration::from_secs(5),
            retry_max_count: None,
        }
    }
}
