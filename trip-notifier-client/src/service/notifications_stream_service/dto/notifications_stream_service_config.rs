use std::time::Duration;

pub struct NotificationsStreamServiceConfig {
    pub retry_interval: Duration,
    /// `None` means retry forever
    pub retry_max_count: Option<u32>,
}
