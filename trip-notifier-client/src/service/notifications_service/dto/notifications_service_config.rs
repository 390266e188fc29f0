pub struct NotificationsServiceConfig {
    /// Value of `limit` sent with the bulk fetch
    pub fetch_limit: usize,

    /// Size of the window of most recent notifications kept in memory
    pub max_notifications: usize,
}

impl Default for NotificationsServiceConfig {
    fn default() -> Self {
        Self {
            fetch_limit: 50,
            max_notifications: 50,
        }
    }
}
