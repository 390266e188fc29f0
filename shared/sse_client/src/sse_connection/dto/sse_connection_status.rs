#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SseConnectionStatus {
    /// Connection created, first attempt not started yet
    Idle,

    /// Waiting for token and response
    Connecting,

    /// Response received, frames are being read
    Live,

    /// Waiting retry_interval before next attempt
    Reconnecting,

    /// Connection closed or retries exhausted. Final status
    Terminated,
}

impl SseConnectionStatus {
    pub fn is_live(&self) -> bool {
        *self == SseConnectionStatus::Live
    }
}
