use super::SseConnectionStatus;
use async_trait::async_trait;

///
/// Callback executed whenever status of the connection changes
///
#[async_trait]
pub trait SseConnectionStatusChangeCallback: Send + Sync {
    async fn execute(&self, status: SseConnectionStatus);
}
