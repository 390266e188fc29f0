use crate::SseFrame;
use async_trait::async_trait;

///
/// Callback executed for every frame, in the order frames arrived.
/// Next frame is not processed until callback returns.
///
#[async_trait]
pub trait SseFrameCallback: Send + Sync {
    async fn execute(&self, frame: SseFrame);
}
