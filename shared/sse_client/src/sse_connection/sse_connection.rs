use super::{
    sse_connection_state_machine::SseConnectionStateMachine, SseConnectionConfig,
    SseConnectionStatus, SseConnectionStatusChangeCallback, SseFrameCallback,
};
use crate::StreamTransport;
use jwt_auth::TokenProvider;
use std::sync::Arc;
use tokio::{
    sync::{watch, Mutex, Notify},
    task::JoinHandle,
};

///
/// Server-sent event stream that is kept alive in the background.
///
/// Background task connects, reads frames and passes them to the frame callback.
/// Whenever stream fails or ends, connection is recreated after
/// [SseConnectionConfig::retry_interval].
///
/// Current status can be observed with [Self::status].
///
pub struct SseConnection {
    status_rx: watch::Receiver<SseConnectionStatus>,

    task_handle: Mutex<Option<JoinHandle<()>>>,
    close_notify: Arc<Notify>,
}

impl SseConnection {
    #[tracing::instrument(name = "SSE Connection", target = "sse_client::connection", skip_all)]
    pub fn new<FrameCallback, StatusCallback>(
        config: SseConnectionConfig,
        transport: Arc<dyn StreamTransport>,
        token_provider: Arc<dyn TokenProvider>,
        frame_callback: FrameCallback,
        status_callback: StatusCallback,
    ) -> Self
    where
        FrameCallback: SseFrameCallback + 'static,
        StatusCallback: SseConnectionStatusChangeCallback + 'static,
    {
        tracing::info!("starting connection task");

        let (status_tx, status_rx) = watch::channel(SseConnectionStatus::Idle);
        let state_machine = SseConnectionStateMachine::new(
            config,
            transport,
            token_provider,
            frame_callback,
            status_callback,
            status_tx,
        );

        let close_notify = Arc::new(Notify::new());
        let close_notify_clone = Arc::clone(&close_notify);
        let task_handle = tokio::spawn(async move {
            state_machine.run(close_notify_clone).await;
        });

        Self {
            status_rx,
            task_handle: Mutex::new(Some(task_handle)),
            close_notify,
        }
    }

    pub fn status(&self) -> watch::Receiver<SseConnectionStatus> {
        self.status_rx.clone()
    }

    pub fn is_live(&self) -> bool {
        self.status_rx.borrow().is_live()
    }

    ///
    /// Stop background task and wait until it finishes.
    /// After it returns no callback is executed anymore.
    ///
    /// Calling it more than once is allowed, subsequent calls return immediately.
    ///
    #[tracing::instrument(name = "SSE Connection", target = "sse_client::connection", skip_all)]
    pub async fn close(&self) {
        let Some(task_handle) = self.task_handle.lock().await.take() else {
            tracing::debug!("connection already closed");
            return;
        };

        tracing::info!("closing connection");
        self.close_notify.notify_one();

        match task_handle.await {
            Ok(()) => tracing::info!("connection closed"),
            Err(err) => tracing::error!(%err, "connection task failed"),
        }
    }
}

impl Drop for SseConnection {
    fn drop(&mut self) {
        // Task must not outlive its owner even when close() was never awaited
        self.close_notify.notify_one();
    }
}
