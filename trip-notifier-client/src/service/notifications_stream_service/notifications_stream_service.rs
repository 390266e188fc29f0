use super::NotificationsStreamServiceConfig;
use crate::{dto::NotificationItem, service::notifications_service::NotificationsService};
use anyhow::anyhow;
use async_trait::async_trait;
use jwt_auth::TokenProvider;
use sse_client::{
    SseConnection, SseConnectionConfig, SseConnectionStatus, SseConnectionStatusChangeCallback,
    SseFrame, SseFrameCallback, StreamTransport,
};
use std::sync::Arc;
use tokio::sync::watch;

const NOTIFICATION_EVENT: &str = "notification";

///
/// Keeps notification stream open and passes every pushed notification
/// to [NotificationsService]
///
pub struct NotificationsStreamService {
    sse_connection: SseConnection,
}

impl NotificationsStreamService {
    pub fn new(
        config: NotificationsStreamServiceConfig,
        transport: Arc<dyn StreamTransport>,
        token_provider: Arc<dyn TokenProvider>,
        notifications_service: Arc<dyn NotificationsService>,
    ) -> Self {
        let connection_config = SseConnectionConfig {
            retry_interval: config.retry_interval,
            retry_max_count: config.retry_max_count,
        };
        let consumer = Consumer {
            notifications_service: Arc::clone(&notifications_service),
        };
        let status_callback = StatusCallback {
            notifications_service,
        };
        let sse_connection = SseConnection::new(
            connection_config,
            transport,
            token_provider,
            consumer,
            status_callback,
        );

        Self { sse_connection }
    }

    pub fn status(&self) -> watch::Receiver<SseConnectionStatus> {
        self.sse_connection.status()
    }

    pub async fn close(&self) {
        self.sse_connection.close().await;
    }
}

struct Consumer {
    notifications_service: Arc<dyn NotificationsService>,
}

impl Consumer {
    async fn try_consume(&self, frame: SseFrame) -> anyhow::Result<()> {
        if !frame.is_event(NOTIFICATION_EVENT) {
            tracing::trace!("not a notification, skipping frame");
            return Ok(());
        }
        if frame.data.is_empty() {
            tracing::trace!("empty notification, skipping frame");
            return Ok(());
        }

        let notification = serde_json::from_str::<NotificationItem>(&frame.data)
            .map_err(|err| anyhow!("invalid notification: {err}"))?;

        self.notifications_service.receive(notification).await;

        Ok(())
    }
}

#[async_trait]
impl SseFrameCallback for Consumer {
    #[tracing::instrument(
        name = "Notifications Stream",
        skip_all,
        fields(
            event = frame.event.as_deref(),
            id = frame.id.as_deref(),
        )
    )]
    async fn execute(&self, frame: SseFrame) {
        tracing::debug!("processing frame");

        match self.try_consume(frame).await {
            Ok(()) => tracing::debug!("frame processed"),
            Err(err) => tracing::warn!(%err, "failed to consume frame"),
        }
    }
}

struct StatusCallback {
    notifications_service: Arc<dyn NotificationsService>,
}

#[async_trait]
impl SseConnectionStatusChangeCallback for StatusCallback {
    async fn execute(&self, status: SseConnectionStatus) {
        self.notifications_service.set_streaming(status.is_live());
    }
}
