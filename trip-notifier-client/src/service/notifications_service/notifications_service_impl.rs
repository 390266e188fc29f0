use super::{NotificationsService, NotificationsServiceConfig, NotificationsStore};
use crate::{
    dto::NotificationItem,
    repository::{self, NotificationsRepository},
};
use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::{watch, Mutex, MutexGuard};

pub struct NotificationsServiceImpl {
    config: NotificationsServiceConfig,
    repository: Arc<dyn NotificationsRepository>,

    store: Mutex<NotificationsStore>,
    // Changed only while store lock is held
    closed: AtomicBool,
    streaming: AtomicBool,
    unread_count_tx: watch::Sender<usize>,
}

impl NotificationsServiceImpl {
    pub fn new(
        config: NotificationsServiceConfig,
        repository: Arc<dyn NotificationsRepository>,
    ) -> Self {
        let store = NotificationsStore::new(config.max_notifications);
        let (unread_count_tx, _) = watch::channel(0);

        Self {
            config,
            repository,
            store: Mutex::new(store),
            closed: AtomicBool::new(false),
            streaming: AtomicBool::new(false),
            unread_count_tx,
        }
    }

    ///
    /// Locks store for modification.
    ///
    /// ### Returns
    /// None when service was already closed
    ///
    async fn lock_open_store(&self) -> Option<MutexGuard<'_, NotificationsStore>> {
        let store = self.store.lock().await;
        if self.closed.load(Ordering::SeqCst) {
            tracing::debug!("service closed, ignoring change");
            return None;
        }

        Some(store)
    }

    fn publish_unread_count(&self, store: &NotificationsStore) {
        let unread_count = store.unread_count();
        self.unread_count_tx.send_if_modified(|current| {
            if *current == unread_count {
                return false;
            }

            *current = unread_count;
            true
        });
    }

    fn log_repository_error(err: repository::Error, action: &'static str) {
        match err {
            repository::Error::MissingIdentity => {
                tracing::debug!(action, "no signed-in identity, skipping request")
            }
            err => tracing::warn!(action, %err, "request failed"),
        }
    }
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    async fn notifications(&self) -> Vec<NotificationItem> {
        self.store.lock().await.items().cloned().collect()
    }

    async fn unread_count(&self) -> usize {
        self.store.lock().await.unread_count()
    }

    fn subscribe_unread_count(&self) -> watch::Receiver<usize> {
        self.unread_count_tx.subscribe()
    }

    fn is_streaming(&self) -> bool {
        self.streaming.load(Ordering::SeqCst)
    }

    fn set_streaming(&self, streaming: bool) {
        let previous = self.streaming.swap(streaming, Ordering::SeqCst);
        if previous != streaming {
            tracing::info!(streaming, "streaming changed");
        }
    }

    #[tracing::instrument(name = "Refresh notifications", skip_all)]
    async fn refresh(&self) {
        tracing::info!(limit = self.config.fetch_limit, "fetching notifications");

        // Lock is not held while waiting for server
        let notifications = match self.repository.find_latest(self.config.fetch_limit).await {
            Ok(notifications) => notifications,
            Err(err) => {
                Self::log_repository_error(err, "find latest");
                return;
            }
        };
        tracing::info!(count = notifications.len(), "fetched notifications");

        let Some(mut store) = self.lock_open_store().await else {
            return;
        };
        store.replace_all(notifications);
        self.publish_unread_count(&store);
    }

    #[tracing::instrument(name = "Receive notification", skip_all, fields(id = %notification.id))]
    async fn receive(&self, notification: NotificationItem) {
        tracing::debug!("storing notification");
        tracing::trace!(?notification);

        let Some(mut store) = self.lock_open_store().await else {
            return;
        };
        store.prepend(notification);
        self.publish_unread_count(&store);
    }

    #[tracing::instrument(name = "Mark read", skip_all, fields(id = id))]
    async fn mark_read(&self, id: &str) {
        {
            let Some(mut store) = self.lock_open_store().await else {
                return;
            };
            if !store.mark_read(id) {
                tracing::debug!("notification not found or already read");
                return;
            }
            self.publish_unread_count(&store);
        }

        tracing::info!("acknowledging notification");
        match self.repository.mark_read(id).await {
            Ok(()) => tracing::info!("acknowledged notification"),
            Err(err) => Self::log_repository_error(err, "mark read"),
        }
    }

    #[tracing::instrument(name = "Mark all read", skip_all)]
    async fn mark_all_read(&self) {
        {
            let Some(mut store) = self.lock_open_store().await else {
                return;
            };
            let changed = store.mark_all_read();
            tracing::debug!(changed, "marked notifications as read");
            self.publish_unread_count(&store);
        }

        // Server may know about unread notifications outside of the window,
        // so acknowledgement is sent even when nothing changed locally
        tracing::info!("acknowledging all notifications");
        match self.repository.mark_all_read().await {
            Ok(()) => tracing::info!("acknowledged all notifications"),
            Err(err) => Self::log_repository_error(err, "mark all read"),
        }
    }

    async fn close(&self) {
        let _store = self.store.lock().await;
        self.closed.store(true, Ordering::SeqCst);
        self.streaming.store(false, Ordering::SeqCst);

        tracing::info!("notifications service closed");
    }
}
