use crate::dto::NotificationItem;
use async_trait::async_trait;
use tokio::sync::watch;

///
/// In-memory view of the signed-in user's notifications.
///
/// Nothing here returns an error. Failures of the server are logged
/// and local state stays as it is.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsService: Send + Sync {
    ///
    /// Notifications sorted from the newest
    ///
    async fn notifications(&self) -> Vec<NotificationItem>;

    ///
    /// Number of notifications that were not read yet
    ///
    async fn unread_count(&self) -> usize;

    ///
    /// Receiver that is updated whenever unread count changes
    ///
    fn subscribe_unread_count(&self) -> watch::Receiver<usize>;

    ///
    /// true only while notification stream is live
    ///
    fn is_streaming(&self) -> bool;

    fn set_streaming(&self, streaming: bool);

    ///
    /// Replaces local notifications with the most recent ones fetched from server
    ///
    async fn refresh(&self);

    ///
    /// Adds notification that was pushed by server
    ///
    async fn receive(&self, notification: NotificationItem);

    ///
    /// Marks notification as read locally and then acknowledges it.
    /// Failed acknowledgement is not rolled back.
    ///
    async fn mark_read(&self, id: &str);

    ///
    /// Marks all notifications as read locally and then acknowledges it.
    /// Failed acknowledgement is not rolled back.
    ///
    async fn mark_all_read(&self);

    ///
    /// After close no operation changes notifications anymore
    ///
    async fn close(&self);
}
