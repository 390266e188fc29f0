use super::Error;
use crate::dto::NotificationItem;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationsRepository: Send + Sync {
    ///
    /// Finds the most recent notifications of the signed-in user.
    /// Notifications are sorted from the newest.
    ///
    /// ### Errors
    /// - [Error::MissingIdentity] when nobody is signed in
    ///
    async fn find_latest(&self, limit: usize) -> Result<Vec<NotificationItem>, Error>;

    ///
    /// Acknowledges that notification was read
    ///
    /// ### Errors
    /// - [Error::MissingIdentity] when nobody is signed in
    /// - [Error::UnexpectedStatus] when server rejects acknowledgement
    ///
    async fn mark_read(&self, id: &str) -> Result<(), Error>;

    ///
    /// Acknowledges that all notifications of the user were read
    ///
    /// ### Errors
    /// - [Error::MissingIdentity] when nobody is signed in
    /// - [Error::UnexpectedStatus] when server rejects acknowledgement
    ///
    async fn mark_all_read(&self) -> Result<(), Error>;
}
