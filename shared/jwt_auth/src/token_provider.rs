use crate::error::Error;
use async_trait::async_trait;

#[async_trait]
pub trait TokenProvider: Send + Sync {
    ///
    /// Issue token for the next request.
    ///
    /// ### Returns
    /// - `Some(token)` when user is signed in
    /// - `None` when there is no signed-in identity
    ///
    /// ### Errors
    /// - [Error::Encode] when token could not be created
    ///
    async fn token(&self) -> Result<Option<String>, Error>;
}
