use super::TransportError;
use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;

///
/// Body of the response read chunk by chunk.
/// Stream ends when server closes the connection.
///
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, TransportError>> + Send>>;

#[async_trait]
pub trait StreamTransport: Send + Sync {
    ///
    /// Open new stream authorized with the token.
    ///
    /// ### Errors
    /// - [TransportError::Http] when request could not be sent
    /// - [TransportError::UnexpectedStatus] when server responded with non-success status
    ///
    async fn open(&self, token: &str) -> Result<ByteStream, TransportError>;
}
