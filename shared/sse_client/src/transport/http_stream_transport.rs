use super::{ByteStream, StreamTransport, TransportError};
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{
    header::{ACCEPT, CACHE_CONTROL},
    Client,
};

pub struct HttpStreamTransport {
    http: Client,
    url: String,
}

impl HttpStreamTransport {
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl StreamTransport for HttpStreamTransport {
    async fn open(&self, token: &str) -> Result<ByteStream, TransportError> {
        tracing::debug!(url = self.url, "opening stream");

        let response = self
            .http
            .get(&self.url)
            .bearer_auth(token)
            .header(ACCEPT, "text/event-stream")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::UnexpectedStatus { status, body });
        }

        tracing::debug!(%status, "stream opened");

        // Body is never collected, it's consumed chunk by chunk
        // for as long as server keeps connection open
        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(TransportError::from));

        Ok(Box::pin(stream))
    }
}
