use super::{Error, NotificationsRepository};
use crate::dto::NotificationItem;
use anyhow::anyhow;
use async_trait::async_trait;
use jwt_auth::TokenProvider;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde_json::Value;
use std::sync::Arc;

pub struct NotificationsRepositoryImpl {
    http: Client,
    base_url: Url,
    token_provider: Arc<dyn TokenProvider>,
}

impl NotificationsRepositoryImpl {
    pub fn new(
        http: Client,
        base_url: &str,
        token_provider: Arc<dyn TokenProvider>,
    ) -> anyhow::Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|err| anyhow!("invalid api base url: {err}"))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("invalid api base url: {base_url} cannot be a base");
        }

        Ok(Self {
            http,
            base_url,
            token_provider,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Base url was validated in constructor
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        url
    }

    ///
    /// Decodes every notification separately.
    /// Invalid ones are skipped so they don't hide the rest of the list.
    ///
    fn decode_notifications(values: Vec<Value>) -> Vec<NotificationItem> {
        values
            .into_iter()
            .enumerate()
            .filter_map(
                |(index, value)| match serde_json::from_value::<NotificationItem>(value) {
                    Ok(notification) => Some(notification),
                    Err(err) => {
                        tracing::warn!(index, %err, "skipping invalid notification");
                        None
                    }
                },
            )
            .collect()
    }

    async fn send_authorized(&self, request: RequestBuilder) -> Result<Response, Error> {
        let token = self
            .token_provider
            .token()
            .await?
            .ok_or(Error::MissingIdentity)?;

        let response = request.bearer_auth(token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::UnexpectedStatus { status, body });
        }

        Ok(response)
    }
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryImpl {
    async fn find_latest(&self, limit: usize) -> Result<Vec<NotificationItem>, Error> {
        let url = self.endpoint(&["api", "notifications"]);
        let request = self.http.get(url).query(&[("limit", limit)]);

        let values = self
            .send_authorized(request)
            .await?
            .json::<Vec<Value>>()
            .await?;

        Ok(Self::decode_notifications(values))
    }

    async fn mark_read(&self, id: &str) -> Result<(), Error> {
        let url = self.endpoint(&["api", "notifications", id, "read"]);

        self.send_authorized(self.http.post(url)).await?;

        Ok(())
    }

    async fn mark_all_read(&self) -> Result<(), Error> {
        let url = self.endpoint(&["api", "notifications", "read-all"]);

        self.send_authorized(self.http.post(url)).await?;

        Ok(())
    }
}
