use crate::{error::Error, Claims, TokenProvider};
use async_trait::async_trait;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use std::time::Duration;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct JwtTokenProviderConfig {
    /// `None` means nobody is signed in
    pub user_id: Option<Uuid>,

    pub algorithm: Algorithm,
    pub key: EncodingKey,
    pub lifespan: Duration,
}

///
/// Signs short-lived token for the configured user.
/// New token is created on every call so the caller never holds an expired one.
///
pub struct JwtTokenProvider {
    config: JwtTokenProviderConfig,
}

impl JwtTokenProvider {
    pub fn new(config: JwtTokenProviderConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl TokenProvider for JwtTokenProvider {
    async fn token(&self) -> Result<Option<String>, Error> {
        let Some(user_id) = self.config.user_id else {
            tracing::trace!("no signed-in identity");
            return Ok(None);
        };

        let iat = OffsetDateTime::now_utc();
        let exp = iat + self.config.lifespan;
        let claims = Claims {
            sub: user_id,
            iat: iat.unix_timestamp(),
            exp: exp.unix_timestamp(),
        };

        let header = Header::new(self.config.algorithm);
        let token = jsonwebtoken::encode(&header, &claims, &self.config.key)?;
        tracing::trace!(%user_id, exp = claims.exp, "issued token");

        Ok(Some(token))
    }
}
