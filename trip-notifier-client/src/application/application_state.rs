use super::ApplicationEnv;
use crate::{
    repository::NotificationsRepositoryImpl,
    service::{
        notifications_service::{
            NotificationsService, NotificationsServiceConfig, NotificationsServiceImpl,
        },
        notifications_stream_service::{
            NotificationsStreamService, NotificationsStreamServiceConfig,
        },
    },
};
use jwt_auth::{JwtTokenProvider, JwtTokenProviderConfig};
use sse_client::HttpStreamTransport;
use std::sync::Arc;

#[derive(Clone)]
pub struct ApplicationState {
    pub notifications_service: Arc<dyn NotificationsService>,
    /// false when nobody is signed in
    pub notifications_active: bool,
}

pub struct ApplicationStateToClose {
    pub notifications_service: Arc<dyn NotificationsService>,
    pub notifications_stream_service: Option<NotificationsStreamService>,
}

pub fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    let http = reqwest::Client::builder().build()?;

    let config = JwtTokenProviderConfig {
        user_id: env.user_id,
        algorithm: env.jwt_algorithm,
        key: env.jwt_key.clone(),
        lifespan: env.jwt_lifespan,
    };
    let token_provider = Arc::new(JwtTokenProvider::new(config));

    tracing::info!("creating repositories");
    let notifications_repository =
        NotificationsRepositoryImpl::new(http.clone(), &env.api_base_url, token_provider.clone())?;
    let notifications_repository = Arc::new(notifications_repository);

    tracing::info!("creating services");
    let config = NotificationsServiceConfig {
        fetch_limit: env.fetch_limit,
        max_notifications: env.max_notifications,
    };
    let notifications_service =
        NotificationsServiceImpl::new(config, notifications_repository);
    let notifications_service: Arc<dyn NotificationsService> = Arc::new(notifications_service);

    let notifications_active = env.user_id.is_some();
    let notifications_stream_service = if notifications_active {
        let stream_url = format!(
            "{}/api/notifications/stream",
            env.stream_base_url.trim_end_matches('/')
        );
        let transport = Arc::new(HttpStreamTransport::new(http, stream_url));

        let config = NotificationsStreamServiceConfig {
            retry_interval: env.retry_interval,
            retry_max_count: env.retry_max_count,
        };
        let notifications_stream_service = NotificationsStreamService::new(
            config,
            transport,
            token_provider,
            notifications_service.clone(),
        );

        Some(notifications_stream_service)
    } else {
        tracing::info!("no signed-in identity, notification stream not started");
        None
    };

    Ok((
        ApplicationState {
            notifications_service: notifications_service.clone(),
            notifications_active,
        },
        ApplicationStateToClose {
            notifications_service,
            notifications_stream_service,
        },
    ))
}
