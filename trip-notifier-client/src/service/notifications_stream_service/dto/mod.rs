mod notifications_stream_service_config;

pub use notifications_stream_service_config::NotificationsStreamServiceConfig;
