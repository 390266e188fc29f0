mod notifications_service_config;

pub use notifications_service_config::NotificationsServiceConfig;
