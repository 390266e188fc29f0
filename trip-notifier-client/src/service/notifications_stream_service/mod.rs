mod dto;
mod notifications_stream_service;

pub use dto::NotificationsStreamServiceConfig;
pub use notifications_stream_service::*;
