pub mod notifications_service;
pub mod notifications_stream_service;
