mod sse_connection_config;
mod sse_connection_status;

pub use sse_connection_config::SseConnectionConfig;
pub use sse_connection_status::SseConnectionStatus;
