//!
//! Module that keeps server-sent event stream alive.
//!

mod dto;
mod sse_connection;
mod sse_connection_state_machine;
mod sse_connection_status_change_callback;
mod sse_frame_callback;

pub use dto::{SseConnectionConfig, SseConnectionStatus};
pub use sse_connection::SseConnection;
pub use sse_connection_status_change_callback::SseConnectionStatusChangeCallback;
pub use sse_frame_callback::SseFrameCallback;
