pub mod frame;
mod sse_connection;
pub mod transport;

pub use frame::{FrameParser, SseFrame};
pub use sse_connection::{
    SseConnection, SseConnectionConfig, SseConnectionStatus, SseConnectionStatusChangeCallback,
    SseFrameCallback,
};
pub use transport::{ByteStream, HttpStreamTransport, StreamTransport, TransportError};
