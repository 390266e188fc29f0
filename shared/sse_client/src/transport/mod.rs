//!
//! Module that opens long-lived HTTP stream.
//!

mod error;
mod http_stream_transport;
mod stream_transport;

pub use error::TransportError;
pub use http_stream_transport::HttpStreamTransport;
pub use stream_transport::{ByteStream, StreamTransport};
