//!
//! Module that splits server-sent event stream into frames.
//!

mod frame_parser;
mod sse_frame;

pub use frame_parser::FrameParser;
pub use sse_frame::SseFrame;
