use super::SseFrame;

///
/// Incremental parser of `text/event-stream` body.
///
/// Bytes can be pushed in chunks of any size. Incomplete trailing line
/// stays buffered until the rest of it arrives, so a frame is emitted
/// exactly once no matter how the stream was split.
///
#[derive(Default)]
pub struct FrameParser {
    buffer: Vec<u8>,

    // Previous line ended with '\r'. If next byte is '\n'
    // it is the second half of the same line ending
    skip_lf: bool,

    event: Option<String>,
    id: Option<String>,
    data: Vec<String>,
}

impl FrameParser {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Append chunk to the buffer.
    ///
    /// ### Returns
    /// Frames completed by this chunk, in stream order
    ///
    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseFrame> {
        self.buffer.extend_from_slice(chunk);

        let mut frames = Vec::new();
        let mut start = 0;

        while let Some(offset) = self.buffer[start..]
            .iter()
            .position(|byte| *byte == b'\n' || *byte == b'\r')
        {
            let end = start + offset;
            let terminator = self.buffer[end];

            if self.skip_lf && offset == 0 && terminator == b'\n' {
                self.skip_lf = false;
                start = end + 1;
                continue;
            }
            self.skip_lf = terminator == b'\r';

            // Line is complete so it can't end in the middle of UTF-8 sequence
            let line = String::from_utf8_lossy(&self.buffer[start..end]).into_owned();
            start = end + 1;

            if let Some(frame) = self.process_line(&line) {
                frames.push(frame);
            }
        }

        self.buffer.drain(..start);

        frames
    }

    ///
    /// Drop everything that was buffered.
    /// Used when connection is recreated, because half of the frame
    /// received from the previous connection will never be completed.
    ///
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.skip_lf = false;
        self.event = None;
        self.id = None;
        self.data.clear();
    }

    fn process_line(&mut self, line: &str) -> Option<SseFrame> {
        if line.is_empty() {
            return self.dispatch();
        }

        // Comment, usually keep-alive sent by the server
        if line.starts_with(':') {
            tracing::trace!("skipped comment line");
            return None;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };

        match field {
            "event" => self.event = Some(value.to_string()),
            "data" => self.data.push(value.to_string()),
            "id" => self.id = Some(value.to_string()),
            field => tracing::trace!(field, "skipped unsupported field"),
        }

        None
    }

    fn dispatch(&mut self) -> Option<SseFrame> {
        let event = self.event.take();
        let id = self.id.take();

        if self.data.is_empty() {
            return None;
        }

        let data = std::mem::take(&mut self.data).join("\n");

        Some(SseFrame { event, id, data })
    }
}
