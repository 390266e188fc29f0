///
/// Single event of the stream, terminated by a blank line.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseFrame {
    /// Value of the `event:` field. `None` when frame didn't specify it
    pub event: Option<String>,

    /// Value of the `id:` field
    pub id: Option<String>,

    /// All `data:` lines joined with `\n`
    pub data: String,
}

impl SseFrame {
    pub fn is_event(&self, event: &str) -> bool {
        self.event.as_deref() == Some(event)
    }
}
