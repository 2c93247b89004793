use std::mem;

/// One completed server-sent event block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SseEvent {
    /// Value of the `event:` field, empty when the block carried none
    pub event: String,
    /// Concatenated `data:` payload, empty both for `data: ` with nothing
    /// after the prefix and for a block with no data field at all
    pub data: String,
    /// Value of the `id:` field, empty when absent
    pub id: String,
}

impl SseEvent {
    pub fn is_empty(&self) -> bool {
        self.event.is_empty() && self.data.is_empty() && self.id.is_empty()
    }
}

/// Classification of a single stream line.
#[derive(Debug, PartialEq, Eq)]
enum SseLine<'a> {
    /// Blank line, terminates the current block
    Blank,
    /// `:`-prefixed comment, ignored
    Comment,
    Event(&'a str),
    Data(&'a str),
    Id(&'a str),
    /// Unrecognized field, dropped without complaint
    Other,
}

fn classify(line: &str) -> SseLine<'_> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return SseLine::Blank;
    }
    if trimmed.starts_with(':') {
        return SseLine::Comment;
    }
    if let Some(rest) = trimmed.strip_prefix("event: ") {
        return SseLine::Event(rest);
    }
    if let Some(rest) = trimmed.strip_prefix("data: ") {
        return SseLine::Data(rest);
    }
    if let Some(rest) = trimmed.strip_prefix("id: ") {
        return SseLine::Id(rest);
    }

    SseLine::Other
}

/// Folds classified lines into event blocks.
///
/// Fields accumulate across consecutive non-blank lines; a blank line
/// completes the block and the accumulator restarts from a fresh default.
#[derive(Default)]
pub struct EventAssembler {
    pending: SseEvent,
}

impl EventAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one line. Returns the completed event when the line was a
    /// block terminator; a completed event may still carry empty data,
    /// the caller decides what that means.
    pub fn push(&mut self, line: &str) -> Option<SseEvent> {
        match classify(line) {
            SseLine::Blank => Some(mem::take(&mut self.pending)),
            SseLine::Comment | SseLine::Other => None,
            SseLine::Event(name) => {
                self.pending.event = name.to_string();
                None
            }
            SseLine::Data(chunk) => {
                // Multi-line payloads rejoin with the newline the wire
                // format stripped.
                if self.pending.data.is_empty() {
                    self.pending.data = chunk.to_string();
                } else {
                    self.pending.data.push('\n');
                    self.pending.data.push_str(chunk);
                }
                None
            }
            SseLine::Id(value) => {
                self.pending.id = value.to_string();
                None
            }
        }
    }

    /// Emit the unterminated block at end of stream, if it holds anything.
    pub fn flush(&mut self) -> Option<SseEvent> {
        if self.pending.is_empty() {
            return None;
        }
        Some(mem::take(&mut self.pending))
    }
}
