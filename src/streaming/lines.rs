use bytes::{Buf, BytesMut};

/// Stateful assembler turning raw network chunks into complete lines.
///
/// Chunks arrive with no relation to line boundaries, so the tail of every
/// chunk stays buffered until its terminating `\n` shows up. Splitting
/// happens on raw bytes: `\n` never occurs inside a multi-byte UTF-8
/// sequence, so a scalar split across two chunks simply waits in the
/// buffer until it is whole.
pub struct LineBuffer {
    buffer: BytesMut,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::with_capacity(1024),
        }
    }

    /// Feed one chunk and drain every complete line, in order, without the
    /// trailing newline. Incomplete trailing data stays buffered.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line = self.buffer.split_to(pos);
            self.buffer.advance(1);
            lines.push(String::from_utf8_lossy(&line).into_owned());
        }

        lines
    }

    /// Hand back the unterminated remainder at end of stream, if any.
    pub fn finish(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }

        let rest = self.buffer.split();
        Some(String::from_utf8_lossy(&rest).into_owned())
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_lines() {
        let mut buf = LineBuffer::new();
        let lines = buf.feed(b"event: progress\ndata: 50%\n");
        assert_eq!(lines, vec!["event: progress", "data: 50%"]);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_partial_line_carries_over() {
        let mut buf = LineBuffer::new();
        assert!(buf.feed(b"data: par").is_empty());
        let lines = buf.feed(b"tial\n");
        assert_eq!(lines, vec!["data: partial"]);
    }

    #[test]
    fn test_empty_chunk_is_noop() {
        let mut buf = LineBuffer::new();
        buf.feed(b"data: x");
        assert!(buf.feed(b"").is_empty());
        assert!(!buf.is_empty());
    }

    #[test]
    fn test_lone_newline_yields_empty_line() {
        let mut buf = LineBuffer::new();
        let lines = buf.feed(b"\n");
        assert_eq!(lines, vec![""]);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_multibyte_char_split_across_chunks() {
        let text = "data: 构建完成\n";
        let bytes = text.as_bytes();
        // Split in the middle of a three-byte scalar
        let mid = 7;
        assert!(std::str::from_utf8(&bytes[..mid]).is_err());

        let mut buf = LineBuffer::new();
        assert!(buf.feed(&bytes[..mid]).is_empty());
        let lines = buf.feed(&bytes[mid..]);
        assert_eq!(lines, vec!["data: 构建完成"]);
    }

    #[test]
    fn test_finish_flushes_remainder() {
        let mut buf = LineBuffer::new();
        buf.feed(b"data: tail");
        assert_eq!(buf.finish().as_deref(), Some("data: tail"));
        assert_eq!(buf.finish(), None);
    }

    #[test]
    fn test_many_lines_in_one_chunk() {
        let mut buf = LineBuffer::new();
        let lines = buf.feed(b"a\nb\n\nc\n");
        assert_eq!(lines, vec!["a", "b", "", "c"]);
    }
}
