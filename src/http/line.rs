use std::io;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Default cap on one logical line, matching the request buffer size.
pub const MAX_LINE: usize = 1024;

/// Reads logical lines from a byte stream.
///
/// A line ends at `\n`, `\r`, or `\r\n`. After a bare `\r` the next byte is
/// inspected without being consumed to decide whether it completes a `\r\n`
/// pair; a one-byte lookahead slot stands in for a socket-level peek so the
/// reader works over any `AsyncRead`.
///
/// End-of-stream before a terminator yields the partial content read so far
/// as a complete line.
pub struct LineReader<R> {
    inner: R,
    lookahead: Option<u8>,
    max_line: usize,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_max_line(inner, MAX_LINE)
    }

    pub fn with_max_line(inner: R, max_line: usize) -> Self {
        Self {
            inner,
            lookahead: None,
            max_line,
        }
    }

    /// Reads a single byte, honoring the lookahead slot.
    ///
    /// Returns `None` at end-of-stream. The CGI body relay uses this so
    /// bytes held back by terminator peeking are not lost.
    pub async fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(b) = self.lookahead.take() {
            return Ok(Some(b));
        }

        let mut buf = [0u8; 1];
        match self.inner.read(&mut buf).await? {
            0 => Ok(None),
            _ => Ok(Some(buf[0])),
        }
    }

    /// Reads one logical line, terminator excluded.
    ///
    /// A line that fills the buffer without a terminator is returned
    /// truncated to `max_line - 1` bytes; the rest stays in the stream.
    pub async fn read_line(&mut self) -> io::Result<String> {
        let mut line = Vec::new();

        while line.len() < self.max_line - 1 {
            match self.read_byte().await? {
                // End-of-stream: treat what we have as a complete line.
                None => break,
                Some(b'\n') => break,
                Some(b'\r') => {
                    // Consume the '\n' of a CRLF pair; anything else is the
                    // first byte of the next line and goes back in the slot.
                    if let Some(next) = self.read_byte().await? {
                        if next != b'\n' {
                            self.lookahead = Some(next);
                        }
                    }
                    break;
                }
                Some(b) => line.push(b),
            }
        }

        Ok(String::from_utf8_lossy(&line).into_owned())
    }
}
