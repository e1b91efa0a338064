use std::io::{self, Write};

/// Line-at-a-time output to the status bar.
///
/// Every [`write_line`](Self::write_line) is flushed before it returns, so a
/// line is observable downstream as soon as the call completes. The bar
/// redraws per line and must not wait on a buffer.
pub struct LineWriter<W: Write> {
    inner: W,
    lines_written: u64,
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            lines_written: 0,
        }
    }

    /// Write `line` and a newline in one call, then flush.
    pub fn write_line(&mut self, line: impl AsRef<[u8]>) -> io::Result<()> {
        let line = line.as_ref();
        let mut buf = Vec::with_capacity(line.len() + 1);
        buf.extend_from_slice(line);
        buf.push(b'\n');
        self.inner.write_all(&buf)?;
        self.inner.flush()?;
        self.lines_written += 1;
        Ok(())
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
