//! In-memory sinks and sources with scripted behavior

use std::io::{self, Read, Write};

/// Accepts `limit` bytes, then fails every write with `kind`
#[derive(Debug)]
pub struct FailingWriter {
    written: Vec<u8>,
    limit: usize,
    kind: io::ErrorKind,
}

impl FailingWriter {
    /// Creates a writer that fails once `limit` bytes are accepted
    pub fn new(limit: usize, kind: io::ErrorKind) -> Self {
        Self {
            written: Vec::new(),
            limit,
            kind,
        }
    }

    /// Bytes accepted before the failure
    pub fn written(&self) -> &[u8] {
        &self.written
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.limit - self.written.len();
        if room == 0 {
            return Err(io::Error::new(self.kind, "scripted write failure"));
        }
        let n = room.min(buf.len());
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Records writes and flushes; optionally fails on flush
#[derive(Debug, Default)]
pub struct TrackingWriter {
    pub data: Vec<u8>,
    pub writes: usize,
    pub flushes: usize,
    pub fail_flush: bool,
}

impl Write for TrackingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        if self.fail_flush {
            return Err(io::Error::new(io::ErrorKind::Other, "scripted flush failure"));
        }
        Ok(())
    }
}

/// Hands out at most `chunk` bytes per read
#[derive(Debug)]
pub struct ChunkedReader {
    data: Vec<u8>,
    pos: usize,
    chunk: usize,
    pub reads: usize,
}

impl ChunkedReader {
    /// Creates a reader over `data`
    pub fn new(data: impl Into<Vec<u8>>, chunk: usize) -> Self {
        Self {
            data: data.into(),
            pos: 0,
            chunk: chunk.max(1),
            reads: 0,
        }
    }
}

impl Read for ChunkedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reads += 1;
        let n = self.chunk.min(buf.len()).min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

/// Yields `data`, then fails with `kind`
#[derive(Debug)]
pub struct FailingReader {
    data: Vec<u8>,
    pos: usize,
    kind: io::ErrorKind,
}

impl FailingReader {
    /// Creates a reader over `data` that fails once it is drained
    pub fn new(data: impl Into<Vec<u8>>, kind: io::ErrorKind) -> Self {
        Self {
            data: data.into(),
            pos: 0,
            kind,
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos == self.data.len() {
            return Err(io::Error::new(self.kind, "scripted read failure"));
        }
        let n = buf.len().min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}
