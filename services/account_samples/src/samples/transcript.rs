use std::io::{self, Write};

use tracing::warn;

use super::error::SampleError;

///
/// Output sink for a workflow that changes remote state.
///
/// The first write failure is kept and every later write is dropped, so a
/// closed console never stops the workflow between a change and its revert.
/// The kept failure is reported by [`Transcript::finish`].
///
pub struct Transcript<'a, W: Write + ?Sized> {
    out: &'a mut W,
    error: Option<io::Error>,
}

impl<'a, W: Write + ?Sized> Transcript<'a, W> {
    pub fn new(out: &'a mut W) -> Self {
        Self { out, error: None }
    }

    pub fn finish(mut self) -> Result<(), SampleError> {
        if self.error.is_none() {
            self.flush()?;
        }

        match self.error.take() {
            Some(source) => Err(SampleError::Output { source }),
            None => Ok(()),
        }
    }

    fn record(&mut self, res: io::Result<()>) {
        if let Err(err) = res {
            warn!(error = %err, "Sample output failed, continuing without it");
            self.error = Some(err);
        }
    }
}

impl<W: Write + ?Sized> Write for Transcript<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.error.is_none() {
            let res = self.out.write_all(buf);
            self.record(res);
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.error.is_none() {
            let res = self.out.flush();
            self.record(res);
        }

        Ok(())
    }
}

/// Accepts `capacity` bytes, then fails every write with a broken pipe.
#[cfg(test)]
pub struct ClosedSink {
    pub written: Vec<u8>,
    capacity: usize,
}

#[cfg(test)]
impl ClosedSink {
    pub fn after(capacity: usize) -> Self {
        Self {
            written: Vec::new(),
            capacity,
        }
    }
}

#[cfg(test)]
impl Write for ClosedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.capacity - self.written.len();
        if room == 0 {
            return Err(io::ErrorKind::BrokenPipe.into());
        }

        let n = room.min(buf.len());
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
