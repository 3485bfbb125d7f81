//! `core::fmt::Write` over a `std::io::Write` stream.

use core::fmt;
use std::io;

/// Adapts a byte stream (UART stdout/stderr) for the report writers.
///
/// The first I/O error is kept for [`take_error`](FmtIo::take_error);
/// `fmt::Error` carries no detail.
pub struct FmtIo<W> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: io::Write> FmtIo<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> fmt::Write for FmtIo<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            if self.error.is_none() {
                self.error = Some(e);
            }
            fmt::Error
        })
    }
}
