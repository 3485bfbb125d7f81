//! Line-oriented read-eval-print loop.
//!
//! Reads one command per line, dispatches it through the [`Registry`] and
//! reports the outcome the way the ESP-IDF console REPL does.

use core::fmt::Write;
use std::io::{self, BufRead, Read};

use log::{info, warn};

use super::io::FmtIo;
use super::registry::{CommandStatus, Registry};
use crate::app::context::CommandContext;
use crate::app::ports::{LogControlPort, PlatformPort};
use crate::config::ConsoleConfig;
use crate::error::Error;
use crate::identity::IdentityCache;

pub struct Repl<'a> {
    registry: &'a Registry,
    config: &'a ConsoleConfig,
    identity: &'a IdentityCache,
    platform: &'a mut dyn PlatformPort,
    logs: &'a mut dyn LogControlPort,
}

impl<'a> Repl<'a> {
    pub fn new(
        registry: &'a Registry,
        config: &'a ConsoleConfig,
        identity: &'a IdentityCache,
        platform: &'a mut dyn PlatformPort,
        logs: &'a mut dyn LogControlPort,
    ) -> Self {
        Self {
            registry,
            config,
            identity,
            platform,
            logs,
        }
    }

    /// Execute a single line (without its terminator).
    ///
    /// Returns the handler status, or `None` when no command ran.
    pub fn execute_line(
        &mut self,
        line: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Option<CommandStatus> {
        if line.len() > self.config.max_line_len {
            let _ = write!(err, "Line too long\r\n");
            return None;
        }

        let result = {
            let mut ctx = CommandContext::new(
                &mut *self.platform,
                &mut *self.logs,
                self.identity,
                self.config,
                &mut *out,
                &mut *err,
            );
            self.registry.run(line, &mut ctx)
        };

        match result {
            Ok(0) => Some(0),
            Ok(status) => {
                let _ = write!(out, "Command returned non-zero error code: 0x{status:x}\r\n");
                Some(status)
            }
            Err(Error::EmptyCommand) => None,
            Err(Error::UnknownCommand) => {
                let _ = write!(out, "Unrecognized command\r\n");
                None
            }
            Err(e) => {
                let _ = write!(err, "{e}\r\n");
                None
            }
        }
    }

    /// Prompt, read and execute until `input` reaches EOF.
    ///
    /// At most `max_line_len` bytes (plus the line terminator) are buffered
    /// per line; the rest of an overlong line is discarded unread. Bytes
    /// that are not UTF-8 are replaced, never fatal.
    ///
    /// Returns the number of commands that ran.
    pub fn run<R, O, E>(&mut self, mut input: R, out: O, err: E) -> io::Result<usize>
    where
        R: BufRead,
        O: io::Write,
        E: io::Write,
    {
        let mut out = FmtIo::new(out);
        let mut err = FmtIo::new(err);
        // Room for the longest accepted line and its `\r\n`.
        let cap = self.config.max_line_len.saturating_add(2);
        let mut line = Vec::with_capacity(cap);
        let mut executed = 0;

        info!("console: ready");
        loop {
            let _ = out.write_str(&self.config.prompt);
            out.flush()?;

            line.clear();
            if input.by_ref().take(cap as u64).read_until(b'\n', &mut line)? == 0 {
                break;
            }

            if line.len() == cap && !line.ends_with(b"\n") {
                input.skip_until(b'\n')?;
                warn!("console: dropped line longer than {} bytes", self.config.max_line_len);
                let _ = err.write_str("Line too long\r\n");
            } else {
                let text = String::from_utf8_lossy(&line);
                let cmd = text.trim_end_matches(['\r', '\n']);
                if self.execute_line(cmd, &mut out, &mut err).is_some() {
                    executed += 1;
                }
            }

            if let Some(e) = out.take_error().or_else(|| err.take_error()) {
                return Err(e);
            }
            out.flush()?;
        }
        Ok(executed)
    }
}
