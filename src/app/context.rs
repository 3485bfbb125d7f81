//! Per-invocation handler context.

use core::fmt::Write;

use crate::config::ConsoleConfig;
use crate::identity::IdentityCache;

use super::ports::{LogControlPort, PlatformPort};

/// Everything a command handler may touch.
///
/// Built by the REPL (or a test) for each dispatched line. The identity
/// cache is shared, not owned: other writers hold the same reference.
pub struct CommandContext<'a> {
    pub platform: &'a mut dyn PlatformPort,
    pub logs: &'a mut dyn LogControlPort,
    pub identity: &'a IdentityCache,
    pub config: &'a ConsoleConfig,
    /// Report output (stdout).
    pub out: &'a mut dyn Write,
    /// Usage and error output (stderr).
    pub err: &'a mut dyn Write,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        platform: &'a mut dyn PlatformPort,
        logs: &'a mut dyn LogControlPort,
        identity: &'a IdentityCache,
        config: &'a ConsoleConfig,
        out: &'a mut dyn Write,
        err: &'a mut dyn Write,
    ) -> Self {
        Self {
            platform,
            logs,
            identity,
            config,
            out,
            err,
        }
    }
}
