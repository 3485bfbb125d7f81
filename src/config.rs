//! Console configuration parameters
//!
//! Build-time and board-level knobs for the system console. Values mirror
//! the FreeRTOS `sdkconfig` options the task reports depend on and can be
//! overridden from a JSON blob (e.g. provisioned alongside the firmware).

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DEFAULT_PROMPT: &str = "esp> ";

/// Firmware version reported by the `man` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmwareVersion {
    pub major: u8,
    pub minor: u8,
    /// Rendered zero-padded to 5 digits; `u16` keeps it within 5.
    pub build: u16,
}

impl FirmwareVersion {
    pub const fn new(major: u8, minor: u8, build: u16) -> Self {
        Self { major, minor, build }
    }
}

impl Default for FirmwareVersion {
    fn default() -> Self {
        Self {
            major: env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(0),
            minor: env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0),
            build: env!("CARGO_PKG_VERSION_PATCH").parse().unwrap_or(0),
        }
    }
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{:05}", self.major, self.minor, self.build)
    }
}

/// System console configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// REPL prompt
    pub prompt: heapless::String<16>,
    /// Bytes reserved per task for `vTaskList` / `vTaskGetRunTimeStats` output
    pub bytes_per_task: usize,
    /// Task table carries a core-affinity column
    /// (`CONFIG_FREERTOS_VTASKLIST_INCLUDE_COREID`)
    pub task_list_core_id: bool,
    /// Register the `load` command
    /// (`CONFIG_FREERTOS_GENERATE_RUN_TIME_STATS`)
    pub run_time_stats: bool,
    /// Longest accepted input line
    pub max_line_len: usize,
    /// Version printed by `man`
    pub version: FirmwareVersion,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        let mut prompt = heapless::String::new();
        let _ = prompt.push_str(DEFAULT_PROMPT);
        Self {
            prompt,
            bytes_per_task: 40, // see vTaskList description
            task_list_core_id: false,
            run_time_stats: cfg!(feature = "run-time-stats"),
            max_line_len: 256,
            version: FirmwareVersion::default(),
        }
    }
}

impl ConsoleConfig {
    /// Parse a JSON config blob. Missing fields take their defaults.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let cfg: Self =
            serde_json::from_slice(bytes).map_err(|_| Error::Config("malformed JSON"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Range-check every field. Invalid values are rejected, not clamped.
    pub fn validate(&self) -> Result<()> {
        if !(16..=256).contains(&self.bytes_per_task) {
            return Err(Error::Config("bytes_per_task must be 16-256"));
        }
        if !(16..=1024).contains(&self.max_line_len) {
            return Err(Error::Config("max_line_len must be 16-1024"));
        }
        if self.prompt.is_empty() {
            return Err(Error::Config("prompt must not be empty"));
        }
        Ok(())
    }
}
