//! Port traits: the hexagonal boundary between console handlers and the SDK.
//!
//! ```text
//!   EspPlatform / LogLevelGate ──▶ Port trait ──▶ command handlers
//! ```
//!
//! Driven adapters (chip queries, heap statistics, scheduler
//! introspection, log routing) implement these traits. Handlers receive
//! them as `&mut dyn` through the
//! [`CommandContext`](super::context::CommandContext).

use log::LevelFilter;

use crate::chip::ChipInfo;
use crate::identity::MacAddress;
use crate::memory::{CapabilityClass, HeapCapsInfo};

// ───────────────────────────────────────────────────────────────
// Platform port (driven adapter: SDK → console)
// ───────────────────────────────────────────────────────────────

/// Read-side port over chip, heap and scheduler queries, plus restart.
///
/// Queries are infallible: the underlying SDK calls either succeed or
/// report zero.
pub trait PlatformPort {
    /// `esp_chip_info()`.
    fn chip_info(&mut self) -> ChipInfo;

    /// Size of the main flash chip in bytes.
    fn flash_size_bytes(&mut self) -> u32;

    /// SDK version string (`esp_get_idf_version()`).
    fn sdk_version(&mut self) -> &str;

    /// Number of tasks currently known to the scheduler.
    fn task_count(&mut self) -> usize;

    /// Write the `vTaskList` table into `buf`; returns bytes written.
    ///
    /// One line per live task, `\r\n` terminated, no header.
    fn write_task_list(&mut self, buf: &mut [u8]) -> usize;

    /// Write the `vTaskGetRunTimeStats` table into `buf`; returns bytes written.
    fn write_task_load(&mut self, buf: &mut [u8]) -> usize;

    /// `heap_caps_get_info()` for one capability class.
    fn heap_info(&mut self, class: CapabilityClass) -> HeapCapsInfo;

    /// `esp_get_free_heap_size()`.
    fn free_heap_size(&mut self) -> u32;

    /// `esp_get_free_internal_heap_size()` (internal + DMA capable).
    fn free_internal_heap_size(&mut self) -> u32;

    /// Burned-in base MAC address.
    fn hardware_mac(&mut self) -> MacAddress;

    /// Software reset. Never returns.
    fn restart(&mut self) -> !;
}

// ───────────────────────────────────────────────────────────────
// Log control port (driven adapter: console ↔ log routing)
// ───────────────────────────────────────────────────────────────

/// Log routing state captured by [`LogControlPort::suppress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSnapshot {
    /// `log` crate maximum level before suppression.
    pub level: LevelFilter,
    /// ESP-IDF default (`"*"`) level before suppression, when applicable.
    pub sdk_level: Option<u32>,
}

/// Silences ordinary log output while a report is written so table rows
/// are not interleaved with log lines.
pub trait LogControlPort {
    /// Stop log emission; returns the state to hand back to [`restore`].
    ///
    /// [`restore`]: LogControlPort::restore
    fn suppress(&mut self) -> LogSnapshot;

    /// Reinstate the state captured by [`suppress`](LogControlPort::suppress).
    fn restore(&mut self, snapshot: LogSnapshot);
}
