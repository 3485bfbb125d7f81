//! `tasks` and `load` reports.
//!
//! FreeRTOS formats its task tables into a caller-supplied buffer sized
//! at a fixed budget per task. The buffer is allocated fallibly so an
//! exhausted heap surfaces as [`Error::Allocation`] instead of an abort,
//! and nothing is printed in that case.

use core::fmt::Write;

use crate::app::ports::PlatformPort;
use crate::config::ConsoleConfig;
use crate::error::{Error, Result};

pub const TASK_LIST_HEADER: &str = "Task Name\tStatus\tPrio\tHWM\tNo";
pub const AFFINITY_COLUMN: &str = "\tAffinity";
pub const TASK_LOAD_HEADER: &str = "Task Name\tTimerTicks\tCPU Load#";

/// Extra task slots in every table buffer. FreeRTOS writes one row per
/// task alive at write time, which may exceed the count read beforehand.
pub const TASK_HEADROOM: usize = 4;

/// Zeroed buffer of `task_count * bytes_per_task` bytes.
pub fn report_buffer(task_count: usize, bytes_per_task: usize) -> Result<Vec<u8>> {
    let bytes = task_count.saturating_mul(bytes_per_task);
    let mut buf = Vec::new();
    buf.try_reserve_exact(bytes)
        .map_err(|_| Error::Allocation { bytes })?;
    buf.resize(bytes, 0);
    Ok(buf)
}

fn write_table(out: &mut dyn Write, buf: &[u8], written: usize) {
    let table = &buf[..written.min(buf.len())];
    let _ = out.write_str(&String::from_utf8_lossy(table));
}

/// Header plus one `vTaskList` row per live task.
pub fn write_task_list(
    platform: &mut dyn PlatformPort,
    config: &ConsoleConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let slots = platform.task_count().saturating_add(TASK_HEADROOM);
    let mut buf = report_buffer(slots, config.bytes_per_task)?;

    let _ = out.write_str(TASK_LIST_HEADER);
    if config.task_list_core_id {
        let _ = out.write_str(AFFINITY_COLUMN);
    }
    let _ = out.write_str("\n\r");

    let written = platform.write_task_list(&mut buf);
    write_table(out, &buf, written);
    Ok(())
}

/// Header plus one `vTaskGetRunTimeStats` row per live task.
///
/// Nothing is printed when the scheduler produced no statistics.
pub fn write_task_load(
    platform: &mut dyn PlatformPort,
    config: &ConsoleConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let count = platform.task_count();
    let mut buf = report_buffer(count.saturating_add(TASK_HEADROOM), config.bytes_per_task)?;

    let written = platform.write_task_load(&mut buf);
    if written == 0 && count > 0 {
        return Err(Error::ReportUnavailable("run-time stats"));
    }

    let _ = write!(out, "\n\r\n\r\n\r{TASK_LOAD_HEADER}\n\r");
    write_table(out, &buf, written);
    Ok(())
}
