//! `mem`, `heap` and `free` reports, one row per capability class.

use core::fmt::{self, Write};

use crate::app::ports::PlatformPort;
use crate::memory::{CapabilityClass, HeapCapsInfo};

fn table_row(out: &mut dyn Write, label: &str, info: &HeapCapsInfo) -> fmt::Result {
    write!(
        out,
        "|{:>16}|{:>16}|{:>16}|{:>16}|{:>16}|\r\n",
        label, info.free, info.allocated, info.min_free, info.largest_block
    )
}

/// Free / allocated / minimum free / largest block for every class.
pub fn write_capability_table(
    platform: &mut dyn PlatformPort,
    out: &mut dyn Write,
) -> fmt::Result {
    write!(
        out,
        "|{:>16}|{:>16}|{:>16}|{:>16}|{:>16}|\r\n",
        "memory            ", "free", "allocated", "min_free", "max_free_block"
    )?;
    for class in CapabilityClass::ALL {
        let info = platform.heap_info(class);
        table_row(out, class.table_label(), &info)?;
    }
    Ok(())
}

/// Historical minimum free size and current largest block for every class.
pub fn write_min_heap(platform: &mut dyn PlatformPort, out: &mut dyn Write) -> fmt::Result {
    for class in CapabilityClass::ALL {
        let info = platform.heap_info(class);
        write!(
            out,
            "min heap ({}): {:>6}|{:>6}\r\n",
            class.short_label(),
            info.min_free,
            info.largest_block
        )?;
    }
    Ok(())
}

/// Current free size. The default row is the overall free heap; the
/// listing closes with the internal + DMA total.
pub fn write_free_memory(platform: &mut dyn PlatformPort, out: &mut dyn Write) -> fmt::Result {
    write!(
        out,
        "free mem ({}): {}\r\n",
        CapabilityClass::Default.short_label(),
        platform.free_heap_size()
    )?;
    for class in CapabilityClass::ALL
        .into_iter()
        .filter(|c| *c != CapabilityClass::Default)
    {
        let info = platform.heap_info(class);
        write!(out, "free mem ({}): {}\r\n", class.short_label(), info.free)?;
    }
    write!(
        out,
        "free mem (internal + dma): {}\r\n",
        platform.free_internal_heap_size()
    )
}
