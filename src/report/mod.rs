//! Text reports rendered by the console commands.
//!
//! Each submodule turns platform query results into the fixed textual
//! layout the device console has always printed. Line endings are part of
//! the layout (`\n\r` in the chip report and task headers, `\r\n` elsewhere) and are kept
//! byte-for-byte for tools that scrape the console.

pub mod chip;
pub mod management;
pub mod memory;
pub mod tasks;
