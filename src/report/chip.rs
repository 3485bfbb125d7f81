//! `chip` report: SDK version and decoded `esp_chip_info()`.

use core::fmt::{self, Write};

use crate::app::ports::PlatformPort;
use crate::chip::ChipInfo;

const BYTES_PER_MB: u32 = 1024 * 1024;

/// Whole megabytes, truncated.
pub const fn flash_megabytes(bytes: u32) -> u32 {
    bytes / BYTES_PER_MB
}

pub fn render(
    info: &ChipInfo,
    sdk_version: &str,
    flash_bytes: u32,
    out: &mut dyn Write,
) -> fmt::Result {
    write!(out, "IDF Version:{sdk_version}\n\r")?;
    write!(out, "Chip info:\n\r")?;
    write!(out, "\tmodel:{}\n\r", info.model)?;
    write!(out, "\tcores:{}\n\r", info.cores)?;
    write!(
        out,
        "\tfeature:{}{} MB\n\r",
        info.features,
        flash_megabytes(flash_bytes)
    )?;
    write!(out, "\trevision number:{}\n\r", info.revision)
}

/// Query the platform and render the report.
pub fn write_chip_report(platform: &mut dyn PlatformPort, out: &mut dyn Write) -> fmt::Result {
    let info = platform.chip_info();
    let flash = platform.flash_size_bytes();
    let sdk = platform.sdk_version();
    render(&info, sdk, flash, out)
}
