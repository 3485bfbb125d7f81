//! `man` management report: MAC address and firmware version.
//!
//! The MAC comes from the [`IdentityCache`] when a peer has recorded one,
//! otherwise from the chip's base MAC. Every report clears the cache, so a
//! recorded MAC is printed at most once.
//!
//! The MAC line is emitted twice (`<mac>\r\nMAC:<mac>\r\n`); host tools
//! parsing the console expect that layout.

use core::fmt::{self, Write};

use crate::app::ports::PlatformPort;
use crate::config::FirmwareVersion;
use crate::identity::{IdentityCache, MacAddress, format_mac};

/// Which sections of the report to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagementQuery {
    Mac,
    Version,
    /// No keyword, or one that is not recognised.
    All,
}

impl ManagementQuery {
    pub fn from_keyword(keyword: Option<&str>) -> Self {
        match keyword {
            Some("mac") => Self::Mac,
            Some("ver") => Self::Version,
            _ => Self::All,
        }
    }
}

fn write_mac(out: &mut dyn Write, mac: &MacAddress) -> fmt::Result {
    let mac = format_mac(mac);
    write!(out, "{mac}\r\nMAC:{mac}\r\n")
}

fn write_version(out: &mut dyn Write, version: &FirmwareVersion) -> fmt::Result {
    write!(out, "Version:{version}\r\n")
}

pub fn render(
    query: ManagementQuery,
    mac: &MacAddress,
    version: &FirmwareVersion,
    out: &mut dyn Write,
) -> fmt::Result {
    match query {
        ManagementQuery::Mac => write_mac(out, mac),
        ManagementQuery::Version => write_version(out, version),
        ManagementQuery::All => {
            write_mac(out, mac)?;
            write_version(out, version)
        }
    }
}

/// Resolve the MAC, render the report, then clear the identity cache.
pub fn write_management_report(
    query: ManagementQuery,
    identity: &IdentityCache,
    platform: &mut dyn PlatformPort,
    version: &FirmwareVersion,
    out: &mut dyn Write,
) -> fmt::Result {
    identity.consume(|cached| {
        let mac = cached.unwrap_or_else(|| platform.hardware_mac());
        render(query, &mac, version, out)
    })
}
