//! Burned-in MAC address.
//!
//! The base MAC is what the chip derives its interface MACs from. A
//! custom base MAC (set via `esp_base_mac_addr_set`) wins over the
//! factory eFuse value.

use crate::identity::MacAddress;

/// Deterministic MAC reported by the host simulation.
pub const SIM_MAC: MacAddress = [0xDE, 0xAD, 0xBE, 0xEF, 0xCA, 0xFE];

/// Read the base MAC address, falling back to the factory eFuse MAC.
#[cfg(target_os = "espidf")]
pub fn read_base_mac() -> MacAddress {
    use esp_idf_sys::{ESP_OK, esp_base_mac_addr_get, esp_efuse_mac_get_default};

    let mut mac: MacAddress = [0u8; 6];
    // SAFETY: both calls write exactly 6 bytes into `mac`.
    let ret = unsafe { esp_base_mac_addr_get(mac.as_mut_ptr()) };
    if ret != ESP_OK {
        log::debug!("base MAC not set ({ret}), using eFuse default");
        unsafe {
            esp_efuse_mac_get_default(mac.as_mut_ptr());
        }
    }
    mac
}

/// Simulation: returns a deterministic fake MAC.
#[cfg(not(target_os = "espidf"))]
pub fn read_base_mac() -> MacAddress {
    SIM_MAC
}
