//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements      | Connects to                        |
//! |----------------|-----------------|------------------------------------|
//! | `esp_platform` | PlatformPort    | esp_chip_info, heap_caps, FreeRTOS |
//! | `log_gate`     | LogControlPort  | `log` max level, esp_log_level_set |
//! | `mac`          |                 | base MAC / eFuse                   |

pub mod esp_platform;
pub mod log_gate;
pub mod mac;
