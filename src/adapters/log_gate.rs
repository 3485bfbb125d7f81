//! Log suppression adapter.
//!
//! Implements [`LogControlPort`] by lowering the `log` crate's global
//! maximum level to `Off`. On the device the ESP-IDF default tag level is
//! silenced too, so C components stay quiet while a table is printed.

use log::LevelFilter;

use crate::app::ports::{LogControlPort, LogSnapshot};

#[cfg(target_os = "espidf")]
use esp_idf_sys::{esp_log_level_get, esp_log_level_set, esp_log_level_t_ESP_LOG_NONE};

#[derive(Debug, Default)]
pub struct LogLevelGate;

impl LogLevelGate {
    pub fn new() -> Self {
        Self
    }
}

impl LogControlPort for LogLevelGate {
    fn suppress(&mut self) -> LogSnapshot {
        let level = log::max_level();
        log::set_max_level(LevelFilter::Off);

        #[cfg(target_os = "espidf")]
        let sdk_level = {
            // SAFETY: "*" is a static NUL-terminated tag.
            let prev = unsafe { esp_log_level_get(c"*".as_ptr()) };
            unsafe { esp_log_level_set(c"*".as_ptr(), esp_log_level_t_ESP_LOG_NONE) };
            Some(prev)
        };

        #[cfg(not(target_os = "espidf"))]
        let sdk_level = None;

        LogSnapshot { level, sdk_level }
    }

    fn restore(&mut self, snapshot: LogSnapshot) {
        log::set_max_level(snapshot.level);

        #[cfg(target_os = "espidf")]
        if let Some(prev) = snapshot.sdk_level {
            unsafe { esp_log_level_set(c"*".as_ptr(), prev) };
        }
    }
}
