//! Platform adapter: chip, heap and scheduler queries behind [`PlatformPort`].
//!
//! On `espidf` every method is a thin wrapper over the corresponding
//! ESP-IDF / FreeRTOS call. On other targets a fixed ESP32-S3 profile is
//! simulated so the console can run on the host.

use log::{info, warn};

use super::mac::read_base_mac;
use crate::app::ports::PlatformPort;
use crate::chip::ChipInfo;
use crate::identity::MacAddress;
use crate::memory::{CapabilityClass, HeapCapsInfo};

#[cfg(target_os = "espidf")]
use esp_idf_sys as sys;

#[cfg(target_os = "espidf")]
const _: () = {
    assert!(CapabilityClass::Exec.mask() == sys::MALLOC_CAP_EXEC);
    assert!(CapabilityClass::Dma.mask() == sys::MALLOC_CAP_DMA);
    assert!(CapabilityClass::Internal.mask() == sys::MALLOC_CAP_INTERNAL);
    assert!(CapabilityClass::Default.mask() == sys::MALLOC_CAP_DEFAULT);
    assert!(CapabilityClass::RtcRam.mask() == sys::MALLOC_CAP_RTCRAM);
};

/// Length of the NUL-terminated text at the start of `buf`.
#[cfg(any(target_os = "espidf", test))]
fn c_text_len(buf: &[u8]) -> usize {
    buf.iter().position(|&b| b == 0).unwrap_or(buf.len())
}

pub struct EspPlatform {
    sdk_version: String,
}

impl EspPlatform {
    pub fn new() -> Self {
        let sdk_version = Self::read_sdk_version();
        info!("platform: SDK {sdk_version}");
        Self { sdk_version }
    }

    #[cfg(target_os = "espidf")]
    fn read_sdk_version() -> String {
        // SAFETY: esp_get_idf_version returns a static NUL-terminated string.
        unsafe { core::ffi::CStr::from_ptr(sys::esp_get_idf_version()) }
            .to_string_lossy()
            .into_owned()
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_sdk_version() -> String {
        sim::SDK_VERSION.to_owned()
    }
}

impl Default for EspPlatform {
    fn default() -> Self {
        Self::new()
    }
}

// ── Device implementation ─────────────────────────────────────

#[cfg(target_os = "espidf")]
impl PlatformPort for EspPlatform {
    fn chip_info(&mut self) -> ChipInfo {
        use crate::chip::{ChipFeatures, ChipModel};

        let mut raw: sys::esp_chip_info_t = unsafe { core::mem::zeroed() };
        unsafe { sys::esp_chip_info(&mut raw) };
        ChipInfo {
            model: ChipModel::from_code(raw.model),
            cores: raw.cores,
            features: ChipFeatures(raw.features),
            revision: raw.revision,
        }
    }

    fn flash_size_bytes(&mut self) -> u32 {
        let mut size = 0u32;
        // NULL selects the default (main) flash chip.
        let ret = unsafe { sys::esp_flash_get_size(core::ptr::null_mut(), &mut size) };
        if ret != sys::ESP_OK {
            warn!("platform: esp_flash_get_size failed ({ret})");
            return 0;
        }
        size
    }

    fn sdk_version(&mut self) -> &str {
        &self.sdk_version
    }

    fn task_count(&mut self) -> usize {
        unsafe { sys::uxTaskGetNumberOfTasks() as usize }
    }

    fn write_task_list(&mut self, buf: &mut [u8]) -> usize {
        if buf.is_empty() {
            return 0;
        }
        // SAFETY: vTaskList does not bound its output. Callers size `buf`
        // at `bytes_per_task` per task plus `TASK_HEADROOM` spare slots, so
        // it holds every row as long as no more than that many tasks are
        // created between the count and this call.
        unsafe { sys::vTaskList(buf.as_mut_ptr().cast()) };
        c_text_len(buf)
    }

    #[cfg(feature = "run-time-stats")]
    fn write_task_load(&mut self, buf: &mut [u8]) -> usize {
        if buf.is_empty() {
            return 0;
        }
        // SAFETY: same sizing contract as `write_task_list`.
        unsafe { sys::vTaskGetRunTimeStats(buf.as_mut_ptr().cast()) };
        c_text_len(buf)
    }

    #[cfg(not(feature = "run-time-stats"))]
    fn write_task_load(&mut self, _buf: &mut [u8]) -> usize {
        warn!("platform: run-time stats not compiled in");
        0
    }

    fn heap_info(&mut self, class: CapabilityClass) -> HeapCapsInfo {
        let mut raw: sys::multi_heap_info_t = unsafe { core::mem::zeroed() };
        unsafe { sys::heap_caps_get_info(&mut raw, class.mask()) };
        HeapCapsInfo {
            free: raw.total_free_bytes,
            allocated: raw.total_allocated_bytes,
            min_free: raw.minimum_free_bytes,
            largest_block: raw.largest_free_block,
        }
    }

    fn free_heap_size(&mut self) -> u32 {
        unsafe { sys::esp_get_free_heap_size() }
    }

    fn free_internal_heap_size(&mut self) -> u32 {
        unsafe { sys::esp_get_free_internal_heap_size() }
    }

    fn hardware_mac(&mut self) -> MacAddress {
        read_base_mac()
    }

    fn restart(&mut self) -> ! {
        esp_idf_hal::reset::restart()
    }
}

// ── Host simulation ───────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
mod sim {
    use crate::chip::{ChipFeature, ChipFeatures, ChipInfo, ChipModel};
    use crate::memory::{CapabilityClass, HeapCapsInfo};

    pub const SDK_VERSION: &str = "v5.3.2-sim";
    pub const FLASH_BYTES: u32 = 8 * 1024 * 1024;

    /// `(name, state, priority, stack high-water mark, task number)`
    pub const TASKS: &[(&str, char, u8, u32, u8)] = &[
        ("main", 'X', 1, 2216, 3),
        ("IDLE0", 'R', 0, 1012, 5),
        ("IDLE1", 'R', 0, 1000, 6),
        ("esp_timer", 'S', 22, 3376, 4),
        ("ipc0", 'B', 24, 1104, 1),
        ("ipc1", 'B', 24, 1092, 2),
    ];

    /// `(name, run-time ticks, percent)`
    pub const LOAD: &[(&str, u32, u8)] = &[
        ("main", 11_742, 1),
        ("IDLE0", 981_204, 49),
        ("IDLE1", 994_310, 49),
        ("esp_timer", 212, 0),
        ("ipc0", 37, 0),
        ("ipc1", 29, 0),
    ];

    pub fn chip_info() -> ChipInfo {
        ChipInfo {
            model: ChipModel::Esp32S3,
            cores: 2,
            features: ChipFeatures(0)
                .with(ChipFeature::WifiBgn)
                .with(ChipFeature::Ble),
            revision: 2,
        }
    }

    pub fn heap_info(class: CapabilityClass) -> HeapCapsInfo {
        // Scale a base profile per class so rows are distinguishable.
        let scale = match class {
            CapabilityClass::Default | CapabilityClass::Bit8 => 8,
            CapabilityClass::Internal | CapabilityClass::Dma => 6,
            CapabilityClass::Bit32 | CapabilityClass::Exec => 4,
            CapabilityClass::Iram8Bit | CapabilityClass::Retention => 1,
            CapabilityClass::RtcRam => 0,
        };
        HeapCapsInfo {
            free: 40_960 * scale,
            allocated: 9_216 * scale,
            min_free: 38_400 * scale,
            largest_block: 32_768 * scale,
        }
    }

    /// Copy `text` into `buf` C-style: truncated, NUL-terminated.
    pub fn copy_c_text(buf: &mut [u8], text: &str) -> usize {
        let Some(room) = buf.len().checked_sub(1) else {
            return 0;
        };
        let n = text.len().min(room);
        buf[..n].copy_from_slice(&text.as_bytes()[..n]);
        buf[n] = 0;
        n
    }
}

#[cfg(not(target_os = "espidf"))]
impl PlatformPort for EspPlatform {
    fn chip_info(&mut self) -> ChipInfo {
        sim::chip_info()
    }

    fn flash_size_bytes(&mut self) -> u32 {
        sim::FLASH_BYTES
    }

    fn sdk_version(&mut self) -> &str {
        &self.sdk_version
    }

    fn task_count(&mut self) -> usize {
        sim::TASKS.len()
    }

    fn write_task_list(&mut self, buf: &mut [u8]) -> usize {
        use core::fmt::Write;

        let mut text = String::new();
        for (name, state, prio, hwm, num) in sim::TASKS {
            let _ = write!(text, "{name:<16}\t{state}\t{prio}\t{hwm}\t{num}\r\n");
        }
        sim::copy_c_text(buf, &text)
    }

    fn write_task_load(&mut self, buf: &mut [u8]) -> usize {
        use core::fmt::Write;

        if !cfg!(feature = "run-time-stats") {
            warn!("platform: run-time stats not compiled in");
            return 0;
        }
        let mut text = String::new();
        for (name, ticks, pct) in sim::LOAD {
            let pct = if *pct == 0 {
                "<1%".to_owned()
            } else {
                format!("{pct}%")
            };
            let _ = write!(text, "{name:<16}\t{ticks}\t\t{pct}\r\n");
        }
        sim::copy_c_text(buf, &text)
    }

    fn heap_info(&mut self, class: CapabilityClass) -> HeapCapsInfo {
        sim::heap_info(class)
    }

    fn free_heap_size(&mut self) -> u32 {
        u32::try_from(sim::heap_info(CapabilityClass::Default).free).unwrap_or(u32::MAX)
    }

    fn free_internal_heap_size(&mut self) -> u32 {
        u32::try_from(sim::heap_info(CapabilityClass::Internal).free).unwrap_or(u32::MAX)
    }

    fn hardware_mac(&mut self) -> MacAddress {
        read_base_mac()
    }

    fn restart(&mut self) -> ! {
        info!("platform: simulated restart, exiting");
        std::process::exit(0)
    }
}
