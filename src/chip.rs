//! Chip identification types.
//!
//! Mirrors `esp_chip_info_t`: the model code and feature bitfield are
//! decoded into closed enums so formatting is a table lookup and an
//! unrecognised model is an explicit [`ChipModel::Unknown`] value.

use core::fmt;

/// Silicon family, decoded from `esp_chip_model_t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipModel {
    Esp32,
    Esp32S2,
    Esp32S3,
    Esp32C3,
    Esp32C2,
    Esp32C6,
    Esp32H2,
    Esp32P4,
    /// Model code not known to this firmware.
    Unknown(u32),
}

impl ChipModel {
    pub const fn from_code(code: u32) -> Self {
        match code {
            1 => Self::Esp32,
            2 => Self::Esp32S2,
            9 => Self::Esp32S3,
            5 => Self::Esp32C3,
            12 => Self::Esp32C2,
            13 => Self::Esp32C6,
            16 => Self::Esp32H2,
            18 => Self::Esp32P4,
            other => Self::Unknown(other),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Esp32 => "ESP32",
            Self::Esp32S2 => "ESP32S2",
            Self::Esp32S3 => "ESP32S3",
            Self::Esp32C3 => "ESP32C3",
            Self::Esp32C2 => "ESP32C2",
            Self::Esp32C6 => "ESP32C6",
            Self::Esp32H2 => "ESP32H2",
            Self::Esp32P4 => "ESP32P4",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for ChipModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Single `CHIP_FEATURE_*` bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ChipFeature {
    EmbeddedFlash = 1 << 0,
    WifiBgn = 1 << 1,
    Ble = 1 << 4,
    Bt = 1 << 5,
    Ieee802154 = 1 << 6,
    EmbeddedPsram = 1 << 7,
}

impl ChipFeature {
    pub const fn mask(self) -> u32 {
        self as u32
    }
}

/// Raw `esp_chip_info_t::features` bitfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChipFeatures(pub u32);

impl ChipFeatures {
    pub const fn contains(self, feature: ChipFeature) -> bool {
        self.0 & feature.mask() != 0
    }

    pub const fn with(self, feature: ChipFeature) -> Self {
        Self(self.0 | feature.mask())
    }
}

/// Slash-joined feature summary in the console's fixed order. The flash
/// tag is always present; it and the 802.15.4 tag end in `:` because the
/// report appends the flash size directly after the summary.
impl fmt::Display for ChipFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contains(ChipFeature::WifiBgn) {
            f.write_str("/802.11bgn")?;
        }
        if self.contains(ChipFeature::Ble) {
            f.write_str("/BLE")?;
        }
        if self.contains(ChipFeature::Bt) {
            f.write_str("/BT")?;
        }
        if self.contains(ChipFeature::EmbeddedFlash) {
            f.write_str("/Embedded-Flash:")?;
        } else {
            f.write_str("/External-Flash:")?;
        }
        if self.contains(ChipFeature::Ieee802154) {
            f.write_str("/IEEE 802.15.4:")?;
        }
        if self.contains(ChipFeature::EmbeddedPsram) {
            f.write_str("/Embedded-PSRAM")?;
        }
        Ok(())
    }
}

/// Decoded `esp_chip_info()` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipInfo {
    pub model: ChipModel,
    pub cores: u8,
    pub features: ChipFeatures,
    /// `major * 100 + minor` on ESP-IDF 5.x.
    pub revision: u16,
}
