//! Heap capability classes.
//!
//! Each class maps to an ESP-IDF `MALLOC_CAP_*` mask. [`CapabilityClass::ALL`]
//! fixes the row order of every memory report.

/// Memory region category with specific hardware properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityClass {
    Default,
    Internal,
    Iram8Bit,
    Bit8,
    Bit32,
    RtcRam,
    Dma,
    Exec,
    Retention,
}

impl CapabilityClass {
    /// Report order.
    pub const ALL: [Self; 9] = [
        Self::Default,
        Self::Internal,
        Self::Iram8Bit,
        Self::Bit8,
        Self::Bit32,
        Self::RtcRam,
        Self::Dma,
        Self::Exec,
        Self::Retention,
    ];

    /// `MALLOC_CAP_*` bit for `heap_caps_*` queries.
    pub const fn mask(self) -> u32 {
        match self {
            Self::Exec => 1 << 0,
            Self::Bit32 => 1 << 1,
            Self::Bit8 => 1 << 2,
            Self::Dma => 1 << 3,
            Self::Internal => 1 << 11,
            Self::Default => 1 << 12,
            Self::Iram8Bit => 1 << 13,
            Self::Retention => 1 << 14,
            Self::RtcRam => 1 << 15,
        }
    }

    /// Row label for the `mem` table (18 columns).
    pub const fn table_label(self) -> &'static str {
        match self {
            Self::Default => "CAP_DEFAULT       ",
            Self::Internal => "CAP_INTERNAL      ",
            Self::Iram8Bit => "CAP_IRAM_8BIT     ",
            Self::Bit8 => "CAP_8BIT          ",
            Self::Bit32 => "CAP_32BIT         ",
            Self::RtcRam => "CAP_RTCRAM        ",
            Self::Dma => "CAP_DMA           ",
            Self::Exec => "CAP_EXEC          ",
            Self::Retention => "CAP_RETENTION     ",
        }
    }

    /// Parenthesised label for the `heap` and `free` listings (14 columns).
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Default => "default       ",
            Self::Internal => "internal only ",
            Self::Iram8Bit => "IRAM 8BIT     ",
            Self::Bit8 => "8BIT          ",
            Self::Bit32 => "32BIT         ",
            Self::RtcRam => "RTCRAM        ",
            Self::Dma => "DMA           ",
            Self::Exec => "EXEC          ",
            Self::Retention => "RETENTION     ",
        }
    }
}

/// `multi_heap_info_t` subset for one capability class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeapCapsInfo {
    pub free: usize,
    pub allocated: usize,
    /// Lowest free size since boot.
    pub min_free: usize,
    pub largest_block: usize,
}
