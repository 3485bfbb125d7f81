//! Identity cache: the MAC address of the last identification request.
//!
//! A network-facing identification handshake may [`set`](IdentityCache::set)
//! a peer-visible MAC; the next management report prints it once and then
//! clears the cache, falling back to the burned-in MAC afterwards.
//!
//! The bytes live behind a `std::sync::Mutex` so the cache can be shared
//! with such a writer. [`consume`](IdentityCache::consume) performs the
//! read-resolve-clear sequence under one lock acquisition so a concurrent
//! `set` cannot be lost between the read and the clear.

use core::fmt::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Full 6-byte MAC address.
pub type MacAddress = [u8; 6];

/// `AA:BB:CC:DD:EE:FF` (17 chars).
pub type MacString = heapless::String<17>;

const ZERO_MAC: MacAddress = [0u8; 6];

/// Render a MAC in upper-case colon-separated hex.
pub fn format_mac(mac: &MacAddress) -> MacString {
    let mut s = MacString::new();
    let _ = write!(
        s,
        "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
        mac[0], mac[1], mac[2], mac[3], mac[4], mac[5]
    );
    s
}

/// Process-lifetime holder of the last identification MAC. Starts zeroed.
#[derive(Debug, Default)]
pub struct IdentityCache {
    mac: Mutex<MacAddress>,
}

impl IdentityCache {
    pub const fn new() -> Self {
        Self {
            mac: Mutex::new(ZERO_MAC),
        }
    }

    /// Overwrite the stored MAC unconditionally.
    pub fn set(&self, mac: MacAddress) {
        *self.lock() = mac;
    }

    /// Copy of the stored MAC (all-zero when nothing is cached).
    pub fn get(&self) -> MacAddress {
        *self.lock()
    }

    pub fn clear(&self) {
        *self.lock() = ZERO_MAC;
    }

    pub fn is_empty(&self) -> bool {
        *self.lock() == ZERO_MAC
    }

    /// Run `f` with the cached MAC (`None` when all-zero), then zero the
    /// cache. The lock is held across both steps.
    pub fn consume<R>(&self, f: impl FnOnce(Option<MacAddress>) -> R) -> R {
        let mut guard = self.lock();
        let cached = (*guard != ZERO_MAC).then_some(*guard);
        let result = f(cached);
        *guard = ZERO_MAC;
        result
    }

    fn lock(&self) -> MutexGuard<'_, MacAddress> {
        // A panic while holding the lock cannot leave six plain bytes torn.
        self.mac.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
