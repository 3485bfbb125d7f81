//! Application core: command context and the port traits it depends on.
//!
//! Console handlers never touch the SDK directly. Everything they need
//! from the chip arrives through [`ports::PlatformPort`] and
//! [`ports::LogControlPort`], bundled with the identity cache and output
//! streams in a [`context::CommandContext`]. The same handlers therefore
//! run unchanged against the ESP-IDF adapters and against host mocks.

pub mod context;
pub mod ports;
