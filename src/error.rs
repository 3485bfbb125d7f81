//! Unified error type for the system console.
//!
//! Every handler and the registry return [`Error`]. Variants are `Copy` so
//! they can be logged and mapped to a console status code without
//! allocating. The console framework only sees the numeric status from
//! [`Error::status`].

use core::fmt;

/// Generic ESP-IDF failure code (`ESP_FAIL`).
pub const STATUS_FAIL: i32 = -1;

/// Every fallible console operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A report buffer of `bytes` could not be obtained.
    Allocation { bytes: usize },
    /// More positional tokens than the command declares.
    TooManyArguments {
        command: &'static str,
        given: usize,
        max: usize,
    },
    /// No command with the typed name is registered.
    UnknownCommand,
    /// The input line held no tokens.
    EmptyCommand,
    /// A command name was registered twice.
    DuplicateCommand(&'static str),
    /// A platform query failed and the report cannot be produced.
    ReportUnavailable(&'static str),
    /// Configuration is invalid or could not be parsed.
    Config(&'static str),
}

impl Error {
    /// Status code reported back to the console framework.
    pub const fn status(&self) -> i32 {
        match self {
            Self::Allocation { .. } | Self::ReportUnavailable(_) => 1,
            Self::TooManyArguments { .. }
            | Self::UnknownCommand
            | Self::EmptyCommand
            | Self::DuplicateCommand(_)
            | Self::Config(_) => STATUS_FAIL,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation { bytes } => write!(f, "failed to allocate {bytes} byte report buffer"),
            Self::TooManyArguments { command, given, max } => {
                write!(f, "{command}: {given} arguments given, at most {max} accepted")
            }
            Self::UnknownCommand => write!(f, "unrecognized command"),
            Self::EmptyCommand => write!(f, "empty command"),
            Self::DuplicateCommand(name) => write!(f, "command '{name}' already registered"),
            Self::ReportUnavailable(what) => write!(f, "report unavailable: {what}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Console-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
