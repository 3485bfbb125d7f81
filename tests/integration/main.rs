//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that drives console lines through the
//! registry against mock adapters. All tests run on the host (x86_64)
//! with no real hardware required.

mod command_tests;
mod repl_tests;
