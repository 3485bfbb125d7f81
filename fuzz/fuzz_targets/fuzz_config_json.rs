//! Fuzz target: `ConsoleConfig::from_json`
//!
//! Arbitrary bytes must either be rejected or yield a configuration that
//! passes validation.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use sysconsole::config::ConsoleConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(config) = ConsoleConfig::from_json(data) {
        assert!(config.validate().is_ok(), "accepted config failed validation");
        assert!(!config.prompt.is_empty());
    }
});
