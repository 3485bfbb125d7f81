//! Fuzz target: `Repl::execute_line`
//!
//! Drives arbitrary input lines through the tokenizer, registry and every
//! report against the host-simulated platform, and asserts that dispatch
//! never panics and that a rejected line produces no report.
//!
//! cargo fuzz run fuzz_console_line

#![no_main]

use libfuzzer_sys::fuzz_target;
use sysconsole::adapters::esp_platform::EspPlatform;
use sysconsole::adapters::log_gate::LogLevelGate;
use sysconsole::config::ConsoleConfig;
use sysconsole::console::{Repl, split_argv, system_registry};
use sysconsole::identity::IdentityCache;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = core::str::from_utf8(data) else {
        return;
    };
    // The simulated restart exits the process.
    if split_argv(line).command() == "reset" {
        return;
    }

    let mut config = ConsoleConfig::default();
    config.run_time_stats = true;
    let Ok(registry) = system_registry(&config) else {
        return;
    };
    let identity = IdentityCache::new();
    identity.set([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    let mut platform = EspPlatform::new();
    let mut logs = LogLevelGate::new();

    let mut out = String::new();
    let mut err = String::new();
    let status = Repl::new(&registry, &config, &identity, &mut platform, &mut logs)
        .execute_line(line, &mut out, &mut err);

    if status.is_none() {
        assert!(!out.contains("MAC:"), "rejected line printed a report");
    }
});
