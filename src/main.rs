//! sysconsole firmware: main entry point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  EspPlatform            LogLevelGate        UART0 stdio  │
//! │  (PlatformPort)         (LogControlPort)    (BlockingStdIo)
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ───────────────     │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │  Registry · command handlers · report renderers    │  │
//! │  └────────────────────────────────────────────────────┘  │
//! │                                                          │
//! │  Repl (prompt / read_line / dispatch)                    │
//! └──────────────────────────────────────────────────────────┘
//! ```

use anyhow::Result;
use log::{info, warn};

use esp_idf_hal::gpio::AnyIOPin;
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::uart::UartDriver;
use esp_idf_svc::io::vfs::BlockingStdIo;

use sysconsole::adapters::esp_platform::EspPlatform;
use sysconsole::adapters::log_gate::LogLevelGate;
use sysconsole::app::context::CommandContext;
use sysconsole::config::ConsoleConfig;
use sysconsole::console::{FmtIo, Repl, print_task_list, system_registry};
use sysconsole::identity::IdentityCache;

/// Build-time override, e.g. `SYSCONSOLE_CONFIG='{"prompt":"dbg> "}'`.
fn load_config() -> ConsoleConfig {
    let Some(json) = option_env!("SYSCONSOLE_CONFIG") else {
        return ConsoleConfig::default();
    };
    match ConsoleConfig::from_json(json.as_bytes()) {
        Ok(cfg) => {
            info!("Config loaded from SYSCONSOLE_CONFIG");
            cfg
        }
        Err(e) => {
            warn!("SYSCONSOLE_CONFIG rejected ({}), using defaults", e);
            ConsoleConfig::default()
        }
    }
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_sys::link_patches();
    esp_idf_logger::init()?;

    let config = load_config();
    info!("sysconsole v{}", config.version);

    // ── 2. Adapters ───────────────────────────────────────────
    let mut platform = EspPlatform::new();
    let mut logs = LogLevelGate::new();
    // Shared with any identification handshake that records a peer MAC.
    let identity = IdentityCache::new();
    let registry = system_registry(&config)?;

    // ── 3. Boot-time task snapshot ────────────────────────────
    {
        let mut out = FmtIo::new(std::io::stdout());
        let mut err = FmtIo::new(std::io::stderr());
        let mut ctx = CommandContext::new(
            &mut platform,
            &mut logs,
            &identity,
            &config,
            &mut out,
            &mut err,
        );
        if let Err(e) = print_task_list(&mut ctx) {
            warn!("Boot task list unavailable: {}", e);
        }
        out.flush()?;
    }

    // ── 4. Console on UART0 ───────────────────────────────────
    // Default console wiring: UART0, 115200 8N1, ESP32 TX/RX on GPIO1/GPIO3.
    let peripherals = Peripherals::take()?;
    let uart = UartDriver::new(
        peripherals.uart0,
        peripherals.pins.gpio1,
        peripherals.pins.gpio3,
        Option::<AnyIOPin>::None,
        Option::<AnyIOPin>::None,
        &Default::default(),
    )?;
    // Dropping this reverts stdin to non-blocking mode.
    let _blocking_io = BlockingStdIo::uart(uart)?;

    let stdin = std::io::stdin();
    let mut repl = Repl::new(&registry, &config, &identity, &mut platform, &mut logs);
    let executed = repl.run(stdin.lock(), std::io::stdout(), std::io::stderr())?;

    // Only reached if the console input closes.
    warn!("Console input closed after {} commands", executed);
    Ok(())
}
