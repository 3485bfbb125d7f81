//! System command handlers
//!
//! | command | args        | report                                   |
//! |---------|-------------|------------------------------------------|
//! | `chip`  |             | SDK version, model, features, flash size |
//! | `tasks` |             | `vTaskList` table                        |
//! | `load`  |             | `vTaskGetRunTimeStats` table             |
//! | `mem`   |             | heap_caps info per capability class      |
//! | `heap`  |             | min free / largest block per class       |
//! | `free`  |             | current free size per class              |
//! | `reset` |             | restarts the chip                        |
//! | `man`   | `[mac|ver]` | MAC address and firmware version         |

use log::info;

use super::parser::Argv;
use super::registry::{CommandDescriptor, Registry};
use crate::app::context::CommandContext;
use crate::config::ConsoleConfig;
use crate::error::Result;
use crate::report::management::{ManagementQuery, write_management_report};
use crate::report::{chip, memory, tasks};

/// System commands
pub static SYSTEM_COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor::new(
        "heap",
        "Get minimum size of free heap memory during program execution",
        cmd_heap,
    )
    .quiet(),
    CommandDescriptor::new("free", "Get current size of free memory", cmd_free).quiet(),
    CommandDescriptor::new("reset", "Software reset of the chip", cmd_reset),
    CommandDescriptor::new(
        "mem",
        "Get memory information during program execution",
        cmd_mem,
    )
    .quiet(),
    CommandDescriptor::new(
        "man",
        "Management Report MAC and Version. Command can be :man [mac|ver]",
        cmd_man,
    )
    .with_args(1, "[mac|ver]")
    .quiet(),
    CommandDescriptor::new("tasks", "Get information about running tasks", cmd_tasks),
    CommandDescriptor::new("chip", "Get chip info and SDK", cmd_chip),
];

/// Only registered when run-time stats collection is enabled.
pub static LOAD_COMMAND: CommandDescriptor = CommandDescriptor::new(
    "load",
    "Get information about running tasks CPU load",
    cmd_load,
);

/// Registry holding the system commands and `help`.
pub fn system_registry(config: &ConsoleConfig) -> Result<Registry> {
    let mut registry = Registry::new();
    for cmd in SYSTEM_COMMANDS {
        registry.register(*cmd)?;
    }
    if config.run_time_stats {
        registry.register(LOAD_COMMAND)?;
    }
    registry.register_help()?;
    info!("console: {} commands registered", registry.len());
    Ok(registry)
}

/// Print the task table outside the console (e.g. at boot).
pub fn print_task_list(ctx: &mut CommandContext<'_>) -> Result<()> {
    tasks::write_task_list(ctx.platform, ctx.config, ctx.out)
}

// --- Command Implementations ---

fn cmd_chip(_argv: &Argv, ctx: &mut CommandContext<'_>) -> Result<()> {
    let _ = chip::write_chip_report(ctx.platform, ctx.out);
    Ok(())
}

fn cmd_tasks(_argv: &Argv, ctx: &mut CommandContext<'_>) -> Result<()> {
    print_task_list(ctx)
}

fn cmd_load(_argv: &Argv, ctx: &mut CommandContext<'_>) -> Result<()> {
    tasks::write_task_load(ctx.platform, ctx.config, ctx.out)
}

fn cmd_mem(_argv: &Argv, ctx: &mut CommandContext<'_>) -> Result<()> {
    let _ = memory::write_capability_table(ctx.platform, ctx.out);
    Ok(())
}

fn cmd_heap(_argv: &Argv, ctx: &mut CommandContext<'_>) -> Result<()> {
    let _ = memory::write_min_heap(ctx.platform, ctx.out);
    Ok(())
}

fn cmd_free(_argv: &Argv, ctx: &mut CommandContext<'_>) -> Result<()> {
    let _ = memory::write_free_memory(ctx.platform, ctx.out);
    Ok(())
}

fn cmd_reset(_argv: &Argv, ctx: &mut CommandContext<'_>) -> Result<()> {
    info!("Restarting...");
    ctx.platform.restart()
}

fn cmd_man(argv: &Argv, ctx: &mut CommandContext<'_>) -> Result<()> {
    let query = ManagementQuery::from_keyword(argv.arg(0));
    let _ = write_management_report(
        query,
        ctx.identity,
        ctx.platform,
        &ctx.config.version,
        ctx.out,
    );
    Ok(())
}
