//! Integration tests for the system commands: registry → handler → report.

use std::panic::{AssertUnwindSafe, catch_unwind};

use sysconsole::memory::CapabilityClass;

use crate::mock_platform::{Console, LogCall, Restarted, test_config};

// ── chip ──────────────────────────────────────────────────────

#[test]
fn chip_prints_sdk_model_features_and_flash() {
    let mut console = Console::new();
    let r = console.exec("chip");

    assert_eq!(r.status, Some(0));
    assert_eq!(
        r.out,
        "IDF Version:v5.2.1\n\r\
         Chip info:\n\r\
         \tmodel:ESP32\n\r\
         \tcores:2\n\r\
         \tfeature:/802.11bgn/BLE/BT/External-Flash:4 MB\n\r\
         \trevision number:301\n\r"
    );
}

#[test]
fn chip_with_unknown_model_code() {
    let mut console = Console::new();
    console.platform.chip.model = sysconsole::chip::ChipModel::from_code(999);
    let r = console.exec("chip");
    assert!(r.out.contains("\tmodel:Unknown\n\r"), "{}", r.out);
}

// ── tasks / load ──────────────────────────────────────────────

#[test]
fn tasks_prints_header_then_one_row_per_task() {
    let mut console = Console::new();
    let r = console.exec("tasks");

    assert_eq!(r.status, Some(0));
    let (header, table) = r.out.split_once("\n\r").unwrap();
    assert_eq!(header, "Task Name\tStatus\tPrio\tHWM\tNo");
    let rows: Vec<_> = table.split_terminator("\r\n").collect();
    assert_eq!(rows.len(), console.platform.task_rows.len());
    assert!(rows[0].starts_with("main"));
}

#[test]
fn tasks_header_gains_affinity_column() {
    let mut cfg = test_config();
    cfg.task_list_core_id = true;
    let mut console = Console::with_config(cfg);
    let r = console.exec("tasks");
    assert!(r.out.starts_with("Task Name\tStatus\tPrio\tHWM\tNo\tAffinity\n\r"));
}

#[test]
fn tasks_allocation_failure_prints_nothing_and_fails() {
    let mut console = Console::new();
    console.platform.task_count = Some(usize::MAX / 2);
    let r = console.exec("tasks");

    assert_eq!(r.status, Some(1));
    assert!(!r.out.contains("Task Name"));
    assert_eq!(r.out, "Command returned non-zero error code: 0x1\r\n");
}

#[test]
fn tasks_created_after_the_count_still_fit() {
    let mut console = Console::new();
    // Scheduler reported one task; three rows exist by the time it writes.
    console.platform.task_count = Some(1);
    let r = console.exec("tasks");

    assert_eq!(r.status, Some(0));
    let (_, table) = r.out.split_once("\n\r").unwrap();
    let rows: Vec<_> = table.split_terminator("\r\n").collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[2].starts_with("esp_timer"));
}

#[test]
fn tasks_with_no_tasks_prints_only_header() {
    let mut console = Console::new();
    console.platform.task_rows.clear();
    let r = console.exec("tasks");
    assert_eq!(r.status, Some(0));
    assert_eq!(r.out, "Task Name\tStatus\tPrio\tHWM\tNo\n\r");
}

#[test]
fn load_only_exists_with_run_time_stats() {
    let mut cfg = test_config();
    cfg.run_time_stats = false;
    let mut console = Console::with_config(cfg);
    let r = console.exec("load");
    assert_eq!(r.status, None);
    assert_eq!(r.out, "Unrecognized command\r\n");
}

#[test]
fn load_prints_blank_lines_header_and_rows() {
    let mut cfg = test_config();
    cfg.run_time_stats = true;
    let mut console = Console::with_config(cfg);
    let r = console.exec("load");

    assert_eq!(r.status, Some(0));
    assert_eq!(
        r.out,
        "\n\r\n\r\n\rTask Name\tTimerTicks\tCPU Load#\n\r\
         main            \t5120\t\t1%\r\n\
         IDLE            \t480001\t\t98%\r\n"
    );
}

#[test]
fn load_without_statistics_prints_nothing_and_fails() {
    let mut cfg = test_config();
    cfg.run_time_stats = true;
    let mut console = Console::with_config(cfg);
    console.platform.load_rows.clear();
    let r = console.exec("load");

    assert_eq!(r.status, Some(1));
    assert_eq!(r.out, "Command returned non-zero error code: 0x1\r\n");
}

// ── mem / heap / free ─────────────────────────────────────────

#[test]
fn mem_prints_one_row_per_class_in_stable_order() {
    let mut console = Console::new();
    let r = console.exec("mem");

    assert_eq!(r.status, Some(0));
    let lines: Vec<_> = r.out.split_terminator("\r\n").collect();
    assert_eq!(lines.len(), 1 + CapabilityClass::ALL.len());
    assert!(lines[0].starts_with("|memory            |"));
    for (line, class) in lines[1..].iter().zip(CapabilityClass::ALL) {
        assert!(
            line.starts_with(&format!("|{}|", class.table_label())),
            "{line}"
        );
    }
    assert_eq!(console.platform.heap_queries, CapabilityClass::ALL);
}

#[test]
fn mem_row_values_are_right_aligned() {
    let mut console = Console::new();
    let r = console.exec("mem");
    // Default is the first class: free 1000, allocated 100, min 900, block 500.
    assert!(r.out.contains(
        "|CAP_DEFAULT       |            1000|             100|             900|             500|\r\n"
    ));
}

#[test]
fn heap_prints_min_free_and_largest_block() {
    let mut console = Console::new();
    let r = console.exec("heap");

    assert_eq!(r.status, Some(0));
    let lines: Vec<_> = r.out.split_terminator("\r\n").collect();
    assert_eq!(lines.len(), CapabilityClass::ALL.len());
    assert_eq!(lines[0], "min heap (default       ):    900|   500");
    assert_eq!(lines[1], "min heap (internal only ):   1800|  1000");
    for (line, class) in lines.iter().zip(CapabilityClass::ALL) {
        let info = console.platform.heap[&class];
        let expected = format!(
            "min heap ({}): {:>6}|{:>6}",
            class.short_label(),
            info.min_free,
            info.largest_block
        );
        assert_eq!(*line, expected, "{class:?}");
    }
    assert_eq!(console.platform.heap_queries, CapabilityClass::ALL);
}

#[test]
fn free_starts_with_total_and_ends_with_internal() {
    let mut console = Console::new();
    let r = console.exec("free");

    assert_eq!(r.status, Some(0));
    let lines: Vec<_> = r.out.split_terminator("\r\n").collect();
    assert_eq!(lines.len(), CapabilityClass::ALL.len() + 1);
    assert_eq!(lines[0], "free mem (default       ): 123456");
    assert_eq!(lines[1], "free mem (internal only ): 2000");
    assert_eq!(lines.last().copied(), Some("free mem (internal + dma): 98765"));
    assert!(
        !console.platform.heap_queries.contains(&CapabilityClass::Default),
        "default row comes from the overall free heap size"
    );
}

#[test]
fn table_commands_suppress_and_restore_logs() {
    for cmd in ["mem", "heap", "free", "man"] {
        let mut console = Console::new();
        console.exec(cmd);
        assert_eq!(
            console.logs.calls,
            [LogCall::Suppress, LogCall::Restore],
            "{cmd}"
        );
    }

    let mut console = Console::new();
    console.exec("tasks");
    assert!(console.logs.calls.is_empty());
}

// ── reset ─────────────────────────────────────────────────────

#[test]
fn reset_restarts_exactly_once_and_never_returns() {
    let mut console = Console::new();
    let result = catch_unwind(AssertUnwindSafe(|| console.exec("reset")));

    let payload = result.expect_err("reset must not return");
    assert!(payload.downcast_ref::<Restarted>().is_some());
    assert_eq!(console.platform.restarts, 1);
}

// ── argument validation ───────────────────────────────────────

#[test]
fn no_arg_commands_reject_extra_tokens() {
    for cmd in ["chip", "tasks", "mem", "heap", "free", "reset"] {
        let mut console = Console::new();
        let r = console.exec(&format!("{cmd} extra"));

        assert_eq!(r.status, Some(-1), "{cmd}");
        assert!(
            r.err.contains(&format!("{cmd}: unexpected argument \"extra\"")),
            "{cmd}: {}",
            r.err
        );
        assert_eq!(console.platform.restarts, 0);
        assert!(console.platform.heap_queries.is_empty());
    }
}

#[test]
fn unknown_command_is_reported() {
    let mut console = Console::new();
    let r = console.exec("bogus 1 2");
    assert_eq!(r.status, None);
    assert_eq!(r.out, "Unrecognized command\r\n");
}

#[test]
fn help_lists_every_system_command() {
    let mut console = Console::new();
    let r = console.exec("help");

    assert_eq!(r.status, Some(0));
    for name in ["chip", "free", "heap", "man [mac|ver]", "mem", "reset", "tasks"] {
        assert!(r.out.contains(&format!("{name}\r\n")), "missing {name}");
    }
    assert!(r.out.contains("  Software reset of the chip\r\n"));
}
