//! Integration tests for the REPL loop: prompt, line reading, dispatch.

use std::io::{self, Cursor};

use sysconsole::console::Repl;

use crate::mock_platform::Console;

fn run_script(console: &mut Console, script: &str) -> (io::Result<usize>, String, String) {
    run_bytes(console, script.as_bytes())
}

fn run_bytes(console: &mut Console, script: &[u8]) -> (io::Result<usize>, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = Repl::new(
        &console.registry,
        &console.config,
        &console.identity,
        &mut console.platform,
        &mut console.logs,
    )
    .run(Cursor::new(script), &mut out, &mut err);
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn runs_each_line_until_eof() {
    let mut console = Console::new();
    let (result, out, err) = run_script(&mut console, "man ver\nbogus\n\nman mac\r\n");

    // Blank and unknown lines do not count as executed.
    assert_eq!(result.unwrap(), 2);
    assert!(err.is_empty());
    assert_eq!(out.matches("esp> ").count(), 5);
    assert!(out.contains("Version:2.7.00042\r\n"));
    assert!(out.contains("Unrecognized command\r\n"));
    assert!(out.contains("MAC:24:6F:28:A1:B2:C3\r\n"));
}

#[test]
fn last_line_without_newline_still_runs() {
    let mut console = Console::new();
    let (result, out, _) = run_script(&mut console, "man ver");
    assert_eq!(result.unwrap(), 1);
    assert!(out.ends_with("Version:2.7.00042\r\nesp> "));
}

#[test]
fn empty_input_prints_one_prompt() {
    let mut console = Console::new();
    let (result, out, _) = run_script(&mut console, "");
    assert_eq!(result.unwrap(), 0);
    assert_eq!(out, "esp> ");
}

#[test]
fn overlong_line_is_rejected() {
    let mut console = Console::new();
    let line = format!("man {}", "x".repeat(console.config.max_line_len));
    let r = console.exec(&line);

    assert_eq!(r.status, None);
    assert!(r.out.is_empty());
    assert_eq!(r.err, "Line too long\r\n");
}

#[test]
fn usage_errors_go_to_stderr_and_status_to_stdout() {
    let mut console = Console::new();
    let (result, out, err) = run_script(&mut console, "chip now\n");

    assert_eq!(result.unwrap(), 1);
    assert!(err.contains("chip: unexpected argument \"now\""));
    assert!(out.contains("Command returned non-zero error code: 0xffffffff\r\n"));
    assert!(!out.contains("Chip info"));
}

#[test]
fn invalid_utf8_line_does_not_end_the_console() {
    let mut console = Console::new();
    let (result, out, err) = run_bytes(&mut console, b"\xff\nman ver\n");

    assert_eq!(result.unwrap(), 1);
    assert!(err.is_empty());
    assert!(out.contains("Unrecognized command\r\n"));
    assert!(out.contains("Version:2.7.00042\r\n"));
}

#[test]
fn invalid_utf8_inside_argument_is_replaced() {
    let mut console = Console::new();
    let (result, out, _) = run_bytes(&mut console, b"man \xfe\xff\n");

    // Unrecognised keyword: full report.
    assert_eq!(result.unwrap(), 1);
    assert!(out.contains("MAC:24:6F:28:A1:B2:C3\r\n"));
    assert!(out.contains("Version:2.7.00042\r\n"));
}

#[test]
fn unterminated_flood_is_rejected_without_buffering_it() {
    let mut console = Console::new();
    let flood = "x".repeat(console.config.max_line_len * 64);
    let (result, out, err) = run_script(&mut console, &flood);

    assert_eq!(result.unwrap(), 0);
    assert_eq!(err, "Line too long\r\n");
    assert_eq!(out, "esp> esp> ");
}

#[test]
fn overlong_line_is_skipped_and_next_line_runs() {
    let mut console = Console::new();
    let script = format!("{}\nman ver\n", "y".repeat(console.config.max_line_len * 4));
    let (result, out, err) = run_script(&mut console, &script);

    assert_eq!(result.unwrap(), 1);
    assert_eq!(err.matches("Line too long").count(), 1);
    assert!(out.contains("Version:2.7.00042\r\n"));
    assert!(!out.contains("Unrecognized command"));
}

#[test]
fn line_of_exactly_max_len_with_crlf_runs() {
    let mut console = Console::new();
    let line = format!("{:<width$}", "man ver", width = console.config.max_line_len);
    let (result, out, err) = run_script(&mut console, &format!("{line}\r\n"));

    assert_eq!(result.unwrap(), 1);
    assert!(err.is_empty());
    assert!(out.contains("Version:2.7.00042\r\n"));
}

struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "uart gone"))
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn output_error_stops_the_loop() {
    let mut console = Console::new();
    let result = Repl::new(
        &console.registry,
        &console.config,
        &console.identity,
        &mut console.platform,
        &mut console.logs,
    )
    .run(Cursor::new("chip\nchip\n"), BrokenPipe, io::sink());

    assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
}
