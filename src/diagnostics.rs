//! On-demand diagnostics: stack traces and hex dumps.
//!
//! These helpers are stateless. They bypass the level gate and never touch
//! the record store; the [`Logger`](crate::Logger) only forwards their
//! output to its console handler.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt::Write as _;

/// Maximum number of frames reported by [`capture_stack_trace`].
pub const STACK_TRACE_DEPTH: usize = 10;

/// Bytes rendered per line by [`dump_memory`].
pub const DUMP_BYTES_PER_LINE: usize = 16;

/// Header line printed above a stack trace.
pub const STACK_TRACE_HEADER: &str = "Stack trace:";

/// Captures up to [`STACK_TRACE_DEPTH`] frames of the calling thread's stack.
///
/// Each entry is the symbol name of one frame, followed by its source
/// position when debug info is available. Frames belonging to the capture
/// machinery itself are skipped. On platforms where unwinding is not
/// supported the result is empty.
pub fn capture_stack_trace() -> Vec<String> {
    let backtrace = Backtrace::force_capture();
    if backtrace.status() != BacktraceStatus::Captured {
        return Vec::new();
    }
    parse_frames(&backtrace.to_string())
        .into_iter()
        .skip_while(|frame| is_capture_frame(frame))
        .take(STACK_TRACE_DEPTH)
        .collect()
}

fn is_capture_frame(frame: &str) -> bool {
    frame.starts_with("std::backtrace")
        || frame.starts_with("<std::backtrace")
        || frame.starts_with("pico_logger::diagnostics::capture_stack_trace")
}

/// Splits the textual rendering of a [`Backtrace`] into one string per frame.
fn parse_frames(rendered: &str) -> Vec<String> {
    let mut frames: Vec<String> = Vec::new();
    for line in rendered.lines() {
        let trimmed = line.trim_start();
        if let Some(position) = trimmed.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut() {
                let _ = write!(frame, " at {}", position);
            }
            continue;
        }
        if let Some((index, symbol)) = trimmed.split_once(": ") {
            if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) {
                frames.push(symbol.to_string());
            }
        }
    }
    frames
}

/// Renders `bytes` as lowercase hex, [`DUMP_BYTES_PER_LINE`] bytes per line,
/// under a `Memory dump (label):` header.
///
/// # Examples
///
/// ```
/// # use pico_logger::diagnostics::dump_memory;
/// let dump = dump_memory("header", &[0xde, 0xad, 0xbe, 0xef]);
/// assert_eq!(dump, "Memory dump (header):\nde ad be ef");
/// ```
pub fn dump_memory(label: &str, bytes: &[u8]) -> String {
    memory_dump_lines(label, bytes).join("\n")
}

/// Same as [`dump_memory`], one string per output line.
pub fn memory_dump_lines(label: &str, bytes: &[u8]) -> Vec<String> {
    let mut lines = Vec::with_capacity(1 + bytes.len().div_ceil(DUMP_BYTES_PER_LINE));
    lines.push(format!("Memory dump ({}):", label));
    for chunk in bytes.chunks(DUMP_BYTES_PER_LINE) {
        let mut line = String::with_capacity(chunk.len() * 3);
        for (i, b) in chunk.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            let _ = write!(line, "{:02x}", b);
        }
        lines.push(line);
    }
    lines
}

/// Dumps an arbitrary memory region.
///
/// # Safety
///
/// `ptr` must be valid for reads of `len` bytes for the duration of the call,
/// as required by [`std::slice::from_raw_parts`]. A null `ptr` is accepted
/// only together with `len == 0`.
pub unsafe fn dump_memory_raw(label: &str, ptr: *const u8, len: usize) -> String {
    if len == 0 {
        return dump_memory(label, &[]);
    }
    let bytes = std::slice::from_raw_parts(ptr, len);
    dump_memory(label, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frames() {
        let rendered = "   0: app::inner\n             at ./src/lib.rs:10:5\n   1: app::outer\n   2: main\n";
        assert_eq!(
            parse_frames(rendered),
            ["app::inner at ./src/lib.rs:10:5", "app::outer", "main"]
        );
    }

    #[test]
    fn test_parse_frames_ignores_noise() {
        assert!(parse_frames("disabled backtrace").is_empty());
        assert!(parse_frames("note: some detail").is_empty());
    }

    #[test]
    fn test_dump_line_breaks() {
        let bytes: Vec<u8> = (0u8..20).collect();
        let lines = memory_dump_lines("counter", &bytes);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f");
        assert_eq!(lines[2], "10 11 12 13");
    }
}
