#![no_main]

use libfuzzer_sys::fuzz_target;
use respec::core::{rewrite::convert_line, Style};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Control byte layout (data[0]):
    // bit 0: output style
    let style = if data[0] & 0x01 == 0 {
        Style::Positional
    } else {
        Style::Fluent
    };
    let Ok(line) = std::str::from_utf8(&data[1..]) else {
        return;
    };

    // The engine is best-effort by contract: any line shape must come back
    // as text, never as a panic.
    let _ = convert_line(line, style);
});
