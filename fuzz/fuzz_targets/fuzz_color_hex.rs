#![no_main]
use libfuzzer_sys::fuzz_target;
use forkhandle::fmt::Color;

fuzz_target!(|data: &str| {
    // Must not panic on any hex string
    if let Some(color) = Color::from_hex(data) {
        let _ = color.fg_ansi();
    }
});
