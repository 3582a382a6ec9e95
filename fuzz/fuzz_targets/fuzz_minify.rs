#![no_main]
use libfuzzer_sys::fuzz_target;
use forkhandle::minify_css;

fuzz_target!(|data: &str| {
    // Every rule only removes characters
    let out = minify_css(data);
    assert!(out.len() <= data.len());
});
