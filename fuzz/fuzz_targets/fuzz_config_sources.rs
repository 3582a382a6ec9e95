#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Must not panic on any config content
    let (sources, _) = forkhandle::config::extract_sources(data);
    assert!(sources.iter().all(|s| !s.is_empty()));
});
