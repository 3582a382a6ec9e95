#![no_main]
use libfuzzer_sys::fuzz_target;
use forkhandle::fmt::{MessageTemplate, TemplateValues};

fuzz_target!(|data: &str| {
    let template = MessageTemplate::parse(data);
    let values = TemplateValues::new()
        .message("Undefined variable")
        .line("12")
        .file("main.scss")
        .plugin("sass");
    let _ = template.render(&values);
});
