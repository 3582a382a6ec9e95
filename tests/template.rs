use forkhandle::fmt::{MessageTemplate, Placeholder, TemplateSegment, TemplateValues};

fn values() -> TemplateValues {
    TemplateValues::new()
        .message("Undefined variable")
        .line("12")
        .file("a.scss")
        .plugin("sass")
}

#[test]
fn default_template_is_message() {
    assert_eq!(MessageTemplate::default().render(&values()), "Undefined variable");
}

#[test]
fn renders_all_placeholders() {
    let template = MessageTemplate::parse("[{plugin}] {file}:{line} {message}");
    assert_eq!(
        template.render(&values()),
        "[sass] a.scss:12 Undefined variable"
    );
}

#[test]
fn unknown_placeholders_stay_literal() {
    let template = MessageTemplate::parse("{nope} {message}");
    assert_eq!(template.render(&values()), "{nope} Undefined variable");
    assert_eq!(
        template.segments(),
        &[
            TemplateSegment::Literal("{nope} ".to_string()),
            TemplateSegment::Placeholder(Placeholder::Message),
        ]
    );
}

#[test]
fn unclosed_brace_is_literal() {
    let template = MessageTemplate::parse("{message} {line");
    assert_eq!(template.render(&values()), "Undefined variable {line");
}

#[test]
fn missing_values_render_empty() {
    let template = MessageTemplate::parse("a.scss:{line} {message}");
    let values = TemplateValues::new().message("boom");
    assert_eq!(template.render(&values), "a.scss: boom");
}

#[test]
fn from_segments_does_not_scan_literals() {
    let template = MessageTemplate::from_segments(vec![
        TemplateSegment::Literal("{line}:".to_string()),
        TemplateSegment::Placeholder(Placeholder::Line),
    ]);
    let values = TemplateValues::new().line("7");
    assert_eq!(template.render(&values), "{line}:7");
}
