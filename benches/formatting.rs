use criterion::{Criterion, criterion_group, criterion_main};
use forkhandle::fmt::{MessageTemplate, TemplateValues, colorize};
use forkhandle::notify::NullBackend;
use forkhandle::output::SilentAlert;
use forkhandle::{Console, FileRecord, GenericReporter, LogOverrides, Notifier, PackageDescriptor};
use std::hint::black_box;
use std::sync::Arc;

struct Discard;

impl Console for Discard {
    fn write_line(&self, _line: &str) -> Result<(), forkhandle::Error> {
        Ok(())
    }
}

fn bench_colorize(c: &mut Criterion) {
    c.bench_function("colorize", |b| {
        b.iter(|| colorize(black_box("cyan"), black_box("site.css ")));
    });
}

fn bench_template_render(c: &mut Criterion) {
    let template = MessageTemplate::parse("main.scss:{line} {message}");
    let values = TemplateValues::new().line("12").message("Undefined variable");

    c.bench_function("MessageTemplate::render", |b| {
        b.iter(|| template.render(black_box(&values)));
    });
}

fn bench_format_line(c: &mut Criterion) {
    let notifier = Notifier::new(PackageDescriptor::new("bench"), Arc::new(NullBackend));
    let reporter = GenericReporter::new(notifier, Arc::new(Discard), Arc::new(SilentAlert));
    let file = FileRecord::new("src", "src/css/site.css");

    let mut group = c.benchmark_group("GenericReporter::format_line");
    let good = reporter.options(LogOverrides::new().color("magenta"));
    group.bench_function("good", |b| {
        b.iter(|| reporter.format_line(Some(black_box(&file)), "minified", &good));
    });
    let bad = reporter.options(LogOverrides::new().bad());
    group.bench_function("bad", |b| {
        b.iter(|| reporter.format_line(Some(black_box(&file)), "failed", &bad));
    });
    group.finish();
}

criterion_group!(benches, bench_colorize, bench_template_render, bench_format_line);
criterion_main!(benches);
