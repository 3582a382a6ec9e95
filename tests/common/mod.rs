//! Recording sinks shared by the integration tests.
#![allow(dead_code)]

use forkhandle::{Alert, Console, Handles, NotificationRequest, NotifyBackend, PackageDescriptor};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct RecordingConsole {
    lines: Mutex<Vec<String>>,
}

impl RecordingConsole {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Console for RecordingConsole {
    fn write_line(&self, line: &str) -> Result<(), forkhandle::Error> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingBackend {
    requests: Mutex<Vec<NotificationRequest>>,
}

impl RecordingBackend {
    pub fn requests(&self) -> Vec<NotificationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl NotifyBackend for RecordingBackend {
    fn deliver(&self, request: &NotificationRequest) -> Result<(), forkhandle::Error> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct CountingAlert {
    beeps: AtomicUsize,
}

impl CountingAlert {
    pub fn beeps(&self) -> usize {
        self.beeps.load(Ordering::SeqCst)
    }
}

impl Alert for CountingAlert {
    fn beep(&self) {
        self.beeps.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct Harness {
    pub handles: Handles,
    pub console: Arc<RecordingConsole>,
    pub backend: Arc<RecordingBackend>,
    pub alert: Arc<CountingAlert>,
}

pub fn harness() -> Harness {
    let console = Arc::new(RecordingConsole::default());
    let backend = Arc::new(RecordingBackend::default());
    let alert = Arc::new(CountingAlert::default());

    let handles = Handles::builder(PackageDescriptor::new("Fork theme"))
        .console(console.clone())
        .backend(backend.clone())
        .alert(alert.clone())
        .build();

    Harness {
        handles,
        console,
        backend,
        alert,
    }
}

pub const GOOD: &str = "\x1b[32m✔\x1b[39m";
pub const BAD: &str = "\x1b[31m✘\x1b[39m";

pub fn paint(code: u8, text: &str) -> String {
    format!("\x1b[{code}m{text}\x1b[39m")
}
