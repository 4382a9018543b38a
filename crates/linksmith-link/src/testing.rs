//! Shared test fixtures.

use camino::Utf8PathBuf;
use linksmith_core::types::{CommandInvocation, ProcessOutput};
use std::cell::RefCell;
use std::fs;
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use crate::invoke::ProcessRunner;
use crate::linker::Confirmer;

/// Temporary tree with `data/` and `data/file.txt`
pub struct Fixture {
    _temp_dir: TempDir,
    pub root: Utf8PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let root = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).expect("non UTF-8 temp dir");
        fs::create_dir_all(root.join("data")).unwrap();
        fs::write(root.join("data").join("file.txt"), "content").unwrap();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn dir(&self) -> Utf8PathBuf {
        self.root.join("data")
    }

    pub fn file(&self) -> Utf8PathBuf {
        self.root.join("data").join("file.txt")
    }
}

/// Runner that records invocations and replays a canned outcome
#[derive(Clone)]
pub struct FakeRunner {
    pub calls: Rc<RefCell<Vec<CommandInvocation>>>,
    outcome: Result<ProcessOutput, io::ErrorKind>,
}

impl FakeRunner {
    pub fn exiting(exit_code: i32, stdout: &str, stderr: &str) -> Self {
        Self {
            calls: Rc::default(),
            outcome: Ok(ProcessOutput::from_raw(stdout.as_bytes(), stderr.as_bytes(), Some(exit_code))),
        }
    }

    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            calls: Rc::default(),
            outcome: Err(kind),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, invocation: &CommandInvocation) -> io::Result<ProcessOutput> {
        self.calls.borrow_mut().push(invocation.clone());
        match &self.outcome {
            Ok(output) => Ok(output.clone()),
            Err(kind) => Err(io::Error::new(*kind, "fake launch failure")),
        }
    }
}

/// Confirmer with a fixed answer that remembers the prompts it saw
#[derive(Clone, Default)]
pub struct FixedAnswer {
    pub answer: bool,
    pub prompts: Rc<RefCell<Vec<String>>>,
}

impl FixedAnswer {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Rc::default(),
        }
    }
}

impl Confirmer for FixedAnswer {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answer
    }
}

/// Log sink shared with a test subscriber
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with warn-level events written to a buffer. Returns the result of
/// `f` and the logged text.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::WARN)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    let bytes = captured.0.lock().unwrap().clone();
    (result, String::from_utf8(bytes).unwrap())
}
