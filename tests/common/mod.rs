//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use minidux::mvi::{Action, Intent};
use tempfile::TempDir;

/// Intents for the `counter` reducer below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Increment,
    Decrement,
    /// Not recognized by `counter`.
    Noop,
    /// Makes `fallible_counter` fail.
    Fail,
}

impl Intent for Tick {
    fn kind(&self) -> &'static str {
        match self {
            Tick::Increment => "INCREMENT",
            Tick::Decrement => "DECREMENT",
            Tick::Noop => "NOOP",
            Tick::Fail => "FAIL",
        }
    }
}

/// INCREMENT -> +1, DECREMENT -> -1, anything else -> unchanged, default 0.
pub fn counter(state: Option<i64>, action: Action<Tick>) -> i64 {
    let state = state.unwrap_or(0);
    match action {
        Action::Intent(Tick::Increment) => state + 1,
        Action::Intent(Tick::Decrement) => state - 1,
        _ => state,
    }
}

#[derive(Debug)]
pub struct ReducerFailure;

impl std::fmt::Display for ReducerFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "reducer refused the intent")
    }
}

impl std::error::Error for ReducerFailure {}

/// Like `counter`, but `Fail` returns an error.
pub fn fallible_counter(state: Option<i64>, action: Action<Tick>) -> Result<i64, ReducerFailure> {
    match action {
        Action::Intent(Tick::Fail) => Err(ReducerFailure),
        other => Ok(counter(state, other)),
    }
}

/// Records the order subscribers run in.
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A subscriber that appends `name` on every call.
    pub fn recorder(&self, name: &str) -> impl Fn() + 'static {
        let calls = Rc::clone(&self.calls);
        let name = name.to_string();
        move || calls.borrow_mut().push(name.clone())
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.calls.borrow_mut().push(entry.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.as_str() == name).count()
    }
}

/// Write `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
