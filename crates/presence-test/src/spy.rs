//! Call-count spy
//!
//! Wraps closures so tests can assert how often (or that never) a mapping
//! function or fallback ran.

use std::cell::Cell;

/// Counts invocations of the closures it wraps
#[derive(Debug, Default)]
pub struct CallSpy {
    calls: Cell<usize>,
}

impl CallSpy {
    pub fn new() -> Self {
        CallSpy::default()
    }

    /// Wrap a one-argument function
    pub fn track<'a, T, U, F>(&'a self, f: F) -> impl FnOnce(T) -> U + 'a
    where
        T: 'a,
        U: 'a,
        F: FnOnce(T) -> U + 'a,
    {
        move |value| {
            self.record();
            f(value)
        }
    }

    /// Wrap a zero-argument supplier, e.g. a lazy fallback
    pub fn track_supplier<'a, U, F>(&'a self, f: F) -> impl FnOnce() -> U + 'a
    where
        U: 'a,
        F: FnOnce() -> U + 'a,
    {
        move || {
            self.record();
            f()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn was_called(&self) -> bool {
        self.calls() > 0
    }

    pub fn reset(&self) {
        self.calls.set(0);
    }

    fn record(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}
