use crate::utils::error::{ProxyError, Result};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Increment,
    Decrement,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Increment => "increment",
            Operation::Decrement => "decrement",
        }
    }
}

/// Sealed at compile time; `Counter::define` can never extend it.
static OPERATIONS: [Operation; 2] = [Operation::Increment, Operation::Decrement];

/// Shared integer behind a handle whose operation set is frozen.
///
/// The value changes, the handle's shape does not. There is no method that
/// replaces the value directly or registers a new operation.
#[derive(Debug, Default)]
pub struct Counter {
    count: AtomicI64,
}

impl Counter {
    pub const fn new() -> Self {
        Self {
            count: AtomicI64::new(0),
        }
    }

    pub fn increment(&self) -> i64 {
        let value = self.count.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("counter incremented to {}", value);
        value
    }

    pub fn decrement(&self) -> i64 {
        let value = self.count.fetch_sub(1, Ordering::SeqCst) - 1;
        tracing::debug!("counter decremented to {}", value);
        value
    }

    pub fn current(&self) -> i64 {
        self.count.load(Ordering::SeqCst)
    }

    pub fn operations(&self) -> impl Iterator<Item = &'static str> {
        OPERATIONS.iter().map(Operation::name)
    }

    /// Dispatches an operation by name.
    pub fn call(&self, name: &str) -> Result<i64> {
        match OPERATIONS.iter().find(|op| op.name() == name) {
            Some(Operation::Increment) => Ok(self.increment()),
            Some(Operation::Decrement) => Ok(self.decrement()),
            None => Err(ProxyError::UnknownOperation(name.to_string())),
        }
    }

    /// Adding or replacing an operation on a frozen handle always fails.
    pub fn define(&self, name: &str, _operation: Operation) -> Result<()> {
        tracing::warn!("Rejected attempt to define `{}` on the frozen counter", name);
        Err(ProxyError::frozen(name))
    }
}

static GLOBAL: OnceLock<Counter> = OnceLock::new();

/// The process-wide counter, created on first use.
pub fn global() -> &'static Counter {
    GLOBAL.get_or_init(Counter::new)
}
