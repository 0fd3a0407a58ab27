//! Process-wide static storage
//!
//! This module holds values whose storage belongs to a type rather than to any
//! one instance of it. Storage is initialized at compile time and lives until
//! the process exits.

use std::sync::atomic::{AtomicI32, Ordering};
use tracing::debug;

/// Global singleton statics instance
static STATICS: Statics = Statics::new();

/// Gets the global statics instance
pub fn global_statics() -> &'static Statics {
    &STATICS
}

/// Static storage shared by every [`Record`](crate::Record).
///
/// All accesses use sequentially consistent ordering, so a store made on one
/// thread is seen by any later load on another.
#[derive(Debug)]
pub struct Statics {
    /// The shared `d` value, zero at process start
    d: AtomicI32,
}

impl Default for Statics {
    fn default() -> Self {
        Self::new()
    }
}

impl Statics {
    /// Creates a store with every value at zero.
    pub const fn new() -> Self {
        Self {
            d: AtomicI32::new(0),
        }
    }

    /// Returns the current shared `d` value.
    pub fn load_d(&self) -> i32 {
        self.d.load(Ordering::SeqCst)
    }

    /// Overwrites the shared `d` value.
    pub fn store_d(&self, value: i32) {
        self.replace_d(value);
    }

    /// Overwrites the shared `d` value and returns the one it replaced.
    ///
    /// # Arguments
    /// * `value` - New value visible to every instance
    ///
    /// # Returns
    /// * The value held immediately before this call
    pub fn replace_d(&self, value: i32) -> i32 {
        let previous = self.d.swap(value, Ordering::SeqCst);
        if previous != value {
            debug!("Shared d changed from {} to {}", previous, value);
        }
        previous
    }
}
