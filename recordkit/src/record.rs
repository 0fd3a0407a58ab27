//! The record type.
//!
//! A [`Record`] owns its text `a`, integer `b` and public text `c`. The integer
//! `d` is not stored in the record; it lives in [`Statics`](crate::Statics) and
//! every accessor for it reaches the same process-wide cell.

use crate::statics::global_statics;
use std::fmt;
use tracing::trace;

/// A mutable record with encapsulated `a` and `b`, a public `c`, and a shared `d`.
///
/// Equality and hashing cover the per-instance fields only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    a: String,
    b: i32,
    /// Unconstrained public text. Neither constructor sets it.
    pub c: Option<String>,
}

impl Record {
    /// Creates a record holding `a`, with `b` at zero and `c` unset.
    ///
    /// Any text is accepted, including the empty string.
    pub fn new(a: impl Into<String>) -> Self {
        let record = Self {
            a: a.into(),
            b: 0,
            c: None,
        };
        trace!("Created record with a={:?}", record.a);
        record
    }

    /// Creates a record holding `a` and `b`, with `c` unset.
    pub fn with_b(a: impl Into<String>, b: i32) -> Self {
        let mut record = Self::new(a);
        record.b = b;
        trace!("Initialized b={}", b);
        record
    }

    pub fn a(&self) -> &str {
        &self.a
    }

    pub fn set_a(&mut self, a: impl Into<String>) {
        self.a = a.into();
        trace!("Set a={:?}", self.a);
    }

    pub fn b(&self) -> i32 {
        self.b
    }

    pub fn set_b(&mut self, b: i32) {
        self.b = b;
        trace!("Set b={}", b);
    }

    /// Returns the shared `d` value seen by every record.
    pub fn shared_d() -> i32 {
        global_statics().load_d()
    }

    /// Sets the shared `d` value for every record, present and future.
    pub fn set_shared_d(d: i32) {
        trace!("Set shared d={}", d);
        global_statics().store_d(d);
    }

    /// Reads the shared `d` through this instance. Same as [`Record::shared_d`].
    pub fn d(&self) -> i32 {
        Self::shared_d()
    }

    /// Writes the shared `d` through this instance. Same as [`Record::set_shared_d`].
    pub fn set_d(&self, d: i32) {
        Self::set_shared_d(d);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record {{ a: {:?}, b: {}, c: ", self.a, self.b)?;
        match &self.c {
            Some(c) => write!(f, "{:?} }}", c),
            None => write!(f, "unset }}"),
        }
    }
}
