//! RecordKit Library
//!
//! A plain mutable record with two encapsulated fields, one public field, and
//! one integer shared by every instance for the lifetime of the process.
//!
//! The shared integer lives in [`statics`] behind an explicit accessor so its
//! concurrent-access policy is visible at the call site rather than implied by
//! a mutable global.

pub mod logging;
pub mod record;
pub mod statics;

pub use record::Record;
pub use statics::{Statics, global_statics};
