//! In-memory document model.
//!
//! Input documents are parsed into a normalized [`Value`] tree before the
//! diff engine ever sees them. The tree is read-only input: the differ
//! borrows it and never mutates it.

mod value;

pub use value::{classify, EntryKind, Value, ValueKind};
