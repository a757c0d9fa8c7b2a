//! Persisted overlay settings.
//!
//! A single `key=value` text file next to the executable. Only the
//! capture-exclusion ("stream-proof") flag lives there.

mod streamproof;

pub use streamproof::{CONFIG_FILE_NAME, StreamProofConfig};
