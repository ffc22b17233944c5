//! Persistence codec
//!
//! Serializes the roster to a flat, headerless binary file and back.
//!
//! ## File Format
//!
//! Fixed-size record blocks concatenated with no delimiters, no record
//! count, no checksum:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ Record 1 (88 bytes)                                      │
//! │ ┌────────┬─────────┬─────────┬──────────┬────┬────┬────┐ │
//! │ │ id(13) │name(21) │team(31) │ pos(11)  │h(4)│w(4)│j(4)│ │
//! │ └────────┴─────────┴─────────┴──────────┴────┴────┴────┘ │
//! ├──────────────────────────────────────────────────────────┤
//! │ Record 2 (88 bytes)                                      │
//! │ ...                                                      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Text fields are NUL-terminated buffers; integers are little-endian i32
//! (pinned explicitly so the file is stable across platforms). Records are
//! written in collection order, head first.

mod record;
mod file;

pub use record::{decode, encode, RECORD_SIZE};
pub use file::{load_from, save_to, PlayerCodec};
