//! # RosterDB
//!
//! A single-user record store for sports rosters with:
//! - Validated insert/find/update/delete over an in-memory collection
//! - Fixed-layout binary persistence (headerless `players.dat`)
//! - Derived statistics (efficiency scores, league and team summaries)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         CLI                                  │
//! │            (presentation glue, one op per command)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼────────────────┐
//!          │            │                │
//!          ▼            ▼                ▼
//!   ┌─────────────┐ ┌─────────────┐ ┌─────────────┐
//!   │   Roster    │ │ PlayerCodec │ │    Stats    │
//!   │  (in-mem)   │ │ (players.dat│ │ (pure reads)│
//!   │             │ │  save/load) │ │             │
//!   └──────┬──────┘ └─────────────┘ └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │  Validator  │
//!   │ (every      │
//!   │ ins/update) │
//!   └─────────────┘
//! ```
//!
//! The store is single-threaded and synchronous: every operation runs to
//! completion before returning, and mutations are issued serially by one
//! caller. The persisted file is the only durable resource.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod player;
pub mod validate;
pub mod roster;
pub mod codec;
pub mod stats;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RosterError};
pub use config::Config;
pub use player::{FieldUpdate, Player, Position};
pub use roster::Roster;
pub use codec::PlayerCodec;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of RosterDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
