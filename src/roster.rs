//! In-memory roster store
//!
//! ## Responsibilities
//! - Own the record collection; nothing else holds records across mutations
//! - Enforce id uniqueness on insert
//! - Gate every insert and update through the validator
//! - Preserve most-recently-inserted-first iteration order
//!
//! ## Ordering contract
//! New records are prepended: index 0 is always the latest accepted insert.
//! `all()` and persistence both iterate in this order, and delete preserves
//! the relative order of the survivors. This is observable behavior, not an
//! implementation detail.

use tracing::debug;

use crate::error::{Result, RosterError};
use crate::player::{FieldUpdate, Player};
use crate::validate::validate;

/// The record store
///
/// Single-threaded by design: mutations are issued serially by one caller,
/// and any `&Player` handed out is valid only until the next mutating call
/// (the borrow checker enforces exactly this).
#[derive(Debug, Default)]
pub struct Roster {
    /// Head-first record collection; index 0 is the most recent insert
    players: Vec<Player>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Insert a new record at the head of the collection
    ///
    /// Fails with `DuplicateKey` if a record with the same id exists and
    /// with `InvalidData` if the candidate fails validation; either way the
    /// store is left unchanged. On success returns the stored record.
    pub fn insert(&mut self, candidate: Player) -> Result<&Player> {
        if self.players.iter().any(|p| p.id == candidate.id) {
            return Err(RosterError::DuplicateKey(candidate.id));
        }

        validate(&candidate)?;

        debug!(id = %candidate.id, name = %candidate.name, "insert");
        self.players.insert(0, candidate);
        Ok(&self.players[0])
    }

    /// Apply a single-field change to the record with the given id
    ///
    /// The change is applied to a copy, the copy is re-validated, and only
    /// then committed in place. A rejected value leaves every field of the
    /// stored record identical to its pre-update state.
    pub fn update(&mut self, id: &str, change: FieldUpdate) -> Result<()> {
        let index = self
            .position_of(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;

        let mut updated = self.players[index].clone();
        change.apply(&mut updated);
        validate(&updated)?;

        debug!(id = %id, ?change, "update");
        self.players[index] = updated;
        Ok(())
    }

    /// Replace the whole record with the given id
    ///
    /// Same copy-validate-commit discipline as [`update`](Self::update).
    /// The replacement must keep the same id; rekeying through replace could
    /// collide with another record and is rejected as `InvalidData`.
    pub fn replace(&mut self, id: &str, replacement: Player) -> Result<()> {
        let index = self
            .position_of(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;

        if replacement.id != id {
            return Err(RosterError::InvalidData(format!(
                "replacement id {:?} does not match target id {:?}",
                replacement.id, id
            )));
        }
        validate(&replacement)?;

        debug!(id = %id, "replace");
        self.players[index] = replacement;
        Ok(())
    }

    /// Remove the record with the given id
    ///
    /// Fails with `NotFound` if absent. The relative order of all remaining
    /// records is preserved.
    pub fn delete_by_id(&mut self, id: &str) -> Result<()> {
        let index = self
            .position_of(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;

        debug!(id = %id, "delete");
        self.players.remove(index);
        Ok(())
    }

    /// Discard every record
    pub fn clear(&mut self) {
        self.players.clear();
    }

    /// Swap in a wholesale new collection, head first
    ///
    /// Used by the persistence codec on load; the incoming records are
    /// trusted as-is and are not validated here.
    pub(crate) fn replace_all(&mut self, players: Vec<Player>) {
        self.players = players;
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Find a record by its unique id (linear scan)
    pub fn find_by_id(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Find the first record with an exactly matching name
    ///
    /// Names are not unique; the scan runs in collection order, so the most
    /// recently inserted match wins. This tie-break is part of the contract.
    pub fn find_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Iterate over every record in collection order
    ///
    /// A fresh call always starts from the current head.
    pub fn all(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the roster holds no records
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }
}
