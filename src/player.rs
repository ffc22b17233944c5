//! Record model
//!
//! Defines the fixed-schema `Player` record, the standard court positions,
//! and the single-field update commands the store accepts.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// Field Bounds
// =============================================================================

/// Exact required length of a player id
pub const ID_LEN: usize = 12;

/// Maximum length of a player name
pub const NAME_MAX: usize = 20;

/// Maximum length of a team name
pub const TEAM_MAX: usize = 30;

/// Maximum length of a position label
pub const POSITION_MAX: usize = 10;

/// Valid height range in centimeters (inclusive)
pub const HEIGHT_RANGE: (i32, i32) = (100, 250);

/// Valid weight range in kilograms (inclusive)
pub const WEIGHT_RANGE: (i32, i32) = (40, 200);

/// Valid jersey number range (inclusive)
pub const JERSEY_RANGE: (i32, i32) = (0, 99);

// =============================================================================
// Player Record
// =============================================================================

/// A single roster record
///
/// `id` is the uniqueness key (exactly [`ID_LEN`] characters). `position`
/// is kept as a bounded string rather than a [`Position`]: records loaded
/// from disk bypass validation, so the field must be able to carry values
/// outside the standard five (they score a position weight of 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Unique identifier, exactly 12 characters
    pub id: String,

    /// Player name, non-empty, at most [`NAME_MAX`] characters
    pub name: String,

    /// Team label, may be empty, at most [`TEAM_MAX`] characters
    pub team: String,

    /// Court position label, one of PG/SG/SF/PF/C when validated
    pub position: String,

    /// Height in centimeters
    pub height: i32,

    /// Weight in kilograms
    pub weight: i32,

    /// Jersey number
    pub jersey: i32,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} #{:<2} {} ({}) {}cm {}kg [{}]",
            self.id, self.jersey, self.name, self.position, self.height, self.weight, self.team
        )
    }
}

// =============================================================================
// Positions
// =============================================================================

/// The five standard court positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    PointGuard,
    ShootingGuard,
    SmallForward,
    PowerForward,
    Center,
}

impl Position {
    /// All positions, in the conventional PG..C display order
    pub const ALL: [Position; 5] = [
        Position::PointGuard,
        Position::ShootingGuard,
        Position::SmallForward,
        Position::PowerForward,
        Position::Center,
    ];

    /// Canonical label, also the validated on-record spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
        }
    }

    /// Fixed weight used by the efficiency score
    pub fn weight(&self) -> f64 {
        match self {
            Position::PointGuard => 5.0,
            Position::ShootingGuard => 6.0,
            Position::SmallForward => 7.0,
            Position::PowerForward => 8.0,
            Position::Center => 9.0,
        }
    }
}

impl FromStr for Position {
    type Err = ();

    /// Case-sensitive exact match; anything else is not a standard position
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "PG" => Ok(Position::PointGuard),
            "SG" => Ok(Position::ShootingGuard),
            "SF" => Ok(Position::SmallForward),
            "PF" => Ok(Position::PowerForward),
            "C" => Ok(Position::Center),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Field Updates
// =============================================================================

/// A single-field change applied by [`Roster::update`](crate::Roster::update)
///
/// The store applies the change to a copy of the target record, re-runs the
/// validator, and only then commits; an invalid value leaves the stored
/// record untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Team(String),
    Position(String),
    Height(i32),
    Weight(i32),
    Jersey(i32),
}

impl FieldUpdate {
    /// Apply this change to a record in place
    pub(crate) fn apply(&self, player: &mut Player) {
        match self {
            FieldUpdate::Name(v) => player.name = v.clone(),
            FieldUpdate::Team(v) => player.team = v.clone(),
            FieldUpdate::Position(v) => player.position = v.clone(),
            FieldUpdate::Height(v) => player.height = *v,
            FieldUpdate::Weight(v) => player.weight = *v,
            FieldUpdate::Jersey(v) => player.jersey = *v,
        }
    }
}
