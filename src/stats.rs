//! Statistics engine
//!
//! Pure reads over the roster's current contents: a composite efficiency
//! score per record, league-wide and per-team summaries, and the
//! most-efficient-player scan. Every operation is an O(n) pass and reports
//! `None` on an empty input instead of dividing by zero or inventing an
//! extremum.

use std::str::FromStr;

use crate::player::{Player, Position};
use crate::roster::Roster;

// =============================================================================
// Efficiency Score
// =============================================================================

/// Composite efficiency score for one record
///
/// `height/10 + (200 - weight)/5 + jersey/2 + position weight`, with
/// position weights PG→5, SG→6, SF→7, PF→8, C→9 and 0 for anything
/// unrecognized. The formula and constants are a fixed contract of the
/// format, not a tunable metric.
pub fn efficiency(player: &Player) -> f64 {
    f64::from(player.height) / 10.0
        + (200.0 - f64::from(player.weight)) / 5.0
        + f64::from(player.jersey) / 2.0
        + Position::from_str(&player.position)
            .map(|p| p.weight())
            .unwrap_or(0.0)
}

// =============================================================================
// League Summary
// =============================================================================

/// League-wide aggregate report
#[derive(Debug, Clone)]
pub struct LeagueSummary {
    /// Total number of records
    pub count: usize,

    /// Mean height in centimeters
    pub avg_height: f64,

    /// Mean weight in kilograms
    pub avg_weight: f64,

    /// Extremes; with a single record it appears in all four slots
    pub tallest: Player,
    pub shortest: Player,
    pub heaviest: Player,
    pub lightest: Player,

    /// Count and share of total for each standard position, in PG..C order
    pub position_breakdown: [PositionShare; 5],
}

/// One slot of the per-position breakdown
#[derive(Debug, Clone, Copy)]
pub struct PositionShare {
    pub position: Position,
    pub count: usize,
    /// Percentage of the total record count
    pub percent: f64,
}

/// Aggregate the whole roster
///
/// Returns `None` on an empty roster. The first record initializes every
/// extremum tracker, so a one-record roster reports itself as tallest,
/// shortest, heaviest, and lightest at once.
pub fn league_summary(roster: &Roster) -> Option<LeagueSummary> {
    let mut players = roster.all();
    let first = players.next()?;

    let mut count = 1usize;
    let mut total_height = i64::from(first.height);
    let mut total_weight = i64::from(first.weight);
    let mut tallest = first;
    let mut shortest = first;
    let mut heaviest = first;
    let mut lightest = first;

    for player in players {
        count += 1;
        total_height += i64::from(player.height);
        total_weight += i64::from(player.weight);

        if player.height > tallest.height {
            tallest = player;
        }
        if player.height < shortest.height {
            shortest = player;
        }
        if player.weight > heaviest.weight {
            heaviest = player;
        }
        if player.weight < lightest.weight {
            lightest = player;
        }
    }

    // Second pass: per-position tallies.
    let position_breakdown = Position::ALL.map(|position| {
        let tally = roster
            .all()
            .filter(|p| p.position == position.as_str())
            .count();
        PositionShare {
            position,
            count: tally,
            percent: tally as f64 / count as f64 * 100.0,
        }
    });

    Some(LeagueSummary {
        count,
        avg_height: total_height as f64 / count as f64,
        avg_weight: total_weight as f64 / count as f64,
        tallest: tallest.clone(),
        shortest: shortest.clone(),
        heaviest: heaviest.clone(),
        lightest: lightest.clone(),
        position_breakdown,
    })
}

// =============================================================================
// Team Summary
// =============================================================================

/// Per-team aggregate report
#[derive(Debug, Clone, Copy)]
pub struct TeamSummary {
    /// Number of records on the team
    pub count: usize,

    /// Mean height in centimeters
    pub avg_height: f64,

    /// Mean weight in kilograms
    pub avg_weight: f64,

    /// Mean efficiency score
    pub avg_efficiency: f64,
}

/// Aggregate the records whose `team` exactly matches `team_name`
///
/// Returns `None` when no record matches.
pub fn team_summary(roster: &Roster, team_name: &str) -> Option<TeamSummary> {
    let mut count = 0usize;
    let mut total_height = 0i64;
    let mut total_weight = 0i64;
    let mut total_efficiency = 0.0f64;

    for player in roster.all().filter(|p| p.team == team_name) {
        count += 1;
        total_height += i64::from(player.height);
        total_weight += i64::from(player.weight);
        total_efficiency += efficiency(player);
    }

    if count == 0 {
        return None;
    }

    Some(TeamSummary {
        count,
        avg_height: total_height as f64 / count as f64,
        avg_weight: total_weight as f64 / count as f64,
        avg_efficiency: total_efficiency / count as f64,
    })
}

// =============================================================================
// Most Efficient Player
// =============================================================================

/// Find the record with the highest efficiency score
///
/// The running maximum is initialized from the first record, not from a
/// zero sentinel, so all-negative scores are handled correctly. On a tie
/// the earlier record in collection order wins.
pub fn most_efficient(roster: &Roster) -> Option<&Player> {
    let mut players = roster.all();
    let first = players.next()?;

    let mut best = first;
    let mut best_score = efficiency(first);

    for player in players {
        let score = efficiency(player);
        if score > best_score {
            best_score = score;
            best = player;
        }
    }

    Some(best)
}
