//! Tests for the statistics engine
//!
//! These tests verify:
//! - The exact efficiency formula and position weights
//! - League summary extrema and averages, including the singleton case
//! - Per-position breakdown tallies and shares
//! - Team summary exact-match filtering
//! - Most-efficient scan with first-candidate max initialization

use std::fs;

use rosterdb::codec::{encode, load_from};
use rosterdb::stats::{efficiency, league_summary, most_efficient, team_summary};
use rosterdb::{Player, Roster};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn player(n: u32, position: &str, height: i32, weight: i32, jersey: i32) -> Player {
    Player {
        id: format!("2024000100{:02}", n),
        name: format!("Player {}", n),
        team: "Engineering".to_string(),
        position: position.to_string(),
        height,
        weight,
        jersey,
    }
}

// =============================================================================
// Efficiency Tests
// =============================================================================

#[test]
fn efficiency_formula_fixture() {
    // 200/10 + (200-100)/5 + 10/2 + C-weight = 20 + 20 + 5 + 9
    let p = player(1, "C", 200, 100, 10);
    assert_eq!(efficiency(&p), 54.0);
}

#[test]
fn position_weights_are_fixed() {
    let base = |pos: &str| efficiency(&player(1, pos, 200, 100, 10)) - 45.0;
    assert_eq!(base("PG"), 5.0);
    assert_eq!(base("SG"), 6.0);
    assert_eq!(base("SF"), 7.0);
    assert_eq!(base("PF"), 8.0);
    assert_eq!(base("C"), 9.0);
}

#[test]
fn unrecognized_position_scores_zero_weight() {
    assert_eq!(efficiency(&player(1, "GK", 200, 100, 10)), 45.0);
    assert_eq!(efficiency(&player(1, "pg", 200, 100, 10)), 45.0); // case-sensitive
    assert_eq!(efficiency(&player(1, "", 200, 100, 10)), 45.0);
}

// =============================================================================
// League Summary Tests
// =============================================================================

#[test]
fn singleton_roster_is_its_own_extremes() {
    let mut roster = Roster::new();
    roster.insert(player(1, "C", 200, 100, 10)).unwrap();

    let summary = league_summary(&roster).unwrap();
    assert_eq!(summary.count, 1);
    assert_eq!(summary.avg_height, 200.0);
    assert_eq!(summary.avg_weight, 100.0);
    assert_eq!(summary.tallest.id, summary.shortest.id);
    assert_eq!(summary.heaviest.id, summary.lightest.id);
    assert_eq!(summary.tallest.id, "202400010001");
}

#[test]
fn league_summary_tracks_all_four_extremes() {
    let mut roster = Roster::new();
    roster.insert(player(1, "PG", 175, 70, 3)).unwrap();
    roster.insert(player(2, "C", 221, 130, 45)).unwrap();
    roster.insert(player(3, "SF", 198, 95, 23)).unwrap();
    roster.insert(player(4, "SG", 183, 62, 8)).unwrap();

    let summary = league_summary(&roster).unwrap();
    assert_eq!(summary.count, 4);
    assert_eq!(summary.tallest.id, "202400010002");
    assert_eq!(summary.shortest.id, "202400010001");
    assert_eq!(summary.heaviest.id, "202400010002");
    assert_eq!(summary.lightest.id, "202400010004");
    assert_eq!(summary.avg_height, (175.0 + 221.0 + 198.0 + 183.0) / 4.0);
    assert_eq!(summary.avg_weight, (70.0 + 130.0 + 95.0 + 62.0) / 4.0);
}

#[test]
fn position_breakdown_counts_and_shares() {
    let mut roster = Roster::new();
    roster.insert(player(1, "PG", 180, 75, 1)).unwrap();
    roster.insert(player(2, "PG", 181, 76, 2)).unwrap();
    roster.insert(player(3, "C", 210, 110, 3)).unwrap();
    roster.insert(player(4, "SF", 200, 90, 4)).unwrap();

    let summary = league_summary(&roster).unwrap();
    let by_label: Vec<_> = summary
        .position_breakdown
        .iter()
        .map(|s| (s.position.as_str(), s.count, s.percent))
        .collect();

    assert_eq!(
        by_label,
        vec![
            ("PG", 2, 50.0),
            ("SG", 0, 0.0),
            ("SF", 1, 25.0),
            ("PF", 0, 0.0),
            ("C", 1, 25.0),
        ]
    );
}

// =============================================================================
// Team Summary Tests
// =============================================================================

#[test]
fn team_summary_filters_by_exact_team_match() {
    let mut roster = Roster::new();
    let mut a = player(1, "PG", 180, 80, 10);
    a.team = "Science".to_string();
    let mut b = player(2, "C", 200, 100, 10);
    b.team = "Science".to_string();
    let c = player(3, "SF", 220, 140, 99); // Engineering, excluded
    roster.insert(a).unwrap();
    roster.insert(b).unwrap();
    roster.insert(c).unwrap();

    let summary = team_summary(&roster, "Science").unwrap();
    assert_eq!(summary.count, 2);
    assert_eq!(summary.avg_height, 190.0);
    assert_eq!(summary.avg_weight, 90.0);
    // PG: 18 + 24 + 5 + 5 = 52; C: 20 + 20 + 5 + 9 = 54
    assert_eq!(summary.avg_efficiency, 53.0);

    assert!(team_summary(&roster, "science").is_none()); // exact match only
    assert!(team_summary(&roster, "Marketing").is_none());
}

// =============================================================================
// Most Efficient Tests
// =============================================================================

#[test]
fn most_efficient_picks_the_highest_score() {
    let mut roster = Roster::new();
    roster.insert(player(1, "PG", 180, 90, 4)).unwrap();
    roster.insert(player(2, "C", 215, 115, 33)).unwrap();
    roster.insert(player(3, "SG", 193, 88, 21)).unwrap();

    let best = most_efficient(&roster).unwrap();
    let best_score = efficiency(best);
    for p in roster.all() {
        assert!(efficiency(p) <= best_score);
    }
    assert_eq!(best.id, "202400010002");
}

#[test]
fn most_efficient_handles_all_negative_scores() {
    // Negative scores need out-of-range weights, which only unvalidated
    // loaded data can carry.
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("players.dat");

    let worse = player(1, "", 100, 400, 0); // 10 - 40 + 0 + 0 = -30
    let better = player(2, "", 100, 300, 0); // 10 - 20 + 0 + 0 = -10
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&encode(&worse));
    bytes.extend_from_slice(&encode(&better));
    fs::write(&path, &bytes).unwrap();

    let mut roster = Roster::new();
    assert_eq!(load_from(&mut roster, &path, false).unwrap(), 2);

    // A zero-initialized max would never pick either record.
    let best = most_efficient(&roster).unwrap();
    assert_eq!(best.id, "202400010002");
    assert_eq!(efficiency(best), -10.0);
}

#[test]
fn tie_keeps_earlier_record_in_collection_order() {
    let mut roster = Roster::new();
    roster.insert(player(1, "C", 200, 100, 10)).unwrap();
    roster.insert(player(2, "C", 200, 100, 10)).unwrap();

    // Head of the collection is the most recent insert.
    assert_eq!(most_efficient(&roster).unwrap().id, "202400010002");
}

// =============================================================================
// Empty Roster Tests
// =============================================================================

#[test]
fn empty_roster_reports_no_data_everywhere() {
    let roster = Roster::new();
    assert!(league_summary(&roster).is_none());
    assert!(team_summary(&roster, "Engineering").is_none());
    assert!(most_efficient(&roster).is_none());
}
