//! Record validation
//!
//! Pure, deterministic field checks run before every insert and on the
//! updated copy for every update — never skipped. Text lengths are measured
//! in bytes of UTF-8 so that every accepted record fits its fixed on-disk
//! buffer without truncation.

use std::str::FromStr;

use crate::error::{Result, RosterError};
use crate::player::{
    Player, Position, HEIGHT_RANGE, ID_LEN, JERSEY_RANGE, NAME_MAX, POSITION_MAX, TEAM_MAX,
    WEIGHT_RANGE,
};

/// Check every field rule; all must pass
///
/// Overlong text is rejected here, not truncated at serialization time,
/// so uniqueness and search semantics never silently change.
pub fn validate(player: &Player) -> Result<()> {
    if player.id.len() != ID_LEN {
        return Err(RosterError::InvalidData(format!(
            "id must be exactly {} characters, got {}",
            ID_LEN,
            player.id.len()
        )));
    }

    if player.name.is_empty() {
        return Err(RosterError::InvalidData("name must not be empty".into()));
    }
    if player.name.len() > NAME_MAX {
        return Err(RosterError::InvalidData(format!(
            "name exceeds {} characters",
            NAME_MAX
        )));
    }

    if player.team.len() > TEAM_MAX {
        return Err(RosterError::InvalidData(format!(
            "team exceeds {} characters",
            TEAM_MAX
        )));
    }

    if player.position.len() > POSITION_MAX || Position::from_str(&player.position).is_err() {
        return Err(RosterError::InvalidData(format!(
            "position must be one of PG/SG/SF/PF/C, got {:?}",
            player.position
        )));
    }

    check_range("height", player.height, HEIGHT_RANGE)?;
    check_range("weight", player.weight, WEIGHT_RANGE)?;
    check_range("jersey", player.jersey, JERSEY_RANGE)?;

    Ok(())
}

fn check_range(field: &str, value: i32, (min, max): (i32, i32)) -> Result<()> {
    if value < min || value > max {
        return Err(RosterError::InvalidData(format!(
            "{} must be in [{}, {}], got {}",
            field, min, max, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Player {
        Player {
            id: "202400010001".to_string(),
            name: "Alice Carter".to_string(),
            team: "Engineering".to_string(),
            position: "PG".to_string(),
            height: 180,
            weight: 75,
            jersey: 23,
        }
    }

    #[test]
    fn accepts_well_formed_record() {
        assert!(validate(&sample()).is_ok());
    }

    #[test]
    fn rejects_each_boundary_violation() {
        let cases: Vec<Box<dyn Fn(&mut Player)>> = vec![
            Box::new(|p| p.id = "short".into()),
            Box::new(|p| p.id = "2024000100013".into()), // 13 chars
            Box::new(|p| p.name.clear()),
            Box::new(|p| p.name = "x".repeat(21)),
            Box::new(|p| p.team = "x".repeat(31)),
            Box::new(|p| p.position = "pg".into()), // case-sensitive
            Box::new(|p| p.position = "GK".into()),
            Box::new(|p| p.height = 99),
            Box::new(|p| p.height = 251),
            Box::new(|p| p.weight = 39),
            Box::new(|p| p.weight = 201),
            Box::new(|p| p.jersey = -1),
            Box::new(|p| p.jersey = 100),
        ];

        for mutate in cases {
            let mut p = sample();
            mutate(&mut p);
            assert!(validate(&p).is_err(), "expected rejection for {:?}", p);
        }
    }

    #[test]
    fn empty_team_is_allowed() {
        let mut p = sample();
        p.team.clear();
        assert!(validate(&p).is_ok());
    }

    #[test]
    fn range_endpoints_are_inclusive() {
        for (height, weight, jersey) in [(100, 40, 0), (250, 200, 99)] {
            let mut p = sample();
            p.height = height;
            p.weight = weight;
            p.jersey = jersey;
            assert!(validate(&p).is_ok());
        }
    }
}
