//! Mission editor: turns operator free text into an uploadable plan.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissionInputError {
    #[error("Please enter at least one valid waypoint.")]
    Empty,
}

/// A non-empty, ordered list of waypoint names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionPlan {
    waypoints: Vec<String>,
}

impl MissionPlan {
    /// Parse comma-separated input. Duplicates are kept, order is preserved.
    pub fn parse(raw: &str) -> Result<Self, MissionInputError> {
        let waypoints = split_waypoints(raw);
        if waypoints.is_empty() {
            return Err(MissionInputError::Empty);
        }
        Ok(Self { waypoints })
    }

    pub fn waypoints(&self) -> &[String] {
        &self.waypoints
    }
}

/// Split on commas, trim, drop empty tokens.
pub fn split_waypoints(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_tokens_are_dropped() {
        assert_eq!(split_waypoints("WP1, WP2,  , WP3"), vec!["WP1", "WP2", "WP3"]);
    }

    #[test]
    fn only_separators_is_rejected() {
        assert!(split_waypoints(",  ,").is_empty());
        assert_eq!(MissionPlan::parse(",  ,"), Err(MissionInputError::Empty));
        assert_eq!(MissionPlan::parse(""), Err(MissionInputError::Empty));
    }

    #[test]
    fn duplicates_and_order_kept() {
        let plan = MissionPlan::parse("B, A ,B").unwrap();
        assert_eq!(plan.waypoints(), ["B", "A", "B"]);
        assert_eq!(plan.waypoints().len(), 3);
    }

    #[test]
    fn parsing_is_idempotent() {
        let once = split_waypoints(" WP1 ,, WP2 ");
        let twice = split_waypoints(&once.join(","));
        assert_eq!(once, twice);
    }

    #[test]
    fn inner_whitespace_preserved() {
        let plan = MissionPlan::parse("Home Base,  North Field ").unwrap();
        assert_eq!(plan.waypoints(), ["Home Base", "North Field"]);
    }
}
