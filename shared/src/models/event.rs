use crate::{Result, SharedError};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A doubles event: a dated gathering at a location that teams enroll in
/// and that optionally owns a set of matches.
///
/// There is no stored upcoming/past status; the partition is always derived
/// from `date` against a caller-supplied "now" (see [`Event::is_past`]).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Event {
    /// Opaque event id
    pub id: String,

    /// Event name
    #[validate(length(min = 1, message = "Event name is required"))]
    pub name: String,

    /// Scheduled start of the event
    pub date: DateTime<FixedOffset>,

    /// Where the event takes place
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    /// Advertised enrollment capacity. Display-only: enrollment is not
    /// blocked when the count reaches or exceeds this.
    pub max_teams: u32,

    /// Ids of enrolled teams, in enrollment order, no duplicates
    pub enrolled_teams: Vec<String>,

    /// Matches owned by this event; empty when none have been scheduled
    #[serde(default)]
    pub matches: Vec<Match>,
}

impl Event {
    /// Creates a new event with validation
    pub fn new(
        id: String,
        name: String,
        date: DateTime<FixedOffset>,
        location: String,
        max_teams: u32,
    ) -> Result<Self> {
        let event = Self {
            id,
            name,
            date,
            location,
            max_teams,
            enrolled_teams: Vec::new(),
            matches: Vec::new(),
        };
        event.validate_fields()?;
        Ok(event)
    }

    /// Validates the event data
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()
            .map_err(|e| SharedError::Validation(e.to_string()))
    }

    /// An event dated before `now` is past; everything else is upcoming.
    pub fn is_past(&self, now: DateTime<FixedOffset>) -> bool {
        self.date < now
    }

    pub fn is_upcoming(&self, now: DateTime<FixedOffset>) -> bool {
        !self.is_past(now)
    }

    pub fn is_enrolled(&self, team_id: &str) -> bool {
        self.enrolled_teams.iter().any(|id| id == team_id)
    }
}

/// A single match between two enrolled teams.
///
/// Owned by its parent event's `matches`; `event_id` is a relational tag,
/// not an independent address. Scores are replaced together with the
/// completion flag in one update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Match {
    pub id: String,
    pub event_id: String,
    pub team1: String,
    pub team2: String,
    pub score1: u32,
    pub score2: u32,
    pub completed: bool,
}

impl Match {
    /// Id of the team with the strictly greater score. A tie has no winner.
    pub fn winner(&self) -> Option<&str> {
        if self.score1 > self.score2 {
            Some(&self.team1)
        } else if self.score2 > self.score1 {
            Some(&self.team2)
        } else {
            None
        }
    }
}
