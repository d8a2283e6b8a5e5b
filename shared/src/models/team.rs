use crate::{Result, SharedError};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A doubles team: two named players under a team name.
///
/// Teams are immutable once created; there is no edit operation. Identity is
/// the opaque `id` string, generated by the caller at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct Team {
    /// Opaque team id
    pub id: String,

    /// Team name shown throughout the console
    #[validate(length(min = 1, message = "Team name is required"))]
    pub name: String,

    /// First player's name
    #[validate(length(min = 1, message = "Player 1 is required"))]
    pub player1: String,

    /// Second player's name
    #[validate(length(min = 1, message = "Player 2 is required"))]
    pub player2: String,
}

impl Team {
    /// Creates a new team with validation
    pub fn new(id: String, name: String, player1: String, player2: String) -> Result<Self> {
        let team = Self {
            id,
            name,
            player1,
            player2,
        };
        team.validate_fields()?;
        Ok(team)
    }

    /// Validates the team data
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()
            .map_err(|e| SharedError::Validation(e.to_string()))
    }
}
