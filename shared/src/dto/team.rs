use crate::Team;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Data Transfer Object for Team
///
/// Mirrors the wire shape of the remote backend; field names happen to be
/// identical to the model's.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct TeamDto {
    /// Team's id
    pub id: String,

    /// Team's name
    #[validate(length(min = 1, message = "Team name is required"))]
    pub name: String,

    /// First player's name
    #[validate(length(min = 1, message = "Player 1 is required"))]
    pub player1: String,

    /// Second player's name
    #[validate(length(min = 1, message = "Player 2 is required"))]
    pub player2: String,
}

impl From<&Team> for TeamDto {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id.clone(),
            name: team.name.clone(),
            player1: team.player1.clone(),
            player2: team.player2.clone(),
        }
    }
}

impl From<TeamDto> for Team {
    fn from(dto: TeamDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            player1: dto.player1,
            player2: dto.player2,
        }
    }
}
