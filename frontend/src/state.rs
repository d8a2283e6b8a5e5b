use std::rc::Rc;

use shared::{ClubStore, Event, Team};
use yew::prelude::*;

/// Reducer state holding the one owned [`ClubStore`] snapshot.
///
/// All collection mutations are serialized through this reducer; views get
/// read access plus callbacks that dispatch [`ClubAction`]s upward.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ClubState {
    pub store: ClubStore,
}

/// Intents the views dispatch upward.
#[derive(Clone, Debug, PartialEq)]
pub enum ClubAction {
    /// Replace both collections, e.g. after the initial remote fetch
    Load { events: Vec<Event>, teams: Vec<Team> },
    Enroll { event_id: String, team_id: String },
    Unenroll { event_id: String, team_id: String },
    UpdateScore {
        match_id: String,
        score1: u32,
        score2: u32,
        completed: bool,
    },
    AddTeam(Team),
    DeleteTeam { team_id: String },
}

impl Reducible for ClubState {
    type Action = ClubAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let store = match action {
            ClubAction::Load { events, teams } => ClubStore::new(events, teams),
            ClubAction::Enroll { event_id, team_id } => self.store.enroll(&event_id, &team_id),
            ClubAction::Unenroll { event_id, team_id } => self.store.unenroll(&event_id, &team_id),
            ClubAction::UpdateScore {
                match_id,
                score1,
                score2,
                completed,
            } => self.store.update_score(&match_id, score1, score2, completed),
            ClubAction::AddTeam(team) => self.store.add_team(team),
            ClubAction::DeleteTeam { team_id } => self.store.delete_team(&team_id),
        };
        Rc::new(Self { store })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dispatch(state: ClubState, action: ClubAction) -> ClubState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn test_team(id: &str) -> Team {
        Team {
            id: id.to_string(),
            name: format!("Team {}", id),
            player1: "A".to_string(),
            player2: "B".to_string(),
        }
    }

    #[test]
    fn test_load_replaces_collections() {
        let state = dispatch(
            ClubState::default(),
            ClubAction::Load {
                events: Vec::new(),
                teams: vec![test_team("t1")],
            },
        );
        assert_eq!(state.store.teams.len(), 1);
    }

    #[test]
    fn test_add_then_delete_team() {
        let state = dispatch(ClubState::default(), ClubAction::AddTeam(test_team("t1")));
        assert_eq!(state.store.teams.len(), 1);

        let state = dispatch(
            state,
            ClubAction::DeleteTeam {
                team_id: "t1".to_string(),
            },
        );
        assert!(state.store.teams.is_empty());
    }

    #[test]
    fn test_enroll_dispatch_reaches_store() {
        let event = Event {
            id: "e1".to_string(),
            name: "Spring Championship".to_string(),
            date: chrono::DateTime::parse_from_rfc3339("2025-11-28T10:00:00+00:00").unwrap(),
            location: "Central Tennis Club".to_string(),
            max_teams: 8,
            enrolled_teams: Vec::new(),
            matches: Vec::new(),
        };
        let state = dispatch(
            ClubState::default(),
            ClubAction::Load {
                events: vec![event],
                teams: vec![test_team("t1")],
            },
        );
        let state = dispatch(
            state,
            ClubAction::Enroll {
                event_id: "e1".to_string(),
                team_id: "t1".to_string(),
            },
        );
        assert!(state.store.events[0].is_enrolled("t1"));
    }
}
