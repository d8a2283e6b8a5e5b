use chrono::{DateTime, FixedOffset};
use shared::{ClubStore, Event, Match, Team};
use yew::prelude::*;

use crate::components::console::Console;
use crate::state::ClubState;

/// The management console over locally held collections, seeded with the
/// demo club data. All state lives in the reducer created here.
#[function_component(Home)]
pub fn home() -> Html {
    let state = use_reducer_eq(|| ClubState { store: demo_store() });

    html! {
        <Console state={state} title="Tennis Doubles Events" />
    }
}

fn seed_date(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).expect("static seed date")
}

/// Demo roster and event calendar shown before any edits are made.
fn demo_store() -> ClubStore {
    let team = |id: &str, name: &str, player1: &str, player2: &str| Team {
        id: id.to_string(),
        name: name.to_string(),
        player1: player1.to_string(),
        player2: player2.to_string(),
    };

    let doubles_match =
        |id: &str, event_id: &str, team1: &str, team2: &str, score1: u32, score2: u32, completed: bool| Match {
            id: id.to_string(),
            event_id: event_id.to_string(),
            team1: team1.to_string(),
            team2: team2.to_string(),
            score1,
            score2,
            completed,
        };

    let teams = vec![
        team("t1", "Thunder Duo", "John Smith", "Mike Johnson"),
        team("t2", "Net Masters", "Sarah Williams", "Emily Davis"),
        team("t3", "Ace Partners", "David Brown", "Chris Wilson"),
        team("t4", "Court Kings", "Alex Martinez", "Ryan Taylor"),
    ];

    let events = vec![
        Event {
            id: "e1".to_string(),
            name: "Spring Championship".to_string(),
            date: seed_date("2025-11-28T10:00:00+00:00"),
            location: "Central Tennis Club".to_string(),
            max_teams: 8,
            enrolled_teams: vec!["t1", "t2", "t3", "t4"].into_iter().map(String::from).collect(),
            matches: vec![
                doubles_match("m1", "e1", "t1", "t2", 0, 0, false),
                doubles_match("m2", "e1", "t3", "t4", 0, 0, false),
            ],
        },
        Event {
            id: "e2".to_string(),
            name: "Winter Classic".to_string(),
            date: seed_date("2025-12-15T09:00:00+00:00"),
            location: "Riverside Courts".to_string(),
            max_teams: 6,
            enrolled_teams: vec!["t1", "t3"].into_iter().map(String::from).collect(),
            matches: Vec::new(),
        },
        Event {
            id: "e3".to_string(),
            name: "Fall Tournament".to_string(),
            date: seed_date("2025-10-15T10:00:00+00:00"),
            location: "Central Tennis Club".to_string(),
            max_teams: 8,
            enrolled_teams: vec!["t1", "t2", "t3", "t4"].into_iter().map(String::from).collect(),
            matches: vec![
                doubles_match("m3", "e3", "t1", "t2", 6, 4, true),
                doubles_match("m4", "e3", "t3", "t4", 7, 5, true),
                doubles_match("m5", "e3", "t1", "t3", 6, 3, true),
            ],
        },
    ];

    ClubStore::new(events, teams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_demo_store_shape() {
        let store = demo_store();
        assert_eq!(store.teams.len(), 4);
        assert_eq!(store.events.len(), 3);
        assert!(store.event("e2").unwrap().matches.is_empty());
        assert_eq!(store.event("e3").unwrap().matches.len(), 3);
    }

    #[test]
    fn test_demo_matches_reference_enrolled_teams() {
        let store = demo_store();
        for event in &store.events {
            for m in &event.matches {
                assert!(event.is_enrolled(&m.team1), "{} not enrolled", m.team1);
                assert!(event.is_enrolled(&m.team2), "{} not enrolled", m.team2);
                assert_eq!(m.event_id, event.id);
            }
        }
    }

    #[test]
    fn test_demo_completed_matches_have_winners() {
        let store = demo_store();
        let finished = &store.event("e3").unwrap().matches;
        assert!(finished.iter().all(|m| m.completed));
        assert!(finished.iter().all(|m| m.winner().is_some()));
    }
}
