use chrono::{DateTime, FixedOffset};
use log::debug;

use crate::models::event::{Event, Match};
use crate::models::team::Team;

/// Snapshot of the two top-level collections.
///
/// This is the only mutation surface for events, teams, and the matches
/// events own. Every operation takes `&self` and returns a new snapshot, so
/// a UI reducer can swap the whole state atomically; views read and dispatch
/// but never mutate in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClubStore {
    pub events: Vec<Event>,
    pub teams: Vec<Team>,
}

impl ClubStore {
    pub fn new(events: Vec<Event>, teams: Vec<Team>) -> Self {
        Self { events, teams }
    }

    /// Appends a team to the roster. The id is caller-generated and assumed
    /// unique; there is no duplicate-name check.
    pub fn add_team(&self, team: Team) -> Self {
        debug!("Adding team {} ({})", team.name, team.id);
        let mut teams = self.teams.clone();
        teams.push(team);
        Self {
            events: self.events.clone(),
            teams,
        }
    }

    /// Removes a team and strips its id from every event's enrollment list.
    /// Match records keep their team references as historical data.
    pub fn delete_team(&self, team_id: &str) -> Self {
        debug!("Deleting team {}", team_id);
        let teams = self
            .teams
            .iter()
            .filter(|t| t.id != team_id)
            .cloned()
            .collect();
        let events = self
            .events
            .iter()
            .cloned()
            .map(|mut event| {
                event.enrolled_teams.retain(|id| id != team_id);
                event
            })
            .collect();
        Self { events, teams }
    }

    /// Enrolls a team in an event unless it is already enrolled. Capacity
    /// (`max_teams`) is not checked here or anywhere else.
    pub fn enroll(&self, event_id: &str, team_id: &str) -> Self {
        debug!("Enrolling team {} in event {}", team_id, event_id);
        let events = self
            .events
            .iter()
            .cloned()
            .map(|mut event| {
                if event.id == event_id && !event.is_enrolled(team_id) {
                    event.enrolled_teams.push(team_id.to_string());
                }
                event
            })
            .collect();
        Self {
            events,
            teams: self.teams.clone(),
        }
    }

    /// Removes a team from an event's enrollment list. Idempotent; a team
    /// that is not enrolled is left alone.
    pub fn unenroll(&self, event_id: &str, team_id: &str) -> Self {
        debug!("Unenrolling team {} from event {}", team_id, event_id);
        let events = self
            .events
            .iter()
            .cloned()
            .map(|mut event| {
                if event.id == event_id {
                    event.enrolled_teams.retain(|id| id != team_id);
                }
                event
            })
            .collect();
        Self {
            events,
            teams: self.teams.clone(),
        }
    }

    /// Replaces a match's scores and completion flag in one update, locating
    /// the owning event by scanning for the match id. Updates still apply
    /// after completion; treating completed matches as read-only is left to
    /// the views.
    pub fn update_score(&self, match_id: &str, score1: u32, score2: u32, completed: bool) -> Self {
        debug!(
            "Updating match {} to {}-{} (completed: {})",
            match_id, score1, score2, completed
        );
        let events = self
            .events
            .iter()
            .cloned()
            .map(|mut event| {
                for m in event.matches.iter_mut() {
                    if m.id == match_id {
                        m.score1 = score1;
                        m.score2 = score2;
                        m.completed = completed;
                    }
                }
                event
            })
            .collect();
        Self {
            events,
            teams: self.teams.clone(),
        }
    }

    pub fn event(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }
}

/// A match joined with its owning event's name and date, for listings that
/// flatten matches across events.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchView {
    pub event_name: String,
    pub event_date: DateTime<FixedOffset>,
    pub record: Match,
}

/// Events dated at or after `now`, soonest first.
pub fn upcoming_events(events: &[Event], now: DateTime<FixedOffset>) -> Vec<Event> {
    let mut upcoming: Vec<Event> = events
        .iter()
        .filter(|e| e.is_upcoming(now))
        .cloned()
        .collect();
    upcoming.sort_by_key(|e| e.date);
    upcoming
}

/// Events dated before `now`, most recent first.
pub fn past_events(events: &[Event], now: DateTime<FixedOffset>) -> Vec<Event> {
    let mut past: Vec<Event> = events.iter().filter(|e| e.is_past(now)).cloned().collect();
    past.sort_by_key(|e| std::cmp::Reverse(e.date));
    past
}

fn flatten_matches(events: &[Event]) -> impl Iterator<Item = MatchView> + '_ {
    events.iter().flat_map(|event| {
        event.matches.iter().map(move |m| MatchView {
            event_name: event.name.clone(),
            event_date: event.date,
            record: m.clone(),
        })
    })
}

/// Matches not yet completed, across all events, regardless of whether the
/// owning event is past or upcoming.
pub fn active_matches(events: &[Event]) -> Vec<MatchView> {
    flatten_matches(events).filter(|v| !v.record.completed).collect()
}

/// Completed matches across all events, most recent event first.
pub fn completed_matches(events: &[Event]) -> Vec<MatchView> {
    let mut completed: Vec<MatchView> =
        flatten_matches(events).filter(|v| v.record.completed).collect();
    completed.sort_by_key(|v| std::cmp::Reverse(v.event_date));
    completed
}

pub fn find_team<'a>(teams: &'a [Team], team_id: &str) -> Option<&'a Team> {
    teams.iter().find(|t| t.id == team_id)
}

/// Team name for display; deleted or unknown ids resolve to a placeholder.
pub fn team_name(teams: &[Team], team_id: &str) -> String {
    find_team(teams, team_id)
        .map(|t| t.name.clone())
        .unwrap_or_else(|| "Unknown Team".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_log::test;

    fn date(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn team(id: &str, name: &str) -> Team {
        Team {
            id: id.to_string(),
            name: name.to_string(),
            player1: format!("{} P1", name),
            player2: format!("{} P2", name),
        }
    }

    fn event(id: &str, name: &str, when: &str, enrolled: &[&str], matches: Vec<Match>) -> Event {
        Event {
            id: id.to_string(),
            name: name.to_string(),
            date: date(when),
            location: "Central Tennis Club".to_string(),
            max_teams: 2,
            enrolled_teams: enrolled.iter().map(|s| s.to_string()).collect(),
            matches,
        }
    }

    fn game(id: &str, event_id: &str, t1: &str, t2: &str, s1: u32, s2: u32, done: bool) -> Match {
        Match {
            id: id.to_string(),
            event_id: event_id.to_string(),
            team1: t1.to_string(),
            team2: t2.to_string(),
            score1: s1,
            score2: s2,
            completed: done,
        }
    }

    fn sample_store() -> ClubStore {
        ClubStore::new(
            vec![
                event(
                    "e1",
                    "Spring Championship",
                    "2025-11-28T10:00:00+00:00",
                    &["t1", "t2"],
                    vec![game("m1", "e1", "t1", "t2", 0, 0, false)],
                ),
                event("e2", "Winter Classic", "2025-12-15T09:00:00+00:00", &["t1"], vec![]),
                event(
                    "e3",
                    "Fall Tournament",
                    "2025-10-15T10:00:00+00:00",
                    &["t1", "t2"],
                    vec![game("m3", "e3", "t1", "t2", 6, 4, true)],
                ),
            ],
            vec![team("t1", "Thunder Duo"), team("t2", "Net Masters")],
        )
    }

    #[test]
    fn test_add_team_appends_to_empty_roster() {
        let store = ClubStore::default();
        let updated = store.add_team(team("t5", "X"));
        assert_eq!(updated.teams.len(), 1);
        assert_eq!(updated.teams[0].id, "t5");
    }

    #[test]
    fn test_add_team_preserves_existing_order() {
        let store = sample_store();
        let updated = store.add_team(team("t9", "Court Kings"));
        let ids: Vec<&str> = updated.teams.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2", "t9"]);
    }

    #[test]
    fn test_delete_team_removes_from_roster() {
        let updated = sample_store().delete_team("t2");
        assert!(updated.teams.iter().all(|t| t.id != "t2"));
        assert_eq!(updated.teams.len(), 1);
    }

    #[test]
    fn test_delete_team_cascades_to_enrollments() {
        let updated = sample_store().delete_team("t1");
        for event in &updated.events {
            assert!(!event.is_enrolled("t1"), "t1 still enrolled in {}", event.id);
        }
    }

    #[test]
    fn test_delete_team_empties_single_enrollment() {
        let store = ClubStore::new(
            vec![event("e1", "Solo", "2025-11-28T10:00:00+00:00", &["t5"], vec![])],
            vec![team("t5", "X")],
        );
        let updated = store.delete_team("t5");
        assert_eq!(updated.events[0].enrolled_teams, Vec::<String>::new());
    }

    #[test]
    fn test_delete_team_keeps_match_references() {
        let updated = sample_store().delete_team("t1");
        assert_eq!(updated.events[2].matches[0].team1, "t1");
        assert_eq!(team_name(&updated.teams, "t1"), "Unknown Team");
    }

    #[test]
    fn test_enroll_adds_team_once() {
        let updated = sample_store().enroll("e2", "t2");
        let count = updated.events[1]
            .enrolled_teams
            .iter()
            .filter(|id| *id == "t2")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_enroll_duplicate_is_noop() {
        let store = sample_store();
        let updated = store.enroll("e1", "t1");
        assert_eq!(updated, store);
    }

    #[test]
    fn test_enroll_does_not_touch_other_events() {
        let updated = sample_store().enroll("e2", "t2");
        assert_eq!(updated.events[0].enrolled_teams, vec!["t1", "t2"]);
        assert_eq!(updated.events[2].enrolled_teams, vec!["t1", "t2"]);
    }

    #[test]
    fn test_enroll_allows_over_capacity() {
        // max_teams is display-only; the operation never blocks on it
        let store = sample_store().add_team(team("t3", "Ace Partners"));
        let updated = store.enroll("e1", "t3");
        assert_eq!(updated.events[0].enrolled_teams.len(), 3);
        assert!(updated.events[0].enrolled_teams.len() as u32 > updated.events[0].max_teams);
    }

    #[test]
    fn test_unenroll_removes_team() {
        let updated = sample_store().unenroll("e1", "t2");
        assert_eq!(updated.events[0].enrolled_teams, vec!["t1"]);
    }

    #[test]
    fn test_unenroll_is_idempotent() {
        let once = sample_store().unenroll("e1", "t2");
        let twice = once.unenroll("e1", "t2");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_update_score_completes_match() {
        let updated = sample_store().update_score("m1", 6, 4, true);
        let m = &updated.events[0].matches[0];
        assert_eq!((m.score1, m.score2, m.completed), (6, 4, true));
        assert_eq!(m.winner(), Some("t1"));
    }

    #[test]
    fn test_update_score_is_idempotent() {
        let once = sample_store().update_score("m1", 6, 4, true);
        let twice = once.update_score("m1", 6, 4, true);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_update_score_still_applies_after_completion() {
        // Completed matches are read-only in the views only; the operation
        // itself keeps applying.
        let updated = sample_store().update_score("m3", 7, 5, true);
        let m = &updated.events[2].matches[0];
        assert_eq!((m.score1, m.score2), (7, 5));
    }

    #[test]
    fn test_update_score_unknown_match_is_noop() {
        let store = sample_store();
        let updated = store.update_score("m99", 1, 1, true);
        assert_eq!(updated, store);
    }

    #[test]
    fn test_upcoming_events_sorted_ascending() {
        let events = vec![
            event("a", "June Open", "2025-06-01T10:00:00+00:00", &[], vec![]),
            event("b", "January Open", "2025-01-01T10:00:00+00:00", &[], vec![]),
        ];
        let now = date("2024-12-31T00:00:00+00:00");
        let upcoming = upcoming_events(&events, now);
        let ids: Vec<&str> = upcoming.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_past_events_sorted_descending() {
        let store = sample_store();
        let now = date("2026-01-01T00:00:00+00:00");
        let past = past_events(&store.events, now);
        let ids: Vec<&str> = past.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e2", "e1", "e3"]);
    }

    #[test]
    fn test_partition_is_fresh_per_now() {
        let store = sample_store();
        let before = date("2025-01-01T00:00:00+00:00");
        let after = date("2026-01-01T00:00:00+00:00");
        assert_eq!(upcoming_events(&store.events, before).len(), 3);
        assert_eq!(upcoming_events(&store.events, after).len(), 0);
        assert_eq!(past_events(&store.events, after).len(), 3);
    }

    #[test]
    fn test_event_dated_exactly_now_counts_as_upcoming() {
        let store = sample_store();
        let now = date("2025-11-28T10:00:00+00:00");
        let upcoming = upcoming_events(&store.events, now);
        assert!(upcoming.iter().any(|e| e.id == "e1"));
        assert!(past_events(&store.events, now).iter().all(|e| e.id != "e1"));
    }

    #[test]
    fn test_active_matches_ignore_event_partition() {
        // An uncompleted match counts as active even when its event is past
        let store = sample_store();
        let active = active_matches(&store.events);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].record.id, "m1");
        assert_eq!(active[0].event_name, "Spring Championship");
    }

    #[test]
    fn test_completed_matches_sorted_by_event_date_descending() {
        let mut store = sample_store();
        store.events[0].matches[0].completed = true;
        let completed = completed_matches(&store.events);
        let ids: Vec<&str> = completed.iter().map(|v| v.record.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m3"]);
    }

    #[test]
    fn test_team_name_falls_back_for_unknown_id() {
        let store = sample_store();
        assert_eq!(team_name(&store.teams, "t1"), "Thunder Duo");
        assert_eq!(team_name(&store.teams, "t404"), "Unknown Team");
    }

    #[test]
    fn test_event_lookup() {
        let store = sample_store();
        assert_eq!(store.event("e2").unwrap().name, "Winter Classic");
        assert!(store.event("e404").is_none());
    }

    fn team_id_strategy() -> impl Strategy<Value = String> {
        (0u8..8).prop_map(|n| format!("t{}", n))
    }

    proptest! {
        #[test]
        fn prop_enroll_results_in_exactly_one_entry(
            enrolled in proptest::collection::btree_set(team_id_strategy(), 0..6),
            team_id in team_id_strategy(),
        ) {
            let store = ClubStore::new(
                vec![event(
                    "e1",
                    "Prop Event",
                    "2025-11-28T10:00:00+00:00",
                    &enrolled.iter().map(String::as_str).collect::<Vec<_>>(),
                    vec![],
                )],
                vec![],
            );
            let updated = store.enroll("e1", &team_id);
            let count = updated.events[0]
                .enrolled_teams
                .iter()
                .filter(|id| **id == team_id)
                .count();
            prop_assert_eq!(count, 1);
        }

        #[test]
        fn prop_unenroll_is_idempotent(
            enrolled in proptest::collection::btree_set(team_id_strategy(), 0..6),
            team_id in team_id_strategy(),
        ) {
            let store = ClubStore::new(
                vec![event(
                    "e1",
                    "Prop Event",
                    "2025-11-28T10:00:00+00:00",
                    &enrolled.iter().map(String::as_str).collect::<Vec<_>>(),
                    vec![],
                )],
                vec![],
            );
            let once = store.unenroll("e1", &team_id);
            let twice = once.unenroll("e1", &team_id);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_delete_team_leaves_no_enrollment_behind(
            enrolled in proptest::collection::btree_set(team_id_strategy(), 0..6),
            team_id in team_id_strategy(),
        ) {
            let teams: Vec<Team> = enrolled.iter().map(|id| team(id, id)).collect();
            let store = ClubStore::new(
                vec![
                    event(
                        "e1",
                        "Prop Event",
                        "2025-11-28T10:00:00+00:00",
                        &enrolled.iter().map(String::as_str).collect::<Vec<_>>(),
                        vec![],
                    ),
                    event("e2", "Other", "2025-12-15T09:00:00+00:00", &[], vec![]),
                ],
                teams,
            );
            let updated = store.delete_team(&team_id);
            for event in &updated.events {
                prop_assert!(!event.is_enrolled(&team_id));
            }
            prop_assert!(updated.teams.iter().all(|t| t.id != team_id));
        }
    }
}
