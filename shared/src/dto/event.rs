use crate::models::event::{Event, Match};
use crate::Result;
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Data Transfer Object for Event
///
/// Carries the remote backend's camelCase wire shape. The backend also sends
/// a stored `status` field; the console derives past/upcoming from the date
/// instead, so the field is absent here and ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    /// Event's id
    pub id: String,

    /// Event's name
    #[validate(length(min = 1, message = "Event name is required"))]
    pub name: String,

    /// Scheduled start, as the backend's date string. May carry an offset
    /// (RFC 3339) or be a bare local timestamp like `2025-11-28T10:00:00`.
    pub date: String,

    /// Where the event takes place
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    /// Advertised enrollment capacity
    pub max_teams: u32,

    /// Ids of enrolled teams
    pub enrolled_teams: Vec<String>,

    /// Matches owned by this event; the backend omits the key when there
    /// are none
    #[serde(default)]
    pub matches: Vec<MatchDto>,
}

/// Data Transfer Object for Match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub id: String,
    pub event_id: String,
    pub team1: String,
    pub team2: String,
    pub score1: u32,
    pub score2: u32,
    pub completed: bool,
}

/// Bare timestamps on the wire are taken as UTC.
fn parse_wire_date(raw: &str) -> Result<DateTime<FixedOffset>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date);
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")?;
    Ok(naive.and_utc().fixed_offset())
}

impl TryFrom<EventDto> for Event {
    type Error = crate::SharedError;

    fn try_from(dto: EventDto) -> Result<Self> {
        Ok(Self {
            id: dto.id,
            name: dto.name,
            date: parse_wire_date(&dto.date)?,
            location: dto.location,
            max_teams: dto.max_teams,
            enrolled_teams: dto.enrolled_teams,
            matches: dto.matches.into_iter().map(Match::from).collect(),
        })
    }
}

impl From<&Event> for EventDto {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            name: event.name.clone(),
            date: event.date.to_rfc3339(),
            location: event.location.clone(),
            max_teams: event.max_teams,
            enrolled_teams: event.enrolled_teams.clone(),
            matches: event.matches.iter().map(MatchDto::from).collect(),
        }
    }
}

impl From<MatchDto> for Match {
    fn from(dto: MatchDto) -> Self {
        Self {
            id: dto.id,
            event_id: dto.event_id,
            team1: dto.team1,
            team2: dto.team2,
            score1: dto.score1,
            score2: dto.score2,
            completed: dto.completed,
        }
    }
}

impl From<&Match> for MatchDto {
    fn from(m: &Match) -> Self {
        Self {
            id: m.id.clone(),
            event_id: m.event_id.clone(),
            team1: m.team1.clone(),
            team2: m.team2.clone(),
            score1: m.score1,
            score2: m.score2,
            completed: m.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    // The shape the original backend actually sends, stored status included
    const WIRE_EVENT: &str = r#"{
        "id": "e1",
        "name": "Spring Championship",
        "date": "2025-11-28T10:00:00",
        "location": "Central Tennis Club",
        "maxTeams": 8,
        "enrolledTeams": ["t1", "t2", "t3", "t4"],
        "status": "upcoming",
        "matches": [
            {"id": "m1", "eventId": "e1", "team1": "t1", "team2": "t2", "score1": 0, "score2": 0, "completed": false}
        ]
    }"#;

    #[test]
    fn test_event_dto_parses_wire_shape() {
        let dto: EventDto = serde_json::from_str(WIRE_EVENT).unwrap();
        assert_eq!(dto.max_teams, 8);
        assert_eq!(dto.enrolled_teams.len(), 4);
        assert_eq!(dto.matches[0].event_id, "e1");
    }

    #[test]
    fn test_event_dto_ignores_stored_status() {
        // No status field exists on the DTO; the key on the wire is dropped
        let dto: EventDto = serde_json::from_str(WIRE_EVENT).unwrap();
        let json = serde_json::to_string(&dto).unwrap();
        assert!(!json.contains("status"));
    }

    #[test]
    fn test_event_dto_converts_bare_timestamp_as_utc() {
        let dto: EventDto = serde_json::from_str(WIRE_EVENT).unwrap();
        let event = Event::try_from(dto).unwrap();
        assert_eq!(
            event.date,
            DateTime::parse_from_rfc3339("2025-11-28T10:00:00+00:00").unwrap()
        );
    }

    #[test]
    fn test_event_dto_accepts_rfc3339_dates() {
        let json = WIRE_EVENT.replace("2025-11-28T10:00:00", "2025-11-28T10:00:00-05:00");
        let dto: EventDto = serde_json::from_str(&json).unwrap();
        let event = Event::try_from(dto).unwrap();
        assert_eq!(event.date.offset().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn test_event_dto_rejects_garbage_dates() {
        let json = WIRE_EVENT.replace("2025-11-28T10:00:00", "next tuesday");
        let dto: EventDto = serde_json::from_str(&json).unwrap();
        assert!(Event::try_from(dto).is_err());
    }

    #[test]
    fn test_event_dto_missing_matches_defaults_to_empty() {
        let json = r#"{
            "id": "e2",
            "name": "Winter Classic",
            "date": "2025-12-15T09:00:00",
            "location": "Riverside Courts",
            "maxTeams": 6,
            "enrolledTeams": ["t1", "t3"],
            "status": "upcoming"
        }"#;
        let dto: EventDto = serde_json::from_str(json).unwrap();
        let event = Event::try_from(dto).unwrap();
        assert!(event.matches.is_empty());
    }

    #[test]
    fn test_event_round_trips_through_dto() {
        let dto: EventDto = serde_json::from_str(WIRE_EVENT).unwrap();
        let event = Event::try_from(dto).unwrap();
        let back = EventDto::from(&event);
        let again = Event::try_from(back).unwrap();
        assert_eq!(event, again);
    }
}
