use crate::api::api_url;
use gloo_net::http::Request;
use log::debug;
use shared::{ErrorResponse, EventDto};

pub async fn get_all_events() -> Result<Vec<EventDto>, String> {
    debug!("Fetching all events");

    let response = Request::get(&api_url("/api/events"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch events: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let events = response
        .json::<Vec<EventDto>>()
        .await
        .map_err(|e| format!("Failed to parse events response: {}", e))?;

    debug!("Successfully fetched {} events", events.len());
    Ok(events)
}
