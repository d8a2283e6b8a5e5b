use crate::api::api_url;
use gloo_net::http::Request;
use log::debug;
use shared::{ErrorResponse, TeamDto};

pub async fn get_all_teams() -> Result<Vec<TeamDto>, String> {
    debug!("Fetching all teams");

    let response = Request::get(&api_url("/api/teams"))
        .send()
        .await
        .map_err(|e| format!("Failed to fetch teams: {}", e))?;

    if !response.ok() {
        let error = response
            .json::<ErrorResponse>()
            .await
            .map_err(|_| "Unknown error occurred".to_string())?;
        return Err(error.error);
    }

    let teams = response
        .json::<Vec<TeamDto>>()
        .await
        .map_err(|e| format!("Failed to parse teams response: {}", e))?;

    debug!("Successfully fetched {} teams", teams.len());
    Ok(teams)
}
