use shared::{Event, Team};
use yew::prelude::*;

use crate::api::events::get_all_events;
use crate::api::teams::get_all_teams;
use crate::components::console::Console;
use crate::state::{ClubAction, ClubState};

/// The same console as the home page, but the initial collections come from
/// the backend. One suspension point per fetch; edits after the load are
/// applied to the local snapshot exactly as on the home page.
#[function_component(Live)]
pub fn live() -> Html {
    let state = use_reducer_eq(ClubState::default);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let state = state.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_collections().await {
                    Ok((events, teams)) => {
                        state.dispatch(ClubAction::Load { events, teams });
                        loading.set(false);
                    }
                    Err(e) => {
                        error.set(Some(e));
                        loading.set(false);
                    }
                }
            });
        });
    }

    if *loading {
        return html! {
            <div class="min-h-screen bg-gray-50 flex items-center justify-center">
                <p class="text-gray-500">{"Loading..."}</p>
            </div>
        };
    }

    if let Some(err) = &*error {
        return html! {
            <div class="min-h-screen bg-gray-50 p-8">
                <div class="max-w-xl mx-auto bg-red-50 border border-red-200 rounded-lg p-4">
                    <div class="flex">
                        <div class="text-red-400">{"⚠️"}</div>
                        <div class="ml-3">
                            <h3 class="text-sm font-medium text-red-800">{"Error"}</h3>
                            <div class="mt-1 text-sm text-red-700">{err.clone()}</div>
                        </div>
                    </div>
                </div>
            </div>
        };
    }

    html! {
        <Console state={state} title="Padel Events" />
    }
}

async fn fetch_collections() -> Result<(Vec<Event>, Vec<Team>), String> {
    let event_dtos = get_all_events().await?;
    let team_dtos = get_all_teams().await?;

    let events = event_dtos
        .into_iter()
        .map(Event::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("Failed to convert events: {}", e))?;
    let teams = team_dtos.into_iter().map(Team::from).collect();

    Ok((events, teams))
}
