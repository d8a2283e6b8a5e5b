use shared::store::{active_matches, completed_matches, find_team, team_name, MatchView};
use shared::{Event, Team};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MatchTrackerProps {
    pub events: Vec<Event>,
    pub teams: Vec<Team>,
    pub on_update_score: Callback<(String, u32, u32, bool)>,
}

/// Every match across every event, flattened and partitioned by the
/// completed flag alone. An unfinished match in a past event still shows as
/// active here.
#[function_component(MatchTracker)]
pub fn match_tracker(props: &MatchTrackerProps) -> Html {
    let active = active_matches(&props.events);
    let completed = completed_matches(&props.events);

    html! {
        <div class="space-y-8">
            <div class="flex items-center gap-3 mb-6">
                <span class="text-emerald-600">{"🏆"}</span>
                <h2 class="text-gray-900">{"Match Tracker"}</h2>
            </div>

            <section>
                <h3 class="text-gray-900 mb-4">{"Active Matches"}</h3>
                if active.is_empty() {
                    <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-8 text-center">
                        <p class="text-gray-500">{"No active matches"}</p>
                    </div>
                } else {
                    <div class="space-y-4">
                        {for active.iter().map(|view| html! {
                            <ActiveMatch
                                key={view.record.id.clone()}
                                view={view.clone()}
                                teams={props.teams.clone()}
                                on_update_score={props.on_update_score.clone()}
                            />
                        })}
                    </div>
                }
            </section>

            <section>
                <h3 class="text-gray-900 mb-4">{"Completed Matches"}</h3>
                if completed.is_empty() {
                    <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-8 text-center">
                        <p class="text-gray-500">{"No completed matches"}</p>
                    </div>
                } else {
                    <div class="space-y-4">
                        {for completed.iter().map(|view| html! {
                            <CompletedMatch
                                key={view.record.id.clone()}
                                view={view.clone()}
                                teams={props.teams.clone()}
                            />
                        })}
                    </div>
                }
            </section>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ActiveMatchProps {
    view: MatchView,
    teams: Vec<Team>,
    on_update_score: Callback<(String, u32, u32, bool)>,
}

#[function_component(ActiveMatch)]
fn active_match(props: &ActiveMatchProps) -> Html {
    let m = &props.view.record;

    let on_score1_input = {
        let on_update_score = props.on_update_score.clone();
        let match_id = m.id.clone();
        let score2 = m.score2;
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_update_score.emit((match_id.clone(), input.value().parse().unwrap_or(0), score2, false));
        })
    };

    let on_score2_input = {
        let on_update_score = props.on_update_score.clone();
        let match_id = m.id.clone();
        let score1 = m.score1;
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_update_score.emit((match_id.clone(), score1, input.value().parse().unwrap_or(0), false));
        })
    };

    let on_complete = {
        let on_update_score = props.on_update_score.clone();
        let match_id = m.id.clone();
        let score1 = m.score1;
        let score2 = m.score2;
        Callback::from(move |_: MouseEvent| {
            on_update_score.emit((match_id.clone(), score1, score2, true));
        })
    };

    let render_side = |team_id: &str, score: u32, oninput: Callback<InputEvent>| -> Html {
        let team = find_team(&props.teams, team_id);
        html! {
            <div class="flex items-center justify-between">
                <div class="flex-1">
                    <p class="text-gray-900">{team_name(&props.teams, team_id)}</p>
                    if let Some(team) = team {
                        <p class="text-gray-500">{format!("{} & {}", team.player1, team.player2)}</p>
                    }
                </div>
                <input
                    type="number"
                    min="0"
                    value={score.to_string()}
                    oninput={oninput}
                    class="w-20 px-3 py-2 border border-gray-300 rounded-md text-center"
                />
            </div>
        }
    };

    html! {
        <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-6">
            <div class="flex items-center justify-between mb-4">
                <div>
                    <h4 class="text-gray-900">{&props.view.event_name}</h4>
                    <p class="text-gray-500">{props.view.event_date.format("%-m/%-d/%Y").to_string()}</p>
                </div>
                <span class="px-3 py-1 bg-blue-50 text-blue-700 rounded">
                    {"In Progress"}
                </span>
            </div>

            <div class="space-y-4">
                {render_side(&m.team1, m.score1, on_score1_input)}
                {render_side(&m.team2, m.score2, on_score2_input)}

                <button
                    onclick={on_complete}
                    class="w-full px-4 py-2 bg-emerald-600 text-white rounded-md hover:bg-emerald-700 transition-colors"
                >
                    {"Complete Match"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CompletedMatchProps {
    view: MatchView,
    teams: Vec<Team>,
}

#[function_component(CompletedMatch)]
fn completed_match(props: &CompletedMatchProps) -> Html {
    let m = &props.view.record;
    // A tie highlights neither side
    let winner = m.winner();

    let render_side = |team_id: &str, score: u32| -> Html {
        let team = find_team(&props.teams, team_id);
        let won = winner == Some(team_id);
        html! {
            <div class={classes!(
                "flex", "items-center", "justify-between", "p-3", "rounded",
                if won { "bg-emerald-50" } else { "bg-gray-50" }
            )}>
                <div>
                    <p class="text-gray-900">
                        {team_name(&props.teams, team_id)}
                        if won {
                            <span class="ml-2 text-emerald-600">{"🏆"}</span>
                        }
                    </p>
                    if let Some(team) = team {
                        <p class="text-gray-500">{format!("{} & {}", team.player1, team.player2)}</p>
                    }
                </div>
                <span class="text-gray-900 px-3">{score}</span>
            </div>
        }
    };

    html! {
        <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-6">
            <div class="flex items-center justify-between mb-4">
                <div>
                    <h4 class="text-gray-900">{&props.view.event_name}</h4>
                    <p class="text-gray-500">{props.view.event_date.format("%-m/%-d/%Y").to_string()}</p>
                </div>
                <span class="px-3 py-1 bg-emerald-50 text-emerald-700 rounded">
                    {"Final"}
                </span>
            </div>

            <div class="space-y-2">
                {render_side(&m.team1, m.score1)}
                {render_side(&m.team2, m.score2)}
            </div>
        </div>
    }
}
