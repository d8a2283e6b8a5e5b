use chrono::Utc;
use shared::store::{find_team, team_name};
use shared::{Event, Match, Team};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EventDetailsProps {
    pub event: Event,
    pub teams: Vec<Team>,
    pub on_back: Callback<()>,
    pub on_enroll: Callback<(String, String)>,
    pub on_unenroll: Callback<(String, String)>,
    pub on_update_score: Callback<(String, u32, u32, bool)>,
}

/// One event's metadata, enrollment controls, and its matches split into
/// active and completed.
#[function_component(EventDetails)]
pub fn event_details(props: &EventDetailsProps) -> Html {
    let event = &props.event;
    let is_past = event.is_past(Utc::now().fixed_offset());

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let on_enroll_change = {
        let on_enroll = props.on_enroll.clone();
        let event_id = event.id.clone();
        Callback::from(move |e: web_sys::Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let team_id = select.value();
            if !team_id.is_empty() {
                on_enroll.emit((event_id.clone(), team_id));
                select.set_value("");
            }
        })
    };

    let available_teams: Vec<&Team> = props
        .teams
        .iter()
        .filter(|team| !event.is_enrolled(&team.id))
        .collect();

    let active: Vec<&Match> = event.matches.iter().filter(|m| !m.completed).collect();
    let completed: Vec<&Match> = event.matches.iter().filter(|m| m.completed).collect();

    html! {
        <div class="max-w-4xl mx-auto">
            <button
                onclick={on_back}
                class="flex items-center gap-2 text-emerald-600 hover:text-emerald-700 mb-6"
            >
                {"← Back to Events"}
            </button>

            <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-8">
                <div class="flex items-start justify-between mb-6">
                    <h1 class="text-gray-900">{&event.name}</h1>
                    if is_past {
                        <span class="inline-block px-3 py-1 bg-gray-100 text-gray-600 rounded">
                            {"Completed"}
                        </span>
                    }
                </div>

                <div class="grid md:grid-cols-3 gap-6 mb-8">
                    <div class="flex items-center gap-3">
                        <div class="w-10 h-10 bg-emerald-50 rounded-lg flex items-center justify-center">{"📅"}</div>
                        <div>
                            <p class="text-gray-500">{"Date & Time"}</p>
                            <p class="text-gray-900">{event.date.format("%A, %B %-d, %Y, %-I:%M %p").to_string()}</p>
                        </div>
                    </div>

                    <div class="flex items-center gap-3">
                        <div class="w-10 h-10 bg-emerald-50 rounded-lg flex items-center justify-center">{"📍"}</div>
                        <div>
                            <p class="text-gray-500">{"Location"}</p>
                            <p class="text-gray-900">{&event.location}</p>
                        </div>
                    </div>

                    <div class="flex items-center gap-3">
                        <div class="w-10 h-10 bg-emerald-50 rounded-lg flex items-center justify-center">{"👥"}</div>
                        <div>
                            <p class="text-gray-500">{"Teams"}</p>
                            <p class="text-gray-900">{format!("{} / {}", event.enrolled_teams.len(), event.max_teams)}</p>
                        </div>
                    </div>
                </div>

                if !is_past {
                    <div class="mb-8 p-6 bg-gray-50 rounded-lg">
                        <h3 class="text-gray-900 mb-4">{"Enroll Your Team"}</h3>
                        <select
                            class="w-full px-4 py-2 border border-gray-300 rounded-md"
                            onchange={on_enroll_change}
                        >
                            <option value="" selected=true>{"Select a team to enroll..."}</option>
                            {for available_teams.iter().map(|team| html! {
                                <option key={team.id.clone()} value={team.id.clone()}>
                                    {format!("{} ({} & {})", team.name, team.player1, team.player2)}
                                </option>
                            })}
                        </select>
                    </div>
                }

                <div class="mb-8">
                    <h3 class="text-gray-900 mb-4">{"Enrolled Teams"}</h3>
                    if event.enrolled_teams.is_empty() {
                        <p class="text-gray-500">{"No teams enrolled yet"}</p>
                    } else {
                        <div class="grid md:grid-cols-2 gap-4">
                            {for event.enrolled_teams.iter().filter_map(|team_id| {
                                let team = find_team(&props.teams, team_id)?;
                                let on_unenroll = props.on_unenroll.clone();
                                let event_id = event.id.clone();
                                let team_id_owned = team_id.clone();
                                Some(html! {
                                    <div key={team_id.clone()} class="p-4 border border-gray-200 rounded-lg">
                                        <div class="flex items-start justify-between">
                                            <div>
                                                <h4 class="text-gray-900">{&team.name}</h4>
                                                <p class="text-gray-600">{&team.player1}</p>
                                                <p class="text-gray-600">{&team.player2}</p>
                                            </div>
                                            if !is_past {
                                                <button
                                                    onclick={Callback::from(move |_| {
                                                        on_unenroll.emit((event_id.clone(), team_id_owned.clone()));
                                                    })}
                                                    class="text-red-600 hover:text-red-700"
                                                >
                                                    {"Remove"}
                                                </button>
                                            }
                                        </div>
                                    </div>
                                })
                            })}
                        </div>
                    }
                </div>

                if !event.matches.is_empty() {
                    <div>
                        <h3 class="text-gray-900 mb-4 flex items-center gap-2">
                            {"🏆 Matches"}
                        </h3>

                        if !active.is_empty() {
                            <div class="mb-6">
                                <h4 class="text-gray-700 mb-3">{"Upcoming / In Progress"}</h4>
                                <div class="space-y-3">
                                    {for active.iter().map(|m| html! {
                                        <MatchCard
                                            key={m.id.clone()}
                                            match_record={(*m).clone()}
                                            teams={props.teams.clone()}
                                            on_update_score={props.on_update_score.clone()}
                                            event_is_past={is_past}
                                        />
                                    })}
                                </div>
                            </div>
                        }

                        if !completed.is_empty() {
                            <div>
                                <h4 class="text-gray-700 mb-3">{"Completed"}</h4>
                                <div class="space-y-3">
                                    {for completed.iter().map(|m| html! {
                                        <MatchCard
                                            key={m.id.clone()}
                                            match_record={(*m).clone()}
                                            teams={props.teams.clone()}
                                            on_update_score={props.on_update_score.clone()}
                                            event_is_past={is_past}
                                        />
                                    })}
                                </div>
                            </div>
                        }
                    </div>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MatchCardProps {
    match_record: Match,
    teams: Vec<Team>,
    on_update_score: Callback<(String, u32, u32, bool)>,
    /// Score editing is disabled for past events even when the match is
    /// still marked active.
    event_is_past: bool,
}

#[function_component(MatchCard)]
fn match_card(props: &MatchCardProps) -> Html {
    let m = &props.match_record;
    let editable = !m.completed && !props.event_is_past;

    let on_score1_input = {
        let on_update_score = props.on_update_score.clone();
        let match_id = m.id.clone();
        let score2 = m.score2;
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let score1 = input.value().parse().unwrap_or(0);
            on_update_score.emit((match_id.clone(), score1, score2, false));
        })
    };

    let on_score2_input = {
        let on_update_score = props.on_update_score.clone();
        let match_id = m.id.clone();
        let score1 = m.score1;
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let score2 = input.value().parse().unwrap_or(0);
            on_update_score.emit((match_id.clone(), score1, score2, false));
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
            <div class="flex items-center justify-between mb-2">
                <div>
                    <p class="text-gray-900">{team_name(&props.teams, team_id)}</p>
                    if let Some(team) = team {
                        <p class="text-gray-500">{format!("{} & {}", team.player1, team.player2)}</p>
                    }
                </div>
                if editable {
                    <input
                        type="number"
                        min="0"
                        value={score.to_string()}
                        oninput={oninput}
                        class="w-16 px-2 py-1 border border-gray-300 rounded text-center"
                    />
                } else {
                    <span class="text-gray-900 px-3">{score}</span>
                }
            </div>
        }
    };

    html! {
        <div class="p-4 border border-gray-200 rounded-lg bg-white">
            <div class="flex items-center justify-between gap-4">
                <div class="flex-1">
                    {render_side(&m.team1, m.score1, on_score1_input)}
                    {render_side(&m.team2, m.score2, on_score2_input)}
                </div>

                if editable {
                    <button
                        onclick={on_complete}
                        class="px-4 py-2 bg-emerald-600 text-white rounded-md hover:bg-emerald-700 transition-colors whitespace-nowrap"
                    >
                        {"Complete"}
                    </button>
                }

                if m.completed {
                    <span class="px-3 py-1 bg-emerald-50 text-emerald-700 rounded whitespace-nowrap">
                        {"Final"}
                    </span>
                }
            </div>
        </div>
    }
}
