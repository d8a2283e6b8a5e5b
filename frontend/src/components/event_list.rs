use chrono::{DateTime, FixedOffset, Utc};
use shared::store::{past_events, team_name, upcoming_events};
use shared::{Event, Team};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EventListProps {
    pub events: Vec<Event>,
    pub teams: Vec<Team>,
    pub on_select_event: Callback<String>,
    pub on_enroll: Callback<(String, String)>,
    pub on_unenroll: Callback<(String, String)>,
}

/// Events split into upcoming and past sections, re-derived on every render
/// from the current time.
#[function_component(EventList)]
pub fn event_list(props: &EventListProps) -> Html {
    let now = Utc::now().fixed_offset();
    let upcoming = upcoming_events(&props.events, now);
    let past = past_events(&props.events, now);

    let render_section = |events: Vec<Event>| -> Html {
        html! {
            <div class="grid gap-4 md:grid-cols-2">
                {for events.into_iter().map(|event| html! {
                    <EventCard
                        key={event.id.clone()}
                        event={event.clone()}
                        teams={props.teams.clone()}
                        on_select_event={props.on_select_event.clone()}
                        on_enroll={props.on_enroll.clone()}
                        on_unenroll={props.on_unenroll.clone()}
                    />
                })}
            </div>
        }
    };

    html! {
        <div class="space-y-8">
            <section>
                <h2 class="text-gray-900 mb-4">{"Upcoming Events"}</h2>
                if upcoming.is_empty() {
                    <p class="text-gray-500">{"No upcoming events"}</p>
                } else {
                    {render_section(upcoming)}
                }
            </section>

            <section>
                <h2 class="text-gray-900 mb-4">{"Past Events"}</h2>
                if past.is_empty() {
                    <p class="text-gray-500">{"No past events"}</p>
                } else {
                    {render_section(past)}
                }
            </section>
        </div>
    }
}

fn format_date(date: DateTime<FixedOffset>) -> String {
    date.format("%b %-d, %Y, %-I:%M %p").to_string()
}

#[derive(Properties, PartialEq)]
struct EventCardProps {
    event: Event,
    teams: Vec<Team>,
    on_select_event: Callback<String>,
    on_enroll: Callback<(String, String)>,
    on_unenroll: Callback<(String, String)>,
}

#[function_component(EventCard)]
fn event_card(props: &EventCardProps) -> Html {
    let event = &props.event;
    let is_past = event.is_past(Utc::now().fixed_offset());

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

    let on_view_details = {
        let on_select_event = props.on_select_event.clone();
        let event_id = event.id.clone();
        Callback::from(move |_: MouseEvent| {
            on_select_event.emit(event_id.clone());
        })
    };

    let available_teams: Vec<&Team> = props
        .teams
        .iter()
        .filter(|team| !event.is_enrolled(&team.id))
        .collect();

    html! {
        <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-6 hover:shadow-md transition-shadow">
            <div class="flex items-start justify-between mb-4">
                <div>
                    <h3 class="text-gray-900 mb-2">{&event.name}</h3>
                    if is_past {
                        <span class="inline-block px-2 py-1 bg-gray-100 text-gray-600 rounded">
                            {"Completed"}
                        </span>
                    }
                </div>
            </div>

            <div class="space-y-2 mb-4">
                <div class="flex items-center gap-2 text-gray-600">
                    <span>{"📅"}</span>
                    <span>{format_date(event.date)}</span>
                </div>
                <div class="flex items-center gap-2 text-gray-600">
                    <span>{"📍"}</span>
                    <span>{&event.location}</span>
                </div>
                <div class="flex items-center gap-2 text-gray-600">
                    <span>{"👥"}</span>
                    <span>{format!("{} / {} teams enrolled", event.enrolled_teams.len(), event.max_teams)}</span>
                </div>
            </div>

            if !is_past && !props.teams.is_empty() {
                <div class="mb-4">
                    <label class="block text-gray-700 mb-2">{"Enroll Team"}</label>
                    <select
                        class="w-full px-3 py-2 border border-gray-300 rounded-md"
                        onchange={on_enroll_change}
                    >
                        <option value="" selected=true>{"Select a team..."}</option>
                        {for available_teams.iter().map(|team| html! {
                            <option key={team.id.clone()} value={team.id.clone()}>
                                {&team.name}
                            </option>
                        })}
                    </select>
                </div>
            }

            if !event.enrolled_teams.is_empty() {
                <div class="mb-4">
                    <p class="text-gray-700 mb-2">{"Enrolled Teams:"}</p>
                    <div class="flex flex-wrap gap-2">
                        {for event.enrolled_teams.iter().map(|team_id| {
                            let on_unenroll = props.on_unenroll.clone();
                            let event_id = event.id.clone();
                            let team_id_owned = team_id.clone();
                            html! {
                                <span
                                    key={team_id.clone()}
                                    class="inline-flex items-center gap-1 px-3 py-1 bg-emerald-50 text-emerald-700 rounded-full"
                                >
                                    {team_name(&props.teams, team_id)}
                                    if !is_past {
                                        <button
                                            onclick={Callback::from(move |_| {
                                                on_unenroll.emit((event_id.clone(), team_id_owned.clone()));
                                            })}
                                            class="ml-1 hover:text-emerald-900"
                                        >
                                            {"×"}
                                        </button>
                                    }
                                </span>
                            }
                        })}
                    </div>
                </div>
            }

            <button
                onclick={on_view_details}
                class="w-full px-4 py-2 bg-emerald-600 text-white rounded-md hover:bg-emerald-700 transition-colors"
            >
                {"View Details"}
            </button>
        </div>
    }
}
