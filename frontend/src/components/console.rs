use yew::prelude::*;

use crate::components::event_details::EventDetails;
use crate::components::event_list::EventList;
use crate::components::match_tracker::MatchTracker;
use crate::components::team_manager::TeamManager;
use crate::state::{ClubAction, ClubState};

#[derive(Clone, Copy, PartialEq)]
enum View {
    Events,
    Matches,
    Teams,
}

#[derive(Properties, PartialEq)]
pub struct ConsoleProps {
    /// The one reducer handle that owns the collections
    pub state: UseReducerHandle<ClubState>,
    pub title: AttrValue,
}

/// The management console: top-level tab navigation over the three views,
/// with an optional selected event rendered as a detail page. All mutation
/// callbacks dispatch into the reducer handle.
#[function_component(Console)]
pub fn console(props: &ConsoleProps) -> Html {
    let view = use_state(|| View::Events);
    let selected_event_id = use_state(|| None::<String>);

    let on_enroll = {
        let state = props.state.clone();
        Callback::from(move |(event_id, team_id): (String, String)| {
            state.dispatch(ClubAction::Enroll { event_id, team_id });
        })
    };

    let on_unenroll = {
        let state = props.state.clone();
        Callback::from(move |(event_id, team_id): (String, String)| {
            state.dispatch(ClubAction::Unenroll { event_id, team_id });
        })
    };

    let on_update_score = {
        let state = props.state.clone();
        Callback::from(move |(match_id, score1, score2, completed): (String, u32, u32, bool)| {
            state.dispatch(ClubAction::UpdateScore {
                match_id,
                score1,
                score2,
                completed,
            });
        })
    };

    let on_add_team = {
        let state = props.state.clone();
        Callback::from(move |team| {
            state.dispatch(ClubAction::AddTeam(team));
        })
    };

    let on_delete_team = {
        let state = props.state.clone();
        Callback::from(move |team_id| {
            state.dispatch(ClubAction::DeleteTeam { team_id });
        })
    };

    let on_select_event = {
        let selected_event_id = selected_event_id.clone();
        Callback::from(move |event_id: String| {
            selected_event_id.set(Some(event_id));
        })
    };

    let on_back = {
        let selected_event_id = selected_event_id.clone();
        Callback::from(move |_: ()| {
            selected_event_id.set(None);
        })
    };

    let tab = |target: View, label: &str| -> Html {
        let view = view.clone();
        let active = *view == target;
        html! {
            <button
                onclick={Callback::from(move |_| view.set(target))}
                class={classes!(
                    "py-4", "border-b-2", "transition-colors",
                    if active {
                        classes!("border-emerald-600", "text-emerald-600")
                    } else {
                        classes!("border-transparent", "text-gray-600", "hover:text-gray-900")
                    }
                )}
            >
                {label}
            </button>
        }
    };

    let store = &props.state.store;
    let selected_event = selected_event_id
        .as_ref()
        .and_then(|id| store.event(id))
        .cloned();

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="bg-white shadow-sm">
                <div class="max-w-7xl mx-auto px-4 py-6">
                    <h1 class="text-emerald-600">{props.title.clone()}</h1>
                </div>
            </header>

            <nav class="bg-white border-b">
                <div class="max-w-7xl mx-auto px-4">
                    <div class="flex gap-8">
                        {tab(View::Events, "Events")}
                        {tab(View::Matches, "Matches")}
                        {tab(View::Teams, "Teams")}
                    </div>
                </div>
            </nav>

            <main class="max-w-7xl mx-auto px-4 py-8">
                {match *view {
                    View::Events => match selected_event {
                        Some(event) => html! {
                            <EventDetails
                                event={event}
                                teams={store.teams.clone()}
                                on_back={on_back}
                                on_enroll={on_enroll}
                                on_unenroll={on_unenroll}
                                on_update_score={on_update_score}
                            />
                        },
                        None => html! {
                            <EventList
                                events={store.events.clone()}
                                teams={store.teams.clone()}
                                on_select_event={on_select_event}
                                on_enroll={on_enroll}
                                on_unenroll={on_unenroll}
                            />
                        },
                    },
                    View::Matches => html! {
                        <MatchTracker
                            events={store.events.clone()}
                            teams={store.teams.clone()}
                            on_update_score={on_update_score}
                        />
                    },
                    View::Teams => html! {
                        <TeamManager
                            teams={store.teams.clone()}
                            on_add_team={on_add_team}
                            on_delete_team={on_delete_team}
                        />
                    },
                }}
            </main>
        </div>
    }
}
