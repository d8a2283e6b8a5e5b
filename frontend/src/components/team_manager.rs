use shared::Team;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TeamManagerProps {
    pub teams: Vec<Team>,
    pub on_add_team: Callback<Team>,
    pub on_delete_team: Callback<String>,
}

/// Roster manager: team cards with delete, plus a toggleable creation form.
/// All three fields are required; nothing else is validated.
#[function_component(TeamManager)]
pub fn team_manager(props: &TeamManagerProps) -> Html {
    let show_add_form = use_state(|| false);
    let team_name = use_state(String::new);
    let player1 = use_state(String::new);
    let player2 = use_state(String::new);
    let error = use_state(|| None::<String>);

    let toggle_form = {
        let show_add_form = show_add_form.clone();
        Callback::from(move |_: MouseEvent| {
            show_add_form.set(!*show_add_form);
        })
    };

    let reset_form = {
        let show_add_form = show_add_form.clone();
        let team_name = team_name.clone();
        let player1 = player1.clone();
        let player2 = player2.clone();
        let error = error.clone();
        Callback::from(move |_: ()| {
            show_add_form.set(false);
            team_name.set(String::new());
            player1.set(String::new());
            player2.set(String::new());
            error.set(None);
        })
    };

    let onsubmit = {
        let team_name = team_name.clone();
        let player1 = player1.clone();
        let player2 = player2.clone();
        let error = error.clone();
        let on_add_team = props.on_add_team.clone();
        let reset_form = reset_form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match Team::new(
                Uuid::new_v4().to_string(),
                (*team_name).clone(),
                (*player1).clone(),
                (*player2).clone(),
            ) {
                Ok(team) => {
                    on_add_team.emit(team);
                    reset_form.emit(());
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                }
            }
        })
    };

    let on_cancel = {
        let reset_form = reset_form.clone();
        Callback::from(move |_: MouseEvent| reset_form.emit(()))
    };

    let text_input = |label: &str, placeholder: &str, value: UseStateHandle<String>| -> Html {
        let oninput = {
            let value = value.clone();
            Callback::from(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                value.set(input.value());
            })
        };
        html! {
            <div>
                <label class="block text-gray-700 mb-2">{label}</label>
                <input
                    type="text"
                    value={(*value).clone()}
                    oninput={oninput}
                    class="w-full px-4 py-2 border border-gray-300 rounded-md"
                    placeholder={placeholder.to_string()}
                    required=true
                />
            </div>
        }
    };

    html! {
        <div>
            <div class="flex items-center justify-between mb-6">
                <div class="flex items-center gap-3">
                    <span class="text-emerald-600">{"👥"}</span>
                    <h2 class="text-gray-900">{"Team Manager"}</h2>
                </div>
                <button
                    onclick={toggle_form}
                    class="flex items-center gap-2 px-4 py-2 bg-emerald-600 text-white rounded-md hover:bg-emerald-700 transition-colors"
                >
                    {"Add Team"}
                </button>
            </div>

            if *show_add_form {
                <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-6 mb-6">
                    <h3 class="text-gray-900 mb-4">{"Create New Team"}</h3>
                    <form onsubmit={onsubmit} class="space-y-4">
                        {text_input("Team Name", "Enter team name", team_name.clone())}
                        {text_input("Player 1", "Enter player name", player1.clone())}
                        {text_input("Player 2", "Enter player name", player2.clone())}

                        if let Some(err) = &*error {
                            <div class="text-red-500 text-sm">{err.clone()}</div>
                        }

                        <div class="flex gap-2">
                            <button
                                type="submit"
                                class="flex-1 px-4 py-2 bg-emerald-600 text-white rounded-md hover:bg-emerald-700 transition-colors"
                            >
                                {"Create Team"}
                            </button>
                            <button
                                type="button"
                                onclick={on_cancel}
                                class="flex-1 px-4 py-2 bg-gray-100 text-gray-700 rounded-md hover:bg-gray-200 transition-colors"
                            >
                                {"Cancel"}
                            </button>
                        </div>
                    </form>
                </div>
            }

            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                {for props.teams.iter().map(|team| {
                    let on_delete_team = props.on_delete_team.clone();
                    let team_id = team.id.clone();
                    html! {
                        <div key={team.id.clone()} class="bg-white rounded-lg shadow-sm border border-gray-200 p-6">
                            <div class="flex items-start justify-between mb-4">
                                <h3 class="text-gray-900">{&team.name}</h3>
                                <button
                                    onclick={Callback::from(move |_| on_delete_team.emit(team_id.clone()))}
                                    class="text-red-600 hover:text-red-700 transition-colors"
                                >
                                    {"🗑"}
                                </button>
                            </div>
                            <div class="space-y-2">
                                <div class="flex items-center gap-2">
                                    <div class="w-8 h-8 bg-emerald-100 rounded-full flex items-center justify-center text-emerald-700">
                                        {"1"}
                                    </div>
                                    <p class="text-gray-700">{&team.player1}</p>
                                </div>
                                <div class="flex items-center gap-2">
                                    <div class="w-8 h-8 bg-emerald-100 rounded-full flex items-center justify-center text-emerald-700">
                                        {"2"}
                                    </div>
                                    <p class="text-gray-700">{&team.player2}</p>
                                </div>
                            </div>
                        </div>
                    }
                })}
            </div>

            if props.teams.is_empty() {
                <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-8 text-center">
                    <p class="text-gray-500">{"No teams yet. Create your first team to get started!"}</p>
                </div>
            }
        </div>
    }
}
