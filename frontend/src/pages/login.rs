use yew::prelude::*;
use yew::events::SubmitEvent;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use log::debug;

use crate::Route;

/// Login/signup page. Presentational only: fields are required, but no
/// credential check, token issuance, or session persistence happens here.
#[function_component(Login)]
pub fn login() -> Html {
    let is_login = use_state(|| true);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(String::new);

    let navigator = use_navigator().unwrap();

    let onsubmit = {
        let is_login = is_login.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if email.is_empty() || password.is_empty() || (!*is_login && name.is_empty()) {
                error.set("Please fill in all fields".to_string());
                return;
            }

            debug!("Auth form submitted, continuing to the console");
            error.set(String::new());
            navigator.push(&Route::Home);
        })
    };

    let select_login = {
        let is_login = is_login.clone();
        let error = error.clone();
        Callback::from(move |_| {
            is_login.set(true);
            error.set(String::new());
        })
    };

    let select_signup = {
        let is_login = is_login.clone();
        let error = error.clone();
        Callback::from(move |_| {
            is_login.set(false);
            error.set(String::new());
        })
    };

    let onnamechange = {
        let name = name.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let onemailchange = {
        let email = email.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onpasswordchange = {
        let password = password.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let tab_class = |active: bool| {
        classes!(
            "flex-1", "py-2", "px-4", "rounded-md", "transition-all",
            if active {
                classes!("bg-white", "text-emerald-900", "shadow-sm")
            } else {
                classes!("text-gray-600", "hover:text-gray-900")
            }
        )
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-emerald-50 to-teal-100 flex items-center justify-center p-4">
            <div class="w-full max-w-md">
                <div class="bg-white rounded-2xl shadow-xl p-8">
                    <div class="text-center mb-8">
                        <div class="inline-flex items-center justify-center w-16 h-16 bg-emerald-600 rounded-full mb-4 text-white text-2xl">
                            {"🎾"}
                        </div>
                        <h1 class="text-emerald-900 mb-2">{"Padel Challenge"}</h1>
                        <p class="text-gray-600">
                            {if *is_login {
                                "Welcome back! Sign in to your account"
                            } else {
                                "Create an account to join tennis events"
                            }}
                        </p>
                    </div>

                    <div class="flex gap-2 mb-6 bg-gray-100 rounded-lg p-1">
                        <button onclick={select_login} class={tab_class(*is_login)}>
                            {"Login"}
                        </button>
                        <button onclick={select_signup} class={tab_class(!*is_login)}>
                            {"Sign Up"}
                        </button>
                    </div>

                    <form class="space-y-4" onsubmit={onsubmit}>
                        if !*is_login {
                            <div>
                                <label for="name" class="block text-gray-700 mb-2">{"Name"}</label>
                                <input
                                    id="name"
                                    name="name"
                                    type="text"
                                    required=true
                                    class="w-full px-4 py-2 border border-gray-300 rounded-md"
                                    placeholder="Your name"
                                    onchange={onnamechange}
                                />
                            </div>
                        }

                        <div>
                            <label for="email" class="block text-gray-700 mb-2">{"Email address"}</label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                required=true
                                class="w-full px-4 py-2 border border-gray-300 rounded-md"
                                placeholder="Email address"
                                onchange={onemailchange}
                            />
                        </div>

                        <div>
                            <label for="password" class="block text-gray-700 mb-2">{"Password"}</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                required=true
                                class="w-full px-4 py-2 border border-gray-300 rounded-md"
                                placeholder="Password"
                                onchange={onpasswordchange}
                            />
                        </div>

                        if !error.is_empty() {
                            <div class="text-red-500 text-sm text-center">
                                {error.to_string()}
                            </div>
                        }

                        <button
                            type="submit"
                            class="w-full py-2 px-4 text-white bg-emerald-600 rounded-md hover:bg-emerald-700 transition-colors"
                        >
                            {if *is_login { "Sign in" } else { "Create account" }}
                        </button>
                    </form>
                </div>

                <p class="text-center mt-6 text-gray-600 text-sm">
                    {"By continuing, you agree to our Terms of Service and Privacy Policy"}
                </p>
            </div>
        </div>
    }
}
