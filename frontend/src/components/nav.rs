use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let current_route = use_route::<Route>().unwrap_or(Route::Home);

    let link = |to: Route, label: &str| -> Html {
        let active = current_route == to;
        html! {
            <Link<Route>
                to={to}
                classes={classes!(
                    "px-3", "py-2", "rounded-md", "text-sm", "font-medium",
                    "transition-colors", "duration-200",
                    if active {
                        classes!("bg-white/20", "text-white")
                    } else {
                        classes!("text-white/90", "hover:bg-white/10", "hover:text-white")
                    }
                )}
            >
                {label}
            </Link<Route>>
        }
    };

    html! {
        <nav class="sticky top-0 z-50 bg-gradient-to-r from-emerald-800 to-emerald-600 text-white shadow-lg">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16 items-center">
                    <div class="flex items-center space-x-4 sm:space-x-8">
                        <Link<Route> to={Route::Home} classes={classes!("flex", "items-baseline", "space-x-1")}>
                            <span class="text-lg sm:text-xl font-medium bg-white text-emerald-600 px-2 py-0.5 rounded">
                                {"Padel Challenge"}
                            </span>
                        </Link<Route>>

                        <div class="hidden md:flex space-x-6">
                            {link(Route::Home, "Console")}
                            {link(Route::Live, "Live")}
                        </div>
                    </div>

                    <div class="flex items-center space-x-2">
                        {link(Route::Login, "Log in")}
                    </div>
                </div>
            </div>
        </nav>
    }
}
