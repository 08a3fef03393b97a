//! Main application component with routing.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::pages::{
    ActivitiesPage, HomePage, LeaderboardPage, TeamsPage, UsersPage, WorkoutsPage,
};

/// Application routes.
///
/// No catch-all: an unknown path renders only the shell.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/activities")]
    Activities,
    #[at("/leaderboard")]
    Leaderboard,
    #[at("/teams")]
    Teams,
    #[at("/users")]
    Users,
    #[at("/workouts")]
    Workouts,
}

/// Route switch function.
fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Activities => html! { <ActivitiesPage /> },
        Route::Leaderboard => html! { <LeaderboardPage /> },
        Route::Teams => html! { <TeamsPage /> },
        Route::Users => html! { <UsersPage /> },
        Route::Workouts => html! { <WorkoutsPage /> },
    }
}

/// Properties for App.
#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub client: ApiClient,
}

/// Main application component.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<ApiClient> context={props.client.clone()}>
            <BrowserRouter>
                <div class="App">
                    <NavBar />
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </ContextProvider<ApiClient>>
    }
}

/// Header links in display order.
const NAV_LINKS: [(Route, &str); 5] = [
    (Route::Activities, "Activities"),
    (Route::Leaderboard, "Leaderboard"),
    (Route::Teams, "Teams"),
    (Route::Users, "Users"),
    (Route::Workouts, "Workouts"),
];

/// Top navigation bar with a collapsible menu on small screens.
#[function_component(NavBar)]
fn nav_bar() -> Html {
    let menu_open = use_state(|| false);

    let on_toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    html! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
            <div class="container-fluid">
                <Link<Route> to={Route::Home} classes="navbar-brand">
                    <img src="/octofitapp-logo.png" alt="OctoFit Logo" />
                    {"OctoFit Tracker"}
                </Link<Route>>
                <button
                    class="navbar-toggler"
                    type="button"
                    aria-controls="navbarNav"
                    aria-expanded={menu_open.to_string()}
                    aria-label="Toggle navigation"
                    onclick={on_toggle}
                >
                    <span class="navbar-toggler-icon"></span>
                </button>
                <div
                    class={classes!("collapse", "navbar-collapse", (*menu_open).then_some("show"))}
                    id="navbarNav"
                >
                    <ul class="navbar-nav">
                        { for NAV_LINKS.iter().map(|(route, label)| html! {
                            <li class="nav-item">
                                <Link<Route> to={route.clone()} classes="nav-link">
                                    { *label }
                                </Link<Route>>
                            </li>
                        })}
                    </ul>
                </div>
            </div>
        </nav>
    }
}
