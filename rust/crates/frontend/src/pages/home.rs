//! Home page component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

/// Properties for ShortcutCard.
#[derive(Properties, PartialEq)]
struct ShortcutCardProps {
    to: Route,
    icon: AttrValue,
    title: AttrValue,
    text: AttrValue,
}

#[function_component(ShortcutCard)]
fn shortcut_card(props: &ShortcutCardProps) -> Html {
    html! {
        <div class="col-md-4">
            <Link<Route> to={props.to.clone()} classes="text-decoration-none">
                <div class="card clickable-card">
                    <div class="card-body text-center">
                        <i class={classes!("bi", props.icon.to_string())} style="font-size: 3rem; color: #667eea;"></i>
                        <h3 class="card-title mt-3">{ &props.title }</h3>
                        <p class="card-text text-muted">{ &props.text }</p>
                    </div>
                </div>
            </Link<Route>>
        </div>
    }
}

/// Static welcome page.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="welcome-section">
            <h1 class="display-4">{"Welcome to OctoFit Tracker"}</h1>
            <p class="lead">
                {"Track your fitness activities, compete with teams, and achieve your goals!"}
            </p>

            <div class="row mt-5 g-4">
                <ShortcutCard
                    to={Route::Users}
                    icon="bi-people-fill"
                    title="Users"
                    text="View and manage all users"
                />
                <ShortcutCard
                    to={Route::Activities}
                    icon="bi-activity"
                    title="Activities"
                    text="Track your fitness activities"
                />
                <ShortcutCard
                    to={Route::Leaderboard}
                    icon="bi-trophy-fill"
                    title="Leaderboard"
                    text="See who's leading the pack"
                />
            </div>

            <div class="mt-5">
                <Link<Route> to={Route::Teams} classes="btn btn-primary btn-lg me-2">
                    {"View Teams"}
                </Link<Route>>
                <Link<Route> to={Route::Workouts} classes="btn btn-outline-secondary btn-lg">
                    {"Browse Workouts"}
                </Link<Route>>
            </div>
        </div>
    }
}
