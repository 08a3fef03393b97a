//! OctoFit Dashboard - Yew WASM Frontend
//!
//! This crate provides the web UI for browsing users, teams, activities,
//! workouts and the leaderboard of the OctoFit tracker API.

mod api;
mod app;
mod components;
mod hooks;
mod pages;

pub use api::ApiClient;
pub use app::{App, AppProps, Route};

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    tracing_wasm::set_as_global_default();

    let client = ApiClient::from_build_env();
    tracing::info!(base_url = client.config().base_url(), "starting dashboard");

    yew::Renderer::<App>::with_props(AppProps { client }).render();
}

#[cfg(test)]
mod test_support {
    use yew::BaseComponent;

    /// Render a component to static HTML.
    pub async fn render<C, F>(props: F) -> String
    where
        C: BaseComponent,
        F: FnOnce() -> C::Properties + Send + 'static,
    {
        yew::ServerRenderer::<C>::with_props(props)
            .hydratable(false)
            .render()
            .await
    }
}
