//! Shared loading/error/content switch for list screens.

use screen_state::FetchState;
use yew::prelude::*;

use super::{ErrorAlert, Loading};

/// Render a screen's fetch state.
///
/// `noun` is the plural record name, capitalized ("Activities"); it feeds
/// the loading message and the error title.
pub fn render_fetch_state<T>(
    state: &FetchState<T>,
    noun: &'static str,
    content: impl FnOnce(&T) -> Html,
) -> Html {
    match state {
        FetchState::Loading => html! {
            <Loading message={format!("Loading {}...", noun.to_lowercase())} />
        },
        FetchState::Failed(message) => html! {
            <ErrorAlert title={format!("Error Loading {noun}")} message={message.clone()} />
        },
        FetchState::Loaded(data) => content(data),
    }
}

/// Properties for PageHeader component.
#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <>
            <h1 class="page-title">{ &props.title }</h1>
            <p class="text-muted mb-4">{ &props.subtitle }</p>
        </>
    }
}
