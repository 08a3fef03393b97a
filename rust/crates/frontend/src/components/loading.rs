//! Loading placeholder component.

use yew::prelude::*;

/// Properties for Loading component.
#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or(AttrValue::Static("Loading..."))]
    pub message: AttrValue,
}

/// Spinner with a message, shown while a screen waits for the API.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="content-container">
            <div class="alert alert-info d-flex align-items-center" role="alert">
                <div class="spinner-border spinner-border-sm me-3" role="status">
                    <span class="visually-hidden">{"Loading..."}</span>
                </div>
                <div>{ &props.message }</div>
            </div>
        </div>
    }
}
