//! Page-level error alert.

use yew::prelude::*;

/// Properties for ErrorAlert component.
#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub title: AttrValue,
    pub message: AttrValue,
}

#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    html! {
        <div class="content-container">
            <div class="alert alert-danger" role="alert">
                <h5 class="alert-heading">{ &props.title }</h5>
                <p class="mb-0">{ &props.message }</p>
            </div>
        </div>
    }
}
