//! "Nothing found" placeholders for tables and card grids.

use yew::prelude::*;

/// Properties for EmptyRow component.
#[derive(Properties, PartialEq)]
pub struct EmptyRowProps {
    pub colspan: u32,
    pub message: AttrValue,
}

/// Single table row spanning every column.
#[function_component(EmptyRow)]
pub fn empty_row(props: &EmptyRowProps) -> Html {
    html! {
        <tr class="empty-row">
            <td colspan={props.colspan.to_string()} class="text-center text-muted">
                <em>{ &props.message }</em>
            </td>
        </tr>
    }
}

/// Properties for EmptyCard component.
#[derive(Properties, PartialEq)]
pub struct EmptyCardProps {
    pub message: AttrValue,
}

/// Full-width card for grid layouts.
#[function_component(EmptyCard)]
pub fn empty_card(props: &EmptyCardProps) -> Html {
    html! {
        <div class="col-12 empty-row">
            <div class="alert alert-warning" role="alert">
                <p class="mb-0 text-center"><em>{ &props.message }</em></p>
            </div>
        </div>
    }
}
