//! Modal form for editing a user's name, email and team.

use core_types::Team;
use screen_state::EditField;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use web_types::UserUpdate;
use yew::prelude::*;

/// Properties for EditUserModal component.
#[derive(Properties, PartialEq)]
pub struct EditUserModalProps {
    pub form: UserUpdate,
    pub teams: Vec<Team>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub saving: bool,
    pub on_input: Callback<(EditField, String)>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

/// Edit user modal component.
#[function_component(EditUserModal)]
pub fn edit_user_modal(props: &EditUserModalProps) -> Html {
    let on_text_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(field) = EditField::from_input_name(&input.name()) {
                on_input.emit((field, input.value()));
            }
        })
    };

    let on_team_change = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_input.emit((EditField::TeamId, select.value()));
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let form = &props.form;

    html! {
        <div class="modal show d-block" tabindex="-1" style="background-color: rgba(0,0,0,0.5);">
            <div class="modal-dialog modal-dialog-centered">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{"Edit User"}</h5>
                        <button
                            type="button"
                            class="btn-close"
                            onclick={on_close.clone()}
                            disabled={props.saving}
                        ></button>
                    </div>
                    <form onsubmit={on_submit}>
                        <div class="modal-body">
                            if let Some(error) = &props.error {
                                <div class="alert alert-danger" role="alert">{ error }</div>
                            }

                            <div class="mb-3">
                                <label for="name" class="form-label">{"Name"}</label>
                                <input
                                    type="text"
                                    class="form-control"
                                    id="name"
                                    name={EditField::Name.input_name()}
                                    value={form.name.clone()}
                                    oninput={on_text_input.clone()}
                                    required={true}
                                />
                            </div>

                            <div class="mb-3">
                                <label for="email" class="form-label">{"Email"}</label>
                                <input
                                    type="email"
                                    class="form-control"
                                    id="email"
                                    name={EditField::Email.input_name()}
                                    value={form.email.clone()}
                                    oninput={on_text_input}
                                    required={true}
                                />
                            </div>

                            <div class="mb-3">
                                <label for="team_id" class="form-label">{"Team"}</label>
                                <select
                                    class="form-select"
                                    id="team_id"
                                    name={EditField::TeamId.input_name()}
                                    onchange={on_team_change}
                                >
                                    <option value="" selected={form.team_id.is_empty()}>{"No Team"}</option>
                                    { for props.teams.iter().map(|team| {
                                        let id = team.id.to_string();
                                        let selected = form.team_id == id;
                                        html! {
                                            <option key={id.clone()} {selected} value={id.clone()}>
                                                { &team.name }
                                            </option>
                                        }
                                    })}
                                </select>
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button
                                type="button"
                                class="btn btn-secondary"
                                onclick={on_close}
                                disabled={props.saving}
                            >
                                {"Cancel"}
                            </button>
                            <button type="submit" class="btn btn-primary" disabled={props.saving}>
                                if props.saving {
                                    <span class="spinner-border spinner-border-sm me-2" role="status" aria-hidden="true"></span>
                                    {"Saving..."}
                                } else {
                                    {"Save Changes"}
                                }
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
