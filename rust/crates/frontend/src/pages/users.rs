//! Users page component with the edit form.

use std::rc::Rc;

use core_types::{RecordId, Team, User, display_date};
use futures_util::future::try_join;
use screen_state::{EditField, UserDirectory, UsersAction, UsersScreen};
use web_types::Endpoint;
use yew::prelude::*;

use crate::api::log_failure;
use crate::components::{EditUserModal, EmptyRow, PageHeader, render_fetch_state};
use crate::hooks::{RequestScope, use_api, use_mounted};

/// Reducer wrapper so the Users screen state can drive `use_reducer`.
#[derive(Default, PartialEq)]
struct UsersModel(UsersScreen);

impl Reducible for UsersModel {
    type Action = UsersAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut screen = self.0.clone();
        screen.apply(action);
        Rc::new(Self(screen))
    }
}

/// Users page component.
#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let client = use_api();
    let state = use_reducer(UsersModel::default);
    let mounted = use_mounted();

    // Fetch users and teams together
    {
        let client = client.clone();
        let dispatcher = state.dispatcher();

        use_effect_with((), move |_| {
            let scope = RequestScope::new();

            {
                let scope = scope.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let signal = scope.signal();
                    let result = try_join(
                        client.get_list::<User>(&Endpoint::Users, signal.as_ref()),
                        client.get_list::<Team>(&Endpoint::Teams, signal.as_ref()),
                    )
                    .await;

                    if let Err(e) = &result {
                        log_failure("users", e);
                    }
                    if scope.is_alive() {
                        dispatcher.dispatch(UsersAction::Loaded(result));
                    }
                });
            }

            move || scope.cancel()
        });
    }

    let on_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: RecordId| dispatcher.dispatch(UsersAction::Edit(id)))
    };

    let on_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(field, value): (EditField, String)| {
            dispatcher.dispatch(UsersAction::Input(field, value))
        })
    };

    let on_close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(UsersAction::Close))
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            let Some(request) = state.0.edit.save_request() else {
                return;
            };
            let dispatcher = state.dispatcher();
            let client = client.clone();
            let mounted = mounted.clone();

            dispatcher.dispatch(UsersAction::Submit);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = client.update_user(&request).await;
                if !mounted.get() {
                    return;
                }
                match outcome {
                    Ok(user) => dispatcher.dispatch(UsersAction::Saved(user)),
                    Err(e) => {
                        tracing::error!(error = %e, "error updating user");
                        dispatcher.dispatch(UsersAction::SaveFailed(e));
                    }
                }
            });
        })
    };

    let screen = &state.0;

    render_fetch_state(&screen.data, "Users", |directory| {
        html! {
            <div class="content-container">
                <PageHeader
                    title="Users"
                    subtitle="View and manage registered users and their team affiliations"
                />
                <UsersTable directory={directory.clone()} on_edit={on_edit.clone()} />

                if let Some(form) = screen.edit.form() {
                    <EditUserModal
                        form={form.clone()}
                        teams={directory.teams().to_vec()}
                        error={screen.edit.error().map(|e| AttrValue::from(e.to_string()))}
                        saving={screen.edit.is_saving()}
                        on_input={on_input.clone()}
                        on_submit={on_submit.clone()}
                        on_close={on_close.clone()}
                    />
                }
            </div>
        }
    })
}

/// Properties for UsersTable.
#[derive(Properties, PartialEq)]
pub struct UsersTableProps {
    pub directory: UserDirectory,
    pub on_edit: Callback<RecordId>,
}

#[function_component(UsersTable)]
pub fn users_table(props: &UsersTableProps) -> Html {
    let directory = &props.directory;

    html! {
        <div class="table-responsive">
            <table class="table table-striped table-hover table-bordered">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Team"}</th>
                        <th>{"Joined"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    if directory.users().is_empty() {
                        <EmptyRow colspan={5} message="No users found" />
                    } else {
                        { for directory.users().iter().enumerate().map(|(index, user)| {
                            let on_click = {
                                let id = user.id.clone();
                                props.on_edit.reform(move |_: MouseEvent| id.clone())
                            };

                            html! {
                                <tr key={index} class="data-row">
                                    <td><strong>{ &user.name }</strong></td>
                                    <td>{ &user.email }</td>
                                    <td>
                                        if let Some(team) = directory.team_label(user) {
                                            <span class="badge bg-info">{ team }</span>
                                        } else {
                                            <span class="badge bg-secondary">{"No team"}</span>
                                        }
                                    </td>
                                    <td>{ display_date(user.created_at.as_deref()) }</td>
                                    <td>
                                        <button class="btn btn-sm btn-primary" onclick={on_click}>
                                            <i class="bi bi-pencil"></i>{" Edit"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        })}
                    }
                </tbody>
            </table>
        </div>
    }
}
