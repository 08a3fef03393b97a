//! Activities page component.

use std::rc::Rc;

use core_types::{Activity, display_date, display_quantity};
use web_types::Endpoint;
use yew::prelude::*;

use crate::components::{EmptyRow, PageHeader, render_fetch_state};
use crate::hooks::use_list;

/// Activities page component.
#[function_component(ActivitiesPage)]
pub fn activities_page() -> Html {
    let activities = use_list::<Activity>(Endpoint::Activities);

    render_fetch_state(&activities, "Activities", |activities| {
        html! {
            <div class="content-container">
                <PageHeader
                    title="Activities"
                    subtitle="Track all fitness activities and monitor your progress"
                />
                <ActivitiesTable activities={activities.clone()} />
            </div>
        }
    })
}

/// Properties for ActivitiesTable.
#[derive(Properties, PartialEq)]
pub struct ActivitiesTableProps {
    pub activities: Rc<Vec<Activity>>,
}

#[function_component(ActivitiesTable)]
pub fn activities_table(props: &ActivitiesTableProps) -> Html {
    html! {
        <div class="table-responsive">
            <table class="table table-striped table-hover table-bordered">
                <thead>
                    <tr>
                        <th>{"User"}</th>
                        <th>{"Activity Type"}</th>
                        <th>{"Duration (min)"}</th>
                        <th>{"Distance (km)"}</th>
                        <th>{"Calories"}</th>
                        <th>{"Date"}</th>
                    </tr>
                </thead>
                <tbody>
                    if props.activities.is_empty() {
                        <EmptyRow colspan={6} message="No activities found" />
                    } else {
                        { for props.activities.iter().enumerate().map(|(index, activity)| html! {
                            <tr key={row_key(activity, index)} class="data-row">
                                <td><strong>{ activity.user_label() }</strong></td>
                                <td><span class="badge bg-primary">{ &activity.activity_type }</span></td>
                                <td>{ display_quantity(activity.duration.as_ref()) }</td>
                                <td>{ display_quantity(activity.distance.as_ref()) }</td>
                                <td>
                                    <span class="badge bg-success">
                                        { display_quantity(activity.calories_burned.as_ref()) }
                                    </span>
                                </td>
                                <td>{ display_date(activity.date.as_deref()) }</td>
                            </tr>
                        })}
                    }
                </tbody>
            </table>
        </div>
    }
}

fn row_key(activity: &Activity, index: usize) -> String {
    if activity.id.is_empty() {
        format!("row-{index}")
    } else {
        activity.id.to_string()
    }
}
