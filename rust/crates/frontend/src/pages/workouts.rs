//! Workouts page component.

use std::rc::Rc;

use core_types::{Workout, display_quantity};
use web_types::Endpoint;
use yew::prelude::*;

use crate::components::{EmptyCard, PageHeader, render_fetch_state};
use crate::hooks::use_list;

/// Workouts page component.
#[function_component(WorkoutsPage)]
pub fn workouts_page() -> Html {
    let workouts = use_list::<Workout>(Endpoint::Workouts);

    render_fetch_state(&workouts, "Workouts", |workouts| {
        html! {
            <div class="content-container">
                <PageHeader
                    title="Workouts"
                    subtitle="Discover personalized workout suggestions to reach your fitness goals"
                />
                <WorkoutGrid workouts={workouts.clone()} />
            </div>
        }
    })
}

/// Properties for WorkoutGrid.
#[derive(Properties, PartialEq)]
pub struct WorkoutGridProps {
    pub workouts: Rc<Vec<Workout>>,
}

#[function_component(WorkoutGrid)]
pub fn workout_grid(props: &WorkoutGridProps) -> Html {
    html! {
        <div class="row">
            if props.workouts.is_empty() {
                <EmptyCard message="No workouts found" />
            } else {
                { for props.workouts.iter().enumerate().map(|(index, workout)| html! {
                    <div key={index} class="col-md-6 col-lg-4 mb-4 data-row">
                        <div class="card h-100">
                            <div class="card-body d-flex flex-column">
                                <div class="d-flex justify-content-between align-items-start mb-3">
                                    <h5 class="card-title mb-0">{ &workout.name }</h5>
                                    <span class={classes!("badge", workout.difficulty_badge())}>
                                        { &workout.difficulty }
                                    </span>
                                </div>
                                <p class="card-text flex-grow-1">{ &workout.description }</p>
                                <ul class="list-group list-group-flush mt-auto">
                                    <li class="list-group-item d-flex justify-content-between align-items-center">
                                        <strong>{"Type:"}</strong>
                                        <span class="badge bg-primary">{ &workout.activity_type }</span>
                                    </li>
                                    <li class="list-group-item d-flex justify-content-between align-items-center">
                                        <strong>{"Duration:"}</strong>
                                        <span>{ format!("{} min", display_quantity(workout.duration.as_ref())) }</span>
                                    </li>
                                    <li class="list-group-item d-flex justify-content-between align-items-center">
                                        <strong>{"Calories:"}</strong>
                                        <span class="badge bg-success">
                                            { display_quantity(workout.calories_estimate.as_ref()) }
                                        </span>
                                    </li>
                                </ul>
                            </div>
                        </div>
                    </div>
                })}
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;
    use serde_json::json;

    async fn render_body(body: serde_json::Value) -> String {
        let workouts: Vec<Workout> = web_types::decode_list(&body.to_string()).unwrap();
        render::<WorkoutGrid, _>(move || WorkoutGridProps {
            workouts: Rc::new(workouts),
        })
        .await
    }

    #[tokio::test]
    async fn test_cards_with_difficulty_badges() {
        let html = render_body(json!([
            {"_id": "w1", "name": "Morning Run", "difficulty": "Beginner",
             "activity_type": "Running", "duration": 30, "calories_estimate": 300},
            {"_id": "w2", "name": "HIIT", "difficulty": "Advanced", "duration": 20}
        ]))
        .await;

        assert_eq!(html.matches("data-row").count(), 2);
        assert!(html.contains("badge bg-success"));
        assert!(html.contains("badge bg-danger"));
        assert!(html.contains("30 min"));
    }

    #[tokio::test]
    async fn test_envelope_cards() {
        let html = render_body(json!({"results": [{"_id": "w1", "name": "Yoga"}]})).await;

        assert_eq!(html.matches("data-row").count(), 1);
        assert!(html.contains("badge bg-secondary"));
    }

    #[tokio::test]
    async fn test_empty_placeholder() {
        let html = render_body(json!({"results": []})).await;

        assert_eq!(html.matches("data-row").count(), 0);
        assert!(html.contains("No workouts found"));
    }
}
