//! Teams page component.

use std::rc::Rc;

use core_types::{Team, display_date};
use web_types::Endpoint;
use yew::prelude::*;

use crate::components::{EmptyCard, PageHeader, render_fetch_state};
use crate::hooks::use_list;

/// Teams page component.
#[function_component(TeamsPage)]
pub fn teams_page() -> Html {
    let teams = use_list::<Team>(Endpoint::Teams);

    render_fetch_state(&teams, "Teams", |teams| {
        html! {
            <div class="content-container">
                <PageHeader
                    title="Teams"
                    subtitle="Browse all fitness teams and join the competition"
                />
                <TeamGrid teams={teams.clone()} />
            </div>
        }
    })
}

/// Properties for TeamGrid.
#[derive(Properties, PartialEq)]
pub struct TeamGridProps {
    pub teams: Rc<Vec<Team>>,
}

#[function_component(TeamGrid)]
pub fn team_grid(props: &TeamGridProps) -> Html {
    html! {
        <div class="row">
            if props.teams.is_empty() {
                <EmptyCard message="No teams found" />
            } else {
                { for props.teams.iter().enumerate().map(|(index, team)| html! {
                    <div key={index} class="col-md-6 col-lg-4 mb-4 data-row">
                        <div class="card h-100">
                            <div class="card-body d-flex flex-column">
                                <h5 class="card-title">{ &team.name }</h5>
                                <p class="card-text flex-grow-1">{ &team.description }</p>
                                <div class="mt-auto">
                                    <p class="card-text mb-2">
                                        <small class="text-muted">
                                            <i class="bi bi-people-fill me-1"></i>
                                            { format!(" Members: {}", team.members_label()) }
                                        </small>
                                    </p>
                                    <p class="card-text mb-2">
                                        <small class="text-muted">
                                            <i class="bi bi-calendar"></i>
                                            { format!(" Created: {}", display_date(team.created_at.as_deref())) }
                                        </small>
                                    </p>
                                </div>
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
        let teams: Vec<Team> = web_types::decode_list(&body.to_string()).unwrap();
        render::<TeamGrid, _>(move || TeamGridProps {
            teams: Rc::new(teams),
        })
        .await
    }

    #[tokio::test]
    async fn test_cards_per_team() {
        let html = render_body(json!([
            {"_id": "t1", "name": "Team Marvel", "description": "Mightiest heroes of Earth",
             "created_at": "2024-02-01T12:00:00Z"},
            {"id": 2, "name": "Team DC", "description": "World's greatest superheroes",
             "member_count": 5}
        ]))
        .await;

        assert_eq!(html.matches("data-row").count(), 2);
        assert!(html.contains("Team Marvel"));
        assert!(html.contains("Members: 0"));
        assert!(html.contains("Members: 5"));
        assert!(html.contains("Created: 2/1/2024"));
    }

    #[tokio::test]
    async fn test_envelope_cards() {
        let html = render_body(json!({"results": [{"_id": "t1", "name": "Alpha"}]})).await;
        assert_eq!(html.matches("data-row").count(), 1);
    }

    #[tokio::test]
    async fn test_empty_placeholder() {
        let html = render_body(json!([])).await;

        assert_eq!(html.matches("data-row").count(), 0);
        assert_eq!(html.matches("No teams found").count(), 1);
    }
}
