//! Leaderboard page component.

use std::rc::Rc;

use core_types::{LeaderboardEntry, display_quantity, rank, rank_badge};
use web_types::Endpoint;
use yew::prelude::*;

use crate::components::{EmptyRow, PageHeader, render_fetch_state};
use crate::hooks::use_list;

/// Leaderboard page component.
#[function_component(LeaderboardPage)]
pub fn leaderboard_page() -> Html {
    let entries = use_list::<LeaderboardEntry>(Endpoint::Leaderboard);

    render_fetch_state(&entries, "Leaderboard", |entries| {
        html! {
            <div class="content-container">
                <PageHeader
                    title="Leaderboard"
                    subtitle="Team rankings based on total points and activities completed"
                />
                <LeaderboardTable entries={entries.clone()} />
            </div>
        }
    })
}

/// Properties for LeaderboardTable.
#[derive(Properties, PartialEq)]
pub struct LeaderboardTableProps {
    pub entries: Rc<Vec<LeaderboardEntry>>,
}

/// Ranked table. Entries are shown in the order the server sent them.
#[function_component(LeaderboardTable)]
pub fn leaderboard_table(props: &LeaderboardTableProps) -> Html {
    html! {
        <div class="table-responsive">
            <table class="table table-striped table-hover table-bordered">
                <thead>
                    <tr>
                        <th style="width: 80px;">{"Rank"}</th>
                        <th>{"Team"}</th>
                        <th>{"Total Points"}</th>
                        <th>{"Activities"}</th>
                    </tr>
                </thead>
                <tbody>
                    if props.entries.is_empty() {
                        <EmptyRow colspan={4} message="No leaderboard entries found" />
                    } else {
                        { for props.entries.iter().enumerate().map(|(index, entry)| html! {
                            <tr key={index} class="data-row">
                                <td><span class={rank_badge(index)}>{ rank(index) }</span></td>
                                <td><strong>{ entry.team_label() }</strong></td>
                                <td>
                                    <span class="badge bg-warning text-dark fs-6">
                                        { display_quantity(entry.total_points.as_ref()) }
                                    </span>
                                </td>
                                <td>{ display_quantity(entry.total_activities.as_ref()) }</td>
                            </tr>
                        })}
                    }
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;
    use serde_json::json;

    async fn render_body(body: serde_json::Value) -> String {
        let entries: Vec<LeaderboardEntry> = web_types::decode_list(&body.to_string()).unwrap();
        render::<LeaderboardTable, _>(move || LeaderboardTableProps {
            entries: Rc::new(entries),
        })
        .await
    }

    #[tokio::test]
    async fn test_rank_follows_server_order() {
        let html = render_body(json!([
            {"id": 1, "team_name": "Low", "total_points": 50},
            {"id": 2, "team_name": "High", "total_points": 80}
        ]))
        .await;

        assert_eq!(html.matches("data-row").count(), 2);
        assert!(html.contains(r#"<span class="rank-badge rank-1">1</span>"#));
        assert!(html.contains(r#"<span class="rank-badge rank-2">2</span>"#));

        let low = html.find("Low").unwrap();
        let high = html.find("High").unwrap();
        assert!(low < high, "entries must not be re-sorted by points");
    }

    #[tokio::test]
    async fn test_envelope_rows() {
        let html = render_body(json!({"results": [
            {"id": 1, "team": "Team Marvel", "total_points": 120, "total_activities": 9}
        ]}))
        .await;

        assert_eq!(html.matches("data-row").count(), 1);
        assert!(html.contains("Team Marvel"));
    }

    #[tokio::test]
    async fn test_empty_placeholder() {
        let html = render_body(json!({"results": []})).await;

        assert_eq!(html.matches("data-row").count(), 0);
        assert!(html.contains("No leaderboard entries found"));
    }
}
