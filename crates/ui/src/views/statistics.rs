use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{StatCardVm, map_statistics_cards};

#[component]
pub fn StatisticsView() -> Element {
    let ctx = use_context::<AppContext>();
    let api = ctx.api();

    let resource = use_resource(move || {
        let api = api.clone();
        async move {
            let snapshot = api
                .statistics()
                .await
                .map_err(|err| ViewError::from_api(&err, "Failed to load statistics"))?;
            Ok(map_statistics_cards(&snapshot))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Quiz Statistics" }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading statistics..." }
                },
                ViewState::Ready(cards) => rsx! {
                    div { class: "stats-grid",
                        for card in cards {
                            StatCard { key: "{card.label}", card }
                        }
                    }
                },
                ViewState::Failed(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn StatCard(card: StatCardVm) -> Element {
    rsx! {
        div { class: "stat-card",
            p { class: "stat-value", "{card.value}" }
            p { class: "stat-label", "{card.label}" }
        }
    }
}
