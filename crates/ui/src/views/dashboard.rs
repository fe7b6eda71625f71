use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizRowVm, map_quiz_rows};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let api = ctx.api();
    let navigator = use_navigator();

    let resource = use_resource(move || {
        let api = api.clone();
        async move {
            let quizzes = api
                .list_quizzes()
                .await
                .map_err(|err| ViewError::from_api(&err, "Failed to fetch quizzes"))?;
            Ok(map_quiz_rows(&quizzes))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Quiz Management Dashboard" }

            section { class: "welcome",
                h3 { "Welcome to the Quiz Dashboard" }
                p { "Manage quizzes, questions and categories from one place." }
            }

            section {
                h3 { "Available Quizzes" }
                match state {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { "Loading quizzes..." }
                    },
                    ViewState::Ready(rows) => rsx! {
                        if rows.is_empty() {
                            p { "No quizzes available" }
                        } else {
                            ul { class: "quiz-list",
                                for row in rows {
                                    QuizCard { key: "{row.id}", row }
                                }
                            }
                        }
                    },
                    ViewState::Failed(err) => rsx! {
                        p { class: "error", "{err.message()}" }
                    },
                }
            }

            div { class: "actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.push(Route::CreateQuiz {});
                    },
                    "Create New Quiz"
                }
            }
        }
    }
}

#[component]
fn QuizCard(row: QuizRowVm) -> Element {
    rsx! {
        li { class: "quiz-card",
            h4 { "{row.name}" }
            p { "{row.description}" }
            small { "Created on: {row.created_on}" }
        }
    }
}
