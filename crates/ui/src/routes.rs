use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{
    CategoriesView, CreateQuizView, DashboardView, QuizDetailsView, QuizEditorView,
    StatisticsView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DashboardView)] Dashboard {},
        #[route("/quizzes", QuizEditorView)] QuizEditor {},
        #[route("/create-quiz", CreateQuizView)] CreateQuiz {},
        #[route("/quizzes/:id", QuizDetailsView)] QuizDetails { id: String },
        #[route("/add-category", CategoriesView)] AddCategory {},
        #[route("/statistics", StatisticsView)] Statistics {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        nav { class: "navbar",
            h1 { class: "navbar-brand", "Quiz CMS" }
            ul { class: "navbar-links",
                li { Link { to: Route::Dashboard {}, "Dashboard" } }
                li { Link { to: Route::CreateQuiz {}, "Create Quiz" } }
                li { Link { to: Route::QuizEditor {}, "All Quizzes" } }
                li { Link { to: Route::AddCategory {}, "Add Category" } }
                li { Link { to: Route::Statistics {}, "Statistics" } }
            }
            span { class: "navbar-backend", "{ctx.backend_label()}" }
        }
    }
}
