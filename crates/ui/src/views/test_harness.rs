use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::QuizId;
use services::{InMemoryQuizApi, QuizApi};

use crate::context::{AppContext, QuizHandoff, UiApp, build_app_context};
use crate::views::categories::{CategoriesBody, CategoriesPage, use_categories_page};
use crate::views::quiz_details::{QuizDetailsBody, QuizDetailsPage, use_quiz_details_page};
use crate::views::quiz_editor::{QuizEditorBody, QuizEditorPage, use_quiz_editor_page};
use crate::views::{CreateQuizView, DashboardView, StatisticsView};

struct TestApp {
    api: InMemoryQuizApi,
}

impl UiApp for TestApp {
    fn api(&self) -> Arc<dyn QuizApi> {
        Arc::new(self.api.clone())
    }

    fn backend_label(&self) -> String {
        "in-memory".to_string()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Dashboard,
    QuizEditor,
    CreateQuiz,
    QuizDetails(String),
    Categories,
    Statistics,
}

/// Handles registered by the mounted page so tests can fire its handlers.
#[derive(Clone, Default)]
pub struct PageHandles {
    quiz_editor: Rc<RefCell<Option<QuizEditorPage>>>,
    quiz_details: Rc<RefCell<Option<QuizDetailsPage>>>,
    categories: Rc<RefCell<Option<CategoriesPage>>>,
}

impl PageHandles {
    pub fn quiz_editor(&self) -> QuizEditorPage {
        (*self.quiz_editor.borrow()).expect("quiz editor mounted")
    }

    pub fn quiz_details(&self) -> QuizDetailsPage {
        (*self.quiz_details.borrow()).expect("quiz details mounted")
    }

    pub fn categories(&self) -> CategoriesPage {
        (*self.categories.borrow()).expect("categories mounted")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    ctx: AppContext,
    view: ViewKind,
    handles: PageHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| props.ctx.clone());
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::QuizEditor => rsx! { HandledQuizEditor {} },
        ViewKind::CreateQuiz => rsx! { CreateQuizView {} },
        ViewKind::QuizDetails(id) => rsx! { HandledQuizDetails { id } },
        ViewKind::Categories => rsx! { HandledCategories {} },
        ViewKind::Statistics => rsx! { StatisticsView {} },
    }
}

#[component]
fn HandledQuizEditor() -> Element {
    let handles = use_context::<PageHandles>();
    let page = use_quiz_editor_page();
    use_hook(|| *handles.quiz_editor.borrow_mut() = Some(page));
    rsx! { QuizEditorBody { page } }
}

#[component]
fn HandledQuizDetails(id: String) -> Element {
    let handles = use_context::<PageHandles>();
    let page = use_quiz_details_page(QuizId::from(id.as_str()));
    use_hook(|| *handles.quiz_details.borrow_mut() = Some(page));
    rsx! { QuizDetailsBody { page } }
}

#[component]
fn HandledCategories() -> Element {
    let handles = use_context::<PageHandles>();
    let page = use_categories_page();
    use_hook(|| *handles.categories.borrow_mut() = Some(page));
    rsx! { CategoriesBody { page } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: InMemoryQuizApi,
    pub handles: PageHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Mount, then let on-mount fetches settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        self.flush().await;
    }

    /// Run spawned handler tasks to completion.
    pub async fn flush(&mut self) {
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    /// Write a form signal the way an `oninput` handler would.
    pub fn set_input<T: 'static>(&self, mut signal: Signal<T>, value: T) {
        self.dom.in_runtime(|| signal.set(value));
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, api: InMemoryQuizApi) -> ViewHarness {
    setup_view_harness_with_handoff(view, api, None)
}

pub fn setup_view_harness_with_handoff(
    view: ViewKind,
    api: InMemoryQuizApi,
    handoff: Option<QuizHandoff>,
) -> ViewHarness {
    let app: Arc<dyn UiApp> = Arc::new(TestApp { api: api.clone() });
    let ctx = build_app_context(&app);
    if let Some(handoff) = handoff {
        ctx.stage_handoff(handoff);
    }

    let handles = PageHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            ctx,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, api, handles }
}
