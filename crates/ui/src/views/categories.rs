use dioxus::prelude::*;
use quiz_core::model::{Category, NewCategory, sanitize_category_id_input};
use tracing::info;

use crate::context::AppContext;
use crate::views::components::ErrorBanner;
use crate::views::{CollectionVm, ViewError, ViewState};
use crate::vm::{CategoryItemVm, map_category_items};

#[derive(Clone, Debug, PartialEq)]
enum AddState {
    Idle,
    Submitting,
    Added,
    Failed(ViewError),
}

/// Signals and handlers behind the category manager.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct CategoriesPage {
    pub vm: Signal<CollectionVm<Category>>,
    pub id_input: Signal<String>,
    pub name_input: Signal<String>,
    add_state: Signal<AddState>,
    pub show_list: Signal<bool>,
    pub on_submit: Callback<()>,
}

pub(crate) fn use_categories_page() -> CategoriesPage {
    let ctx = use_context::<AppContext>();
    let mut vm = use_signal(CollectionVm::<Category>::new);
    let mut id_input = use_signal(String::new);
    let mut name_input = use_signal(String::new);
    let mut add_state = use_signal(|| AddState::Idle);
    let show_list = use_signal(|| false);

    let load_api = ctx.api();
    use_future(move || {
        let api = load_api.clone();
        async move {
            let ticket = vm.write().begin_load();
            let result = api.list_categories().await.map_err(|err| {
                ViewError::from_api(&err, "Failed to load categories. Please try again.")
            });
            vm.write().finish_load(ticket, result);
        }
    });

    let on_submit = {
        let api = ctx.api();
        use_callback(move |()| {
            if add_state() == AddState::Submitting {
                return;
            }
            let category = match NewCategory::parse(&id_input.read(), &name_input.read()) {
                Ok(category) => category,
                Err(err) => {
                    add_state.set(AddState::Failed(ViewError::validation(err)));
                    return;
                }
            };
            add_state.set(AddState::Submitting);
            let api = api.clone();
            spawn(async move {
                if let Err(err) = api.add_category(&category).await {
                    add_state.set(AddState::Failed(ViewError::from_api(
                        &err,
                        "Failed to add category. Please try again.",
                    )));
                    return;
                }
                info!(id = %category.id(), "category added");
                add_state.set(AddState::Added);
                id_input.set(String::new());
                name_input.set(String::new());

                let ticket = vm.write().begin_refresh();
                let result = api.list_categories().await.map_err(|err| {
                    ViewError::from_api(&err, "Failed to load categories. Please try again.")
                });
                vm.write().finish_load(ticket, result);
            });
        })
    };

    CategoriesPage {
        vm,
        id_input,
        name_input,
        add_state,
        show_list,
        on_submit,
    }
}

#[component]
pub fn CategoriesView() -> Element {
    let page = use_categories_page();
    rsx! {
        CategoriesBody { page }
    }
}

#[component]
pub(crate) fn CategoriesBody(page: CategoriesPage) -> Element {
    let CategoriesPage {
        vm,
        mut id_input,
        mut name_input,
        mut add_state,
        mut show_list,
        on_submit,
    } = page;

    let snapshot = vm.read().clone();
    let state = add_state();

    rsx! {
        div { class: "page",
            h2 { "Add New Category" }

            if let ViewState::Failed(error) = snapshot.state().clone() {
                ErrorBanner { error }
            }
            if let Some(error) = snapshot.notice().cloned() {
                ErrorBanner { error }
            }
            if let AddState::Failed(error) = state.clone() {
                ErrorBanner { error }
            }
            if state == AddState::Added {
                div { class: "success",
                    p { "Category added successfully!" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| add_state.set(AddState::Idle),
                        "Close"
                    }
                }
            }

            form {
                class: "form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                label { r#for: "category-id", "Category ID:" }
                input {
                    id: "category-id",
                    r#type: "text",
                    placeholder: "Enter numeric Category ID",
                    value: "{id_input}",
                    oninput: move |evt| id_input.set(sanitize_category_id_input(&evt.value())),
                }
                label { r#for: "category-name", "Category Name:" }
                input {
                    id: "category-name",
                    r#type: "text",
                    placeholder: "Enter Category Name",
                    value: "{name_input}",
                    oninput: move |evt| name_input.set(evt.value()),
                }
                div { class: "actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: state == AddState::Submitting,
                        "Add Category"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| show_list.set(!show_list()),
                        if show_list() { "Hide Categories" } else { "Show Categories" }
                    }
                }
            }

            if show_list() {
                CategoryList { state: snapshot.state().clone() }
            }
        }
    }
}

#[component]
fn CategoryList(state: ViewState<Vec<Category>>) -> Element {
    let items: Vec<CategoryItemVm> = match &state {
        ViewState::Ready(categories) => map_category_items(categories),
        ViewState::Idle | ViewState::Loading => {
            return rsx! {
                p { "Loading categories..." }
            };
        }
        ViewState::Failed(_) => Vec::new(),
    };

    rsx! {
        div { class: "category-panel",
            h3 { "Category List" }
            if items.is_empty() {
                p { "No categories found." }
            } else {
                ul { class: "category-list",
                    for item in items {
                        li { key: "{item.key}", "{item.label}" }
                    }
                }
            }
        }
    }
}
