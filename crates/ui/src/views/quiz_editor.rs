use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use quiz_core::model::{Entity, Quiz, QuizId, QuizPatch};

use crate::context::{AppContext, QuizHandoff};
use crate::routes::Route;
use crate::views::components::{ConfirmModal, ErrorBanner};
use crate::views::{CollectionMode, CollectionVm, ViewError, ViewState};
use crate::vm::{QuizRowVm, map_quiz_rows};

/// Signals and handlers behind the quiz manager page.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct QuizEditorPage {
    pub vm: Signal<CollectionVm<Quiz>>,
    pub name_input: Signal<String>,
    pub description_input: Signal<String>,
    pub on_view: Callback<QuizId>,
    pub on_edit: Callback<QuizId>,
    pub on_delete: Callback<QuizId>,
    pub on_cancel: Callback<()>,
    pub on_update: Callback<()>,
    pub on_confirm_delete: Callback<()>,
}

pub(crate) fn use_quiz_editor_page() -> QuizEditorPage {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut vm = use_signal(CollectionVm::<Quiz>::new);
    let mut name_input = use_signal(String::new);
    let mut description_input = use_signal(String::new);

    let load_api = ctx.api();
    use_future(move || {
        let api = load_api.clone();
        async move {
            let ticket = vm.write().begin_load();
            let result = api
                .list_quizzes()
                .await
                .map_err(|err| ViewError::from_api(&err, "Failed to fetch quizzes"));
            vm.write().finish_load(ticket, result);
        }
    });

    let on_view = {
        let ctx = ctx.clone();
        use_callback(move |quiz_id: QuizId| {
            if let Some(quiz) = vm.read().items().iter().find(|quiz| quiz.id() == &quiz_id) {
                ctx.stage_handoff(QuizHandoff::from(quiz));
            }
            navigator.push(Route::QuizDetails {
                id: quiz_id.to_string(),
            });
        })
    };

    let on_edit = use_callback(move |quiz_id: QuizId| {
        if !vm.write().begin_edit(&quiz_id) {
            return;
        }
        if let Some(quiz) = vm.read().editing() {
            name_input.set(quiz.name().to_owned());
            description_input.set(quiz.description().to_owned());
        }
    });

    let on_delete = use_callback(move |quiz_id: QuizId| {
        vm.write().begin_delete(&quiz_id);
    });

    let on_cancel = use_callback(move |()| vm.write().cancel());

    let on_update = {
        let api = ctx.api();
        use_callback(move |()| {
            let Some(quiz) = vm.read().editing().cloned() else {
                return;
            };
            let patch = match QuizPatch::from_form(&name_input.read(), &description_input.read())
            {
                Ok(patch) => patch,
                Err(err) => {
                    vm.write().reject_input(ViewError::validation(err));
                    return;
                }
            };
            if !vm.write().begin_submit() {
                return;
            }
            let api = api.clone();
            spawn(async move {
                match api.update_quiz(quiz.id(), &patch).await {
                    Ok(()) => vm.write().edit_succeeded(quiz.id(), &patch),
                    Err(err) => vm
                        .write()
                        .edit_failed(ViewError::from_api(&err, "Failed to update quiz")),
                }
            });
        })
    };

    let on_confirm_delete = {
        let api = ctx.api();
        use_callback(move |()| {
            let Some(quiz) = vm.read().pending_delete().cloned() else {
                return;
            };
            if !vm.write().begin_submit() {
                return;
            }
            let api = api.clone();
            spawn(async move {
                match api.delete_quiz(quiz.id()).await {
                    Ok(()) => vm.write().delete_succeeded(quiz.id()),
                    Err(err) => vm
                        .write()
                        .delete_failed(ViewError::from_api(&err, "Failed to delete quiz")),
                }
            });
        })
    };

    QuizEditorPage {
        vm,
        name_input,
        description_input,
        on_view,
        on_edit,
        on_delete,
        on_cancel,
        on_update,
        on_confirm_delete,
    }
}

#[component]
pub fn QuizEditorView() -> Element {
    let page = use_quiz_editor_page();
    rsx! {
        QuizEditorBody { page }
    }
}

#[component]
pub(crate) fn QuizEditorBody(page: QuizEditorPage) -> Element {
    let QuizEditorPage {
        vm,
        mut name_input,
        mut description_input,
        on_view,
        on_edit,
        on_delete,
        on_cancel,
        on_update,
        on_confirm_delete,
    } = page;
    let snapshot = vm.read().clone();
    let notice = snapshot.notice().cloned();
    let busy = snapshot.is_submitting();

    rsx! {
        div { class: "page",
            h2 { "Quiz Manager" }

            match snapshot.state() {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading quizzes..." }
                },
                ViewState::Failed(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                ViewState::Ready(quizzes) => rsx! {
                    div { class: "actions",
                        Link { class: "btn btn-primary", to: Route::CreateQuiz {}, "+ Create New Quiz" }
                        Link { class: "btn btn-secondary", to: Route::AddCategory {}, "+ Add Category" }
                    }
                    if let (CollectionMode::Browsing, Some(error)) = (snapshot.mode(), notice.clone()) {
                        ErrorBanner { error }
                    }
                    table { class: "quiz-table",
                        thead {
                            tr {
                                th { "Quiz Name" }
                                th { "Description" }
                                th { "Created At" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for row in map_quiz_rows(quizzes) {
                                QuizRow {
                                    key: "{row.id}",
                                    row,
                                    on_view,
                                    on_edit,
                                    on_delete,
                                }
                            }
                        }
                    }
                },
            }

            match snapshot.mode() {
                CollectionMode::Browsing => rsx! {},
                CollectionMode::Editing(_) => rsx! {
                    div { class: "modal-overlay",
                        div { class: "modal",
                            h3 { class: "modal-title", "Edit Quiz" }
                            if let Some(error) = notice.clone() {
                                ErrorBanner { error }
                            }
                            div { class: "form",
                                label { r#for: "quiz-name", "Quiz Name:" }
                                input {
                                    id: "quiz-name",
                                    r#type: "text",
                                    value: "{name_input}",
                                    oninput: move |evt| name_input.set(evt.value()),
                                }
                                label { r#for: "quiz-description", "Quiz Description:" }
                                textarea {
                                    id: "quiz-description",
                                    value: "{description_input}",
                                    oninput: move |evt| description_input.set(evt.value()),
                                }
                            }
                            div { class: "modal-actions",
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    onclick: move |_| on_cancel.call(()),
                                    "Cancel"
                                }
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    disabled: busy,
                                    onclick: move |_| on_update.call(()),
                                    "Update"
                                }
                            }
                        }
                    }
                },
                CollectionMode::ConfirmingDelete(quiz) => rsx! {
                    ConfirmModal {
                        title: "Delete quiz?",
                        body: format!("Are you sure you want to delete \"{}\"?", quiz.name()),
                        confirm_label: "Delete",
                        busy,
                        on_cancel,
                        on_confirm: on_confirm_delete,
                    }
                },
            }
        }
    }
}

#[component]
fn QuizRow(
    row: QuizRowVm,
    on_view: Callback<QuizId>,
    on_edit: Callback<QuizId>,
    on_delete: Callback<QuizId>,
) -> Element {
    let view_id = row.id.clone();
    let edit_id = row.id.clone();
    let delete_id = row.id.clone();

    rsx! {
        tr {
            td { "{row.name}" }
            td { "{row.description}" }
            td { "{row.created_on}" }
            td {
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_view.call(view_id.clone()),
                    "View"
                }
                button {
                    class: "btn btn-warning",
                    r#type: "button",
                    onclick: move |_| on_edit.call(edit_id.clone()),
                    "Edit"
                }
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}
