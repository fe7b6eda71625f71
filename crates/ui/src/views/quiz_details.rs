use dioxus::prelude::*;
use quiz_core::model::{
    Entity, OPTION_COUNT, OptionSlot, Question, QuestionId, QuestionPatch, QuizId,
};

use crate::context::{AppContext, QuizHandoff};
use crate::views::components::{ConfirmModal, ErrorBanner};
use crate::views::{CollectionMode, CollectionVm, ViewError, ViewState};
use crate::vm::QuestionCardVm;

/// Route entry point. Keyed on the id so a new quiz gets a fresh page.
#[component]
pub fn QuizDetailsView(id: String) -> Element {
    let quiz_id = QuizId::from(id.as_str());
    rsx! {
        QuizDetailsScreen { key: "{id}", quiz_id }
    }
}

#[component]
fn QuizDetailsScreen(quiz_id: QuizId) -> Element {
    let page = use_quiz_details_page(quiz_id);
    rsx! {
        QuizDetailsBody { page }
    }
}

/// Signals and handlers behind one quiz's question list.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct QuizDetailsPage {
    pub header: Signal<Option<QuizHandoff>>,
    pub vm: Signal<CollectionVm<Question>>,
    pub text_input: Signal<String>,
    pub option_inputs: Signal<[String; OPTION_COUNT]>,
    pub correct_input: Signal<String>,
    pub on_edit: Callback<QuestionId>,
    pub on_delete: Callback<QuestionId>,
    pub on_cancel: Callback<()>,
    pub on_update: Callback<()>,
    pub on_confirm_delete: Callback<()>,
}

pub(crate) fn use_quiz_details_page(quiz_id: QuizId) -> QuizDetailsPage {
    let ctx = use_context::<AppContext>();
    let header = {
        let ctx = ctx.clone();
        let quiz_id = quiz_id.clone();
        use_signal(move || ctx.take_handoff(&quiz_id))
    };
    let mut vm = use_signal(CollectionVm::<Question>::new);
    let mut text_input = use_signal(String::new);
    let mut option_inputs = use_signal(<[String; OPTION_COUNT]>::default);
    let mut correct_input = use_signal(String::new);

    let load_api = ctx.api();
    let load_id = quiz_id.clone();
    use_future(move || {
        let api = load_api.clone();
        let quiz_id = load_id.clone();
        async move {
            let ticket = vm.write().begin_load();
            let result = api
                .questions_for_quiz(&quiz_id)
                .await
                .map_err(|err| ViewError::from_api(&err, "Failed to fetch quiz details"));
            vm.write().finish_load(ticket, result);
        }
    });

    let on_edit = use_callback(move |question_id: QuestionId| {
        if !vm.write().begin_edit(&question_id) {
            return;
        }
        if let Some(question) = vm.read().editing() {
            text_input.set(question.text().to_owned());
            option_inputs.set(question.options().clone());
            correct_input.set(
                question
                    .correct_option()
                    .map(|slot| slot.position().to_string())
                    .unwrap_or_default(),
            );
        }
    });

    let on_delete = use_callback(move |question_id: QuestionId| {
        vm.write().begin_delete(&question_id);
    });

    let on_cancel = use_callback(move |()| vm.write().cancel());

    let on_update = {
        let api = ctx.api();
        use_callback(move |()| {
            let Some(question) = vm.read().editing().cloned() else {
                return;
            };
            let patch = match QuestionPatch::from_form(
                &question,
                &text_input.read(),
                &option_inputs.read(),
                &correct_input.read(),
            ) {
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
                match api.update_question(question.id(), &patch).await {
                    Ok(()) => vm.write().edit_succeeded(question.id(), &patch),
                    Err(err) => vm
                        .write()
                        .edit_failed(ViewError::from_api(&err, "Failed to update question")),
                }
            });
        })
    };

    let on_confirm_delete = {
        let api = ctx.api();
        use_callback(move |()| {
            let Some(question) = vm.read().pending_delete().cloned() else {
                return;
            };
            if !vm.write().begin_submit() {
                return;
            }
            let api = api.clone();
            spawn(async move {
                match api.delete_question(question.id()).await {
                    Ok(()) => vm.write().delete_succeeded(question.id()),
                    Err(err) => vm
                        .write()
                        .delete_failed(ViewError::from_api(&err, "Failed to delete question")),
                }
            });
        })
    };

    QuizDetailsPage {
        header,
        vm,
        text_input,
        option_inputs,
        correct_input,
        on_edit,
        on_delete,
        on_cancel,
        on_update,
        on_confirm_delete,
    }
}

#[component]
pub(crate) fn QuizDetailsBody(page: QuizDetailsPage) -> Element {
    let QuizDetailsPage {
        header,
        vm,
        mut text_input,
        mut option_inputs,
        mut correct_input,
        on_edit,
        on_delete,
        on_cancel,
        on_update,
        on_confirm_delete,
    } = page;

    let (title, description) = header()
        .map(|handoff| (handoff.name, handoff.description))
        .unwrap_or_default();
    let options = option_inputs.read().clone();
    let snapshot = vm.read().clone();
    let notice = snapshot.notice().cloned();
    let busy = snapshot.is_submitting();

    rsx! {
        div { class: "page",
            match snapshot.state() {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading quiz details..." }
                },
                ViewState::Failed(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
                ViewState::Ready(questions) => rsx! {
                    h2 { class: "quiz-title", "{title}" }
                    p { class: "quiz-description", "{description}" }
                    if let (CollectionMode::Browsing, Some(error)) = (snapshot.mode(), notice.clone()) {
                        ErrorBanner { error }
                    }
                    if questions.is_empty() {
                        p { "No questions available for this quiz." }
                    } else {
                        ul { class: "question-list",
                            for question in questions.iter() {
                                QuestionCard {
                                    key: "{question.id()}",
                                    question_id: question.id().clone(),
                                    card: QuestionCardVm::from(question),
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
                            h3 { class: "modal-title", "Edit Question" }
                            if let Some(error) = notice.clone() {
                                ErrorBanner { error }
                            }
                            div { class: "form",
                                label { r#for: "question-text", "Question Text:" }
                                input {
                                    id: "question-text",
                                    r#type: "text",
                                    value: "{text_input}",
                                    oninput: move |evt| text_input.set(evt.value()),
                                }
                                label { "Options:" }
                                for (slot, option) in OptionSlot::all().zip(options) {
                                    input {
                                        key: "{slot.position()}",
                                        r#type: "text",
                                        value: "{option}",
                                        oninput: move |evt| option_inputs.write()[slot.index()] = evt.value(),
                                    }
                                }
                                label { r#for: "correct-option", "Correct Option:" }
                                input {
                                    id: "correct-option",
                                    r#type: "number",
                                    min: "1",
                                    max: "4",
                                    value: "{correct_input}",
                                    oninput: move |evt| correct_input.set(evt.value()),
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
                                    "Update Question"
                                }
                            }
                        }
                    }
                },
                CollectionMode::ConfirmingDelete(_) => rsx! {
                    ConfirmModal {
                        title: "Confirm Deletion",
                        body: "Are you sure you want to delete this question?",
                        confirm_label: "Yes, Delete",
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
fn QuestionCard(
    question_id: QuestionId,
    card: QuestionCardVm,
    on_edit: Callback<QuestionId>,
    on_delete: Callback<QuestionId>,
) -> Element {
    let edit_id = question_id.clone();
    let delete_id = question_id;

    rsx! {
        li { class: "question-card",
            h4 { "{card.text}" }
            ul { class: "option-list",
                for option in card.options {
                    li { "{option}" }
                }
            }
            p { class: "correct-answer", "{card.correct_label}" }
            div { class: "actions",
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
