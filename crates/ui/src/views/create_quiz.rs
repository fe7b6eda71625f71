use std::path::Path;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::model::{QuizUpload, UploadError};
use tracing::info;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::views::components::ErrorBanner;

#[derive(Clone, Debug, PartialEq)]
enum SubmitState {
    Idle,
    Submitting,
    Failed(ViewError),
}

#[component]
pub fn CreateQuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut file_path = use_signal(String::new);
    let mut submit_state = use_signal(|| SubmitState::Idle);

    let on_submit = {
        let api = ctx.api();
        use_callback(move |()| {
            if submit_state() == SubmitState::Submitting {
                return;
            }
            submit_state.set(SubmitState::Submitting);
            let api = api.clone();
            let (name, description, path) = (name(), description(), file_path());
            spawn(async move {
                let upload = match read_upload(&name, &description, &path).await {
                    Ok(upload) => upload,
                    Err(err) => {
                        submit_state.set(SubmitState::Failed(err));
                        return;
                    }
                };
                match api.create_quiz(&upload).await {
                    Ok(()) => {
                        info!(quiz = upload.name(), "quiz created");
                        submit_state.set(SubmitState::Idle);
                        navigator.push(Route::QuizEditor {});
                    }
                    Err(err) => submit_state.set(SubmitState::Failed(ViewError::from_api(
                        &err,
                        "Failed to create quiz.",
                    ))),
                }
            });
        })
    };

    let state = submit_state();

    rsx! {
        div { class: "page",
            h2 { "Create New Quiz" }
            if let SubmitState::Failed(error) = state.clone() {
                ErrorBanner { error }
            }
            form {
                class: "form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                label { r#for: "create-name", "Quiz Name:" }
                input {
                    id: "create-name",
                    r#type: "text",
                    required: true,
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                label { r#for: "create-description", "Quiz Description:" }
                textarea {
                    id: "create-description",
                    required: true,
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                }
                label { r#for: "create-file", "Upload Excel File (.xls, .xlsx):" }
                input {
                    id: "create-file",
                    r#type: "text",
                    placeholder: "/path/to/questions.xlsx",
                    required: true,
                    value: "{file_path}",
                    oninput: move |evt| file_path.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: state == SubmitState::Submitting,
                    "Create Quiz"
                }
            }
        }
    }
}

/// Read the spreadsheet from disk and validate the form as one upload.
async fn read_upload(name: &str, description: &str, path: &str) -> Result<QuizUpload, ViewError> {
    let path = path.trim();
    if path.is_empty() {
        return Err(ViewError::validation(UploadError::MissingFile));
    }
    let file_name = Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let contents = tokio::fs::read(path).await.map_err(|err| {
        tracing::warn!(%err, path, "failed to read quiz spreadsheet");
        ViewError::Validation(format!("Could not read {path}"))
    })?;

    QuizUpload::new(name, description, file_name, contents)
        .map_err(ViewError::validation)
}
