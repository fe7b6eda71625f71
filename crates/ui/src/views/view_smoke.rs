use quiz_core::model::{
    Category, CategoryId, OptionSlot, Question, QuestionId, Quiz, QuizId, StatisticsSnapshot,
};
use quiz_core::time::fixed_now;
use services::{ApiOperation, InMemoryQuizApi, QuizApi, SimulatedFailure};

use crate::context::QuizHandoff;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_handoff};

fn seeded_quizzes() -> Vec<Quiz> {
    vec![
        Quiz::new(QuizId::from(1), "Math", "basic", Some(fixed_now())),
        Quiz::new(QuizId::from(2), "Geography", "capitals", None),
    ]
}

fn capital_question() -> Question {
    Question::new(
        QuestionId::from("q-1"),
        "Capital of France?",
        ["Berlin".into(), "Paris".into(), "Rome".into(), "Madrid".into()],
        OptionSlot::new(2).ok(),
    )
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_lists_quizzes_in_backend_order() {
    let api = InMemoryQuizApi::new().with_quizzes(seeded_quizzes());
    let mut harness = setup_view_harness(ViewKind::Dashboard, api);
    harness.settle().await;

    let html = harness.render();
    let math = html.find("Math").expect("math rendered");
    let geography = html.find("Geography").expect("geography rendered");
    assert!(math < geography, "order changed in {html}");
    assert!(html.contains("Created on: 2023-11-14"), "missing date in {html}");
    assert!(html.contains("Create New Quiz"), "missing action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_shows_empty_message() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, InMemoryQuizApi::new());
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("No quizzes available"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_editor_renders_table_and_fetches_once() {
    let api = InMemoryQuizApi::new().with_quizzes(seeded_quizzes());
    let mut harness = setup_view_harness(ViewKind::QuizEditor, api);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Quiz Manager"), "missing title in {html}");
    assert!(html.contains("capitals"), "missing description in {html}");
    assert!(html.contains("Delete"), "missing delete action in {html}");
    assert_eq!(harness.api.call_count(ApiOperation::ListQuizzes), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_editor_reports_fetch_failure() {
    let api = InMemoryQuizApi::new().with_quizzes(seeded_quizzes());
    api.fail(ApiOperation::ListQuizzes, SimulatedFailure::Unreachable);
    let mut harness = setup_view_harness(ViewKind::QuizEditor, api);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Failed to fetch quizzes"), "missing error in {html}");
    assert!(!html.contains("Math"), "partial data shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_details_uses_handoff_header() {
    let api = InMemoryQuizApi::new().with_questions(QuizId::from(5), vec![capital_question()]);
    let handoff = QuizHandoff {
        quiz_id: QuizId::from(5),
        name: "Geography".into(),
        description: "capitals".into(),
    };
    let mut harness =
        setup_view_harness_with_handoff(ViewKind::QuizDetails("5".into()), api, Some(handoff));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Geography"), "missing header in {html}");
    assert!(html.contains("1. Berlin"), "missing options in {html}");
    assert!(
        html.contains("Correct Answer: Option 2 - Paris"),
        "missing answer in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_details_network_failure_shows_message_only() {
    let api = InMemoryQuizApi::new().with_questions(QuizId::from(5), vec![capital_question()]);
    api.fail(ApiOperation::QuestionsForQuiz, SimulatedFailure::Unreachable);
    let mut harness = setup_view_harness(ViewKind::QuizDetails("5".into()), api);
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Failed to fetch quiz details"),
        "missing error in {html}"
    );
    assert!(!html.contains("Capital of France?"), "partial data shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_details_without_questions() {
    let mut harness = setup_view_harness(ViewKind::QuizDetails("9".into()), InMemoryQuizApi::new());
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("No questions available for this quiz."),
        "missing empty state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn statistics_defaults_missing_fields() {
    let api = InMemoryQuizApi::new().with_statistics(StatisticsSnapshot {
        total_quizzes: Some(4),
        ..StatisticsSnapshot::default()
    });
    let mut harness = setup_view_harness(ViewKind::Statistics, api);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Total Quizzes"), "missing label in {html}");
    assert!(html.contains("N/A"), "missing popular placeholder in {html}");
    assert!(html.contains("0%"), "missing score default in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn statistics_failure_is_reported() {
    let api = InMemoryQuizApi::new();
    api.fail(
        ApiOperation::Statistics,
        SimulatedFailure::Status(services::error::StatusCode::INTERNAL_SERVER_ERROR),
    );
    let mut harness = setup_view_harness(ViewKind::Statistics, api);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Failed to load statistics"), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn categories_form_renders_and_loads_once() {
    let api = InMemoryQuizApi::new().with_categories(vec![Category::new(CategoryId::new(1), "Art")]);
    let mut harness = setup_view_harness(ViewKind::Categories, api);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Add New Category"), "missing title in {html}");
    assert!(html.contains("Show Categories"), "missing toggle in {html}");
    assert_eq!(harness.api.call_count(ApiOperation::ListCategories), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn categories_load_failure_keeps_form() {
    let api = InMemoryQuizApi::new();
    api.fail(ApiOperation::ListCategories, SimulatedFailure::Unreachable);
    let mut harness = setup_view_harness(ViewKind::Categories, api);
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Failed to load categories. Please try again."),
        "missing error in {html}"
    );
    assert!(html.contains("Category ID:"), "form missing in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn create_quiz_form_renders() {
    let mut harness = setup_view_harness(ViewKind::CreateQuiz, InMemoryQuizApi::new());
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Create New Quiz"), "missing title in {html}");
    assert!(html.contains(".xlsx"), "missing file hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_details_handoff_survives_string_numeric_ids() {
    let wire_id: QuizId = serde_json::from_str("\"5\"").unwrap();
    let api = InMemoryQuizApi::new().with_questions(wire_id.clone(), vec![capital_question()]);
    let handoff = QuizHandoff {
        quiz_id: wire_id,
        name: "Geography".into(),
        description: "capitals".into(),
    };
    let mut harness =
        setup_view_harness_with_handoff(ViewKind::QuizDetails("5".into()), api, Some(handoff));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Geography"), "missing header in {html}");
    assert!(html.contains("Capital of France?"), "missing question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_details_keeps_leading_zero_ids() {
    let api = InMemoryQuizApi::new()
        .with_questions(QuizId::from("007"), vec![capital_question()])
        .with_questions(QuizId::from(7), Vec::new());
    let mut harness = setup_view_harness(ViewKind::QuizDetails("007".into()), api);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Capital of France?"), "wrong quiz fetched: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_editor_edit_patches_row_without_refetch() {
    let api = InMemoryQuizApi::new().with_quizzes(seeded_quizzes());
    let mut harness = setup_view_harness(ViewKind::QuizEditor, api);
    harness.settle().await;
    let page = harness.handles.quiz_editor();

    page.on_edit.call(QuizId::from(2));
    harness.flush().await;
    assert!(harness.render().contains("Edit Quiz"));

    harness.set_input(page.name_input, "World Geography".to_string());
    harness.set_input(page.description_input, "capitals and rivers".to_string());
    page.on_update.call(());
    harness.flush().await;

    let html = harness.render();
    assert!(html.contains("World Geography"), "row not patched in {html}");
    assert!(!html.contains("Edit Quiz"), "modal still open in {html}");
    assert_eq!(harness.api.quizzes()[1].description(), "capitals and rivers");
    assert_eq!(harness.api.call_count(ApiOperation::ListQuizzes), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_editor_rejects_blank_fields_and_stays_open() {
    let api = InMemoryQuizApi::new().with_quizzes(seeded_quizzes());
    let mut harness = setup_view_harness(ViewKind::QuizEditor, api);
    harness.settle().await;
    let page = harness.handles.quiz_editor();

    page.on_edit.call(QuizId::from(1));
    harness.flush().await;
    harness.set_input(page.name_input, String::new());
    page.on_update.call(());
    harness.flush().await;

    let html = harness.render();
    assert!(html.contains("Both fields are required."), "missing error in {html}");
    assert!(html.contains("Edit Quiz"), "modal closed in {html}");
    assert_eq!(harness.api.call_count(ApiOperation::UpdateQuiz), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_editor_delete_removes_row() {
    let api = InMemoryQuizApi::new().with_quizzes(seeded_quizzes());
    let mut harness = setup_view_harness(ViewKind::QuizEditor, api);
    harness.settle().await;
    let page = harness.handles.quiz_editor();

    page.on_delete.call(QuizId::from(1));
    harness.flush().await;
    assert!(harness.render().contains("Delete quiz?"));

    page.on_confirm_delete.call(());
    harness.flush().await;

    let html = harness.render();
    assert!(!html.contains("Math"), "row still shown in {html}");
    assert!(html.contains("Geography"), "other row lost in {html}");
    assert_eq!(harness.api.quizzes().len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_editor_failed_delete_keeps_row() {
    let api = InMemoryQuizApi::new().with_quizzes(seeded_quizzes());
    api.fail(ApiOperation::DeleteQuiz, SimulatedFailure::Unreachable);
    let mut harness = setup_view_harness(ViewKind::QuizEditor, api);
    harness.settle().await;
    let page = harness.handles.quiz_editor();

    page.on_delete.call(QuizId::from(1));
    harness.flush().await;
    page.on_confirm_delete.call(());
    harness.flush().await;

    let html = harness.render();
    assert!(html.contains("Failed to delete quiz"), "missing error in {html}");
    assert!(html.contains("Math"), "row removed in {html}");
    assert!(!html.contains("Delete quiz?"), "confirmation still open in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_details_edit_updates_question_card() {
    let api = InMemoryQuizApi::new().with_questions(QuizId::from(5), vec![capital_question()]);
    let mut harness = setup_view_harness(ViewKind::QuizDetails("5".into()), api);
    harness.settle().await;
    let page = harness.handles.quiz_details();

    page.on_edit.call(QuestionId::from("q-1"));
    harness.flush().await;
    assert!(harness.render().contains("Edit Question"));

    harness.set_input(page.text_input, "Which city is the capital of Italy?".to_string());
    harness.set_input(page.correct_input, "3".to_string());
    page.on_update.call(());
    harness.flush().await;

    let html = harness.render();
    assert!(
        html.contains("Which city is the capital of Italy?"),
        "card not patched in {html}"
    );
    assert!(
        html.contains("Correct Answer: Option 3 - Rome"),
        "answer not patched in {html}"
    );
    let stored = harness.api.questions(&QuizId::from(5));
    assert_eq!(stored[0].correct_option(), OptionSlot::new(3).ok());
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_details_failed_edit_keeps_form_input() {
    let api = InMemoryQuizApi::new().with_questions(QuizId::from(5), vec![capital_question()]);
    api.fail(
        ApiOperation::UpdateQuestion,
        SimulatedFailure::Status(services::error::StatusCode::INTERNAL_SERVER_ERROR),
    );
    let mut harness = setup_view_harness(ViewKind::QuizDetails("5".into()), api);
    harness.settle().await;
    let page = harness.handles.quiz_details();

    page.on_edit.call(QuestionId::from("q-1"));
    harness.flush().await;
    harness.set_input(page.text_input, "Capital of Spain?".to_string());
    page.on_update.call(());
    harness.flush().await;

    let html = harness.render();
    assert!(html.contains("Failed to update question"), "missing error in {html}");
    assert!(html.contains("Capital of Spain?"), "input lost in {html}");
    assert!(html.contains("Edit Question"), "form closed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_details_delete_empties_list() {
    let api = InMemoryQuizApi::new().with_questions(QuizId::from(5), vec![capital_question()]);
    let mut harness = setup_view_harness(ViewKind::QuizDetails("5".into()), api);
    harness.settle().await;
    let page = harness.handles.quiz_details();

    page.on_delete.call(QuestionId::from("q-1"));
    harness.flush().await;
    assert!(harness.render().contains("Confirm Deletion"));

    page.on_confirm_delete.call(());
    harness.flush().await;

    let html = harness.render();
    assert!(
        html.contains("No questions available for this quiz."),
        "question still shown in {html}"
    );
    assert!(harness.api.questions(&QuizId::from(5)).is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn categories_add_refreshes_list() {
    let api = InMemoryQuizApi::new().with_categories(vec![Category::new(CategoryId::new(1), "Art")]);
    let mut harness = setup_view_harness(ViewKind::Categories, api);
    harness.settle().await;
    let page = harness.handles.categories();

    harness.set_input(page.id_input, "3".to_string());
    harness.set_input(page.name_input, "History".to_string());
    page.on_submit.call(());
    harness.flush().await;
    harness.set_input(page.show_list, true);
    harness.flush().await;

    let html = harness.render();
    assert!(
        html.contains("Category added successfully!"),
        "missing confirmation in {html}"
    );
    assert!(html.contains("Art (ID: 1)"), "existing category lost in {html}");
    assert!(html.contains("History (ID: 3)"), "new category missing in {html}");
    assert_eq!(harness.api.call_count(ApiOperation::ListCategories), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn categories_failed_refresh_keeps_list() {
    let api = InMemoryQuizApi::new().with_categories(vec![Category::new(CategoryId::new(1), "Art")]);
    let mut harness = setup_view_harness(ViewKind::Categories, api.clone());
    harness.settle().await;
    let page = harness.handles.categories();

    api.fail(ApiOperation::ListCategories, SimulatedFailure::Unreachable);
    harness.set_input(page.id_input, "3".to_string());
    harness.set_input(page.name_input, "History".to_string());
    page.on_submit.call(());
    harness.flush().await;
    harness.set_input(page.show_list, true);
    harness.flush().await;

    let html = harness.render();
    assert!(
        html.contains("Category added successfully!"),
        "missing confirmation in {html}"
    );
    assert!(html.contains("Art (ID: 1)"), "list replaced in {html}");
    assert!(
        html.contains("Failed to load categories. Please try again."),
        "missing refresh error in {html}"
    );
    assert!(!html.contains("No categories found."), "empty list shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn categories_reject_invalid_input_without_calling_backend() {
    let mut harness = setup_view_harness(ViewKind::Categories, InMemoryQuizApi::new());
    harness.settle().await;
    let page = harness.handles.categories();

    harness.set_input(page.name_input, "History".to_string());
    page.on_submit.call(());
    harness.flush().await;

    let html = harness.render();
    assert!(
        html.contains("Category ID must be a non-empty numeric value."),
        "missing validation in {html}"
    );
    assert_eq!(harness.api.call_count(ApiOperation::AddCategory), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn fetch_resolving_after_unmount_is_dropped() {
    let api = InMemoryQuizApi::new().with_quizzes(seeded_quizzes());
    api.hold(ApiOperation::ListQuizzes);
    let mut harness = setup_view_harness(ViewKind::QuizEditor, api.clone());
    harness.settle().await;

    assert_eq!(api.call_count(ApiOperation::ListQuizzes), 1);
    assert!(harness.render().contains("Loading quizzes..."));

    drop(harness);
    api.release(ApiOperation::ListQuizzes);
    tokio::task::yield_now().await;

    assert_eq!(api.list_quizzes().await.unwrap().len(), 2);
    assert_eq!(api.call_count(ApiOperation::ListQuizzes), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn delete_resolving_after_unmount_is_dropped() {
    let api = InMemoryQuizApi::new().with_quizzes(seeded_quizzes());
    let mut harness = setup_view_harness(ViewKind::QuizEditor, api.clone());
    harness.settle().await;
    let page = harness.handles.quiz_editor();

    api.hold(ApiOperation::DeleteQuiz);
    page.on_delete.call(QuizId::from(1));
    harness.flush().await;
    page.on_confirm_delete.call(());
    harness.flush().await;
    assert_eq!(api.call_count(ApiOperation::DeleteQuiz), 1);

    drop(harness);
    api.release(ApiOperation::DeleteQuiz);
    tokio::task::yield_now().await;

    assert_eq!(api.quizzes().len(), 2);
}
