use course_explorer::render::{NO_RESULTS, NO_SELECTION};
use course_explorer::{AppError, DetailView, FilterField, Session, SortOption};

const CATALOG: &str = r#"[
    {"id": "CS101", "title": "Intro", "department": "CS", "level": 1, "credits": 3, "instructor": "A"},
    {"id": "CS201", "title": "Data", "department": "CS", "level": 2, "credits": 4}
]"#;

#[test]
fn test_upload_filter_and_sort_end_to_end() {
    let mut session = Session::new();
    session.load_text(CATALOG).expect("catalog should load");

    session.set_filter(FilterField::Department, "CS").unwrap();
    session.set_sort(SortOption::IdDescending);

    let ids: Vec<&str> = session.visible().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["CS201", "CS101"]);
}

#[test]
fn test_non_array_upload_fails_and_leaves_session_empty() {
    let mut session = Session::new();
    let err = session.load_text("{}").unwrap_err();
    assert!(matches!(err, AppError::Shape(_)), "got {err:?}");
    assert!(session.courses().is_empty());
}

#[test]
fn test_failed_upload_clears_previous_state() {
    let mut session = Session::new();
    session.load_text(CATALOG).expect("catalog should load");
    session.select_course("CS101").unwrap();
    session.set_filter(FilterField::Department, "CS").unwrap();

    let err = session.load_text(r#"[{"id": "X"}]"#).unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }), "got {err:?}");

    assert!(session.courses().is_empty());
    assert!(session.options().departments.is_empty());
    assert_eq!(session.criteria().department, None);
    assert!(session.selected_course().is_none());
}

#[test]
fn test_new_upload_resets_filters_and_selection_but_keeps_sort() {
    let mut session = Session::new();
    session.load_text(CATALOG).expect("catalog should load");
    session.set_filter(FilterField::Level, "1").unwrap();
    session.set_sort(SortOption::IdDescending);
    session.select_course("CS101").unwrap();

    session
        .load_text(r#"[{"id": "BI101", "title": "Biology", "department": "Bio"}]"#)
        .expect("second catalog should load");

    assert_eq!(session.criteria().level, None);
    assert!(session.selected_course().is_none());
    assert_eq!(session.sort(), SortOption::IdDescending);
    assert_eq!(session.options().departments, vec!["Bio"]);
}

#[test]
fn test_selecting_unknown_course_is_not_found() {
    let mut session = Session::new();
    session.load_text(CATALOG).expect("catalog should load");
    let err = session.select_course("PHYS999").unwrap_err();
    assert!(matches!(err, AppError::NotFound), "got {err:?}");
}

#[test]
fn test_selection_moves_to_the_latest_course() {
    let mut session = Session::new();
    session.load_text(CATALOG).expect("catalog should load");

    session.select_course("CS101").unwrap();
    session.select_course("CS201").unwrap();

    let list = session.list_view();
    let selected: Vec<&str> = list
        .entries
        .iter()
        .filter(|e| e.selected)
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(selected, vec!["CS201"]);
}

#[test]
fn test_list_view_placeholder_when_nothing_matches() {
    let mut session = Session::new();
    session.load_text(CATALOG).expect("catalog should load");
    session.set_filter(FilterField::Department, "History").unwrap();

    let list = session.list_view();
    assert!(list.entries.is_empty());
    assert_eq!(list.placeholder.as_deref(), Some(NO_RESULTS));
}

#[test]
fn test_detail_view_placeholder_without_selection() {
    let session = Session::new();
    match session.detail_view() {
        DetailView::Placeholder { message } => assert_eq!(message, NO_SELECTION),
        other => panic!("expected placeholder, got {other:?}"),
    }
}

#[test]
fn test_detail_view_fills_missing_optionals() {
    let mut session = Session::new();
    session
        .load_text(
            r#"[{
                "id": "CS101",
                "title": "Intro",
                "department": "CS",
                "assignments": [
                    {"title": "Homework 1", "dueDate": "2025-03-15"},
                    {"title": "Essay", "dueDate": "mid-semester"}
                ]
            }]"#,
        )
        .expect("catalog should load");
    session.select_course("CS101").unwrap();

    match session.detail_view() {
        DetailView::Course(detail) => {
            assert_eq!(detail.instructor, "TBA");
            assert_eq!(detail.level, "Not specified");
            assert_eq!(detail.semester, "Not specified");
            assert_eq!(detail.assignments[0].due_date, "Mar 15, 2025");
            assert_eq!(detail.assignments[1].due_date, "mid-semester");
        }
        other => panic!("expected course detail, got {other:?}"),
    }
}

#[test]
fn test_selection_survives_filtering_it_out_of_the_list() {
    let mut session = Session::new();
    session.load_text(CATALOG).expect("catalog should load");
    session.select_course("CS101").unwrap();
    session.set_filter(FilterField::Level, "2").unwrap();

    // The list no longer shows the course but the detail pane keeps it
    // until a new upload clears the selection.
    let list = session.list_view();
    assert!(list.entries.iter().all(|e| !e.selected));
    assert!(matches!(session.detail_view(), DetailView::Course(_)));
}

#[tokio::test]
async fn test_load_file_reads_from_disk() {
    let path = std::env::temp_dir().join("course_explorer_load_test.json");
    std::fs::write(&path, CATALOG).expect("failed to write fixture");

    let mut session = Session::new();
    let count = session.load_file(&path).await.expect("file should load");
    assert_eq!(count, 2);
    assert_eq!(session.options().departments, vec!["CS"]);

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn test_load_file_missing_path_is_read_error() {
    let mut session = Session::new();
    session.load_text(CATALOG).expect("catalog should load");

    let err = session
        .load_file("/nonexistent/courses.json")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Read(_)), "got {err:?}");
    assert!(session.courses().is_empty());
}
