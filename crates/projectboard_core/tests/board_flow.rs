use projectboard_core::{ProjectBoard, ProjectStatus, SubmitError, REJECTION_MESSAGE};

#[test]
fn valid_submission_reaches_both_lists() {
    let mut board = ProjectBoard::new();

    let id = board
        .submit("Build API", "Design and implement v1", "3")
        .expect("submission should be accepted");

    assert_eq!(board.store().len(), 1);
    let record = &board.store().projects()[0];
    assert_eq!(record.id(), id);
    assert_eq!(record.people(), 3);

    for status in [ProjectStatus::Active, ProjectStatus::Finished] {
        let list = board.list(status);
        assert_eq!(list.len(), 1, "status={status}");
        assert_eq!(list.render_count(), 1);
        assert_eq!(list.assigned_projects()[0].title(), "Build API");
    }

    assert_eq!(board.input().title(), "");
    assert_eq!(board.input().description(), "");
    assert_eq!(board.input().people(), "");
}

#[test]
fn decimal_spelling_of_whole_team_size_is_accepted() {
    let mut board = ProjectBoard::new();

    board
        .submit("Build API", "Design and implement v1", "3.0")
        .expect("3.0 is a whole team size");

    assert_eq!(board.store().projects()[0].people(), 3);
    for people in ["2.5", "abc"] {
        board
            .submit("Build API", "Design and implement v1", people)
            .expect_err("non-whole team size must be rejected");
    }
    assert_eq!(board.store().len(), 1);
}

#[test]
fn invalid_submission_is_rejected_without_mutation() {
    let mut board = ProjectBoard::new();

    let err = board
        .submit("", "short", "0")
        .expect_err("submission should be rejected");

    let SubmitError::Invalid(failure) = &err;
    assert_eq!(failure.fields, vec!["title", "people"]);
    assert_eq!(err.to_string(), REJECTION_MESSAGE);
    assert!(board.store().is_empty());
    for status in [ProjectStatus::Active, ProjectStatus::Finished] {
        let list = board.list(status);
        assert_eq!(list.render_count(), 0, "status={status}");
        assert!(list.is_empty(), "status={status}");
    }
    assert_eq!(board.input().description(), "short");
}

#[test]
fn rejection_between_accepted_submissions_changes_nothing() {
    let mut board = ProjectBoard::new();
    board
        .submit("First", "the first project", "2")
        .expect("first accepted");
    board
        .submit("Second", "tiny", "9")
        .expect_err("second rejected");
    board
        .submit("Third", "the third project", "5")
        .expect("third accepted");

    assert_eq!(board.store().len(), 2);
    let active = board.list(ProjectStatus::Active);
    assert_eq!(active.render_count(), 2);
    assert_eq!(
        active.render(),
        "ACTIVE PROJECTS\n  - First (2 people)\n  - Third (5 people)\n"
    );
}

#[test]
fn snapshot_serializes_both_lists() {
    let mut board = ProjectBoard::new();
    board
        .submit("Build API", "Design and implement v1", "3")
        .expect("accepted");

    let json = serde_json::to_value(board.snapshot()).expect("snapshot serializes");
    assert_eq!(json["active"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["finished"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["active"][0]["title"], "Build API");
    assert_eq!(json["active"][0]["people"], 3);
    assert!(json["active"][0]["id"].as_str().is_some_and(|id| !id.is_empty()));
}
