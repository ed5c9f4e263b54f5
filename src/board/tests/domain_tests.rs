//! Unit tests for board domain types.

use super::SteppingClock;
use crate::board::domain::{
    BoardDomainError, BoardState, LABEL_PALETTE, Label, LabelId, NewTask, Passcode,
    ParseTaskPriorityError, ParseTaskStatusError, Task, TaskPriority, TaskStatus, User, UserId,
    Username, default_labels,
};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> SteppingClock {
    SteppingClock::starting_at(1_700_000_000_000)
}

#[rstest]
#[case("todo", TaskStatus::Todo)]
#[case("working", TaskStatus::Working)]
#[case("review", TaskStatus::Review)]
#[case("finished", TaskStatus::Finished)]
#[case("  Finished ", TaskStatus::Finished)]
fn task_status_parses_wire_values(#[case] raw: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(raw), Ok(expected));
}

#[rstest]
#[case("done")]
#[case("in_progress")]
#[case("")]
fn task_status_rejects_unknown_values(#[case] raw: &str) {
    assert_eq!(
        TaskStatus::try_from(raw),
        Err(ParseTaskStatusError(raw.to_owned()))
    );
}

#[rstest]
fn task_status_columns_follow_pipeline_order() {
    let names: Vec<_> = TaskStatus::ALL
        .iter()
        .map(|status| status.display_name())
        .collect();
    assert_eq!(names, ["To Do", "Working", "In Review", "Finished"]);
}

#[rstest]
fn every_status_pair_is_a_legal_transition() {
    for from in TaskStatus::ALL {
        for to in TaskStatus::ALL {
            assert!(from.can_transition_to(to), "{from} -> {to} must be allowed");
        }
    }
}

#[rstest]
#[case("low", TaskPriority::Low)]
#[case("MEDIUM", TaskPriority::Medium)]
#[case("high", TaskPriority::High)]
fn task_priority_parses_wire_values(#[case] raw: &str, #[case] expected: TaskPriority) {
    assert_eq!(TaskPriority::try_from(raw), Ok(expected));
}

#[rstest]
fn task_priority_rejects_unknown_values() {
    assert_eq!(
        TaskPriority::try_from("urgent"),
        Err(ParseTaskPriorityError("urgent".to_owned()))
    );
}

#[rstest]
fn task_priority_defaults_to_medium() {
    assert_eq!(TaskPriority::default(), TaskPriority::Medium);
}

#[rstest]
fn create_task_starts_in_todo_with_clock_identity(clock: SteppingClock) -> eyre::Result<()> {
    let draft = NewTask::new("Write release notes")
        .with_description("Cover the new label manager")
        .with_labels([LabelId::new("l2")])
        .with_priority(TaskPriority::High);

    let task = Task::create(draft, &clock)?;

    assert_eq!(task.id().as_str(), "1700000000000");
    assert_eq!(task.title(), "Write release notes");
    assert_eq!(task.description(), "Cover the new label manager");
    assert_eq!(task.status(), TaskStatus::Todo);
    assert_eq!(task.labels(), [LabelId::new("l2")]);
    assert_eq!(task.priority(), TaskPriority::High);
    assert_eq!(task.created_at().timestamp_millis(), 1_700_000_000_001);
    Ok(())
}

#[rstest]
#[case("")]
#[case("   ")]
fn create_task_rejects_blank_title(clock: SteppingClock, #[case] title: &str) {
    assert_eq!(
        Task::create(NewTask::new(title), &clock),
        Err(BoardDomainError::EmptyTaskTitle)
    );
}

#[rstest]
fn create_label_trims_name_and_prefixes_identifier(clock: SteppingClock) -> eyre::Result<()> {
    let label = Label::create("  Urgent  ", "bg-amber-100 text-amber-700", &clock)?;

    assert_eq!(label.id().as_str(), "l1700000000000");
    assert_eq!(label.name().as_str(), "Urgent");
    assert_eq!(label.color(), "bg-amber-100 text-amber-700");
    Ok(())
}

#[rstest]
#[case("")]
#[case(" \t ")]
fn create_label_rejects_blank_name(clock: SteppingClock, #[case] name: &str) {
    assert_eq!(
        Label::create(name, "bg-slate-200 text-slate-700", &clock),
        Err(BoardDomainError::EmptyLabelName)
    );
}

#[rstest]
fn default_labels_are_design_feature_bug() {
    let labels = default_labels();
    let summary: Vec<_> = labels
        .iter()
        .map(|label| (label.id().as_str(), label.name().as_str()))
        .collect();
    assert_eq!(summary, [("l1", "Design"), ("l2", "Feature"), ("l3", "Bug")]);
}

#[rstest]
fn palette_offers_distinct_colours_covering_default_labels() {
    let mut distinct = LABEL_PALETTE.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    assert_eq!(distinct.len(), LABEL_PALETTE.len());

    for label in default_labels() {
        assert!(
            LABEL_PALETTE.iter().any(|token| *token == label.color()),
            "{} uses a colour outside the palette",
            label.name()
        );
    }
}

#[rstest]
#[case("alice", true)]
#[case("ALICE", true)]
#[case("Alice", true)]
#[case("alicia", false)]
#[case("alice ", false)]
fn username_matches_ignoring_case(#[case] candidate: &str, #[case] expected: bool) -> eyre::Result<()> {
    let username = Username::new("Alice")?;
    assert_eq!(username.matches(candidate), expected);
    assert_eq!(username.as_str(), "Alice");
    Ok(())
}

#[rstest]
fn empty_credentials_are_rejected() {
    assert_eq!(Username::new(""), Err(BoardDomainError::EmptyUsername));
    assert_eq!(Passcode::new(""), Err(BoardDomainError::EmptyPasscode));
}

#[rstest]
fn passcode_compares_exactly_and_redacts_debug() -> eyre::Result<()> {
    let passcode = Passcode::new("Secret1")?;

    assert!(passcode.matches("Secret1"));
    assert!(!passcode.matches("secret1"));
    assert_eq!(format!("{passcode:?}"), "Passcode(***)");
    Ok(())
}

#[rstest]
fn registered_user_starts_with_seeded_board() -> eyre::Result<()> {
    let user = User::register(
        UserId::new("42"),
        Username::new("Alice")?,
        Passcode::new("1234")?,
    );

    assert!(user.board().tasks().is_empty());
    assert_eq!(user.board(), &BoardState::seeded());
    assert_eq!(user.board().labels().len(), 3);
    Ok(())
}

#[rstest]
fn user_serializes_with_board_data_and_millisecond_timestamps(
    clock: SteppingClock,
) -> eyre::Result<()> {
    let mut user = User::register(
        UserId::new("1"),
        Username::new("Alice")?,
        Passcode::new("1234")?,
    );
    let task = Task::create(NewTask::new("Plan sprint"), &clock)?;
    user.board_mut().add_task(task);

    let value = serde_json::to_value(&user)?;
    let stored_task = &value["boardData"]["tasks"][0];

    assert_eq!(value["username"], "Alice");
    assert_eq!(value["passcode"], "1234");
    assert_eq!(stored_task["status"], "todo");
    assert_eq!(stored_task["priority"], "medium");
    assert_eq!(stored_task["createdAt"], 1_700_000_000_001_i64);
    assert_eq!(value["boardData"]["labels"][2]["name"], "Bug");
    Ok(())
}

#[rstest]
fn user_reads_collection_written_by_earlier_boards() -> eyre::Result<()> {
    let stored = r#"[{
        "id": "1712000000000",
        "username": "Bob",
        "passcode": "pw",
        "boardData": {
            "tasks": [{
                "id": "1712000000100",
                "title": "Fix login",
                "description": "",
                "status": "review",
                "labels": ["l3", "l3"],
                "createdAt": 1712000000100,
                "priority": "high"
            }],
            "labels": [{"id": "l3", "name": "Bug", "color": "bg-rose-100 text-rose-700"}]
        }
    }]"#;

    let users: Vec<User> = serde_json::from_str(stored)?;
    let user = users
        .first()
        .ok_or_else(|| eyre::eyre!("expected one user"))?;
    let task = user
        .board()
        .tasks()
        .first()
        .ok_or_else(|| eyre::eyre!("expected one task"))?;

    assert!(user.authenticates("bob", "pw"));
    assert_eq!(task.status(), TaskStatus::Review);
    assert_eq!(task.priority(), TaskPriority::High);
    assert_eq!(task.labels().len(), 2);
    Ok(())
}
