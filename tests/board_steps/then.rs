//! Then steps for board BDD scenarios.

use super::world::BoardWorld;
use eyre::{Result, eyre};
use rstest_bdd_macros::then;
use taskboard::board::domain::LabelId;

#[then(r#"no task references label "{label}""#)]
fn no_task_references_label(world: &BoardWorld, label: String) -> Result<()> {
    let label_id = LabelId::new(label);
    let board = world.board()?;
    if board.label(&label_id).is_some() {
        return Err(eyre!("label {label_id} must be removed from the board"));
    }
    if let Some(task) = board.tasks().iter().find(|task| task.has_label(&label_id)) {
        return Err(eyre!("task '{}' still references {label_id}", task.title()));
    }
    Ok(())
}

#[then("the board has {count:usize} labels")]
fn board_label_count(world: &BoardWorld, count: usize) -> Result<()> {
    let found = world.board()?.labels().len();
    if found != count {
        return Err(eyre!("expected {count} labels, found {found}"));
    }
    Ok(())
}

#[then(r#"the task "{title}" keeps label "{label}""#)]
fn task_keeps_label(world: &BoardWorld, title: String, label: String) -> Result<()> {
    let task = world.task_titled(&title)?;
    assert_eq!(task.labels(), [LabelId::new(label)]);
    Ok(())
}

#[then(r#"the task "{title}" is in the "{column}" column"#)]
fn task_in_column(world: &BoardWorld, title: String, column: String) -> Result<()> {
    let task = world.task_titled(&title)?;
    assert_eq!(task.status().display_name(), column);
    Ok(())
}

#[then("nothing has been stored")]
fn nothing_stored(world: &BoardWorld) -> Result<()> {
    if !world.blobs.is_empty()? {
        return Err(eyre!("expected the blob store to be untouched"));
    }
    Ok(())
}

#[then(r#"the description reads "{expected}""#)]
fn description_reads(world: &BoardWorld, expected: String) -> Result<()> {
    let actual = world
        .enhanced_description
        .as_deref()
        .ok_or_else(|| eyre!("no description has been enhanced"))?;
    assert_eq!(actual, expected);
    Ok(())
}
