//! When steps for board BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::{Result, eyre};
use rstest_bdd_macros::when;
use taskboard::board::domain::{LabelId, NewTask, TaskStatus};

#[when(r#"the label "{label}" is deleted"#)]
fn delete_label(world: &mut BoardWorld, label: String) -> Result<()> {
    world
        .workspace
        .boards
        .delete_label(&LabelId::new(label))?
        .ok_or_else(|| eyre!("expected an active session"))?;
    Ok(())
}

#[when(r#"the task "{title}" moves to "{status}""#)]
fn move_task(world: &mut BoardWorld, title: String, status: String) -> Result<()> {
    let task = world.task_titled(&title)?;
    let target = TaskStatus::try_from(status.as_str())?;
    world
        .workspace
        .boards
        .update_task_status(task.id(), target)?
        .ok_or_else(|| eyre!("expected an active session"))?;
    Ok(())
}

#[when(r#"a task "{title}" is created"#)]
fn create_task(world: &mut BoardWorld, title: String) -> Result<()> {
    if world.workspace.boards.create_task(NewTask::new(title))?.is_some() {
        return Err(eyre!("a task must not be created without a session"));
    }
    Ok(())
}

#[when(r#"the description "{description}" is enhanced for "{title}""#)]
fn enhance_description(world: &mut BoardWorld, description: String, title: String) -> Result<()> {
    let enhancement = world
        .enhancement
        .as_ref()
        .ok_or_else(|| eyre!("no description enhancer configured"))?;
    let enhanced = run_async(enhancement.enhance(&title, &description));
    world.enhanced_description = Some(enhanced);
    Ok(())
}
