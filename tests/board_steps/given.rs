//! Given steps for board BDD scenarios.

use std::sync::Arc;

use super::world::BoardWorld;
use eyre::{Result, eyre};
use rstest_bdd_macros::given;
use taskboard::board::{
    adapters::memory::ScriptedDescriptionEnhancer,
    domain::{LabelId, NewTask},
    ports::EnhancerError,
    services::DescriptionEnhancementService,
};

#[given(r#"a signed-in user "{username}""#)]
fn signed_in_user(world: &mut BoardWorld, username: String) -> Result<()> {
    world.workspace.sessions.register(&username, "1234")?;
    Ok(())
}

#[given("a workspace with nobody signed in")]
fn nobody_signed_in(world: &mut BoardWorld) -> Result<()> {
    if world.workspace.sessions.is_authenticated()? {
        return Err(eyre!("a fresh workspace must start signed out"));
    }
    Ok(())
}

#[given(r#"a task "{title}" labelled "{label}""#)]
fn labelled_task(world: &mut BoardWorld, title: String, label: String) -> Result<()> {
    world
        .workspace
        .boards
        .create_task(NewTask::new(title).with_labels([LabelId::new(label)]))?
        .ok_or_else(|| eyre!("expected an active session"))?;
    Ok(())
}

#[given("the description enhancer is unavailable")]
fn enhancer_unavailable(world: &mut BoardWorld) {
    let enhancer = ScriptedDescriptionEnhancer::failing(EnhancerError::MissingCredential);
    world.enhancement = Some(DescriptionEnhancementService::new(Arc::new(enhancer)));
}

#[given(r#"the description enhancer replies "{reply}""#)]
fn enhancer_replies(world: &mut BoardWorld, reply: String) {
    let enhancer = ScriptedDescriptionEnhancer::replying(reply);
    world.enhancement = Some(DescriptionEnhancementService::new(Arc::new(enhancer)));
}
