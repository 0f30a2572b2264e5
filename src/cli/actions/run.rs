use crate::{
    cli::actions::{render, submit, Action},
    features::auth::{Login, Register},
};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Login(args) => submit::execute::<Login>(args).await,
        Action::Register(args) => submit::execute::<Register>(args).await,
        Action::Render(args) => render::execute(&args),
    }
}
