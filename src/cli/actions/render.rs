use crate::{
    common::AppConfig,
    components::{render, FormView},
    features::auth::{LoginForm, RegisterForm},
    routes::{History, Navigator},
};
use anyhow::Result;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Form {
    Login,
    Register,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
    pub form: Form,
    pub format: Format,
}

/// View model of the empty form.
///
/// # Errors
/// Returns an error if the configuration is invalid.
pub fn view(args: &Args) -> Result<FormView> {
    let navigator: Arc<dyn Navigator> = Arc::new(History::new());
    let view = match args.form {
        Form::Login => LoginForm::new(&args.config, navigator)?.view(),
        Form::Register => RegisterForm::new(&args.config, navigator)?.view(),
    };
    Ok(view)
}

/// # Errors
/// Returns an error if the configuration is invalid or serialization fails.
pub fn output(args: &Args) -> Result<String> {
    let view = view(args)?;
    match args.format {
        Format::Text => Ok(render::text(&view)),
        Format::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&view)?)),
    }
}

/// Print the empty form to stdout.
/// # Errors
/// Returns an error if the form cannot be rendered.
pub fn execute(args: &Args) -> Result<()> {
    print!("{}", output(args)?);
    Ok(())
}
