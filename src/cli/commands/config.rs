use crate::common::config::{DEFAULT_API_BASE_URL, ENV_API_BASE_URL, ENV_APP_BASE_URL, ENV_TIMEOUT};
use clap::{Arg, ArgAction, Command};

pub const ARG_API_BASE_URL: &str = "api-base-url";
pub const ARG_APP_BASE_URL: &str = "app-base-url";
pub const ARG_TIMEOUT: &str = "timeout";
pub const ARG_MESSAGE: &str = "message";
pub const ARG_NO_PROMPT: &str = "no-prompt";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_BASE_URL)
                .long("api-base-url")
                .help("Base URL of the users API")
                .default_value(DEFAULT_API_BASE_URL)
                .env(ENV_API_BASE_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_APP_BASE_URL)
                .long("app-base-url")
                .help("Base URL prepended to printed links (default: relative paths)")
                .env(ENV_APP_BASE_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long("timeout")
                .help("Request timeout in seconds (default: 10)")
                .env(ENV_TIMEOUT)
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new(ARG_MESSAGE)
                .long("message")
                .help("Replace a field's validation message, example: lastName='Last name is required'")
                .value_name("FIELD=TEXT")
                .global(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new(ARG_NO_PROMPT)
                .long("no-prompt")
                .help("Never prompt for missing or invalid fields")
                .global(true)
                .action(ArgAction::SetTrue),
        )
}
