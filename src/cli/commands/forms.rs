use clap::{Arg, Command};

pub const CMD_LOGIN: &str = "login";
pub const CMD_REGISTER: &str = "register";
pub const CMD_RENDER: &str = "render";

pub const ARG_FIRST_NAME: &str = "first-name";
pub const ARG_LAST_NAME: &str = "last-name";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_FORM: &str = "form";
pub const ARG_FORMAT: &str = "format";

pub const ENV_PASSWORD: &str = "AUTHFORMS_PASSWORD";

fn email() -> Arg {
    Arg::new(ARG_EMAIL)
        .long("email")
        .help("Email address")
}

fn password() -> Arg {
    Arg::new(ARG_PASSWORD)
        .long("password")
        .help("Password (prefer the environment variable over the flag)")
        .env(ENV_PASSWORD)
        .hide_env_values(true)
}

#[must_use]
pub fn login() -> Command {
    Command::new(CMD_LOGIN)
        .about("Sign in with email and password")
        .arg(email())
        .arg(password())
}

#[must_use]
pub fn register() -> Command {
    Command::new(CMD_REGISTER)
        .about("Create an account")
        .arg(
            Arg::new(ARG_FIRST_NAME)
                .long("first-name")
                .help("First name"),
        )
        .arg(Arg::new(ARG_LAST_NAME).long("last-name").help("Last name"))
        .arg(email())
        .arg(password())
}

#[must_use]
pub fn render() -> Command {
    Command::new(CMD_RENDER)
        .about("Print an empty form")
        .arg(
            Arg::new(ARG_FORM)
                .help("Form to render")
                .required(true)
                .value_parser([CMD_LOGIN, CMD_REGISTER]),
        )
        .arg(
            Arg::new(ARG_FORMAT)
                .long("format")
                .help("Output format")
                .default_value("text")
                .value_parser(["text", "json"]),
        )
}
