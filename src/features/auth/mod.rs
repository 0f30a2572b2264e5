//! Login and registration forms. Both post JSON credentials to the users API
//! and navigate on success: login to the home page, registration to the login
//! page. This module handles passwords and tokens and must never log them.

pub mod login;
pub mod register;
pub mod types;

use crate::forms::AuthForm;

pub use login::Login;
pub use register::Register;

pub type LoginForm = AuthForm<Login>;
pub type RegisterForm = AuthForm<Register>;
