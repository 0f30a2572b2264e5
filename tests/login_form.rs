mod common;

use anyhow::{bail, Result};
use authforms::{
    common::AppError,
    forms::outcome::SubmissionOutcome,
    routes::{History, HOME},
    LoginForm,
};
use common::{can_bind_localhost, config_for};
use secrecy::ExposeSecret;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/api/v1/users/login";

fn fill(form: &LoginForm, email: &str, password: &str) {
    assert!(form.set("email", email));
    assert!(form.set("password", password));
}

#[tokio::test]
async fn valid_login_posts_once_and_navigates_home() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "email": "a@b.com", "password": "secret1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "abc" })))
        .expect(1)
        .mount(&server)
        .await;

    let history = Arc::new(History::new());
    let form = LoginForm::new(&config_for(&server.uri()), history.clone())?;
    fill(&form, "a@b.com", "secret1");

    let SubmissionOutcome::Success(response) = form.submit().await else {
        bail!("expected a successful login");
    };
    assert_eq!(
        response.token.as_ref().map(|token| token.expose_secret().to_string()),
        Some("abc".to_string())
    );
    assert_eq!(history.entries(), vec![HOME.to_string()]);
    assert!(!form.state().is_submitting());
    assert!(form.view().alert.is_none());
    Ok(())
}

#[tokio::test]
async fn server_error_keeps_the_form_and_reports_status_and_body() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .expect(1)
        .mount(&server)
        .await;

    let history = Arc::new(History::new());
    let form = LoginForm::new(&config_for(&server.uri()), history.clone())?;
    fill(&form, "a@b.com", "secret1");

    let outcome = form.submit().await;
    assert_eq!(
        outcome.failure(),
        Some(&AppError::Http {
            status: 500,
            message: "server error".to_string(),
        })
    );
    assert!(history.entries().is_empty());
    assert_eq!(form.state().value("email").as_deref(), Some("a@b.com"));

    let alert = form.view().alert.map(|alert| alert.message).unwrap_or_default();
    assert!(alert.contains("500"), "{alert}");
    assert!(alert.contains("server error"), "{alert}");
    Ok(())
}

#[tokio::test]
async fn invalid_fields_never_reach_the_network() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "abc" })))
        .expect(0)
        .mount(&server)
        .await;

    let history = Arc::new(History::new());
    let form = LoginForm::new(&config_for(&server.uri()), history.clone())?;
    fill(&form, "ab.com", "12345");

    let SubmissionOutcome::Invalid(errors) = form.submit().await else {
        bail!("expected validation errors");
    };
    assert_eq!(errors.get("email"), Some("Invalid email address"));
    assert_eq!(
        errors.get("password"),
        Some("Password must be at least 6 characters long")
    );
    assert!(history.entries().is_empty());

    // Errors follow the input once the form has been submitted.
    form.set("password", "secret1");
    assert_eq!(form.state().error("password"), None);
    assert!(form.state().error("email").is_some());
    Ok(())
}

#[tokio::test]
async fn missing_token_still_navigates() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": "a@b.com" })))
        .mount(&server)
        .await;

    let history = Arc::new(History::new());
    let form = LoginForm::new(&config_for(&server.uri()), history.clone())?;
    fill(&form, "a@b.com", "secret1");

    let response = form.submit().await.success();
    assert!(response.is_some_and(|response| !response.has_token()));
    assert_eq!(history.current().as_deref(), Some(HOME));
    Ok(())
}

#[tokio::test]
async fn unparseable_success_body_does_not_navigate() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_string("welcome"))
        .mount(&server)
        .await;

    let history = Arc::new(History::new());
    let form = LoginForm::new(&config_for(&server.uri()), history.clone())?;
    fill(&form, "a@b.com", "secret1");

    let outcome = form.submit().await;
    assert!(matches!(outcome.failure(), Some(AppError::Parse(_))));
    assert!(history.entries().is_empty());
    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() -> Result<()> {
    // Port 1 is reserved and nothing listens on it.
    let history = Arc::new(History::new());
    let form = LoginForm::new(&config_for("http://127.0.0.1:1"), history.clone())?;
    fill(&form, "a@b.com", "secret1");

    let outcome = form.submit().await;
    assert!(outcome.failure().is_some_and(AppError::is_network));
    assert!(history.entries().is_empty());
    assert!(form.state().failure().is_some());
    Ok(())
}

#[tokio::test]
async fn non_object_json_body_navigates_without_token() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }

    for body in [json!("ok"), json!(42), json!(true), json!(["abc"])] {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let history = Arc::new(History::new());
        let form = LoginForm::new(&config_for(&server.uri()), history.clone())?;
        fill(&form, "a@b.com", "secret1");

        let response = form.submit().await.success();
        assert!(
            response.is_some_and(|response| !response.has_token()),
            "{body}"
        );
        assert_eq!(history.entries(), vec![HOME.to_string()], "{body}");
    }
    Ok(())
}

#[tokio::test]
async fn long_error_body_is_kept_whole() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let body = "e".repeat(500);

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(400).set_body_string(format!("  {body}\n")))
        .mount(&server)
        .await;

    let history = Arc::new(History::new());
    let form = LoginForm::new(&config_for(&server.uri()), history.clone())?;
    fill(&form, "a@b.com", "secret1");

    let outcome = form.submit().await;
    assert_eq!(
        outcome.failure(),
        Some(&AppError::Http {
            status: 400,
            message: body.clone(),
        })
    );

    let alert = form.view().alert.map(|alert| alert.message).unwrap_or_default();
    assert!(alert.starts_with("Request failed (400): "), "{alert}");
    assert!(alert.len() < body.len(), "{alert}");
    Ok(())
}
