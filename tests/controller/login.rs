use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use portal_test_utils::prelude::*;
use student_portal::{
    auth::provider::mock_student,
    model::{api::ErrorDto, auth::LoginDto, student::StudentDto},
    server::{controller::auth::login, model::session::student::SessionStudent},
};

use super::json_body;

fn credentials(email: &str, password: &str) -> Json<LoginDto> {
    Json(LoginDto {
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
/// Expect 200 with the student and the student stored in session for valid credentials
async fn returns_student_for_valid_credentials() -> Result<(), TestError> {
    let test = TestSetup::new();

    let result = login(
        State(test.state()),
        test.session.clone(),
        credentials(TEST_EMAIL, TEST_PASSWORD),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let student: StudentDto = json_body(resp).await;
    assert_eq!(student, mock_student());

    let stored = SessionStudent::get(&test.session).await.unwrap();
    assert_eq!(stored, Some(mock_student()));

    Ok(())
}

#[tokio::test]
/// Expect 401 and an empty session for invalid credentials
async fn returns_unauthorized_for_invalid_credentials() -> Result<(), TestError> {
    let test = TestSetup::new();

    let result = login(
        State(test.state()),
        test.session.clone(),
        credentials(TEST_EMAIL, "incorrecta"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: ErrorDto = json_body(resp).await;
    assert!(!body.error.is_empty());

    let stored = SessionStudent::get(&test.session).await.unwrap();
    assert!(stored.is_none());

    Ok(())
}
