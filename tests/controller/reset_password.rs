use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use portal_test_utils::prelude::*;
use student_portal::{model::auth::ResetPasswordDto, server::controller::auth::reset_password};

fn request(email: &str) -> Json<ResetPasswordDto> {
    Json(ResetPasswordDto {
        email: email.to_string(),
    })
}

#[tokio::test]
/// Expect 204 for the registered account
async fn returns_no_content_for_known_account() -> Result<(), TestError> {
    let test = TestSetup::new();

    let result = reset_password(State(test.state()), test.session, request(TEST_EMAIL)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
/// Expect 404 for an address without an account
async fn returns_not_found_for_unknown_account() -> Result<(), TestError> {
    let test = TestSetup::new();

    let result = reset_password(
        State(test.state()),
        test.session,
        request(TEST_UNKNOWN_EMAIL),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
