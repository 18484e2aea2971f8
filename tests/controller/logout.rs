use axum::{extract::State, http::StatusCode, response::IntoResponse};
use portal_test_utils::prelude::*;
use student_portal::{
    auth::provider::mock_student,
    server::{controller::auth::logout, model::session::student::SessionStudent},
};

#[tokio::test]
/// Expect 204 and a cleared session after logout with a student in session
async fn returns_no_content_with_student_in_session() -> Result<(), TestError> {
    let test = TestSetup::new();
    SessionStudent::insert(&test.session, &mock_student())
        .await
        .unwrap();

    let result = logout(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let stored = SessionStudent::get(&test.session).await.unwrap();
    assert!(stored.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 204 after logout even without session data
async fn returns_no_content_without_session() -> Result<(), TestError> {
    let test = TestSetup::new();

    let result = logout(State(test.state()), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}
