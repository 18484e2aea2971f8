use axum::{extract::State, http::StatusCode, response::IntoResponse};
use portal_test_utils::prelude::*;
use student_portal::{
    auth::provider::mock_student,
    model::student::StudentDto,
    server::{controller::auth::get_session, model::session::student::SessionStudent},
};

use super::json_body;

#[tokio::test]
/// Expect 200 with the student signed in on the session
async fn returns_signed_in_student() -> Result<(), TestError> {
    let test = TestSetup::new();
    SessionStudent::insert(&test.session, &mock_student())
        .await
        .unwrap();

    let result = get_session(State(test.state()), test.session).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let student: StudentDto = json_body(resp).await;
    assert_eq!(student, mock_student());

    Ok(())
}

#[tokio::test]
/// Expect 401 when nobody is signed in
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = TestSetup::new();

    let result = get_session(State(test.state()), test.session).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
