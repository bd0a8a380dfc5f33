mod common;

use axum::http::StatusCode;
use common::{
    create_test_account, generate_unique_email, login_as, send, setup_test_app, test_state,
};
use serde_json::json;
use thriftstore_auth::verify_token;

#[tokio::test]
async fn test_root_reports_running() {
    let state = test_state();
    let app = setup_test_app(&state);

    let (status, body) = send(&app, "GET", "/", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Thrift store server is running"));
}

#[tokio::test]
async fn test_register_success() {
    let state = test_state();
    let app = setup_test_app(&state);
    let email = generate_unique_email();

    let (status, body) = send(
        &app,
        "POST",
        "/users",
        None,
        Some(json!({"userEmail": email, "userName": "Ann", "role": "seller", "photoURL": "x.png"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert!(body["insertedId"].is_string());

    let (_, lookup) = send(&app, "GET", &format!("/users?email={}", email), None, None).await;
    assert_eq!(lookup["result"]["userEmail"], json!(email));
    assert_eq!(lookup["result"]["role"], json!("seller"));
    assert_eq!(lookup["result"]["photoURL"], json!("x.png"));
    assert_eq!(lookup["result"]["isVerified"], json!(false));
}

#[tokio::test]
async fn test_register_duplicate_email_is_rejected() {
    let state = test_state();
    let app = setup_test_app(&state);
    let email = generate_unique_email();

    let first = json!({"userEmail": email, "userName": "First"});
    let second = json!({"userEmail": email, "userName": "Second"});

    let (_, body) = send(&app, "POST", "/users", None, Some(first)).await;
    assert_eq!(body["success"], json!(true));

    let (status, body) = send(&app, "POST", "/users", None, Some(second)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("user already exists"));

    let accounts = state
        .store
        .collection("users")
        .find(&thriftstore_db::Filter::new().eq("userEmail", email.as_str()))
        .await
        .unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0]["userName"], json!("First"));
}

#[tokio::test]
async fn test_register_validation() {
    let state = test_state();
    let app = setup_test_app(&state);

    let (status, body) = send(&app, "POST", "/users", None, Some(json!({"userName": "x"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], json!("userEmail is required"));

    let (status, _) = send(
        &app,
        "POST",
        "/users",
        None,
        Some(json!({"userEmail": "eve@thrift.test", "role": "admin"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_lookup_missing_account_is_null() {
    let state = test_state();
    let app = setup_test_app(&state);

    let (status, body) = send(&app, "GET", "/users?email=nobody@thrift.test", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": null}));
}

#[tokio::test]
async fn test_delete_by_email() {
    let state = test_state();
    let app = setup_test_app(&state);
    let email = generate_unique_email();
    create_test_account(&state, &email, "buyer").await;

    let (status, body) = send(&app, "DELETE", &format!("/users?email={}", email), None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], json!(1));
    let (_, lookup) = send(&app, "GET", &format!("/users?email={}", email), None, None).await;
    assert!(lookup["result"].is_null());
}

#[tokio::test]
async fn test_jwt_issued_for_registered_email() {
    let state = test_state();
    let app = setup_test_app(&state);
    let email = generate_unique_email();
    create_test_account(&state, &email, "buyer").await;

    let (status, body) = send(&app, "GET", &format!("/jwt?email={}", email), None, None).await;

    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap();
    let claims = verify_token(token, &state.jwt_config).unwrap();
    assert_eq!(claims.email, email);
}

#[tokio::test]
async fn test_jwt_refused_for_unknown_email() {
    let state = test_state();
    let app = setup_test_app(&state);

    let (status, body) = send(&app, "GET", "/jwt?email=ghost@thrift.test", None, None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn test_users_type_returns_own_account() {
    let state = test_state();
    let app = setup_test_app(&state);
    let (email, token) = login_as(&state, "seller").await;

    let (status, body) = send(
        &app,
        "GET",
        &format!("/usersType?email={}", email),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], json!("seller"));
}

#[tokio::test]
async fn test_users_type_rejects_other_email() {
    let state = test_state();
    let app = setup_test_app(&state);
    let (_, token) = login_as(&state, "buyer").await;
    let other = generate_unique_email();
    create_test_account(&state, &other, "admin").await;

    let (status, body) = send(
        &app,
        "GET",
        &format!("/usersType?email={}", other),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({"message": "forbidden access"}));
}

#[tokio::test]
async fn test_admin_promotes_account() {
    let state = test_state();
    let app = setup_test_app(&state);
    let (_, admin_token) = login_as(&state, "admin").await;
    let email = generate_unique_email();
    let id = create_test_account(&state, &email, "buyer").await;

    let (status, body) = send(&app, "PUT", &format!("/users/{}", id), Some(&admin_token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matchedCount"], json!(1));
    assert_eq!(body["modifiedCount"], json!(1));
    let account = common::find_one(&state, "users", &id).await.unwrap();
    assert_eq!(account["role"], json!("admin"));
}

#[tokio::test]
async fn test_lookup_without_email_is_null() {
    let state = test_state();
    let app = setup_test_app(&state);
    create_test_account(&state, &generate_unique_email(), "buyer").await;

    let (status, body) = send(&app, "GET", "/users", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"result": null}));
}
