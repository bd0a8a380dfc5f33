mod common;

use axum::Router;
use axum::http::StatusCode;
use common::{
    create_test_account, find_one, generate_unique_email, login_as, send, setup_test_app,
    test_state,
};
use serde_json::{Value, json};
use thriftstore_auth::issue_token;
use thriftstore_config::ToggleSemantics;

async fn add_product(app: &Router, token: &str, name: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/seller-product",
        Some(token),
        Some(json!({
            "productName": name,
            "categoryId": "c-jackets",
            "categoryName": "Jackets",
            "price": 25.5,
            "condition": "good"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    body["insertedId"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_add_product_takes_owner_from_token() {
    let state = test_state();
    let app = setup_test_app(&state);
    let (email, token) = login_as(&state, "seller").await;

    let (status, body) = send(
        &app,
        "POST",
        "/seller-product",
        Some(&token),
        Some(json!({
            "productName": "Boots",
            "categoryName": "Shoes",
            "price": 40,
            "sellerEmail": "someone-else@thrift.test"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let product = find_one(&state, "products", body["insertedId"].as_str().unwrap())
        .await
        .unwrap();
    assert_eq!(product["sellerEmail"], json!(email));
    assert_eq!(product["saleStatus"], json!("available"));
    assert_eq!(product["advertise"], json!(false));
    assert_eq!(product["reported"], json!(false));
}

#[tokio::test]
async fn test_add_product_requires_fields() {
    let state = test_state();
    let app = setup_test_app(&state);
    let (_, token) = login_as(&state, "seller").await;

    let (status, body) = send(
        &app,
        "POST",
        "/seller-product",
        Some(&token),
        Some(json!({"productName": "Boots", "price": 10})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], json!("categoryName is required"));
}

#[tokio::test]
async fn test_seller_sees_only_own_products() {
    let state = test_state();
    let app = setup_test_app(&state);
    let (_, sara) = login_as(&state, "seller").await;
    let (_, sam) = login_as(&state, "seller").await;

    add_product(&app, &sara, "Jacket").await;
    add_product(&app, &sara, "Scarf").await;
    add_product(&app, &sam, "Hat").await;

    let (status, body) = send(&app, "GET", "/seller-products", Some(&sara), None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["productName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Jacket", "Scarf"]);
}

#[tokio::test]
async fn test_legacy_advertise_negates_the_sent_value() {
    let state = test_state();
    let app = setup_test_app(&state);
    let (_, token) = login_as(&state, "seller").await;
    let id = add_product(&app, &token, "Jacket").await;
    let uri = format!("/seller-product/{}", id);

    // The client sends the current value; the stored value flips.
    let (status, body) = send(&app, "PUT", &uri, Some(&token), Some(json!({"advertise": false}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modifiedCount"], json!(1));
    assert_eq!(find_one(&state, "products", &id).await.unwrap()["advertise"], json!(true));

    let (_, listed) = send(&app, "GET", "/advertised", None, None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    send(&app, "PUT", &uri, Some(&token), Some(json!({"advertise": true}))).await;
    assert_eq!(find_one(&state, "products", &id).await.unwrap()["advertise"], json!(false));

    let (_, listed) = send(&app, "GET", "/advertised", None, None).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_explicit_advertise_stores_the_sent_value() {
    let mut state = test_state();
    state.toggle = ToggleSemantics::Explicit;
    let app = setup_test_app(&state);
    let (_, token) = login_as(&state, "seller").await;
    let id = add_product(&app, &token, "Jacket").await;
    let uri = format!("/seller-product/{}", id);

    send(&app, "PUT", &uri, Some(&token), Some(json!({"advertise": true}))).await;
    let (_, body) = send(&app, "PUT", &uri, Some(&token), Some(json!({"advertise": true}))).await;

    assert_eq!(body["matchedCount"], json!(1));
    assert_eq!(body["modifiedCount"], json!(0));
    assert_eq!(find_one(&state, "products", &id).await.unwrap()["advertise"], json!(true));
}

#[tokio::test]
async fn test_advertise_refuses_other_sellers_product() {
    let state = test_state();
    let app = setup_test_app(&state);
    let (_, owner) = login_as(&state, "seller").await;
    let (_, intruder) = login_as(&state, "seller").await;
    let id = add_product(&app, &owner, "Jacket").await;

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/seller-product/{}", id),
        Some(&intruder),
        Some(json!({"advertise": false})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(find_one(&state, "products", &id).await.unwrap()["advertise"], json!(false));
}

#[tokio::test]
async fn test_delete_only_removes_own_product() {
    let state = test_state();
    let app = setup_test_app(&state);
    let (_, owner) = login_as(&state, "seller").await;
    let (_, other) = login_as(&state, "seller").await;
    let id = add_product(&app, &owner, "Jacket").await;
    let uri = format!("/seller-product/{}", id);

    let (_, body) = send(&app, "DELETE", &uri, Some(&other), None).await;
    assert_eq!(body["deletedCount"], json!(0));

    let (_, body) = send(&app, "DELETE", &uri, Some(&owner), None).await;
    assert_eq!(body["deletedCount"], json!(1));
    assert!(find_one(&state, "products", &id).await.is_none());
}

#[tokio::test]
async fn test_advertised_excludes_paid_products() {
    let state = test_state();
    let app = setup_test_app(&state);
    let (_, token) = login_as(&state, "seller").await;
    let sold = add_product(&app, &token, "Sold").await;
    let listed = add_product(&app, &token, "Listed").await;

    for id in [&sold, &listed] {
        send(
            &app,
            "PUT",
            &format!("/seller-product/{}", id),
            Some(&token),
            Some(json!({"advertise": false})),
        )
        .await;
    }
    state
        .store
        .collection("products")
        .update_one(
            &thriftstore_db::Filter::by_id(sold.as_str()),
            &common::doc(json!({"saleStatus": "paid"})),
            false,
        )
        .await
        .unwrap();

    let (_, body) = send(&app, "GET", "/advertised", None, None).await;
    let ids: Vec<&Value> = body.as_array().unwrap().iter().map(|p| &p["_id"]).collect();
    assert_eq!(ids, vec![&json!(listed)]);
}

#[tokio::test]
async fn test_report_and_admin_review() {
    let state = test_state();
    let app = setup_test_app(&state);
    let (_, seller) = login_as(&state, "seller").await;
    let (_, buyer) = login_as(&state, "buyer").await;
    let (_, admin) = login_as(&state, "admin").await;
    let id = add_product(&app, &seller, "Jacket").await;
    add_product(&app, &seller, "Scarf").await;
    let uri = format!("/reported-products/{}", id);

    let (status, _) = send(&app, "PUT", &uri, Some(&buyer), Some(json!({"reported": false}))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "GET", "/reported-products", Some(&buyer), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app, "GET", "/reported-products", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["_id"], json!(id));

    let (status, _) = send(&app, "DELETE", &uri, Some(&buyer), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, body) = send(&app, "DELETE", &uri, Some(&admin), None).await;
    assert_eq!(body["deletedCount"], json!(1));
    assert!(find_one(&state, "products", &id).await.is_none());
}

#[tokio::test]
async fn test_seller_verification_is_copied_to_products() {
    let state = test_state();
    let app = setup_test_app(&state);
    let (_, admin) = login_as(&state, "admin").await;
    let email = generate_unique_email();
    let seller_id = create_test_account(&state, &email, "seller").await;
    let token = issue_token(&email, &state.jwt_config).unwrap();
    let first = add_product(&app, &token, "Jacket").await;
    let second = add_product(&app, &token, "Scarf").await;

    // Legacy clients send the current flag.
    let (status, body) = send(
        &app,
        "PUT",
        &format!("/all-sellers/{}", seller_id),
        Some(&admin),
        Some(json!({"isVerified": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modifiedCount"], json!(1));

    let seller = find_one(&state, "users", &seller_id).await.unwrap();
    assert_eq!(seller["isVerified"], json!(true));
    for id in [&first, &second] {
        let product = find_one(&state, "products", id).await.unwrap();
        assert_eq!(product["sellerVerified"], json!(true));
    }
}

#[tokio::test]
async fn test_admin_lists_and_deletes_by_role() {
    let state = test_state();
    let app = setup_test_app(&state);
    let (_, admin) = login_as(&state, "admin").await;
    let buyer_id = create_test_account(&state, &generate_unique_email(), "buyer").await;

    let (_, buyers) = send(&app, "GET", "/all-buyers", Some(&admin), None).await;
    assert_eq!(buyers.as_array().unwrap().len(), 1);

    let (_, admins) = send(&app, "GET", "/all-admins", Some(&admin), None).await;
    assert_eq!(admins.as_array().unwrap().len(), 1);

    // Deleting through the wrong role's route leaves the account alone.
    let (_, body) = send(&app, "DELETE", &format!("/all-sellers/{}", buyer_id), Some(&admin), None).await;
    assert_eq!(body["deletedCount"], json!(0));

    let (_, body) = send(&app, "DELETE", &format!("/all-buyers/{}", buyer_id), Some(&admin), None).await;
    assert_eq!(body["deletedCount"], json!(1));
    assert!(find_one(&state, "users", &buyer_id).await.is_none());
}

#[tokio::test]
async fn test_advertise_on_unknown_id_stays_owned_by_caller() {
    let state = test_state();
    let app = setup_test_app(&state);
    let (email, token) = login_as(&state, "seller").await;
    let (_, other) = login_as(&state, "seller").await;
    let uri = "/seller-product/not-listed-yet";

    let (status, body) = send(&app, "PUT", uri, Some(&token), Some(json!({"advertise": false}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["upsertedId"], json!("not-listed-yet"));

    let stub = find_one(&state, "products", "not-listed-yet").await.unwrap();
    assert_eq!(stub["sellerEmail"], json!(email));
    assert_eq!(stub["advertise"], json!(true));

    let (status, _) = send(&app, "PUT", uri, Some(&token), Some(json!({"advertise": true}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        find_one(&state, "products", "not-listed-yet").await.unwrap()["advertise"],
        json!(false)
    );

    let (status, _) = send(&app, "PUT", uri, Some(&other), Some(json!({"advertise": true}))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
