//! HTTP tests against the full router over the in-memory backend.

use axum::http::StatusCode;
use axum_test::TestServer;
use inventory::{handler::AppRouter, state::AppState};
use serde_json::{Value, json};
use std::sync::Arc;

fn server() -> TestServer {
    let app = AppRouter::build(Arc::new(AppState::in_memory()));
    TestServer::try_new(app).unwrap()
}

async fn add_product(server: &TestServer, body: Value) -> Value {
    let resp = server.post("/product/add").json(&body).await;
    resp.assert_status(StatusCode::CREATED);
    resp.json::<Value>()["response"].clone()
}

#[tokio::test]
async fn add_product_returns_201_envelope_with_defaults() {
    let server = server();

    let resp = server
        .post("/product/add")
        .json(&json!({ "id": 99, "name": "Notebook" }))
        .await;

    resp.assert_status(StatusCode::CREATED);
    let body: Value = resp.json();
    assert_eq!(body["status"], 201);
    assert_eq!(body["response"]["id"], 1);
    assert_eq!(body["response"]["name"], "Notebook");
    assert_eq!(body["response"]["description"], "");
    assert_eq!(body["response"]["price"], 0.0);
    assert_eq!(body["response"]["inStock"], false);
    assert!(body.get("error").is_none());
    assert!(body.get("count").is_none());
}

#[tokio::test]
async fn list_carries_count() {
    let server = server();
    add_product(&server, json!({ "name": "A" })).await;
    add_product(&server, json!({ "name": "B" })).await;

    let resp = server.get("/product/all").await;

    resp.assert_status(StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body["status"], 200);
    assert_eq!(body["count"], 2);
    assert_eq!(body["response"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn missing_product_is_404_with_path_and_timestamp() {
    let server = server();

    let resp = server.get("/product/9").await;

    resp.assert_status(StatusCode::NOT_FOUND);
    let body: Value = resp.json();
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], "Product with id 9 not found");
    assert_eq!(body["path"], "/product/9");
    assert!(body["timestamp"].as_str().is_some());
    assert!(body.get("response").is_none());
}

#[tokio::test]
async fn invalid_payload_is_400() {
    let server = server();

    let resp = server
        .post("/product/add")
        .json(&json!({ "name": "  ", "price": -1 }))
        .await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = resp.json();
    assert_eq!(body["status"], 400);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("Name is mandatory"));
    assert!(error.contains("Price must be greater than or equal to 0"));
    assert_eq!(body["path"], "/product/add");
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let server = server();

    let resp = server.get("/product/abc").await;

    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>()["path"], "/product/abc");
}

#[tokio::test]
async fn update_is_partial_and_unknown_id_is_404() {
    let server = server();
    add_product(
        &server,
        json!({ "name": "Lamp", "description": "desk", "price": 20.0, "inStock": true }),
    )
    .await;

    let resp = server
        .put("/product/update")
        .json(&json!({ "id": 1, "price": 25.5 }))
        .await;
    resp.assert_status(StatusCode::OK);
    let product = resp.json::<Value>()["response"].clone();
    assert_eq!(product["name"], "Lamp");
    assert_eq!(product["description"], "desk");
    assert_eq!(product["price"], 25.5);
    assert_eq!(product["inStock"], true);

    let resp = server
        .put("/product/update")
        .json(&json!({ "id": 42, "name": "Ghost" }))
        .await;
    resp.assert_status(StatusCode::NOT_FOUND);

    let resp = server
        .put("/product/update")
        .json(&json!({ "name": "No id" }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_by_path_and_by_body() {
    let server = server();
    add_product(&server, json!({ "name": "A" })).await;
    add_product(&server, json!({ "name": "B" })).await;

    let resp = server.delete("/product/delete/1").await;
    resp.assert_status(StatusCode::OK);
    assert_eq!(resp.json::<Value>(), json!({ "status": 200 }));

    let resp = server
        .delete("/product/delete")
        .json(&json!({ "id": 2 }))
        .await;
    resp.assert_status(StatusCode::OK);

    server
        .delete("/product/delete/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert_eq!(server.get("/product/all").await.json::<Value>()["count"], 0);
}

#[tokio::test]
async fn search_filters_compose_and_page() {
    let server = server();
    for (name, price, in_stock) in [
        ("Desk Lamp", 30.0, true),
        ("Floor Lamp", 80.0, true),
        ("Lamp Shade", 10.0, false),
        ("Chair", 45.0, true),
    ] {
        add_product(
            &server,
            json!({ "name": name, "price": price, "inStock": in_stock }),
        )
        .await;
    }

    let resp = server
        .get("/product/search?name=lamp&minPrice=10&maxPrice=80&inStock=true")
        .await;
    resp.assert_status(StatusCode::OK);
    let body: Value = resp.json();
    assert_eq!(body["count"], 2);
    assert!(body.get("pagination").is_none());

    let resp = server
        .get("/product/search?sort=price,desc&page=0&size=3")
        .await;
    let body: Value = resp.json();
    let prices: Vec<f64> = body["response"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["price"].as_f64().unwrap())
        .collect();
    assert_eq!(prices, vec![80.0, 45.0, 30.0]);
    assert_eq!(body["pagination"]["totalItems"], 4);
    assert_eq!(body["pagination"]["totalPages"], 2);

    server
        .get("/product/search?sort=weight")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_rejects_non_finite_price_bounds() {
    let server = server();
    add_product(&server, json!({ "name": "Desk Lamp", "price": 30.0 })).await;

    let resp = server.get("/product/search?minPrice=NaN").await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    let error = resp.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.contains("minPrice must be a finite number"));

    server
        .get("/product/search?maxPrice=inf")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sale_and_supply_flip_stock_flag() {
    let server = server();
    add_product(&server, json!({ "name": "Kettle", "inStock": true })).await;

    let resp = server
        .post("/product-sale/add")
        .json(&json!({
            "documentName": "INV-1",
            "product": { "id": 1 },
            "quantity": 1,
            "purchasePrice": 35.0
        }))
        .await;
    resp.assert_status(StatusCode::CREATED);
    let sale = resp.json::<Value>()["response"].clone();
    assert_eq!(sale["product"]["inStock"], false);
    assert_eq!(sale["documentName"], "INV-1");

    let product = server.get("/product/1").await.json::<Value>();
    assert_eq!(product["response"]["inStock"], false);

    let resp = server
        .post("/product-supply/add")
        .json(&json!({ "documentName": "W-1", "product": { "id": 1 }, "quantity": 5 }))
        .await;
    resp.assert_status(StatusCode::CREATED);
    assert_eq!(resp.json::<Value>()["response"]["product"]["inStock"], true);

    let product = server.get("/product/1").await.json::<Value>();
    assert_eq!(product["response"]["inStock"], true);

    let sales = server.get("/product-sale/all").await.json::<Value>();
    assert_eq!(sales["count"], 1);
    assert_eq!(sales["response"][0]["product"]["name"], "Kettle");
}

#[tokio::test]
async fn sale_validation_and_missing_product() {
    let server = server();

    let resp = server
        .post("/product-sale/add")
        .json(&json!({ "documentName": "INV-1", "quantity": 0 }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    let error = resp.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.contains("Product is mandatory"));
    assert!(error.contains("Quantity must be greater than 0"));

    let resp = server
        .post("/product-sale/add")
        .json(&json!({ "documentName": "INV-1", "product": { "id": 5 } }))
        .await;
    resp.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["error"], "Product with id 5 not found");
}

#[tokio::test]
async fn sale_update_and_delete() {
    let server = server();
    add_product(&server, json!({ "name": "Kettle" })).await;
    server
        .post("/product-sale/add")
        .json(&json!({ "documentName": "INV-1", "product": { "id": 1 }, "quantity": 2 }))
        .await
        .assert_status(StatusCode::CREATED);

    let resp = server
        .put("/product-sale/update")
        .json(&json!({ "id": 1, "documentName": "INV-1b" }))
        .await;
    resp.assert_status(StatusCode::OK);
    let sale = resp.json::<Value>()["response"].clone();
    assert_eq!(sale["documentName"], "INV-1b");
    assert_eq!(sale["quantity"], 2);

    server
        .put("/product-sale/update")
        .json(&json!({ "id": 7, "documentName": "x" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    server
        .delete("/product-sale/delete/1")
        .await
        .assert_status(StatusCode::OK);
    let resp = server.get("/product-sale/1").await;
    resp.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        resp.json::<Value>()["error"],
        "Product sale with id 1 not found"
    );
}

#[tokio::test]
async fn supply_update_reassigns_product_or_rejects_bad_reference() {
    let server = server();
    add_product(&server, json!({ "name": "Kettle" })).await;
    add_product(&server, json!({ "name": "Toaster" })).await;
    server
        .post("/product-supply/add")
        .json(&json!({ "documentName": "W-1", "product": { "id": 1 }, "quantity": 4 }))
        .await
        .assert_status(StatusCode::CREATED);

    let resp = server
        .put("/product-supply/update")
        .json(&json!({ "id": 1, "product": { "id": 2 } }))
        .await;
    resp.assert_status(StatusCode::OK);
    let supply = resp.json::<Value>()["response"].clone();
    assert_eq!(supply["product"]["name"], "Toaster");
    assert_eq!(supply["product"]["inStock"], false);
    assert_eq!(supply["quantity"], 4);

    let resp = server
        .put("/product-supply/update")
        .json(&json!({ "id": 1, "product": { "id": 9 } }))
        .await;
    resp.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>()["error"], "Product with id 9 not found");

    server
        .put("/product-supply/update")
        .json(&json!({ "id": 1, "product": {} }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn referenced_product_delete_is_409() {
    let server = server();
    add_product(&server, json!({ "name": "Kettle" })).await;
    server
        .post("/product-supply/add")
        .json(&json!({ "documentName": "W-1", "product": { "id": 1 } }))
        .await
        .assert_status(StatusCode::CREATED);

    let resp = server.delete("/product/delete/1").await;

    resp.assert_status(StatusCode::CONFLICT);
    assert_eq!(resp.json::<Value>()["status"], 409);
}

#[tokio::test]
async fn metrics_docs_and_fallback() {
    let server = server();
    server.get("/product/all").await;

    let metrics = server.get("/metrics").await;
    metrics.assert_status(StatusCode::OK);
    assert!(metrics.text().contains("product_query_service_requests_total"));

    let docs = server.get("/api-docs/openapi.json").await;
    docs.assert_status(StatusCode::OK);
    assert!(docs.json::<Value>()["paths"]["/product/search"].is_object());

    let resp = server.get("/nowhere").await;
    resp.assert_status(StatusCode::NOT_FOUND);
    let body: Value = resp.json();
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["path"], "/nowhere");
}
