//! Shared helpers for the HTTP-level integration tests

#![allow(dead_code)]

use axum_test::TestServer;
use grubdash::prelude::*;
use serde_json::{Value, json};

/// Build a test server over the given store
pub fn make_server(store: &EntityStore) -> TestServer {
    let app = ServerBuilder::new()
        .register(DishDescriptor::new(store.dishes.clone()))
        .register(OrderDescriptor::new(store.orders.clone()))
        .build();

    TestServer::try_new(app).expect("Failed to create test server")
}

/// Build a test server over an empty store
pub fn empty_server() -> (TestServer, EntityStore) {
    let store = EntityStore::new();
    (make_server(&store), store)
}

pub fn pasta() -> Value {
    json!({
        "name": "Pasta",
        "description": "Tasty",
        "price": 12,
        "image_url": "http://x"
    })
}

pub fn order(status: &str) -> Value {
    json!({
        "deliverTo": "A",
        "mobileNumber": "555",
        "status": status,
        "dishes": [{
            "id": "d1",
            "name": "Pasta",
            "description": "Tasty",
            "image_url": "http://x",
            "price": 12,
            "quantity": 1
        }]
    })
}

/// POST `{ data }` to `path` and return the created record's id
pub async fn create(server: &TestServer, path: &str, data: Value) -> String {
    let response = server.post(path).json(&json!({ "data": data })).await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body: Value = response.json();
    body["data"]["id"]
        .as_str()
        .expect("created record has an id")
        .to_string()
}
