//! Black-box tests against a live server.

use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

use common::{body_json, message, spawn_server, TestServer};

async fn create(server: &TestServer, body: Value) -> Value {
    let res = server.client.post(&server.url).json(&body).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    body_json(res).await
}

async fn list(server: &TestServer) -> Value {
    let res = server.client.get(&server.url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    body_json(res).await
}

#[tokio::test]
async fn test_chair_desk_lamp_scenario() {
    let server = spawn_server().await;

    let chair = create(&server, json!({"name": "Chair", "price": 50})).await;
    assert_eq!(chair, json!({"id": 1, "name": "Chair", "price": 50}));

    let desk = create(&server, json!({"name": "Desk", "price": 150})).await;
    assert_eq!(desk, json!({"id": 2, "name": "Desk", "price": 150}));

    let res = server.client.delete(server.item(1)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    assert_eq!(list(&server).await, json!([{"id": 2, "name": "Desk", "price": 150}]));

    let lamp = create(&server, json!({"name": "Lamp", "price": 20})).await;
    assert_eq!(lamp, json!({"id": 3, "name": "Lamp", "price": 20}));
}

#[tokio::test]
async fn test_ids_increase_by_one_across_deletes() {
    let server = spawn_server().await;

    let mut ids = Vec::new();
    for i in 0..6 {
        let created = create(&server, json!({"name": format!("p{i}"), "price": i})).await;
        let id = created["id"].as_i64().unwrap();
        ids.push(id);
        if i % 2 == 0 {
            let res = server.client.delete(server.item(id)).send().await.unwrap();
            assert_eq!(res.status(), StatusCode::NO_CONTENT);
        }
    }

    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(list(&server).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_invalid_create_leaves_store_untouched() {
    let server = spawn_server().await;

    for body in [
        json!({}),
        json!({"price": 10}),
        json!({"name": "", "price": 10}),
        json!({"name": "A"}),
        json!({"name": "A", "price": -1}),
        json!({"name": "A", "price": null}),
    ] {
        let res = server.client.post(&server.url).json(&body).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(
            message(res).await,
            "Invalid data. 'name' (string) and 'price' (number >= 0) are required."
        );
    }

    assert_eq!(list(&server).await, json!([]));
    let first = create(&server, json!({"name": "A", "price": 0})).await;
    assert_eq!(first["id"], 1);
}

#[tokio::test]
async fn test_list_returns_creation_order() {
    let server = spawn_server().await;
    assert_eq!(list(&server).await, json!([]));

    for name in ["c", "a", "b"] {
        create(&server, json!({"name": name, "price": 1.5})).await;
    }

    assert_eq!(
        list(&server).await,
        json!([
            {"id": 1, "name": "c", "price": 1.5},
            {"id": 2, "name": "a", "price": 1.5},
            {"id": 3, "name": "b", "price": 1.5},
        ])
    );
    assert_eq!(server.store.lock().len(), 3);
}

#[tokio::test]
async fn test_get_by_id() {
    let server = spawn_server().await;
    let created = create(&server, json!({"name": "Chair", "price": 50})).await;

    let res = server.client.get(server.item(1)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, created);

    let res = server.client.get(server.item(99)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(message(res).await, "Product not found");

    server.client.delete(server.item(1)).send().await.unwrap();
    let res = server.client.get(server.item(1)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected_on_every_item_route() {
    let server = spawn_server().await;
    let url = server.item("abc");
    let body = json!({"name": "A", "price": 1});

    let responses = vec![
        server.client.get(&url).send().await.unwrap(),
        server.client.put(&url).json(&body).send().await.unwrap(),
        server.client.patch(&url).json(&body).send().await.unwrap(),
        server.client.delete(&url).send().await.unwrap(),
    ];

    for res in responses {
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(message(res).await, "Invalid ID. It must be a number.");
    }
}

#[tokio::test]
async fn test_id_with_trailing_text_uses_leading_number() {
    let server = spawn_server().await;
    let created = create(&server, json!({"name": "A", "price": 1})).await;

    let res = server.client.get(server.item("1abc")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, created);
}

#[tokio::test]
async fn test_out_of_range_id_is_not_found() {
    let server = spawn_server().await;
    create(&server, json!({"name": "A", "price": 1})).await;

    for id in ["99999999999999999999", "-99999999999999999999"] {
        let res = server.client.get(server.item(id)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "id: {id}");
        assert_eq!(message(res).await, "Product not found");
    }
}

#[tokio::test]
async fn test_hex_prefixed_id_is_read_as_hex() {
    let server = spawn_server().await;
    let created = create(&server, json!({"name": "A", "price": 1})).await;

    let res = server.client.get(server.item("0x1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, created);

    let res = server.client.get(server.item("0x")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_put_replaces_and_get_reflects_it() {
    let server = spawn_server().await;
    create(&server, json!({"name": "Chair", "price": 50})).await;

    let res = server
        .client
        .put(server.item(1))
        .json(&json!({"name": "Stool", "price": 35}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!({"id": 1, "name": "Stool", "price": 35}));

    let res = server.client.get(server.item(1)).send().await.unwrap();
    assert_eq!(body_json(res).await, json!({"id": 1, "name": "Stool", "price": 35}));
}

#[tokio::test]
async fn test_put_validation_and_lookup_order() {
    let server = spawn_server().await;
    create(&server, json!({"name": "Chair", "price": 50})).await;

    let res = server
        .client
        .put(server.item(1))
        .json(&json!({"name": "Stool"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(message(res).await, "Invalid data. 'name' and 'price' are required.");

    // Lookup runs before body validation.
    let res = server
        .client
        .put(server.item(7))
        .json(&json!({"name": "Stool"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    assert_eq!(list(&server).await, json!([{"id": 1, "name": "Chair", "price": 50}]));
}

#[tokio::test]
async fn test_patch_rules() {
    let server = spawn_server().await;
    create(&server, json!({"name": "A", "price": 10})).await;
    let url = server.item(1);

    let res = server.client.patch(&url).json(&json!({"price": 0})).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!({"id": 1, "name": "A", "price": 0}));

    let res = server.client.patch(&url).json(&json!({})).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        message(res).await,
        "Invalid data. At least 'name' or 'price' must be sent."
    );

    let res = server
        .client
        .patch(&url)
        .json(&json!({"name": "B", "price": -3}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(message(res).await, "Invalid price. It must be a number >= 0.");

    // An empty name is skipped, not applied.
    let res = server
        .client
        .patch(&url)
        .json(&json!({"name": "", "price": 4}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!({"id": 1, "name": "A", "price": 4}));

    let res = server.client.patch(&url).json(&json!({"name": "Z"})).send().await.unwrap();
    assert_eq!(body_json(res).await, json!({"id": 1, "name": "Z", "price": 4}));
}

#[tokio::test]
async fn test_delete_returns_empty_204() {
    let server = spawn_server().await;
    create(&server, json!({"name": "A", "price": 1})).await;

    let res = server.client.delete(server.item(1)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.bytes().await.unwrap().is_empty());

    let res = server.client.delete(server.item(1)).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let next = create(&server, json!({"name": "B", "price": 1})).await;
    assert_eq!(next["id"], 2);
}
