//! On-disk format and restart behavior.

use foodhub_core::UsersDocument;
use foodhub_integration_tests::TestContext;
use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_startup_creates_empty_documents() {
    let ctx = TestContext::new().await;

    for (file, key) in [
        ("data.json", "users"),
        ("owner-data.json", "owners"),
        ("food-data.json", "foodItems"),
    ] {
        let raw = std::fs::read_to_string(ctx.data_dir().join(file)).unwrap();
        let doc: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(doc, json!({ key: [] }), "{file}");
    }
}

#[tokio::test]
async fn test_records_survive_restart() {
    let ctx = TestContext::new().await;
    ctx.post_json(
        "/api/register",
        &json!({"email": "asha@example.com", "password": "pw"}),
    )
    .await;

    let data_dir = ctx.stop().await;
    let ctx = TestContext::start(data_dir).await;

    let resp = ctx
        .post_json(
            "/api/login",
            &json!({"email": "asha@example.com", "password": "pw"}),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_files_are_pretty_printed_camel_case() {
    let ctx = TestContext::new().await;
    ctx.post_json(
        "/api/owners/add-item",
        &json!({"email": "v@example.com", "foodName": "Idli", "actualPrice": 40, "discountPrice": 35, "category": "restaurant"}),
    )
    .await;

    let raw = std::fs::read_to_string(ctx.data_dir().join("food-data.json")).unwrap();
    assert!(raw.starts_with("{\n  \"foodItems\": [\n"));
    assert!(raw.contains("\"discountPrice\": 35"));
}

#[tokio::test]
async fn test_legacy_file_without_profile_fields_loads() {
    let ctx = TestContext::new().await;
    std::fs::write(
        ctx.data_dir().join("data.json"),
        r#"{"users": [{"email": "old@example.com", "password": "pw"}]}"#,
    )
    .unwrap();

    let users: UsersDocument = ctx.users().await;
    assert_eq!(users.users[0].name, "");

    let resp = ctx
        .post_json(
            "/api/login",
            &json!({"email": "old@example.com", "password": "pw"}),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_legacy_owner_records_do_not_break_the_file() {
    let ctx = TestContext::new().await;
    std::fs::write(
        ctx.data_dir().join("owner-data.json"),
        json!({"owners": [
            {"email": "bread@example.com", "password": 1234, "category": "bakery"},
            {"name": "Spice", "email": "spice@example.com", "password": "pw",
             "category": "restaurant", "items": [{"foodName": "Dal"}], "orders": []}
        ]})
        .to_string(),
    )
    .unwrap();

    let resp = ctx
        .post_json(
            "/api/owners/login",
            &json!({"email": "spice@example.com", "password": "pw", "category": "restaurant"}),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ctx
        .post_json(
            "/api/place-order",
            &json!({"cart": [{"foodName": "Dal", "price": 90}], "clientEmail": "asha@example.com"}),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ctx.get("/api/owners/orders/spice@example.com").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let orders: Value = resp.json().await.unwrap();
    assert_eq!(orders[0]["price"], 90);

    let owners = ctx.owners().await;
    assert_eq!(owners.owners[0].category, "bakery");
    assert_eq!(owners.owners[0].name, "");
}

#[tokio::test]
async fn test_legacy_prices_keep_their_json_type() {
    let ctx = TestContext::new().await;
    let legacy = json!([
        {"email": "v@example.com", "foodName": "Chai", "actualPrice": "Rs. 20",
         "discountPrice": 15, "category": "restaurant"},
        {"email": "v@example.com", "foodName": "Rice", "actualPrice": 60.5,
         "discountPrice": "55", "category": "grocery"}
    ]);
    std::fs::write(
        ctx.data_dir().join("food-data.json"),
        json!({"foodItems": legacy}).to_string(),
    )
    .unwrap();

    let resp = ctx.get("/api/food-items").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ctx
        .post_json(
            "/api/owners/add-item",
            &json!({"email": "v@example.com", "foodName": "Soap", "actualPrice": 30, "discountPrice": "25", "category": "supermarket"}),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let raw = std::fs::read_to_string(ctx.data_dir().join("food-data.json")).unwrap();
    let saved: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(saved["foodItems"][0], legacy[0]);
    assert_eq!(saved["foodItems"][1], legacy[1]);
    assert_eq!(saved["foodItems"][2]["actualPrice"], 30);
    assert_eq!(saved["foodItems"][2]["discountPrice"], "25");
}

#[tokio::test]
async fn test_corrupt_file_is_a_server_error() {
    let ctx = TestContext::new().await;
    std::fs::write(ctx.data_dir().join("owner-data.json"), "{ nope").unwrap();

    let resp = ctx.get("/api/owners/orders/v@example.com").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Internal server error");

    assert_eq!(
        ctx.get("/health/ready").await.status(),
        StatusCode::SERVICE_UNAVAILABLE
    );
}
