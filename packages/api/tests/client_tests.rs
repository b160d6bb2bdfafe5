use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use api::{ApiClient, Error, Period, SubscribeOutcome};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::with_base_url(server.uri())
}

#[tokio::test]
async fn check_auth_attaches_bearer_token_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/protected"))
        .and(header("Authorization", "Bearer tok-abc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"username": "alice", "role": "admin"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    api::token::set("tok-abc");
    let identity = client_for(&server).check_auth().await.unwrap();
    api::token::clear();

    assert_eq!(identity.username, "alice");
    assert!(identity.is_admin());
}

#[tokio::test]
async fn check_auth_works_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/protected"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Not authenticated"})))
        .mount(&server)
        .await;

    api::token::clear();
    let err = client_for(&server).check_auth().await.unwrap_err();
    assert!(err.is_unauthenticated());
}

#[tokio::test]
async fn bearer_required_methods_fail_fast_without_network() {
    let server = MockServer::start().await;
    // No mocks mounted: any request reaching the server would 404 the mock
    // set and fail the strict expectation below.
    Mock::given(method("GET"))
        .and(path("/api/subscriptions"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    api::token::clear();
    let err = client_for(&server).list_subscriptions(1, 6).await.unwrap_err();
    assert!(err.is_unauthenticated());

    let err = client_for(&server).subscribe(42).await.unwrap_err();
    assert!(err.is_unauthenticated());
}

#[tokio::test]
async fn login_returns_token_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"username": "alice", "password": "hunter2"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "tok-abc", "token_type": "bearer"})),
        )
        .mount(&server)
        .await;

    let tokens = client_for(&server).login("alice", "hunter2").await.unwrap();
    assert_eq!(tokens.access_token, "tok-abc");
}

#[tokio::test]
async fn login_failure_carries_backend_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"detail": "Incorrect username or password"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).login("alice", "wrong").await.unwrap_err();
    assert_eq!(err.user_message("Login failed"), "Incorrect username or password");
}

#[tokio::test]
async fn product_by_url_posts_url_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/products/by_url"))
        .and(body_json(json!({"url": "http://example.com/x"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "url": "http://example.com/x",
            "name": "Widget",
            "currency": "EUR",
            "current_price": 19.99,
            "price_difference": 0.0,
            "deviation_string": "Price is stable",
            "predicted_price": 18.5,
            "change_index": -0.3
        })))
        .mount(&server)
        .await;

    let product = client_for(&server).product_by_url("http://example.com/x").await.unwrap();
    assert_eq!(product.id, 42);
    assert_eq!(product.predicted_price, Some(18.5));
}

#[tokio::test]
async fn product_by_id_maps_404_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Product not found"})))
        .mount(&server)
        .await;

    let err = client_for(&server).product_by_id(999).await.unwrap_err();
    assert!(matches!(err, Error::NotFound));
}

#[tokio::test]
async fn price_history_sends_period_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/42/price_history"))
        .and(query_param("period", "7d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"date": "2025-08-01T00:00:00", "price": 10.0},
            {"date": "2025-08-02T00:00:00", "price": 11.5}
        ])))
        .mount(&server)
        .await;

    let history = client_for(&server).price_history(42, Period::Week).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].price, 11.5);
}

#[tokio::test]
async fn subscribe_duplicate_is_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/subscriptions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "Already subscribed"})))
        .mount(&server)
        .await;

    api::token::set("tok-abc");
    let outcome = client_for(&server).subscribe(42).await.unwrap();
    api::token::clear();

    assert_eq!(outcome, SubscribeOutcome::AlreadySubscribed);
}

#[tokio::test]
async fn subscribe_other_400_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/subscriptions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "Product does not exist"})))
        .mount(&server)
        .await;

    api::token::set("tok-abc");
    let err = client_for(&server).subscribe(42).await.unwrap_err();
    api::token::clear();

    assert_eq!(err.user_message("Subscription failed"), "Product does not exist");
}

#[tokio::test]
async fn subscribe_expired_token_is_unauthenticated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/subscriptions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid or expired token"})))
        .mount(&server)
        .await;

    api::token::set("tok-stale");
    let err = client_for(&server).subscribe(42).await.unwrap_err();
    api::token::clear();

    assert!(err.is_unauthenticated());
}

#[tokio::test]
async fn unsubscribe_sends_product_id_query() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/subscriptions"))
        .and(query_param("product_id", "42"))
        .and(header("Authorization", "Bearer tok-abc"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    api::token::set("tok-abc");
    let result = client_for(&server).unsubscribe(42).await;
    api::token::clear();

    assert!(result.is_ok());
}

#[tokio::test]
async fn check_subscribed_parses_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/subscriptions/check"))
        .and(query_param("product_id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"subscribed": true})))
        .mount(&server)
        .await;

    api::token::set("tok-abc");
    let subscribed = client_for(&server).check_subscribed(42).await.unwrap();
    api::token::clear();

    assert!(subscribed);
}

#[tokio::test]
async fn list_subscriptions_sends_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/subscriptions"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": 7,
                "url": "http://example.com/y",
                "name": "Gadget",
                "currency": "EUR",
                "current_price": 99.0,
                "price_difference": 4.5,
                "deviation_string": "Price has risen"
            }],
            "total": 13,
            "page": 2,
            "per_page": 6
        })))
        .mount(&server)
        .await;

    api::token::set("tok-abc");
    let page = client_for(&server).list_subscriptions(2, 6).await.unwrap();
    api::token::clear();

    assert_eq!(page.total, 13);
    assert_eq!(page.items[0].id, 7);
}

#[tokio::test]
async fn admin_config_flow() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/marketplace-configurations/example-shop"))
        .and(header("Authorization", "Bearer tok-admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "example-shop",
            "fields": [],
            "marketplace_url": ["https://example-shop.test"]
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/marketplace-configurations/example-shop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/marketplace-configurations/example-shop"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    api::token::set("tok-admin");
    let client = client_for(&server);
    let raw = client.get_config("example-shop").await.unwrap();
    assert_eq!(raw["name"], "example-shop");
    client.update_config("example-shop", &raw).await.unwrap();
    client.delete_config("example-shop").await.unwrap();
    api::token::clear();
}

#[tokio::test]
async fn delete_config_maps_404_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/marketplace-configurations/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"detail": "Configuration with name 'missing' not found"})),
        )
        .mount(&server)
        .await;

    api::token::set("tok-admin");
    let err = client_for(&server).delete_config("missing").await.unwrap_err();
    api::token::clear();

    assert!(matches!(err, Error::NotFound));
}

#[tokio::test]
async fn list_configs_forbidden_for_non_admin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/marketplace-configurations"))
        .respond_with(ResponseTemplate::new(403).set_body_json(
            json!({"detail": "Only administrators can access marketplace configurations"}),
        ))
        .mount(&server)
        .await;

    api::token::set("tok-user");
    let err = client_for(&server).list_configs().await.unwrap_err();
    api::token::clear();

    assert!(err.is_unauthenticated());
}

#[tokio::test]
async fn marketplace_short_list_is_public() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/marketplace-configs/short"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "example-shop", "marketplace_url": "https://example-shop.test"},
            {"name": "other-shop", "marketplace_url": null}
        ])))
        .mount(&server)
        .await;

    api::token::clear();
    let list = client_for(&server).marketplace_short_list().await.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].marketplace_url, None);
}
