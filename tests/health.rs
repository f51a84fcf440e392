use beauty_products_api::routes::{WELCOME_MESSAGE, health::health_check, welcome_message};

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.0.status, "ok");
}

#[tokio::test]
async fn welcome_message_greets() {
    let response = welcome_message().await;
    assert_eq!(response.0, WELCOME_MESSAGE);
}
