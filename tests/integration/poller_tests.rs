use super::*;
use restock_watcher::StockPoller;
use std::time::Duration;
use wiremock::matchers::body_string_contains;

#[tokio::test]
async fn test_primary_in_stock_notifies_and_skips_secondary() {
    let pages = MockServer::start().await;
    let pushover = MockServer::start().await;

    mount_page(&pages, PRIMARY_PATH, ResponseTemplate::new(200).set_body_string(ENABLED_BUTTON), 1).await;
    mount_page(&pages, SECONDARY_PATH, ResponseTemplate::new(200).set_body_string(SECONDARY_BUTTON), 0).await;

    Mock::given(method("POST"))
        .and(path(PUSHOVER_PATH))
        .and(body_string_contains("token=test-api-token"))
        .and(body_string_contains("user=test-user-key"))
        .and(body_string_contains("title=Ulta+Restock+Alert"))
        .and(body_string_contains("priority=1"))
        .respond_with(pushover_accepted())
        .expect(1)
        .mount(&pushover)
        .await;

    let poller = StockPoller::from_config(&create_test_config(&pages, &pushover)).unwrap();
    let summary = poller.poll_once().await;

    assert_eq!(summary.checked, 1);
    assert_eq!(summary.in_stock.as_deref(), Some("Ulta"));
    assert!(summary.notified);
}

#[tokio::test]
async fn test_notification_carries_product_url() {
    let pages = MockServer::start().await;
    let pushover = MockServer::start().await;

    mount_page(&pages, PRIMARY_PATH, ResponseTemplate::new(200).set_body_string(ENABLED_BUTTON), 1).await;

    Mock::given(method("POST"))
        .and(path(PUSHOVER_PATH))
        .and(body_string_contains("lip-oil"))
        .respond_with(pushover_accepted())
        .expect(1)
        .mount(&pushover)
        .await;

    let poller = StockPoller::from_config(&create_test_config(&pages, &pushover)).unwrap();
    assert!(poller.poll_once().await.notified);
}

#[tokio::test]
async fn test_disabled_primary_falls_through_to_secondary() {
    let pages = MockServer::start().await;
    let pushover = MockServer::start().await;

    mount_page(&pages, PRIMARY_PATH, ResponseTemplate::new(200).set_body_string(DISABLED_BUTTON), 1).await;
    mount_page(&pages, SECONDARY_PATH, ResponseTemplate::new(200).set_body_string(SECONDARY_BUTTON), 1).await;

    Mock::given(method("POST"))
        .and(path(PUSHOVER_PATH))
        .and(body_string_contains("title=Secondary+Restock+Alert"))
        .respond_with(pushover_accepted())
        .expect(1)
        .mount(&pushover)
        .await;

    let poller = StockPoller::from_config(&create_test_config(&pages, &pushover)).unwrap();
    let summary = poller.poll_once().await;

    assert_eq!(summary.checked, 2);
    assert_eq!(summary.in_stock.as_deref(), Some("Secondary"));
    assert!(summary.notified);
}

#[tokio::test]
async fn test_primary_timeout_sends_nothing_for_primary() {
    let pages = MockServer::start().await;
    let pushover = MockServer::start().await;

    mount_page(
        &pages,
        PRIMARY_PATH,
        ResponseTemplate::new(200)
            .set_body_string(ENABLED_BUTTON)
            .set_delay(Duration::from_secs(3)),
        1,
    )
    .await;
    mount_page(&pages, SECONDARY_PATH, ResponseTemplate::new(200).set_body_string(NO_BUTTON), 1).await;

    Mock::given(method("POST"))
        .respond_with(pushover_accepted())
        .expect(0)
        .mount(&pushover)
        .await;

    let poller = StockPoller::from_config(&create_test_config(&pages, &pushover)).unwrap();
    let summary = poller.poll_once().await;

    assert_eq!(summary.checked, 2);
    assert_eq!(summary.in_stock, None);
    assert!(!summary.notified);
}

#[tokio::test]
async fn test_error_status_is_treated_as_out_of_stock() {
    let pages = MockServer::start().await;
    let pushover = MockServer::start().await;

    mount_page(&pages, PRIMARY_PATH, ResponseTemplate::new(500), 1).await;
    mount_page(&pages, SECONDARY_PATH, ResponseTemplate::new(403), 1).await;

    Mock::given(method("POST"))
        .respond_with(pushover_accepted())
        .expect(0)
        .mount(&pushover)
        .await;

    let poller = StockPoller::from_config(&create_test_config(&pages, &pushover)).unwrap();
    let summary = poller.poll_once().await;

    assert_eq!(summary.in_stock, None);
}

#[tokio::test]
async fn test_rejected_notification_does_not_stop_polling() {
    let pages = MockServer::start().await;
    let pushover = MockServer::start().await;

    mount_page(&pages, PRIMARY_PATH, ResponseTemplate::new(200).set_body_string(ENABLED_BUTTON), 2).await;

    Mock::given(method("POST"))
        .and(path(PUSHOVER_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "user": "invalid",
            "errors": ["user identifier is invalid"],
            "status": 0
        })))
        .expect(2)
        .mount(&pushover)
        .await;

    let poller = StockPoller::from_config(&create_test_config(&pages, &pushover)).unwrap();

    let first = poller.poll_once().await;
    let second = poller.poll_once().await;

    assert_eq!(first.in_stock.as_deref(), Some("Ulta"));
    assert!(!first.notified);
    assert_eq!(first, second);
}
