// Shared helpers for the integration suite. Product pages and the Pushover
// API are both served by wiremock instances.

pub mod poller_tests;

use restock_watcher::config::{
    AppConfig, NotificationsConfig, PredicateConfig, PushoverConfig, SchedulerConfig, ScraperConfig,
    ServerConfig, TargetConfig, ADD_TO_BAG_DISABLED_CLASS, ADD_TO_BAG_SELECTOR, DEFAULT_USER_AGENT,
    PRODUCT_ACTIONS_SELECTOR,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PRIMARY_PATH: &str = "/ulta/lip-oil";
pub const SECONDARY_PATH: &str = "/secondary/lip-oil";
pub const PUSHOVER_PATH: &str = "/1/messages.json";

pub const ENABLED_BUTTON: &str =
    r#"<html><body><button class="AddToBagButton__AddToBag">Add</button></body></html>"#;
pub const DISABLED_BUTTON: &str =
    r#"<html><body><button class="AddToBagButton__AddToBag" disabled>Add</button></body></html>"#;
pub const SECONDARY_BUTTON: &str =
    r#"<html><body><button class="ProductActions__AddToBag">Add to bag</button></body></html>"#;
pub const NO_BUTTON: &str = r#"<html><body><p>Sold out</p></body></html>"#;

pub fn create_test_config(pages: &MockServer, pushover: &MockServer) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 10000,
        },
        scraper: ScraperConfig {
            request_timeout: 1,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        },
        scheduler: SchedulerConfig { check_interval: 1 },
        notifications: NotificationsConfig {
            pushover: PushoverConfig {
                api_url: format!("{}{}", pushover.uri(), PUSHOVER_PATH),
                user_key: "test-user-key".to_string(),
                api_token: "test-api-token".to_string(),
                priority: 1,
            },
        },
        targets: vec![
            TargetConfig {
                name: "Ulta".to_string(),
                url: format!("{}{}", pages.uri(), PRIMARY_PATH),
                predicate: PredicateConfig::ButtonState {
                    selector: ADD_TO_BAG_SELECTOR.to_string(),
                    disabled_class: ADD_TO_BAG_DISABLED_CLASS.to_string(),
                },
            },
            TargetConfig {
                name: "Secondary".to_string(),
                url: format!("{}{}", pages.uri(), SECONDARY_PATH),
                predicate: PredicateConfig::ButtonPresence {
                    selector: PRODUCT_ACTIONS_SELECTOR.to_string(),
                },
            },
        ],
    }
}

pub async fn mount_page(server: &MockServer, page_path: &str, template: ResponseTemplate, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(template)
        .expect(expected_calls)
        .mount(server)
        .await;
}

pub fn pushover_accepted() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "status": 1,
        "request": "647d2300-702c-4b38-8b2f-d56326ae460b"
    }))
}
