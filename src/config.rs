use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use url::Url;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";
pub const PUSHOVER_API_URL: &str = "https://api.pushover.net/1/messages.json";

/// Markup conventions of the built-in primary target.
pub const ADD_TO_BAG_SELECTOR: &str = "button.AddToBagButton__AddToBag";
pub const ADD_TO_BAG_DISABLED_CLASS: &str = "pal-c-Button--disabled";
/// Markup conventions of the built-in secondary target.
pub const PRODUCT_ACTIONS_SELECTOR: &str = "button.ProductActions__AddToBag";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub scraper: ScraperConfig,
    pub scheduler: SchedulerConfig,
    pub notifications: NotificationsConfig,
    /// Checked in declaration order; the first one in stock wins the pass.
    #[serde(default)]
    pub targets: Vec<TargetConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Seconds, applied to page fetches and notification posts alike.
    pub request_timeout: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Seconds between the end of one poll pass and the start of the next.
    pub check_interval: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    pub pushover: PushoverConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushoverConfig {
    pub api_url: String,
    #[serde(default)]
    pub user_key: String,
    #[serde(default)]
    pub api_token: String,
    pub priority: i8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetConfig {
    pub name: String,
    #[serde(default)]
    pub url: String,
    pub predicate: PredicateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PredicateConfig {
    /// In stock when the button exists and carries no disabled marker.
    ButtonState {
        selector: String,
        disabled_class: String,
    },
    /// In stock when the button exists at all.
    ButtonPresence { selector: String },
}

impl PredicateConfig {
    pub fn selector(&self) -> &str {
        match self {
            PredicateConfig::ButtonState { selector, .. } => selector.as_str(),
            PredicateConfig::ButtonPresence { selector } => selector.as_str(),
        }
    }
}

impl TargetConfig {
    /// The two stores watched out of the box, primary first. The secondary
    /// store is only watched once `SECONDARY_PRODUCT_URL` is set.
    pub fn builtin(primary_url: Option<String>, secondary_url: Option<String>) -> Vec<Self> {
        let mut targets = vec![TargetConfig {
            name: "Ulta".to_string(),
            url: primary_url.unwrap_or_default(),
            predicate: PredicateConfig::ButtonState {
                selector: ADD_TO_BAG_SELECTOR.to_string(),
                disabled_class: ADD_TO_BAG_DISABLED_CLASS.to_string(),
            },
        }];

        if let Some(url) = secondary_url {
            targets.push(TargetConfig {
                name: "Secondary".to_string(),
                url,
                predicate: PredicateConfig::ButtonPresence {
                    selector: PRODUCT_ACTIONS_SELECTOR.to_string(),
                },
            });
        }

        targets
    }
}

impl AppConfig {
    /// Builder seeded with every default, before any file or environment source.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 10000)?
            .set_default("scraper.request_timeout", 10)?
            .set_default("scraper.user_agent", DEFAULT_USER_AGENT)?
            .set_default("scheduler.check_interval", 15 * 60)?
            .set_default("notifications.pushover.api_url", PUSHOVER_API_URL)?
            .set_default("notifications.pushover.priority", 1)
    }

    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let builder = match config_path {
            Some(path) => Self::defaults()?.add_source(File::from(path)),
            None => Self::defaults()?
                .add_source(File::with_name("config/default").required(false))
                // Add local config (ignored by git)
                .add_source(File::with_name("config/local").required(false)),
        };

        let settings = builder
            // Add environment variables with prefix "WATCHER", e.g. WATCHER__SERVER__PORT
            .add_source(Environment::with_prefix("WATCHER").separator("__"))
            .set_override_option(
                "notifications.pushover.user_key",
                env::var("PUSHOVER_USER_KEY").ok(),
            )?
            .set_override_option(
                "notifications.pushover.api_token",
                env::var("PUSHOVER_API_TOKEN").ok(),
            )?
            .build()?;

        Self::from_settings(settings)
    }

    pub fn from_settings(settings: Config) -> Result<Self, ConfigError> {
        let mut config: AppConfig = settings.try_deserialize()?;

        if config.targets.is_empty() {
            config.targets = TargetConfig::builtin(
                env::var("PRODUCT_URL").ok(),
                env::var("SECONDARY_PRODUCT_URL").ok(),
            );
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port must be greater than 0".into()));
        }

        if self.scraper.request_timeout == 0 {
            return Err(ConfigError::Message("Scraper request_timeout must be greater than 0".into()));
        }

        if self.scheduler.check_interval == 0 {
            return Err(ConfigError::Message("Scheduler check_interval must be greater than 0".into()));
        }

        if !(-2..=2).contains(&self.notifications.pushover.priority) {
            return Err(ConfigError::Message("Pushover priority must be between -2 and 2".into()));
        }

        if Url::parse(&self.notifications.pushover.api_url).is_err() {
            return Err(ConfigError::Message("Invalid Pushover api_url format".into()));
        }

        for target in &self.targets {
            if target.name.trim().is_empty() {
                return Err(ConfigError::Message("Target name must not be empty".into()));
            }

            let selector = target.predicate.selector();
            if Selector::parse(selector).is_err() {
                return Err(ConfigError::Message(format!(
                    "Invalid selector '{}' for target {}",
                    selector, target.name
                )));
            }
        }

        Ok(())
    }

    /// Settings that are empty but needed for a useful run. These are
    /// reported, never rejected: an empty URL simply produces failed fetches.
    pub fn missing_settings(&self) -> Vec<String> {
        let mut missing = Vec::new();

        for target in &self.targets {
            if target.url.trim().is_empty() || Url::parse(&target.url).is_err() {
                missing.push(format!("url for target {}", target.name));
            }
        }

        if self.notifications.pushover.user_key.is_empty() {
            missing.push("PUSHOVER_USER_KEY".to_string());
        }

        if self.notifications.pushover.api_token.is_empty() {
            missing.push("PUSHOVER_API_TOKEN".to_string());
        }

        missing
    }
}
