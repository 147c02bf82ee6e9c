use serde::{Deserialize, Serialize};

pub const STATUS_MESSAGE: &str = "Restock watcher is running.";

/// Static body of the keep-alive endpoint. It reports the process as
/// healthy no matter what the poller last saw.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub message: String,
    pub status: String,
}

impl Default for StatusResponse {
    fn default() -> Self {
        Self {
            message: STATUS_MESSAGE.to_string(),
            status: "ok".to_string(),
        }
    }
}
