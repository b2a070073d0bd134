use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_PATH: &str = "/process_frame";

/// Where and how to reach the detection endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectConfig {
    base_url: String,
    path: String,
    timeout: Option<Duration>,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            path: DEFAULT_PATH.to_string(),
            timeout: None,
        }
    }
}

impl DetectConfig {
    /// Set scheme, host and port, e.g. `http://10.0.0.5:8000`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Request timeout. Without one the transport's default applies.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Full URL of the frame processing route.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }

    /// URL of the service root, answered with a status message.
    pub fn root(&self) -> String {
        format!("{}/", self.base_url)
    }
}
