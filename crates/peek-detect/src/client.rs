use crate::{DetectConfig, DetectError, DetectionResponse, FrameRequest};
use std::future::Future;

/// Anything that turns an encoded frame into detections.
pub trait Detector: Send + Sync + 'static {
    /// Submit one frame, given as a JPEG data URI.
    fn detect(
        &self,
        frame: String,
    ) -> impl Future<Output = Result<DetectionResponse, DetectError>> + Send;
}

/// Parse a `/process_frame` response body.
///
/// Entries of `bounding_boxes` are strongly typed: a box with a missing or
/// mistyped field fails the whole response rather than drawing garbage.
pub fn parse_response(body: &str) -> Result<DetectionResponse, DetectError> {
    Ok(serde_json::from_str(body)?)
}

/// Detector backed by the HTTP endpoint.
///
/// `ureq` is blocking, so each call runs on tokio's blocking pool. The
/// agent is shared and keeps connections alive between calls.
#[derive(Clone)]
pub struct HttpDetector {
    agent: ureq::Agent,
    config: DetectConfig,
    endpoint: String,
}

impl std::fmt::Debug for HttpDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDetector")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.config.timeout())
            .finish()
    }
}

impl HttpDetector {
    pub fn new(config: DetectConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Self {
            agent: builder.build(),
            endpoint: config.endpoint(),
            config,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `GET /` on the service, returning the raw status message.
    pub async fn probe(&self) -> Result<String, DetectError> {
        let agent = self.agent.clone();
        let url = self.config.root();
        tokio::task::spawn_blocking(move || -> Result<String, DetectError> {
            Ok(agent.get(&url).call()?.into_string()?)
        })
        .await?
    }

    fn blocking_detect(
        agent: &ureq::Agent,
        url: &str,
        frame: &str,
    ) -> Result<DetectionResponse, DetectError> {
        let body = serde_json::to_string(&FrameRequest { frame })?;
        let response = agent
            .post(url)
            .set("Content-Type", "application/json")
            .send_string(&body)?;
        parse_response(&response.into_string()?)
    }
}

impl Detector for HttpDetector {
    async fn detect(&self, frame: String) -> Result<DetectionResponse, DetectError> {
        let agent = self.agent.clone();
        let url = self.endpoint.clone();
        tokio::task::spawn_blocking(move || Self::blocking_detect(&agent, &url, &frame)).await?
    }
}
