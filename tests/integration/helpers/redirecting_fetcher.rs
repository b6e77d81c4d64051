use async_trait::async_trait;
use harvestrs::config::settings::HttpSettings;
use harvestrs::engines::reqwest_engine::ReqwestEngine;
use harvestrs::engines::traits::{EngineError, FetchedPage, PageFetcher};
use std::sync::Mutex;

/// Sends requests for the target site to the local mock server,
/// everything else goes out unchanged through the real reqwest engine.
pub struct RedirectingFetcher {
    inner: ReqwestEngine,
    site: String,
    mock_base: String,
    requested: Mutex<Vec<String>>,
}

impl RedirectingFetcher {
    pub fn new(site: &str, mock_base: &str) -> Self {
        let settings = HttpSettings {
            timeout_secs: 5,
            user_agent: "harvestrs-test".to_string(),
        };
        Self {
            inner: ReqwestEngine::new(&settings).unwrap(),
            site: site.to_string(),
            mock_base: mock_base.to_string(),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    fn rewrite(&self, url: &str) -> String {
        for scheme in ["https://", "http://"] {
            let prefix = format!("{}{}", scheme, self.site);
            if let Some(rest) = url.strip_prefix(&prefix) {
                return format!("{}{}", self.mock_base, rest);
            }
        }
        url.to_string()
    }
}

#[async_trait]
impl PageFetcher for RedirectingFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, EngineError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.inner.fetch(&self.rewrite(url)).await
    }

    fn name(&self) -> &'static str {
        "redirecting"
    }
}
