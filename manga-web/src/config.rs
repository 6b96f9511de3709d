//! Recommendation service configuration

/// Recommendation endpoint of the local service
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/recommend/";

/// Number of recommendations requested per fetch
pub const DEFAULT_TOP_N: u32 = 6;

/// Where and how much to ask the recommendation service
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub endpoint: String,
    pub top_n: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl ApiConfig {
    /// Point at a different recommendation endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}
