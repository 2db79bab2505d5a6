use std::time::Duration;

/// Dashboard runtime settings
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Base URL of the listings backend, without trailing slash
    pub base_url: String,
    /// Interval of the background statistics + listings refresh
    pub refresh_interval: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
    /// `limit` sent with a per-country query
    pub country_limit: u32,
    /// `limit` sent when free text must be scanned client-side
    pub scan_limit: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            refresh_interval: Duration::from_secs(5 * 60),
            request_timeout: Duration::from_secs(30),
            user_agent: format!("w12x-dashboard/{}", env!("CARGO_PKG_VERSION")),
            country_limit: 50,
            scan_limit: 500,
        }
    }
}

impl DashboardConfig {
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_contract() {
        let config = DashboardConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.refresh_interval, Duration::from_secs(300));
        assert_eq!(config.country_limit, 50);
        assert_eq!(config.scan_limit, 500);
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let config = DashboardConfig::default().with_base_url("http://backend:8080/");
        assert_eq!(config.endpoint("/api/statistics"), "http://backend:8080/api/statistics");
    }
}
