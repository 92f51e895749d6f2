use crate::config::Config;
use crate::models::{
    error::AppError,
    gdp::{DataPoint, Dataset, SourceInfo},
};
use serde::Deserialize;

// API CONFIGURATION
/// Configuration for the GDP data client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    data_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Returns the URL the series is fetched from.
    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    data_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom data URL (primarily for testing).
    pub fn data_url(mut self, url: impl Into<String>) -> Self {
        self.data_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            data_url: self
                .data_url
                .unwrap_or_else(|| Config::DATA_URL.to_string()),
        }
    }
}

// API RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct ApiResponse {
    data: Vec<ApiPoint>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    source_name: Option<String>,
    #[serde(default)]
    from_date: Option<String>,
    #[serde(default)]
    to_date: Option<String>,
}

/// Wire form of an observation: `[dateString, number]`. Either slot may hold any
/// JSON value; malformed entries are carried through rather than rejected.
#[derive(Deserialize, Debug)]
struct ApiPoint(serde_json::Value, serde_json::Value);

impl From<ApiPoint> for DataPoint {
    fn from(p: ApiPoint) -> Self {
        let date = match p.0 {
            serde_json::Value::String(date) => date,
            other => other.to_string(),
        };

        Self {
            date,
            gdp: p.1.as_f64().unwrap_or(f64::NAN),
        }
    }
}

impl From<ApiResponse> for Dataset {
    fn from(r: ApiResponse) -> Self {
        let source = SourceInfo {
            name: r.name,
            source_name: r.source_name,
            from_date: r.from_date,
            to_date: r.to_date,
        };
        Self::new(r.data.into_iter().map(Into::into).collect()).with_source(source)
    }
}

/// Parses a response body into a dataset. Only the `data` field is required.
pub fn parse_response(body: &str) -> Result<Dataset, AppError> {
    serde_json::from_str::<ApiResponse>(body)
        .map(Into::into)
        .map_err(|e| AppError::ParseError(format!("Failed to parse response: {e}")))
}

// GDP CLIENT
/// HTTP client for the GDP series.
pub struct GdpClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl GdpClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Executes the single fetch for the series. No retry, no timeout.
    pub async fn fetch_dataset(&self) -> Result<Dataset, AppError> {
        let response = self
            .http
            .get(self.config.data_url())
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            return Err(error_for_status(status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to read response body: {e}")))?;

        let dataset = parse_response(&body)?;
        gloo::console::log!(&format!("Loaded {} GDP observations", dataset.len()));
        Ok(dataset)
    }
}

/// Converts a reqwest error into an appropriate AppError.
fn classify_error(error: reqwest::Error) -> AppError {
    if error.is_request() {
        AppError::NetworkError(format!("Request error: {error}"))
    } else {
        AppError::NetworkError(format!("Network error: {error}"))
    }
}

/// Creates an error based on HTTP status code.
pub fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
    match status.as_u16() {
        404 => AppError::NetworkError(format!("Resource not found: {status}")),
        400..=499 => AppError::NetworkError(format!("Client error {status}: {body}")),
        500..=599 => AppError::NetworkError(format!("Server error {status}: {body}")),
        _ => AppError::NetworkError(format!("Unexpected status {status}: {body}")),
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the GDP series using default configuration.
pub async fn fetch_gdp() -> Result<Dataset, AppError> {
    GdpClient::new()?.fetch_dataset().await
}
