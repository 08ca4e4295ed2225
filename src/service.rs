use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde_json::Value;
use std::sync::Arc;

use crate::client::{build_url, HttpFetcher};
use crate::config::WeatherConfig;
use crate::constants::{
    ALERTS_UNAVAILABLE, FORECAST_UNAVAILABLE, INVALID_COORDINATES, POINTS_UNAVAILABLE,
    REGIONAL_ALERT_DAYS, REGIONAL_FORECAST_DAYS,
};
use crate::error::FetchResult;
use crate::fields::is_empty_document;
use crate::formatters::{
    forecast_url, format_alerts, format_forecast, format_regional_alerts, format_regional_forecast,
};
use crate::models::{CoordinatesRequest, GetAlertsRequest};
use crate::regions::{RegionProfile, JAPAN, UK};

const FORECAST_CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,precipitation,weather_code,wind_speed_10m,wind_direction_10m";
const FORECAST_DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,precipitation_sum,precipitation_probability_max,wind_speed_10m_max,wind_direction_10m_dominant";
const ALERT_CURRENT_FIELDS: &str = "temperature_2m,weather_code,wind_speed_10m";
const ALERT_DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,precipitation_sum,wind_speed_10m_max";

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    fetcher: HttpFetcher,
    config: Arc<WeatherConfig>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: WeatherConfig) -> FetchResult<Self> {
        let fetcher = HttpFetcher::new(&config)?;

        Ok(Self {
            fetcher,
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        })
    }

    /// Active NWS alerts for a US state, as text
    pub async fn alerts(&self, state: &str) -> String {
        let state = state.trim().to_ascii_uppercase();
        if state.is_empty() || !state.bytes().all(|b| b.is_ascii_alphabetic()) {
            tracing::warn!(state = %state, "Rejecting malformed state code");
            return ALERTS_UNAVAILABLE.to_string();
        }

        match self.fetch_nws(&format!("alerts/active/area/{state}")).await {
            Ok(doc) => format_alerts(&doc),
            Err(_) => ALERTS_UNAVAILABLE.to_string(),
        }
    }

    /// NWS forecast for a coordinate, resolved through the points endpoint
    pub async fn forecast(&self, coords: CoordinatesRequest) -> String {
        if !coords.is_valid() {
            return INVALID_COORDINATES.to_string();
        }

        let path = format!("points/{},{}", coords.latitude, coords.longitude);
        let Ok(points) = self.fetch_nws(&path).await else {
            return POINTS_UNAVAILABLE.to_string();
        };
        let Some(url) = forecast_url(&points) else {
            tracing::warn!("Points response has no forecast endpoint");
            return POINTS_UNAVAILABLE.to_string();
        };

        match self.fetcher.nws(url).await {
            Ok(forecast) if !is_empty_document(&forecast) => format_forecast(&forecast),
            _ => FORECAST_UNAVAILABLE.to_string(),
        }
    }

    /// Open-Meteo current conditions and five-day outlook for a region
    pub async fn regional_forecast(
        &self,
        coords: CoordinatesRequest,
        region: &RegionProfile,
    ) -> String {
        if !coords.is_valid() {
            return INVALID_COORDINATES.to_string();
        }

        let doc = self
            .fetch_open_meteo(
                coords,
                region,
                FORECAST_CURRENT_FIELDS,
                FORECAST_DAILY_FIELDS,
                REGIONAL_FORECAST_DAYS,
            )
            .await;

        match doc {
            Ok(doc) if !is_empty_document(&doc) => {
                format_regional_forecast(&doc, REGIONAL_FORECAST_DAYS)
            }
            _ => format!("Unable to fetch {} weather forecast.", region.label),
        }
    }

    /// Threshold alerts derived from Open-Meteo numbers for a region
    pub async fn regional_alerts(
        &self,
        coords: CoordinatesRequest,
        region: &RegionProfile,
    ) -> String {
        if !coords.is_valid() {
            return INVALID_COORDINATES.to_string();
        }

        let doc = self
            .fetch_open_meteo(
                coords,
                region,
                ALERT_CURRENT_FIELDS,
                ALERT_DAILY_FIELDS,
                REGIONAL_ALERT_DAYS,
            )
            .await;

        match doc {
            Ok(doc) if !is_empty_document(&doc) => {
                format_regional_alerts(&doc, region, REGIONAL_ALERT_DAYS)
            }
            _ => format!("Unable to fetch {} weather alerts.", region.label),
        }
    }

    async fn fetch_nws(&self, path: &str) -> FetchResult<Value> {
        let no_params: [(&str, &str); 0] = [];
        let url = build_url(&self.config.nws_base_url, path, &no_params)?;
        self.fetcher.nws(&url).await
    }

    async fn fetch_open_meteo(
        &self,
        coords: CoordinatesRequest,
        region: &RegionProfile,
        current: &str,
        daily: &str,
        days: usize,
    ) -> FetchResult<Value> {
        tracing::debug!(region = region.name, days, "Querying Open-Meteo");
        let url = self.open_meteo_url(coords, region, current, daily, days)?;
        self.fetcher.open_meteo(&url).await
    }

    fn open_meteo_url(
        &self,
        coords: CoordinatesRequest,
        region: &RegionProfile,
        current: &str,
        daily: &str,
        days: usize,
    ) -> FetchResult<String> {
        let params = [
            ("latitude", coords.latitude.to_string()),
            ("longitude", coords.longitude.to_string()),
            ("current", current.to_string()),
            ("daily", daily.to_string()),
            ("timezone", region.timezone.to_string()),
            ("forecast_days", days.to_string()),
            ("temperature_unit", "celsius".to_string()),
            ("wind_speed_unit", "kmh".to_string()),
            ("precipitation_unit", "mm".to_string()),
        ];
        build_url(&self.config.open_meteo_base_url, "forecast", &params)
    }
}

fn text_result(text: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-regional-weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Weather tools backed by the National Weather Service (US alerts and forecasts) \
                and Open-Meteo (UK and Japan forecasts, plus alerts derived from forecast thresholds)."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets active weather alerts for a US state
    #[tool(description = "Get weather alerts for a US state. Provide a two-letter state code (e.g. CA, NY).")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting alerts for state: {}", request.state);
        text_result(self.alerts(&request.state).await)
    }

    /// Gets the NWS forecast for a US location
    #[tool(description = "Get weather forecast for a US location. Provide latitude and longitude.")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<CoordinatesRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );
        text_result(self.forecast(request).await)
    }

    /// Gets the Open-Meteo forecast for a UK location
    #[tool(description = "Get weather forecast for a UK location using Open-Meteo. Provide latitude and longitude.")]
    async fn get_uk_forecast(
        &self,
        Parameters(request): Parameters<CoordinatesRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting UK forecast for {}, {}", request.latitude, request.longitude);
        text_result(self.regional_forecast(request, &UK).await)
    }

    /// Derives weather alerts for a UK location
    #[tool(description = "Get weather alerts for a UK location, derived from Open-Meteo forecast thresholds. Provide latitude and longitude.")]
    async fn get_uk_weather_alerts(
        &self,
        Parameters(request): Parameters<CoordinatesRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting UK alerts for {}, {}", request.latitude, request.longitude);
        text_result(self.regional_alerts(request, &UK).await)
    }

    /// Gets the Open-Meteo forecast for a Japan location
    #[tool(description = "Get weather forecast for a Japan location using Open-Meteo. Provide latitude and longitude.")]
    async fn get_japan_forecast(
        &self,
        Parameters(request): Parameters<CoordinatesRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting Japan forecast for {}, {}", request.latitude, request.longitude);
        text_result(self.regional_forecast(request, &JAPAN).await)
    }

    /// Derives weather alerts for a Japan location
    #[tool(description = "Get weather alerts for a Japan location, derived from Open-Meteo forecast thresholds. Provide latitude and longitude.")]
    async fn get_japan_weather_alerts(
        &self,
        Parameters(request): Parameters<CoordinatesRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting Japan alerts for {}, {}", request.latitude, request.longitude);
        text_result(self.regional_alerts(request, &JAPAN).await)
    }
}
