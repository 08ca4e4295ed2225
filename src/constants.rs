/// User agent string for HTTP requests
pub const USER_AGENT: &str = "mcp-regional-weather/0.1.0";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Open-Meteo API base URL
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Upper bound for a single upstream request, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Accept header understood by the NWS API
pub const NWS_ACCEPT: &str = "application/geo+json";

/// Accept header for Open-Meteo
pub const OPEN_METEO_ACCEPT: &str = "application/json";

/// Number of NWS forecast periods rendered by `get_forecast`
pub const FORECAST_PERIODS: usize = 5;

/// Days requested and rendered by the regional forecast tools
pub const REGIONAL_FORECAST_DAYS: usize = 5;

/// Days inspected by the regional alert tools
pub const REGIONAL_ALERT_DAYS: usize = 3;

/// Separator placed between rendered blocks
pub const BLOCK_SEPARATOR: &str = "\n---\n";

pub const ALERTS_UNAVAILABLE: &str = "Unable to fetch alerts or no alerts found.";
pub const NO_ACTIVE_ALERTS: &str = "No active alerts for this state.";
pub const POINTS_UNAVAILABLE: &str = "Unable to fetch forecast data for this location.";
pub const FORECAST_UNAVAILABLE: &str = "Unable to fetch detailed forecast.";
pub const NO_FORECAST_PERIODS: &str = "No forecast periods available for this location.";
pub const NO_REGIONAL_ALERTS: &str = "No significant weather alerts for this location. Current conditions are within normal ranges.";
pub const INVALID_COORDINATES: &str = "Invalid coordinates: latitude must be between -90 and 90 and longitude between -180 and 180.";
