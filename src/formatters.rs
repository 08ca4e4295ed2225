use serde_json::Value;

use crate::constants::{
    ALERTS_UNAVAILABLE, BLOCK_SEPARATOR, FORECAST_PERIODS, NO_ACTIVE_ALERTS, NO_FORECAST_PERIODS,
    NO_REGIONAL_ALERTS,
};
use crate::fields::{
    array_len, field, indexed, indexed_number_or, number_or, Field, NOT_AVAILABLE, UNKNOWN,
};
use crate::regions::RegionProfile;

static NULL: Value = Value::Null;

// ============================================================================
// National Weather Service
// ============================================================================

/// Formats a single NWS alert feature
pub fn format_alert(feature: &Value) -> String {
    let props = feature.get("properties").unwrap_or(&NULL);
    format!(
        "\nEvent: {}\nArea: {}\nSeverity: {}\nDescription: {}\nInstructions: {}\n",
        field(props, "event", UNKNOWN),
        field(props, "areaDesc", UNKNOWN),
        field(props, "severity", UNKNOWN),
        field(props, "description", "No description available"),
        field(props, "instruction", "No specific instructions provided"),
    )
}

/// Formats an NWS alerts document into a human-readable string
pub fn format_alerts(doc: &Value) -> String {
    let Some(features) = doc.get("features").and_then(Value::as_array) else {
        return ALERTS_UNAVAILABLE.to_string();
    };

    if features.is_empty() {
        return NO_ACTIVE_ALERTS.to_string();
    }

    features
        .iter()
        .map(format_alert)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Extracts the forecast endpoint a points document refers to
pub fn forecast_url(points: &Value) -> Option<&str> {
    points.pointer("/properties/forecast").and_then(Value::as_str)
}

/// Formats a single forecast period
pub fn format_period(period: &Value) -> String {
    format!(
        "\n{}:\nTemperature: {}\u{00b0}{}\nWind: {} {}\nForecast: {}\n",
        field(period, "name", UNKNOWN),
        field(period, "temperature", UNKNOWN),
        field(period, "temperatureUnit", UNKNOWN),
        field(period, "windSpeed", UNKNOWN),
        field(period, "windDirection", UNKNOWN),
        field(period, "detailedForecast", UNKNOWN),
    )
}

/// Formats the leading periods of an NWS forecast document
pub fn format_forecast(doc: &Value) -> String {
    let periods = doc
        .pointer("/properties/periods")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    if periods.is_empty() {
        return NO_FORECAST_PERIODS.to_string();
    }

    periods
        .iter()
        .take(FORECAST_PERIODS)
        .map(format_period)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

// ============================================================================
// Open-Meteo
// ============================================================================

/// Converts WMO weather code to human-readable description
pub fn weather_code_to_description(code: i64) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

fn describe_code(code: Field<'_>) -> &'static str {
    match code {
        Field::Present(value) => value
            .as_i64()
            .or_else(|| value.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .map_or(UNKNOWN, weather_code_to_description),
        Field::Default(_) => UNKNOWN,
    }
}

/// Formats the `current` block of an Open-Meteo document
pub fn format_current_conditions(current: &Value) -> String {
    format!(
        "\nCurrent Conditions:\nTemperature: {}\u{00b0}C\nFeels like: {}\u{00b0}C\nHumidity: {}%\nWind: {} km/h at {}\u{00b0}\nConditions: {}\nPrecipitation: {} mm\n",
        field(current, "temperature_2m", NOT_AVAILABLE),
        field(current, "apparent_temperature", NOT_AVAILABLE),
        field(current, "relative_humidity_2m", NOT_AVAILABLE),
        field(current, "wind_speed_10m", NOT_AVAILABLE),
        field(current, "wind_direction_10m", NOT_AVAILABLE),
        describe_code(field(current, "weather_code", UNKNOWN)),
        field(current, "precipitation", NOT_AVAILABLE),
    )
}

/// Formats up to `days` entries of Open-Meteo's parallel daily arrays
pub fn format_daily_forecast(daily: &Value, days: usize) -> Vec<String> {
    (0..array_len(daily, "time").min(days))
        .map(|i| {
            format!(
                "\n{}:\nHigh: {}\u{00b0}C, Low: {}\u{00b0}C\nConditions: {}\nPrecipitation: {} mm ({}% chance)\nMax wind: {} km/h\n",
                indexed(daily, "time", i, UNKNOWN),
                indexed(daily, "temperature_2m_max", i, NOT_AVAILABLE),
                indexed(daily, "temperature_2m_min", i, NOT_AVAILABLE),
                describe_code(indexed(daily, "weather_code", i, UNKNOWN)),
                indexed(daily, "precipitation_sum", i, NOT_AVAILABLE),
                indexed(daily, "precipitation_probability_max", i, NOT_AVAILABLE),
                indexed(daily, "wind_speed_10m_max", i, NOT_AVAILABLE),
            )
        })
        .collect()
}

/// Formats current conditions followed by the daily outlook
pub fn format_regional_forecast(doc: &Value, days: usize) -> String {
    let current = doc.get("current").unwrap_or(&NULL);
    let daily = doc.get("daily").unwrap_or(&NULL);

    std::iter::once(format_current_conditions(current))
        .chain(format_daily_forecast(daily, days))
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

// ============================================================================
// Derived alerts
// ============================================================================

fn exceeds(value: f64, limit: Option<f64>) -> bool {
    limit.is_some_and(|limit| value > limit)
}

/// Derives alert lines from current conditions
pub fn current_alerts(current: &Value, region: &RegionProfile) -> Vec<String> {
    let limits = &region.current;
    let wind = number_or(current, "wind_speed_10m", 0.0);
    let temp = number_or(current, "temperature_2m", 20.0);
    let mut alerts = Vec::new();

    if exceeds(wind, limits.typhoon) {
        alerts.push(format!(
            "\u{26a0}\u{fe0f} TYPHOON/SEVERE WIND WARNING: Current wind speed is {wind:.1} km/h. Extremely dangerous conditions."
        ));
    } else if wind > limits.wind_severe {
        alerts.push(format!(
            "\u{26a0}\u{fe0f} HIGH WIND WARNING: Current wind speed is {wind:.1} km/h. Strong winds may cause disruption."
        ));
    } else if wind > limits.wind_warning {
        alerts.push(format!(
            "\u{26a0}\u{fe0f} WIND WARNING: Current wind speed is {wind:.1} km/h. Strong winds may cause disruption."
        ));
    } else if wind > limits.wind_advisory {
        alerts.push(format!(
            "\u{26a0}\u{fe0f} WIND ADVISORY: Current wind speed is {wind:.1} km/h. Be aware of gusty conditions."
        ));
    }

    if exceeds(temp, limits.extreme_heat) {
        alerts.push(format!(
            "\u{1f321}\u{fe0f} EXTREME HEAT WARNING: Current temperature is {temp:.1}\u{00b0}C. Risk of heat stroke. Stay indoors with air conditioning."
        ));
    } else if temp > limits.heat_advisory {
        alerts.push(format!(
            "\u{1f321}\u{fe0f} HEAT ADVISORY: Current temperature is {temp:.1}\u{00b0}C. Stay hydrated and avoid prolonged sun exposure."
        ));
    } else if temp < limits.severe_cold {
        alerts.push(format!(
            "\u{1f976} SEVERE COLD WARNING: Current temperature is {temp:.1}\u{00b0}C. {}",
            region.current_severe_cold_advice
        ));
    } else if temp < limits.cold_warning {
        alerts.push(format!(
            "\u{1f976} COLD WEATHER WARNING: Current temperature is {temp:.1}\u{00b0}C. Risk of ice and freezing conditions."
        ));
    }

    alerts
}

/// Derives alert lines from the first `days` forecast days
pub fn forecast_alerts(daily: &Value, region: &RegionProfile, days: usize) -> Vec<String> {
    let limits = &region.forecast;
    let mut alerts = Vec::new();

    for i in 0..array_len(daily, "time").min(days) {
        let date = indexed(daily, "time", i, UNKNOWN);
        let wind = indexed_number_or(daily, "wind_speed_10m_max", i, 0.0);
        let temp_max = indexed_number_or(daily, "temperature_2m_max", i, 20.0);
        let temp_min = indexed_number_or(daily, "temperature_2m_min", i, 10.0);
        let precip = indexed_number_or(daily, "precipitation_sum", i, 0.0);

        if exceeds(wind, limits.typhoon) {
            alerts.push(format!(
                "\u{1f32a}\u{fe0f} TYPHOON WARNING for {date}: Expected wind speeds up to {wind:.1} km/h. Extremely dangerous conditions."
            ));
        } else if wind > limits.wind_severe {
            alerts.push(format!(
                "\u{1f32a}\u{fe0f} SEVERE WIND WARNING for {date}: Expected wind speeds up to {wind:.1} km/h. Significant disruption possible."
            ));
        } else if wind > limits.wind_warning {
            alerts.push(format!(
                "\u{1f4a8} WIND WARNING for {date}: Expected wind speeds up to {wind:.1} km/h."
            ));
        }

        if exceeds(temp_max, limits.extreme_heat) {
            alerts.push(format!(
                "\u{1f525} EXTREME HEAT WARNING for {date}: Expected maximum temperature {temp_max:.1}\u{00b0}C. Dangerous heat conditions."
            ));
        } else if temp_max > limits.heat_warning {
            alerts.push(format!(
                "\u{1f525} HEAT WARNING for {date}: Expected maximum temperature {temp_max:.1}\u{00b0}C. Very hot conditions."
            ));
        } else if temp_min < limits.severe_cold {
            alerts.push(format!(
                "\u{2744}\u{fe0f} SEVERE COLD WARNING for {date}: Expected minimum temperature {temp_min:.1}\u{00b0}C. {}",
                region.forecast_severe_cold_advice
            ));
        } else if temp_min < limits.cold_warning {
            alerts.push(format!(
                "\u{2744}\u{fe0f} COLD WARNING for {date}: Expected minimum temperature {temp_min:.1}\u{00b0}C. Risk of frost and icy conditions."
            ));
        }

        if exceeds(precip, limits.heavy_rain) {
            alerts.push(format!(
                "\u{1f327}\u{fe0f} HEAVY RAIN WARNING for {date}: Expected precipitation {precip:.1} mm. Risk of flooding and landslides."
            ));
        } else if precip > limits.rain_warning {
            alerts.push(format!(
                "\u{1f327}\u{fe0f} RAIN WARNING for {date}: Expected precipitation {precip:.1} mm. Possible flooding."
            ));
        } else if precip > limits.rain_advisory {
            alerts.push(format!(
                "\u{1f326}\u{fe0f} RAIN ADVISORY for {date}: Expected precipitation {precip:.1} mm."
            ));
        }
    }

    alerts
}

/// Combines current and forecast alerts, or reports that there are none
pub fn format_regional_alerts(doc: &Value, region: &RegionProfile, days: usize) -> String {
    let current = doc.get("current").unwrap_or(&NULL);
    let daily = doc.get("daily").unwrap_or(&NULL);

    let mut alerts = current_alerts(current, region);
    alerts.extend(forecast_alerts(daily, region, days));

    if alerts.is_empty() {
        return NO_REGIONAL_ALERTS.to_string();
    }
    alerts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::{JAPAN, UK};
    use serde_json::json;

    #[test]
    fn test_format_alert_all_fields() {
        let feature = json!({
            "properties": {
                "event": "Test Event",
                "areaDesc": "Test Area",
                "severity": "Severe",
                "description": "Test description",
                "instruction": "Test instruction"
            }
        });

        let result = format_alert(&feature);
        assert!(result.contains("Event: Test Event"));
        assert!(result.contains("Area: Test Area"));
        assert!(result.contains("Severity: Severe"));
        assert!(result.contains("Description: Test description"));
        assert!(result.contains("Instructions: Test instruction"));
    }

    #[test]
    fn test_format_alert_missing_fields() {
        let result = format_alert(&json!({"properties": {}}));
        assert!(result.contains("Event: Unknown"));
        assert!(result.contains("Severity: Unknown"));
        assert!(result.contains("No description available"));
        assert!(result.contains("No specific instructions provided"));

        // No properties object at all
        let result = format_alert(&json!({}));
        assert!(result.contains("Area: Unknown"));
    }

    #[test]
    fn test_format_alerts_shapes() {
        assert_eq!(format_alerts(&json!({})), ALERTS_UNAVAILABLE);
        assert_eq!(format_alerts(&json!({"features": []})), NO_ACTIVE_ALERTS);

        let doc = json!({"features": [
            {"properties": {"event": "Flood Watch"}},
            {"properties": {"event": "Wind Advisory"}}
        ]});
        let result = format_alerts(&doc);
        assert_eq!(result.matches(BLOCK_SEPARATOR).count(), 1);
        assert!(result.find("Flood Watch") < result.find("Wind Advisory"));
    }

    #[test]
    fn test_forecast_url() {
        let points = json!({"properties": {"forecast": "https://example.test/forecast"}});
        assert_eq!(forecast_url(&points), Some("https://example.test/forecast"));
        assert_eq!(forecast_url(&json!({"properties": {}})), None);
        assert_eq!(forecast_url(&json!({"properties": {"forecast": 3}})), None);
    }

    #[test]
    fn test_format_period() {
        let period = json!({
            "name": "Today",
            "temperature": 75,
            "temperatureUnit": "F",
            "windSpeed": "10 mph",
            "windDirection": "NW",
            "detailedForecast": "Partly cloudy with a high of 75."
        });
        let result = format_period(&period);
        assert!(result.contains("Today:"));
        assert!(result.contains("Temperature: 75\u{00b0}F"));
        assert!(result.contains("Wind: 10 mph NW"));
        assert!(result.contains("Forecast: Partly cloudy with a high of 75."));
    }

    #[test]
    fn test_format_forecast_without_periods() {
        assert_eq!(format_forecast(&json!({"properties": {}})), NO_FORECAST_PERIODS);
        assert_eq!(
            format_forecast(&json!({"properties": {"periods": []}})),
            NO_FORECAST_PERIODS
        );
    }

    #[test]
    fn test_weather_code_to_description() {
        assert_eq!(weather_code_to_description(0), "Clear sky");
        assert_eq!(weather_code_to_description(61), "Slight rain");
        assert_eq!(weather_code_to_description(99), "Thunderstorm with heavy hail");
        assert_eq!(weather_code_to_description(42), "Unknown");
    }

    #[test]
    fn test_describe_code_accepts_integral_values_only() {
        assert_eq!(describe_code(Field::Present(&json!(3))), "Overcast");
        assert_eq!(describe_code(Field::Present(&json!(3.0))), "Overcast");
        assert_eq!(describe_code(Field::Present(&json!(3.7))), "Unknown");
        assert_eq!(describe_code(Field::Present(&json!("3"))), "Unknown");
        assert_eq!(describe_code(Field::Default(UNKNOWN)), "Unknown");
    }

    #[test]
    fn test_current_conditions_defaults() {
        let result = format_current_conditions(&NULL);
        assert!(result.contains("Temperature: N/A\u{00b0}C"));
        assert!(result.contains("Conditions: Unknown"));
        assert!(result.contains("Precipitation: N/A mm"));
    }

    #[test]
    fn test_daily_forecast_missing_column() {
        let daily = json!({
            "time": ["2025-07-11", "2025-07-12"],
            "temperature_2m_max": [25.5]
        });
        let blocks = format_daily_forecast(&daily, 5);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("High: 25.5\u{00b0}C"));
        assert!(blocks[1].contains("High: N/A\u{00b0}C"));
        assert!(blocks[1].contains("Max wind: N/A km/h"));
    }

    #[test]
    fn test_current_alerts_uk() {
        let calm = json!({"temperature_2m": 20.0, "wind_speed_10m": 15.0});
        assert!(current_alerts(&calm, &UK).is_empty());

        let gusty = json!({"temperature_2m": -2.0, "wind_speed_10m": 35.0});
        let alerts = current_alerts(&gusty, &UK);
        assert_eq!(alerts.len(), 2);
        assert!(alerts[0].contains("WIND ADVISORY"));
        assert!(alerts[0].contains("35.0 km/h"));
        assert!(alerts[1].contains("COLD WEATHER WARNING"));
        assert!(alerts[1].contains("-2.0\u{00b0}C"));

        let stormy = json!({"temperature_2m": 35.0, "wind_speed_10m": 65.0});
        let alerts = current_alerts(&stormy, &UK);
        assert!(alerts[0].contains("HIGH WIND WARNING"));
        assert!(alerts[1].contains("HEAT ADVISORY"));
    }

    #[test]
    fn test_current_alerts_japan_specific_levels() {
        let current = json!({"temperature_2m": 36.0, "wind_speed_10m": 61.0});
        let alerts = current_alerts(&current, &JAPAN);
        assert!(alerts[0].contains("TYPHOON/SEVERE WIND WARNING"));
        assert!(alerts[1].contains("EXTREME HEAT WARNING"));

        let frozen = json!({"temperature_2m": -6.0});
        let alerts = current_alerts(&frozen, &JAPAN);
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains("frostbite"));
    }

    #[test]
    fn test_forecast_alerts_only_flag_crossing_day() {
        let daily = json!({
            "time": ["2025-07-11", "2025-07-12", "2025-07-13"],
            "temperature_2m_max": [22.0, 23.0, 21.0],
            "temperature_2m_min": [12.0, 13.0, 11.0],
            "precipitation_sum": [0.0, 1.0, 2.0],
            "wind_speed_10m_max": [20.0, 60.0, 18.0]
        });
        let alerts = forecast_alerts(&daily, &UK, 3);
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains("WIND WARNING for 2025-07-12"));
        assert!(alerts[0].contains("60.0 km/h"));
    }

    #[test]
    fn test_forecast_alerts_respects_day_limit() {
        let daily = json!({
            "time": ["d1", "d2", "d3", "d4"],
            "precipitation_sum": [0.0, 0.0, 0.0, 40.0]
        });
        assert!(forecast_alerts(&daily, &UK, 3).is_empty());
        assert_eq!(forecast_alerts(&daily, &UK, 4).len(), 1);
    }

    #[test]
    fn test_forecast_alerts_japan_rain_levels() {
        let daily = json!({
            "time": ["d1", "d2", "d3"],
            "precipitation_sum": [55.0, 31.0, 16.0]
        });
        let alerts = forecast_alerts(&daily, &JAPAN, 3);
        assert_eq!(alerts.len(), 3);
        assert!(alerts[0].starts_with("\u{1f327}\u{fe0f} HEAVY RAIN WARNING for d1"));
        assert!(alerts[1].starts_with("\u{1f327}\u{fe0f} RAIN WARNING for d2"));
        assert!(alerts[2].contains("RAIN ADVISORY for d3"));
    }

    #[test]
    fn test_regional_alerts_none() {
        let doc = json!({
            "current": {"temperature_2m": 18.0, "wind_speed_10m": 12.0},
            "daily": {
                "time": ["d1", "d2", "d3"],
                "temperature_2m_max": [21.0, 22.0, 20.0],
                "temperature_2m_min": [11.0, 12.0, 10.0],
                "precipitation_sum": [0.0, 3.0, 1.0],
                "wind_speed_10m_max": [20.0, 25.0, 18.0]
            }
        });
        assert_eq!(format_regional_alerts(&doc, &UK, 3), NO_REGIONAL_ALERTS);
        assert_eq!(format_regional_alerts(&doc, &JAPAN, 3), NO_REGIONAL_ALERTS);
    }
}
