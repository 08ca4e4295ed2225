//! Regional profiles for the Open-Meteo tools.
//!
//! A profile fixes the timezone sent upstream and the thresholds used to
//! derive alerts from raw forecast numbers. All comparisons are strict.

/// Limits applied to current conditions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentThresholds {
    pub wind_advisory: f64,
    pub wind_warning: f64,
    pub wind_severe: f64,
    /// Checked before `wind_severe` when set.
    pub typhoon: Option<f64>,
    pub heat_advisory: f64,
    /// Checked before `heat_advisory` when set.
    pub extreme_heat: Option<f64>,
    pub cold_warning: f64,
    pub severe_cold: f64,
}

/// Limits applied to each forecast day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastThresholds {
    pub wind_warning: f64,
    pub wind_severe: f64,
    pub typhoon: Option<f64>,
    pub heat_warning: f64,
    pub extreme_heat: Option<f64>,
    pub cold_warning: f64,
    pub severe_cold: f64,
    pub rain_advisory: f64,
    pub rain_warning: f64,
    pub heavy_rain: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionProfile {
    /// Lowercase key, e.g. `uk`.
    pub name: &'static str,
    /// Label used in user-facing messages, e.g. `UK`.
    pub label: &'static str,
    /// IANA timezone passed to Open-Meteo.
    pub timezone: &'static str,
    pub current: CurrentThresholds,
    pub forecast: ForecastThresholds,
    pub current_severe_cold_advice: &'static str,
    pub forecast_severe_cold_advice: &'static str,
}

pub const UK: RegionProfile = RegionProfile {
    name: "uk",
    label: "UK",
    timezone: "Europe/London",
    current: CurrentThresholds {
        wind_advisory: 30.0,
        wind_warning: 50.0,
        wind_severe: 60.0,
        typhoon: None,
        heat_advisory: 30.0,
        extreme_heat: None,
        cold_warning: 0.0,
        severe_cold: -5.0,
    },
    forecast: ForecastThresholds {
        wind_warning: 40.0,
        wind_severe: 60.0,
        typhoon: None,
        heat_warning: 32.0,
        extreme_heat: None,
        cold_warning: 0.0,
        severe_cold: -5.0,
        rain_advisory: 15.0,
        rain_warning: 25.0,
        heavy_rain: None,
    },
    current_severe_cold_advice: "Risk of severe frost.",
    forecast_severe_cold_advice: "Risk of severe frost.",
};

pub const JAPAN: RegionProfile = RegionProfile {
    name: "japan",
    label: "JAPAN",
    timezone: "Asia/Tokyo",
    current: CurrentThresholds {
        wind_advisory: 25.0,
        wind_warning: 40.0,
        wind_severe: 60.0,
        typhoon: Some(60.0),
        heat_advisory: 30.0,
        extreme_heat: Some(35.0),
        cold_warning: 0.0,
        severe_cold: -5.0,
    },
    forecast: ForecastThresholds {
        wind_warning: 35.0,
        wind_severe: 50.0,
        typhoon: Some(80.0),
        heat_warning: 33.0,
        extreme_heat: Some(38.0),
        cold_warning: -3.0,
        severe_cold: -10.0,
        rain_advisory: 15.0,
        rain_warning: 30.0,
        heavy_rain: Some(50.0),
    },
    current_severe_cold_advice: "Risk of frostbite and dangerous driving conditions.",
    forecast_severe_cold_advice: "Risk of severe frost and dangerous conditions.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_ordered() {
        for region in [&UK, &JAPAN] {
            let c = region.current;
            assert!(c.wind_advisory < c.wind_warning && c.wind_warning <= c.wind_severe);
            assert!(c.severe_cold < c.cold_warning && c.cold_warning < c.heat_advisory);

            let f = region.forecast;
            assert!(f.wind_warning < f.wind_severe);
            assert!(f.severe_cold < f.cold_warning && f.cold_warning < f.heat_warning);
            assert!(f.rain_advisory < f.rain_warning);
            if let Some(heavy) = f.heavy_rain {
                assert!(heavy > f.rain_warning);
            }
        }
    }
}
