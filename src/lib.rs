//! Weather tools for the Model Context Protocol.
//!
//! Exposes US National Weather Service alerts and forecasts, plus Open-Meteo
//! forecasts and threshold-derived alerts for the UK and Japan. Every tool
//! answers with plain text, including when upstream data is unavailable.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod fields;
pub mod formatters;
pub mod models;
pub mod regions;
pub mod service;

pub use config::WeatherConfig;
pub use error::{FetchError, FetchResult};
pub use models::{CoordinatesRequest, GetAlertsRequest};
pub use service::Weather;
