//! Client for the AgriGuru expert advice API

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use shared::{Crop, Season};

use crate::error::{AppError, AppResult};

/// Expert advice API client
#[derive(Clone)]
pub struct AdvisorClient {
    client: Client,
    base_url: String,
}

/// Body sent to `POST {base}/expert-advice`
#[derive(Debug, Serialize)]
pub struct ExpertAdviceRequest<'a> {
    pub query: &'a str,
    pub crop: Option<Crop>,
    pub season: Option<Season>,
    pub location: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub struct ExpertAdviceResponse {
    pub advice: String,
}

/// Body sent to `POST {base}/weather-advice`
#[derive(Debug, Serialize)]
pub struct WeatherAdviceRequest<'a> {
    pub location: &'a str,
    pub crop: Option<Crop>,
}

#[derive(Debug, Deserialize)]
pub struct WeatherAdviceResponse {
    pub advice: String,
    #[serde(default)]
    pub weather_data: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct MarketInsightsResponse {
    pub market_advice: String,
    #[serde(default)]
    pub market_data: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct SeasonalCalendarResponse {
    pub seasonal_advice: String,
}

impl AdvisorClient {
    pub fn new(base_url: String, timeout_secs: u64) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("advisor HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Ask the expert service a question
    pub async fn get_expert_advice(
        &self,
        request: &ExpertAdviceRequest<'_>,
    ) -> AppResult<ExpertAdviceResponse> {
        let url = format!("{}/expert-advice", self.base_url);
        tracing::info!("Requesting expert advice from {}", url);
        self.send(self.client.post(&url).json(request), "advice").await
    }

    /// Farming advice for the weather at a location
    pub async fn get_weather_advice(
        &self,
        request: &WeatherAdviceRequest<'_>,
    ) -> AppResult<WeatherAdviceResponse> {
        let url = format!("{}/weather-advice", self.base_url);
        tracing::info!("Requesting weather advice for {}", request.location);
        self.send(self.client.post(&url).json(request), "weather advice")
            .await
    }

    /// Price trends and selling advice for a crop
    pub async fn get_market_insights(
        &self,
        crop: Crop,
        location: &str,
    ) -> AppResult<MarketInsightsResponse> {
        let url = format!("{}/market-insights", self.base_url);
        tracing::info!("Requesting market insights for {} in {}", crop.code(), location);
        let request = self
            .client
            .get(&url)
            .query(&[("crop", crop.code()), ("location", location)]);
        self.send(request, "market insights").await
    }

    /// Sowing and harvest calendar for a season
    pub async fn get_seasonal_calendar(
        &self,
        season: Season,
        location: &str,
    ) -> AppResult<SeasonalCalendarResponse> {
        let url = format!("{}/seasonal-calendar", self.base_url);
        tracing::info!("Requesting {} calendar for {}", season.code(), location);
        let request = self
            .client
            .get(&url)
            .query(&[("season", season.code()), ("location", location)]);
        self.send(request, "seasonal calendar").await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder, what: &str) -> AppResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("{} request failed: {}", what, e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "Backend responded with status: {}",
                response.status()
            )));
        }

        response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse {} response: {}", what, e))
        })
    }

    /// Whether the advice server answers on its root URL
    pub async fn is_available(&self) -> bool {
        let root = self
            .base_url
            .strip_suffix("/api")
            .unwrap_or(&self.base_url);

        match self.client.get(format!("{}/", root)).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("Advice server status check failed: {}", e);
                false
            }
        }
    }
}
