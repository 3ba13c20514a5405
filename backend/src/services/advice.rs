//! Advice service for the chat panel
//!
//! Forwards a question to the expert advice API once. Any failure is
//! answered with offline guidance instead of an error.

use serde::Serialize;
use shared::{
    advice::{extract_crop_and_season, fallback_advice},
    AdviceResponse, Crop, DataSource, Season,
};

use crate::error::{AppError, AppResult};
use crate::external::advisor::{AdvisorClient, ExpertAdviceRequest, WeatherAdviceRequest};

#[derive(Clone)]
pub struct AdviceService {
    client: AdvisorClient,
}

/// A farmer's question with optional context
#[derive(Debug, Clone, Default)]
pub struct AdviceInput {
    pub query: String,
    pub crop: Option<Crop>,
    pub season: Option<Season>,
    pub location: Option<String>,
}

/// Weather, market or calendar guidance from the advice server
#[derive(Debug, Clone, Serialize)]
pub struct InsightResponse {
    pub success: bool,
    pub advice: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    pub source: DataSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InsightResponse {
    fn live(advice: String, data: Option<serde_json::Value>) -> Self {
        Self {
            success: true,
            advice,
            data,
            source: DataSource::Live,
            error: None,
        }
    }

    fn unavailable(what: &str, error: AppError) -> Self {
        tracing::warn!("{} unavailable: {}", what, error);
        Self {
            success: false,
            advice: format!("Sorry, I couldn't get {}. Error: {}", what, error),
            data: None,
            source: DataSource::Fallback,
            error: Some(error.to_string()),
        }
    }
}

impl AdviceService {
    pub fn new(client: AdvisorClient) -> Self {
        Self { client }
    }

    pub async fn ask(&self, input: AdviceInput) -> AppResult<AdviceResponse> {
        shared::validate_question(&input.query).map_err(|msg| AppError::Validation {
            field: "query".to_string(),
            message: msg.to_string(),
        })?;

        let (query_crop, query_season) = extract_crop_and_season(&input.query);
        let crop = input.crop.or(query_crop);
        let season = input.season.or(query_season);

        let request = ExpertAdviceRequest {
            query: &input.query,
            crop,
            season,
            location: input.location.as_deref(),
        };

        let response = match self.client.get_expert_advice(&request).await {
            Ok(expert) => AdviceResponse {
                success: true,
                advice: expert.advice,
                crop,
                season,
                source: DataSource::Live,
                error: None,
            },
            Err(e) => {
                tracing::warn!("Expert advice unavailable, answering offline: {}", e);
                AdviceResponse {
                    success: false,
                    advice: fallback_advice(&input.query, crop),
                    crop,
                    season,
                    source: DataSource::Fallback,
                    error: Some(e.to_string()),
                }
            }
        };

        Ok(response)
    }

    pub async fn weather_advice(&self, location: &str, crop: Option<Crop>) -> InsightResponse {
        let request = WeatherAdviceRequest { location, crop };
        match self.client.get_weather_advice(&request).await {
            Ok(r) => InsightResponse::live(r.advice, r.weather_data),
            Err(e) => InsightResponse::unavailable("weather advice", e),
        }
    }

    pub async fn market_insights(&self, crop: Crop, location: &str) -> InsightResponse {
        match self.client.get_market_insights(crop, location).await {
            Ok(r) => InsightResponse::live(r.market_advice, r.market_data),
            Err(e) => InsightResponse::unavailable("market insights", e),
        }
    }

    pub async fn seasonal_calendar(&self, season: Season, location: &str) -> InsightResponse {
        match self.client.get_seasonal_calendar(season, location).await {
            Ok(r) => InsightResponse::live(r.seasonal_advice, None),
            Err(e) => InsightResponse::unavailable("seasonal calendar", e),
        }
    }

    pub async fn is_available(&self) -> bool {
        self.client.is_available().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_service() -> AdviceService {
        AdviceService::new(AdvisorClient::new("http://127.0.0.1:9/api".into(), 2).unwrap())
    }

    #[tokio::test]
    async fn test_offline_answer_uses_query_keywords() {
        let response = offline_service()
            .ask(AdviceInput {
                query: "When should I transplant paddy this monsoon?".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(!response.success);
        assert_eq!(response.source, DataSource::Fallback);
        assert_eq!(response.crop, Some(Crop::Rice));
        assert_eq!(response.season, Some(Season::Kharif));
        assert!(response.advice.contains("Rice Cultivation Tips"));
        assert!(response.error.is_some());
    }

    #[tokio::test]
    async fn test_caller_crop_takes_priority() {
        let response = offline_service()
            .ask(AdviceInput {
                query: "how much water does it need".to_string(),
                crop: Some(Crop::Wheat),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(response.crop, Some(Crop::Wheat));
        assert!(response.advice.contains("Wheat Cultivation Tips"));
    }

    #[tokio::test]
    async fn test_blank_question_rejected() {
        let result = offline_service()
            .ask(AdviceInput {
                query: "   ".to_string(),
                ..Default::default()
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Validation { ref field, .. }) if field == "query"
        ));
    }

    #[tokio::test]
    async fn test_insights_offline() {
        let service = offline_service();

        let weather = service.weather_advice("Delhi", Some(Crop::Rice)).await;
        assert!(!weather.success);
        assert_eq!(weather.source, DataSource::Fallback);
        assert!(weather.advice.starts_with("Sorry, I couldn't get weather advice."));
        assert!(weather.data.is_none());

        let market = service.market_insights(Crop::Wheat, "india").await;
        assert!(market.advice.starts_with("Sorry, I couldn't get market insights."));

        let calendar = service.seasonal_calendar(Season::Kharif, "india").await;
        assert!(calendar.error.is_some());
        assert!(calendar.advice.contains("seasonal calendar"));
    }
}
