//! Route definitions for the AgriGuru API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/weather", weather_routes())
        .nest("/soil", soil_routes())
        .merge(advice_routes())
}

/// Chat panel and the advice widgets beside it
fn advice_routes() -> Router<AppState> {
    Router::new()
        .route("/advice", post(handlers::get_advice))
        .route("/advice/weather", post(handlers::get_weather_advice))
        .route("/advice/market", get(handlers::get_market_insights))
        .route("/advice/calendar", get(handlers::get_seasonal_calendar))
}

/// Weather widget routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(handlers::get_current_weather))
        .route("/tomorrow", get(handlers::get_tomorrow_forecast))
        .route("/week", get(handlers::get_week_forecast))
        .route("/dashboard", get(handlers::get_weather_dashboard))
}

/// Soil widget routes
fn soil_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_soil_report))
        .route("/analyze", post(handlers::analyze_soil))
        .route("/texture", get(handlers::get_soil_texture))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{create_app, AppState, Config};

    fn app() -> axum::Router {
        create_app(AppState::from_config(Config::for_tests()).unwrap())
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_root_and_health() {
        let response = app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let (status, body) = send(get("/api/v1/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["upstreams"]["advisor"], "offline");
        assert_eq!(body["upstreams"]["weather"], "configured");
    }

    #[tokio::test]
    async fn test_soil_texture() {
        let (status, body) = send(get("/api/v1/soil/texture?sand=90&clay=5&silt=5")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["texture"], "Sand");
        assert_eq!(body["complete"], true);
    }

    #[tokio::test]
    async fn test_soil_texture_out_of_range() {
        let (status, body) = send(get("/api/v1/soil/texture?sand=120&clay=5&silt=5")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["field"], "sand");
    }

    #[tokio::test]
    async fn test_soil_analyze() {
        let (status, body) = send(post_json(
            "/api/v1/soil/analyze",
            serde_json::json!({
                "ph": 5.0, "nitrogen": 10.0, "organic_carbon": 0.5,
                "sand": 30.0, "clay": 30.0, "silt": 40.0
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["assessment"]["overall"], "Needs Improvement");
        assert_eq!(body["texture"], "Clay Loam");
        assert_eq!(body["assessment"]["recommendations"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_soil_report_falls_back_to_sample() {
        let (status, body) = send(get("/api/v1/soil?lat=19.076&lon=72.8777")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["is_sample_data"], true);
        assert_eq!(body["source"], "fallback");
        assert_eq!(body["location"]["latitude"], 19.076);
    }

    #[tokio::test]
    async fn test_weather_invalid_location() {
        let (status, body) = send(get("/api/v1/weather/week?lat=100&lon=0")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "location");
    }

    #[tokio::test]
    async fn test_weather_provider_down() {
        let (status, body) = send(get("/api/v1/weather/tomorrow")).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "EXTERNAL_SERVICE_ERROR");
    }

    #[tokio::test]
    async fn test_advice_offline() {
        let (status, body) = send(post_json(
            "/api/v1/advice",
            serde_json::json!({ "query": "Which fertilizer for my field?" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert_eq!(body["source"], "fallback");
        assert!(body["advice"]
            .as_str()
            .unwrap()
            .contains("General Fertilizer Guidelines"));
    }

    #[tokio::test]
    async fn test_advice_empty_query() {
        let (status, body) = send(post_json("/api/v1/advice", serde_json::json!({ "query": "" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "query");
    }

    #[tokio::test]
    async fn test_advice_question_too_long() {
        let query = "a".repeat(shared::MAX_QUESTION_LENGTH + 1);
        let (status, body) = send(post_json("/api/v1/advice", serde_json::json!({ "query": query }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["field"], "query");

        let query = "a".repeat(shared::MAX_QUESTION_LENGTH);
        let (status, _) = send(post_json("/api/v1/advice", serde_json::json!({ "query": query }))).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_advice_widgets_offline() {
        let (status, body) = send(post_json(
            "/api/v1/advice/weather",
            serde_json::json!({ "crop": "rice" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert_eq!(body["source"], "fallback");

        let (status, body) = send(get("/api/v1/advice/market?crop=wheat&location=punjab")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["advice"].as_str().unwrap().contains("market insights"));

        let (status, body) = send(get("/api/v1/advice/calendar?season=rabi")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["advice"].as_str().unwrap().contains("seasonal calendar"));
    }

    #[tokio::test]
    async fn test_advice_calendar_unknown_season() {
        let (status, _) = send(get("/api/v1/advice/calendar?season=spring")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
