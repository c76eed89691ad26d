//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::coord::{validate_points, GeoPoint};
use crate::error::Error;
use crate::format::{available_formats, FormatInfo};
use crate::mosaic::coverage::CoverageBox;
use crate::mosaic::density::DensityThresholds;
use crate::mosaic::heatmap_data;
use crate::mosaic::zoom::{optimal_zoom_level, ZoomEstimate};
use crate::report::{build_report, AnalysisReport};
use crate::server::state::AppState;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .route("/api/heatmap", post(heatmap_handler))
        .route("/api/zoom", post(zoom_handler))
        .route("/api/status", get(status_handler))
        .route("/api/formats", get(formats_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.code.as_str() {
            "INTERNAL_ERROR" => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::TooManyPoints { .. } => "TOO_MANY_POINTS",
            Error::Config(_) => "CONFIG_ERROR",
            Error::Input(_) => "INVALID_INPUT",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Analyze request body
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Points to analyze
    pub points: Vec<GeoPoint>,
    /// Overrides the configured overlap threshold
    pub overlap_threshold_degrees: Option<f64>,
    /// Overrides the configured density tiers
    pub density_thresholds: Option<DensityThresholds>,
}

/// Reject requests larger than the configured cap
async fn check_size(state: &AppState, count: usize) -> Result<(), ApiError> {
    let limit = state.max_points().await;
    if count > limit {
        warn!(count, limit, "Rejecting oversized request");
        return Err(Error::TooManyPoints { count, limit }.into());
    }
    Ok(())
}

/// Analyze points endpoint
///
/// POST /api/analyze
async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, ApiError> {
    check_size(&state, req.points.len()).await?;

    let mut config = state.analysis_config().await;
    if let Some(threshold) = req.overlap_threshold_degrees {
        if threshold < 0.0 {
            return Err(Error::Config(format!("Invalid overlap threshold: {}", threshold)).into());
        }
        config.overlap_threshold_degrees = threshold;
    }
    if let Some(thresholds) = req.density_thresholds {
        config.density_thresholds = thresholds;
    }

    // Grouping is quadratic in the worst case; keep it off the async workers
    let points = req.points;
    let report = tokio::task::spawn_blocking(move || build_report(&points, &config))
        .await
        .map_err(|e| Error::Server(format!("Analysis task failed: {}", e)))??;

    Ok(Json(report))
}

/// Heatmap request body
#[derive(Debug, Deserialize)]
pub struct HeatmapRequest {
    pub points: Vec<GeoPoint>,
}

/// Heatmap response
#[derive(Debug, Serialize, Deserialize)]
pub struct HeatmapResponse {
    /// `[lat, lng, weight]` triples
    pub points: Vec<[f64; 3]>,
}

/// Heatmap points endpoint
///
/// POST /api/heatmap
async fn heatmap_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<HeatmapRequest>,
) -> Result<Json<HeatmapResponse>, ApiError> {
    check_size(&state, req.points.len()).await?;
    validate_points(&req.points)?;

    Ok(Json(HeatmapResponse {
        points: heatmap_data(&req.points),
    }))
}

/// Zoom request body
#[derive(Debug, Deserialize)]
pub struct ZoomRequest {
    /// Coverage box from a previous analysis
    pub bounding_box: Option<CoverageBox>,
}

/// Zoom estimate endpoint
///
/// POST /api/zoom
async fn zoom_handler(Json(req): Json<ZoomRequest>) -> Json<ZoomEstimate> {
    Json(optimal_zoom_level(req.bounding_box.as_ref()))
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Largest point set accepted per request
    pub max_points: usize,
    /// Uptime in seconds
    pub uptime_secs: u64,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        max_points: state.max_points().await,
        uptime_secs: state.uptime_secs(),
    })
}

/// Formats list response
#[derive(Debug, Serialize, Deserialize)]
pub struct FormatsResponse {
    pub formats: Vec<FormatInfo>,
}

/// List available output formats
///
/// GET /api/formats
async fn formats_handler() -> Json<FormatsResponse> {
    Json(FormatsResponse {
        formats: available_formats(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn create_test_state() -> Arc<AppState> {
        Arc::new(AppState::new(Config::default()))
    }

    fn cluster_points() -> serde_json::Value {
        let points: Vec<serde_json::Value> = (0..8)
            .map(|i| {
                serde_json::json!({
                    "name": format!("IMG_{}.jpg", i),
                    "latitude": 51.5007 + (i / 4) as f64 * 0.0001,
                    "longitude": -0.1246 + (i % 4) as f64 * 0.0001
                })
            })
            .collect();
        serde_json::Value::Array(points)
    }

    async fn post_json(
        app: Router,
        uri: &str,
        body: serde_json::Value,
    ) -> axum::http::Response<Body> {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(Request::builder().uri("/api/status").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let status: StatusResponse = serde_json::from_slice(&body).unwrap();

        assert!(status.running);
        assert_eq!(status.max_points, 10_000);
    }

    #[tokio::test]
    async fn test_formats_endpoint() {
        let app = create_router(create_test_state());

        let response = app
            .oneshot(Request::builder().uri("/api/formats").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let formats: FormatsResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(formats.formats.len(), 3);
    }

    #[tokio::test]
    async fn test_analyze_endpoint() {
        let app = create_router(create_test_state());

        let response = post_json(
            app,
            "/api/analyze",
            serde_json::json!({ "points": cluster_points() }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let report: AnalysisReport = serde_json::from_slice(&body).unwrap();

        assert_eq!(report.analysis.total_images, 8);
        assert_eq!(report.analysis.overlap_groups.len(), 1);
        assert_eq!(report.zoom.zoom, 16);
    }

    #[tokio::test]
    async fn test_analyze_empty_points() {
        let app = create_router(create_test_state());

        let response = post_json(app, "/api/analyze", serde_json::json!({ "points": [] })).await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let report: AnalysisReport = serde_json::from_slice(&body).unwrap();

        assert_eq!(report.analysis.error.as_deref(), Some("No images to analyze"));
        assert_eq!(report.analysis.suitability, 0);
    }

    #[tokio::test]
    async fn test_analyze_threshold_override() {
        let app = create_router(create_test_state());

        let response = post_json(
            app,
            "/api/analyze",
            serde_json::json!({
                "points": cluster_points(),
                "overlap_threshold_degrees": 0.00005
            }),
        )
        .await;

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let report: AnalysisReport = serde_json::from_slice(&body).unwrap();

        assert_eq!(report.request.overlap_threshold_degrees, 0.00005);
        assert_eq!(report.analysis.overlap_groups.len(), 8);
    }

    #[tokio::test]
    async fn test_analyze_invalid_coordinates() {
        let app = create_router(create_test_state());

        let response = post_json(
            app,
            "/api/analyze",
            serde_json::json!({
                "points": [{ "name": "bad.jpg", "latitude": 91.0, "longitude": 0.0 }]
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(err.code, "INVALID_COORDINATES");
    }

    #[tokio::test]
    async fn test_analyze_too_many_points() {
        let mut config = Config::default();
        config.server.max_points = 4;
        let app = create_router(Arc::new(AppState::new(config)));

        let response = post_json(
            app,
            "/api/analyze",
            serde_json::json!({ "points": cluster_points() }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(err.code, "TOO_MANY_POINTS");
    }

    #[tokio::test]
    async fn test_analyze_negative_threshold() {
        let app = create_router(create_test_state());

        let response = post_json(
            app,
            "/api/analyze",
            serde_json::json!({
                "points": cluster_points(),
                "overlap_threshold_degrees": -0.1
            }),
        )
        .await;

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let err: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(err.code, "CONFIG_ERROR");
    }

    #[tokio::test]
    async fn test_heatmap_endpoint() {
        let app = create_router(create_test_state());

        let response = post_json(
            app,
            "/api/heatmap",
            serde_json::json!({ "points": cluster_points() }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let heatmap: HeatmapResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(heatmap.points.len(), 8);
        assert!(heatmap.points.iter().all(|p| p[2] == 1.0));
    }

    #[tokio::test]
    async fn test_zoom_endpoint() {
        let app = create_router(create_test_state());

        let response = post_json(
            app,
            "/api/zoom",
            serde_json::json!({
                "bounding_box": {
                    "southwest": { "lat": 0.0, "lng": 0.0 },
                    "northeast": { "lat": 0.1, "lng": 0.1 },
                    "width_km": 11.1,
                    "height_km": 11.1,
                    "area_km2": 150.0
                }
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let estimate: ZoomEstimate = serde_json::from_slice(&body).unwrap();

        assert_eq!(estimate.zoom, 12);
    }

    #[tokio::test]
    async fn test_zoom_endpoint_without_box() {
        let app = create_router(create_test_state());

        let response = post_json(app, "/api/zoom", serde_json::json!({})).await;

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let estimate: ZoomEstimate = serde_json::from_slice(&body).unwrap();

        assert_eq!(estimate, ZoomEstimate::default());
    }
}
