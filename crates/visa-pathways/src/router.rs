use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AppError;
use crate::scoring::{ApplicantProfile, Program};
use crate::service::PathwayService;

/// Router exposing scoring, what-if and draw endpoints.
pub fn pathway_router(service: Arc<PathwayService>) -> Router {
    Router::new()
        .route("/api/v1/score", post(score_handler))
        .route("/api/v1/what-if", post(what_if_handler))
        .route("/api/v1/draws/analysis", get(draw_analysis_handler))
        .route("/api/v1/draws/prediction", get(draw_prediction_handler))
        .route("/api/v1/draws/comparison", post(draw_comparison_handler))
        .route("/api/v1/draws/alerts", post(draw_alerts_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub profile: ApplicantProfile,
    pub program: Program,
}

#[derive(Debug, Deserialize)]
pub struct WhatIfRequest {
    pub profile: ApplicantProfile,
    pub program: Program,
    #[serde(default)]
    pub target_score: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DrawQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct DrawScoreRequest {
    pub user_score: u32,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

pub(crate) async fn score_handler(
    State(service): State<Arc<PathwayService>>,
    Json(request): Json<ScoreRequest>,
) -> Response {
    match service.score(&request.profile, request.program) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn what_if_handler(
    State(service): State<Arc<PathwayService>>,
    Json(request): Json<WhatIfRequest>,
) -> Response {
    match service.what_if(&request.profile, request.program, request.target_score) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn draw_analysis_handler(
    State(service): State<Arc<PathwayService>>,
    Query(query): Query<DrawQuery>,
) -> Response {
    let analysis = service.draw_analysis(query.category.as_deref());
    (StatusCode::OK, Json(analysis)).into_response()
}

pub(crate) async fn draw_prediction_handler(
    State(service): State<Arc<PathwayService>>,
    Query(query): Query<DrawQuery>,
) -> Response {
    let prediction = service.draw_prediction(query.category.as_deref(), query.today);
    (StatusCode::OK, Json(prediction)).into_response()
}

pub(crate) async fn draw_comparison_handler(
    State(service): State<Arc<PathwayService>>,
    Json(request): Json<DrawScoreRequest>,
) -> Response {
    let comparison = service.draw_comparison(request.user_score, request.category.as_deref());
    (StatusCode::OK, Json(comparison)).into_response()
}

pub(crate) async fn draw_alerts_handler(
    State(service): State<Arc<PathwayService>>,
    Json(request): Json<DrawScoreRequest>,
) -> Response {
    let alerts = service.draw_alerts(
        request.user_score,
        request.category.as_deref(),
        request.today,
    );
    (StatusCode::OK, Json(alerts)).into_response()
}
