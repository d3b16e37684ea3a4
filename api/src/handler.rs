use axum::{response::IntoResponse, Json};
use chrono::Local;

use crate::advisor::advise;
use crate::error::{AppJson, Result};
use crate::schema::{AnalysisRequest, AnalysisResponse, HealthStatus};

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::default())
}

pub async fn analyze(AppJson(payload): AppJson<AnalysisRequest>) -> Result<impl IntoResponse> {
    // history is accepted but not used by the rule table yet
    let advice = advise(payload.current_occupancy, Local::now().date_naive());

    tracing::debug!(
        occupancy = payload.current_occupancy,
        history = payload.history.len(),
        forecast = ?advice.demand_forecast,
        recommendations = advice.recommendations.len(),
        "analysis complete"
    );

    Ok(Json(AnalysisResponse {
        demand_forecast: advice.demand_forecast,
        predicted_high_demand_dates: advice.predicted_high_demand_dates,
        recommendations: advice.recommendations,
        analysis_timestamp: Local::now().naive_local(),
    }))
}
