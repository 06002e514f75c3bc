//! # 이동(Travel) 라우트 핸들러
//!
//! 경로 탐색 프록시와 거리 기반 교통수단 추천을 처리합니다.
//!
//! ## 엔드포인트
//! - `POST /api/v1/route`        → 경로 탐색 (업스트림 실패 시 직선 폴백)
//! - `POST /api/v1/route/advice` → 교통수단 추천 (LLM 실패 시 폴백 문구)

use crate::{
    error::AppError,
    models::*,
    routes::entries::AppState,
    services::{ai, routing},
};
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// `POST /route` — 좌표 목록으로 경로를 탐색합니다.
///
/// 요청 본문은 업스트림 형식 그대로: `{ "coordinates": [[경도,위도], [경도,위도]] }`
/// 좌표가 2개 미만이면 400을 반환합니다 — 폴백조차 만들 수 없는 유일한 경우입니다.
/// 그 외의 모든 실패는 직선 경로 GeoJSON으로 대체되어 200으로 응답합니다.
pub async fn plan_route(
    State(state): State<AppState>,
    Json(req): Json<RouteRequest>,
) -> Result<Json<Value>, AppError> {
    if req.coordinates.len() < 2 {
        return Err(AppError::BadRequest("Missing coordinates".to_string()));
    }

    let route = routing::fetch_route(
        &state.http,
        &state.routing_api_url,
        state.routing_api_key.as_deref(),
        &req,
    )
    .await;

    Ok(Json(route))
}

/// `POST /route/advice` — 이동 거리에 맞는 저탄소 교통수단 추천 문구를 생성합니다.
pub async fn transport_advice(
    State(state): State<AppState>,
    Json(req): Json<RouteAdviceRequest>,
) -> Json<Value> {
    let advice = ai::route_advice(
        &state.http,
        &state.llm_api_url,
        &state.llm_model,
        req.distance_km,
    )
    .await;

    Json(json!({ "advice": advice }))
}
