//! # 인사이트 라우트 핸들러
//!
//! 규칙 기반 코치/예측 인사이트와 로컬 LLM 심층 분석을 처리합니다.
//!
//! ## 엔드포인트
//! - `GET  /api/v1/insights`      → 규칙 기반 코치 + 예측 인사이트 (항상 성공)
//! - `POST /api/v1/insights/deep` → LLM 심층 분석 (LLM이 없으면 폴백 문구)
//!
//! LLM 경로도 HTTP 에러를 반환하지 않습니다 — 실패는 services::ai 안에서
//! 폴백 문구로 흡수되므로 이 핸들러들은 저장소 오류 외에는 실패하지 않습니다.

use crate::{
    db,
    error::AppError,
    models::*,
    routes::entries::AppState,
    services::{ai, coach, predictor, weekly_plan},
};
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// `GET /insights` — 기록 전체를 분석한 인사이트 묶음을 반환합니다.
///
/// 반환값: `{ "coach": {...}, "prediction": {...}, "plan": {...} }`
/// 셋 다 결정적 규칙 기반이라 네트워크 상태와 무관하게 항상 응답합니다.
/// 대시보드가 한 번의 요청으로 코치 카드/예측 카드/주간 플랜을 모두 그립니다.
pub async fn get_insights(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let entries = db::list_entries(&state.pool).await?;

    Ok(Json(json!({
        "coach": coach::generate_coach_insight(&entries),
        "prediction": predictor::generate_predictive_insight(&entries),
        "plan": weekly_plan::generate_weekly_plan(&entries),
    })))
}

/// `POST /insights/deep` — 로컬 LLM으로 심층 웰니스 분석 문구를 생성합니다.
///
/// LM Studio가 꺼져 있거나 8초 안에 응답하지 못하면
/// 고정 리포트로 대체됩니다 (클라이언트는 차이를 알 수 없습니다).
pub async fn deep_insight(
    State(state): State<AppState>,
    Json(req): Json<DeepInsightRequest>,
) -> Json<Value> {
    let text = ai::deep_wellness_insight(
        &state.http,
        &state.llm_api_url,
        &state.llm_model,
        &req.correlation_type,
    )
    .await;

    Json(json!({ "text": text }))
}
