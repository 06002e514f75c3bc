//! # 미션 라우트 핸들러
//!
//! 주간 미션 상태의 조회/종료와 미션 카탈로그를 처리합니다.
//!
//! ## 엔드포인트
//! - `GET    /api/v1/mission`          → 현재 미션 상태 (윈도우 검사 포함)
//! - `DELETE /api/v1/mission`          → 미션 종료 후 기본 미션으로 교체
//! - `GET    /api/v1/missions/catalog` → 선택 가능한 미션 카탈로그

use crate::{db, error::AppError, models::*, routes::entries::AppState, services::mission};
use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

/// `GET /mission` — 현재 미션 상태를 조회합니다.
///
/// 조회 시점에도 주간 윈도우를 검사합니다 — 지난주에 완료한 미션이
/// 새 주의 대시보드에 "완료"로 남아 있으면 안 되기 때문입니다.
/// 리셋이 일어났으면 저장까지 마친 뒤 반환합니다.
pub async fn get_mission(State(state): State<AppState>) -> Result<Json<MissionState>, AppError> {
    let current = db::get_mission(&state.pool).await?;
    let advanced = mission::advance_window(current.clone(), Utc::now().timestamp_millis());

    if advanced.week_start_timestamp != current.week_start_timestamp {
        db::save_mission(&state.pool, &advanced).await?;
    }

    Ok(Json(advanced))
}

/// `DELETE /mission` — 미션을 종료하고 기본 미션으로 되돌립니다.
///
/// 진행 중이던 상태는 통째로 버려집니다 (누적 통계 포함 — "미션 나가기"는
/// 전체 교체이지 리셋이 아닙니다).
pub async fn exit_mission(State(state): State<AppState>) -> Result<Json<MissionState>, AppError> {
    let fresh = mission::default_mission(Utc::now().timestamp_millis());
    db::save_mission(&state.pool, &fresh).await?;
    Ok(Json(fresh))
}

/// `GET /missions/catalog` — 선택 가능한 미션 카탈로그를 반환합니다.
///
/// 정적 목록이므로 DB를 거치지 않습니다.
pub async fn mission_catalog() -> Json<Value> {
    Json(json!({ "missions": mission::catalog() }))
}
