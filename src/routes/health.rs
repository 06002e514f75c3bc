//! # 헬스체크 및 데이터 리셋 핸들러
//!
//! ## 엔드포인트
//! - `GET  /api/v1/health` → `{ "status": "ok" }` — 서버 가동 확인
//! - `POST /api/v1/reset`  → 전체 데이터 초기화 후 시드 재생성
//!
//! 헬스체크는 로드밸런서/컨테이너 오케스트레이터의 상태 확인용입니다.

use crate::{db, error::AppError, routes::entries::AppState};
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// `GET /health` — 서버 상태를 확인합니다.
///
/// Extractor 없이 작동하는 가장 단순한 형태의 핸들러입니다.
/// `Result`를 사용하지 않으므로 이 핸들러는 실패하지 않습니다.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

/// `POST /reset` — 사용자가 직접 누르는 "데이터 초기화".
///
/// 스키마 버전 불일치 때와 정확히 같은 경로(db::reset_data)를 탑니다:
/// 모든 문서를 지우고 14일 시드 기록 + 기본 미션/프로필을 다시 씁니다.
pub async fn reset_data(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    db::reset_data(&state.pool).await?;
    Ok(Json(json!({ "status": "reset" })))
}
