//! # 프로필 라우트 핸들러
//!
//! 표시 전용 사용자 프로필의 조회/수정을 처리합니다.
//!
//! ## 엔드포인트
//! - `GET /api/v1/profile` → 프로필 조회
//! - `PUT /api/v1/profile` → 프로필 수정 (보낸 필드만 반영)

use crate::{db, error::AppError, models::*, routes::entries::AppState};
use axum::{extract::State, Json};

/// `GET /profile` — 사용자 프로필을 조회합니다.
pub async fn get_profile(State(state): State<AppState>) -> Result<Json<UserProfile>, AppError> {
    let profile = db::get_profile(&state.pool).await?;
    Ok(Json(profile))
}

/// `PUT /profile` — 프로필을 수정합니다.
///
/// 요청에 포함된 필드만 갱신하고 나머지는 기존 값을 유지합니다.
/// 예: `{ "onboardingCompleted": true }` → 이름은 그대로
pub async fn update_profile(
    State(state): State<AppState>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let mut profile = db::get_profile(&state.pool).await?;

    if let Some(name) = req.name {
        profile.name = name;
    }
    if let Some(done) = req.onboarding_completed {
        profile.onboarding_completed = done;
    }

    db::save_profile(&state.pool, &profile).await?;
    Ok(Json(profile))
}
