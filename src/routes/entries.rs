//! # 체크인(Entry) 라우트 핸들러
//!
//! 데일리 체크인의 제출/조회와 주간 집계를 처리하는 HTTP 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//! - `GET  /api/v1/entries`       → 전체 기록 조회 (타임스탬프 오름차순)
//! - `POST /api/v1/entries`       → 체크인 제출 (파생 값 계산 + 미션 갱신)
//! - `GET  /api/v1/entries/stats` → 주간 집계 (CO₂ 합계, 지속가능성 점수 등)
//!
//! ## Axum 핸들러 패턴
//! Axum 핸들러는 **Extractor(추출기)**를 매개변수로 받습니다.
//! Extractor는 HTTP 요청에서 데이터를 자동으로 추출합니다:
//! - `State(state)`: 앱 전역 상태 (DB 풀, HTTP 클라이언트, 설정)
//! - `Json(body)`: 요청 본문을 JSON으로 파싱하여 구조체로 변환
//!
//! 반환 타입이 `Result<T, AppError>`이면, Axum이 자동으로:
//! - `Ok(T)` → T를 HTTP 응답으로 변환 (IntoResponse 트레이트 사용)
//! - `Err(AppError)` → AppError를 에러 JSON 응답으로 변환

use crate::{
    db,
    error::AppError,
    models::*,
    services::{co2, mission as mission_logic, wellness},
};
use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};
use sqlx::SqlitePool;

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// Axum의 의존성 주입(Dependency Injection) 메커니즘입니다.
///
/// SqlitePool과 reqwest::Client는 내부적으로 Arc를 사용하므로
/// clone해도 실제 연결/풀이 복제되지 않고 공유됩니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀 (내부적으로 Arc로 공유)
    pub pool: SqlitePool,
    /// 외부 API 호출용 HTTP 클라이언트 (경로 탐색 프록시, 로컬 LLM)
    pub http: reqwest::Client,
    /// 경로 탐색 업스트림 URL
    pub routing_api_url: String,
    /// 경로 탐색 API 키 (없으면 프록시가 항상 폴백으로 동작)
    pub routing_api_key: Option<String>,
    /// 로컬 LLM chat-completions 엔드포인트 URL
    pub llm_api_url: String,
    /// LLM 모델 이름
    pub llm_model: String,
}

/// `GET /entries` — 전체 체크인 기록을 조회합니다.
///
/// 반환값: `{ "entries": [...] }` (항상 타임스탬프 오름차순)
pub async fn list_entries(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let entries = db::list_entries(&state.pool).await?;
    Ok(Json(json!({ "entries": entries })))
}

/// `POST /entries` — 체크인을 제출합니다.
///
/// ## 처리 흐름
/// 1. 웰니스 점수와 CO₂ 배출량을 제출 시점에 계산 (저장 후 재계산 없음)
/// 2. 같은 날짜의 기존 기록이 있으면 통째로 교체(upsert)
/// 3. 미션 상태 머신에 이벤트를 반영하고 결과를 저장
///
/// 기록과 미션이 함께 바뀌므로 응답에 둘 다 담아 프론트엔드가
/// 추가 요청 없이 화면을 갱신할 수 있게 합니다.
pub async fn create_entry(
    State(state): State<AppState>,
    Json(req): Json<CheckInRequest>,
) -> Result<Json<Value>, AppError> {
    let now = Utc::now();
    let now_ms = now.timestamp_millis();

    let entry = DailyEntry {
        // UUIDv7: 시간 기반 UUID로, 생성 순서대로 정렬됩니다
        id: uuid::Uuid::now_v7().to_string(),
        // 날짜를 생략하면 오늘 날짜로 처리합니다
        date: req.date.unwrap_or_else(|| now.format("%Y-%m-%d").to_string()),
        timestamp: now_ms,
        sleep: req.sleep,
        energy: req.energy,
        mood: req.mood,
        transport: req.transport,
        wellness_score: wellness::wellness_score(req.sleep, req.energy, req.mood),
        co2_emitted: co2::daily_co2(req.transport),
    };

    db::upsert_entry(&state.pool, &entry).await?;

    // 미션 갱신은 순수 함수로 — 읽기/변환/저장을 핸들러가 조율합니다
    let mission = db::get_mission(&state.pool).await?;
    let mission = mission_logic::record_check_in(mission, req.transport, req.energy, now_ms);
    db::save_mission(&state.pool, &mission).await?;

    Ok(Json(json!({ "entry": entry, "mission": mission })))
}

/// `GET /entries/stats` — 대시보드용 주간 집계를 조회합니다.
///
/// 최근 7건(일주일치)의 CO₂ 합계와 지속가능성 점수, 웰니스 평균을 계산합니다.
pub async fn entry_stats(State(state): State<AppState>) -> Result<Json<WeeklyStats>, AppError> {
    let entries = db::list_entries(&state.pool).await?;
    let weekly = &entries[entries.len().saturating_sub(7)..];

    let weekly_co2: f64 = weekly.iter().map(|e| e.co2_emitted).sum();
    let avg_wellness = if weekly.is_empty() {
        0.0
    } else {
        weekly.iter().map(|e| e.wellness_score as f64).sum::<f64>() / weekly.len() as f64
    };

    Ok(Json(WeeklyStats {
        weekly_co2,
        sustainability_score: co2::sustainability_score(weekly_co2),
        avg_wellness,
        total_entries: entries.len() as i64,
    }))
}
