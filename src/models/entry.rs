//! # 데일리 체크인 모델 정의
//!
//! 사용자가 하루에 한 번 제출하는 체크인(수면/에너지/기분/이동수단) 기록과
//! 관련 요청/응답 구조체들을 정의합니다.
//!
//! ## 구조체 역할
//! - `TransportMode`: 이동수단 열거형 (walk/cycle/public/car)
//! - `DailyEntry`: DB의 `entries` 테이블 한 행에 대응하는 체크인 기록
//! - `CheckInRequest`: 체크인 제출 시 클라이언트가 보내는 JSON 본문
//! - `WeeklyStats`: 대시보드용 주간 집계 응답

use serde::{Deserialize, Serialize};

/// 이동수단 열거형
///
/// # derive 매크로 설명
/// - `Copy`: 4가지 값뿐인 작은 타입이므로 참조 대신 값 복사로 다룹니다
/// - `sqlx::Type`: DB의 TEXT 컬럼과 이 enum을 자동 변환합니다
/// - `PartialEq, Eq`: `==` 비교 가능 (미션 로직에서 cycle 여부 판정에 필요)
///
/// serde/sqlx 모두 `rename_all = "lowercase"`를 지정하여
/// JSON과 DB에는 "walk", "cycle", "public", "car" 소문자 문자열로 저장됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TransportMode {
    Walk,
    Cycle,
    /// 대중교통 (버스/지하철) — 프론트엔드 계약상 "public"이라는 짧은 이름 사용
    Public,
    Car,
}

/// 데일리 체크인 엔티티 — DB의 `entries` 테이블 한 행에 대응합니다.
///
/// `wellness_score`와 `co2_emitted`는 제출 시점에 서버가 계산하는 파생 값입니다.
/// 저장 후에는 다시 계산하지 않습니다 (공식이 바뀌어도 과거 기록은 그대로).
///
/// `#[serde(rename_all = "camelCase")]`: 프론트엔드 JSON 계약이 camelCase이므로
/// (wellnessScore, co2Emitted 등) 직렬화 시 필드 이름을 변환합니다.
/// DB 컬럼 매핑(sqlx::FromRow)은 Rust 필드 이름(snake_case)을 그대로 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DailyEntry {
    /// 체크인 고유 식별자 (UUIDv7)
    pub id: String,
    /// ISO 날짜 문자열 (YYYY-MM-DD) — 하루에 한 건만 존재 (upsert 기준)
    pub date: String,
    /// 제출 시각 (epoch 밀리초) — 목록은 항상 이 값 오름차순으로 정렬
    pub timestamp: i64,
    /// 수면 평점 (0~10)
    pub sleep: f64,
    /// 에너지 평점 (0~10)
    pub energy: f64,
    /// 기분 평점 (0~10)
    pub mood: f64,
    /// 이동수단
    pub transport: TransportMode,
    /// 웰니스 점수 (0~100) — 제출 시점에 계산
    pub wellness_score: i64,
    /// 배출 CO₂ (kg) — 이동수단에서 계산
    pub co2_emitted: f64,
}

/// 체크인 제출 요청 — `POST /api/v1/entries`의 요청 본문에 해당합니다.
///
/// 파생 값(점수, CO₂)은 서버가 계산하므로 요청에는 포함되지 않습니다.
#[derive(Debug, Deserialize)]
pub struct CheckInRequest {
    /// 체크인 날짜 (선택 — 없으면 오늘 날짜 사용)
    pub date: Option<String>,
    pub sleep: f64,
    pub energy: f64,
    pub mood: f64,
    pub transport: TransportMode,
}

/// 주간 집계 응답 — `GET /api/v1/entries/stats`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStats {
    /// 최근 7개 기록의 CO₂ 합계 (kg)
    pub weekly_co2: f64,
    /// 지속가능성 점수 (0~100) — 주간 CO₂ 합계 기반
    pub sustainability_score: i64,
    /// 최근 7개 기록의 웰니스 점수 평균
    pub avg_wellness: f64,
    /// 전체 기록 수
    pub total_entries: i64,
}
