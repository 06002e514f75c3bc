//! # 주간 미션 모델 정의
//!
//! 한 번에 하나만 활성화되는 주간 습관 미션의 상태와
//! 선택 가능한 미션 카탈로그 구조체를 정의합니다.
//!
//! ## 상태 개념
//! - 주간 윈도우: `week_start_timestamp`부터 7일간 진행 상황을 집계
//! - 7일이 지난 뒤 첫 체크인에서 `current_count`/`completed`가 리셋됨
//! - `total_*` 누적 통계는 리셋과 무관하게 평생 쌓임 (프로필/배지 표시용)

use serde::{Deserialize, Serialize};

/// 주간 미션 상태 — DB의 `mission` 테이블 싱글턴 행에 대응합니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MissionState {
    /// 미션 식별자 (예: "cycle-commute-1")
    pub id: String,
    /// 표시용 제목
    pub title: String,
    /// 표시용 설명
    pub description: String,
    /// 목표 횟수 (예: 3회)
    pub target_count: i64,
    /// 이번 주 달성 횟수 — 항상 0..=target_count 범위
    pub current_count: i64,
    /// 이번 주 목표 달성 여부 — 한 번 true가 되면 윈도우 리셋 전까지 유지
    pub completed: bool,
    /// 현재 추적 윈도우 시작 시각 (epoch 밀리초)
    pub week_start_timestamp: i64,
    /// 누적 에너지 증가량 (퍼센트 포인트 합) — 윈도우 리셋에도 유지
    pub total_energy_gained: f64,
    /// 누적 CO₂ 절감량 (kg 합) — 윈도우 리셋에도 유지
    pub total_co2_saved: f64,
}

/// 미션 카탈로그 항목 — `GET /api/v1/missions/catalog` 응답의 한 건.
///
/// 카탈로그는 코드에 고정된 정적 목록입니다 (services::mission::catalog 참고).
/// UI 전용 필드(아이콘, 색상, 차트 데이터)는 프론트엔드가 갖고 있으므로
/// 서버는 도메인 필드만 제공합니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMission {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// "eco" 또는 "health"
    pub category: &'static str,
    pub target_count: i64,
    /// 표시용 기대 효과 (예: "+18%")
    pub energy_boost: &'static str,
    /// 표시용 기대 효과 (예: "-5.2 kg")
    pub co2_reduction: &'static str,
}
