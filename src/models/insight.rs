//! # 인사이트 모델 정의
//!
//! 규칙 기반 코치 인사이트와 예측 인사이트, LLM 관련 요청 구조체를 정의합니다.
//!
//! ## 구조체 역할
//! - `CoachInsight`: 최근 기록을 분석한 코치 문구 + 상관관계 문구 2종
//! - `PredictiveInsight`: CO₂ 감축 기회/월간 절감 전망 등 예측 분석 결과
//! - `DeepInsightRequest`: 로컬 LLM 심층 분석 요청 본문
//! - `RouteAdviceRequest`: 이동 거리 기반 교통수단 추천 요청 본문

use serde::{Deserialize, Serialize};

/// 코치 인사이트의 성격 분류 (프론트엔드가 카드 색상 결정에 사용)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Health,
    Planet,
    Balanced,
}

/// 건강/환경 상관관계 문구 쌍
#[derive(Debug, Clone, Serialize)]
pub struct Correlations {
    pub health: String,
    pub planet: String,
}

/// 규칙 기반 코치 인사이트 — `GET /api/v1/insights` 응답의 일부
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachInsight {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub correlations: Correlations,
}

/// 예측 인사이트 — 이동수단 빈도 분석으로 만든 CO₂ 감축 전망
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictiveInsight {
    /// 가장 큰 감축 기회에 대한 설명 문구
    pub opportunity: String,
    /// 제안을 따랐을 때의 월간 절감 전망 (kg, 소수 1자리)
    pub monthly_savings: f64,
    /// 지속가능 목표(0.5kg/일)까지 걸리는 시간 표현 (예: "~3 weeks")
    pub time_to_target: String,
    /// 일일 CO₂ 감축률 (%)
    pub reduction_pct: i64,
    /// 현재 일평균 CO₂ (kg, 소수 1자리)
    pub current_daily: f64,
    /// 제안 적용 후 예상 일평균 CO₂ (kg, 소수 1자리)
    pub projected_daily: f64,
    /// 데이터 양에 따른 신뢰도: "High" / "Moderate" / "Low"
    pub confidence: &'static str,
    /// 추천 전환 수단 (기회가 없으면 빈 문자열)
    pub best_switch: &'static str,
}

/// 주간 액션 플랜의 액션 항목 한 건
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyAction {
    /// 실행 제안 문구
    pub text: String,
    /// 실행 시 기대 절감량 (kg CO₂, 소수 1자리) — 습관 제안은 명목값
    pub savings: f64,
    /// 프론트엔드 아이콘 키 (bike / bus / moon / zap / check / clipboard)
    pub icon: &'static str,
}

/// 주간 액션 플랜 — 최근 행동 데이터로 만든 2~3개의 실행 제안 묶음
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    pub actions: Vec<WeeklyAction>,
    /// 모든 액션을 실행했을 때의 합산 절감 전망 (kg CO₂)
    pub total_potential: f64,
}

/// 심층 웰니스 분석 요청 — `POST /api/v1/insights/deep`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepInsightRequest {
    /// 분석할 상관관계 이름 (예: "sleep-energy")
    pub correlation_type: String,
}

/// 교통수단 추천 요청 — `POST /api/v1/route/advice`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAdviceRequest {
    /// 이동 거리 (km)
    pub distance_km: f64,
}

/// 경로 탐색 프록시 요청 — `POST /api/v1/route`
///
/// 원본 그대로 업스트림에 전달되는 좌표 목록입니다.
/// 좌표는 GeoJSON 관례에 따라 [경도, 위도] 순서입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    pub coordinates: Vec<[f64; 2]>,
}
