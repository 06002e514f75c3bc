//! # 비즈니스 로직 서비스 모듈
//!
//! DB 접근 계층(db/)과 라우트 핸들러(routes/) 사이의 도메인 로직입니다.
//! 점수 계산과 미션 상태 머신은 순수 함수라 DB 없이 단위 테스트가 가능합니다.
//!
//! 각 하위 모듈:
//! - `wellness`: 수면/에너지/기분 → 0~100 웰니스 점수
//! - `co2`: 이동수단별 CO₂ 배출/절감량 테이블과 지속가능성 점수
//! - `mission`: 주간 미션 상태 머신 (윈도우 리셋 + 진행 갱신)
//! - `coach`: 규칙 기반 코치 인사이트 (우선순위 규칙 목록)
//! - `predictor`: 이동수단 빈도 기반 CO₂ 감축 예측
//! - `weekly_plan`: 최근 행동 기반 주간 액션 플랜 (2~3개 제안 + 합산 절감 전망)
//! - `ai`: 로컬 LLM(LM Studio) 클라이언트 — 실패 시 폴백 문구
//! - `routing`: 경로 탐색 API 프록시 — 실패 시 직선 경로 폴백

pub mod ai;
pub mod co2;
pub mod coach;
pub mod mission;
pub mod predictor;
pub mod routing;
pub mod weekly_plan;
pub mod wellness;
