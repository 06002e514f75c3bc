//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈:
//! - `entries`: 체크인 제출/조회와 주간 집계 (공유 상태 AppState 정의 포함)
//! - `health`: 서버 상태 확인과 데이터 초기화
//! - `insights`: 규칙 기반 인사이트와 LLM 심층 분석
//! - `mission`: 주간 미션 상태 조회/종료와 카탈로그
//! - `profile`: 사용자 프로필 조회/수정
//! - `travel`: 경로 탐색 프록시와 교통수단 추천

pub mod entries;
pub mod health;
pub mod insights;
pub mod mission;
pub mod profile;
pub mod travel;

// 각 모듈의 핸들러 함수들을 재공개하여
// main.rs에서 `routes::create_entry`처럼 바로 접근 가능하게 합니다.
pub use entries::*;
pub use health::*;
pub use insights::*;
pub use mission::*;
pub use profile::*;
pub use travel::*;
