//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! 각 하위 모듈은 특정 도메인의 데이터 타입을 담당합니다:
//! - `entry`: 데일리 체크인(DailyEntry)과 이동수단(TransportMode) 관련 구조체
//! - `mission`: 주간 미션 상태(MissionState)와 미션 카탈로그 구조체
//! - `insight`: 코치/예측 인사이트와 LLM 요청 구조체
//! - `user`: 사용자 프로필(UserProfile) 관련 구조체
//!
//! `pub use X::*;`는 하위 모듈의 모든 공개 항목을
//! 이 모듈에서 바로 접근할 수 있게 재공개(re-export)합니다.
//! 예: `crate::models::entry::DailyEntry` 대신 `crate::models::DailyEntry`로 접근 가능

// pub mod: 하위 모듈을 공개(public)로 선언합니다.
// pub이 없으면 이 모듈 내부에서만 접근 가능합니다.
pub mod entry;
pub mod insight;
pub mod mission;
pub mod user;

// pub use: 하위 모듈의 항목을 현재 모듈에서 재공개합니다.
// `*`(glob)는 모든 공개 항목을 의미합니다.
// 이렇게 하면 사용하는 쪽에서 `models::DailyEntry`처럼 짧게 쓸 수 있습니다.
pub use entry::*;
pub use insight::*;
pub use mission::*;
pub use user::*;
