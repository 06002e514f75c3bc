//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//!
//! 원본 앱은 브라우저 localStorage에 JSON 문서 3개(entries/mission/user)를
//! 저장했습니다. 서버에서는 같은 get/save 계약을 SQLite 테이블로 구현합니다.
//!
//! 각 하위 모듈:
//! - `entries`: 체크인 기록 upsert/조회 쿼리
//! - `mission`: 주간 미션 싱글턴 행 조회/저장
//! - `profile`: 사용자 프로필 싱글턴 행 조회/저장
//!
//! 이 모듈 자체에는 스키마 버전 검사와 파괴적 리셋/시드 로직이 있습니다.

pub mod entries;
pub mod mission;
pub mod profile;

// 하위 모듈의 모든 공개 함수를 재공개(re-export)하여
// `crate::db::upsert_entry`처럼 바로 접근할 수 있게 합니다.
pub use entries::*;
pub use mission::*;
pub use profile::*;

use crate::error::AppError;
use crate::models::{DailyEntry, TransportMode, UserProfile};
use crate::services::{co2, mission as mission_logic};
use chrono::{Duration, Utc};
use sqlx::SqlitePool;

/// 현재 데이터 스키마 버전.
///
/// meta 테이블의 `schema_version`과 비교하여 다르면 전체 데이터를 버리고
/// 시드 데이터를 다시 씁니다. 마이그레이션 경로가 없는 파괴적 정책이지만,
/// 개인용 데모 데이터라는 전제 하의 의도된 설계입니다 (원본 앱과 동일).
pub const CURRENT_VERSION: i64 = 3;

/// 서버 시작 시 호출 — 스키마 버전을 검사하고 필요하면 리셋합니다.
///
/// 버전이 없거나(첫 실행) 다르면(구버전 데이터) 경고 로그만 남기고
/// 조용히 `reset_data`를 실행합니다. 사용자에게 에러로 노출되지 않습니다.
pub async fn init(pool: &SqlitePool) -> Result<(), AppError> {
    // query_scalar: 단일 컬럼 값 하나만 가져올 때 사용합니다
    let version: Option<String> =
        sqlx::query_scalar("SELECT value FROM meta WHERE key = 'schema_version'")
            .fetch_optional(pool)
            .await?;

    let matches = version
        .as_deref()
        .and_then(|v| v.parse::<i64>().ok())
        .map(|v| v == CURRENT_VERSION)
        .unwrap_or(false);

    if !matches {
        tracing::warn!(
            "LifeLens storage version mismatch (found {:?}, expected {}). Resetting data.",
            version,
            CURRENT_VERSION
        );
        reset_data(pool).await?;
    }

    Ok(())
}

/// 모든 문서를 지우고 시드 데이터를 다시 씁니다.
///
/// 버전 불일치 경로와 사용자가 직접 누르는 "데이터 초기화"가
/// 정확히 같은 코드를 타도록 하나의 함수로 묶었습니다.
pub async fn reset_data(pool: &SqlitePool) -> Result<(), AppError> {
    let now_ms = Utc::now().timestamp_millis();

    // 전체 삭제 — localStorage.clear()에 해당
    sqlx::query("DELETE FROM entries").execute(pool).await?;
    sqlx::query("DELETE FROM mission").execute(pool).await?;
    sqlx::query("DELETE FROM profile").execute(pool).await?;
    sqlx::query("DELETE FROM meta").execute(pool).await?;

    sqlx::query("INSERT INTO meta (key, value) VALUES ('schema_version', ?)")
        .bind(CURRENT_VERSION.to_string())
        .execute(pool)
        .await?;

    for entry in seed_entries(now_ms) {
        upsert_entry(pool, &entry).await?;
    }

    save_mission(pool, &mission_logic::default_mission(now_ms)).await?;
    save_profile(
        pool,
        &UserProfile { name: "User".to_string(), onboarding_completed: false },
    )
    .await?;

    Ok(())
}

/// 시드용 합성 14일 기록을 생성합니다.
///
/// 자가용 위주에서 대중교통/자전거로 옮겨가는 "행동 전환" 패턴 —
/// 대시보드와 인사이트 데모가 의미 있게 보이도록 설계된 시나리오입니다.
/// 원본 시드의 난수 흔들림은 재현성을 위해 제거했습니다.
fn seed_entries(now_ms: i64) -> Vec<DailyEntry> {
    const MODES: [TransportMode; 14] = [
        TransportMode::Car,
        TransportMode::Car,
        TransportMode::Car,
        TransportMode::Public,
        TransportMode::Car,
        TransportMode::Car,
        TransportMode::Public,
        TransportMode::Car,
        TransportMode::Public,
        TransportMode::Cycle,
        TransportMode::Car,
        TransportMode::Cycle,
        TransportMode::Public,
        TransportMode::Cycle,
    ];

    let now = Utc::now();
    MODES
        .iter()
        .enumerate()
        .map(|(i, &mode)| {
            let day = now - Duration::days(14 - i as i64);
            DailyEntry {
                id: format!("seed-{}", i),
                date: day.format("%Y-%m-%d").to_string(),
                timestamp: now_ms - (14 - i as i64) * 86_400_000,
                sleep: 6.5 + i as f64 * 0.1,
                energy: 5.0 + i as f64 * 0.2,
                mood: 6.0 + i as f64 * 0.1,
                transport: mode,
                wellness_score: 60 + i as i64 * 2,
                co2_emitted: co2::daily_co2(mode),
            }
        })
        .collect()
}

// 테스트 전용 헬퍼: 마이그레이션이 적용된 인메모리 SQLite 풀을 만듭니다.
// :memory: DB는 연결마다 분리되므로 풀 크기를 1로 고정해야 합니다.
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    sqlx::migrate!("./migrations").run(&pool).await.expect("migrations");
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn init_seeds_fresh_database() {
        let pool = test_pool().await;
        init(&pool).await.unwrap();

        let entries = list_entries(&pool).await.unwrap();
        assert_eq!(entries.len(), 14);
        // 기록은 항상 타임스탬프 오름차순
        assert!(entries.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

        let mission = get_mission(&pool).await.unwrap();
        assert_eq!(mission.target_count, 3);
        assert_eq!(mission.current_count, 0);

        let profile = get_profile(&pool).await.unwrap();
        assert_eq!(profile.name, "User");
        assert!(!profile.onboarding_completed);
    }

    #[tokio::test]
    async fn init_is_idempotent_when_version_matches() {
        let pool = test_pool().await;
        init(&pool).await.unwrap();

        // 시드 이후 추가한 데이터는 재시작(init 재호출)에도 살아남아야 합니다
        let extra = DailyEntry {
            id: "extra".to_string(),
            date: "2030-01-01".to_string(),
            timestamp: 1_900_000_000_000,
            sleep: 8.0,
            energy: 8.0,
            mood: 8.0,
            transport: TransportMode::Cycle,
            wellness_score: 80,
            co2_emitted: 0.0,
        };
        upsert_entry(&pool, &extra).await.unwrap();
        assert_eq!(list_entries(&pool).await.unwrap().len(), 15);

        init(&pool).await.unwrap();
        assert_eq!(list_entries(&pool).await.unwrap().len(), 15);
    }

    #[tokio::test]
    async fn stale_version_triggers_full_reseed() {
        let pool = test_pool().await;
        init(&pool).await.unwrap();

        // 버전을 구버전으로 되돌리면 다음 init이 전부 갈아엎어야 합니다
        sqlx::query("UPDATE meta SET value = '1' WHERE key = 'schema_version'")
            .execute(&pool)
            .await
            .unwrap();

        init(&pool).await.unwrap();
        let entries = list_entries(&pool).await.unwrap();
        assert_eq!(entries.len(), 14);
        assert!(entries.iter().all(|e| e.id.starts_with("seed-")));
    }

    #[tokio::test]
    async fn reset_data_restores_the_seed_dataset() {
        let pool = test_pool().await;
        init(&pool).await.unwrap();

        sqlx::query("DELETE FROM entries").execute(&pool).await.unwrap();
        assert_eq!(list_entries(&pool).await.unwrap().len(), 0);

        reset_data(&pool).await.unwrap();
        assert_eq!(list_entries(&pool).await.unwrap().len(), 14);
    }
}
