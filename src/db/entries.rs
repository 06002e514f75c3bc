//! # 체크인 기록 쿼리 모듈
//!
//! `entries` 테이블에 대한 조회/저장 쿼리 함수들입니다.
//! 모든 함수는 `SqlitePool` 참조를 받아 비동기로 실행됩니다.
//!
//! ## 불변식
//! - 한 날짜(date)에 기록은 최대 한 건 — 같은 날짜로 다시 저장하면 교체됩니다
//! - 목록은 항상 timestamp 오름차순으로 반환됩니다

use crate::error::AppError;
use crate::models::DailyEntry;
use sqlx::SqlitePool;

/// 전체 체크인 기록을 타임스탬프 오름차순으로 조회합니다.
pub async fn list_entries(pool: &SqlitePool) -> Result<Vec<DailyEntry>, AppError> {
    let entries = sqlx::query_as::<_, DailyEntry>(
        r#"
        SELECT id, date, timestamp, sleep, energy, mood, transport, wellness_score, co2_emitted
        FROM entries
        ORDER BY timestamp ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

/// 체크인 기록을 저장합니다 — 같은 날짜가 있으면 통째로 교체(upsert)합니다.
///
/// `ON CONFLICT(date) DO UPDATE`: date 컬럼의 UNIQUE 제약에 걸리면
/// INSERT 대신 기존 행을 새 값으로 덮어씁니다 (id까지 전부 —
/// 병합이 아니라 교체라는 점이 중요합니다).
pub async fn upsert_entry(pool: &SqlitePool, entry: &DailyEntry) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO entries (id, date, timestamp, sleep, energy, mood, transport,
                             wellness_score, co2_emitted)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(date) DO UPDATE SET
            id = excluded.id,
            timestamp = excluded.timestamp,
            sleep = excluded.sleep,
            energy = excluded.energy,
            mood = excluded.mood,
            transport = excluded.transport,
            wellness_score = excluded.wellness_score,
            co2_emitted = excluded.co2_emitted
        "#,
    )
    .bind(&entry.id)
    .bind(&entry.date)
    .bind(entry.timestamp)
    .bind(entry.sleep)
    .bind(entry.energy)
    .bind(entry.mood)
    .bind(entry.transport)
    .bind(entry.wellness_score)
    .bind(entry.co2_emitted)
    .execute(pool)
    .await?;

    Ok(())
}
