use crate::error::AppError;
use crate::models::MissionState;
use crate::services::mission as mission_logic;
use chrono::Utc;
use sqlx::SqlitePool;

/// 현재 미션 상태를 조회합니다.
///
/// 싱글턴 행이 없으면(시드 전이거나 미션 종료 직후 경합) 기본 미션을
/// 만들어 저장한 뒤 반환합니다 — 원본의 "없으면 INITIAL_MISSION" 폴백과 동일.
pub async fn get_mission(pool: &SqlitePool) -> Result<MissionState, AppError> {
    let mission = sqlx::query_as::<_, MissionState>(
        r#"
        SELECT id, title, description, target_count, current_count, completed,
               week_start_timestamp, total_energy_gained, total_co2_saved
        FROM mission
        WHERE slot = 0
        "#,
    )
    .fetch_optional(pool)
    .await?;

    match mission {
        Some(mission) => Ok(mission),
        None => {
            let fresh = mission_logic::default_mission(Utc::now().timestamp_millis());
            save_mission(pool, &fresh).await?;
            Ok(fresh)
        }
    }
}

/// 미션 상태를 저장합니다 (싱글턴 행을 통째로 교체).
pub async fn save_mission(pool: &SqlitePool, state: &MissionState) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT OR REPLACE INTO mission
            (slot, id, title, description, target_count, current_count, completed,
             week_start_timestamp, total_energy_gained, total_co2_saved)
        VALUES (0, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&state.id)
    .bind(&state.title)
    .bind(&state.description)
    .bind(state.target_count)
    .bind(state.current_count)
    .bind(state.completed)
    .bind(state.week_start_timestamp)
    .bind(state.total_energy_gained)
    .bind(state.total_co2_saved)
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn missing_row_falls_back_to_default_mission() {
        let pool = test_pool().await;
        let mission = get_mission(&pool).await.unwrap();
        assert_eq!(mission.id, "cycle-commute-1");
        assert_eq!(mission.current_count, 0);

        // 폴백이 저장까지 했는지 확인
        let again = get_mission(&pool).await.unwrap();
        assert_eq!(again.week_start_timestamp, mission.week_start_timestamp);
    }

    #[tokio::test]
    async fn save_replaces_the_singleton_row() {
        let pool = test_pool().await;
        let mut mission = get_mission(&pool).await.unwrap();
        mission.current_count = 2;
        mission.total_co2_saved = 5.0;
        save_mission(&pool, &mission).await.unwrap();

        let loaded = get_mission(&pool).await.unwrap();
        assert_eq!(loaded.current_count, 2);
        assert_eq!(loaded.total_co2_saved, 5.0);
    }
}
