use crate::error::AppError;
use crate::models::UserProfile;
use sqlx::SqlitePool;

/// 사용자 프로필을 조회합니다. 행이 없으면 기본 프로필을 반환합니다.
pub async fn get_profile(pool: &SqlitePool) -> Result<UserProfile, AppError> {
    let profile = sqlx::query_as::<_, UserProfile>(
        "SELECT name, onboarding_completed FROM profile WHERE slot = 0",
    )
    .fetch_optional(pool)
    .await?;

    Ok(profile.unwrap_or(UserProfile {
        name: "User".to_string(),
        onboarding_completed: false,
    }))
}

/// 사용자 프로필을 저장합니다 (싱글턴 행을 통째로 교체).
pub async fn save_profile(pool: &SqlitePool, profile: &UserProfile) -> Result<(), AppError> {
    sqlx::query("INSERT OR REPLACE INTO profile (slot, name, onboarding_completed) VALUES (0, ?, ?)")
        .bind(&profile.name)
        .bind(profile.onboarding_completed)
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn roundtrips_profile_updates() {
        let pool = test_pool().await;

        // 저장 전에는 기본 프로필
        let initial = get_profile(&pool).await.unwrap();
        assert_eq!(initial.name, "User");

        save_profile(
            &pool,
            &UserProfile { name: "Hana".to_string(), onboarding_completed: true },
        )
        .await
        .unwrap();

        let loaded = get_profile(&pool).await.unwrap();
        assert_eq!(loaded.name, "Hana");
        assert!(loaded.onboarding_completed);
    }
}
