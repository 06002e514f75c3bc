//! # 주간 미션 상태 머신
//!
//! 체크인 이벤트를 받아 주간 미션 진행 상황을 갱신하는 순수 함수들입니다.
//! DB 접근이 전혀 없어 단독으로 테스트할 수 있고,
//! 결과를 저장하는 책임은 호출자(라우트 핸들러)에게 있습니다.
//!
//! ## 규칙 요약
//! 1. 갱신 전에 항상 주간 윈도우부터 검사합니다 — 시작 후 7일이 지났으면
//!    `current_count`/`completed`를 리셋 (누적 통계는 유지)
//! 2. **cycle 체크인만** 미션 횟수를 올립니다. walk/public도 저배출이지만
//!    현재 정책상 미션 진행으로 치지 않습니다 (의도된 좁은 트리거 — 버그 아님)
//! 3. cycle 체크인은 완료 여부와 무관하게 누적 통계(절감 CO₂, 에너지)를 더합니다
//! 4. `current_count`는 `target_count`를 넘지 않고, `completed`는
//!    윈도우 안에서 한 번 true가 되면 리셋 전까지 유지됩니다

use crate::models::{CatalogMission, MissionState, TransportMode};
use crate::services::co2;

/// 주간 윈도우 길이 (밀리초) — 7일
pub const WEEK_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// cycle 체크인 1회당 누적되는 에너지 증가량 (퍼센트 포인트)
const ENERGY_GAIN_PER_RIDE: f64 = 6.0;

/// 첫 사용 또는 미션 종료 시 세팅되는 기본 미션
pub fn default_mission(now_ms: i64) -> MissionState {
    MissionState {
        id: "cycle-commute-1".to_string(),
        title: "Cycle to work 3x this week".to_string(),
        description: "Replace 3 car trips with cycling this week.".to_string(),
        target_count: 3,
        current_count: 0,
        completed: false,
        week_start_timestamp: now_ms,
        total_energy_gained: 0.0,
        total_co2_saved: 0.0,
    }
}

/// 주간 윈도우가 지났는지 검사하고, 지났으면 리셋된 상태를 반환합니다.
///
/// `now_ms - week_start_timestamp >= WEEK_MS`이면 새 윈도우를 시작합니다:
/// 횟수와 완료 플래그는 초기화하되, 윈도우 시작 시각은 `now_ms`로 당깁니다.
/// 누적 통계(total_energy_gained, total_co2_saved)는 평생 지표이므로 건드리지 않습니다.
/// 아직 윈도우 안이면 입력을 그대로 반환합니다.
pub fn advance_window(mission: MissionState, now_ms: i64) -> MissionState {
    if now_ms - mission.week_start_timestamp >= WEEK_MS {
        return MissionState {
            week_start_timestamp: now_ms,
            current_count: 0,
            completed: false,
            ..mission
        };
    }
    mission
}

/// 체크인 한 건을 미션 상태에 반영합니다. 순수 변환이며 실패하지 않습니다.
///
/// `_energy_level`은 받기만 하고 사용하지 않습니다 — 에너지 보너스는
/// 평점과 무관하게 고정값(+6)입니다. 이전 설계의 흔적으로 보이지만
/// 제품 결정 없이 "고치지" 않기로 했습니다.
pub fn record_check_in(
    mission: MissionState,
    transport: TransportMode,
    _energy_level: f64,
    now_ms: i64,
) -> MissionState {
    // 윈도우 검사가 항상 먼저 — 리셋 경계에 정확히 걸친 체크인은 새 주에서 집계
    let mut next = advance_window(mission, now_ms);

    if transport != TransportMode::Cycle {
        return next;
    }

    // 누적 통계는 완료 여부와 무관하게 쌓입니다
    next.total_co2_saved += co2::co2_savings(TransportMode::Cycle);
    next.total_energy_gained += ENERGY_GAIN_PER_RIDE;

    if !next.completed {
        next.current_count += 1;
        if next.current_count >= next.target_count {
            next.completed = true;
        }
    }

    next
}

/// 선택 가능한 미션 카탈로그 (원본 앱의 미션 목록, UI 전용 필드 제외)
pub fn catalog() -> &'static [CatalogMission] {
    const CATALOG: &[CatalogMission] = &[
        CatalogMission {
            id: "cycle-commute",
            title: "Low-Carbon Commute",
            description: "Replace 3 car trips with cycling or walking this week.",
            category: "eco",
            target_count: 3,
            energy_boost: "+18%",
            co2_reduction: "-5.2 kg",
        },
        CatalogMission {
            id: "plant-based",
            title: "Plant-Based Power",
            description: "Switch to plant-based meals for 4 days this week.",
            category: "eco",
            target_count: 4,
            energy_boost: "+12%",
            co2_reduction: "-8.4 kg",
        },
        CatalogMission {
            id: "sleep-hygiene",
            title: "Deep Sleep Protocol",
            description: "Get 8 hours of sleep for 5 nights this week.",
            category: "health",
            target_count: 5,
            energy_boost: "+25%",
            co2_reduction: "-1.2 kg",
        },
        CatalogMission {
            id: "caffeine-cut",
            title: "Caffeine Detox",
            description: "No caffeine after 2 PM for 6 days.",
            category: "health",
            target_count: 6,
            energy_boost: "+15%",
            co2_reduction: "0 kg",
        },
        CatalogMission {
            id: "mindful-minutes",
            title: "Mindful Minutes",
            description: "Meditate for 10 minutes every day this week.",
            category: "health",
            target_count: 7,
            energy_boost: "+20%",
            co2_reduction: "0 kg",
        },
        CatalogMission {
            id: "local-harvest",
            title: "Local Harvest",
            description: "Eat 100% locally sourced meals for 3 days.",
            category: "eco",
            target_count: 3,
            energy_boost: "+8%",
            co2_reduction: "-12.5 kg",
        },
        CatalogMission {
            id: "hydration-sync",
            title: "Hydration Sync",
            description: "Drink 3L of water daily for the entire week.",
            category: "health",
            target_count: 7,
            energy_boost: "+10%",
            co2_reduction: "0 kg",
        },
    ];
    CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransportMode::*;

    const NOW: i64 = 1_700_000_000_000;

    fn fresh() -> MissionState {
        default_mission(NOW)
    }

    #[test]
    fn cycle_check_ins_advance_until_completion() {
        let mut m = fresh();

        // 1일차: cycle
        m = record_check_in(m, Cycle, 8.0, NOW);
        assert_eq!(m.current_count, 1);
        assert!(!m.completed);
        assert_eq!(m.total_co2_saved, 2.5);
        assert_eq!(m.total_energy_gained, 6.0);

        // 2일차: car — 진행 없음
        m = record_check_in(m, Car, 5.0, NOW);
        assert_eq!(m.current_count, 1);

        // 3~4일차: cycle 두 번으로 목표(3회) 달성
        m = record_check_in(m, Cycle, 7.0, NOW);
        assert_eq!(m.current_count, 2);
        m = record_check_in(m, Cycle, 9.0, NOW);
        assert_eq!(m.current_count, 3);
        assert!(m.completed);
    }

    #[test]
    fn only_cycle_counts_toward_the_target() {
        let mut m = fresh();
        // walk/public도 저배출이지만 미션 트리거는 cycle뿐
        m = record_check_in(m, Walk, 8.0, NOW);
        m = record_check_in(m, Public, 8.0, NOW);
        assert_eq!(m.current_count, 0);
        assert_eq!(m.total_co2_saved, 0.0);
        assert_eq!(m.total_energy_gained, 0.0);
    }

    #[test]
    fn seven_days_of_car_leave_everything_at_zero() {
        let mut m = fresh();
        for _ in 0..7 {
            m = record_check_in(m, Car, 5.0, NOW);
        }
        assert_eq!(m.current_count, 0);
        assert!(!m.completed);
        assert_eq!(m.total_co2_saved, 0.0);
    }

    #[test]
    fn count_is_monotonic_and_capped_at_target() {
        let mut m = fresh();
        let mut last = 0;
        for _ in 0..10 {
            m = record_check_in(m, Cycle, 8.0, NOW);
            assert!(m.current_count >= last);
            assert!(m.current_count <= m.target_count);
            last = m.current_count;
        }
        assert_eq!(m.current_count, m.target_count);
        assert!(m.completed);
    }

    #[test]
    fn lifetime_totals_keep_accumulating_after_completion() {
        let mut m = fresh();
        for _ in 0..3 {
            m = record_check_in(m, Cycle, 8.0, NOW);
        }
        assert!(m.completed);

        // 완료 후 추가 cycle 2회: 횟수는 고정, 누적 통계만 증가
        m = record_check_in(m, Cycle, 8.0, NOW);
        m = record_check_in(m, Cycle, 8.0, NOW);
        assert_eq!(m.current_count, 3);
        assert_eq!(m.total_co2_saved, 2.5 * 5.0);
        assert_eq!(m.total_energy_gained, 6.0 * 5.0);
    }

    #[test]
    fn stale_window_resets_before_applying_the_event() {
        let mut m = fresh();
        for _ in 0..3 {
            m = record_check_in(m, Cycle, 8.0, NOW);
        }
        assert!(m.completed);
        let totals_before = (m.total_energy_gained, m.total_co2_saved);

        // 8일 뒤의 체크인 — 리셋 후 1회로 집계, 누적 통계는 리셋의 영향 없음
        let later = NOW + 8 * 24 * 60 * 60 * 1000;
        m = record_check_in(m, Cycle, 8.0, later);
        assert_eq!(m.current_count, 1);
        assert!(!m.completed);
        assert_eq!(m.week_start_timestamp, later);
        assert_eq!(m.total_energy_gained, totals_before.0 + 6.0);
        assert_eq!(m.total_co2_saved, totals_before.1 + 2.5);
    }

    #[test]
    fn advance_window_is_a_no_op_inside_the_week() {
        let m = fresh();
        let inside = NOW + WEEK_MS - 1;
        let same = advance_window(m.clone(), inside);
        assert_eq!(same.current_count, m.current_count);
        assert_eq!(same.week_start_timestamp, NOW);

        // 정확히 7일째부터는 리셋
        let boundary = advance_window(m, NOW + WEEK_MS);
        assert_eq!(boundary.week_start_timestamp, NOW + WEEK_MS);
        assert_eq!(boundary.current_count, 0);
    }
}
