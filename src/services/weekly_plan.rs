//! # 주간 액션 플랜 생성기
//!
//! 최근 7건의 체크인을 분석해 이번 주에 실행할 만한 액션 2~3개를 제안합니다.
//! 각 액션에는 기대 CO₂ 절감량이 붙고, 합산 전망(totalPotential)이
//! 대시보드 하단 카드에 표시됩니다.
//!
//! predictor와 마찬가지로 순수 규칙 기반입니다 — 조건에 맞는 액션을
//! 차례로 모은 뒤 최대 3개까지만 남깁니다.

use crate::models::{DailyEntry, TransportMode, WeeklyAction, WeeklyPlan};
use crate::services::co2;

/// 소수 첫째 자리 반올림 (표시용 숫자 정리)
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// 기록 전체를 받아 주간 액션 플랜을 생성합니다. 순수 함수입니다.
pub fn generate_weekly_plan(entries: &[DailyEntry]) -> WeeklyPlan {
    // 비교할 데이터가 없으면 기록 시작 안내만 내보냅니다
    if entries.len() < 2 {
        return WeeklyPlan {
            actions: vec![WeeklyAction {
                text: "Start logging daily check-ins".to_string(),
                savings: 0.0,
                icon: "clipboard",
            }],
            total_potential: 0.0,
        };
    }

    let recent = &entries[entries.len().saturating_sub(7)..];
    let mut actions = Vec::new();

    let car_trips =
        recent.iter().filter(|e| e.transport == TransportMode::Car).count() as i64;
    let cycle_trips =
        recent.iter().filter(|e| e.transport == TransportMode::Cycle).count() as i64;
    let walk_trips =
        recent.iter().filter(|e| e.transport == TransportMode::Walk).count() as i64;

    // 자가용이 잦으면 최대 2회까지 자전거 전환을 제안합니다
    if car_trips >= 2 {
        let savings_per_trip =
            co2::daily_co2(TransportMode::Car) - co2::daily_co2(TransportMode::Cycle);
        let trips_to_switch = car_trips.min(2);
        actions.push(WeeklyAction {
            text: format!(
                "Bike commute {} instead of driving",
                if trips_to_switch == 1 { "once" } else { "twice" }
            ),
            savings: round1(savings_per_trip * trips_to_switch as f64),
            icon: "bike",
        });
    }

    if car_trips >= 1 {
        actions.push(WeeklyAction {
            text: "Skip one car trip → use transit or walk".to_string(),
            savings: round1(
                co2::daily_co2(TransportMode::Car) - co2::daily_co2(TransportMode::Public),
            ),
            icon: "bus",
        });
    }

    // 수면 부족은 액티브 통근 의욕을 깎으므로 간접 절감으로 취급합니다 (명목값 1.2)
    let avg_sleep = recent.iter().map(|e| e.sleep).sum::<f64>() / recent.len() as f64;
    if avg_sleep < 7.0 {
        actions.push(WeeklyAction {
            text: "Aim for 7+ hours sleep → boosts energy for active commutes".to_string(),
            savings: 1.2,
            icon: "moon",
        });
    }

    let avg_energy = recent.iter().map(|e| e.energy).sum::<f64>() / recent.len() as f64;
    if avg_energy < 6.0 && cycle_trips == 0 {
        actions.push(WeeklyAction {
            text: "Try one cycle commute → +15% energy boost observed".to_string(),
            savings: 2.5,
            icon: "zap",
        });
    }

    // 제안이 적고 이미 액티브 비중이 높으면 유지 액션으로 채웁니다
    if actions.len() < 2 && cycle_trips + walk_trips >= 3 {
        actions.push(WeeklyAction {
            text: "Maintain your active streak → you're in the green zone!".to_string(),
            savings: 0.0,
            icon: "check",
        });
    }

    actions.truncate(3);
    let total_potential = round1(actions.iter().map(|a| a.savings).sum());

    WeeklyPlan { actions, total_potential }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransportMode::*;

    fn entry(day: i64, sleep: f64, energy: f64, transport: TransportMode) -> DailyEntry {
        DailyEntry {
            id: format!("w-{day}"),
            date: format!("2026-08-{:02}", day),
            timestamp: day * 86_400_000,
            sleep,
            energy,
            mood: 6.0,
            transport,
            wellness_score: 65,
            co2_emitted: co2::daily_co2(transport),
        }
    }

    #[test]
    fn too_little_data_suggests_logging() {
        let plan = generate_weekly_plan(&[entry(1, 7.0, 6.0, Car)]);
        assert_eq!(plan.actions.len(), 1);
        assert_eq!(plan.actions[0].icon, "clipboard");
        assert_eq!(plan.total_potential, 0.0);
    }

    #[test]
    fn car_heavy_week_gets_bike_and_transit_actions() {
        let entries: Vec<_> = (1..=7).map(|d| entry(d, 7.0, 6.0, Car)).collect();
        let plan = generate_weekly_plan(&entries);

        assert_eq!(plan.actions.len(), 2);
        assert!(plan.actions[0].text.contains("twice"));
        assert_eq!(plan.actions[0].savings, 5.0); // 2회 × 2.5kg
        assert_eq!(plan.actions[1].icon, "bus");
        assert_eq!(plan.actions[1].savings, 2.0);
        assert_eq!(plan.total_potential, 7.0);
    }

    #[test]
    fn single_car_trip_only_suggests_skipping_it() {
        let entries = vec![
            entry(1, 7.0, 6.0, Car),
            entry(2, 7.0, 6.0, Public),
            entry(3, 7.0, 6.0, Public),
        ];
        let plan = generate_weekly_plan(&entries);
        assert_eq!(plan.actions.len(), 1);
        assert!(plan.actions[0].text.starts_with("Skip one car trip"));
        assert_eq!(plan.total_potential, 2.0);
    }

    #[test]
    fn sleep_deficit_adds_a_recovery_action() {
        let entries: Vec<_> = (1..=4).map(|d| entry(d, 6.0, 6.0, Public)).collect();
        let plan = generate_weekly_plan(&entries);
        assert_eq!(plan.actions.len(), 1);
        assert_eq!(plan.actions[0].icon, "moon");
        assert_eq!(plan.total_potential, 1.2);
    }

    #[test]
    fn active_week_with_low_energy_gets_cycle_and_streak_actions() {
        // 걷기만 4일 + 낮은 에너지: 자전거 시도 제안 뒤 유지 액션으로 채워집니다
        let entries: Vec<_> = (1..=4).map(|d| entry(d, 7.5, 5.0, Walk)).collect();
        let plan = generate_weekly_plan(&entries);

        let icons: Vec<_> = plan.actions.iter().map(|a| a.icon).collect();
        assert_eq!(icons, ["zap", "check"]);
        assert_eq!(plan.total_potential, 2.5);
    }

    #[test]
    fn plan_is_capped_at_three_actions() {
        // 자가용 7일 + 수면 부족 + 낮은 에너지: 후보 4개 중 3개만 남습니다
        let entries: Vec<_> = (1..=7).map(|d| entry(d, 6.0, 5.0, Car)).collect();
        let plan = generate_weekly_plan(&entries);

        assert_eq!(plan.actions.len(), 3);
        let icons: Vec<_> = plan.actions.iter().map(|a| a.icon).collect();
        assert_eq!(icons, ["bike", "bus", "moon"]);
        // 5.0 + 2.0 + 1.2
        assert_eq!(plan.total_potential, 8.2);
    }

    #[test]
    fn only_the_last_seven_entries_are_analyzed() {
        // 오래된 자가용 기록 7건 + 최근 대중교통 7건: 플랜은 최근 7건만 봅니다
        let mut entries: Vec<_> = (1..=7).map(|d| entry(d, 7.0, 6.0, Car)).collect();
        entries.extend((8..=14).map(|d| entry(d, 7.0, 6.0, Public)));

        let plan = generate_weekly_plan(&entries);
        assert!(plan.actions.is_empty());
        assert_eq!(plan.total_potential, 0.0);
    }
}
