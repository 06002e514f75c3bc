//! # 예측 인사이트 엔진
//!
//! 기록된 이동수단 빈도를 분석해 가장 큰 CO₂ 감축 기회와
//! 월간 절감 전망, 지속가능 목표 도달 시점을 추정합니다.
//! 이름과 달리 통계 모델은 없습니다 — 빈도 집계와 비례식뿐인 규칙 기반 엔진이며,
//! LLM이 꺼져 있어도 항상 동작하는 결정적(deterministic) 폴백이기도 합니다.

use crate::models::{DailyEntry, PredictiveInsight, TransportMode};
use crate::services::co2;

/// 지속가능으로 간주하는 일일 배출 목표 (kg CO₂)
const SUSTAINABLE_DAILY_TARGET: f64 = 0.5;

/// 소수 첫째 자리 반올림 (표시용 숫자 정리)
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// 기록 전체를 받아 예측 인사이트를 생성합니다. 순수 함수입니다.
pub fn generate_predictive_insight(entries: &[DailyEntry]) -> PredictiveInsight {
    // 비교할 데이터가 없으면 분석 대신 안내 문구를 반환합니다
    if entries.len() < 2 {
        return PredictiveInsight {
            opportunity: "Log more days to unlock predictive insights.".to_string(),
            monthly_savings: 0.0,
            time_to_target: "N/A".to_string(),
            reduction_pct: 0,
            current_daily: 0.0,
            projected_daily: 0.0,
            confidence: "Low",
            best_switch: "",
        };
    }

    let total_days = entries.len() as f64;
    let car_days = entries.iter().filter(|e| e.transport == TransportMode::Car).count() as f64;
    let public_days =
        entries.iter().filter(|e| e.transport == TransportMode::Public).count() as f64;

    let total_co2: f64 = entries.iter().map(|e| e.co2_emitted).sum();
    let current_daily = total_co2 / total_days;

    // 가장 큰 감축 기회: 자가용이 있으면 자가용→자전거, 아니면 대중교통→자전거
    let (opportunity, savings_per_switch, best_switch) = if car_days > 0.0 {
        let pct = (car_days / total_days * 100.0).round() as i64;
        (
            format!(
                "Switch {} car trips → cycling ({}% of your commutes are high-emission)",
                car_days as i64, pct
            ),
            co2::daily_co2(TransportMode::Car) - co2::daily_co2(TransportMode::Cycle),
            "cycle",
        )
    } else if public_days > 0.0 {
        (
            format!(
                "Switch {} transit trips → cycling for near-zero emissions",
                public_days as i64
            ),
            co2::daily_co2(TransportMode::Public) - co2::daily_co2(TransportMode::Cycle),
            "cycle",
        )
    } else {
        (
            "You're already at near-zero transport emissions. Maintain this streak!".to_string(),
            0.0,
            "",
        )
    };

    // 월간 절감 전망: 주당 전환 가능 횟수 × 회당 절감량 × 4.3주
    let switchable_days = if car_days > 0.0 { car_days } else { public_days };
    let weekly_rate = switchable_days / total_days * 7.0;
    let monthly_savings = round1(weekly_rate * savings_per_switch * 4.3);

    let projected_daily = if switchable_days > 0.0 {
        (current_daily - switchable_days * savings_per_switch / total_days).max(0.0)
    } else {
        current_daily
    };

    // 지속가능 목표까지 걸리는 시간: 주당 최대 3회 전환을 가정한 감축 속도로 추정
    let gap = current_daily - SUSTAINABLE_DAILY_TARGET;
    let time_to_target = if gap > 0.0 {
        let reduction_per_week = savings_per_switch * weekly_rate.min(3.0) / 7.0;
        if reduction_per_week > 0.0 {
            let weeks_needed = (gap / reduction_per_week).ceil() as i64;
            if weeks_needed <= 1 {
                "~1 week".to_string()
            } else if weeks_needed <= 4 {
                format!("~{} weeks", weeks_needed)
            } else {
                format!("~{} months", (weeks_needed as f64 / 4.0).ceil() as i64)
            }
        } else {
            "Explore alternative transport options".to_string()
        }
    } else {
        "Already sustainable!".to_string()
    };

    let reduction_pct = if current_daily > 0.0 {
        ((current_daily - projected_daily) / current_daily * 100.0).round() as i64
    } else {
        0
    };

    let confidence = if entries.len() >= 14 {
        "High"
    } else if entries.len() >= 5 {
        "Moderate"
    } else {
        "Low"
    };

    PredictiveInsight {
        opportunity,
        monthly_savings,
        time_to_target,
        reduction_pct,
        current_daily: round1(current_daily),
        projected_daily: round1(projected_daily),
        confidence,
        best_switch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransportMode::*;

    fn entry(day: i64, transport: TransportMode) -> DailyEntry {
        DailyEntry {
            id: format!("p-{day}"),
            date: format!("2026-08-{:02}", day),
            timestamp: day * 86_400_000,
            sleep: 7.0,
            energy: 6.0,
            mood: 6.0,
            transport,
            wellness_score: 65,
            co2_emitted: co2::daily_co2(transport),
        }
    }

    #[test]
    fn too_little_data_returns_placeholder() {
        let insight = generate_predictive_insight(&[entry(1, Car)]);
        assert_eq!(insight.confidence, "Low");
        assert_eq!(insight.time_to_target, "N/A");
        assert_eq!(insight.monthly_savings, 0.0);
    }

    #[test]
    fn car_heavy_history_suggests_cycling() {
        let entries: Vec<_> = (1..=5).map(|d| entry(d, Car)).collect();
        let insight = generate_predictive_insight(&entries);
        assert_eq!(insight.best_switch, "cycle");
        assert!(insight.opportunity.contains("5 car trips"));
        assert!(insight.opportunity.contains("100%"));
        // 매일 자가용: 일평균 2.5kg, 전부 전환하면 0kg
        assert_eq!(insight.current_daily, 2.5);
        assert_eq!(insight.projected_daily, 0.0);
        assert_eq!(insight.reduction_pct, 100);
        // 주 7회 × 2.5kg × 4.3주 = 75.25 → 75.3
        assert_eq!(insight.monthly_savings, 75.3);
        assert_eq!(insight.confidence, "Moderate");
    }

    #[test]
    fn transit_opportunity_when_no_car_days() {
        let entries: Vec<_> = (1..=6).map(|d| entry(d, Public)).collect();
        let insight = generate_predictive_insight(&entries);
        assert!(insight.opportunity.contains("transit trips"));
        assert_eq!(insight.best_switch, "cycle");
        // 일평균 0.5kg — 이미 목표선이라 도달 시간은 달성 문구
        assert_eq!(insight.time_to_target, "Already sustainable!");
    }

    #[test]
    fn zero_emission_history_celebrates() {
        let entries: Vec<_> = (1..=4)
            .map(|d| entry(d, if d % 2 == 0 { Walk } else { Cycle }))
            .collect();
        let insight = generate_predictive_insight(&entries);
        assert!(insight.opportunity.contains("near-zero"));
        assert_eq!(insight.best_switch, "");
        assert_eq!(insight.monthly_savings, 0.0);
    }

    #[test]
    fn fourteen_days_reach_high_confidence() {
        let entries: Vec<_> = (1..=14).map(|d| entry(d, Car)).collect();
        let insight = generate_predictive_insight(&entries);
        assert_eq!(insight.confidence, "High");
        // gap = 2.0, 주당 감축 = 2.5 * 3 / 7 ≈ 1.071 → 2주
        assert_eq!(insight.time_to_target, "~2 weeks");
    }
}
