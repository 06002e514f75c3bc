//! # CO₂ 추정
//!
//! 이동수단별 1일 통근 배출량(kg CO₂) 고정 테이블과
//! "자가용 대비 절감량" 계산, 주간 지속가능성 점수를 제공합니다.

use crate::models::TransportMode;

/// 자가용 1일 통근 배출량 (kg) — 절감량 계산의 기준값
const CAR_BASELINE_KG: f64 = 2.5;

/// 이동수단별 1일 통근 배출량 (kg CO₂)
pub fn daily_co2(transport: TransportMode) -> f64 {
    match transport {
        TransportMode::Walk => 0.0,
        TransportMode::Cycle => 0.0,
        TransportMode::Public => 0.5,
        TransportMode::Car => 2.5,
    }
}

/// 자가용 대신 해당 수단을 썼을 때의 절감량 (kg CO₂)
///
/// 반사실(counterfactual) 비교: `max(0, 자가용 배출량 - 실제 배출량)`.
/// 자가용 자신은 절감량 0입니다.
pub fn co2_savings(transport: TransportMode) -> f64 {
    (CAR_BASELINE_KG - daily_co2(transport)).max(0.0)
}

/// 주간 CO₂ 합계를 0~100 지속가능성 점수로 변환합니다.
///
/// 주 20kg을 "낮은 지속가능성" 기준선으로 두고 선형 감점합니다.
/// 웰니스 점수와 같은 0~100 스케일이라 대시보드에서 나란히 표시됩니다.
pub fn sustainability_score(weekly_co2_sum: f64) -> i64 {
    let threshold = 20.0;
    let score = 100.0 - (weekly_co2_sum / threshold * 100.0);
    (score.round() as i64).clamp(0, 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransportMode::*;

    #[test]
    fn emission_table_is_fixed() {
        assert_eq!(daily_co2(Walk), 0.0);
        assert_eq!(daily_co2(Cycle), 0.0);
        assert_eq!(daily_co2(Public), 0.5);
        assert_eq!(daily_co2(Car), 2.5);
    }

    #[test]
    fn savings_are_relative_to_car() {
        assert_eq!(co2_savings(Cycle), 2.5);
        assert_eq!(co2_savings(Walk), 2.5);
        assert_eq!(co2_savings(Public), 2.0);
        // 자가용 대 자가용은 절감 없음
        assert_eq!(co2_savings(Car), 0.0);
    }

    #[test]
    fn sustainability_score_scales_and_clamps() {
        assert_eq!(sustainability_score(0.0), 100);
        assert_eq!(sustainability_score(10.0), 50);
        assert_eq!(sustainability_score(20.0), 0);
        // 기준선 초과분은 0으로 바닥 처리
        assert_eq!(sustainability_score(35.0), 0);
    }
}
