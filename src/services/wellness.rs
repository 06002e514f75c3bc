//! # 웰니스 점수 계산
//!
//! 수면/에너지/기분 세 가지 평점(각 0~10)을 0~100 종합 점수로 변환합니다.
//!
//! 공식: `round((sleep*0.4 + energy*0.3 + mood*0.3) * 10)`, 이후 [0,100]으로 clamp.
//! 범위를 벗어난 입력도 거부하지 않고 clamp로 조용히 보정합니다
//! (입력 검증은 프론트엔드 슬라이더의 몫이라는 정책).

/// 웰니스 점수를 계산합니다. 순수 함수이며 실패하지 않습니다.
///
/// 가중치: 수면 40%, 에너지 30%, 기분 30%.
/// 예: 수면 8, 에너지 9, 기분 8 → (3.2 + 2.7 + 2.4) * 10 = 83점
pub fn wellness_score(sleep: f64, energy: f64, mood: f64) -> i64 {
    let raw = sleep * 0.4 + energy * 0.3 + mood * 0.3;
    // .round()는 f64를 반환하므로 정수로 캐스팅한 뒤 범위를 보정합니다
    let normalized = (raw * 10.0).round() as i64;
    normalized.clamp(0, 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_weighted_score() {
        // (8*0.4 + 9*0.3 + 8*0.3) * 10 = (3.2 + 2.7 + 2.4) * 10 = 83
        assert_eq!(wellness_score(8.0, 9.0, 8.0), 83);
        assert_eq!(wellness_score(10.0, 10.0, 10.0), 100);
        assert_eq!(wellness_score(0.0, 0.0, 0.0), 0);
    }

    #[test]
    fn clamps_out_of_range_inputs() {
        // 범위 밖 입력은 거부하지 않고 결과를 [0,100]으로 보정
        assert_eq!(wellness_score(20.0, 20.0, 20.0), 100);
        assert_eq!(wellness_score(-5.0, -5.0, -5.0), 0);
    }

    #[test]
    fn stays_in_bounds_for_fractional_ratings() {
        for s in 0..=20 {
            for e in 0..=20 {
                let score = wellness_score(s as f64 * 0.5, e as f64 * 0.5, 7.3);
                assert!((0..=100).contains(&score));
            }
        }
    }
}
