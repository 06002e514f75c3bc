//! # 경로 탐색 프록시
//!
//! 프론트엔드 지도의 경로 요청을 업스트림 directions API로 중계합니다.
//! API 키를 브라우저에 노출하지 않는 것이 이 프록시의 존재 이유입니다.
//!
//! 업스트림이 실패하면(키 없음, 타임아웃, 비정상 응답) 두 지점을 잇는
//! 직선 경로와 대원거리(haversine) 근사 거리를 GeoJSON 형태로 돌려줍니다.
//! 지도에 "무언가"는 항상 그려지도록 하는 우아한 성능 저하 정책입니다.

use crate::models::RouteRequest;
use serde_json::{json, Value};
use std::time::Duration;

/// 업스트림 directions API 호출 제한 시간
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

/// 직선 거리 → 실제 도로 거리 보정 계수
const ROAD_FACTOR: f64 = 1.2;

/// 두 좌표 사이의 대원거리(km)를 계산합니다 (haversine 공식).
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let r = 6371.0; // 지구 반지름 (km)
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    r * c
}

/// 경로 요청을 업스트림에 중계하고, 실패하면 직선 폴백을 반환합니다.
///
/// 호출 전에 좌표가 2개 이상인지는 핸들러가 검증합니다 (여기서는 가정).
/// 반환값은 GeoJSON 호환 `serde_json::Value` — 업스트림 응답은 그대로 통과시키고
/// 폴백일 때만 직접 조립합니다.
pub async fn fetch_route(
    client: &reqwest::Client,
    upstream_url: &str,
    api_key: Option<&str>,
    req: &RouteRequest,
) -> Value {
    let start = req.coordinates[0];
    let end = req.coordinates[req.coordinates.len() - 1];

    // 키가 없으면 업스트림 호출 자체를 건너뜁니다 (로컬 데모 모드)
    let Some(key) = api_key else {
        tracing::warn!("Routing API key not configured, using straight-line fallback");
        return fallback_route(start, end);
    };

    let res = client
        .post(upstream_url)
        .timeout(UPSTREAM_TIMEOUT)
        .header("Authorization", key)
        .json(req)
        .send()
        .await;

    match res {
        Ok(res) if res.status().is_success() => match res.json::<Value>().await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!("Routing API returned unparsable body: {}", err);
                fallback_route(start, end)
            }
        },
        Ok(res) => {
            tracing::warn!("Routing API failed with {}, using fallback", res.status());
            fallback_route(start, end)
        }
        Err(err) => {
            tracing::warn!("Routing API unreachable: {}, using fallback", err);
            fallback_route(start, end)
        }
    }
}

/// 직선 경로 폴백 — 업스트림 GeoJSON 응답과 같은 모양으로 조립합니다.
///
/// 좌표는 [경도, 위도] 순서이므로 haversine에는 뒤집어 넣습니다.
/// summary.distance는 업스트림과 동일하게 미터 단위입니다.
fn fallback_route(start: [f64; 2], end: [f64; 2]) -> Value {
    let dist_km = haversine_km(start[1], start[0], end[1], end[0]) * ROAD_FACTOR;

    json!({
        "type": "FeatureCollection",
        "features": [{
            "geometry": {
                "type": "LineString",
                "coordinates": [start, end]
            },
            "properties": {
                "summary": { "distance": dist_km * 1000.0 }
            }
        }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn haversine_matches_known_distance() {
        // 서울시청 ↔ 부산시청: 약 325km
        let d = haversine_km(37.5663, 126.9779, 35.1798, 129.0750);
        assert!((320.0..335.0).contains(&d), "got {d}");

        // 같은 점은 거리 0
        assert_eq!(haversine_km(37.0, 127.0, 37.0, 127.0), 0.0);
    }

    #[test]
    fn fallback_is_a_single_straight_feature() {
        // 약 1도 경도 차이 (위도 37도 부근)
        let v = fallback_route([126.9779, 37.5663], [127.9779, 37.5663]);
        assert_eq!(v["type"], "FeatureCollection");
        assert_eq!(v["features"][0]["geometry"]["type"], "LineString");

        let meters = v["features"][0]["properties"]["summary"]["distance"]
            .as_f64()
            .unwrap();
        // 직선 약 88km × 1.2 보정 ≈ 106km
        assert!((90_000.0..120_000.0).contains(&meters), "got {meters}");
    }
}
