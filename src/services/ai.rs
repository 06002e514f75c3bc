//! # 로컬 LLM(LM Studio) 클라이언트
//!
//! OpenAI 호환 chat-completions 엔드포인트를 호출해 "심층" 분석 문구를 생성합니다.
//! LLM은 장식용 텍스트 생성일 뿐 정합성에 관여하지 않으므로,
//! 연결 실패/타임아웃/이상한 응답은 모두 결정적 폴백 문구로 대체하고
//! 사용자에게 에러로 보여주지 않습니다 (재시도도 하지 않음).
//!
//! 타임아웃은 8초 — 로컬 모델이 없을 때 UI가 너무 오래 기다리지 않게 하는 값입니다.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// LLM 호출 제한 시간
const LLM_TIMEOUT: Duration = Duration::from_secs(8);

/// chat-completions 요청의 메시지 한 건
#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

/// OpenAI 호환 chat-completions 요청 본문
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
    stream: bool,
}

// 응답은 필요한 경로(choices[0].message.content)만 역직렬화합니다.
// 나머지 필드는 serde가 조용히 무시합니다.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// LLM을 호출하고 응답 텍스트를 반환합니다.
///
/// 어떤 실패든(연결 불가, 타임아웃, 4xx/5xx, 파싱 실패, 빈 응답)
/// `None`으로 수렴합니다 — 호출자가 폴백 문구를 대신 사용합니다.
async fn call_llm(
    client: &reqwest::Client,
    url: &str,
    model: &str,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
) -> Option<String> {
    let body = ChatRequest {
        model: model.to_string(),
        messages,
        temperature,
        max_tokens,
        stream: false,
    };

    let res = client
        .post(url)
        .timeout(LLM_TIMEOUT)
        .json(&body)
        .send()
        .await;

    let res = match res {
        Ok(res) => res,
        Err(err) => {
            tracing::warn!("LM Studio unavailable, using fallback: {}", err);
            return None;
        }
    };

    if !res.status().is_success() {
        tracing::warn!("LM Studio returned {}, using fallback", res.status());
        return None;
    }

    let parsed = match res.json::<ChatResponse>().await {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!("Failed to parse LM Studio response: {}", err);
            return None;
        }
    };

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// 심층 웰니스 분석 문구를 생성합니다. LLM이 없으면 고정 리포트를 반환합니다.
pub async fn deep_wellness_insight(
    client: &reqwest::Client,
    url: &str,
    model: &str,
    correlation_type: &str,
) -> String {
    let messages = vec![
        ChatMessage {
            role: "system",
            content: "You are a behavioral neuroscientist and wellness expert. Provide a deep, \
                      scientific yet accessible analysis of how sleep affects cognitive learning \
                      and daily energy. Use bullet points and focus on neurotransmitters like \
                      adenosine and dopamine. Keep it under 100 words."
                .to_string(),
        },
        ChatMessage {
            role: "user",
            content: format!(
                "Analyze the {} correlation. Data shows 23% increase in efficiency after 8h sleep.",
                correlation_type
            ),
        },
    ];

    match call_llm(client, url, model, messages, 0.7, 150).await {
        Some(text) => text,
        None => deep_wellness_fallback(),
    }
}

/// 이동 거리에 맞는 교통수단 추천 문구를 생성합니다.
pub async fn route_advice(
    client: &reqwest::Client,
    url: &str,
    model: &str,
    distance_km: f64,
) -> String {
    let messages = vec![
        ChatMessage {
            role: "system",
            content: "You are a climate mobility expert. Recommend the lowest carbon transport \
                      for a trip. Respond in under 50 words with numbers. Focus on CO2 savings \
                      compared to a car."
                .to_string(),
        },
        ChatMessage {
            role: "user",
            content: format!("Trip distance is {:.2} km in an urban city.", distance_km),
        },
    ];

    match call_llm(client, url, model, messages, 0.4, 80).await {
        Some(text) => text,
        None => route_advice_fallback(distance_km),
    }
}

fn deep_wellness_fallback() -> String {
    "### Neuro-Correlation Report\n\n\
     - **Adenosine Clearance**: Extended sleep allows for complete clearance of adenosine, \
     reducing \"sleep pressure\" and enhancing synaptic plasticity.\n\
     - **Prefrontal Cortex Optimization**: 8+ hours of rest maximizes blood flow to the PFC, \
     the brain's \"executive center,\" directly improving decision-making speed.\n\
     - **Dopamine Sensitivity**: Consistent rest cycles regulate D2 receptors, ensuring higher \
     motivation levels during cognitive tasks.\n\n\
     *This analysis is based on your behavioral transformation data over the last 14 days.*"
        .to_string()
}

fn route_advice_fallback(distance_km: f64) -> String {
    format!(
        "Using metro instead of a car could save approximately {:.1} kg of CO₂ for this {:.1} km \
         journey. Consider carbon-neutral commute options to reach your 2030 target faster.",
        distance_km * 0.16,
        distance_km
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_fallback_scales_with_distance() {
        // 12km × 0.16 = 1.92 → 소수 1자리로 1.9
        let text = route_advice_fallback(12.0);
        assert!(text.contains("approximately 1.9 kg"));
        assert!(text.contains("12.0 km"));
    }

    #[test]
    fn wellness_fallback_is_deterministic() {
        assert_eq!(deep_wellness_fallback(), deep_wellness_fallback());
        assert!(deep_wellness_fallback().starts_with("### Neuro-Correlation Report"));
    }
}
