//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 경로 (필수)
//! - `HOST`: 서버 바인딩 주소
//! - `PORT`: 서버 포트 번호
//! - `ROUTING_API_URL` / `ROUTING_API_KEY`: 경로 탐색 업스트림 (키는 선택 —
//!   없으면 프록시가 항상 직선 폴백으로 동작하는 로컬 데모 모드)
//! - `LLM_API_URL` / `LLM_MODEL`: 로컬 LM Studio 엔드포인트와 모델 이름

// std::env: Rust 표준 라이브러리의 환경변수 모듈
use std::env;

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후,
/// 애플리케이션 전체에서 공유됩니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 파일 경로 (예: "sqlite:data/lifelens.db")
    pub database_url: String,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 5000)
    /// u16: 0~65535 범위의 부호 없는 16비트 정수. 포트 번호에 딱 맞는 타입입니다.
    pub port: u16,
    /// 경로 탐색 업스트림 API URL (openrouteservice 호환)
    pub routing_api_url: String,
    /// 경로 탐색 API 키 — 브라우저에 노출하지 않기 위해 서버만 보관합니다.
    /// Option인 이유: 키 없이도 폴백 경로로 앱이 동작해야 하기 때문입니다.
    pub routing_api_key: Option<String>,
    /// 로컬 LLM(chat-completions) 엔드포인트 URL
    pub llm_api_url: String,
    /// LLM 모델 이름 (LM Studio에 로드된 모델과 일치해야 함)
    pub llm_model: String,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// # 에러
    /// `DATABASE_URL`은 필수이며, 없으면 에러가 발생합니다.
    /// 나머지 설정은 기본값이 있어 환경변수가 없어도 동작합니다.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            // env::var("KEY"): 환경변수를 읽습니다.
            // 반환 타입은 Result<String, VarError>이며,
            // `?`를 사용해 변수가 없으면 즉시 에러를 반환합니다.
            database_url: env::var("DATABASE_URL")?, // 필수: 없으면 에러

            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            // 포트 번호는 문자열 → 숫자 변환이 필요합니다.
            // .parse(): 문자열을 u16으로 파싱, 실패 시 기본값 5000 사용
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .unwrap_or(5000),

            routing_api_url: env::var("ROUTING_API_URL").unwrap_or_else(|_| {
                "https://api.openrouteservice.org/v2/directions/driving-car/geojson".to_string()
            }),
            // .ok(): Result<String, VarError> → Option<String> 변환
            // 키가 없어도 에러가 아니라 "키 없음" 상태로 취급합니다.
            routing_api_key: env::var("ROUTING_API_KEY").ok(),

            llm_api_url: env::var("LLM_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:1234/v1/chat/completions".to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| "liquid/lfm2.5-1.2b".to_string()),
        })
    }
}
