//! 요청 검증 코어 부트스트랩
//!
//! 환경 설정과 로깅을 초기화하고, 요청 레지스트리를 구성하여
//! 등록 표면을 로그로 노출합니다. HTTP 서버와 디스패치 계층은
//! 이 코어를 소비하는 바깥 프레임워크의 몫입니다.

use dotenv::dotenv;
use env_logger::Env;
use log::info;

use user_request_backend::config::Environment;
use user_request_backend::core::registry::RequestRegistry;

fn main() {
    load_env_file();
    let environment = Environment::current();
    init_logging(&environment);

    info!("🚀 사용자 요청 검증 코어 시작중... ({:?} 환경)", environment);

    // 등록 표면 구성 - 외부 등록 메커니즘이 시작 시 소비하는 테이블
    let registry = RequestRegistry::global();
    for definition in registry.definitions() {
        info!(
            "📋 요청 정의: {} (작업: {}, 필드 {}개)",
            definition.name,
            definition.kind.as_str(),
            definition.schema.len()
        );
    }

    info!(
        "✅ {}개의 요청 정의가 등록 표면에 노출되었습니다",
        registry.definitions().len()
    );
}

/// `.env` 파일을 로드합니다.
///
/// 파일이 없으면 시스템 환경 변수만 사용합니다.
fn load_env_file() {
    let _ = dotenv();
}

/// 로깅을 초기화합니다.
///
/// `RUST_LOG`가 설정되어 있으면 그 값을 사용하고,
/// 없으면 실행 환경의 기본 필터를 사용합니다.
fn init_logging(environment: &Environment) {
    env_logger::Builder::from_env(
        Env::default().default_filter_or(environment.default_log_filter()),
    )
    .init();
}
