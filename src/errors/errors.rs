//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공합니다.
//! 검증 실패는 필드별 위반 사항을 모두 담은 `ValidationReport`를
//! 그대로 감싸서 상위 계층에 전달합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use user_request_backend::core::registry::{OperationKind, RequestRegistry};
//! use user_request_backend::errors::errors::AppError;
//!
//! fn handle(raw: &serde_json::Map<String, serde_json::Value>) -> Result<(), AppError> {
//!     let request = RequestRegistry::global().construct(OperationKind::Create, raw)?;
//!     dispatch(request);
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::validation::ValidationReport;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (모든 필드 위반 사항 포함)
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationReport),

    /// 설정 관련 에러 (시작 단계)
    #[error("Config error: {0}")]
    ConfigError(String),
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
