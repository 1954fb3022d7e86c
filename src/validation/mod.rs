//! # 검증 계층
//!
//! 필드 단위 검증 규칙과 스키마 평가, 그리고 검증 실패 보고 타입을 제공합니다.
//! 모든 요청 디스크립터가 이 계층의 단일 평가 루틴을 공유합니다.

pub mod report;
pub mod rules;
pub mod schema;

pub use report::{FieldError, FieldErrorKind, ValidationReport};
pub use rules::FieldRule;
pub use schema::{evaluate, FieldSchema, NormalizedFields};
