//! 사용자 요청 검증·등록 코어
//!
//! 웹 백엔드의 "user" 리소스에 대한 생성/수정/삭제 요청을 정의하고,
//! 검증·정규화한 뒤, 외부 디스패치 계층이 사용할 수 있는 하나의
//! 등록 표면으로 모아주는 계층입니다.
//!
//! # Features
//!
//! - **필드 검증 규칙**: 필수/타입/형식 규칙의 조합 가능한 순수 검사
//! - **요청 디스크립터**: 검증을 통과해야만 존재하는 불변 값 객체
//! - **전체 에러 수집**: 한 번의 시도에서 위반된 모든 필드를 한 번에 보고
//! - **요청 레지스트리**: 고정 순서의 읽기 전용 등록 표면
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Raw Input Map   │ ← 전송 계층이 파싱한 원시 입력 (범위 밖)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   validation     │ ← 필드 규칙 + 스키마 평가 (모든 에러 수집)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Request DTOs     │ ← Create/Update/Delete 디스크립터
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RequestRegistry  │ ← 외부 디스패치 계층에 노출되는 등록 표면
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_request_backend::core::registry::{OperationKind, RequestRegistry};
//!
//! let raw = serde_json::json!({"name": "Ann", "email": "ann@x.com"})
//!     .as_object()
//!     .cloned()
//!     .unwrap();
//!
//! let request = RequestRegistry::global().construct(OperationKind::Create, &raw)?;
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;
pub mod validation;
