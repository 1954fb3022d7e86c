//! # 사용자 관련 요청 DTO 모듈
//!
//! 사용자 리소스에 대한 생성/수정/삭제 요청 디스크립터들을 정의합니다.
//! 각 디스크립터는 정적 필드 스키마와 `construct` 루틴을 노출하며,
//! 검증을 통과해야만 인스턴스가 존재하는 불변 값 객체입니다.
//!
//! ## 공통 정책
//!
//! - 스키마에 없는 필드는 `UnknownField`로 거부 (조용한 데이터 유실 방지)
//! - 위반 사항은 전부 수집되어 한 번에 반환
//! - `null`과 공백뿐인 값은 부재로 취급, 문자열은 trim 정규화

pub mod create_user_request;
pub mod delete_user_request;
pub mod update_user_request;

pub use create_user_request::{CreateUserRequest, CREATE_USER_SCHEMA};
pub use delete_user_request::{DeleteUserRequest, DELETE_USER_SCHEMA};
pub use update_user_request::{UpdateUserRequest, UPDATE_USER_SCHEMA};
