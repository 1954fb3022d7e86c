//! 사용자 도메인 DTO 모듈

pub mod request;
