//! 데이터 전송 객체(DTO) 모듈
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 리소스별로 정의합니다.

pub mod users;
