//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다. 현재는 요청 DTO만 포함합니다.

pub mod dto;
