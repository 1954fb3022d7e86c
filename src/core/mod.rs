//! 코어 인프라 모듈
//!
//! 외부 프레임워크에 노출되는 요청 등록 표면을 담당합니다.

pub mod registry;
